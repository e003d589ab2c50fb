//! SysEx encoding for the tempo command set.
//!
//! The target device takes its tempo as a fixed 10-byte message: start
//! marker, a five-byte manufacturer/device/command header, a two-byte
//! 7-bit payload, a checksum and the end marker. Everything in this
//! module is pure; printing and transmission live elsewhere.

use std::error::Error;
use std::fmt;

/// Lowest tempo the device accepts.
pub const MIN_TEMPO: u32 = 10;
/// Highest tempo the device accepts.
pub const MAX_TEMPO: u32 = 255;

pub const SYSEX_START: u8 = 0xF0;
pub const SYSEX_END: u8 = 0xF7;

/// Manufacturer id, device id and command id preceding the payload.
const HEADER: [u8; 5] = [0x00, 0x01, 0x74, 0x11, 0x14];

/// Total length of an encoded tempo message.
pub const MESSAGE_LEN: usize = 10;

/// Custom error type for SysEx encoding and hex parsing
#[derive(Debug, Clone, PartialEq)]
pub enum SysexError {
    /// Tempo outside the device's accepted range
    InvalidTempo(u32),
    /// Hex input that does not describe a byte sequence
    MalformedHex(String),
    /// Byte sequence that is not a valid tempo message
    MalformedMessage(String),
}

impl fmt::Display for SysexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SysexError::InvalidTempo(tempo) => write!(
                f,
                "tempo {} is outside the valid range {}-{}",
                tempo, MIN_TEMPO, MAX_TEMPO
            ),
            SysexError::MalformedHex(msg) => write!(f, "malformed hex input: {}", msg),
            SysexError::MalformedMessage(msg) => write!(f, "malformed SysEx message: {}", msg),
        }
    }
}

impl Error for SysexError {}

/// Result type for SysEx operations
pub type Result<T> = std::result::Result<T, SysexError>;

/// Splits a tempo into its little-endian 7-bit payload bytes.
pub fn tempo_payload(tempo: u32) -> (u8, u8) {
    let lsb = (tempo & 0x7F) as u8;
    let msb = ((tempo >> 7) & 0x7F) as u8;
    (lsb, msb)
}

/// XOR checksum over `data`, masked to 7 bits so it stays a valid MIDI
/// data byte.
pub fn checksum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, byte| acc ^ byte) & 0x7F
}

/// Builds the full tempo message, checksum included.
///
/// The checksum covers the whole body up to and including the payload,
/// start marker included. Same tempo in, same bytes out, every call.
pub fn encode(tempo: u32) -> Result<Vec<u8>> {
    if !(MIN_TEMPO..=MAX_TEMPO).contains(&tempo) {
        return Err(SysexError::InvalidTempo(tempo));
    }

    let (lsb, msb) = tempo_payload(tempo);
    let mut message = Vec::with_capacity(MESSAGE_LEN);
    message.push(SYSEX_START);
    message.extend_from_slice(&HEADER);
    message.push(lsb);
    message.push(msb);
    message.push(checksum(&message));
    message.push(SYSEX_END);
    Ok(message)
}

/// Inverse of [`encode`]: verifies markers, header and checksum, then
/// recovers the tempo exactly.
pub fn decode(message: &[u8]) -> Result<u32> {
    if message.len() != MESSAGE_LEN {
        return Err(SysexError::MalformedMessage(format!(
            "expected {} bytes, got {}",
            MESSAGE_LEN,
            message.len()
        )));
    }
    if message[0] != SYSEX_START || message[MESSAGE_LEN - 1] != SYSEX_END {
        return Err(SysexError::MalformedMessage(
            "missing start or end marker".to_string(),
        ));
    }
    if message[1..6] != HEADER {
        return Err(SysexError::MalformedMessage(
            "unexpected header bytes".to_string(),
        ));
    }

    let expected = checksum(&message[..8]);
    if message[8] != expected {
        return Err(SysexError::MalformedMessage(format!(
            "checksum {:02X} does not match computed {:02X}",
            message[8], expected
        )));
    }

    let tempo = message[6] as u32 | ((message[7] as u32) << 7);
    if !(MIN_TEMPO..=MAX_TEMPO).contains(&tempo) {
        return Err(SysexError::InvalidTempo(tempo));
    }
    Ok(tempo)
}

/// Renders bytes as space-separated uppercase hex pairs,
/// e.g. `F0 00 01 74 11 14 78 00 78 F7`.
pub fn format_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{:02X}", byte))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses a textual SysEx message into raw bytes.
///
/// Tokens may be separated by whitespace or commas and may carry a `0x`
/// prefix. A single run of digits with no separators is split into
/// two-digit pairs, so `F000016A` and `F0 00 01 6A` parse the same.
pub fn parse_hex(raw: &str) -> Result<Vec<u8>> {
    let sanitized = raw.replace(',', " ");
    let mut tokens: Vec<String> = sanitized.split_whitespace().map(str::to_string).collect();

    if tokens.len() <= 1 {
        let stripped: String = sanitized.chars().filter(|c| !c.is_whitespace()).collect();
        if stripped.len() % 2 != 0 {
            return Err(SysexError::MalformedHex(
                "message must have an even number of hex digits".to_string(),
            ));
        }
        tokens = stripped
            .as_bytes()
            .chunks(2)
            .map(|pair| String::from_utf8_lossy(pair).into_owned())
            .collect();
    }

    let mut bytes = Vec::with_capacity(tokens.len());
    for token in &tokens {
        let lowered = token.to_lowercase();
        let digits = lowered.strip_prefix("0x").unwrap_or(&lowered);
        if digits.is_empty() {
            return Err(SysexError::MalformedHex(format!("empty token '{}'", token)));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| SysexError::MalformedHex(format!("'{}' is not a hex byte", token)))?;
        if value > 0xFF {
            return Err(SysexError::MalformedHex(format!(
                "'{}' is out of range 00-FF",
                token
            )));
        }
        bytes.push(value as u8);
    }

    if bytes.is_empty() {
        return Err(SysexError::MalformedHex(
            "message cannot be empty".to_string(),
        ));
    }
    Ok(bytes)
}
