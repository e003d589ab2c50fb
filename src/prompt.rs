//! Interactive prompts shared by the binaries.
//!
//! All parameters are gathered through blocking stdin prompts; invalid
//! input is reported and re-prompted, never silently accepted. Only
//! end-of-input (closed stdin) propagates as an error.

use std::path::PathBuf;

use dialoguer::{Input, Select};

use crate::sysex::{self, MAX_TEMPO, MIN_TEMPO};

/// Result type for prompt operations
pub type Result<T> = dialoguer::Result<T>;

/// Prompts until a tempo in the valid range is entered.
pub fn prompt_tempo() -> Result<u32> {
    loop {
        let raw: String = Input::new()
            .with_prompt(format!("Enter tempo ({}-{})", MIN_TEMPO, MAX_TEMPO))
            .interact_text()?;

        match raw.trim().parse::<u32>() {
            Ok(tempo) if (MIN_TEMPO..=MAX_TEMPO).contains(&tempo) => return Ok(tempo),
            Ok(_) => eprintln!("Tempo must be between {} and {}.", MIN_TEMPO, MAX_TEMPO),
            Err(_) => eprintln!("Please enter a whole number."),
        }
    }
}

/// Prompts until the path of an existing file is entered.
pub fn prompt_midi_path() -> Result<PathBuf> {
    loop {
        let raw: String = Input::new()
            .with_prompt("Enter path to MIDI file")
            .interact_text()?;

        let path = PathBuf::from(raw.trim());
        if !path.exists() {
            eprintln!("File '{}' does not exist. Try again.", path.display());
            continue;
        }
        if !path.is_file() {
            eprintln!("'{}' is not a file. Try again.", path.display());
            continue;
        }
        return Ok(path);
    }
}

/// Presents the enumerated port list and returns the chosen index.
pub fn prompt_port(ports: &[String]) -> Result<usize> {
    Select::new()
        .with_prompt("Select output port")
        .items(ports)
        .default(0)
        .interact()
}

/// Prompts until a parseable hex byte sequence is entered.
pub fn prompt_sysex_message() -> Result<Vec<u8>> {
    loop {
        let raw: String = Input::new()
            .with_prompt("Enter SysEx message bytes (hex, e.g. 'F0 00 01 74 11 14 78 00 78 F7')")
            .interact_text()?;

        match sysex::parse_hex(&raw) {
            Ok(bytes) => return Ok(bytes),
            Err(err) => eprintln!("Invalid SysEx message: {}", err),
        }
    }
}
