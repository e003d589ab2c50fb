use std::error::Error;
use std::fmt;

/// Custom error type for MIDI transport operations
#[derive(Debug)]
pub enum MidiError {
    /// The transport found no output ports to send to
    NoPortsAvailable,
    /// Port index outside the enumerated list
    InvalidSelection { index: usize, available: usize },
    /// Error when opening a port or the transport itself
    ConnectionError(String),
    /// Error when sending bytes to an open port
    SendError(String),
}

impl fmt::Display for MidiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MidiError::NoPortsAvailable => write!(f, "no MIDI output ports available"),
            MidiError::InvalidSelection { index, available } => write!(
                f,
                "port index {} is out of range ({} ports available)",
                index, available
            ),
            MidiError::ConnectionError(msg) => write!(f, "MIDI connection error: {}", msg),
            MidiError::SendError(msg) => write!(f, "MIDI send error: {}", msg),
        }
    }
}

impl Error for MidiError {}

/// Result type for MIDI transport operations
pub type Result<T> = std::result::Result<T, MidiError>;

/// Trait defining the interface to the MIDI output transport
pub trait SysexTransport {
    /// Names of the available output ports, stably ordered for one run
    fn port_names(&self) -> Result<Vec<String>>;

    /// Sends raw bytes, unmodified, to the port at `index`.
    ///
    /// The index is validated before any device handle is opened; the
    /// handle is released before this returns, on every path.
    fn send_sysex(&mut self, index: usize, bytes: &[u8]) -> Result<()>;
}
