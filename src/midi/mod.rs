//! MIDI output transport for the SysEx helpers.
//!
//! The transport is kept behind a narrow trait so that port selection
//! and message assembly can be tested without real hardware:
//! - [`SysexTransport`] trait for enumerating ports and sending raw bytes
//! - [`MidirEngine`] for real device communication via midir
//! - [`MockEngine`] for testing
//!
mod engine;
pub mod midir_engine;
pub mod mock_engine;

// Re-export main types from engine
pub use engine::{MidiError, Result, SysexTransport};

// Re-export concrete implementations
pub use midir_engine::MidirEngine;
pub use mock_engine::MockEngine;

// Set default transport type
pub type DefaultTransport = MidirEngine;

/// Renders the enumerated port list, one line per port, numbered with
/// the same indices [`SysexTransport::send_sysex`] accepts and
/// [`MidiError::InvalidSelection`] reports.
pub fn format_port_list(ports: &[String]) -> String {
    let mut listing = String::from("Available MIDI output ports:\n");
    for (index, name) in ports.iter().enumerate() {
        listing.push_str(&format!("  {}: {}\n", index, name));
    }
    listing
}
