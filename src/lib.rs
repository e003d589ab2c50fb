//! Command-line helpers for MIDI tempo data.
//!
//! Three standalone utilities share this library:
//! - `tempo_to_sysex` encodes a BPM value as a device SysEx message
//! - `extract_tempo_events` lists the tempo changes in a MIDI file
//! - `send_sysex` transmits a hex-encoded SysEx message to an output port
//!
//! A fourth binary, `tempo_to_sysex_send`, chains the encoder and the
//! sender. Each binary gathers its parameters through interactive prompts
//! and exits after a single run; nothing is shared at runtime.

pub mod logging;
pub mod midi;
pub mod prompt;
pub mod sysex;
pub mod tempo_map;
