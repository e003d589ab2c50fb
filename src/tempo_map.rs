//! Tempo-event extraction from standard MIDI files.
//!
//! The SMF container itself is parsed by midly; this module only
//! interprets the time-division header and tempo meta-events. Tracks are
//! walked in file order and events in parser order, with tick
//! accumulation restarting at each track boundary (deltas are
//! track-relative). Merging multi-track tempo maps is out of scope.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::Path;

use midly::{MetaMessage, Smf, Timing, TrackEventKind};

/// Tempo assumed before the first tempo meta-event (120 BPM).
pub const DEFAULT_US_PER_QUARTER: u32 = 500_000;

/// Custom error type for tempo extraction
#[derive(Debug)]
pub enum TempoMapError {
    /// Path did not resolve to a file
    FileNotFound(String),
    /// Not a valid MIDI container, or no track data
    ParseError(String),
}

impl fmt::Display for TempoMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TempoMapError::FileNotFound(path) => write!(f, "file '{}' does not exist", path),
            TempoMapError::ParseError(msg) => write!(f, "cannot parse MIDI file: {}", msg),
        }
    }
}

impl Error for TempoMapError {}

/// Result type for tempo extraction
pub type Result<T> = std::result::Result<T, TempoMapError>;

/// One tempo change, positioned in accumulated wall-clock time.
#[derive(Debug, Clone, PartialEq)]
pub struct TempoEvent {
    /// Elapsed seconds from the start of the track to this event.
    pub seconds: f64,
    /// Tempo in BPM, rounded half-up for display.
    pub bpm: u32,
    /// Raw microseconds-per-quarter-note value from the meta-event.
    pub us_per_quarter: u32,
}

/// Reads a MIDI file and returns its tempo events in parser order.
pub fn read_tempo_events(path: &Path) -> Result<Vec<TempoEvent>> {
    let data = std::fs::read(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => TempoMapError::FileNotFound(path.display().to_string()),
        _ => TempoMapError::ParseError(format!("{}: {}", path.display(), err)),
    })?;

    let smf =
        Smf::parse(&data).map_err(|err| TempoMapError::ParseError(err.to_string()))?;
    if smf.tracks.is_empty() {
        return Err(TempoMapError::ParseError(
            "file contains no track data".to_string(),
        ));
    }

    Ok(collect_tempo_events(&smf))
}

/// Walks every track and collects `(seconds, bpm)` for each tempo
/// meta-event, scaling tick deltas by the tempo in effect at that point.
pub fn collect_tempo_events(smf: &Smf) -> Vec<TempoEvent> {
    let mut events = Vec::new();

    for track in &smf.tracks {
        let mut elapsed_seconds = 0.0_f64;
        let mut us_per_quarter = DEFAULT_US_PER_QUARTER;

        for event in track {
            let delta = event.delta.as_int() as f64;
            elapsed_seconds += delta * seconds_per_tick(&smf.header.timing, us_per_quarter);

            if let TrackEventKind::Meta(MetaMessage::Tempo(us)) = event.kind {
                us_per_quarter = us.as_int();
                events.push(TempoEvent {
                    seconds: elapsed_seconds,
                    bpm: bpm_from_us_per_quarter(us_per_quarter),
                    us_per_quarter,
                });
            }
        }
    }

    events
}

fn seconds_per_tick(timing: &Timing, us_per_quarter: u32) -> f64 {
    match timing {
        Timing::Metrical(ticks_per_quarter) => {
            us_per_quarter as f64 / 1_000_000.0 / f64::from(ticks_per_quarter.as_int())
        }
        // SMPTE divisions are already wall-clock; tempo does not scale them
        Timing::Timecode(fps, subframes) => {
            1.0 / (fps.as_f32() as f64 * f64::from(*subframes))
        }
    }
}

/// Converts microseconds-per-quarter-note to BPM, rounding half-up.
pub fn bpm_from_us_per_quarter(us_per_quarter: u32) -> u32 {
    (60_000_000.0 / us_per_quarter as f64 + 0.5).floor() as u32
}

/// Formats elapsed seconds as `MM:SS.mmm`, rounding to the millisecond.
pub fn format_timestamp(seconds: f64) -> String {
    let total_millis = (seconds * 1000.0).round() as u64;
    let minutes = total_millis / 60_000;
    let secs = (total_millis % 60_000) / 1000;
    let millis = total_millis % 1000;
    format!("{:02}:{:02}.{:03}", minutes, secs, millis)
}

/// One output line per tempo change: `BPM:MM:SS.mmm`.
pub fn format_event(event: &TempoEvent) -> String {
    format!("{}:{}", event.bpm, format_timestamp(event.seconds))
}
