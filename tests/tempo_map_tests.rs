use midly::{Format, Header, MetaMessage, Smf, Timing, TrackEvent, TrackEventKind};
use std::path::Path;

use tempotools::tempo_map::{self, TempoMapError, DEFAULT_US_PER_QUARTER};

fn tempo_event(delta: u32, us_per_quarter: u32) -> TrackEvent<'static> {
    TrackEvent {
        delta: delta.into(),
        kind: TrackEventKind::Meta(MetaMessage::Tempo(us_per_quarter.into())),
    }
}

fn metrical_smf(ticks_per_quarter: u16, events: Vec<TrackEvent<'static>>) -> Smf<'static> {
    Smf {
        header: Header {
            format: Format::SingleTrack,
            timing: Timing::Metrical(ticks_per_quarter.into()),
        },
        tracks: vec![events],
    }
}

#[test]
fn test_tempo_changes_scale_following_ticks() {
    let smf = metrical_smf(
        480,
        vec![
            tempo_event(0, 500_000),
            tempo_event(480, 250_000),
            tempo_event(480, 1_000_000),
        ],
    );

    let events = tempo_map::collect_tempo_events(&smf);
    assert_eq!(events.len(), 3);

    let bpms: Vec<u32> = events.iter().map(|e| e.bpm).collect();
    assert_eq!(bpms, vec![120, 240, 60]);

    assert_eq!(tempo_map::format_event(&events[0]), "120:00:00.000");
    // 480 ticks at 500000 us/quarter = half a second
    assert_eq!(tempo_map::format_event(&events[1]), "240:00:00.500");
    // 480 ticks at 250000 us/quarter adds a quarter second
    assert_eq!(tempo_map::format_event(&events[2]), "60:00:00.750");

    for pair in events.windows(2) {
        assert!(pair[1].seconds >= pair[0].seconds);
    }
}

#[test]
fn test_default_tempo_applies_before_first_event() {
    // One quarter note of silence before the first tempo event should be
    // timed at the 120 BPM default
    let smf = metrical_smf(96, vec![tempo_event(96, 400_000)]);

    let events = tempo_map::collect_tempo_events(&smf);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].us_per_quarter, 400_000);
    assert_eq!(events[0].bpm, 150);
    assert_eq!(tempo_map::format_event(&events[0]), "150:00:00.500");
}

#[test]
fn test_non_tempo_events_only_advance_the_clock() {
    let mut smf = metrical_smf(480, Vec::new());
    smf.tracks[0] = vec![
        TrackEvent {
            delta: 480_u32.into(),
            kind: TrackEventKind::Meta(MetaMessage::TrackName(b"ignored")),
        },
        tempo_event(480, 500_000),
    ];

    let events = tempo_map::collect_tempo_events(&smf);
    assert_eq!(events.len(), 1);
    // Both deltas ran at the default tempo: two quarters = one second
    assert_eq!(tempo_map::format_event(&events[0]), "120:00:01.000");
}

#[test]
fn test_file_with_no_tempo_events_yields_empty_list() {
    let smf = metrical_smf(480, Vec::new());
    assert!(tempo_map::collect_tempo_events(&smf).is_empty());
}

#[test]
fn test_tick_accumulation_restarts_per_track() {
    let mut smf = metrical_smf(480, vec![tempo_event(480, 500_000)]);
    smf.tracks.push(vec![tempo_event(480, 500_000)]);

    let events = tempo_map::collect_tempo_events(&smf);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].seconds, events[1].seconds);
}

#[test]
fn test_bpm_rounds_half_up() {
    assert_eq!(tempo_map::bpm_from_us_per_quarter(500_000), 120);
    // 60e6 / 480000 = 125 exactly
    assert_eq!(tempo_map::bpm_from_us_per_quarter(480_000), 125);
    // 60e6 / 444444 = 135.00013... rounds down
    assert_eq!(tempo_map::bpm_from_us_per_quarter(444_444), 135);
    // 60e6 / 430108 = 139.49985... rounds down
    assert_eq!(tempo_map::bpm_from_us_per_quarter(430_108), 139);
    // 60e6 / 430107 = 139.50017... rounds up
    assert_eq!(tempo_map::bpm_from_us_per_quarter(430_107), 140);
    assert_eq!(tempo_map::bpm_from_us_per_quarter(DEFAULT_US_PER_QUARTER), 120);
}

#[test]
fn test_timestamp_formatting_rolls_over_cleanly() {
    assert_eq!(tempo_map::format_timestamp(0.0), "00:00.000");
    assert_eq!(tempo_map::format_timestamp(59.9996), "01:00.000");
    assert_eq!(tempo_map::format_timestamp(61.5), "01:01.500");
    assert_eq!(tempo_map::format_timestamp(600.042), "10:00.042");
}

#[test]
fn test_missing_file_is_reported_as_file_not_found() {
    let path = Path::new("/nonexistent/tempotools-test.mid");
    match tempo_map::read_tempo_events(path) {
        Err(TempoMapError::FileNotFound(reported)) => {
            assert!(reported.contains("tempotools-test.mid"))
        }
        other => panic!("expected FileNotFound, got {:?}", other),
    }
}

#[test]
fn test_garbage_file_is_reported_as_parse_error() {
    let path = std::env::temp_dir().join("tempotools-not-a-midi-file.mid");
    std::fs::write(&path, b"definitely not a midi container").unwrap();

    let result = tempo_map::read_tempo_events(&path);
    std::fs::remove_file(&path).unwrap();

    match result {
        Err(TempoMapError::ParseError(_)) => {}
        other => panic!("expected ParseError, got {:?}", other),
    }
}
