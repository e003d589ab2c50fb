use clap::Parser;
use tempotools::{logging, prompt, tempo_map};

/// List the tempo-change events of a MIDI file with timestamps
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() {
    if let Err(err) = logging::init_logger("extract_tempo_events") {
        eprintln!("Logger initialization failed: {}", err);
    }
    let _args = Args::parse();

    let path = match prompt::prompt_midi_path() {
        Ok(path) => path,
        Err(err) => fail(&format!("No path provided: {}", err)),
    };

    let events = match tempo_map::read_tempo_events(&path) {
        Ok(events) => events,
        Err(err) => fail(&err.to_string()),
    };
    log::info!(
        "Read {} tempo events from '{}'",
        events.len(),
        path.display()
    );

    if events.is_empty() {
        println!("No tempo events found in the provided MIDI file.");
        println!("Tempo events: 0, Output lines: 0 (OK)");
        return;
    }

    let mut output_lines = 0;
    for event in &events {
        println!("{}", tempo_map::format_event(event));
        output_lines += 1;
    }

    let status = if output_lines == events.len() {
        "OK"
    } else {
        "MISMATCH"
    };
    println!(
        "Tempo events: {}, Output lines: {} ({})",
        events.len(),
        output_lines,
        status
    );
}

fn fail(msg: &str) -> ! {
    log::error!("{}", msg);
    eprintln!("{}", msg);
    std::process::exit(1);
}
