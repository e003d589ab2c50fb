use clap::Parser;
use tempotools::midi::{DefaultTransport, MidiError, SysexTransport};
use tempotools::{logging, prompt, sysex};

/// Encode a tempo value and send the SysEx message to a MIDI output port
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() {
    if let Err(err) = logging::init_logger("tempo_to_sysex_send") {
        eprintln!("Logger initialization failed: {}", err);
    }
    let _args = Args::parse();

    let mut engine = DefaultTransport::new();
    let ports = match engine.port_names() {
        Ok(ports) => ports,
        Err(err) => fail(&format!("Unable to enumerate MIDI outputs: {}", err)),
    };
    if ports.is_empty() {
        fail(&MidiError::NoPortsAvailable.to_string());
    }

    let tempo = match prompt::prompt_tempo() {
        Ok(tempo) => tempo,
        Err(err) => fail(&format!("No tempo provided: {}", err)),
    };
    let message = match sysex::encode(tempo) {
        Ok(message) => message,
        Err(err) => fail(&format!("Cannot encode tempo: {}", err)),
    };
    println!(
        "Tempo {} -> SysEx message: {}",
        tempo,
        sysex::format_hex(&message)
    );

    let index = match prompt::prompt_port(&ports) {
        Ok(index) => index,
        Err(err) => fail(&format!("No port selected: {}", err)),
    };

    match engine.send_sysex(index, &message) {
        Ok(()) => {
            log::info!("Sent tempo {} to '{}'", tempo, ports[index]);
            println!("Sent SysEx to '{}'.", ports[index]);
        }
        Err(err) => fail(&format!("Failed to send SysEx: {}", err)),
    }
}

fn fail(msg: &str) -> ! {
    log::error!("{}", msg);
    eprintln!("{}", msg);
    std::process::exit(1);
}
