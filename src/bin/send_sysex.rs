use clap::Parser;
use tempotools::midi::{self, DefaultTransport, MidiError, SysexTransport};
use tempotools::{logging, prompt, sysex};

/// Send a hex-encoded SysEx message to a MIDI output port
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// List available MIDI output ports and exit
    #[arg(long)]
    port_list: bool,
}

fn main() {
    if let Err(err) = logging::init_logger("send_sysex") {
        eprintln!("Logger initialization failed: {}", err);
    }
    let args = Args::parse();

    let mut engine = DefaultTransport::new();
    let ports = match engine.port_names() {
        Ok(ports) => ports,
        Err(err) => fail(&format!("Unable to enumerate MIDI outputs: {}", err)),
    };

    if args.port_list {
        print!("{}", midi::format_port_list(&ports));
        return;
    }
    if ports.is_empty() {
        fail(&MidiError::NoPortsAvailable.to_string());
    }

    print!("{}", midi::format_port_list(&ports));
    let index = match prompt::prompt_port(&ports) {
        Ok(index) => index,
        Err(err) => fail(&format!("No port selected: {}", err)),
    };
    let message = match prompt::prompt_sysex_message() {
        Ok(message) => message,
        Err(err) => fail(&format!("No SysEx message provided: {}", err)),
    };

    // Pass-through: the bytes go out exactly as entered, markers or not
    match engine.send_sysex(index, &message) {
        Ok(()) => {
            let hex = sysex::format_hex(&message);
            log::info!("Sent SysEx to '{}': {}", ports[index], hex);
            println!("Sent SysEx to '{}': {}", ports[index], hex);
        }
        Err(err) => fail(&format!("Failed to send SysEx: {}", err)),
    }
}

fn fail(msg: &str) -> ! {
    log::error!("{}", msg);
    eprintln!("{}", msg);
    std::process::exit(1);
}
