use clap::Parser;
use tempotools::{logging, prompt, sysex};

/// Encode a tempo value as a device SysEx message
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() {
    if let Err(err) = logging::init_logger("tempo_to_sysex") {
        eprintln!("Logger initialization failed: {}", err);
    }
    let _args = Args::parse();

    let tempo = match prompt::prompt_tempo() {
        Ok(tempo) => tempo,
        Err(err) => fail(&format!("No tempo provided: {}", err)),
    };

    match sysex::encode(tempo) {
        Ok(message) => {
            let hex = sysex::format_hex(&message);
            log::info!("Encoded tempo {} as {}", tempo, hex);
            println!("Tempo {} -> SysEx message: {}", tempo, hex);
        }
        Err(err) => fail(&format!("Cannot encode tempo: {}", err)),
    }
}

fn fail(msg: &str) -> ! {
    log::error!("{}", msg);
    eprintln!("{}", msg);
    std::process::exit(1);
}
