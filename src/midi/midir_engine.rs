use crate::midi::{MidiError, Result, SysexTransport};
use log::{debug, info};
use midir::MidiOutput;

/// Real MIDI output transport backed by midir.
pub struct MidirEngine {
    client_name: String,
}

impl MidirEngine {
    pub fn new() -> Self {
        MidirEngine {
            client_name: "tempotools-out".to_string(),
        }
    }

    fn output(&self) -> Result<MidiOutput> {
        MidiOutput::new(&self.client_name)
            .map_err(|err| MidiError::ConnectionError(err.to_string()))
    }
}

impl Default for MidirEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SysexTransport for MidirEngine {
    fn port_names(&self) -> Result<Vec<String>> {
        let midi_out = self.output()?;
        let ports = midi_out.ports();
        Ok(ports
            .iter()
            .filter_map(|port| midi_out.port_name(port).ok())
            .collect())
    }

    fn send_sysex(&mut self, index: usize, bytes: &[u8]) -> Result<()> {
        let midi_out = self.output()?;
        let ports = midi_out.ports();

        if ports.is_empty() {
            return Err(MidiError::NoPortsAvailable);
        }
        if index >= ports.len() {
            return Err(MidiError::InvalidSelection {
                index,
                available: ports.len(),
            });
        }

        let port = &ports[index];
        let port_name = midi_out.port_name(port).unwrap_or_default();
        debug!("Opening MIDI output port: {}", port_name);

        let mut connection = midi_out
            .connect(port, "tempotools-send")
            .map_err(|err| MidiError::ConnectionError(err.to_string()))?;

        let result = connection
            .send(bytes)
            .map_err(|err| MidiError::SendError(err.to_string()));

        // The connection drops here on both paths, releasing the port
        if result.is_ok() {
            info!("Sent {} bytes to '{}'", bytes.len(), port_name);
        }
        result
    }
}
