use crate::midi::{MidiError, Result, SysexTransport};

/// In-memory transport that records every send instead of touching
/// hardware.
pub struct MockEngine {
    ports: Vec<String>,
    pub sent: Vec<(usize, Vec<u8>)>,
}

impl MockEngine {
    pub fn new(ports: Vec<String>) -> Self {
        MockEngine {
            ports,
            sent: Vec::new(),
        }
    }

    pub fn with_default_ports() -> Self {
        Self::new(vec![
            "Mock Port 1".to_string(),
            "Mock Port 2".to_string(),
        ])
    }
}

impl SysexTransport for MockEngine {
    fn port_names(&self) -> Result<Vec<String>> {
        Ok(self.ports.clone())
    }

    fn send_sysex(&mut self, index: usize, bytes: &[u8]) -> Result<()> {
        if self.ports.is_empty() {
            return Err(MidiError::NoPortsAvailable);
        }
        if index >= self.ports.len() {
            return Err(MidiError::InvalidSelection {
                index,
                available: self.ports.len(),
            });
        }
        self.sent.push((index, bytes.to_vec()));
        Ok(())
    }
}
