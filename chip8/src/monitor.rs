use log::{debug, info};

use chipvm::{ListedOpcode, Observation, Observer};

/// # Monitor
/// Writes what the interpreter is doing to the log, naming executed
/// instructions by their listing entry.
#[derive(Default)]
pub struct Monitor {
    listing: Vec<ListedOpcode>,
}

impl Monitor {
    fn describe(&self, executed: &[usize]) -> String {
        executed
            .iter()
            .filter_map(|&i| self.listing.get(i))
            .map(|op| format!("{:03x}:{}", op.addr, op))
            .collect::<Vec<String>>()
            .join(" ")
    }
}

impl Observer for Monitor {
    fn load(&mut self, listing: &[ListedOpcode]) {
        info!("loaded program with {} opcodes", listing.len());
        self.listing = listing.to_vec();
    }

    fn observe(&mut self, observation: &Observation) {
        if !observation.executed.is_empty() {
            debug!("ran {}", self.describe(&observation.executed));
        }
        for (register, value) in &observation.changed_registers {
            debug!("V{:X} = {:#04x}", register, value);
        }
        if let Some(i) = observation.index {
            debug!("I = {:#05x}", i);
        }
    }

    fn reset(&mut self) {
        self.listing.clear();
    }
}
