use log::debug;

use crate::error::{Error, Result};

/// Whether the interpreter may execute instructions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    Running,
    /// Suspended until a key is pressed; the key is written to this register
    AwaitingKey(usize),
}

/// # Keypad
/// Chip-8 input is generated with a hexadecimal keypad.
///
/// ```text
/// |1|2|3|C|
/// |4|5|6|D|
/// |7|8|9|E|
/// |A|0|B|F|
/// ```
///
/// Also tracks whether execution is suspended waiting on a key press, since a
/// key press is the only thing that can resume it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    pressed: [bool; 16],
    execution: Execution,
}

impl Keypad {
    pub fn new() -> Self {
        Keypad {
            pressed: [false; 16],
            execution: Execution::Running,
        }
    }

    /// Set the pressed status of a key
    ///
    /// Returns the register the key should be written to if this press resumed
    /// execution.
    ///
    /// # Arguments
    /// * `key` the keypad code 0x0..0xF
    /// * `pressed` whether the key went down or up
    pub fn set_key(&mut self, key: u8, pressed: bool) -> Result<Option<usize>> {
        let slot = self
            .pressed
            .get_mut(key as usize)
            .ok_or(Error::KeyOutOfRange(key))?;
        *slot = pressed;

        match self.execution {
            Execution::AwaitingKey(register) if pressed => {
                debug!("key {:X} resumes execution into V{:X}", key, register);
                self.execution = Execution::Running;
                Ok(Some(register))
            }
            _ => Ok(None),
        }
    }

    /// Values past 0xF can reach here from registers and are never pressed
    pub fn is_pressed(&self, key: u8) -> bool {
        self.pressed.get(key as usize).copied().unwrap_or(false)
    }

    pub fn await_key(&mut self, register: usize) {
        debug!("awaiting key press for V{:X}", register);
        self.execution = Execution::AwaitingKey(register);
    }

    pub fn execution(&self) -> Execution {
        self.execution
    }

    pub fn is_awaiting_key(&self) -> bool {
        self.execution != Execution::Running
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}
