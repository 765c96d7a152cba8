use crate::registers::Registers;

/// What changed during one tick, for displaying alongside the program
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Observation {
    /// Listing indices of the instructions that ran, each once, in the order they first ran
    pub executed: Vec<usize>,
    /// `(register, value)` for every V register that differs from the last observation
    pub changed_registers: Vec<(usize, u8)>,
    /// The index register, if it differs from the last observation
    pub index: Option<u16>,
    pub pc: u16,
}

/// Remembers the registers as they were last observed so only differences are reported
#[derive(Debug, Clone)]
pub struct RegisterWatch {
    v: [u8; 16],
    i: u16,
}

impl RegisterWatch {
    pub fn new() -> Self {
        RegisterWatch { v: [0; 16], i: 0 }
    }

    /// Forget what was seen; the next observation compares against zeroed registers
    pub fn reset(&mut self) {
        *self = RegisterWatch::new();
    }

    /// Diffs `registers` against the last observation and remembers them
    ///
    /// # Arguments
    /// * `registers` the registers after the tick
    /// * `executed` listing indices in the order the instructions ran, possibly repeated
    pub fn observe(&mut self, registers: &Registers, executed: &[usize]) -> Observation {
        let mut unique = Vec::with_capacity(executed.len());
        for index in executed {
            if !unique.contains(index) {
                unique.push(*index);
            }
        }

        let changed_registers = (0..16)
            .filter(|&r| registers.v[r] != self.v[r])
            .map(|r| (r, registers.v[r]))
            .collect();
        let index = if registers.i != self.i {
            Some(registers.i)
        } else {
            None
        };

        self.v = registers.v;
        self.i = registers.i;

        Observation {
            executed: unique,
            changed_registers,
            index,
            pc: registers.pc,
        }
    }
}

impl Default for RegisterWatch {
    fn default() -> Self {
        Self::new()
    }
}
