use crate::constants::{FLAG_REGISTER, PROGRAM_START};

/// # Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry, borrow and collision flag
/// - (i) a 16-bit memory address register
/// - (pc) a 16-bit program counter
/// - (stack) return addresses pushed by subroutine calls, unbounded
///
/// Writes to `v` wrap at 256 because they're `u8`; `i` and `pc` are stored as is
/// and only wrap when memory is accessed through them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registers {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    stack: Vec<u16>,
}

impl Registers {
    pub fn new() -> Self {
        Registers {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            stack: Vec::new(),
        }
    }

    pub fn get(&self, register: usize) -> u8 {
        self.v[register]
    }

    pub fn set(&mut self, register: usize, value: u8) {
        self.v[register] = value;
    }

    pub fn set_flag(&mut self, flag: bool) {
        self.v[FLAG_REGISTER] = flag as u8;
    }

    /// if condition then pc += 2
    pub fn skip_if(&mut self, condition: bool) {
        if condition {
            self.pc = self.pc.wrapping_add(2);
        }
    }

    pub fn push(&mut self, addr: u16) {
        self.stack.push(addr);
    }

    /// Returns the most recent return address, or `None` on underflow
    pub fn pop(&mut self) -> Option<u16> {
        self.stack.pop()
    }

    pub fn stack(&self) -> &[u16] {
        &self.stack
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}
