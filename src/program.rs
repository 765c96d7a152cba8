use std::fmt;

use crate::constants::PROGRAM_START;

/// One opcode of a loaded program as it sits in memory before anything runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListedOpcode {
    /// Position in the program, counted in opcodes
    pub index: usize,
    pub addr: u16,
    pub opcode: u16,
}

impl fmt::Display for ListedOpcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}", self.opcode)
    }
}

/// Splits a program into the opcodes it would contain if executed in order.
///
/// A trailing odd byte doesn't make up a whole opcode and isn't listed.
pub fn listing(program: &[u8]) -> Vec<ListedOpcode> {
    program
        .chunks_exact(2)
        .enumerate()
        .map(|(index, pair)| ListedOpcode {
            index,
            addr: PROGRAM_START + 2 * index as u16,
            opcode: u16::from(pair[0]) << 8 | u16::from(pair[1]),
        })
        .collect()
}

/// The position of the opcode at `addr` in a listing, if `addr` is in the program region
pub fn index_of(addr: u16) -> Option<usize> {
    addr.checked_sub(PROGRAM_START).map(|offset| offset as usize / 2)
}
