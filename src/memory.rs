use log::warn;

use crate::constants::{MAX_PROGRAM_SIZE, MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET};
use crate::error::{Error, Result};

/// # Memory
/// 4096 bytes of flat addressable memory.
///
/// - 0x000..0x050 the sprite sheet, written on reset
/// - 0x200..0x1000 the program image and its work RAM
///
/// Addresses past the end wrap back around to 0x000, so programs that run
/// their index register off the end never cause a panic.
#[derive(Clone)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        bytes[0..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);
        Memory { bytes }
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[wrap(addr)]
    }

    pub fn write(&mut self, addr: u16, byte: u8) {
        self.bytes[wrap(addr)] = byte;
    }

    /// Reads the big-endian word at `addr` and `addr + 1`.
    pub fn read_word(&self, addr: u16) -> u16 {
        let left = u16::from(self.read(addr));
        let right = u16::from(self.read(addr.wrapping_add(1)));
        left << 8 | right
    }

    /// Copies `len` bytes starting at `addr`, wrapping past the end of memory.
    pub fn read_range(&self, addr: u16, len: usize) -> Vec<u8> {
        (0..len)
            .map(|offset| self.read(addr.wrapping_add(offset as u16)))
            .collect()
    }

    /// Copies a program into memory starting at 0x200.
    ///
    /// Only the program region is touched; callers reset first so nothing from a
    /// previous run survives.
    ///
    /// # Arguments
    /// * `program` the raw bytes of a ROM
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        if program.is_empty() {
            return Err(Error::EmptyProgram);
        }
        if program.len() > MAX_PROGRAM_SIZE {
            return Err(Error::ProgramTooLarge {
                size: program.len(),
                max: MAX_PROGRAM_SIZE,
            });
        }
        let start = PROGRAM_START as usize;
        self.bytes[start..start + program.len()].copy_from_slice(program);
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

fn wrap(addr: u16) -> usize {
    let addr = addr as usize;
    if addr >= MEMORY_SIZE {
        warn!("address {:#06X} is out of range and wraps around", addr);
    }
    addr % MEMORY_SIZE
}
