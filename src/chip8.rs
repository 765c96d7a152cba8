use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::error::Result;
use crate::framebuffer::FrameBuffer;
use crate::instruction::Instruction;
use crate::keypad::Execution;
use crate::memory::Memory;
use crate::program;
use crate::registers::Registers;
use crate::state::State;
use crate::timers::Timers;

/// A single executed instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Executed {
    /// Where the opcode was fetched from
    pub addr: u16,
}

impl Executed {
    /// The position of the instruction in the loaded program, `None` if it ran
    /// from below 0x200
    pub fn index(&self) -> Option<usize> {
        program::index_of(self.addr)
    }
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`: memory, registers, timers, frame buffer and keypad
///  - the `rng` random bytes are drawn from
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the CPU one instruction at a time
/// - advancing its timers
/// - inspecting its frame buffer for rendering by some display
pub struct Chip8 {
    config: Config,
    state: State,
    rng: StdRng,
}

impl Chip8 {
    pub fn new(config: Config) -> Self {
        Chip8 {
            config,
            state: State::new(&config),
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a Chip-8 whose random numbers are reproducible
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Chip8 {
            config,
            state: State::new(&config),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Zeroes everything and reloads the sprite sheet
    pub fn reset(&mut self) {
        debug!("resetting");
        self.state = State::new(&self.config);
    }

    /// Resets then copies a program into memory at 0x200
    ///
    /// A rejected program leaves the machine as it was.
    ///
    /// # Arguments
    /// * `program` the raw bytes of a ROM
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        let mut state = State::new(&self.config);
        state.memory.load_program(program)?;
        self.state = state;
        debug!("reset and loaded {} byte program", program.len());
        Ok(())
    }

    /// Advances the CPU by a single instruction
    /// - does nothing while awaiting a keypress
    /// - fetches the opcode at the pc and moves the pc past it
    /// - decodes and executes the opcode
    pub fn step(&mut self) -> Option<Executed> {
        if self.state.keypad.is_awaiting_key() {
            return None;
        }

        let addr = self.state.registers.pc;
        let opcode = self.state.memory.read_word(addr);
        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            opcode,
            self.state.registers.v,
            self.state.registers.i,
            addr
        );
        self.state.registers.pc = addr.wrapping_add(2);
        Instruction::decode(opcode).execute(&mut self.state, &mut self.rng);

        Some(Executed { addr })
    }

    /// Set the pressed status of key
    ///
    /// A press while awaiting a key writes it into the waiting register and
    /// resumes execution.
    ///
    /// # Arguments
    /// * `key` the keypad code 0x0..0xF
    /// * `pressed` whether the key went down or up
    pub fn set_key(&mut self, key: u8, pressed: bool) -> Result<()> {
        if let Some(register) = self.state.keypad.set_key(key, pressed)? {
            self.state.registers.set(register, key);
        }
        Ok(())
    }

    pub fn is_pressed(&self, key: u8) -> bool {
        self.state.keypad.is_pressed(key)
    }

    pub fn execution(&self) -> Execution {
        self.state.keypad.execution()
    }

    pub fn is_awaiting_key(&self) -> bool {
        self.state.keypad.is_awaiting_key()
    }

    /// Decrements the timers
    ///
    /// Returns true if the sound timer just ran out.
    pub fn advance_timers(&mut self) -> bool {
        let beep = self.state.timers.tick();
        if beep {
            debug!("sound timer ran out");
        }
        beep
    }

    /// Returns the FrameBuffer if the display should be redrawn
    pub fn take_frame(&mut self) -> Option<&FrameBuffer> {
        if self.state.frame_buffer.take_dirty() {
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    pub fn registers(&self) -> &Registers {
        &self.state.registers
    }

    pub fn timers(&self) -> &Timers {
        &self.state.timers
    }

    pub fn memory(&self) -> &Memory {
        &self.state.memory
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
