use crate::config::Config;
use crate::framebuffer::FrameBuffer;
use crate::keypad::Keypad;
use crate::memory::Memory;
use crate::registers::Registers;
use crate::timers::Timers;

/// Everything a running program can observe or change
///
/// ## CPU
/// - `registers` V0..VF, I, the pc and the call stack
/// - `timers` the delay and sound countdowns
///
/// ## Memory
/// - `memory` 4096 bytes with the sprite sheet at 0x000 and the program at 0x200
/// - `frame_buffer` the contents of the next frame to be drawn
///
/// ## Input
/// - `keypad` the pressed status of keys 0..F
///     - emulation halts while some register is waiting on a key
#[derive(Clone)]
pub struct State {
    pub memory: Memory,
    pub registers: Registers,
    pub timers: Timers,
    pub frame_buffer: FrameBuffer,
    pub keypad: Keypad,
}

impl State {
    pub fn new(config: &Config) -> Self {
        State {
            memory: Memory::new(),
            registers: Registers::new(),
            timers: Timers::new(),
            frame_buffer: FrameBuffer::new(config.display_width(), config.display_height()),
            keypad: Keypad::new(),
        }
    }
}

impl Default for State {
    fn default() -> Self {
        State::new(&Config::default())
    }
}
