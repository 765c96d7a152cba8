pub use crate::chip8::{Chip8, Executed};
pub use crate::config::Config;
pub use crate::controller::{Controller, Status};
pub use crate::error::{Error, Result};
pub use crate::framebuffer::FrameBuffer;
pub use crate::instruction::Instruction;
pub use crate::keypad::Execution;
pub use crate::observer::Observation;
pub use crate::peripherals::{Mute, Observer, Peripherals, Renderer, Speaker};
pub use crate::program::ListedOpcode;
pub use crate::scheduler::{Scheduler, Tick};

mod chip8;
mod config;
pub mod constants;
mod controller;
mod error;
mod framebuffer;
mod instruction;
mod keypad;
pub mod memory;
mod observer;
mod opcode;
mod operations;
mod peripherals;
mod program;
pub mod registers;
mod scheduler;
mod state;
pub mod timers;
