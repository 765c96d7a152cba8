use crate::chip8::Chip8;
use crate::config::validate_cycles;
use crate::error::Result;

/// The outcome of one tick
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tick {
    /// Listing indices of the instructions that ran, in execution order
    pub executed: Vec<usize>,
    /// Whether the sound timer ran out
    pub beep: bool,
}

/// # Scheduler
/// Turns an external clock into instruction cycles.
///
/// Every tick runs up to `cycles_per_tick` instructions, stopping early if one of
/// them suspends execution to wait on a key, then decrements the timers exactly
/// once.
#[derive(Debug, Clone)]
pub struct Scheduler {
    cycles_per_tick: usize,
}

impl Scheduler {
    pub fn new(cycles_per_tick: usize) -> Result<Self> {
        Ok(Scheduler {
            cycles_per_tick: validate_cycles(cycles_per_tick)?,
        })
    }

    pub fn cycles_per_tick(&self) -> usize {
        self.cycles_per_tick
    }

    /// # Arguments
    /// * `cycles` instructions per tick, must be within 1..=30
    pub fn set_cycles_per_tick(&mut self, cycles: usize) -> Result<()> {
        self.cycles_per_tick = validate_cycles(cycles)?;
        Ok(())
    }

    /// Runs a full cycle budget
    pub fn tick(&self, chip8: &mut Chip8) -> Tick {
        self.run(chip8, self.cycles_per_tick)
    }

    /// Runs a single instruction but otherwise behaves like a tick
    pub fn step(&self, chip8: &mut Chip8) -> Tick {
        self.run(chip8, 1)
    }

    fn run(&self, chip8: &mut Chip8, cycles: usize) -> Tick {
        let mut executed = Vec::with_capacity(cycles);
        for _ in 0..cycles {
            match chip8.step() {
                Some(step) => executed.extend(step.index()),
                None => break,
            }
        }

        Tick {
            executed,
            beep: chip8.advance_timers(),
        }
    }
}
