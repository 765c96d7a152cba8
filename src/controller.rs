use std::io::Read;

use log::{debug, warn};

use crate::chip8::Chip8;
use crate::config::Config;
use crate::error::Result;
use crate::observer::RegisterWatch;
use crate::peripherals::Peripherals;
use crate::program::{self, ListedOpcode};
use crate::scheduler::{Scheduler, Tick};

/// Whether ticks advance the program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Nothing runs and key presses are ignored
    Stopped,
    Running,
    /// Nothing runs until `play`, but single steps and key presses are allowed
    Paused,
}

/// # Controller
/// Play, pause and step through a program, reporting everything that happens
/// to the peripherals.
///
/// Drive it by calling `tick` from a fixed rate clock, never from more than one
/// place at once. Key events go through `set_key` and only ever release a
/// suspended interpreter; they never run instructions themselves.
pub struct Controller {
    chip8: Chip8,
    scheduler: Scheduler,
    watch: RegisterWatch,
    program: Option<Vec<u8>>,
    listing: Vec<ListedOpcode>,
    status: Status,
}

impl Controller {
    pub fn new(config: Config) -> Result<Self> {
        Controller::with_chip8(Chip8::new(config))
    }

    /// Wraps an existing interpreter, taking the cycle budget from its config
    pub fn with_chip8(chip8: Chip8) -> Result<Self> {
        Ok(Controller {
            scheduler: Scheduler::new(chip8.config().cycles_per_tick())?,
            chip8,
            watch: RegisterWatch::new(),
            program: None,
            listing: Vec::new(),
            status: Status::Stopped,
        })
    }

    /// Resets and loads a program, optionally starting it straight away
    ///
    /// # Arguments
    /// * `program` the raw bytes of a ROM
    /// * `autoplay` whether to start running immediately
    /// * `peripherals` told about the reset and the new program
    pub fn load(
        &mut self,
        program: &[u8],
        autoplay: bool,
        peripherals: &mut Peripherals,
    ) -> Result<()> {
        self.chip8.load_program(program)?;
        self.clear_peripherals(peripherals);

        self.listing = program::listing(program);
        peripherals.observer.load(&self.listing);
        self.program = Some(program.to_vec());

        self.status = if autoplay {
            Status::Running
        } else {
            Status::Stopped
        };
        debug!("loaded program; {:?}", self.status);
        Ok(())
    }

    /// Reads a whole ROM from `reader` and loads it
    pub fn load_rom(
        &mut self,
        reader: &mut dyn Read,
        autoplay: bool,
        peripherals: &mut Peripherals,
    ) -> Result<()> {
        let mut program = Vec::new();
        reader.read_to_end(&mut program)?;
        self.load(&program, autoplay, peripherals)
    }

    pub fn play(&mut self) {
        if self.is_loaded() && self.status != Status::Running {
            debug!("playing");
            self.status = Status::Running;
        }
    }

    pub fn pause(&mut self) {
        if self.is_loaded() {
            debug!("pausing");
            self.status = Status::Paused;
        }
    }

    pub fn stop(&mut self) {
        if self.is_loaded() {
            debug!("stopping");
            self.status = Status::Stopped;
        }
    }

    /// Reloads the current program from scratch, running it unless paused
    pub fn replay(&mut self, peripherals: &mut Peripherals) -> Result<()> {
        match self.program.clone() {
            Some(program) => {
                let autoplay = self.status != Status::Paused;
                self.load(&program, autoplay, peripherals)
            }
            None => Ok(()),
        }
    }

    /// Clears the interpreter and forgets the loaded program
    pub fn reset(&mut self, peripherals: &mut Peripherals) {
        self.chip8.reset();
        self.clear_peripherals(peripherals);
        self.program = None;
        self.listing.clear();
        self.status = Status::Stopped;
    }

    /// # Arguments
    /// * `cycles` instructions per tick, must be within 1..=30
    pub fn set_cycles_per_tick(&mut self, cycles: usize) -> Result<()> {
        self.scheduler.set_cycles_per_tick(cycles)?;
        debug!("running {} cycles per tick", cycles);
        Ok(())
    }

    pub fn cycles_per_tick(&self) -> usize {
        self.scheduler.cycles_per_tick()
    }

    /// Runs one tick's worth of instructions if running
    pub fn tick(&mut self, peripherals: &mut Peripherals) {
        if self.status != Status::Running {
            return;
        }
        let tick = self.scheduler.tick(&mut self.chip8);
        self.report(tick, peripherals);
    }

    /// Runs a single instruction and pauses
    ///
    /// Does nothing while awaiting a key.
    pub fn step_once(&mut self, peripherals: &mut Peripherals) {
        if !self.is_loaded() || self.chip8.is_awaiting_key() {
            return;
        }
        self.status = Status::Paused;
        let tick = self.scheduler.step(&mut self.chip8);
        self.report(tick, peripherals);
    }

    /// Set the pressed status of a key
    ///
    /// Ignored while stopped.
    ///
    /// # Arguments
    /// * `key` the keypad code 0x0..0xF
    /// * `pressed` whether the key went down or up
    pub fn set_key(&mut self, key: u8, pressed: bool) -> Result<()> {
        if self.status == Status::Stopped {
            return Ok(());
        }
        self.chip8.set_key(key, pressed)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_loaded(&self) -> bool {
        self.program.is_some()
    }

    pub fn listing(&self) -> &[ListedOpcode] {
        &self.listing
    }

    pub fn chip8(&self) -> &Chip8 {
        &self.chip8
    }

    /// Hands a finished tick to the peripherals; their failures never reach the interpreter
    fn report(&mut self, tick: Tick, peripherals: &mut Peripherals) {
        if let Some(frame) = self.chip8.take_frame() {
            if let Err(e) = peripherals.renderer.render(frame) {
                warn!("unable to render frame: {}", e);
            }
        }

        if tick.beep {
            if let Err(e) = peripherals.speaker.beep() {
                warn!("unable to beep: {}", e);
            }
        }

        let observation = self.watch.observe(self.chip8.registers(), &tick.executed);
        peripherals.observer.observe(&observation);
    }

    fn clear_peripherals(&mut self, peripherals: &mut Peripherals) {
        self.watch.reset();
        if let Err(e) = peripherals.renderer.clear() {
            warn!("unable to clear display: {}", e);
        }
        peripherals.observer.reset();
    }
}
