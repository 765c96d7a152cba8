use crate::constants::{
    DEFAULT_CYCLES_PER_TICK, DISPLAY_HEIGHT, DISPLAY_WIDTH, MAX_CYCLES_PER_TICK,
    MIN_CYCLES_PER_TICK,
};
use crate::error::{Error, Result};

/// # Config
/// Knobs fixed for the lifetime of an interpreter.
///
/// - `cycles_per_tick` how many instructions run for every external tick
/// - `display_width`/`display_height` the size of the frame buffer in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    cycles_per_tick: usize,
    display_width: usize,
    display_height: usize,
}

impl Config {
    /// Returns a copy of the config with a new cycle budget.
    ///
    /// # Arguments
    /// * `cycles` instructions per tick, must be within 1..=30
    pub fn with_cycles_per_tick(self, cycles: usize) -> Result<Self> {
        Ok(Config {
            cycles_per_tick: validate_cycles(cycles)?,
            ..self
        })
    }

    /// Returns a copy of the config with a new frame buffer size.
    ///
    /// # Arguments
    /// * `width` columns of pixels, must not be zero
    /// * `height` rows of pixels, must not be zero
    pub fn with_display_size(self, width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyDisplay { width, height });
        }
        Ok(Config {
            display_width: width,
            display_height: height,
            ..self
        })
    }

    pub fn cycles_per_tick(&self) -> usize {
        self.cycles_per_tick
    }

    pub fn display_width(&self) -> usize {
        self.display_width
    }

    pub fn display_height(&self) -> usize {
        self.display_height
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cycles_per_tick: DEFAULT_CYCLES_PER_TICK,
            display_width: DISPLAY_WIDTH,
            display_height: DISPLAY_HEIGHT,
        }
    }
}

pub(crate) fn validate_cycles(cycles: usize) -> Result<usize> {
    if (MIN_CYCLES_PER_TICK..=MAX_CYCLES_PER_TICK).contains(&cycles) {
        Ok(cycles)
    } else {
        Err(Error::CyclesOutOfRange {
            requested: cycles,
            min: MIN_CYCLES_PER_TICK,
            max: MAX_CYCLES_PER_TICK,
        })
    }
}
