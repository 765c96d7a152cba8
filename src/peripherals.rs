use std::error::Error;

use crate::framebuffer::FrameBuffer;
use crate::observer::Observation;
use crate::program::ListedOpcode;

/// Draws the frame buffer somewhere. Implementations decide how, so the
/// interpreter doesn't need to know what kind of screen it's on.
pub trait Renderer {
    /// Draw every on pixel as an opaque cell and every off pixel as background
    fn render(&mut self, frame: &FrameBuffer) -> Result<(), Box<dyn Error>>;

    /// Blank the screen
    fn clear(&mut self) -> Result<(), Box<dyn Error>>;
}

/// Makes the beep played when the sound timer runs out
pub trait Speaker {
    /// Start a short beep and return without waiting for it to finish
    fn beep(&mut self) -> Result<(), Box<dyn Error>>;
}

/// Shows what the interpreter is doing
pub trait Observer {
    /// A new program was loaded
    fn load(&mut self, _listing: &[ListedOpcode]) {}

    /// Called once per tick
    fn observe(&mut self, observation: &Observation);

    /// Everything observed so far is stale
    fn reset(&mut self) {}
}

/// A speaker that never makes a sound
pub struct Mute;

impl Speaker for Mute {
    fn beep(&mut self) -> Result<(), Box<dyn Error>> {
        Ok(())
    }
}

/// Everything outside of the interpreter that it reports to
pub struct Peripherals<'a> {
    pub renderer: &'a mut dyn Renderer,
    pub speaker: &'a mut dyn Speaker,
    pub observer: &'a mut dyn Observer,
}
