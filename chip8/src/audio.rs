use std::error::Error;

use log::debug;
use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

use chipvm::Speaker;

const PITCH: f32 = 440.0;
const VOLUME: f32 = 0.25;
const BEEP_MILLIS: i32 = 100;

/// A triangle wave that plays for a fixed number of samples then goes quiet
struct Triangle {
    phase: f32,
    step: f32,
    remaining: usize,
}

impl AudioCallback for Triangle {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            if self.remaining == 0 {
                *sample = 0.0;
                continue;
            }
            // rises over the first half of a period and falls over the second
            *sample = VOLUME * (4.0 * (self.phase - 0.5).abs() - 1.0);
            self.phase = (self.phase + self.step) % 1.0;
            self.remaining -= 1;
        }
    }
}

/// # Beeper
/// Plays a short 440Hz beep through SDL2 without blocking the caller.
pub struct Beeper {
    device: AudioDevice<Triangle>,
    samples: usize,
}

impl Beeper {
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, Box<dyn Error>> {
        let audio = sdl.audio()?;
        let desired = AudioSpecDesired {
            freq: Some(44_100),
            channels: Some(1),
            samples: None,
        };

        let device = audio.open_playback(None, &desired, |spec| Triangle {
            phase: 0.0,
            step: PITCH / spec.freq as f32,
            remaining: 0,
        })?;
        let samples = (device.spec().freq * BEEP_MILLIS / 1000) as usize;
        device.resume();

        Ok(Beeper { device, samples })
    }
}

impl Speaker for Beeper {
    fn beep(&mut self) -> Result<(), Box<dyn Error>> {
        debug!("beep");
        let mut triangle = self.device.lock();
        triangle.phase = 0.0;
        triangle.remaining = self.samples;
        Ok(())
    }
}
