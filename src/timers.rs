/// # Timers
/// Two 8-bit countdowns, decremented once per tick until they hit 0.
///
/// - `delay` is read back by programs for timing
/// - `sound` beeps once as it runs out
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
}

impl Timers {
    pub fn new() -> Self {
        Timers::default()
    }

    /// Decrements both timers.
    ///
    /// Returns true if the sound timer just ran out and a beep should be played.
    pub fn tick(&mut self) -> bool {
        if self.delay > 0 {
            self.delay -= 1;
        }

        if self.sound > 0 {
            self.sound -= 1;
            return self.sound == 0;
        }
        false
    }

    pub fn set_delay(&mut self, value: u8) {
        self.delay = value;
    }

    pub fn set_sound(&mut self, value: u8) {
        self.sound = value;
    }
}
