use thiserror::Error;

/// Everything that can be rejected before it reaches the interpreter.
///
/// Running programs never produce errors; unknown opcodes are skipped and
/// out-of-range addresses wrap.
#[derive(Debug, Error)]
pub enum Error {
    #[error("program is {size} bytes but at most {max} fit in memory")]
    ProgramTooLarge { size: usize, max: usize },

    #[error("program is empty")]
    EmptyProgram,

    #[error("unable to read program: {0}")]
    Io(#[from] std::io::Error),

    #[error("{requested} cycles per tick is outside of {min}..={max}")]
    CyclesOutOfRange {
        requested: usize,
        min: usize,
        max: usize,
    },

    #[error("a {width}x{height} display has no pixels")]
    EmptyDisplay { width: usize, height: usize },

    #[error("key {0:#X} is not on the keypad")]
    KeyOutOfRange(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
