use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

mod audio;
mod keymap;
mod monitor;
mod run;

/// Runs a Chip-8 ROM in an SDL2 window
#[derive(Parser)]
#[command(version)]
struct Args {
    /// ROM file to load
    rom: PathBuf,

    /// Instructions executed per tick (1-30)
    #[arg(short, long, default_value_t = chipvm::constants::DEFAULT_CYCLES_PER_TICK)]
    cycles: usize,

    /// Size multiplier for each pixel
    #[arg(short, long, default_value_t = 10)]
    scale: usize,

    /// Ticks per second; the timers count down once per tick
    #[arg(long, default_value_t = 60)]
    tick_rate: u32,

    /// Load the ROM without starting it
    #[arg(long)]
    paused: bool,

    /// Don't open an audio device
    #[arg(long)]
    mute: bool,

    /// Log more; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    run::run(run::Options {
        rom: args.rom,
        cycles: args.cycles,
        scale: args.scale,
        tick_rate: args.tick_rate.max(1),
        autoplay: !args.paused,
        mute: args.mute,
    })
}
