use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::{info, warn};
use sdl2::event::Event;

use chipvm::{Config, Controller, Mute, Peripherals, Speaker, Status};
use display::Display;

use crate::audio::Beeper;
use crate::keymap::{command, keymap, Command};
use crate::monitor::Monitor;

pub struct Options {
    pub rom: PathBuf,
    pub cycles: usize,
    pub scale: usize,
    pub tick_rate: u32,
    pub autoplay: bool,
    pub mute: bool,
}

pub fn run(options: Options) -> Result<(), Box<dyn Error>> {
    let config = Config::default().with_cycles_per_tick(options.cycles)?;
    let mut controller = Controller::new(config)?;

    // Get SDL2 context
    let sdl: sdl2::Sdl = sdl2::init()?;
    let mut display = Display::new(
        &sdl,
        config.display_width(),
        config.display_height(),
        options.scale,
    )?;
    let mut speaker: Box<dyn Speaker> = if options.mute {
        Box::new(Mute)
    } else {
        match Beeper::new(&sdl) {
            Ok(beeper) => Box::new(beeper),
            Err(e) => {
                warn!("unable to open audio device, continuing without sound: {}", e);
                Box::new(Mute)
            }
        }
    };
    let mut monitor = Monitor::default();
    let mut events = sdl.event_pump()?;

    let mut peripherals = Peripherals {
        renderer: &mut display,
        speaker: speaker.as_mut(),
        observer: &mut monitor,
    };

    // Load ROM
    let file = File::open(&options.rom)?;
    let mut reader = BufReader::new(file);
    controller.load_rom(&mut reader, options.autoplay, &mut peripherals)?;
    info!("loaded {}", options.rom.display());

    // Set initial timing
    let tick_time = Duration::from_secs(1) / options.tick_rate;
    let mut last_tick = Instant::now();

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => match (keymap(key), command(key)) {
                    (Some(kc), _) => controller.set_key(kc, true)?,
                    (_, Some(cmd)) => apply(cmd, &mut controller, &mut peripherals)?,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        controller.set_key(kc, false)?;
                    }
                }
                _ => continue,
            };
        }

        // Update state
        controller.tick(&mut peripherals);

        // Handle timing
        let elapsed = last_tick.elapsed();
        if tick_time > elapsed {
            std::thread::sleep(tick_time - elapsed);
        }
        last_tick = Instant::now();
    }

    Ok(())
}

fn apply(
    command: Command,
    controller: &mut Controller,
    peripherals: &mut Peripherals,
) -> Result<(), Box<dyn Error>> {
    match command {
        Command::TogglePlay => match controller.status() {
            Status::Running => controller.pause(),
            _ => controller.play(),
        },
        Command::Step => controller.step_once(peripherals),
        Command::Replay => controller.replay(peripherals)?,
        Command::Stop => controller.stop(),
        Command::Faster | Command::Slower => {
            let cycles = match command {
                Command::Faster => controller.cycles_per_tick() + 1,
                _ => controller.cycles_per_tick().saturating_sub(1),
            };
            if let Err(e) = controller.set_cycles_per_tick(cycles) {
                warn!("{}", e);
            } else {
                info!("{} cycles per tick", cycles);
            }
        }
    }
    Ok(())
}
