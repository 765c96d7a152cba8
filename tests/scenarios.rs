//! Whole programs driven through the control surface, with recording peripherals.

use std::error::Error;

use chipvm::{
    Config, Controller, Execution, FrameBuffer, ListedOpcode, Observation, Observer, Peripherals,
    Renderer, Speaker, Status,
};

#[derive(Default)]
struct Screen {
    frames: Vec<FrameBuffer>,
    clears: usize,
}

impl Renderer for Screen {
    fn render(&mut self, frame: &FrameBuffer) -> Result<(), Box<dyn Error>> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Box<dyn Error>> {
        self.clears += 1;
        Ok(())
    }
}

#[derive(Default)]
struct Beeps {
    count: usize,
    broken: bool,
}

impl Speaker for Beeps {
    fn beep(&mut self) -> Result<(), Box<dyn Error>> {
        self.count += 1;
        if self.broken {
            Err("no audio device".into())
        } else {
            Ok(())
        }
    }
}

#[derive(Default)]
struct Panel {
    listing: Vec<ListedOpcode>,
    observations: Vec<Observation>,
}

impl Observer for Panel {
    fn load(&mut self, listing: &[ListedOpcode]) {
        self.listing = listing.to_vec();
    }

    fn observe(&mut self, observation: &Observation) {
        self.observations.push(observation.clone());
    }

    fn reset(&mut self) {
        self.observations.clear();
    }
}

#[derive(Default)]
struct Bench {
    screen: Screen,
    beeps: Beeps,
    panel: Panel,
}

impl Bench {
    fn peripherals(&mut self) -> Peripherals<'_> {
        Peripherals {
            renderer: &mut self.screen,
            speaker: &mut self.beeps,
            observer: &mut self.panel,
        }
    }
}

fn controller() -> Controller {
    Controller::new(Config::default()).unwrap()
}

#[test]
fn test_adds_two_registers() {
    let mut bench = Bench::default();
    let mut controller = controller();
    controller
        .load(&[0x60, 0x0A, 0x61, 0x0B, 0x80, 0x14], false, &mut bench.peripherals())
        .unwrap();
    for _ in 0..3 {
        controller.step_once(&mut bench.peripherals());
    }

    let registers = controller.chip8().registers();
    assert_eq!(registers.v[0x0], 21);
    assert_eq!(registers.v[0xF], 0);
    assert_eq!(registers.pc, 0x206);

    let listing: Vec<String> = bench.panel.listing.iter().map(|op| op.to_string()).collect();
    assert_eq!(listing, vec!["600a", "610b", "8014"]);
    let executed: Vec<Vec<usize>> = bench
        .panel
        .observations
        .iter()
        .map(|o| o.executed.clone())
        .collect();
    assert_eq!(executed, vec![vec![0], vec![1], vec![2]]);
    assert_eq!(bench.panel.observations[2].changed_registers, vec![(0x0, 21)]);
    assert_eq!(bench.panel.observations[2].pc, 0x206);
}

#[test]
fn test_clear_wipes_drawn_frame() {
    // I = 0; draw glyph 0 at (V0, V0); clear; spin
    let mut bench = Bench::default();
    let mut controller = controller();
    controller
        .load(&[0xA0, 0x00, 0xD0, 0x05, 0x00, 0xE0, 0x12, 0x06], false, &mut bench.peripherals())
        .unwrap();

    controller.step_once(&mut bench.peripherals());
    controller.step_once(&mut bench.peripherals());
    assert!(controller.chip8().frame_buffer().pixels().iter().any(|&p| p == 1));

    controller.step_once(&mut bench.peripherals());
    assert!(controller.chip8().frame_buffer().pixels().iter().all(|&p| p == 0));

    assert_eq!(bench.screen.frames.len(), 2);
    let last = bench.screen.frames.last().unwrap();
    assert!(last.pixels().iter().all(|&p| p == 0));
}

#[test]
fn test_draw_wraps_around_right_edge() {
    // V0 = 60; V1 = 0; I = 0x208; draw 1 row; the row at 0x208 is 0xFF
    let mut bench = Bench::default();
    let mut controller = controller();
    controller
        .load(
            &[0x60, 0x3C, 0x61, 0x00, 0xA2, 0x08, 0xD0, 0x11, 0xFF, 0x00],
            false,
            &mut bench.peripherals(),
        )
        .unwrap();
    for _ in 0..4 {
        controller.step_once(&mut bench.peripherals());
    }

    let frame = controller.chip8().frame_buffer();
    for x in 0..64 {
        assert_eq!(frame.pixel(x, 0), x < 4 || x >= 60, "pixel {} of row 0", x);
    }
    for y in 1..32 {
        for x in 0..64 {
            assert!(!frame.pixel(x, y));
        }
    }
    assert_eq!(controller.chip8().registers().v[0xF], 0);
}

#[test]
fn test_waits_for_key_press() {
    let mut bench = Bench::default();
    let mut controller = controller();
    controller
        .load(&[0xF0, 0x0A, 0x61, 0x01, 0x12, 0x04], true, &mut bench.peripherals())
        .unwrap();

    controller.step_once(&mut bench.peripherals());
    assert_eq!(controller.chip8().execution(), Execution::AwaitingKey(0x0));
    let pc = controller.chip8().registers().pc;

    for _ in 0..3 {
        controller.step_once(&mut bench.peripherals());
    }
    controller.play();
    controller.tick(&mut bench.peripherals());
    assert_eq!(controller.chip8().registers().pc, pc);

    controller.set_key(0x5, true).unwrap();
    assert_eq!(controller.chip8().registers().v[0x0], 5);
    assert_eq!(controller.chip8().execution(), Execution::Running);

    controller.tick(&mut bench.peripherals());
    assert_eq!(controller.chip8().registers().v[0x1], 1);
    assert_eq!(controller.chip8().registers().pc, 0x204);
}

#[test]
fn test_beeps_once_when_sound_runs_out() {
    // V0 = 3; ST = V0; spin
    let mut bench = Bench::default();
    let mut controller = controller();
    controller
        .load(&[0x60, 0x03, 0xF0, 0x18, 0x12, 0x04], true, &mut bench.peripherals())
        .unwrap();
    for _ in 0..10 {
        controller.tick(&mut bench.peripherals());
    }
    assert_eq!(bench.beeps.count, 1);
    assert_eq!(controller.chip8().timers().sound, 0);
}

#[test]
fn test_broken_speaker_doesnt_stop_program() {
    // V0 = 1; ST = V0; V1 += 1; jump 0x204
    let mut bench = Bench::default();
    bench.beeps.broken = true;
    let mut controller = controller();
    controller
        .load(&[0x60, 0x01, 0xF0, 0x18, 0x71, 0x01, 0x12, 0x04], true, &mut bench.peripherals())
        .unwrap();
    controller.tick(&mut bench.peripherals());
    controller.tick(&mut bench.peripherals());
    assert_eq!(bench.beeps.count, 1);
    assert_eq!(controller.status(), Status::Running);
    assert!(controller.chip8().registers().v[0x1] > 4);
}

#[test]
fn test_cycles_per_tick_limits_progress() {
    // V0 += 1; jump 0x200
    let mut bench = Bench::default();
    let mut controller = controller();
    controller
        .load(&[0x70, 0x01, 0x12, 0x00], true, &mut bench.peripherals())
        .unwrap();
    controller.set_cycles_per_tick(2).unwrap();
    controller.tick(&mut bench.peripherals());
    assert_eq!(controller.chip8().registers().v[0x0], 1);

    assert!(controller.set_cycles_per_tick(31).is_err());
    assert_eq!(controller.cycles_per_tick(), 2);

    let observation = bench.panel.observations.last().unwrap();
    assert_eq!(observation.executed, vec![0, 1]);
}

#[test]
fn test_reload_clears_peripherals() {
    let mut bench = Bench::default();
    let mut controller = controller();
    controller
        .load(&[0x70, 0x01, 0x12, 0x00], true, &mut bench.peripherals())
        .unwrap();
    controller.tick(&mut bench.peripherals());
    controller.replay(&mut bench.peripherals()).unwrap();

    assert_eq!(bench.screen.clears, 2);
    assert!(bench.panel.observations.is_empty());
    controller.tick(&mut bench.peripherals());
    assert_eq!(bench.panel.observations[0].changed_registers, vec![(0x0, 5)]);
}
