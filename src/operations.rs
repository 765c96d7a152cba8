use log::warn;
use rand::{Rng, RngCore};

use crate::constants::{FLAG_REGISTER, GLYPH_HEIGHT};
use crate::instruction::Instruction;
use crate::state::State;

impl Instruction {
    /// Applies the instruction to `state`.
    ///
    /// The pc has already been moved past this instruction, so jumps overwrite it
    /// and skips bump it by another 2.
    ///
    /// # Arguments
    /// * `state` the state to mutate
    /// * `rng` the source of random bytes for `Cxnn`
    pub fn execute(self, state: &mut State, rng: &mut dyn RngCore) {
        use Instruction::*;

        match self {
            Clear => clr(state),
            Return => rts(state),
            Jump(nnn) => jump(state, nnn),
            Call(nnn) => call(state, nnn),
            SkipEqual { x, nn } => state.registers.skip_if(state.registers.get(x) == nn),
            SkipNotEqual { x, nn } => state.registers.skip_if(state.registers.get(x) != nn),
            SkipRegistersEqual { x, y } => state
                .registers
                .skip_if(state.registers.get(x) == state.registers.get(y)),
            Load { x, nn } => state.registers.set(x, nn),
            Add { x, nn } => add(state, x, nn),
            Move { x, y } => state.registers.set(x, state.registers.get(y)),
            Or { x, y } => state.registers.v[x] |= state.registers.v[y],
            And { x, y } => state.registers.v[x] &= state.registers.v[y],
            Xor { x, y } => state.registers.v[x] ^= state.registers.v[y],
            AddRegisters { x, y } => addr(state, x, y),
            Sub { x, y } => sub(state, x, y),
            ShiftRight { x } => shr(state, x),
            SubN { x, y } => subn(state, x, y),
            ShiftLeft { x } => shl(state, x),
            SkipRegistersNotEqual { x, y } => state
                .registers
                .skip_if(state.registers.get(x) != state.registers.get(y)),
            LoadIndex(nnn) => state.registers.i = nnn,
            JumpOffset(nnn) => jumpi(state, nnn),
            Random { x, nn } => rand(state, x, nn, rng),
            Draw { x, y, n } => draw(state, x, y, n),
            SkipPressed { x } => {
                let pressed = state.keypad.is_pressed(state.registers.get(x));
                state.registers.skip_if(pressed)
            }
            SkipNotPressed { x } => {
                let pressed = state.keypad.is_pressed(state.registers.get(x));
                state.registers.skip_if(!pressed)
            }
            LoadDelay { x } => state.registers.set(x, state.timers.delay),
            AwaitKey { x } => state.keypad.await_key(x),
            SetDelay { x } => state.timers.set_delay(state.registers.get(x)),
            SetSound { x } => state.timers.set_sound(state.registers.get(x)),
            AddIndex { x } => addi(state, x),
            LoadGlyph { x } => ldspr(state, x),
            StoreBcd { x } => bcd(state, x),
            StoreRegisters { x } => stor(state, x),
            LoadRegisters { x } => read(state, x),
            Unknown(_) => {}
        }
    }
}

/// clear
fn clr(state: &mut State) {
    state.frame_buffer.clear();
}

/// PC = STACK.pop()
fn rts(state: &mut State) {
    match state.registers.pop() {
        Some(addr) => state.registers.pc = addr,
        None => warn!(
            "return at {:#06X} with an empty stack is ignored",
            state.registers.pc.wrapping_sub(2)
        ),
    }
}

/// PC = addr
fn jump(state: &mut State, addr: u16) {
    state.registers.pc = addr;
}

/// STACK.push(PC); PC = addr
fn call(state: &mut State, addr: u16) {
    let pc = state.registers.pc;
    state.registers.push(pc);
    state.registers.pc = addr;
}

/// Vx += nn
/// Overflow is dropped and VF is left alone
fn add(state: &mut State, x: usize, nn: u8) {
    state.registers.v[x] = state.registers.v[x].wrapping_add(nn);
}

/// Vx += Vy; VF = overflow
fn addr(state: &mut State, x: usize, y: usize) {
    let (res, over) = state.registers.v[x].overflowing_add(state.registers.v[y]);
    state.registers.set_flag(over);
    state.registers.set(x, res);
}

/// Vx -= Vy; VF = !underflow
fn sub(state: &mut State, x: usize, y: usize) {
    let (res, under) = state.registers.v[x].overflowing_sub(state.registers.v[y]);
    state.registers.set_flag(!under);
    state.registers.set(x, res);
}

/// Vx = Vy - Vx; VF = !underflow
fn subn(state: &mut State, x: usize, y: usize) {
    let (res, under) = state.registers.v[y].overflowing_sub(state.registers.v[x]);
    state.registers.set_flag(!under);
    state.registers.set(x, res);
}

/// Vx >>= 1; VF = lsb
/// Vy plays no part
fn shr(state: &mut State, x: usize) {
    let value = state.registers.v[x];
    state.registers.v[FLAG_REGISTER] = value & 0x1;
    state.registers.set(x, value >> 1);
}

/// Vx <<= 1; VF = msb
/// Vy plays no part
fn shl(state: &mut State, x: usize) {
    let value = state.registers.v[x];
    state.registers.set_flag(value & 0x80 != 0);
    state.registers.set(x, value << 1);
}

/// PC = V0 + addr
fn jumpi(state: &mut State, addr: u16) {
    state.registers.pc = addr.wrapping_add(u16::from(state.registers.v[0x0]));
}

/// Vx = rand_byte & nn
fn rand(state: &mut State, x: usize, nn: u8, rng: &mut dyn RngCore) {
    let rand_byte: u8 = rng.gen();
    state.registers.set(x, rand_byte & nn);
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs the sprite at mem[I..I+n] onto the FrameBuffer; VF = collision
fn draw(state: &mut State, x: usize, y: usize, n: u8) {
    let sprite = state.memory.read_range(state.registers.i, n as usize);
    let collision = state.frame_buffer.draw_sprite(
        state.registers.get(x) as usize,
        state.registers.get(y) as usize,
        &sprite,
    );
    state.registers.set_flag(collision);
}

/// I += Vx
fn addi(state: &mut State, x: usize) {
    state.registers.i = state
        .registers
        .i
        .wrapping_add(u16::from(state.registers.get(x)));
}

/// I = Vx * 5
/// Points I at the sprite sheet glyph for the digit in Vx
fn ldspr(state: &mut State, x: usize) {
    state.registers.i = u16::from(state.registers.get(x)) * GLYPH_HEIGHT;
}

/// mem[I..I+3] = bcd(Vx)
fn bcd(state: &mut State, x: usize) {
    let value = state.registers.get(x);
    let i = state.registers.i;
    state.memory.write(i, value / 100);
    state.memory.write(i.wrapping_add(1), value / 10 % 10);
    state.memory.write(i.wrapping_add(2), value % 10);
}

/// mem[I..=I+x] = V0..=Vx
/// I itself is left unmodified
fn stor(state: &mut State, x: usize) {
    let i = state.registers.i;
    for offset in 0..=x {
        state
            .memory
            .write(i.wrapping_add(offset as u16), state.registers.v[offset]);
    }
}

/// V0..=Vx = mem[I..=I+x]
/// I itself is left unmodified
fn read(state: &mut State, x: usize) {
    let i = state.registers.i;
    for offset in 0..=x {
        state.registers.v[offset] = state.memory.read(i.wrapping_add(offset as u16));
    }
}
