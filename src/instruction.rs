use crate::opcode::Opcode;

/// A decoded opcode with its operands pulled out.
///
/// Registers are indices into V0..VF, addresses are 12 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `00E0` clear the display
    Clear,
    /// `00EE` return from a subroutine
    Return,
    /// `1nnn` pc = nnn
    Jump(u16),
    /// `2nnn` call the subroutine at nnn
    Call(u16),
    /// `3xnn` skip if Vx == nn
    SkipEqual { x: usize, nn: u8 },
    /// `4xnn` skip if Vx != nn
    SkipNotEqual { x: usize, nn: u8 },
    /// `5xy0` skip if Vx == Vy
    SkipRegistersEqual { x: usize, y: usize },
    /// `6xnn` Vx = nn
    Load { x: usize, nn: u8 },
    /// `7xnn` Vx += nn without touching VF
    Add { x: usize, nn: u8 },
    /// `8xy0` Vx = Vy
    Move { x: usize, y: usize },
    /// `8xy1` Vx |= Vy
    Or { x: usize, y: usize },
    /// `8xy2` Vx &= Vy
    And { x: usize, y: usize },
    /// `8xy3` Vx ^= Vy
    Xor { x: usize, y: usize },
    /// `8xy4` Vx += Vy; VF = carry
    AddRegisters { x: usize, y: usize },
    /// `8xy5` Vx -= Vy; VF = !borrow
    Sub { x: usize, y: usize },
    /// `8xy6` Vx >>= 1; VF = shifted out bit
    ShiftRight { x: usize },
    /// `8xy7` Vx = Vy - Vx; VF = !borrow
    SubN { x: usize, y: usize },
    /// `8xyE` Vx <<= 1; VF = shifted out bit
    ShiftLeft { x: usize },
    /// `9xy0` skip if Vx != Vy
    SkipRegistersNotEqual { x: usize, y: usize },
    /// `Annn` I = nnn
    LoadIndex(u16),
    /// `Bnnn` pc = nnn + V0
    JumpOffset(u16),
    /// `Cxnn` Vx = random & nn
    Random { x: usize, nn: u8 },
    /// `Dxyn` draw the n byte sprite at I to (Vx, Vy); VF = collision
    Draw { x: usize, y: usize, n: u8 },
    /// `Ex9E` skip if the key in Vx is pressed
    SkipPressed { x: usize },
    /// `ExA1` skip if the key in Vx isn't pressed
    SkipNotPressed { x: usize },
    /// `Fx07` Vx = DT
    LoadDelay { x: usize },
    /// `Fx0A` suspend until a key is pressed, then store it in Vx
    AwaitKey { x: usize },
    /// `Fx15` DT = Vx
    SetDelay { x: usize },
    /// `Fx18` ST = Vx
    SetSound { x: usize },
    /// `Fx1E` I += Vx
    AddIndex { x: usize },
    /// `Fx29` I = address of the glyph for Vx
    LoadGlyph { x: usize },
    /// `Fx33` mem[I..I+3] = decimal digits of Vx
    StoreBcd { x: usize },
    /// `Fx55` mem[I..=I+x] = V0..=Vx
    StoreRegisters { x: usize },
    /// `Fx65` V0..=Vx = mem[I..=I+x]
    LoadRegisters { x: usize },
    /// Anything else; executes as a no-op
    Unknown(u16),
}

impl Instruction {
    /// Selects the Instruction for a given Opcode
    pub fn decode(op: u16) -> Self {
        use Instruction::*;

        let (x, y) = (op.x(), op.y());
        match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Clear,
            (0x0, 0x0, 0xE, 0xE) => Return,
            (0x1, ..) => Jump(op.nnn()),
            (0x2, ..) => Call(op.nnn()),
            (0x3, ..) => SkipEqual { x, nn: op.nn() },
            (0x4, ..) => SkipNotEqual { x, nn: op.nn() },
            (0x5, .., 0x0) => SkipRegistersEqual { x, y },
            (0x6, ..) => Load { x, nn: op.nn() },
            (0x7, ..) => Add { x, nn: op.nn() },
            (0x8, .., 0x0) => Move { x, y },
            (0x8, .., 0x1) => Or { x, y },
            (0x8, .., 0x2) => And { x, y },
            (0x8, .., 0x3) => Xor { x, y },
            (0x8, .., 0x4) => AddRegisters { x, y },
            (0x8, .., 0x5) => Sub { x, y },
            (0x8, .., 0x6) => ShiftRight { x },
            (0x8, .., 0x7) => SubN { x, y },
            (0x8, .., 0xE) => ShiftLeft { x },
            (0x9, .., 0x0) => SkipRegistersNotEqual { x, y },
            (0xA, ..) => LoadIndex(op.nnn()),
            (0xB, ..) => JumpOffset(op.nnn()),
            (0xC, ..) => Random { x, nn: op.nn() },
            (0xD, ..) => Draw { x, y, n: op.n() },
            (0xE, _, 0x9, 0xE) => SkipPressed { x },
            (0xE, _, 0xA, 0x1) => SkipNotPressed { x },
            (0xF, _, 0x0, 0x7) => LoadDelay { x },
            (0xF, _, 0x0, 0xA) => AwaitKey { x },
            (0xF, _, 0x1, 0x5) => SetDelay { x },
            (0xF, _, 0x1, 0x8) => SetSound { x },
            (0xF, _, 0x1, 0xE) => AddIndex { x },
            (0xF, _, 0x2, 0x9) => LoadGlyph { x },
            (0xF, _, 0x3, 0x3) => StoreBcd { x },
            (0xF, _, 0x5, 0x5) => StoreRegisters { x },
            (0xF, _, 0x6, 0x5) => LoadRegisters { x },
            _ => Unknown(op),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Instruction::*;
    use super::*;

    #[test]
    fn test_decodes_system_instructions() {
        assert_eq!(Instruction::decode(0x00E0), Clear);
        assert_eq!(Instruction::decode(0x00EE), Return);
    }

    #[test]
    fn test_decodes_addresses() {
        assert_eq!(Instruction::decode(0x1ABC), Jump(0xABC));
        assert_eq!(Instruction::decode(0x2123), Call(0x123));
        assert_eq!(Instruction::decode(0xA2F0), LoadIndex(0x2F0));
        assert_eq!(Instruction::decode(0xB300), JumpOffset(0x300));
    }

    #[test]
    fn test_decodes_immediates() {
        assert_eq!(Instruction::decode(0x3A42), SkipEqual { x: 0xA, nn: 0x42 });
        assert_eq!(Instruction::decode(0x4B43), SkipNotEqual { x: 0xB, nn: 0x43 });
        assert_eq!(Instruction::decode(0x6122), Load { x: 0x1, nn: 0x22 });
        assert_eq!(Instruction::decode(0x7FFF), Add { x: 0xF, nn: 0xFF });
        assert_eq!(Instruction::decode(0xC30F), Random { x: 0x3, nn: 0x0F });
    }

    #[test]
    fn test_decodes_register_pairs() {
        assert_eq!(Instruction::decode(0x5120), SkipRegistersEqual { x: 1, y: 2 });
        assert_eq!(Instruction::decode(0x9120), SkipRegistersNotEqual { x: 1, y: 2 });
        assert_eq!(Instruction::decode(0x8120), Move { x: 1, y: 2 });
        assert_eq!(Instruction::decode(0x8121), Or { x: 1, y: 2 });
        assert_eq!(Instruction::decode(0x8122), And { x: 1, y: 2 });
        assert_eq!(Instruction::decode(0x8123), Xor { x: 1, y: 2 });
        assert_eq!(Instruction::decode(0x8124), AddRegisters { x: 1, y: 2 });
        assert_eq!(Instruction::decode(0x8125), Sub { x: 1, y: 2 });
        assert_eq!(Instruction::decode(0x8127), SubN { x: 1, y: 2 });
    }

    #[test]
    fn test_shifts_ignore_y() {
        assert_eq!(Instruction::decode(0x8126), ShiftRight { x: 1 });
        assert_eq!(Instruction::decode(0x812E), ShiftLeft { x: 1 });
    }

    #[test]
    fn test_decodes_draw() {
        assert_eq!(Instruction::decode(0xD125), Draw { x: 1, y: 2, n: 5 });
    }

    #[test]
    fn test_decodes_keys_and_timers() {
        assert_eq!(Instruction::decode(0xE19E), SkipPressed { x: 1 });
        assert_eq!(Instruction::decode(0xE2A1), SkipNotPressed { x: 2 });
        assert_eq!(Instruction::decode(0xF307), LoadDelay { x: 3 });
        assert_eq!(Instruction::decode(0xF00A), AwaitKey { x: 0 });
        assert_eq!(Instruction::decode(0xF415), SetDelay { x: 4 });
        assert_eq!(Instruction::decode(0xF518), SetSound { x: 5 });
    }

    #[test]
    fn test_decodes_index_operations() {
        assert_eq!(Instruction::decode(0xF61E), AddIndex { x: 6 });
        assert_eq!(Instruction::decode(0xF729), LoadGlyph { x: 7 });
        assert_eq!(Instruction::decode(0xF833), StoreBcd { x: 8 });
        assert_eq!(Instruction::decode(0xF955), StoreRegisters { x: 9 });
        assert_eq!(Instruction::decode(0xFA65), LoadRegisters { x: 0xA });
    }

    #[test]
    fn test_decodes_unknown_opcodes() {
        for op in [0x0000, 0x0123, 0x00E1, 0x5121, 0x8128, 0x812F, 0x9121, 0xE100, 0xF1FF] {
            assert_eq!(Instruction::decode(op), Unknown(op), "opcode {:04X}", op);
        }
    }
}
