use crate::{mode::Mode, word::Word, word::WordError};

/// One instruction of a module's text segment, decoded per addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    I(i64),
    A(Word),
    R(Word),
    E(Word),
}

impl Inst {
    pub fn decode(mode: Mode, word: &str) -> Result<Self, WordError> {
        match mode {
            // Immediate words are kept whole; the opcode split is never used.
            Mode::I => word
                .parse::<i64>()
                .map(Inst::I)
                .map_err(|_| WordError::Value(word.to_string())),
            Mode::A => Ok(Inst::A(Word::parse(word)?)),
            Mode::R => Ok(Inst::R(Word::parse(word)?)),
            Mode::E => Ok(Inst::E(Word::parse(word)?)),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Inst::I(_) => Mode::I,
            Inst::A(_) => Mode::A,
            Inst::R(_) => Mode::R,
            Inst::E(_) => Mode::E,
        }
    }
}

#[test]
fn test() {
    assert_eq!(Inst::decode(Mode::I, "-7"), Ok(Inst::I(-7)));
    assert_eq!(Inst::decode(Mode::I, "1"), Ok(Inst::I(1)));
    assert!(Inst::decode(Mode::A, "1").is_err());
    assert!(Inst::decode(Mode::I, "1x").is_err());
    match Inst::decode(Mode::E, "1004") {
        Ok(inst @ Inst::E(w)) => {
            assert_eq!(inst.mode(), Mode::E);
            assert_eq!((w.opcode, w.field), (1, 4));
        }
        other => panic!("unexpected {:?}", other),
    }
}
