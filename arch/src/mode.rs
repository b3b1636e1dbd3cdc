use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Addressing mode tag written in front of every instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
pub enum Mode {
    /// Operand is taken verbatim
    I,
    /// Operand is an absolute machine address
    A,
    /// Operand is relative to the module base
    R,
    /// Operand names the symbol bound by the use list
    E,
}

impl Mode {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(m) => Ok(m),
            Err(_) => Err(format!("Unknown addressing mode: {s}")),
        }
    }
}

#[test]
fn test() {
    assert_eq!(Mode::parse("I"), Ok(Mode::I));
    assert_eq!(Mode::parse("E"), Ok(Mode::E));
    assert!(Mode::parse("X").is_err());
    assert!(Mode::parse("r").is_err());
    assert_eq!(Mode::R.to_string(), "R");
}
