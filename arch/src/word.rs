use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scale of the opcode digit inside an encoded word.
pub const OPCODE_SCALE: i64 = 1000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("empty instruction word")]
    Empty,

    #[error("opcode must be a single digit, got `{0}`")]
    Opcode(char),

    #[error("cannot parse address field `{0}`")]
    Field(String),

    #[error("cannot parse `{0}` as an integer")]
    Value(String),
}

/// Instruction word split into its opcode digit and address field.
///
/// `raw` keeps the integer value of the whole token, which is what gets
/// stored when the address field needs no relocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub opcode: u8,
    pub field: usize,
    pub raw: i64,
}

impl Word {
    pub fn parse(s: &str) -> Result<Self, WordError> {
        let mut chars = s.chars();
        let head = chars.next().ok_or(WordError::Empty)?;
        let opcode = head.to_digit(10).ok_or(WordError::Opcode(head))? as u8;

        let rest = chars.as_str();
        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(WordError::Field(rest.to_string()));
        }
        let field = rest
            .parse::<usize>()
            .map_err(|_| WordError::Field(rest.to_string()))?;
        let raw = s
            .parse::<i64>()
            .map_err(|_| WordError::Value(s.to_string()))?;

        Ok(Word { opcode, field, raw })
    }

    /// Opcode with the address field cleared.
    pub fn zeroed(&self) -> i64 {
        self.opcode as i64 * OPCODE_SCALE
    }

    /// Opcode with the address field replaced by `addr`.
    pub fn with_addr(&self, addr: usize) -> i64 {
        self.zeroed() + addr as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split() {
        let w = Word::parse("5123").unwrap();
        assert_eq!(w.opcode, 5);
        assert_eq!(w.field, 123);
        assert_eq!(w.raw, 5123);
        assert_eq!(w.zeroed(), 5000);
        assert_eq!(w.with_addr(42), 5042);
    }

    #[test]
    fn leading_zero_opcode() {
        let w = Word::parse("0100").unwrap();
        assert_eq!(w.opcode, 0);
        assert_eq!(w.field, 100);
        assert_eq!(w.raw, 100);
    }

    #[test]
    fn malformed() {
        assert_eq!(Word::parse(""), Err(WordError::Empty));
        assert_eq!(Word::parse("x123"), Err(WordError::Opcode('x')));
        assert_eq!(Word::parse("1"), Err(WordError::Field(String::new())));
        assert_eq!(Word::parse("1-23"), Err(WordError::Field("-23".to_string())));
    }
}
