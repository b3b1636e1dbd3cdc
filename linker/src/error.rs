use crate::grammer::token::{Pos, Token};
use arch::WordError;
use color_print::ceprintln;
use std::fmt;
use thiserror::Error;

/// Token location without lifetime
#[derive(Debug, Clone, PartialEq)]
pub struct Loc {
    pub file: String,
    pub line: usize,
    pub col: usize,
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line + 1, self.col + 1)
    }
}

impl<'a> From<Pos<'a>> for Loc {
    fn from(pos: Pos<'a>) -> Self {
        Loc {
            file: pos.file.to_string(),
            line: pos.line,
            col: pos.col,
        }
    }
}

impl<'a> From<&Token<'a>> for Loc {
    fn from(token: &Token<'a>) -> Self {
        token.pos.into()
    }
}

/// Fatal errors. Anything reported here stops the link.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Unexpected end of file: expected {0}")]
    UnexpectedEOF(String),

    #[error("Expected {expected}, found `{found}`")]
    UnexpectedToken {
        expected: String,
        found: String,
        loc: Loc,
    },

    #[error("Unknown addressing mode: `{0}`")]
    UnknownMode(String, Loc),

    #[error("Invalid instruction word `{0}`: {2}")]
    InvalidWord(String, Loc, #[source] WordError),

    #[error("Invalid machine description: {0}")]
    Machine(String, #[source] serde_yaml::Error),

    #[error("Failed to serialize listing as YAML")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to serialize listing as JSON")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn loc(&self) -> Option<&Loc> {
        match self {
            Error::UnexpectedToken { loc, .. } => Some(loc),
            Error::UnknownMode(_, loc) => Some(loc),
            Error::InvalidWord(_, loc, _) => Some(loc),
            _ => None,
        }
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, code: &str) {
        ceprintln!("<red,bold>error</>: {}", self);

        if let Some(loc) = self.loc() {
            let line_num = loc.line + 1;
            let line_content = code.lines().nth(loc.line).unwrap_or("");
            ceprintln!("     <blue>--></> <underline>{}</>", loc);
            ceprintln!("      <blue>|</>");
            ceprintln!(" <blue>{:>4} |</> {}", line_num, line_content);
            ceprintln!("      <blue>|</> {}<red,bold>^</>", " ".repeat(loc.col));
        }
    }
}
