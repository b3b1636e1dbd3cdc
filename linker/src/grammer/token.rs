use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub pos: Pos<'a>,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, pos: Pos<'a>) -> Self {
        Token { text, pos }
    }
}

/// Zero based line and column of a token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pos<'a> {
    pub file: &'a str,
    pub line: usize,
    pub col: usize,
}

impl fmt::Display for Pos<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line + 1, self.col + 1)
    }
}
