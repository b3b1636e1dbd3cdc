use super::token::{Pos, Token};

/// Splits an object file into whitespace delimited tokens.
pub struct Lexer<'a> {
    file: &'a str,
    code: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(file: &'a str, code: &'a str) -> Self {
        Self { file, code }
    }

    pub fn parse(self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        for (line, text) in self.code.lines().enumerate() {
            tokens.extend(LineLexer::new(text, self.file, line).parse());
        }
        tokens
    }
}

pub struct LineLexer<'a> {
    text: &'a str,
    file: &'a str,
    line: usize,
}

impl<'a> LineLexer<'a> {
    pub fn new(text: &'a str, file: &'a str, line: usize) -> Self {
        Self { text, file, line }
    }

    pub fn parse(self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;
        for (idx, ch) in self.text.char_indices() {
            match (ch.is_whitespace(), start) {
                (true, Some(begin)) => {
                    tokens.push(self.token(begin, idx));
                    start = None;
                }
                (false, None) => start = Some(idx),
                _ => {}
            }
        }
        if let Some(begin) = start {
            tokens.push(self.token(begin, self.text.len()));
        }
        tokens
    }

    fn token(&self, begin: usize, end: usize) -> Token<'a> {
        let pos = Pos {
            file: self.file,
            line: self.line,
            col: begin,
        };
        let text: &'a str = self.text;
        Token::new(&text[begin..end], pos)
    }
}
