use super::token::Token;
use crate::error::{Error, Loc};
use arch::Mode;
use std::iter::Peekable;

/// Cursor over the token stream of an object file.
pub struct Parser<'a, I: Iterator<Item = Token<'a>>> {
    tokens: Peekable<I>,
}

impl<'a, I: Iterator<Item = Token<'a>>> Parser<'a, I> {
    pub fn new(tokens: I) -> Self {
        Parser {
            tokens: tokens.peekable(),
        }
    }

    /// Peek : Watch next token without consuming it
    pub fn peek(&mut self) -> Option<&Token<'a>> {
        self.tokens.peek()
    }

    /// Next : Consume next token, running out of tokens is fatal
    pub fn next(&mut self, expected: &str) -> Result<Token<'a>, Error> {
        self.tokens
            .next()
            .ok_or_else(|| Error::UnexpectedEOF(expected.to_string()))
    }

    /// Consume everything left and return how many tokens that was
    pub fn rest(&mut self) -> usize {
        self.tokens.by_ref().count()
    }

    /// Next token must be an integer
    pub fn int(&mut self, expected: &str) -> Result<i64, Error> {
        let token = self.next(expected)?;
        token.text.parse::<i64>().map_err(|_| unexpected(expected, &token))
    }

    /// Next token must be a non negative integer
    pub fn count(&mut self, expected: &str) -> Result<usize, Error> {
        let token = self.next(expected)?;
        token.text.parse::<usize>().map_err(|_| unexpected(expected, &token))
    }

    /// Next token is taken as a symbol name, whatever it looks like
    pub fn symbol(&mut self) -> Result<String, Error> {
        self.next("symbol name").map(|token| token.text.to_string())
    }

    /// Next token must be an addressing mode tag
    pub fn mode(&mut self) -> Result<Mode, Error> {
        let token = self.next("addressing mode")?;
        Mode::parse(token.text)
            .map_err(|_| Error::UnknownMode(token.text.to_string(), Loc::from(&token)))
    }
}

fn unexpected(expected: &str, token: &Token) -> Error {
    Error::UnexpectedToken {
        expected: expected.to_string(),
        found: token.text.to_string(),
        loc: token.into(),
    }
}

#[macro_export]
macro_rules! repeat {
    ($count:expr, $elem:expr) => {{
        let mut items = Vec::new();
        for _ in 0..$count {
            items.push($elem?);
        }
        items
    }};
}
