use super::lexer::Lexer;
use super::parsercore::Parser;
use super::token::Token;
use crate::error::Error;
use crate::object::{Def, Module, Object, Use};
use crate::repeat;
use arch::Inst;

/// Terminates the relative address list of a use entry.
pub const USE_SENTINEL: i64 = -1;

impl Object {
    pub fn parse(file: &str, code: &str) -> Result<Object, Error> {
        let tokens = Lexer::new(file, code).parse();
        let mut parser = Parser::new(tokens.into_iter());
        let object = parser.object()?;

        if parser.peek().is_some() {
            let ignored = parser.rest();
            log::warn!("{}: ignored {} tokens after the last module", file, ignored);
        }
        Ok(object)
    }
}

impl<'a, I: Iterator<Item = Token<'a>>> Parser<'a, I> {
    pub fn object(&mut self) -> Result<Object, Error> {
        let count = self.count("module count")?;
        let modules = repeat!(count, self.module());
        Ok(Object { modules })
    }

    // defCount (name relAddr)*  useCount (name relAddr* -1)*  textSize (mode word)*
    fn module(&mut self) -> Result<Module, Error> {
        let count = self.count("definition count")?;
        let defs = repeat!(count, self.def());

        let count = self.count("use count")?;
        let uses = repeat!(count, self.use_entry());

        let count = self.count("module size")?;
        let text = repeat!(count, self.inst());

        Ok(Module { defs, uses, text })
    }

    fn def(&mut self) -> Result<Def, Error> {
        let name = self.symbol()?;
        let rel = self.int("relative address")?;
        Ok(Def { name, rel })
    }

    fn use_entry(&mut self) -> Result<Use, Error> {
        let name = self.symbol()?;
        let mut rels = Vec::new();
        loop {
            match self.int("relative address or -1")? {
                USE_SENTINEL => break,
                rel => rels.push(rel),
            }
        }
        Ok(Use { name, rels })
    }

    fn inst(&mut self) -> Result<Inst, Error> {
        let mode = self.mode()?;
        let token = self.next("instruction word")?;
        Inst::decode(mode, token.text)
            .map_err(|e| Error::InvalidWord(token.text.to_string(), (&token).into(), e))
    }
}
