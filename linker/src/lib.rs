mod config;
mod diag;
mod error;
pub mod grammer;
pub mod link;
mod listing;
mod object;

pub use arch::{Inst, Machine, Mode, Word};
pub use config::{load_machine, parse_machine};
pub use diag::{Diag, Level};
pub use error::{Error, Loc};
pub use link::{link, Linked};
pub use listing::{CellRow, Format, Listing, SymbolRow};
pub use object::{Def, Module, Object, Use};

/// Parse an object file and link it in one go.
pub fn link_source(file: &str, code: &str, machine: &Machine) -> Result<Linked, Error> {
    let object = Object::parse(file, code)?;
    Ok(link(&object, machine))
}
