use super::layout::{Layout, Placement};
use super::symbols::SymbolTable;
use crate::diag::Diag;
use crate::object::{Module, Object};
use indexmap::IndexMap;

/// Pass 1: place every module and build the global symbol table.
pub fn collect(object: &Object) -> (Layout, SymbolTable) {
    let layout = Layout::place(object);
    let mut symbols = SymbolTable::new();
    for (module, place) in object.modules.iter().zip(layout.placements()) {
        define_module(&mut symbols, module, place);
    }
    (layout, symbols)
}

/// Definitions of one module by name. A name repeated within the module keeps
/// its first position and takes the last address.
fn local_defs(module: &Module) -> IndexMap<&str, i64> {
    let mut defs = IndexMap::new();
    for def in &module.defs {
        defs.insert(def.name.as_str(), def.rel);
    }
    defs
}

fn define_module(symbols: &mut SymbolTable, module: &Module, place: &Placement) {
    for (name, rel) in local_defs(module) {
        let (addr, diag) = match place.absolute(rel) {
            Some(addr) => (addr, None),
            None => (place.base, Some(Diag::DefinitionExceedsModule)),
        };
        // A redefinition only gets the multiply defined error.
        if symbols.define(name, addr, place.ordinal) {
            if let Some(diag) = diag {
                log::debug!("{} at {} is outside module {}", name, rel, place.ordinal);
                symbols.attach(name, diag);
            }
        }
    }
}
