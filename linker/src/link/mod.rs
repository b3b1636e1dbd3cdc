pub mod collect;
pub mod layout;
pub mod memory;
pub mod resolve;
pub mod symbols;
pub mod usage;

use crate::diag::Diag;
use crate::object::Object;
use arch::Machine;
use layout::Layout;
use memory::MemoryMap;
use symbols::SymbolTable;

/// Result of a complete link.
#[derive(Debug, Clone)]
pub struct Linked {
    pub layout: Layout,
    pub symbols: SymbolTable,
    pub memory: MemoryMap,
    /// In-pass errors first, then the never used warnings
    pub trailing: Vec<Diag>,
}

pub fn link(object: &Object, machine: &Machine) -> Linked {
    log::info!("1. Collect definitions of {} modules", object.modules.len());
    let (layout, symbols) = collect::collect(object);
    log::info!(
        "   {} symbols, {} words of memory",
        symbols.len(),
        layout.total()
    );

    log::info!("2. Resolve text against a {} word machine", machine.size);
    let resolved = resolve::resolve(object, &layout, &symbols, machine);

    log::info!("3. Check symbol usage");
    let mut trailing = resolved.trailing;
    trailing.extend(resolved.usage.unused(&symbols));

    Linked {
        layout,
        symbols,
        memory: resolved.memory,
        trailing,
    }
}

impl Linked {
    /// Every diagnostic of the link, wherever it is attached.
    pub fn diags(&self) -> impl Iterator<Item = &Diag> {
        self.symbols
            .iter()
            .flat_map(|(_, symbol)| symbol.diags.iter())
            .chain(self.memory.iter().flat_map(|(_, cell)| cell.diags.iter()))
            .chain(self.trailing.iter())
    }
}
