use super::layout::{Layout, Placement};
use super::memory::MemoryMap;
use super::symbols::SymbolTable;
use super::usage::Usage;
use crate::diag::Diag;
use crate::object::{Module, Object};
use arch::{Inst, Machine};
use std::collections::HashMap;

/// Output of pass 2.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub memory: MemoryMap,
    /// Errors not tied to a symbol or an address, in processing order
    pub trailing: Vec<Diag>,
    pub usage: Usage,
}

/// Pass 2: bind use lists and relocate every instruction word.
pub fn resolve(
    object: &Object,
    layout: &Layout,
    symbols: &SymbolTable,
    machine: &Machine,
) -> Resolved {
    let mut resolver = Resolver {
        symbols,
        machine,
        memory: MemoryMap::new(layout.total()),
        trailing: Vec::new(),
        usage: Usage::new(),
    };
    for (module, place) in object.modules.iter().zip(layout.placements()) {
        let bindings = resolver.bind(module, place);
        resolver.relocate(module, place, &bindings);
    }
    Resolved {
        memory: resolver.memory,
        trailing: resolver.trailing,
        usage: resolver.usage,
    }
}

struct Resolver<'a> {
    symbols: &'a SymbolTable,
    machine: &'a Machine,
    memory: MemoryMap,
    trailing: Vec<Diag>,
    usage: Usage,
}

impl<'a> Resolver<'a> {
    /// Map absolute addresses of the module to the symbol their use list names.
    fn bind<'m>(&mut self, module: &'m Module, place: &Placement) -> HashMap<usize, &'m str> {
        let mut bindings = HashMap::new();
        for entry in &module.uses {
            for &rel in &entry.rels {
                self.usage.mark(&entry.name);
                let Some(addr) = place.absolute(rel) else {
                    self.trailing
                        .push(Diag::UseExceedsModule(entry.name.clone(), place.ordinal));
                    continue;
                };
                if bindings.contains_key(&addr) {
                    self.memory.attach(addr, Diag::MultipleUses);
                } else {
                    log::debug!("{} bound at {}", entry.name, addr);
                    bindings.insert(addr, entry.name.as_str());
                }
            }
        }
        bindings
    }

    fn relocate(&mut self, module: &Module, place: &Placement, bindings: &HashMap<usize, &str>) {
        for (offset, inst) in module.text.iter().enumerate() {
            let addr = place.base + offset;
            let (value, diag) = self.word(inst, addr, module.size(), place.base, bindings);
            self.memory.set(addr, value);
            if let Some(diag) = diag {
                self.memory.attach(addr, diag);
            }
        }
    }

    fn word(
        &self,
        inst: &Inst,
        addr: usize,
        count: usize,
        base: usize,
        bindings: &HashMap<usize, &str>,
    ) -> (i64, Option<Diag>) {
        match inst {
            Inst::I(value) => (*value, None),
            Inst::A(w) if self.machine.contains(w.field) => (w.raw, None),
            Inst::A(w) => (w.zeroed(), Some(Diag::AbsoluteExceedsMachine)),
            // Bounded by the instruction count of the module being relocated.
            Inst::R(w) if w.field < count => (w.with_addr(base + w.field), None),
            Inst::R(w) => (w.zeroed(), Some(Diag::RelativeExceedsModule)),
            Inst::E(w) => match bindings.get(&addr) {
                Some(name) => match self.symbols.get_addr(name) {
                    Some(target) => (w.with_addr(target), None),
                    None => (w.zeroed(), Some(Diag::Undefined(name.to_string()))),
                },
                None => (w.zeroed(), Some(Diag::Unbound)),
            },
        }
    }
}
