use crate::diag::Diag;
use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub addr: usize,
    /// Ordinal of the defining module
    pub module: usize,
    pub diags: Vec<Diag>,
}

/// Global symbol table, kept in first definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable(IndexMap<String, Symbol>);

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable(IndexMap::new())
    }

    /// Define `name` unless it already exists. The first address always wins;
    /// a redefinition is only recorded against the existing entry.
    pub fn define(&mut self, name: &str, addr: usize, module: usize) -> bool {
        match self.0.get_mut(name) {
            Some(symbol) => {
                symbol.diags.push(Diag::MultiplyDefined);
                false
            }
            None => {
                let symbol = Symbol {
                    addr,
                    module,
                    diags: vec![],
                };
                self.0.insert(name.to_string(), symbol);
                true
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn attach(&mut self, name: &str, diag: Diag) {
        if let Some(symbol) = self.0.get_mut(name) {
            symbol.diags.push(diag);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.0.get(name)
    }

    pub fn get_addr(&self, name: &str) -> Option<usize> {
        self.0.get(name).map(|symbol| symbol.addr)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Symbol)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
