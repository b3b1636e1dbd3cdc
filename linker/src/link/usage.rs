use super::symbols::SymbolTable;
use crate::diag::Diag;
use indexmap::IndexSet;

/// Symbols referenced by any use list of any module.
#[derive(Debug, Clone, Default)]
pub struct Usage(IndexSet<String>);

impl Usage {
    pub fn new() -> Self {
        Usage(IndexSet::new())
    }

    pub fn mark(&mut self, name: &str) {
        self.0.insert(name.to_string());
    }

    pub fn is_used(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// One warning per defined symbol nobody used, in symbol table order.
    pub fn unused(&self, symbols: &SymbolTable) -> Vec<Diag> {
        symbols
            .iter()
            .filter(|(name, _)| !self.is_used(name))
            .map(|(name, symbol)| Diag::NeverUsed(name.clone(), symbol.module))
            .collect()
    }
}

#[test]
fn test() {
    let mut symbols = SymbolTable::new();
    symbols.define("b", 0, 1);
    symbols.define("a", 1, 2);
    symbols.define("c", 2, 2);

    let mut usage = Usage::new();
    usage.mark("c");
    usage.mark("c");
    usage.mark("undefined");

    assert_eq!(
        usage.unused(&symbols),
        vec![
            Diag::NeverUsed("b".to_string(), 1),
            Diag::NeverUsed("a".to_string(), 2),
        ]
    );
}
