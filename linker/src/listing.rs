use crate::diag::Diag;
use crate::error::Error;
use crate::link::Linked;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Text,
    Yaml,
    Json,
}

/// The three sections printed after a link.
#[derive(Debug, Serialize)]
pub struct Listing<'a> {
    pub symbols: IndexMap<&'a str, SymbolRow<'a>>,
    pub memory: Vec<CellRow<'a>>,
    pub trailing: &'a [Diag],
}

#[derive(Debug, Serialize)]
pub struct SymbolRow<'a> {
    pub addr: usize,
    pub module: usize,
    pub errors: &'a [Diag],
}

#[derive(Debug, Serialize)]
pub struct CellRow<'a> {
    pub addr: usize,
    pub value: i64,
    pub errors: &'a [Diag],
}

impl<'a> Listing<'a> {
    pub fn new(linked: &'a Linked) -> Self {
        let symbols = linked
            .symbols
            .iter()
            .map(|(name, symbol)| {
                let row = SymbolRow {
                    addr: symbol.addr,
                    module: symbol.module,
                    errors: &symbol.diags,
                };
                (name.as_str(), row)
            })
            .collect();
        let memory = linked
            .memory
            .iter()
            .map(|(addr, cell)| CellRow {
                addr,
                value: cell.value,
                errors: &cell.diags,
            })
            .collect();
        Listing {
            symbols,
            memory,
            trailing: &linked.trailing,
        }
    }

    pub fn render(&self, format: Format, color: bool) -> Result<String, Error> {
        match format {
            Format::Text => Ok(self.to_text(color)),
            Format::Yaml => Ok(serde_yaml::to_string(self)?),
            Format::Json => Ok(serde_json::to_string_pretty(self)? + "\n"),
        }
    }

    /// Plain listing: symbol table, memory map, trailing diagnostics.
    pub fn to_text(&self, color: bool) -> String {
        let fmt = |diag: &Diag| {
            if color {
                diag.cformat()
            } else {
                diag.message()
            }
        };

        let mut text = String::new();
        text.push_str("Symbol Table\n");
        for (name, row) in &self.symbols {
            text.push_str(&format!("{}={}", name, row.addr));
            for diag in row.errors {
                text.push_str(&format!(" {}", fmt(diag)));
            }
            text.push('\n');
        }
        text.push('\n');

        text.push_str("Memory Map\n");
        for row in &self.memory {
            text.push_str(&format!("{}: {}", row.addr, row.value));
            for diag in row.errors {
                text.push_str(&format!(" {}", fmt(diag)));
            }
            text.push('\n');
        }
        text.push('\n');

        for diag in self.trailing {
            text.push_str(&format!("{}\n", fmt(diag)));
        }
        text
    }
}
