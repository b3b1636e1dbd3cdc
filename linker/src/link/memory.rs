use crate::diag::Diag;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub value: i64,
    pub diags: Vec<Diag>,
}

/// Resolved memory image. Its length is fixed when it is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryMap {
    cells: Vec<Cell>,
}

impl MemoryMap {
    pub fn new(len: usize) -> Self {
        MemoryMap {
            cells: vec![Cell::default(); len],
        }
    }

    pub fn set(&mut self, addr: usize, value: i64) {
        if let Some(cell) = self.cells.get_mut(addr) {
            cell.value = value;
        }
    }

    pub fn attach(&mut self, addr: usize, diag: Diag) {
        if let Some(cell) = self.cells.get_mut(addr) {
            cell.diags.push(diag);
        }
    }

    pub fn get(&self, addr: usize) -> Option<&Cell> {
        self.cells.get(addr)
    }

    pub fn values(&self) -> Vec<i64> {
        self.cells.iter().map(|cell| cell.value).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Cell)> {
        self.cells.iter().enumerate()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
