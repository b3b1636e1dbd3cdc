use crate::object::Object;

/// Where a module ends up in the memory image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// 1-based position of the module in the input
    pub ordinal: usize,
    pub base: usize,
    pub size: usize,
}

impl Placement {
    /// Absolute address of `rel`, or None when it falls outside the module.
    pub fn absolute(&self, rel: i64) -> Option<usize> {
        usize::try_from(rel)
            .ok()
            .filter(|&rel| rel < self.size)
            .map(|rel| self.base + rel)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    placements: Vec<Placement>,
    total: usize,
}

impl Layout {
    /// Modules are laid out back to back in input order.
    pub fn place(object: &Object) -> Self {
        let mut placements = Vec::new();
        let mut base = 0;
        for (idx, module) in object.modules.iter().enumerate() {
            let placement = Placement {
                ordinal: idx + 1,
                base,
                size: module.size(),
            };
            log::debug!(
                "module {} placed at {} ({} words)",
                placement.ordinal,
                placement.base,
                placement.size
            );
            placements.push(placement);
            base += module.size();
        }
        Layout {
            placements,
            total: base,
        }
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Size of the whole memory image.
    pub fn total(&self) -> usize {
        self.total
    }
}
