use arch::Inst;

/// Whole input of a link: the modules in the order they were assembled.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub modules: Vec<Module>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub defs: Vec<Def>,
    pub uses: Vec<Use>,
    pub text: Vec<Inst>,
}

/// Symbol defined at a relative address of its module.
#[derive(Debug, Clone, PartialEq)]
pub struct Def {
    pub name: String,
    pub rel: i64,
}

/// Symbol referenced from the listed relative addresses.
#[derive(Debug, Clone, PartialEq)]
pub struct Use {
    pub name: String,
    pub rels: Vec<i64>,
}

impl Module {
    /// Declared size, one word per instruction.
    pub fn size(&self) -> usize {
        self.text.len()
    }
}
