use serde::{Deserialize, Serialize};

/// Number of words addressable by the target machine.
pub const MACHINE_SIZE: usize = 200;

/// Target machine description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Machine {
    pub size: usize,
}

impl Default for Machine {
    fn default() -> Self {
        Machine { size: MACHINE_SIZE }
    }
}

impl Machine {
    pub fn new(size: usize) -> Self {
        Machine { size }
    }

    pub fn contains(&self, addr: usize) -> bool {
        addr < self.size
    }
}

#[test]
fn test() {
    let m = Machine::default();
    assert_eq!(m.size, 200);
    assert!(m.contains(199));
    assert!(!m.contains(200));
    assert!(Machine::new(10).contains(9));
}
