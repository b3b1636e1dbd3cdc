pub mod inst;
pub mod machine;
pub mod mode;
pub mod word;

pub use inst::Inst;
pub use machine::Machine;
pub use mode::Mode;
pub use word::{Word, WordError};
