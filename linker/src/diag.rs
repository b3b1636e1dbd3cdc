use color_print::cformat;
use serde::{Serialize, Serializer};
use strum::Display;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Level {
    Error,
    Warning,
}

/// Recoverable problems found while linking.
///
/// Each one has already been patched over with a fallback value by the time
/// it is recorded, so the link always runs to completion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diag {
    #[error("This variable is multiply defined; first value used.")]
    MultiplyDefined,

    #[error("Definition exceeds module size; first word in module used.")]
    DefinitionExceedsModule,

    #[error("Absolute address exceeds machine size; zero used.")]
    AbsoluteExceedsMachine,

    #[error("Relative address exceeds module size; zero used.")]
    RelativeExceedsModule,

    #[error("{0} is not defined; zero used.")]
    Undefined(String),

    #[error("External address is not bound to any symbol; zero used.")]
    Unbound,

    #[error("Multiple variables used in instruction; all but first ignored.")]
    MultipleUses,

    #[error("Use of {0} in module {1} exceeds module size; use ignored.")]
    UseExceedsModule(String, usize),

    #[error("{0} was defined in module {1} but never used.")]
    NeverUsed(String, usize),
}

impl Diag {
    pub fn level(&self) -> Level {
        match self {
            Diag::NeverUsed(..) => Level::Warning,
            _ => Level::Error,
        }
    }

    /// Message with its level prefix, as printed in listings.
    pub fn message(&self) -> String {
        format!("{}: {}", self.level(), self)
    }

    pub fn cformat(&self) -> String {
        match self.level() {
            Level::Error => cformat!("<red,bold>{}</>: {}", self.level(), self),
            Level::Warning => cformat!("<yellow,bold>{}</>: {}", self.level(), self),
        }
    }
}

impl Serialize for Diag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.message())
    }
}

#[test]
fn test() {
    assert_eq!(
        Diag::MultiplyDefined.message(),
        "Error: This variable is multiply defined; first value used."
    );
    assert_eq!(
        Diag::Undefined("X21".to_string()).message(),
        "Error: X21 is not defined; zero used."
    );
    assert_eq!(
        Diag::UseExceedsModule("Z".to_string(), 3).message(),
        "Error: Use of Z in module 3 exceeds module size; use ignored."
    );
    assert_eq!(
        Diag::NeverUsed("Y".to_string(), 2).message(),
        "Warning: Y was defined in module 2 but never used."
    );
}
