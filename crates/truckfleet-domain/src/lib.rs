//! Domain module containing the fleet records, field rules and the
//! customer dialogue

pub mod dialogue;
pub mod model;
pub mod repository;
pub mod rules;

pub use dialogue::{Console, Dialogue, DialogueOptions};
#[cfg(any(test, feature = "test-util"))]
pub use dialogue::ScriptedConsole;
pub use model::*;
pub use repository::{SessionStore, TranscriptEnding};
pub use rules::{FieldRule, FieldRules};
