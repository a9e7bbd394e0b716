//! Repository trait definitions for data persistence

use truckfleet_types::Result;

use crate::model::{ConversationLog, Fleet};

/// How the session ended, as recorded at the bottom of the transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptEnding {
    Completed,
    Quit,
}

/// Storage for the two artifacts of a fleet session
pub trait SessionStore {
    /// Save the confirmed fleet table
    fn save_fleet(&self, fleet: &Fleet) -> Result<()>;

    /// Save the conversation transcript. Never overwrites an existing transcript.
    fn save_transcript(&self, log: &ConversationLog, ending: TranscriptEnding) -> Result<()>;
}
