//! Conversation transcript

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Bot,
    Customer,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::Bot => write!(f, "Bot"),
            Speaker::Customer => write!(f, "Customer"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub speaker: Speaker,
    pub text: String,
}

impl fmt::Display for Utterance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.speaker, self.text)
    }
}

/// Append-only record of everything said during a session
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    entries: Vec<Utterance>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bot(&mut self, text: impl Into<String>) {
        self.push(Speaker::Bot, text.into());
    }

    pub fn customer(&mut self, text: impl Into<String>) {
        self.push(Speaker::Customer, text.into());
    }

    fn push(&mut self, speaker: Speaker, text: String) {
        self.entries.push(Utterance { speaker, text });
    }

    pub fn entries(&self) -> &[Utterance] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Transcript lines in `Speaker: text` form
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|u| u.to_string())
    }
}
