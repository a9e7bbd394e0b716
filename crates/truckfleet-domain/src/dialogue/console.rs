//! Terminal abstraction used by the dialogue

#[cfg(any(test, feature = "test-util"))]
use std::collections::VecDeque;
use std::time::Duration;

use truckfleet_types::Result;

/// Line-oriented text terminal
pub trait Console {
    /// Print a full line
    fn write_line(&mut self, text: &str) -> Result<()>;

    /// Show `prompt` without a newline and read one answer.
    /// Returns `None` once input is exhausted.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Pacing pause between dialogue stages
    fn pause(&mut self, _duration: Duration) {}
}

/// Console that answers from a fixed script and records everything shown
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    output: Vec<String>,
    prompts: Vec<String>,
}

#[cfg(any(test, feature = "test-util"))]
impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Lines written with `write_line`
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Prompts shown, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

#[cfg(any(test, feature = "test-util"))]
impl Console for ScriptedConsole {
    fn write_line(&mut self, text: &str) -> Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}
