//! Console wrapper that records every exchange in the conversation log

use std::str::FromStr;
use std::time::Duration;

use tracing::{debug, info, warn};
use truckfleet_types::{proceed, Outcome, Result};

use super::console::Console;
use crate::model::ConversationLog;
use crate::rules::{is_affirmative, is_negative, is_quit, FieldRule};

const CONFIRM_RETRY: &str = "Please answer with \"y\" or \"n\": ";

pub(crate) struct Channel<C> {
    console: C,
    log: ConversationLog,
    max_attempts: Option<u32>,
    pause: Duration,
}

impl<C: Console> Channel<C> {
    pub(crate) fn new(console: C, max_attempts: Option<u32>, pause: Duration) -> Self {
        Self {
            console,
            log: ConversationLog::new(),
            max_attempts,
            pause,
        }
    }

    pub(crate) fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub(crate) fn console(&self) -> &C {
        &self.console
    }

    pub(crate) fn into_parts(self) -> (C, ConversationLog) {
        (self.console, self.log)
    }

    pub(crate) fn say(&mut self, text: &str) -> Result<()> {
        self.console.write_line(text)?;
        self.log.bot(text);
        Ok(())
    }

    /// Visual spacing only; not part of the transcript
    pub(crate) fn blank_line(&mut self) -> Result<()> {
        self.console.write_line("")
    }

    pub(crate) fn pause(&mut self) {
        if !self.pause.is_zero() {
            self.console.pause(self.pause);
        }
    }

    /// Ask once. A quit keyword or closed input cancels.
    pub(crate) fn ask(&mut self, question: &str) -> Result<Outcome<String>> {
        let answer = self.console.prompt(question)?;
        self.log.bot(question);
        let Some(answer) = answer else {
            info!("input closed, ending session");
            return Ok(Outcome::Cancelled);
        };
        self.log.customer(answer.as_str());
        if is_quit(&answer) {
            info!("customer quit");
            return Ok(Outcome::Cancelled);
        }
        Ok(Outcome::Completed(answer))
    }

    /// Ask until `accept` takes the answer. A rejection carries the next prompt.
    pub(crate) fn ask_until<T, F>(&mut self, prompt: &str, mut accept: F) -> Result<Outcome<T>>
    where
        F: FnMut(&str) -> std::result::Result<T, String>,
    {
        let mut current = prompt.to_string();
        let mut attempts = 0u32;
        loop {
            let answer = proceed!(self.ask(&current));
            match accept(&answer) {
                Ok(value) => return Ok(Outcome::Completed(value)),
                Err(retry) => {
                    attempts += 1;
                    debug!(attempts, answer = %answer, "answer rejected");
                    if self.max_attempts.is_some_and(|max| attempts >= max) {
                        warn!(attempts, "too many invalid answers, ending session");
                        return Ok(Outcome::Cancelled);
                    }
                    current = retry;
                }
            }
        }
    }

    pub(crate) fn ask_field<T: FromStr>(&mut self, rule: &FieldRule) -> Result<Outcome<T>> {
        self.ask_until(rule.prompt, |answer| {
            if rule.accepts(answer) {
                answer.parse().map_err(|_| rule.error_prompt.to_string())
            } else {
                Err(rule.error_prompt.to_string())
            }
        })
    }

    /// Decimal field; values that overflow to infinity are rejected
    pub(crate) fn ask_tonnes(&mut self, rule: &FieldRule) -> Result<Outcome<f64>> {
        self.ask_until(rule.prompt, |answer| {
            if !rule.accepts(answer) {
                return Err(rule.error_prompt.to_string());
            }
            match answer.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value),
                _ => Err(rule.error_prompt.to_string()),
            }
        })
    }

    /// Yes/no question on the `> ` prompt. Returns `true` when confirmed.
    pub(crate) fn confirm(&mut self, strict: bool) -> Result<Outcome<bool>> {
        if !strict {
            return Ok(self.ask("> ")?.map(|answer| !is_negative(&answer)));
        }
        self.ask_until("> ", |answer| {
            if is_negative(answer) {
                Ok(false)
            } else if is_affirmative(answer) {
                Ok(true)
            } else {
                Err(CONFIRM_RETRY.to_string())
            }
        })
    }
}
