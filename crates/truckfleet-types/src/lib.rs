//! Core types for truckfleet

mod error;

pub use error::*;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// How the scraper finds the continent heading of a list table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionStrategy {
    /// Fixed walk back over sibling nodes, tuned to the current page layout
    #[default]
    Offset,
    /// Nearest preceding section heading
    Nearest,
}

impl std::fmt::Display for SectionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionStrategy::Offset => write!(f, "offset"),
            SectionStrategy::Nearest => write!(f, "nearest"),
        }
    }
}

/// Result of one interactive step: either a value, or the customer asked to quit.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Completed(T),
    Cancelled,
}

impl<T> Outcome<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Completed(v) => Outcome::Completed(f(v)),
            Outcome::Cancelled => Outcome::Cancelled,
        }
    }

    pub fn completed(self) -> Option<T> {
        match self {
            Outcome::Completed(v) => Some(v),
            Outcome::Cancelled => None,
        }
    }
}

/// Unwrap a `Result<Outcome<T>>`, returning `Ok(Outcome::Cancelled)` from the
/// enclosing function when the step was cancelled.
#[macro_export]
macro_rules! proceed {
    ($step:expr) => {
        match $step? {
            $crate::Outcome::Completed(value) => value,
            $crate::Outcome::Cancelled => return Ok($crate::Outcome::Cancelled),
        }
    };
}
