//! Persistence implementations
//!
//! This module provides file-based implementations of the repository traits.

mod file_session_store;

pub use file_session_store::FileSessionStore;
