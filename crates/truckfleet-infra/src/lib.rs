//! Infrastructure layer - file writers and the terminal console

pub mod csv_export;
pub mod persistence;
pub mod terminal;
pub mod transcript;
