//! Shared pieces of the truckfleet binaries

pub mod logging;
pub mod output;
