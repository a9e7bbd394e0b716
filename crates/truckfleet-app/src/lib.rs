//! Application service layer - config, session naming, use cases

pub mod brands;
pub mod config;
pub mod fleet_session;
pub mod session;

pub use config::Config;
pub use fleet_session::{run_session, SessionOutcome};
pub use session::SessionPaths;
