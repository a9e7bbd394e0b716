//! Fleet dialogue use case: run the conversation and persist what it produced

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{debug, info};
use truckfleet_domain::{Console, Dialogue, Fleet, SessionStore, TranscriptEnding};
use truckfleet_infra::persistence::FileSessionStore;
use truckfleet_types::{Outcome, Result};

use crate::config::Config;
use crate::session::{provisional_identity, SessionPaths};

/// What a finished session left on disk
#[derive(Debug)]
pub enum SessionOutcome {
    Completed { paths: SessionPaths, fleet: Fleet },
    Quit { transcript: PathBuf },
}

/// Run one customer session on `console`, dating files with `today`
pub fn run_session<C: Console>(console: C, config: &Config, today: NaiveDate) -> Result<SessionOutcome> {
    let mut dialogue = Dialogue::new(console, config.dialogue_options())?;

    // Used only if the customer quits before giving their name
    let mut paths = SessionPaths::new(&config.data_dir, today, &provisional_identity());
    debug!(transcript = %paths.transcript.display(), "provisional paths");

    dialogue.greet()?;
    let identity = match dialogue.collect_identity()? {
        Outcome::Completed(identity) => identity,
        Outcome::Cancelled => return finish_quit(&dialogue, &paths, config),
    };
    paths = SessionPaths::new(&config.data_dir, today, &identity);
    info!(name = %identity.name, fleet = %identity.fleet_id, "session identified");

    let fleet = match dialogue.collect_fleet()? {
        Outcome::Completed(fleet) => fleet,
        Outcome::Cancelled => return finish_quit(&dialogue, &paths, config),
    };
    dialogue.farewell()?;

    let store = open_store(&paths, config);
    store.save_fleet(&fleet)?;
    store.save_transcript(dialogue.log(), TranscriptEnding::Completed)?;
    info!(trucks = fleet.len(), path = %paths.fleet_data.display(), "session saved");

    Ok(SessionOutcome::Completed { paths, fleet })
}

fn finish_quit<C: Console>(
    dialogue: &Dialogue<C>,
    paths: &SessionPaths,
    config: &Config,
) -> Result<SessionOutcome> {
    open_store(paths, config).save_transcript(dialogue.log(), TranscriptEnding::Quit)?;
    info!(path = %paths.transcript.display(), "session quit, transcript saved");
    Ok(SessionOutcome::Quit {
        transcript: paths.transcript.clone(),
    })
}

fn open_store(paths: &SessionPaths, config: &Config) -> FileSessionStore {
    let store = FileSessionStore::new(paths.fleet_data.clone(), paths.transcript.clone());
    if config.create_data_dir {
        store
    } else {
        store.without_dir_creation()
    }
}
