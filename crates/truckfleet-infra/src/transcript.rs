//! Plain-text conversation transcript

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tracing::debug;
use truckfleet_domain::model::ConversationLog;
use truckfleet_domain::repository::TranscriptEnding;
use truckfleet_types::{Error, Result};

pub const QUIT_MARKER: &str = "Customer has quit!";

pub fn write_transcript<W: Write>(
    mut writer: W,
    log: &ConversationLog,
    ending: TranscriptEnding,
) -> Result<()> {
    for line in log.lines() {
        writeln!(writer, "{}", line)?;
    }
    if ending == TranscriptEnding::Quit {
        writeln!(writer, "{}", QUIT_MARKER)?;
    }
    writer.flush()?;
    Ok(())
}

/// Create the transcript file; fails if it already exists
pub fn save_transcript(path: &Path, log: &ConversationLog, ending: TranscriptEnding) -> Result<()> {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => Error::TranscriptExists(path.to_path_buf()),
            _ => Error::Io(e),
        })?;
    write_transcript(file, log, ending)?;
    debug!(path = %path.display(), lines = log.len(), ?ending, "transcript written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log() -> ConversationLog {
        let mut log = ConversationLog::new();
        log.bot("Please tell me your name: ");
        log.customer("Ana");
        log
    }

    #[test]
    fn test_completed_transcript() {
        let mut buf = Vec::new();
        write_transcript(&mut buf, &log(), TranscriptEnding::Completed).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Bot: Please tell me your name: \nCustomer: Ana\n"
        );
    }

    #[test]
    fn test_quit_marker_is_last_line() {
        let mut buf = Vec::new();
        write_transcript(&mut buf, &log(), TranscriptEnding::Quit).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().last(), Some(QUIT_MARKER));
        assert_eq!(text.lines().count(), 3);
    }
}
