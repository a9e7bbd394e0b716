//! Customer identity and output file naming

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use truckfleet_domain::Identity;
use uuid::Uuid;

const SEPARATOR: &str = "_-_";
const FLEET_SUFFIX: &str = "fleetdata.csv";
const TRANSCRIPT_SUFFIX: &str = "conversation.txt";

/// Where one session's fleet table and transcript are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPaths {
    pub fleet_data: PathBuf,
    pub transcript: PathBuf,
}

impl SessionPaths {
    /// `{date}_-_{name}_-_{fleet}_-_{suffix}` inside `data_dir`
    pub fn new(data_dir: &Path, date: NaiveDate, identity: &Identity) -> Self {
        let base = [
            date.format("%Y-%m-%d").to_string(),
            sanitize(&identity.name),
            sanitize(&identity.fleet_id),
        ]
        .join(SEPARATOR);
        Self {
            fleet_data: data_dir.join(format!("{}{}{}", base, SEPARATOR, FLEET_SUFFIX)),
            transcript: data_dir.join(format!("{}{}{}", base, SEPARATOR, TRANSCRIPT_SUFFIX)),
        }
    }
}

/// Drop spaces and path separators so the value stays one file name component
pub fn sanitize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ' ' | '/' | '\\'))
        .collect()
}

/// Stand-in identity used until the customer has introduced themselves
pub fn provisional_identity() -> Identity {
    let token = Uuid::new_v4().simple().to_string();
    let token = &token[..8];
    Identity {
        name: format!("user{}", token),
        fleet_id: format!("fleet{}", token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_file_name_scheme() {
        let identity = Identity {
            name: "Ana Horvat".to_string(),
            fleet_id: "North Yard 2".to_string(),
        };
        let paths = SessionPaths::new(Path::new("./data"), date(), &identity);
        assert_eq!(
            paths.fleet_data,
            PathBuf::from("./data/2024-03-09_-_AnaHorvat_-_NorthYard2_-_fleetdata.csv")
        );
        assert_eq!(
            paths.transcript,
            PathBuf::from("./data/2024-03-09_-_AnaHorvat_-_NorthYard2_-_conversation.txt")
        );
    }

    #[test]
    fn test_sanitize_strips_separators() {
        assert_eq!(sanitize("  a b  "), "ab");
        assert_eq!(sanitize("../etc/x"), "..etcx");
        assert_eq!(sanitize(r"c:\fleet"), "c:fleet");
    }

    #[test]
    fn test_provisional_identity_shares_token() {
        let identity = provisional_identity();
        let token = identity.name.strip_prefix("user").unwrap();
        assert_eq!(token.len(), 8);
        assert_eq!(identity.fleet_id, format!("fleet{}", token));
        assert_ne!(provisional_identity(), identity);
    }
}
