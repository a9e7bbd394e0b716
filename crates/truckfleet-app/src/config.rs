//! Configuration management for truckfleet
//!
//! Config stored at: ~/.config/truckfleet/config.json

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use truckfleet_domain::DialogueOptions;
use truckfleet_scrape::DEFAULT_SOURCE_URL;
use truckfleet_types::{ConfigError, OutputFormat, Result, SectionStrategy};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Folder receiving fleet data and transcripts
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Create `data_dir` when it is missing
    #[serde(default = "default_true")]
    pub create_data_dir: bool,

    /// Where the scraped brand list is written
    #[serde(default = "default_brands_output")]
    pub brands_output: PathBuf,

    /// Manufacturer list page
    #[serde(default = "default_source_url")]
    pub source_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Continent heading lookup (offset, nearest)
    #[serde(default)]
    pub section_strategy: SectionStrategy,

    /// Require an explicit y/n at confirmation prompts
    #[serde(default = "default_true")]
    pub strict_confirmation: bool,

    /// Invalid answers allowed per question; unlimited when absent
    #[serde(default)]
    pub max_attempts: Option<u32>,

    /// Pause between dialogue stages in milliseconds
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,

    /// Default output format for the brand summary (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_brands_output() -> PathBuf {
    PathBuf::from("./truck_brands.csv")
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("truckfleet/{}", env!("CARGO_PKG_VERSION"))
}

fn default_pause_ms() -> u64 {
    500
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            create_data_dir: true,
            brands_output: default_brands_output(),
            source_url: default_source_url(),
            user_agent: default_user_agent(),
            section_strategy: SectionStrategy::default(),
            strict_confirmation: true,
            max_attempts: None,
            pause_ms: default_pause_ms(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("truckfleet");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == Some(0) {
            return Err(ConfigError::InvalidValue("max_attempts must be at least 1".to_string()).into());
        }
        if self.source_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue("source_url is empty".to_string()).into());
        }
        Ok(())
    }

    pub fn dialogue_options(&self) -> DialogueOptions {
        DialogueOptions {
            strict_confirmation: self.strict_confirmation,
            max_attempts: self.max_attempts,
            pause: Duration::from_millis(self.pause_ms),
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Truckfleet Configuration")?;
        writeln!(f, "========================")?;
        writeln!(f)?;
        writeln!(f, "Data dir:            {}", self.data_dir.display())?;
        writeln!(f, "Create data dir:     {}", self.create_data_dir)?;
        writeln!(f, "Brands output:       {}", self.brands_output.display())?;
        writeln!(f, "Source URL:          {}", self.source_url)?;
        writeln!(f, "User agent:          {}", self.user_agent)?;
        writeln!(f, "Section strategy:    {}", self.section_strategy)?;
        writeln!(f, "Strict confirmation: {}", self.strict_confirmation)?;
        writeln!(
            f,
            "Max attempts:        {}",
            self.max_attempts
                .map(|n| n.to_string())
                .unwrap_or_else(|| "(unlimited)".to_string())
        )?;
        writeln!(f, "Pause:               {} ms", self.pause_ms)?;
        writeln!(f, "Output format:       {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:         {}", path.display())?;
        }

        Ok(())
    }
}
