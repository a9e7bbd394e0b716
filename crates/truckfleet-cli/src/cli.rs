//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use truckfleet_types::{OutputFormat, SectionStrategy};

#[derive(Parser)]
#[command(name = "truck-bot")]
#[command(version)]
#[command(about = "Conversational assistant that records a truck fleet")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Folder for fleet data and transcripts. Uses config value if not specified.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Treat any answer except "n"/"no" as a confirmation
    #[arg(long)]
    pub lenient: bool,

    /// End the session after this many invalid answers to one question
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Skip the pauses between dialogue stages
    #[arg(long)]
    pub no_pause: bool,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set data folder
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Require explicit y/n confirmations (true/false)
        #[arg(long)]
        set_strict: Option<bool>,

        /// Set pause between dialogue stages in milliseconds
        #[arg(long)]
        set_pause_ms: Option<u64>,

        /// Set invalid answer limit per question
        #[arg(long)]
        set_max_attempts: Option<u32>,

        /// Set continent heading lookup (offset, nearest)
        #[arg(long)]
        set_strategy: Option<SectionStrategy>,

        /// Set default output format (json, table)
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_invocation_runs_session() {
        let cli = Cli::try_parse_from(["truck-bot", "--lenient", "--data-dir", "/tmp/fleet"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.lenient);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/fleet")));
    }

    #[test]
    fn test_config_subcommand() {
        let cli = Cli::try_parse_from([
            "truck-bot", "config", "--set-strict", "false", "--set-strategy", "nearest",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Config {
                set_strict,
                set_strategy,
                ..
            }) => {
                assert_eq!(set_strict, Some(false));
                assert_eq!(set_strategy, Some(SectionStrategy::Nearest));
            }
            None => panic!("expected config subcommand"),
        }
    }
}
