//! Command implementations

use chrono::Local;
use tracing::debug;
use truckfleet_app::{run_session, Config, SessionOutcome};
use truckfleet_cli::logging;
use truckfleet_infra::terminal::TerminalConsole;
use truckfleet_types::{OutputFormat, Result, SectionStrategy};

use crate::cli::{Cli, Commands};

pub fn execute(cli: Cli) -> Result<()> {
    logging::init(cli.verbose);

    match &cli.command {
        Some(Commands::Config {
            show,
            set_data_dir,
            set_strict,
            set_pause_ms,
            set_max_attempts,
            set_strategy,
            set_output,
            reset,
        }) => cmd_config(
            *show,
            ConfigChanges {
                data_dir: set_data_dir.clone(),
                strict: *set_strict,
                pause_ms: *set_pause_ms,
                max_attempts: *set_max_attempts,
                strategy: *set_strategy,
                output: *set_output,
            },
            *reset,
        ),
        None => cmd_run(&cli),
    }
}

fn cmd_run(cli: &Cli) -> Result<()> {
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref data_dir) = cli.data_dir {
        config.data_dir = data_dir.clone();
    }
    if cli.lenient {
        config.strict_confirmation = false;
    }
    if cli.max_attempts.is_some() {
        config.max_attempts = cli.max_attempts;
    }
    if cli.no_pause {
        config.pause_ms = 0;
    }
    config.validate()?;
    debug!(data_dir = %config.data_dir.display(), strict = config.strict_confirmation, "starting session");

    let today = Local::now().date_naive();
    match run_session(TerminalConsole::stdio(), &config, today)? {
        SessionOutcome::Completed { paths, fleet } => {
            println!();
            println!("Fleet data:  {} ({} trucks)", paths.fleet_data.display(), fleet.len());
            println!("Transcript:  {}", paths.transcript.display());
        }
        SessionOutcome::Quit { transcript } => {
            println!();
            println!("Transcript:  {}", transcript.display());
        }
    }
    Ok(())
}

struct ConfigChanges {
    data_dir: Option<std::path::PathBuf>,
    strict: Option<bool>,
    pause_ms: Option<u64>,
    max_attempts: Option<u32>,
    strategy: Option<SectionStrategy>,
    output: Option<OutputFormat>,
}

fn cmd_config(show: bool, changes: ConfigChanges, reset: bool) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(data_dir) = changes.data_dir {
        config.data_dir = data_dir;
        modified = true;
    }

    if let Some(strict) = changes.strict {
        config.strict_confirmation = strict;
        modified = true;
    }

    if let Some(pause_ms) = changes.pause_ms {
        config.pause_ms = pause_ms;
        modified = true;
    }

    if let Some(max_attempts) = changes.max_attempts {
        config.max_attempts = Some(max_attempts);
        modified = true;
    }

    if let Some(strategy) = changes.strategy {
        config.section_strategy = strategy;
        modified = true;
    }

    if let Some(output_format) = changes.output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
