//! truck-brands - export the truck manufacturer list to CSV

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use truckfleet_app::brands::{export_brands, load_page, scrape_brands, PageSource};
use truckfleet_app::Config;
use truckfleet_cli::{logging, output};
use truckfleet_types::{OutputFormat, Result, SectionStrategy};

#[derive(Parser, Debug)]
#[command(name = "truck-brands", version, about = "Export truck brands and manufacturers to CSV")]
struct Args {
    /// Read a saved copy of the page instead of fetching it
    #[arg(long, short = 'i', conflicts_with = "url")]
    input: Option<PathBuf>,

    /// Page to fetch. Uses config value if not specified.
    #[arg(long)]
    url: Option<String>,

    /// CSV file to write. Uses config value if not specified.
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Continent heading lookup (offset, nearest)
    #[arg(long)]
    strategy: Option<SectionStrategy>,

    /// Summary format (json, table)
    #[arg(long, short = 'f')]
    format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::load()?;

    let source = match args.input {
        Some(path) => PageSource::File(path),
        None => PageSource::Url(args.url.unwrap_or_else(|| config.source_url.clone())),
    };
    let html = match source {
        PageSource::Url(_) => {
            let spinner = fetch_spinner(&source);
            let page = load_page(&source, &config.user_agent);
            spinner.finish_and_clear();
            page?
        }
        PageSource::File(_) => load_page(&source, &config.user_agent)?,
    };

    let strategy = args.strategy.unwrap_or(config.section_strategy);
    let records = scrape_brands(&html, strategy)?;

    let output_path = args.output.unwrap_or_else(|| config.brands_output.clone());
    export_brands(&records, &output_path)?;

    let output_format = args.format.unwrap_or(config.output_format);
    output::output_brand_summary(output_format, &records, &output_path)
}

fn fetch_spinner(source: &PageSource) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]") {
        pb.set_style(style);
    }
    pb.set_message(format!("Fetching {}", source));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
