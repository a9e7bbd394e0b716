//! Brand list use case: load the manufacturer page, extract, export

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use truckfleet_domain::BrandRecord;
use truckfleet_infra::csv_export::save_brands_csv;
use truckfleet_scrape::{fetch_page, locator_for, BrandExtractor};
use truckfleet_types::{Result, SectionStrategy};

/// Where the page HTML comes from
#[derive(Debug, Clone)]
pub enum PageSource {
    Url(String),
    File(PathBuf),
}

impl std::fmt::Display for PageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageSource::Url(url) => write!(f, "{}", url),
            PageSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub fn load_page(source: &PageSource, user_agent: &str) -> Result<String> {
    match source {
        PageSource::Url(url) => fetch_page(url, user_agent),
        PageSource::File(path) => Ok(fs::read_to_string(path)?),
    }
}

pub fn scrape_brands(html: &str, strategy: SectionStrategy) -> Result<Vec<BrandRecord>> {
    BrandExtractor::new(locator_for(strategy))?.extract(html)
}

pub fn export_brands(records: &[BrandRecord], output: &Path) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    save_brands_csv(output, records)?;
    info!(rows = records.len(), path = %output.display(), "brand list saved");
    Ok(())
}

/// Brand count per continent, in first-seen order
pub fn continent_summary(records: &[BrandRecord]) -> Vec<(String, usize)> {
    let mut summary: Vec<(String, usize)> = Vec::new();
    for record in records {
        match summary.iter_mut().find(|(c, _)| *c == record.continent) {
            Some((_, count)) => *count += 1,
            None => summary.push((record.continent.clone(), 1)),
        }
    }
    summary
}
