//! Output formatting module

use std::path::Path;

use serde_json::json;
use truckfleet_app::brands::continent_summary;
use truckfleet_domain::BrandRecord;
use truckfleet_types::{OutputFormat, Result};

pub fn output_brand_summary(output_format: OutputFormat, records: &[BrandRecord], saved_to: &Path) -> Result<()> {
    println!("{}", render_brand_summary(output_format, records, saved_to)?);
    Ok(())
}

pub fn render_brand_summary(output_format: OutputFormat, records: &[BrandRecord], saved_to: &Path) -> Result<String> {
    let summary = continent_summary(records);

    if output_format == OutputFormat::Json {
        let continents: Vec<_> = summary
            .iter()
            .map(|(continent, brands)| json!({ "continent": continent, "brands": brands }))
            .collect();
        let value = json!({
            "output": saved_to.display().to_string(),
            "brands": records.len(),
            "continents": continents,
            "records": records,
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut lines = vec![
        "Brand List".to_string(),
        "==========".to_string(),
        format!("Saved to:        {}", saved_to.display()),
        format!("Brands:          {}", records.len()),
    ];
    if !summary.is_empty() {
        lines.push(String::new());
        lines.push(format!("{:<16} {:>6}", "Continent", "Brands"));
        for (continent, brands) in &summary {
            lines.push(format!("{:<16} {:>6}", continent, brands));
        }
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<BrandRecord> {
        ["Europe", "Asia", "Europe"]
            .iter()
            .enumerate()
            .map(|(i, continent)| BrandRecord {
                brand: format!("Brand{}", i),
                company: format!("Company{}", i),
                country: None,
                continent: continent.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_table_summary() {
        let text = render_brand_summary(OutputFormat::Table, &records(), Path::new("out.csv")).unwrap();
        assert!(text.contains("Saved to:        out.csv"));
        assert!(text.contains("Brands:          3"));
        assert!(text.contains(&format!("{:<16} {:>6}", "Europe", 2)));
    }

    #[test]
    fn test_json_summary() {
        let text = render_brand_summary(OutputFormat::Json, &records(), Path::new("out.csv")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["brands"], 3);
        assert_eq!(value["continents"][0]["continent"], "Europe");
        assert_eq!(value["continents"][1]["brands"], 1);
        assert_eq!(value["records"][2]["company"], "Company2");
        assert!(value["records"][0]["country"].is_null());
    }

    #[test]
    fn test_empty_table_has_no_continent_block() {
        let text = render_brand_summary(OutputFormat::Table, &[], Path::new("out.csv")).unwrap();
        assert!(!text.contains("Continent"));
    }
}
