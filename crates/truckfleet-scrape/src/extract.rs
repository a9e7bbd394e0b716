//! Brand entry extraction from the manufacturer list page

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};
use truckfleet_domain::model::{sort_by_brand, BrandRecord};
use truckfleet_types::{Error, Result};

use crate::clean::{is_filler, CleaningRules};
use crate::locate::SectionLocator;

const TABLE_SELECTOR: &str = r#"table.multicol[role="presentation"]"#;
const ENTRY_SELECTOR: &str = "li";

/// Only one country in Oceania currently builds trucks
const OCEANIA: &str = "Oceania";
const OCEANIA_COUNTRY: &str = "Australia";

/// A child node of a list entry, filler text removed
#[derive(Debug, Clone, Copy)]
enum EntryPart<'a> {
    Element(ElementRef<'a>),
    Text(&'a str),
}

pub struct BrandExtractor {
    locator: Box<dyn SectionLocator>,
    rules: CleaningRules,
    tables: Selector,
    entries: Selector,
}

impl BrandExtractor {
    pub fn new(locator: Box<dyn SectionLocator>) -> Result<Self> {
        Ok(Self {
            locator,
            rules: CleaningRules::standard()?,
            tables: parse_selector(TABLE_SELECTOR)?,
            entries: parse_selector(ENTRY_SELECTOR)?,
        })
    }

    /// Extract every brand from `html`, sorted by brand name
    pub fn extract(&self, html: &str) -> Result<Vec<BrandRecord>> {
        let doc = Html::parse_document(html);
        let mut records = Vec::new();

        for (index, table) in doc.select(&self.tables).enumerate() {
            let continent = self
                .locator
                .locate(table)
                .ok_or(Error::SectionNotFound { table: index })?;
            let before = records.len();
            for entry in table.select(&self.entries) {
                match self.extract_entry(entry, &continent) {
                    Some(record) => records.push(record),
                    None => debug!(table = index, html = %entry.html(), "entry skipped"),
                }
            }
            debug!(table = index, %continent, entries = records.len() - before, "table parsed");
        }

        sort_by_brand(&mut records);
        info!(brands = records.len(), "brand list extracted");
        Ok(records)
    }

    fn extract_entry(&self, entry: ElementRef<'_>, continent: &str) -> Option<BrandRecord> {
        let parts = entry_parts(entry);

        let (brand, company) = match parts.first()? {
            EntryPart::Element(el) => {
                let brand = el.text().next().unwrap_or_default();
                let company = el.value().attr("title").unwrap_or(brand);
                (brand, company)
            }
            EntryPart::Text(text) => (*text, *text),
        };
        let brand = self.rules.apply(brand).trim().to_string();
        let company = self.rules.apply(company).trim().to_string();
        if brand.is_empty() {
            return None;
        }

        let mut country = (continent == OCEANIA).then(|| OCEANIA_COUNTRY.to_string());
        if let Some(part) = parts.get(1) {
            country = match part {
                EntryPart::Element(el) => el.value().attr("title").map(str::to_string),
                EntryPart::Text(text) => {
                    Some(text.replace(['(', ')'], "").trim().to_string()).filter(|c| !c.is_empty())
                }
            };
        }

        Some(BrandRecord {
            brand,
            company,
            country,
            continent: continent.to_string(),
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::InvalidSelector(format!("{}: {}", css, e)))
}

fn entry_parts(entry: ElementRef<'_>) -> Vec<EntryPart<'_>> {
    entry
        .children()
        .filter_map(|child| {
            if let Some(el) = ElementRef::wrap(child) {
                Some(EntryPart::Element(el))
            } else {
                let text: &str = child.value().as_text()?;
                (!is_filler(text)).then_some(EntryPart::Text(text))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locate::SiblingOffsetLocator;

    fn page(heading_id: &str, items: &str) -> String {
        format!(
            "<html><body>\
             <h2><span id=\"{}\">x</span></h2>\n<p>intro</p>\n\
             <div><table class=\"multicol\" role=\"presentation\"><tr><td><ul>{}</ul></td></tr></table></div>\
             </body></html>",
            heading_id, items
        )
    }

    fn extract(html: &str) -> Vec<BrandRecord> {
        BrandExtractor::new(Box::new(SiblingOffsetLocator::default()))
            .unwrap()
            .extract(html)
            .unwrap()
    }

    #[test]
    fn test_link_entry_uses_title_as_company() {
        let records = extract(&page(
            "Europe",
            r#"<li><a href="/wiki/Acme_Motors" title="Acme Motors">Acme</a></li>"#,
        ));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].brand, "Acme");
        assert_eq!(records[0].company, "Acme Motors");
        assert_eq!(records[0].country, None);
        assert_eq!(records[0].continent, "Europe");
    }

    #[test]
    fn test_country_from_link_title() {
        let records = extract(&page(
            "Europe",
            r#"<li><a title="Tatra (truck manufacturer)">Tatra</a> (<a title="Czech Republic">Czech Republic</a>)</li>"#,
        ));
        assert_eq!(records[0].company, "Tatra");
        assert_eq!(records[0].country.as_deref(), Some("Czech Republic"));
    }

    #[test]
    fn test_country_from_plain_text() {
        let records = extract(&page(
            "Asia",
            r#"<li><a title="Ashok Leyland">Ashok Leyland</a> (India)</li>"#,
        ));
        assert_eq!(records[0].country.as_deref(), Some("India"));
    }

    #[test]
    fn test_plain_text_entry() {
        let records = extract(&page("Africa", "<li>Bell Equipment</li>"));
        assert_eq!(records[0].brand, "Bell Equipment");
        assert_eq!(records[0].company, "Bell Equipment");
    }

    #[test]
    fn test_link_without_title_keeps_country_unknown() {
        let records = extract(&page(
            "Oceania",
            r#"<li><a title="Kenworth Australia">Kenworth</a> (<a href="/x">?</a>)</li>"#,
        ));
        assert_eq!(records[0].country, None);
    }

    #[test]
    fn test_oceania_defaults_to_australia() {
        let records = extract(&page(
            "Oceania",
            r#"<li><a title="Hamelex White">Hamelex White</a></li>"#,
        ));
        assert_eq!(records[0].country.as_deref(), Some("Australia"));
    }

    #[test]
    fn test_missing_page_marker_stripped() {
        let records = extract(&page(
            "North_America",
            r#"<li><a class="new" title="Oshkosh (page does not exist)">Oshkosh</a></li>"#,
        ));
        assert_eq!(records[0].company, "Oshkosh");
        assert_eq!(records[0].continent, "North America");
    }

    #[test]
    fn test_sorted_by_brand() {
        let records = extract(&page(
            "Europe",
            r#"<li><a title="Volvo Trucks">Volvo</a></li><li><a title="DAF Trucks">DAF</a></li><li>Iveco</li>"#,
        ));
        let brands: Vec<_> = records.iter().map(|r| r.brand.as_str()).collect();
        assert_eq!(brands, vec!["DAF", "Iveco", "Volvo"]);
    }

    #[test]
    fn test_unlocatable_table_is_an_error() {
        let html = r#"<html><body><table class="multicol" role="presentation"><tr><td><ul><li>X</li></ul></td></tr></table></body></html>"#;
        let extractor = BrandExtractor::new(Box::new(SiblingOffsetLocator::default())).unwrap();
        assert!(matches!(
            extractor.extract(html),
            Err(Error::SectionNotFound { table: 0 })
        ));
    }
}
