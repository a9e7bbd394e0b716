//! Truck brand catalog entry

use serde::Serialize;

/// One brand/company pair scraped from the manufacturer list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandRecord {
    /// Marque as shown in the list
    pub brand: String,
    /// Owning manufacturer
    pub company: String,
    /// Country of origin, when the entry names one
    pub country: Option<String>,
    /// Continent section the entry was listed under
    pub continent: String,
}

impl BrandRecord {
    pub const COLUMNS: [&'static str; 4] = ["Brand", "Company name", "Country", "Continent"];
}

/// Sort records by brand name, keeping page order for equal names
pub fn sort_by_brand(records: &mut [BrandRecord]) {
    records.sort_by(|a, b| a.brand.cmp(&b.brand));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(brand: &str, continent: &str) -> BrandRecord {
        BrandRecord {
            brand: brand.to_string(),
            company: brand.to_string(),
            country: None,
            continent: continent.to_string(),
        }
    }

    #[test]
    fn test_sort_is_stable() {
        let mut records = vec![
            record("Volvo", "Europe"),
            record("Isuzu", "Asia"),
            record("Volvo", "Oceania"),
            record("DAF", "Europe"),
        ];
        sort_by_brand(&mut records);
        let order: Vec<_> = records
            .iter()
            .map(|r| (r.brand.as_str(), r.continent.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("DAF", "Europe"),
                ("Isuzu", "Asia"),
                ("Volvo", "Europe"),
                ("Volvo", "Oceania"),
            ]
        );
    }
}
