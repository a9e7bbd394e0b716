//! CSV writers for the fleet table and the brand catalog

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::debug;
use truckfleet_domain::model::{BrandRecord, Fleet, TruckRecord};
use truckfleet_types::Result;

/// Write the fleet with a leading `Truck nr.` index column starting at 1
pub fn write_fleet_csv<W: Write>(writer: W, fleet: &Fleet) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    let mut header = vec![Fleet::INDEX_LABEL];
    header.extend(TruckRecord::LABELS);
    wtr.write_record(&header)?;
    for (number, truck) in fleet.iter() {
        let values = truck.values();
        wtr.write_record(std::iter::once(number.to_string()).chain(values))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn save_fleet_csv(path: &Path, fleet: &Fleet) -> Result<()> {
    let file = File::create(path)?;
    write_fleet_csv(file, fleet)?;
    debug!(path = %path.display(), rows = fleet.len(), "fleet csv written");
    Ok(())
}

/// Write brand records with an unnamed 0-based index column.
/// A missing country is an empty field.
pub fn write_brands_csv<W: Write>(writer: W, records: &[BrandRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    let mut header = vec![""];
    header.extend(BrandRecord::COLUMNS);
    wtr.write_record(&header)?;
    for (index, record) in records.iter().enumerate() {
        wtr.write_record([
            index.to_string().as_str(),
            record.brand.as_str(),
            record.company.as_str(),
            record.country.as_deref().unwrap_or(""),
            record.continent.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn save_brands_csv(path: &Path, records: &[BrandRecord]) -> Result<()> {
    let file = File::create(path)?;
    write_brands_csv(file, records)?;
    debug!(path = %path.display(), rows = records.len(), "brand csv written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn truck(brand: &str, model: &str) -> TruckRecord {
        TruckRecord {
            brand: brand.to_string(),
            model: model.to_string(),
            engine_cc: 12700,
            axle_count: 3,
            weight_tonnes: 9.5,
            max_load_tonnes: 26.0,
        }
    }

    #[test]
    fn test_fleet_csv_layout() {
        let mut fleet = Fleet::default();
        fleet.push(truck("Scania", "SC 3200"));
        fleet.push(truck("Volvo", "FH 16"));

        let mut buf = Vec::new();
        write_fleet_csv(&mut buf, &fleet).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Truck nr.,Brand,Model,Engine (cc),Axle number,Weight (T),Max load (T)"
        );
        assert_eq!(lines[1], "1,Scania,SC 3200,12700,3,9.5,26");
        assert_eq!(lines[2], "2,Volvo,FH 16,12700,3,9.5,26");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_brands_csv_layout() {
        let records = vec![
            BrandRecord {
                brand: "Actros".to_string(),
                company: "Mercedes-Benz, Daimler".to_string(),
                country: Some("Germany".to_string()),
                continent: "Europe".to_string(),
            },
            BrandRecord {
                brand: "Kenworth".to_string(),
                company: "Paccar".to_string(),
                country: None,
                continent: "North America".to_string(),
            },
        ];
        let mut buf = Vec::new();
        write_brands_csv(&mut buf, &records).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], ",Brand,Company name,Country,Continent");
        assert_eq!(lines[1], "0,Actros,\"Mercedes-Benz, Daimler\",Germany,Europe");
        assert_eq!(lines[2], "1,Kenworth,Paccar,,North America");
    }
}
