//! Fleet of trucks keyed by 1-based truck number

use truckfleet_types::{Error, Result};

use super::truck::TruckRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fleet {
    trucks: Vec<TruckRecord>,
}

impl Fleet {
    pub const INDEX_LABEL: &'static str = "Truck nr.";

    /// Append a truck and return its truck number
    pub fn push(&mut self, truck: TruckRecord) -> usize {
        self.trucks.push(truck);
        self.trucks.len()
    }

    pub fn len(&self) -> usize {
        self.trucks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trucks.is_empty()
    }

    pub fn contains_number(&self, number: usize) -> bool {
        (1..=self.trucks.len()).contains(&number)
    }

    pub fn get(&self, number: usize) -> Option<&TruckRecord> {
        number.checked_sub(1).and_then(|i| self.trucks.get(i))
    }

    /// Replace the truck at `number`, returning the previous record
    pub fn replace(&mut self, number: usize, truck: TruckRecord) -> Result<TruckRecord> {
        if !self.contains_number(number) {
            return Err(Error::TruckNumberOutOfRange {
                number,
                size: self.trucks.len(),
            });
        }
        Ok(std::mem::replace(&mut self.trucks[number - 1], truck))
    }

    /// Iterate as `(truck number, record)`
    pub fn iter(&self) -> impl Iterator<Item = (usize, &TruckRecord)> {
        self.trucks.iter().enumerate().map(|(i, t)| (i + 1, t))
    }

    /// Render the whole fleet as a right-aligned text table
    pub fn render_table(&self) -> String {
        let mut rows: Vec<Vec<String>> = Vec::with_capacity(self.trucks.len() + 1);
        let mut header = vec![Self::INDEX_LABEL.to_string()];
        header.extend(TruckRecord::LABELS.iter().map(|l| l.to_string()));
        rows.push(header);
        for (number, truck) in self.iter() {
            let mut row = vec![number.to_string()];
            row.extend(truck.values());
            rows.push(row);
        }

        let mut widths = vec![0usize; rows[0].len()];
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        rows.iter()
            .map(|row| {
                row.iter()
                    .zip(&widths)
                    .map(|(cell, w)| format!("{:>width$}", cell, width = *w))
                    .collect::<Vec<_>>()
                    .join("  ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn truck(brand: &str) -> TruckRecord {
        TruckRecord {
            brand: brand.to_string(),
            model: "FH 16".to_string(),
            engine_cc: 16000,
            axle_count: 3,
            weight_tonnes: 9.0,
            max_load_tonnes: 30.5,
        }
    }

    #[test]
    fn test_replace_only_touches_one_row() {
        let mut fleet = Fleet::default();
        assert_eq!(fleet.push(truck("Volvo")), 1);
        assert_eq!(fleet.push(truck("Scania")), 2);
        assert_eq!(fleet.push(truck("MAN")), 3);

        let old = fleet.replace(2, truck("Iveco")).unwrap();
        assert_eq!(old.brand, "Scania");
        assert_eq!(fleet.len(), 3);
        assert_eq!(fleet.get(1).unwrap().brand, "Volvo");
        assert_eq!(fleet.get(2).unwrap().brand, "Iveco");
        assert_eq!(fleet.get(3).unwrap().brand, "MAN");
    }

    #[test]
    fn test_replace_out_of_range() {
        let mut fleet = Fleet::default();
        fleet.push(truck("Volvo"));
        assert!(matches!(
            fleet.replace(0, truck("DAF")),
            Err(Error::TruckNumberOutOfRange { number: 0, size: 1 })
        ));
        assert!(fleet.replace(2, truck("DAF")).is_err());
        assert!(fleet.get(0).is_none());
    }

    #[test]
    fn test_render_table() {
        let mut fleet = Fleet::default();
        fleet.push(truck("Volvo"));
        let table = fleet.render_table();
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Truck nr."));
        assert!(lines[0].ends_with("Max load (T)"));
        assert!(lines[1].contains("Volvo"));
        assert!(lines[1].ends_with("30.5"));
    }
}
