//! Truck-related type definitions

/// One truck as described by the customer
#[derive(Debug, Clone, PartialEq)]
pub struct TruckRecord {
    pub brand: String,
    /// Two letters, a space, digits (e.g. "SC 3200")
    pub model: String,
    /// Engine displacement in cubic centimeters
    pub engine_cc: u64,
    pub axle_count: u8,
    /// Empty weight in metric tonnes
    pub weight_tonnes: f64,
    /// Maximum load in metric tonnes
    pub max_load_tonnes: f64,
}

impl TruckRecord {
    pub const LABELS: [&'static str; 6] = [
        "Brand",
        "Model",
        "Engine (cc)",
        "Axle number",
        "Weight (T)",
        "Max load (T)",
    ];

    /// Field values in `LABELS` order
    pub fn values(&self) -> [String; 6] {
        [
            self.brand.clone(),
            self.model.clone(),
            self.engine_cc.to_string(),
            self.axle_count.to_string(),
            self.weight_tonnes.to_string(),
            self.max_load_tonnes.to_string(),
        ]
    }

    /// Label/value lines shown when asking the customer to confirm a truck
    pub fn card_lines(&self) -> Vec<String> {
        Self::LABELS
            .iter()
            .zip(self.values())
            .map(|(label, value)| format!("{:>15}   {:<10}", label, value))
            .collect()
    }
}

/// Who the customer is and which fleet they are describing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub fleet_id: String,
}
