use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::parsers::parse_change_percent;

/// Display name → 1-day change in percent.
pub type ChangeMap = BTreeMap<String, f64>;

/// One table row reduced to the fields we care about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorRecord {
    pub name: String,
    pub volume: String,
    pub floorprice: String,
    pub change_1d: String,
    pub change_7d: Option<String>,
    pub image_src: String,
}

/// Output shape of records mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorItem {
    pub name: String,
    pub volume: String,
    pub floorprice: String,
    pub change: f64,
    pub img_src: String,
}

impl FloorRecord {
    /// Numeric 1-day change. Unparseable input yields 0.0.
    pub fn change_1d_percent(&self) -> f64 {
        parse_change_percent(&self.change_1d)
    }
}

impl From<&FloorRecord> for FloorItem {
    fn from(record: &FloorRecord) -> Self {
        Self {
            name: record.name.clone(),
            volume: record.volume.clone(),
            floorprice: record.floorprice.clone(),
            change: record.change_1d_percent(),
            img_src: record.image_src.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn item_serializes_with_service_keys() {
        let record = FloorRecord {
            name: "Pepe".to_string(),
            volume: "100".to_string(),
            floorprice: "2.5".to_string(),
            change_1d: "+8.7%".to_string(),
            change_7d: Some("-3.1%".to_string()),
            image_src: "https://img.example/pepe.png".to_string(),
        };

        let value = serde_json::to_value(FloorItem::from(&record)).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Pepe",
                "volume": "100",
                "floorprice": "2.5",
                "change": 8.7,
                "img_src": "https://img.example/pepe.png"
            })
        );
    }
}
