use crate::models::FloorRecord;

/// Render a record as a single line that `reparse` understands.
pub fn format_line(record: &FloorRecord) -> String {
    format!(
        "{}: Volume: {} ton; floorprice: {} ton; 1D: {}; 7D: {}.",
        record.name,
        record.volume,
        record.floorprice,
        record.change_1d,
        record.change_7d.as_deref().unwrap_or_default()
    )
}

pub fn format_lines(records: &[FloorRecord]) -> String {
    records
        .iter()
        .map(format_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pepe() -> FloorRecord {
        FloorRecord {
            name: "Pepe".to_string(),
            volume: "100".to_string(),
            floorprice: "2.5".to_string(),
            change_1d: "+8.7%".to_string(),
            change_7d: Some("-3.1%".to_string()),
            image_src: String::new(),
        }
    }

    #[test]
    fn formats_example_line() {
        assert_eq!(
            format_line(&pepe()),
            "Pepe: Volume: 100 ton; floorprice: 2.5 ton; 1D: +8.7%; 7D: -3.1%."
        );
    }

    #[test]
    fn missing_week_change_renders_empty() {
        let record = FloorRecord {
            change_7d: None,
            ..pepe()
        };
        assert_eq!(
            format_line(&record),
            "Pepe: Volume: 100 ton; floorprice: 2.5 ton; 1D: +8.7%; 7D: ."
        );
    }

    #[test]
    fn joins_one_line_per_record() {
        let text = format_lines(&[pepe(), pepe()]);
        assert_eq!(text.lines().count(), 2);
        assert_eq!(format_lines(&[]), "");
    }
}
