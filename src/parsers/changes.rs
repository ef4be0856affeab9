use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ChangeMap, FloorRecord};
use crate::parsers::format_lines;

static CHANGE_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^([A-Za-z]+): Volume:[^;]*; floorprice:[^;]*; 1D: *([+-]? ?[0-9]+(?:\.[0-9]+)?)%;",
    )
    .expect("Invalid change line regex")
});

/// Recover `display name → 1D change` from formatted lines.
///
/// Lines that don't match are skipped. A repeated name keeps the last value.
pub fn reparse(text: &str) -> ChangeMap {
    let mut changes = ChangeMap::new();

    for caps in CHANGE_LINE_REGEX.captures_iter(text) {
        let number = caps[2].replace(' ', "");
        let Ok(value) = number.parse::<f64>() else {
            continue;
        };
        changes.insert(split_camel_case(&caps[1]), value);
    }

    changes
}

/// Format and re-parse a batch of records.
pub fn render_changes(records: &[FloorRecord]) -> ChangeMap {
    reparse(&format_lines(records))
}

/// `"BoredApe"` → `"Bored Ape"`.
pub fn split_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::format_line;

    fn record(name: &str, change_1d: &str, change_7d: Option<&str>) -> FloorRecord {
        FloorRecord {
            name: name.to_string(),
            volume: "100".to_string(),
            floorprice: "2.5".to_string(),
            change_1d: change_1d.to_string(),
            change_7d: change_7d.map(str::to_string),
            image_src: String::new(),
        }
    }

    #[test]
    fn reparses_example_line() {
        let changes =
            reparse("Pepe: Volume: 100 ton; floorprice: 2.5 ton; 1D: +8.7%; 7D: -3.1%.");
        assert_eq!(changes.len(), 1);
        assert_eq!(changes["Pepe"], 8.7);
    }

    #[test]
    fn round_trips_formatted_records() {
        let records = vec![
            record("BoredApeClub", "-3.2%", Some("+1%")),
            record("Frogs", "12%", None),
            record("Cats", "- 0.5%", None),
        ];
        let changes = render_changes(&records);
        assert_eq!(changes["Bored Ape Club"], -3.2);
        assert_eq!(changes["Frogs"], 12.0);
        assert_eq!(changes["Cats"], -0.5);

        for r in &records {
            let single = reparse(&format_line(r));
            assert_eq!(single[&split_camel_case(&r.name)], r.change_1d_percent());
        }
    }

    #[test]
    fn drops_lines_that_do_not_match() {
        let records = vec![
            record("Pepe Frog", "+1%", None),
            record("Doge2", "+1%", None),
            record("Empty", "", None),
            record("Kept", "+2.5%", None),
        ];
        let changes = render_changes(&records);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes["Kept"], 2.5);
    }

    #[test]
    fn only_ascii_digits_count_as_a_change() {
        let text = "Arabic: Volume: 1 ton; floorprice: 1 ton; 1D: +\u{661}\u{662}%; 7D: .\n\
                    Latin: Volume: 1 ton; floorprice: 1 ton; 1D: +12%; 7D: .";
        let changes = reparse(text);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes["Latin"], 12.0);
    }

    #[test]
    fn last_duplicate_wins() {
        let records = vec![record("Pepe", "+1%", None), record("Pepe", "-4%", None)];
        assert_eq!(render_changes(&records)["Pepe"], -4.0);
    }

    #[test]
    fn splits_interior_capitals_only() {
        assert_eq!(split_camel_case("Pepe"), "Pepe");
        assert_eq!(split_camel_case("MadLads"), "Mad Lads");
        assert_eq!(split_camel_case("ABC"), "A B C");
        assert_eq!(split_camel_case(""), "");
    }
}
