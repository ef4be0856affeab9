pub mod changes;
pub mod display;
pub mod nodes;
pub mod record;

pub use changes::*;
pub use display::*;
pub use nodes::*;
pub use record::*;

use crate::models::{GLYPH_DOWN, GLYPH_UP};

/// Turn a colored change fragment into a signed percentage string,
/// e.g. `"▲ 8.7%"` becomes `"+8.7%"`.
pub fn normalize_change(raw: &str) -> String {
    let replaced = raw.replace(GLYPH_UP, "+").replace(GLYPH_DOWN, "-");
    let trimmed = replaced.trim();

    match trimmed.chars().next() {
        Some(sign @ ('+' | '-')) => {
            let rest = trimmed[sign.len_utf8()..].trim_start();
            format!("{}{}", sign, rest)
        }
        _ => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_direction_glyphs() {
        assert_eq!(normalize_change("▲ 8.7%"), "+8.7%");
        assert_eq!(normalize_change("▼3.2%"), "-3.2%");
        assert_eq!(normalize_change("  ▼ 0.5% "), "-0.5%");
        assert_eq!(normalize_change("1.0%"), "1.0%");
        assert_eq!(normalize_change(""), "");
    }
}
