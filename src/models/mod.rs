pub mod node;
pub mod record;
pub mod response;

pub use node::*;
pub use record::*;
pub use response::*;

// Glyphs used by the DataLens table cells
pub const GLYPH_GEM: &str = "💎";
pub const GLYPH_UP: &str = "▲";
pub const GLYPH_DOWN: &str = "▼";

// Column headers looked up by exact name
pub const HEADER_CHANGES: &str = "Changes";
pub const HEADER_MARKET_PRICE: &str = "Market price";

/// The image column is positional rather than named.
pub const IMAGE_COLUMN: usize = 0;
