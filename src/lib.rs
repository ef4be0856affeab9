//! Floor price and change extraction from DataLens rich-text tables.
//!
//! The pure pipeline lives in [`parsers`]: walk cell trees, assemble
//! [`models::FloorRecord`]s, format them as display lines and re-parse those
//! lines into a [`models::ChangeMap`]. [`sources`] fetches the pages.

pub mod config;
pub mod error;
pub mod models;
pub mod parsers;
pub mod sources;
pub mod utils;

pub use error::ExtractError;
