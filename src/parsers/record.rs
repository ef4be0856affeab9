use tracing::debug;

use crate::error::ExtractError;
use crate::models::{
    FloorRecord, Header, NodeKind, PageResponse, Row, GLYPH_GEM, HEADER_CHANGES,
    HEADER_MARKET_PRICE, IMAGE_COLUMN,
};
use crate::parsers::{extract_nodes, first_of_kind, normalize_change};

/// Cell positions of the columns a record is built from, resolved once per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub image: Option<usize>,
    pub changes: usize,
    pub market_price: usize,
}

impl ColumnIndex {
    pub fn resolve(head: &[Header]) -> Result<Self, ExtractError> {
        Ok(Self {
            image: Some(IMAGE_COLUMN),
            changes: position_of(head, HEADER_CHANGES)?,
            market_price: position_of(head, HEADER_MARKET_PRICE)?,
        })
    }

    pub fn without_image(self) -> Self {
        Self { image: None, ..self }
    }
}

fn position_of(head: &[Header], name: &str) -> Result<usize, ExtractError> {
    head.iter()
        .position(|h| h.name == name)
        .ok_or_else(|| ExtractError::MissingHeader {
            name: name.to_string(),
        })
}

/// Build a record from one table row.
///
/// `row_number` is only used to label errors.
pub fn assemble(
    row: &Row,
    row_number: usize,
    columns: &ColumnIndex,
) -> Result<FloorRecord, ExtractError> {
    let cell = |column: usize| {
        row.cells
            .get(column)
            .ok_or(ExtractError::MissingCell {
                row: row_number,
                column,
            })
    };

    let changes = cell(columns.changes)?.node();
    let price = cell(columns.market_price)?.node();

    let name = first_of_kind(&changes, NodeKind::Bold).unwrap_or_default();

    // The numeric volume is the last digit-only text fragment in the cell
    let volume = extract_nodes(&changes, &[NodeKind::Text])
        .into_iter()
        .rev()
        .find(|s| is_ascii_number(s))
        .unwrap_or_default();

    let floorprice = first_of_kind(&price, NodeKind::Bold)
        .map(|s| s.replace(GLYPH_GEM, ""))
        .unwrap_or_default();

    let mut colors = extract_nodes(&price, &[NodeKind::Color])
        .into_iter()
        .map(|c| normalize_change(&c));
    let change_1d = colors.next().unwrap_or_default();
    let change_7d = colors.next();

    let image_src = columns
        .image
        .and_then(|i| row.cells.get(i))
        .and_then(|c| c.src())
        .unwrap_or_default()
        .to_string();

    Ok(FloorRecord {
        name,
        volume,
        floorprice,
        change_1d,
        change_7d,
        image_src,
    })
}

/// Assemble every row of a page, in order.
pub fn process_page(page: &PageResponse) -> Result<Vec<FloorRecord>, ExtractError> {
    let columns = ColumnIndex::resolve(&page.data.head)?;

    page.data
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| assemble(row, i, &columns))
        .collect()
}

/// Parse a change string such as `"+ 8.7%"` into `8.7`.
///
/// Anything unparseable becomes 0.0, which is indistinguishable from a
/// real zero change.
pub fn parse_change_percent(raw: &str) -> f64 {
    let cleaned = raw.replace('%', "").replace(' ', "");
    match cleaned.trim().parse::<f64>() {
        Ok(value) => value,
        Err(e) => {
            debug!("Unparseable change {:?} ({}), using 0.0", raw, e);
            0.0
        }
    }
}

fn is_ascii_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
