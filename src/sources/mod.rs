use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

use crate::error::ExtractError;
use crate::models::{FloorRecord, PageResponse};
use crate::parsers::process_page;

mod datalens;

pub use datalens::DatalensSource;

/// Something that can hand out decoded table pages, numbered from 1.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// An `Err` means the page is unavailable and contributes no rows.
    async fn fetch_page(&self, page: u32) -> Result<PageResponse>;
}

/// Fetch pages `1..=page_count` one after another and assemble their rows.
///
/// Unavailable pages are skipped. A page that violates the table contract
/// aborts the whole collection.
pub async fn collect_records<S>(source: &S, page_count: u32) -> Result<Vec<FloorRecord>, ExtractError>
where
    S: PageSource + ?Sized,
{
    let mut records = Vec::new();

    for page in 1..=page_count {
        let response = match source.fetch_page(page).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Skipping page {}: {:#}", page, e);
                continue;
            }
        };

        let page_records = process_page(&response)?;
        info!("Page {}: {} records", page, page_records.len());
        records.extend(page_records);
    }

    Ok(records)
}
