use anyhow::{Context, Result};
use std::fs;
use std::sync::Arc;

use floor_monitor::config::Config;
use floor_monitor::models::NodeKind;
use floor_monitor::parsers::{extract_nodes, format_line, process_page};
use floor_monitor::sources::{DatalensSource, PageSource};
use floor_monitor::utils::http::create_client;

/// Fetch one page, save it, and print what the extractor sees in each cell.
#[tokio::main]
async fn main() -> Result<()> {
    let page: u32 = match std::env::args().nth(1) {
        Some(arg) => arg.parse().context("Page must be a positive number")?,
        None => 1,
    };

    let config = Arc::new(Config::load()?);
    let client = create_client(&config)?;
    let source = DatalensSource::new(client, config);

    println!("Fetching DataLens page {}...", page);
    let response = source.fetch_page(page).await?;

    let path = format!("datalens_page_{}.json", page);
    fs::write(&path, serde_json::to_string_pretty(&response)?)?;
    println!("Saved raw page to {}", path);

    let headers: Vec<&str> = response.data.head.iter().map(|h| h.name.as_str()).collect();
    println!("Headers: {:?}", headers);
    println!("Rows: {}", response.data.rows.len());

    let kinds = [NodeKind::Text, NodeKind::Bold, NodeKind::Color];
    if let Some(row) = response.data.rows.first() {
        for (i, cell) in row.cells.iter().enumerate() {
            let label = headers.get(i).copied().unwrap_or("?");
            for kind in kinds {
                let fragments = extract_nodes(&cell.node(), &[kind]);
                if !fragments.is_empty() {
                    println!("  [{}] {} {}: {:?}", i, label, kind.key(), fragments);
                }
            }
        }
    }

    println!();
    for record in process_page(&response)? {
        println!("{}", format_line(&record));
    }

    Ok(())
}
