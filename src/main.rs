use anyhow::Result;
use chrono::Local;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{error, info};

use floor_monitor::config::{Config, OutputMode};
use floor_monitor::models::FloorItem;
use floor_monitor::parsers::render_changes;
use floor_monitor::sources::{collect_records, DatalensSource, PageSource};
use floor_monitor::utils;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout carries the JSON output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("floor_monitor=info".parse()?),
        )
        .init();

    info!("Starting Floor Monitor");

    let config = Arc::new(Config::load()?);
    let client = utils::http::create_client(&config)?;
    let source = DatalensSource::new(client, config.clone());

    if config.poll_interval_seconds == 0 {
        return run_cycle(&source, &config).await;
    }

    let mut interval = interval(Duration::from_secs(config.poll_interval_seconds));

    loop {
        interval.tick().await;

        info!("--- Starting new cycle at {} ---", Local::now().format("%Y-%m-%d %H:%M:%S"));

        if let Err(e) = run_cycle(&source, &config).await {
            error!("Cycle failed: {:#}", e);
        }

        info!("Cycle completed, waiting {} seconds", config.poll_interval_seconds);
    }
}

async fn run_cycle(source: &dyn PageSource, config: &Config) -> Result<()> {
    let records = collect_records(source, config.page_count).await?;
    info!("Collected {} records", records.len());

    let output = match config.output {
        OutputMode::Records => {
            let items: Vec<FloorItem> = records.iter().map(FloorItem::from).collect();
            serde_json::to_string_pretty(&items)?
        }
        OutputMode::Changes => serde_json::to_string_pretty(&render_changes(&records))?,
    };

    println!("{}", output);
    Ok(())
}
