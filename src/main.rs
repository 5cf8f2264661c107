use anyhow::Result;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;

use nfce_receipt_scraper::{presenter, process_receipt, Config};

fn main() -> Result<()> {
    // stdout is reserved for the JSON document
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::default();
    let summary = process_receipt(&config.receipt_url)?;
    presenter::print(&summary)?;
    Ok(())
}
