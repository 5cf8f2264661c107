pub mod config;
pub mod fetcher;
pub mod models;
pub mod parser;
pub mod presenter;

use anyhow::{Context, Result};
use tracing::info;

pub use config::Config;
pub use models::{LineItem, ReceiptSummary};
pub use parser::extract_receipt;

/// Fetch one receipt page and extract its summary. Transport failures are
/// returned as errors; missing page elements become placeholders.
pub fn process_receipt(url: &str) -> Result<ReceiptSummary> {
    info!(%url, "fetching receipt page");
    let html = fetcher::fetch_page(url)
        .with_context(|| format!("fetching receipt page {url}"))?;
    let summary = extract_receipt(&html);
    info!(items = summary.itens.len(), "receipt parsed");
    Ok(summary)
}
