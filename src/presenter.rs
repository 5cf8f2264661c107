use std::io::Write;
use anyhow::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use crate::models::ReceiptSummary;

const INDENT: &[u8] = b"    ";

/// Pretty JSON with four-space indentation. serde_json leaves non-ASCII
/// characters unescaped, so `preço` and accented merchant names pass through.
pub fn render(summary: &ReceiptSummary) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    summary.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

pub fn write_to<W: Write>(summary: &ReceiptSummary, mut out: W) -> Result<()> {
    let json = render(summary)?;
    writeln!(out, "{json}")?;
    out.flush()?;
    Ok(())
}

pub fn print(summary: &ReceiptSummary) -> Result<()> {
    write_to(summary, std::io::stdout().lock())
}
