use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};
use crate::models::{LineItem, ReceiptSummary};

/// Substituted for any element the page does not contain.
pub const NOT_FOUND: &str = "Não encontrado";

const MERCHANT_SELECTOR: &str = "div#u20";
const STRONG_SELECTOR: &str = "strong";
const ITEM_ROW_SELECTOR: &str = r#"tr[id^="Item"]"#;
const DESCRIPTION_SELECTOR: &str = "span.txtTit";
const PRICE_SELECTOR: &str = "span.valor";
const DATE_LABEL: &str = "Emissão:";

// Selectors are fixed literals; a parse failure is a programming error.
fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css}: {e:?}"))
}

fn trimmed_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn first_token(text: &str) -> Option<String> {
    text.split_whitespace().next().map(str::to_string)
}

pub fn extract_receipt(html: &str) -> ReceiptSummary {
    let doc = Html::parse_document(html);

    let local_de_compra = extract_merchant(&doc).unwrap_or_else(|| {
        warn!("merchant element not found");
        NOT_FOUND.into()
    });

    // Resolved once; every row gets the same value.
    let data = extract_issue_date(&doc).unwrap_or_else(|| {
        warn!("issue date not found");
        NOT_FOUND.into()
    });

    let itens = extract_items(&doc, &data);
    debug!(merchant = %local_de_compra, date = %data, items = itens.len(), "receipt extracted");

    ReceiptSummary {
        local_de_compra,
        itens,
    }
}

pub fn extract_merchant(doc: &Html) -> Option<String> {
    doc.select(&selector(MERCHANT_SELECTOR))
        .next()
        .map(trimmed_text)
}

/// Date from the first `strong` mentioning the issuance label. The page puts
/// the timestamp in the text node right after the label, so only its first
/// token (the day) is kept. Later matches are never consulted.
pub fn extract_issue_date(doc: &Html) -> Option<String> {
    let strong = doc
        .select(&selector(STRONG_SELECTOR))
        .find(|el| el.text().collect::<String>().contains(DATE_LABEL))?;

    let sibling_text = strong.next_sibling().map(|node| match node.value().as_text() {
        Some(text) => text.to_string(),
        None => ElementRef::wrap(node)
            .map(|el| el.text().collect())
            .unwrap_or_default(),
    });

    sibling_text
        .as_deref()
        .and_then(first_token)
        .or_else(|| {
            let label_text = strong.text().collect::<String>();
            label_text
                .split_once(DATE_LABEL)
                .and_then(|(_, rest)| first_token(rest))
        })
}

pub fn extract_items(doc: &Html, data: &str) -> Vec<LineItem> {
    let description_selector = selector(DESCRIPTION_SELECTOR);
    let price_selector = selector(PRICE_SELECTOR);

    doc.select(&selector(ITEM_ROW_SELECTOR))
        .map(|row| {
            let row_id = row.value().id().unwrap_or_default();
            let item = row
                .select(&description_selector)
                .next()
                .map(trimmed_text)
                .unwrap_or_else(|| {
                    warn!(row = row_id, "item description not found");
                    NOT_FOUND.into()
                });
            let preco = row
                .select(&price_selector)
                .next()
                .map(trimmed_text)
                .unwrap_or_else(|| {
                    warn!(row = row_id, "item price not found");
                    NOT_FOUND.into()
                });

            LineItem {
                data: data.to_string(),
                item,
                preco,
            }
        })
        .collect()
}
