use serde::{Serialize, Deserialize};

/// One purchased line of the receipt. `data` is the document-level issue
/// date, copied onto every item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub data: String,
    pub item: String,
    #[serde(rename = "preço")]
    pub preco: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptSummary {
    pub local_de_compra: String,
    pub itens: Vec<LineItem>,
}
