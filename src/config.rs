/// Public NFC-e lookup page for a single receipt. The access key travels in
/// the `p` query parameter.
pub const DEFAULT_RECEIPT_URL: &str = "https://www.nfce.fazenda.sp.gov.br/NFCeConsultaPublica/Paginas/ConsultaQRCode.aspx?p=35250200063960001504655050000016881048579176|2|1|1|EFBA4B2A2B28486EE9817AE3125C6B8ECEF8CD05";

#[derive(Debug, Clone)]
pub struct Config {
    pub receipt_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            receipt_url: DEFAULT_RECEIPT_URL.to_string(),
        }
    }
}
