use reqwest::blocking::get;
use tracing::debug;

/// Single blocking GET. Redirects follow reqwest's default policy and the
/// status code is not checked; whatever body comes back is returned, decoded
/// with the charset named in `Content-Type` (UTF-8 when absent).
pub fn fetch_page(url: &str) -> Result<String, reqwest::Error> {
    let resp = get(url)?;
    debug!(status = %resp.status(), final_url = %resp.url(), "receipt page responded");

    let body = resp.text()?;
    debug!(chars = body.len(), "receipt page downloaded");
    Ok(body)
}


#[cfg(test)]
mod tests {
    use super::test_server::{latin1, serve_once};
    use super::*;

    #[test]
    fn unreachable_host_is_an_error() {
        assert!(fetch_page("http://127.0.0.1:1/").is_err());
    }

    #[test]
    fn returns_utf8_body() {
        let url = serve_once("text/html; charset=utf-8", "<p>Emissão:</p>".as_bytes().to_vec());
        assert_eq!(fetch_page(&url).unwrap(), "<p>Emissão:</p>");
    }

    #[test]
    fn decodes_declared_latin1_charset() {
        let url = serve_once("text/html; charset=ISO-8859-1", latin1("<p>PÃO Emissão:</p>"));
        assert_eq!(fetch_page(&url).unwrap(), "<p>PÃO Emissão:</p>");
    }
}
