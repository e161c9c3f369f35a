use reqwest::blocking::{
    Client,
    Response,
};
use tracing::debug;

use super::{
    config::ExtractorConfig,
    ExtractorError,
};

pub fn http_client(config: &ExtractorConfig) -> Result<Client, ExtractorError> {
    Client::builder()
        .timeout(config.fetch_timeout)
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| ExtractorError::Fetch(format!("HTTP client build failed: {e}")))
}

/// Issues a single GET and returns the decoded body. No retries.
pub fn fetch_text(client: &Client, url: &str) -> Result<String, ExtractorError> {
    debug!("GET {url}");
    let resp = client
        .get(url)
        .send()
        .map_err(|e| ExtractorError::Fetch(format!("GET {url} failed: {e}")))?;

    ensure_success(&resp)?;

    resp.text().map_err(|e| ExtractorError::Fetch(format!("Reading body of {url} failed: {e}")))
}

fn ensure_success(resp: &Response) -> Result<(), ExtractorError> {
    if !resp.status().is_success() {
        return Err(ExtractorError::Fetch(format!(
            "HTTP error {} from {}",
            resp.status(),
            resp.url()
        )));
    }
    Ok(())
}
