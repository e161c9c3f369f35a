pub mod html;
pub mod pdf;

use std::fs;

pub use html::{
    extract_paragraphs,
    load_from_url,
};
pub use pdf::load_from_pdf;
use tracing::{
    error,
    info,
};

use crate::core::{
    http::http_client,
    ExtractorConfig,
    ExtractorError,
    LoadRequest,
    LoadedSource,
    Progress,
    Source,
};

/// Loads the URL (if any) and then every PDF, in order.
///
/// Stops at the first failure; nothing loaded before it is returned.
pub fn load_sources(
    request: &LoadRequest,
    config: &ExtractorConfig,
    mut on_progress: impl FnMut(Progress),
) -> Result<Vec<LoadedSource>, ExtractorError> {
    let mut loaded = Vec::new();

    if let Some(url) = &request.url {
        on_progress(Progress::new(0.0, format!("Fetching {url}")));
        let client = http_client(config)?;
        let paragraphs = load_from_url(&client, url, &config.paragraph_selector)
            .inspect_err(|e| error!("Loading {url} failed: {e}"))?;
        info!("{} paragraph(s) from {url}", paragraphs.len());
        loaded.push(LoadedSource { source: Source::url(url.as_str()), paragraphs });
    }

    let total = request.files.len();
    for (index, path) in request.files.iter().enumerate() {
        let bytes = fs::read(path)
            .map_err(|e| ExtractorError::Parse(format!("{}: {e}", path.display())))?;
        let paragraphs = load_from_pdf(&bytes)
            .inspect_err(|e| error!("Loading {} failed: {e}", path.display()))?;
        info!("{} paragraph(s) from {}", paragraphs.len(), path.display());
        loaded.push(LoadedSource { source: Source::file(path), paragraphs });

        on_progress(Progress::new(
            (index + 1) as f32 / total as f32,
            format!("Processing files: {}/{}", index + 1, total),
        ));
    }

    Ok(loaded)
}
