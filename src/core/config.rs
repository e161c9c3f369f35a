use std::time::Duration;

/// Runtime knobs. Nothing here is read from disk or the environment.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Upper bound on the single GET issued for a URL source.
    pub fetch_timeout: Duration,
    pub user_agent: String,
    /// CSS selector for the block-level elements whose text becomes paragraphs.
    pub paragraph_selector: String,
    /// Paragraphs sharing this many leading characters are reported once.
    pub dedup_prefix_chars: usize,
    pub source_label_max_chars: usize,
    pub notification_duration: Duration,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(15),
            user_agent: format!("parascan/{} (+reqwest)", env!("CARGO_PKG_VERSION")),
            paragraph_selector: "p".to_string(),
            dedup_prefix_chars: 200,
            source_label_max_chars: 40,
            notification_duration: Duration::from_secs(4),
        }
    }
}

impl ExtractorConfig {
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn with_paragraph_selector(mut self, selector: impl Into<String>) -> Self {
        self.paragraph_selector = selector.into();
        self
    }

    pub fn with_dedup_prefix_chars(mut self, chars: usize) -> Self {
        self.dedup_prefix_chars = chars;
        self
    }
}
