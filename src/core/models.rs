use std::{
    fmt,
    path::{
        Path,
        PathBuf,
    },
};

/// Where a batch of paragraphs came from. The label doubles as the session key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    Url(String),
    File(String),
}

impl Source {
    pub fn url(address: impl Into<String>) -> Self {
        Source::Url(address.into())
    }

    /// Labels a PDF by its file name only, falling back to the full path.
    pub fn file(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Source::File(name)
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(address) => write!(f, "URL: {address}"),
            Source::File(name) => write!(f, "File: {name}"),
        }
    }
}

/// A paragraph selected for display, tagged with its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub source: Source,
    pub paragraph: String,
}

/// Paragraphs extracted from one source, in extraction order.
#[derive(Debug, Clone)]
pub struct LoadedSource {
    pub source: Source,
    pub paragraphs: Vec<String>,
}

/// What one press of "Process" asks the loaders to read, in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub url: Option<String>,
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub fraction: f32,
    pub message: String,
}

impl Progress {
    pub fn new(fraction: f32, message: impl Into<String>) -> Self {
        Self { fraction: fraction.clamp(0.0, 1.0), message: message.into() }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn labels_follow_source_kind() {
        assert_eq!(Source::url("https://example.com").label(), "URL: https://example.com");

        let path = PathBuf::from("/home/user/reports/q3 budget.pdf");
        assert_eq!(Source::file(&path).label(), "File: q3 budget.pdf");
    }
}
