use std::path::PathBuf;

use tracing::{
    info,
    warn,
};

use super::{
    config::ExtractorConfig,
    keywords::{
        parse_keywords,
        KeywordMatcher,
    },
    models::{
        LoadRequest,
        LoadedSource,
        Progress,
        Source,
    },
    pipeline,
    session::Session,
    ExtractorError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Idle,
    Loading,
    Ready,
}

/// Everything the interactive front end needs, independent of any widget toolkit.
///
/// The result text is a pure function of the session, the keywords and the
/// inclusion toggles; it is rebuilt after every change to any of them.
pub struct Shell {
    config: ExtractorConfig,
    state: ShellState,
    session: Session,
    keywords: Vec<String>,
    matcher: KeywordMatcher,
    output: String,
    progress: Option<Progress>,
    picked_files: Vec<PathBuf>,

    pub url_input: String,
    pub keyword_input: String,
}

impl Shell {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            config,
            state: ShellState::Idle,
            session: Session::new(),
            keywords: Vec::new(),
            matcher: KeywordMatcher::default(),
            output: String::new(),
            progress: None,
            picked_files: Vec::new(),
            url_input: String::new(),
            keyword_input: String::new(),
        }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn progress(&self) -> Option<&Progress> {
        self.progress.as_ref()
    }

    pub fn picked_files(&self) -> &[PathBuf] {
        &self.picked_files
    }

    pub fn set_picked_files(&mut self, files: Vec<PathBuf>) {
        self.picked_files = files;
    }

    pub fn picked_files_display(&self) -> String {
        if self.picked_files.is_empty() {
            return "No files selected".to_string();
        }
        self.picked_files
            .iter()
            .map(|path| {
                path.file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string())
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Validates the inputs and moves to `Loading`.
    ///
    /// On success the previous session is already gone; the returned request
    /// must be handed to the loaders and its outcome fed to [`Shell::finish_loading`].
    pub fn submit(&mut self) -> Result<LoadRequest, ExtractorError> {
        if self.state == ShellState::Loading {
            return Err(ExtractorError::Validation("Processing is already running".to_string()));
        }

        let url = self.url_input.trim();
        if url.is_empty() && self.picked_files.is_empty() {
            warn!("Submit rejected: no URL or PDF files");
            return Err(ExtractorError::Validation(
                "Enter a URL or choose PDF file(s)".to_string(),
            ));
        }

        let keywords = parse_keywords(&self.keyword_input);
        if keywords.is_empty() {
            warn!("Submit rejected: no keywords");
            return Err(ExtractorError::Validation("Enter at least one keyword".to_string()));
        }
        let matcher = KeywordMatcher::new(&keywords)?;

        let request = LoadRequest {
            url: (!url.is_empty()).then(|| url.to_string()),
            files: self.picked_files.clone(),
        };

        info!(
            "Processing {} URL(s) and {} PDF(s) for keywords {:?}",
            usize::from(request.url.is_some()),
            request.files.len(),
            keywords
        );

        self.keywords = keywords;
        self.matcher = matcher;
        self.session.clear();
        self.output.clear();
        self.progress = Some(Progress::new(0.0, "Starting..."));
        self.state = ShellState::Loading;

        Ok(request)
    }

    pub fn report_progress(&mut self, progress: Progress) {
        if self.state == ShellState::Loading {
            self.progress = Some(progress);
        }
    }

    /// Installs the loaded sources, or drops back to `Idle` with nothing retained.
    pub fn finish_loading(&mut self, result: Result<Vec<LoadedSource>, String>) -> Result<(), String> {
        self.progress = None;

        match result {
            Ok(sources) => {
                info!("Loaded {} source(s)", sources.len());
                self.session.replace(sources);
                self.state = ShellState::Ready;
                self.recompute();
                Ok(())
            }
            Err(message) => {
                warn!("Loading failed: {message}");
                self.session.clear();
                self.state = ShellState::Idle;
                self.recompute();
                Err(message)
            }
        }
    }

    pub fn set_included(&mut self, source: &Source, included: bool) {
        if self.session.set_included(source, included) {
            self.recompute();
        }
    }

    pub fn recompute(&mut self) {
        let selected =
            pipeline::select(self.session.included(), &self.matcher, self.config.dedup_prefix_chars);
        self.output = pipeline::format(&selected, &self.matcher);
    }

    pub fn can_submit(&self) -> bool {
        self.state != ShellState::Loading
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}
