use std::path::PathBuf;

use crate::core::{
    LoadedSource,
    Progress,
};

/// Messages sent from worker threads back to the UI thread.
///
/// Errors are already rendered to their user-facing message.
#[derive(Debug, Clone)]
pub enum TaskResult {
    LoadProgress(Progress),
    SourcesLoaded(Result<Vec<LoadedSource>, String>),
    Exported(Result<PathBuf, String>),
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::LoadProgress(_) => "load_progress",
            TaskResult::SourcesLoaded(_) => "sources_loaded",
            TaskResult::Exported(_) => "export",
        }
    }
}
