use std::{
    panic::{
        self,
        AssertUnwindSafe,
    },
    path::PathBuf,
    sync::mpsc,
    thread,
};

use tracing::{
    debug,
    error,
};

use super::TaskResult;
use crate::{
    core::{
        errors::panic_message,
        ExtractorConfig,
        LoadRequest,
    },
    export,
    loader,
};

/// Runs blocking work off the UI thread and hands results back through a channel.
///
/// Each call spawns one worker. The UI drains results with [`TaskManager::poll_results`]
/// once per frame, so all state changes still happen on the UI thread.
pub struct TaskManager {
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();

        Self { receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            debug!("Task finished: {}", result.task_type());
            results.push(result);
        }

        results
    }

    pub fn load_sources(&self, request: LoadRequest, config: ExtractorConfig) {
        let sender = self.sender.clone();

        thread::spawn(move || {
            let progress_sender = sender.clone();
            let result = guarded("load", || {
                loader::load_sources(&request, &config, |progress| {
                    let _ = progress_sender.send(TaskResult::LoadProgress(progress));
                })
                .map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::SourcesLoaded(result));
        });
    }

    pub fn export(&self, text: String, path: PathBuf) {
        let sender = self.sender.clone();

        thread::spawn(move || {
            let result =
                guarded("export", || export::export(&text, &path).map_err(|e| e.to_string()));
            let _ = sender.send(TaskResult::Exported(result));
        });
    }
}

/// Runs a task body, turning a panic into an error message so the UI always
/// hears back from the worker.
fn guarded<T>(task: &str, body: impl FnOnce() -> Result<T, String>) -> Result<T, String> {
    panic::catch_unwind(AssertUnwindSafe(body)).unwrap_or_else(|payload| {
        let message = panic_message(&*payload);
        error!("{task} task panicked: {message}");
        Err(format!("Processing stopped unexpectedly: {message}"))
    })
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{
        Duration,
        Instant,
    };

    use super::*;

    fn wait_for_results(manager: &mut TaskManager) -> Vec<TaskResult> {
        let deadline = Instant::now() + Duration::from_secs(10);
        let mut results = Vec::new();
        while Instant::now() < deadline {
            results.extend(manager.poll_results());
            if results.iter().any(|r| !matches!(r, TaskResult::LoadProgress(_))) {
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }
        results
    }

    #[test]
    fn failed_load_is_reported_as_message() {
        let mut manager = TaskManager::new();
        let request = LoadRequest { url: None, files: vec![PathBuf::from("/nonexistent/x.pdf")] };

        manager.load_sources(request, ExtractorConfig::default());

        let results = wait_for_results(&mut manager);
        match results.last() {
            Some(TaskResult::SourcesLoaded(Err(message))) => {
                assert!(message.contains("x.pdf"));
            }
            other => panic!("Expected failed load, got {:?}", other),
        }
    }

    #[test]
    fn export_reports_the_written_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = TaskManager::new();

        manager.export("**Source: URL: x**\n\nbody\n".to_string(), dir.path().join("result"));

        let results = wait_for_results(&mut manager);
        match results.last() {
            Some(TaskResult::Exported(Ok(path))) => {
                assert_eq!(path, &dir.path().join("result.docx"));
                assert!(path.exists());
            }
            other => panic!("Expected export result, got {:?}", other),
        }
    }

    #[test]
    fn panicking_task_still_reports_an_error() {
        let result: Result<(), String> = guarded("load", || panic!("decoder blew up"));
        assert_eq!(result, Err("Processing stopped unexpectedly: decoder blew up".to_string()));

        assert_eq!(guarded("load", || Ok::<_, String>(7)), Ok(7));
    }
}
