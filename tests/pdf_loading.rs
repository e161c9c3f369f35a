mod common;

use std::{
    fs,
    thread,
    time::{
        Duration,
        Instant,
    },
};

use parascan::{
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        ErrorKind,
        LoadRequest,
        Shell,
        ShellState,
    },
    loader,
    ExtractorConfig,
};

#[test]
fn pdf_text_is_split_into_sentences() {
    let bytes = common::pdf_with_lines(&["Budget talks began. The forecast", "is weak."]);

    let paragraphs = loader::load_from_pdf(&bytes).unwrap();

    assert_eq!(paragraphs.first().map(String::as_str), Some("Budget talks began."));
    assert!(paragraphs.iter().any(|p| p.contains("forecast") && p.ends_with("weak.")));
}

#[test]
fn two_pdfs_are_filtered_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.pdf");
    let second = dir.path().join("second.pdf");
    fs::write(&first, common::pdf_with_lines(&["Nothing relevant here.", "The budget was cut."]))
        .unwrap();
    fs::write(&second, common::pdf_with_lines(&["A new forecast arrived.", "Rain expected."]))
        .unwrap();

    let mut shell = Shell::default();
    shell.set_picked_files(vec![first, second]);
    shell.keyword_input = "budget, forecast".to_string();
    let request = shell.submit().unwrap();

    let mut updates = Vec::new();
    let result = loader::load_sources(&request, shell.config(), |p| updates.push(p))
        .map_err(|e| e.to_string());
    shell.finish_loading(result).unwrap();

    assert_eq!(shell.state(), ShellState::Ready);
    assert_eq!(updates.last().map(|p| p.message.as_str()), Some("Processing files: 2/2"));

    let output = shell.output();
    let first_header = output.find("**Source: File: first.pdf**").unwrap();
    let second_header = output.find("**Source: File: second.pdf**").unwrap();
    assert!(first_header < second_header);
    assert!(output.contains("*budget*"));
    assert!(output.contains("*forecast*"));
    assert!(!output.contains("Nothing relevant"));
    assert!(!output.contains("Rain expected"));
}

#[test]
fn corrupt_pdf_aborts_the_whole_run() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.pdf");
    let bad = dir.path().join("bad.pdf");
    fs::write(&good, common::pdf_with_lines(&["The budget was cut."])).unwrap();
    fs::write(&bad, b"%PDF-1.5 truncated garbage").unwrap();

    let request = LoadRequest { url: None, files: vec![good, bad] };
    let err = loader::load_sources(&request, &ExtractorConfig::default(), |_| {}).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn undecodable_font_is_a_parse_error() {
    let bytes = common::pdf_with_undefined_font(&["The budget was cut."]);

    let err = loader::load_from_pdf(&bytes).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn shell_returns_to_idle_when_the_decoder_fails() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.pdf");
    fs::write(&broken, common::pdf_with_undefined_font(&["The budget was cut."])).unwrap();

    let mut shell = Shell::default();
    shell.set_picked_files(vec![broken]);
    shell.keyword_input = "budget".to_string();
    let request = shell.submit().unwrap();
    assert_eq!(shell.state(), ShellState::Loading);

    let mut manager = TaskManager::new();
    manager.load_sources(request, shell.config().clone());

    let deadline = Instant::now() + Duration::from_secs(10);
    let mut outcome = None;
    while outcome.is_none() && Instant::now() < deadline {
        for result in manager.poll_results() {
            if let TaskResult::SourcesLoaded(result) = result {
                outcome = Some(result);
            }
        }
        thread::sleep(Duration::from_millis(10));
    }

    let outcome = outcome.expect("load finished");
    assert!(outcome.is_err());
    assert!(shell.finish_loading(outcome).is_err());
    assert_eq!(shell.state(), ShellState::Idle);
    assert!(shell.session().is_empty());
    assert_eq!(shell.output(), "");
}
