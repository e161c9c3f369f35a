use std::{
    fs::{
        self,
        File,
    },
    path::{
        Path,
        PathBuf,
    },
};

use docx_rs::{
    read_docx,
    Docx,
    DocumentChild,
    Paragraph,
    ParagraphChild,
    Run,
    RunChild,
};
use tracing::info;

use crate::core::{
    markup,
    ExtractorError,
};

const DOCX_EXTENSION: &str = ".docx";

/// Writes the result blob as a plain document, one paragraph per blank-line
/// separated block. Returns the path actually written.
pub fn export(text: &str, path: &Path) -> Result<PathBuf, ExtractorError> {
    let path = normalize_docx_path(path);
    let paragraphs = export_paragraphs(text);

    let docx = paragraphs.iter().fold(Docx::new(), |docx, paragraph| {
        docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(paragraph)))
    });

    let file = File::create(&path)
        .map_err(|e| ExtractorError::Write(format!("{}: {e}", path.display())))?;
    docx.build()
        .pack(file)
        .map_err(|e| ExtractorError::Write(format!("{}: {e}", path.display())))?;

    info!("Saved {} paragraph(s) to {}", paragraphs.len(), path.display());
    Ok(path)
}

/// The paragraphs [`export`] writes for `text`: markup stripped, split on blank lines.
pub fn export_paragraphs(text: &str) -> Vec<String> {
    markup::strip(text)
        .split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(str::to_string)
        .collect()
}

/// Appends `.docx` unless the path already ends with it, dropping trailing dots first.
pub fn normalize_docx_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    if raw.to_lowercase().ends_with(DOCX_EXTENSION) {
        return path.to_path_buf();
    }
    PathBuf::from(format!("{}{DOCX_EXTENSION}", raw.trim_end_matches('.')))
}

/// Reopens a document and returns the text of each paragraph.
pub fn read_paragraphs(path: &Path) -> Result<Vec<String>, ExtractorError> {
    let bytes = fs::read(path)?;
    let docx = read_docx(&bytes).map_err(|e| ExtractorError::Parse(e.to_string()))?;

    Ok(docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            _ => None,
        })
        .collect())
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}
