use std::{
    panic::{
        self,
        AssertUnwindSafe,
    },
    sync::LazyLock,
};

use regex::Regex;
use tracing::debug;

use crate::core::{
    errors::panic_message,
    ExtractorError,
};

static HYPHEN_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\n").expect("hyphen break pattern is valid"));
static NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("newline pattern is valid"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern is valid"));
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence end pattern is valid"));

/// Sentence-like units of every page, in page order.
///
/// The decoder panics on some malformed documents; that is reported as a
/// parse error like any other decoding failure.
pub fn load_from_pdf(bytes: &[u8]) -> Result<Vec<String>, ExtractorError> {
    let pages =
        panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem_by_pages(bytes)))
            .map_err(|payload| {
                ExtractorError::Parse(format!("decoder crashed: {}", panic_message(&*payload)))
            })?
            .map_err(|e| ExtractorError::Parse(e.to_string()))?;
    debug!("Extracted {} page(s)", pages.len());

    Ok(pages.iter().flat_map(|page| split_page(page)).collect())
}

/// Rejoins hyphenated line breaks, flattens whitespace, then cuts after
/// `.`, `!` or `?` followed by whitespace.
pub fn split_page(text: &str) -> Vec<String> {
    let text = HYPHEN_BREAK.replace_all(text, "");
    let text = NEWLINES.replace_all(&text, " ");
    let text = WHITESPACE_RUN.replace_all(&text, " ");

    let mut units = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_END.find_iter(&text) {
        // the punctuation is ASCII, so +1 stays on a char boundary
        push_unit(&mut units, &text[start..boundary.start() + 1]);
        start = boundary.end();
    }
    push_unit(&mut units, &text[start..]);

    units
}

fn push_unit(units: &mut Vec<String>, unit: &str) {
    let unit = unit.trim();
    if !unit.is_empty() {
        units.push(unit.to_string());
    }
}
