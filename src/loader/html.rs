use std::sync::LazyLock;

use regex::Regex;
use reqwest::blocking::Client;
use scraper::{
    Html,
    Selector,
};
use tracing::debug;

use crate::core::{
    http,
    ExtractorError,
};

const HIDDEN_ELEMENTS: [&str; 3] = ["script", "style", "template"];

static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("blank line pattern is valid"));

pub fn load_from_url(
    client: &Client,
    address: &str,
    selector: &str,
) -> Result<Vec<String>, ExtractorError> {
    let body = http::fetch_text(client, address)?;
    extract_paragraphs(&body, selector)
}

/// Text of every element matching `selector`; when none carries text, the
/// page's visible text split on blank lines.
pub fn extract_paragraphs(html: &str, selector: &str) -> Result<Vec<String>, ExtractorError> {
    let parsed = Selector::parse(selector).map_err(|e| {
        ExtractorError::Validation(format!("Invalid paragraph selector {selector:?}: {e}"))
    })?;
    let document = Html::parse_document(html);

    let paragraphs: Vec<String> = document
        .select(&parsed)
        .filter_map(|element| {
            let text = element.text().collect::<Vec<_>>().join(" ");
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        })
        .collect();

    if !paragraphs.is_empty() {
        return Ok(paragraphs);
    }

    debug!("No {selector:?} elements with text, splitting visible text");
    Ok(BLANK_LINES
        .split(&visible_text(&document))
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect())
}

fn visible_text(document: &Html) -> String {
    document
        .root_element()
        .descendants()
        .filter_map(|node| {
            let text: &str = node.value().as_text()?;
            let hidden = node
                .parent()
                .and_then(|parent| parent.value().as_element().map(|element| element.name()))
                .is_some_and(|name| HIDDEN_ELEMENTS.iter().any(|hidden| *hidden == name));
            (!hidden).then_some(text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
