use std::collections::HashSet;

use super::{
    keywords::KeywordMatcher,
    markup,
    models::{
        Match,
        Source,
    },
};

const SEGMENT_SEPARATOR: &str = "\n---\n\n";

/// Picks matching paragraphs from the included sources.
///
/// Sources are visited in the given order and paragraphs in extraction order.
/// A paragraph whose first `prefix_chars` characters were already emitted,
/// from any source, is skipped.
pub fn select<'a, I>(sources: I, matcher: &KeywordMatcher, prefix_chars: usize) -> Vec<Match>
where
    I: IntoIterator<Item = (&'a Source, &'a [String])>,
{
    if matcher.is_empty() {
        return Vec::new();
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut selected = Vec::new();

    for (source, paragraphs) in sources {
        for paragraph in paragraphs {
            if !matcher.matches(paragraph) {
                continue;
            }
            let key: String = paragraph.chars().take(prefix_chars).collect();
            if seen.insert(key) {
                selected.push(Match { source: source.clone(), paragraph: paragraph.clone() });
            }
        }
    }

    selected
}

/// Renders matches as one display blob: a bold source header, a blank line,
/// the emphasized paragraph, with a `---` rule between segments. Literal `*`
/// and `\` in labels and paragraphs are escaped.
pub fn format(selected: &[Match], matcher: &KeywordMatcher) -> String {
    selected
        .iter()
        .map(|m| {
            format!(
                "**Source: {}**\n\n{}\n",
                markup::escape(&m.source.to_string()),
                matcher.emphasize_with(&m.paragraph, markup::escape)
            )
        })
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR)
}
