use std::{
    collections::HashSet,
    sync::LazyLock,
};

use regex::{
    Regex,
    RegexBuilder,
};
use tracing::warn;

use super::ExtractorError;

static KEYWORD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,]+").expect("keyword separator pattern is valid"));

/// Splits raw user input on whitespace and commas.
///
/// Empty tokens are dropped, and so are repeats of an earlier keyword that
/// differ only in case. First-seen order is kept.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    KEYWORD_SEPARATOR
        .split(raw)
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .filter(|keyword| seen.insert(keyword.to_lowercase()))
        .map(str::to_string)
        .collect()
}

/// Case-insensitive whole-word matcher over a keyword list.
///
/// All keywords are compiled into one alternation, so emphasis is applied in a
/// single pass and markers never nest.
#[derive(Debug, Clone, Default)]
pub struct KeywordMatcher {
    pattern: Option<Regex>,
}

impl KeywordMatcher {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self, ExtractorError> {
        let alternatives: Vec<String> = keywords
            .iter()
            .map(|keyword| keyword.as_ref().trim())
            .filter(|keyword| !keyword.is_empty())
            .map(regex::escape)
            .collect();

        if alternatives.is_empty() {
            return Ok(Self::default());
        }

        let pattern = RegexBuilder::new(&format!(r"\b(?:{})\b", alternatives.join("|")))
            .case_insensitive(true)
            .build()?;

        Ok(Self { pattern: Some(pattern) })
    }

    /// True when no usable keyword was supplied; such a matcher matches nothing.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_none()
    }

    pub fn matches(&self, paragraph: &str) -> bool {
        self.pattern.as_ref().is_some_and(|pattern| pattern.is_match(paragraph))
    }

    /// Wraps every keyword occurrence in `*...*`, leaving the rest untouched.
    pub fn emphasize(&self, paragraph: &str) -> String {
        self.emphasize_with(paragraph, str::to_string)
    }

    /// Like [`KeywordMatcher::emphasize`], but runs every piece of the
    /// paragraph through `escape` before adding the markers.
    pub fn emphasize_with(&self, paragraph: &str, escape: impl Fn(&str) -> String) -> String {
        let Some(pattern) = &self.pattern else {
            return escape(paragraph);
        };

        let mut emphasized = String::with_capacity(paragraph.len());
        let mut last = 0;
        for hit in pattern.find_iter(paragraph) {
            emphasized.push_str(&escape(&paragraph[last..hit.start()]));
            emphasized.push('*');
            emphasized.push_str(&escape(hit.as_str()));
            emphasized.push('*');
            last = hit.end();
        }
        emphasized.push_str(&escape(&paragraph[last..]));
        emphasized
    }
}

pub fn matches<S: AsRef<str>>(paragraph: &str, keywords: &[S]) -> bool {
    match KeywordMatcher::new(keywords) {
        Ok(matcher) => matcher.matches(paragraph),
        Err(e) => {
            warn!("Keyword pattern rejected: {e}");
            false
        }
    }
}

pub fn bold<S: AsRef<str>>(paragraph: &str, keywords: &[S]) -> String {
    match KeywordMatcher::new(keywords) {
        Ok(matcher) => matcher.emphasize(paragraph),
        Err(e) => {
            warn!("Keyword pattern rejected: {e}");
            paragraph.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_split_on_commas_and_whitespace() {
        assert_eq!(
            parse_keywords(" budget,forecast  ,, revenue\tgrowth\n"),
            vec!["budget", "forecast", "revenue", "growth"]
        );
        assert!(parse_keywords(" , ,\t").is_empty());
    }

    #[test]
    fn repeated_keywords_keep_first_spelling() {
        assert_eq!(parse_keywords("Climate climate CLIMATE soil"), vec!["Climate", "soil"]);
    }

    #[test]
    fn whole_word_matching_ignores_case() {
        assert!(matches("Climate change affects agriculture.", &["climate"]));
        assert!(matches("the CAT sat", &["cat"]));
        assert!(matches("(cat)", &["cat"]));
    }

    #[test]
    fn substrings_of_longer_words_do_not_match() {
        assert!(!matches("A new category of risk.", &["cat"]));
        assert!(!matches("Concatenate these.", &["cat"]));
    }

    #[test]
    fn empty_keyword_lists_never_match() {
        let none: [&str; 0] = [];
        assert!(!matches("anything at all", &none));
        assert!(!matches("anything at all", &["", "   "]));
        assert!(KeywordMatcher::new(&["", " "]).unwrap().is_empty());
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        assert!(matches("costs rose by 5.5 percent", &["5.5"]));
        assert!(!matches("costs rose by 515 percent", &["5.5"]));
    }

    #[test]
    fn emphasis_wraps_each_occurrence() {
        assert_eq!(
            bold("Climate change affects agriculture.", &["climate"]),
            "*Climate* change affects agriculture."
        );
        assert_eq!(
            bold("Budget and budget forecasts", &["budget", "forecast"]),
            "*Budget* and *budget* forecasts"
        );
    }

    #[test]
    fn emphasis_never_double_wraps() {
        assert_eq!(bold("tax on tax", &["tax", "TAX"]), "*tax* on *tax*");
    }

    #[test]
    fn longer_alternative_wins_when_shorter_is_not_a_whole_word() {
        assert_eq!(bold("category cat", &["cat", "category"]), "*category* *cat*");
    }

    #[test]
    fn escaped_emphasis_only_marks_keywords() {
        let matcher = KeywordMatcher::new(&["budget"]).unwrap();
        assert_eq!(
            matcher.emphasize_with("5* hotels raised the budget", crate::core::markup::escape),
            "5\\* hotels raised the *budget*"
        );
    }
}
