//! The lightweight markup used in the result blob: `**heading**` lines,
//! `*emphasis*` around keyword hits and `---` rules between segments.
//!
//! Literal `*` and `\` in source text are written as `\*` and `\\`, so only
//! the markers the formatter adds are ever read back as markup.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    Plain,
    Emphasis,
    Heading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    fn new(text: &str, style: SpanStyle) -> Self {
        Self { text: text.to_string(), style }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Separator,
    Text(Vec<Span>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Char(char),
    Marker,
}

fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => tokens.push(Token::Char(chars.next().unwrap_or('\\'))),
            '*' => tokens.push(Token::Marker),
            other => tokens.push(Token::Char(other)),
        }
    }
    tokens
}

/// Escapes `*` and `\` so they survive [`strip`] and [`parse_line`] as plain text.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '*' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Removes heading and emphasis markers and unescapes literal characters.
pub fn strip(text: &str) -> String {
    tokenize(text)
        .into_iter()
        .filter_map(|token| match token {
            Token::Char(c) => Some(c),
            Token::Marker => None,
        })
        .collect()
}

pub fn parse_line(line: &str) -> Line {
    let trimmed = line.trim();
    if trimmed == "---" {
        return Line::Separator;
    }

    let tokens = tokenize(trimmed);
    if let Some(heading) = heading_text(&tokens) {
        return Line::Text(vec![Span::new(&heading, SpanStyle::Heading)]);
    }

    let mut spans = Vec::new();
    let mut current = String::new();
    let mut emphasized = false;
    for token in tokenize(line) {
        match token {
            Token::Char(c) => current.push(c),
            Token::Marker => {
                push_span(&mut spans, &mut current, emphasized);
                emphasized = !emphasized;
            }
        }
    }
    push_span(&mut spans, &mut current, emphasized);

    Line::Text(spans)
}

/// The inner text of a `**...**` line with no other markers in it.
fn heading_text(tokens: &[Token]) -> Option<String> {
    let inner = tokens.strip_prefix(&[Token::Marker, Token::Marker])?;
    let inner = inner.strip_suffix(&[Token::Marker, Token::Marker])?;
    if inner.is_empty() {
        return None;
    }
    inner
        .iter()
        .map(|token| match token {
            Token::Char(c) => Some(*c),
            Token::Marker => None,
        })
        .collect()
}

fn push_span(spans: &mut Vec<Span>, current: &mut String, emphasized: bool) {
    if current.is_empty() {
        return;
    }
    let style = if emphasized { SpanStyle::Emphasis } else { SpanStyle::Plain };
    spans.push(Span { text: std::mem::take(current), style });
}

pub fn parse(text: &str) -> Vec<Line> {
    text.lines().map(parse_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_removes_all_markers() {
        assert_eq!(
            strip("**Source: File: a.pdf**\n\n*Climate* change and *soil*.\n"),
            "Source: File: a.pdf\n\nClimate change and soil.\n"
        );
    }

    #[test]
    fn headings_and_rules_are_recognised() {
        assert_eq!(
            parse_line("**Source: URL: https://example.com**"),
            Line::Text(vec![Span::new("Source: URL: https://example.com", SpanStyle::Heading)])
        );
        assert_eq!(parse_line("---"), Line::Separator);
    }

    #[test]
    fn emphasis_splits_line_into_spans() {
        assert_eq!(
            parse_line("*Climate* change affects *agriculture*."),
            Line::Text(vec![
                Span::new("Climate", SpanStyle::Emphasis),
                Span::new(" change affects ", SpanStyle::Plain),
                Span::new("agriculture", SpanStyle::Emphasis),
                Span::new(".", SpanStyle::Plain),
            ])
        );
    }

    #[test]
    fn blank_line_has_no_spans() {
        assert_eq!(parse_line(""), Line::Text(Vec::new()));
        assert_eq!(parse("a\n\n---").len(), 3);
    }

    #[test]
    fn literal_asterisks_survive_strip() {
        let escaped = escape("Rating 5* hotels, 2*3 percent, C:\\tmp");
        assert_eq!(
            strip(&format!("The *budget* and {escaped}")),
            "The budget and Rating 5* hotels, 2*3 percent, C:\\tmp"
        );
    }

    #[test]
    fn escaped_asterisks_are_not_emphasis() {
        let line = format!("{} the *budget* by {}", escape("5*"), escape("2*3"));
        assert_eq!(
            parse_line(&line),
            Line::Text(vec![
                Span::new("5* the ", SpanStyle::Plain),
                Span::new("budget", SpanStyle::Emphasis),
                Span::new(" by 2*3", SpanStyle::Plain),
            ])
        );
    }

    #[test]
    fn escaped_heading_keeps_literal_asterisk() {
        let line = format!("**Source: File: {}**", escape("a*b.pdf"));
        assert_eq!(
            parse_line(&line),
            Line::Text(vec![Span::new("Source: File: a*b.pdf", SpanStyle::Heading)])
        );
    }
}
