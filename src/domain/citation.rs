// SPDX-License-Identifier: MPL-2.0
//! Citation token parsing for analysis explanations.
//!
//! Explanation text may contain bracket references like `[1]` that index
//! (1-based) into an ordered citation URL list. Tokens with a matching URL
//! become links; tokens without one stay literal text.

/// One run of an explanation after citation parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CitationSegment {
    /// Plain text, rendered as-is.
    Text(String),
    /// A resolved citation token: the literal `[n]` label and its URL.
    Link { label: String, url: String },
}

/// Splits `text` into plain and link segments against the ordered URL list.
///
/// A token is a `[` followed by one or more ASCII digits and a `]`. The
/// digits are a 1-based index into `urls`; an index without a URL renders
/// as the literal token.
#[must_use]
pub fn parse_citations(text: &str, urls: &[String]) -> Vec<CitationSegment> {
    let mut segments = Vec::new();
    let bytes = text.as_bytes();
    let mut plain_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'[' {
            i += 1;
            continue;
        }

        let digits_start = i + 1;
        let mut j = digits_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }

        if j == digits_start || j >= bytes.len() || bytes[j] != b']' {
            i += 1;
            continue;
        }

        let token = &text[i..=j];
        // Over-long digit runs cannot address any citation; keep them literal.
        let resolved = text[digits_start..j]
            .parse::<usize>()
            .ok()
            .filter(|&n| n >= 1)
            .and_then(|n| urls.get(n - 1));

        if let Some(url) = resolved {
            if plain_start < i {
                segments.push(CitationSegment::Text(text[plain_start..i].to_string()));
            }
            segments.push(CitationSegment::Link {
                label: token.to_string(),
                url: url.clone(),
            });
            plain_start = j + 1;
        }
        // Unresolved tokens fall through and stay part of the plain run.

        i = j + 1;
    }

    if plain_start < text.len() {
        segments.push(CitationSegment::Text(text[plain_start..].to_string()));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolved_and_unresolved_tokens() {
        let segments = parse_citations("See [1] and [3]", &urls(&["urlA"]));
        assert_eq!(
            segments,
            vec![
                CitationSegment::Text("See ".into()),
                CitationSegment::Link {
                    label: "[1]".into(),
                    url: "urlA".into()
                },
                CitationSegment::Text(" and [3]".into()),
            ]
        );
    }

    #[test]
    fn text_without_tokens_is_one_segment() {
        let segments = parse_citations("no references here", &urls(&["urlA"]));
        assert_eq!(
            segments,
            vec![CitationSegment::Text("no references here".into())]
        );
    }

    #[test]
    fn adjacent_tokens_resolve_independently() {
        let segments = parse_citations("[1][2]", &urls(&["a", "b"]));
        assert_eq!(
            segments,
            vec![
                CitationSegment::Link {
                    label: "[1]".into(),
                    url: "a".into()
                },
                CitationSegment::Link {
                    label: "[2]".into(),
                    url: "b".into()
                },
            ]
        );
    }

    #[test]
    fn malformed_brackets_stay_literal() {
        let segments = parse_citations("[x] [ ] [12", &urls(&["a"]));
        assert_eq!(segments, vec![CitationSegment::Text("[x] [ ] [12".into())]);
    }

    #[test]
    fn zero_index_is_unresolvable() {
        let segments = parse_citations("ref [0]", &urls(&["a"]));
        assert_eq!(segments, vec![CitationSegment::Text("ref [0]".into())]);
    }

    #[test]
    fn empty_text_yields_no_segments() {
        assert!(parse_citations("", &urls(&["a"])).is_empty());
    }
}
