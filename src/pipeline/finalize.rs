//! Post-processing of the winning span and extraction of its source excerpt.

use crate::normalize::uppercase_first;

/// Characters of window context kept on each side of the matched answer
const EXCERPT_CONTEXT: usize = 50;

/// A trailing `.`-separated fragment shorter than this is treated as
/// truncated noise and dropped
const MIN_TRAILING_FRAGMENT: usize = 10;

/// Tidy a winning span for presentation.
///
/// Drops a short trailing sentence fragment left by span truncation,
/// uppercases the first character, and guarantees the text ends in `.`, `!`,
/// or `?`. Non-empty input always comes back non-empty, capitalized, and
/// terminated.
pub fn polish_answer(answer: &str) -> String {
    let mut answer = answer.to_string();

    let segments: Vec<&str> = answer.split('.').collect();
    if segments.len() > 1 {
        let last = segments[segments.len() - 1].trim();
        if last.chars().count() < MIN_TRAILING_FRAGMENT {
            answer = segments[..segments.len() - 1].join(".");
            answer.push('.');
        }
    }

    if let Some(first) = answer.chars().next() {
        if !first.is_uppercase() {
            answer = uppercase_first(&answer);
        }
    }

    if !answer.is_empty() && !answer.ends_with(['.', '!', '?']) {
        answer.push('.');
    }

    answer.trim().to_string()
}

/// Bounded excerpt of the source window around the answer.
///
/// Looks for the polished answer first; polishing can edit the text out of
/// the window, in which case the original span is tried. Both lookups are
/// exact substring matches. When neither occurs verbatim the excerpt is
/// empty, which is accepted behavior rather than a cue for fuzzy matching.
pub fn source_excerpt(window_text: &str, polished: &str, original: &str) -> String {
    for needle in [polished, original] {
        let excerpt = excerpt_around(window_text, needle);
        if !excerpt.is_empty() {
            return excerpt;
        }
    }
    String::new()
}

/// Slice of `text` spanning `EXCERPT_CONTEXT` characters on each side of the
/// first occurrence of `needle`, clamped to the text and to UTF-8 boundaries
fn excerpt_around(text: &str, needle: &str) -> String {
    if needle.is_empty() {
        return String::new();
    }
    let Some(pos) = text.find(needle) else {
        return String::new();
    };

    let mut start = pos.saturating_sub(EXCERPT_CONTEXT);
    while !text.is_char_boundary(start) {
        start -= 1;
    }

    let mut end = (pos + needle.len() + EXCERPT_CONTEXT).min(text.len());
    while !text.is_char_boundary(end) {
        end += 1;
    }

    text[start..end].trim().to_string()
}
