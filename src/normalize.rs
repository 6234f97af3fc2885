//! Text cleanup applied to transcripts and questions before any model call.
//!
//! Transcripts arrive from speech-to-text with irregular spacing, stuttered
//! words, and stray symbols; every step here is a pure function so the
//! edge-case behavior stays reproducible.

/// Punctuation kept by [`normalize_transcript`]; everything else outside
/// alphanumerics, `_`, and whitespace is stripped
const ALLOWED_PUNCT: &[char] = &['.', ',', '!', '?', ';', ':', '(', ')', '-'];

/// Clean a raw transcript for question answering
///
/// Collapses whitespace, drops immediately repeated words, strips characters
/// outside the allow-list, and recapitalizes sentence starts. Empty or blank
/// input yields an empty string.
///
/// Recapitalization splits on `.` only, so the input's trailing period is lost
/// and `!`/`?` do not start a new sentence. Both quirks are intentional and
/// covered by tests.
pub fn normalize_transcript(text: &str) -> String {
    let collapsed = collapse_whitespace(text);
    let deduped = drop_repeated_words(&collapsed);
    let stripped = strip_disallowed(&deduped);
    recapitalize_sentences(&stripped)
}

/// Clean a question: trim, guarantee a trailing `?`, uppercase the first
/// character. Empty input yields an empty string.
pub fn normalize_question(question: &str) -> String {
    let trimmed = question.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let mut question = trimmed.to_string();
    if !question.ends_with('?') {
        question.push('?');
    }

    uppercase_first(&question)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop a word that exactly repeats the one before it ("the the" -> "the"),
/// a transcription-artifact correction. Only a single repeated token is
/// removed; repeated multi-word phrases are kept as-is.
fn drop_repeated_words(text: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    for word in text.split_whitespace() {
        if kept.last() != Some(&word) {
            kept.push(word);
        }
    }
    kept.join(" ")
}

fn strip_disallowed(text: &str) -> String {
    text.chars()
        .filter(|c| {
            c.is_alphanumeric() || *c == '_' || c.is_whitespace() || ALLOWED_PUNCT.contains(c)
        })
        .collect()
}

/// Split on `.`, trim each segment, drop empties, uppercase each segment's
/// first character, rejoin with `". "`
fn recapitalize_sentences(text: &str) -> String {
    text.split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(uppercase_first)
        .collect::<Vec<_>>()
        .join(". ")
}

pub(crate) fn uppercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
