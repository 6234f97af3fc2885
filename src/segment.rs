//! Splits a normalized transcript into overlapping windows sized to the
//! model's input limit.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Question words that carry no topical signal
const STOP_WORDS: &[&str] = &[
    "what", "when", "where", "who", "why", "how", "is", "are", "was", "were", "the", "a", "an",
];

/// Sentence boundaries are only honored in the trailing 30% of a slice
const SENTENCE_TRIM_RATIO: f64 = 0.7;

/// A bounded, possibly sentence-trimmed slice of the transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Window {
    /// Position of this window in the segmentation sequence (0-indexed)
    pub index: usize,

    /// Window text, re-joined from whitespace-delimited words
    pub text: String,
}

/// Split `text` into overlapping windows of at most `max_words` words.
///
/// A text that fits in `max_words` comes back as a single window. Otherwise
/// the window slides forward by `max_words - overlap_words` words at a time,
/// preferring to end each non-final window at a sentence boundary found in its
/// trailing 30%. Forward progress is clamped to at least one word, so the
/// function terminates for any `max_words >= 1` and any `overlap_words`,
/// including `overlap_words >= max_words`; `max_words` below 1 is treated
/// as 1.
///
/// Pure function: same inputs, same windows, no hidden state.
pub fn segment(text: &str, question: &str, max_words: usize, overlap_words: usize) -> Vec<Window> {
    let max_words = max_words.max(1);
    let words: Vec<&str> = text.split_whitespace().collect();

    // Reserved hook: keywords are computed and logged but do not filter or
    // reorder windows.
    let keywords = question_keywords(question);
    debug!("question keywords: {:?}", keywords);

    if words.len() <= max_words {
        return vec![Window {
            index: 0,
            text: text.to_string(),
        }];
    }

    let mut windows = Vec::new();
    let mut start = 0;

    while start < words.len() {
        let end = (start + max_words).min(words.len());
        let mut window_text = words[start..end].join(" ");
        let mut consumed = end - start;

        // Trim non-final windows back to a late sentence boundary
        if end < words.len() {
            if let Some(boundary) = last_sentence_end(&window_text) {
                if boundary as f64 > window_text.len() as f64 * SENTENCE_TRIM_RATIO {
                    window_text.truncate(boundary + 1);
                    consumed = window_text.split_whitespace().count();
                }
            }
        }

        windows.push(Window {
            index: windows.len(),
            text: window_text,
        });

        if start + consumed >= words.len() {
            break;
        }

        // Advance at least one word even when the overlap swallows the window
        let advance = consumed.saturating_sub(overlap_words).max(1);
        start += advance;
    }

    windows
}

/// Lowercased question words minus the stop-word set
pub fn question_keywords(question: &str) -> HashSet<String> {
    question
        .to_lowercase()
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

/// Byte offset of the last `.`, `!`, or `?` in `text`, if any
fn last_sentence_end(text: &str) -> Option<usize> {
    text.rfind(['.', '!', '?'])
}
