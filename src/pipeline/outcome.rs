use serde::{Deserialize, Serialize};

/// Returned when the transcript or question is blank after normalization
pub const EMPTY_INPUT_MESSAGE: &str =
    "I couldn't process your question. Please make sure both the transcript and question are valid.";

/// Returned when no window produced a usable candidate span
pub const NO_ANSWER_MESSAGE: &str = "I couldn't find an answer to your question in the transcript. Try asking about specific topics mentioned in the conversation.";

/// Returned when the best candidate's raw model score is below the threshold
pub const LOW_CONFIDENCE_MESSAGE: &str = "I found some potential answers but I'm not confident about them. Could you try rephrasing your question more specifically?";

/// Returned on any internal fault; the answer operation never fails outright
pub const PROCESSING_ERROR_MESSAGE: &str =
    "Sorry, I encountered an error while processing your question. Please try again.";

/// Returned when the per-request deadline elapses
pub const DEADLINE_MESSAGE: &str =
    "Sorry, answering your question took too long. Please try again with a shorter transcript.";

/// Upper bound on the confidence reported to the caller; full certainty is
/// never claimed
pub const CONFIDENCE_CAP: f64 = 0.95;

/// The answer produced for one question against one transcript
///
/// The sole value handed back to the caller; persistence of question/answer
/// history is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaResult {
    /// Final answer text, or one of the fixed fallback messages
    pub answer: String,

    /// Raw model confidence capped at [`CONFIDENCE_CAP`]; 0.0 for every fallback
    pub confidence: f64,

    /// Excerpt of the window the answer came from; empty when the answer text
    /// no longer occurs verbatim in its window, and for every fallback
    pub source_excerpt: String,
}

impl QaResult {
    pub(crate) fn fallback(message: &str) -> Self {
        Self {
            answer: message.to_string(),
            confidence: 0.0,
            source_excerpt: String::new(),
        }
    }
}
