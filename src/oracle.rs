//! The seam between the pipeline and the span-extraction model.
//!
//! The model itself is out of scope; the pipeline only sees [`SpanOracle`],
//! an opaque scoring function over (question, context) pairs.

use anyhow::Result;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use thiserror::Error;

/// One proposed answer span scored by the model
#[derive(Debug, Clone)]
pub struct SpanCandidate {
    /// Verbatim answer text extracted from the context
    pub text: String,

    /// Model-reported probability in [0, 1] that this span answers the question
    pub score: f64,
}

/// Failures surfaced by a span-extraction backend
///
/// All variants are recoverable per window: the aggregator logs the failure,
/// skips the window, and keeps processing the rest.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The context exceeded the model's internal token budget
    #[error("context exceeds the model's token budget: {0}")]
    ContextTooLarge(String),

    /// The model rejected the question or context
    #[error("model rejected the input: {0}")]
    MalformedInput(String),

    /// Any other backend fault
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Span-extraction question-answering backend
///
/// Implementations wrap a pretrained extractive model and its tokenizer.
/// Calls must be safe for concurrent read-only invocation; a backend that is
/// not reentrant has to serialize calls internally, at the cost of latency
/// under load.
pub trait SpanOracle: Send + Sync {
    /// Extract up to `top_k` candidate answer spans for `question` within
    /// `context`, best first
    ///
    /// Spans longer than `max_answer_length` should not be produced. Errors
    /// are per-call and leave the backend usable.
    fn extract_spans(
        &self,
        question: &str,
        context: &str,
        max_answer_length: usize,
        top_k: usize,
    ) -> Result<Vec<SpanCandidate>, OracleError>;

    /// Backend name for logging
    fn name(&self) -> &str;
}

/// Shared, read-only handle to the process-wide oracle
pub type SharedOracle = Arc<dyn SpanOracle>;

/// Once-initialized holder for the process-wide oracle handle
///
/// Model construction is expensive and not assumed thread-safe, so the
/// initializer runs at most once even under concurrent first use; every later
/// call reuses the same handle. A failed initialization leaves the cell empty
/// and a later call retries.
///
/// Typically a `static` initialized on the first request, then injected into
/// [`crate::QaPipeline::new`].
pub struct OracleCell {
    cell: OnceCell<SharedOracle>,
}

impl OracleCell {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Get the shared oracle, running `init` on first use
    pub fn get_or_init<F>(&self, init: F) -> Result<SharedOracle>
    where
        F: FnOnce() -> Result<SharedOracle>,
    {
        let oracle = self.cell.get_or_try_init(init)?;
        Ok(Arc::clone(oracle))
    }

    /// The oracle handle, if initialization has already happened
    pub fn get(&self) -> Option<SharedOracle> {
        self.cell.get().cloned()
    }
}

impl Default for OracleCell {
    fn default() -> Self {
        Self::new()
    }
}
