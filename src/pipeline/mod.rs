//! Per-request orchestration: normalize, segment, query the oracle per
//! window, rank candidates, gate on confidence, finalize.

mod finalize;
mod outcome;
mod score;

pub use finalize::{polish_answer, source_excerpt};
pub use outcome::{
    QaResult, CONFIDENCE_CAP, DEADLINE_MESSAGE, EMPTY_INPUT_MESSAGE, LOW_CONFIDENCE_MESSAGE,
    NO_ANSWER_MESSAGE, PROCESSING_ERROR_MESSAGE,
};
pub use score::quality_delta;

use crate::config::QaConfig;
use crate::normalize::{normalize_question, normalize_transcript};
use crate::oracle::SharedOracle;
use crate::segment::{segment, Window};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Candidate spans requested from the oracle per window
const TOP_K: usize = 3;

/// Spans shorter than this (trimmed) are discarded before ranking
const MIN_SPAN_CHARS: usize = 3;

/// One scored answer span tied to the window it came from.
///
/// The raw score feeds the confidence gate and the reported confidence; the
/// adjusted score is used only to rank candidates against each other.
#[derive(Debug, Clone)]
struct Candidate {
    text: String,
    raw_score: f64,
    adjusted_score: f64,
    window_index: usize,
}

/// The long-document question-answering pipeline.
///
/// Holds the shared oracle handle and configuration. Every call to
/// [`QaPipeline::answer`] is independent: windows and candidates live for one
/// request only, so a pipeline can serve concurrent requests as long as the
/// oracle tolerates concurrent calls.
pub struct QaPipeline {
    oracle: SharedOracle,
    config: QaConfig,
}

impl QaPipeline {
    pub fn new(oracle: SharedOracle, config: QaConfig) -> Self {
        Self { oracle, config }
    }

    /// Answer `question` against `transcript`.
    ///
    /// Never fails: blank input, oracle faults, missing candidates, and
    /// low-confidence winners all map to fixed fallback results with
    /// confidence 0. Successful answers report the oracle's raw score capped
    /// at [`CONFIDENCE_CAP`].
    ///
    /// Blocking; the oracle call is CPU-bound. Use
    /// [`QaPipeline::answer_with_deadline`] from async contexts.
    pub fn answer(&self, transcript: &str, question: &str) -> QaResult {
        let request_id = Uuid::new_v4();

        let transcript = normalize_transcript(transcript);
        let question = normalize_question(question);

        if transcript.is_empty() || question.is_empty() {
            info!(
                "[{}] blank transcript or question after normalization",
                request_id
            );
            return QaResult::fallback(EMPTY_INPUT_MESSAGE);
        }

        info!("[{}] processing question: {}", request_id, question);

        let windows = segment(
            &transcript,
            &question,
            self.config.chunk_size,
            self.config.chunk_overlap,
        );
        info!(
            "[{}] created {} windows for processing",
            request_id,
            windows.len()
        );

        let mut candidates = self.collect_candidates(&windows, &question, request_id);

        if candidates.is_empty() {
            info!("[{}] no qualifying candidates across windows", request_id);
            return QaResult::fallback(NO_ANSWER_MESSAGE);
        }

        // Stable sort: ties keep discovery order, first window first
        candidates.sort_by(|a, b| b.adjusted_score.total_cmp(&a.adjusted_score));
        let best = &candidates[0];

        // The gate uses the raw score; the adjusted score only ranked
        if best.raw_score < self.config.confidence_threshold {
            info!(
                "[{}] best raw score {:.3} below threshold {:.3}",
                request_id, best.raw_score, self.config.confidence_threshold
            );
            return QaResult::fallback(LOW_CONFIDENCE_MESSAGE);
        }

        info!(
            "[{}] best answer found with confidence: {:.3}",
            request_id, best.raw_score
        );

        let answer = polish_answer(&best.text);
        let excerpt = source_excerpt(&windows[best.window_index].text, &answer, &best.text);

        QaResult {
            answer,
            confidence: best.raw_score.min(CONFIDENCE_CAP),
            source_excerpt: excerpt,
        }
    }

    /// Answer with a hard deadline around the whole pipeline.
    ///
    /// Runs the blocking pipeline on the blocking pool. On timeout the caller
    /// gets the deadline fallback immediately; the in-flight oracle call is
    /// not interruptible and finishes in the background. A panicked task maps
    /// to the generic failure fallback, so this operation never fails either.
    pub async fn answer_with_deadline(
        self: Arc<Self>,
        transcript: String,
        question: String,
        deadline: Duration,
    ) -> QaResult {
        let task = tokio::task::spawn_blocking(move || self.answer(&transcript, &question));

        match tokio::time::timeout(deadline, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => {
                error!("answer task failed: {}", e);
                QaResult::fallback(PROCESSING_ERROR_MESSAGE)
            }
            Err(_) => {
                warn!("deadline of {:?} exceeded", deadline);
                QaResult::fallback(DEADLINE_MESSAGE)
            }
        }
    }

    /// Query the oracle once per window and collect scored candidates.
    ///
    /// A window whose oracle call fails contributes nothing; the rest keep
    /// processing.
    fn collect_candidates(
        &self,
        windows: &[Window],
        question: &str,
        request_id: Uuid,
    ) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        for window in windows {
            let spans = match self.oracle.extract_spans(
                question,
                &window.text,
                self.config.max_answer_length,
                TOP_K,
            ) {
                Ok(spans) => spans,
                Err(e) => {
                    warn!(
                        "[{}] oracle {} failed on window {}: {}",
                        request_id,
                        self.oracle.name(),
                        window.index,
                        e
                    );
                    continue;
                }
            };

            for span in spans {
                let text = span.text.trim();
                if text.chars().count() < MIN_SPAN_CHARS {
                    continue;
                }

                let delta = quality_delta(text, question, &window.text);
                candidates.push(Candidate {
                    text: text.to_string(),
                    raw_score: span.score,
                    adjusted_score: span.score + delta,
                    window_index: window.index,
                });
            }
        }

        candidates
    }
}
