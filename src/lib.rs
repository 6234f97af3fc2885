pub mod config;
pub mod normalize;
pub mod oracle;
pub mod pipeline;
pub mod segment;
pub mod suggest;

pub use config::QaConfig;
pub use oracle::{OracleCell, OracleError, SharedOracle, SpanCandidate, SpanOracle};
pub use pipeline::{
    polish_answer, quality_delta, source_excerpt, QaPipeline, QaResult, CONFIDENCE_CAP,
    DEADLINE_MESSAGE, EMPTY_INPUT_MESSAGE, LOW_CONFIDENCE_MESSAGE, NO_ANSWER_MESSAGE,
    PROCESSING_ERROR_MESSAGE,
};
pub use segment::{segment, Window};
pub use suggest::suggested_questions;
