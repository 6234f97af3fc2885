use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Tuning parameters for the question-answering pipeline
///
/// Constructed explicitly and passed into [`crate::QaPipeline::new`]; no
/// component reads configuration from ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaConfig {
    /// Maximum answer span length requested from the model (default: 200)
    #[serde(default = "default_max_answer_length")]
    pub max_answer_length: usize,

    /// Minimum raw model score required before an answer is returned (default: 0.05)
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,

    /// Window size in words (default: 350)
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Overlap between consecutive windows, in words (default: 75)
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
}

fn default_max_answer_length() -> usize {
    200
}

fn default_confidence_threshold() -> f64 {
    0.05
}

fn default_chunk_size() -> usize {
    350
}

fn default_chunk_overlap() -> usize {
    75
}

impl Default for QaConfig {
    fn default() -> Self {
        Self {
            max_answer_length: default_max_answer_length(),
            confidence_threshold: default_confidence_threshold(),
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
        }
    }
}

impl QaConfig {
    /// Load configuration from a file; missing keys fall back to the defaults
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
