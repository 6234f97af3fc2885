// Tests for the once-initialized shared oracle handle
//
// Model construction is expensive and not assumed thread-safe, so the holder
// must run its initializer exactly once even under concurrent first use, and
// a failed initialization must leave the cell empty for a later retry.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use transcript_qa::{OracleCell, OracleError, SharedOracle, SpanCandidate, SpanOracle};

struct StubBackend;

impl SpanOracle for StubBackend {
    fn extract_spans(
        &self,
        _question: &str,
        _context: &str,
        _max_answer_length: usize,
        _top_k: usize,
    ) -> Result<Vec<SpanCandidate>, OracleError> {
        Ok(Vec::new())
    }

    fn name(&self) -> &str {
        "stub-model"
    }
}

#[test]
fn test_initializer_runs_once_under_concurrent_first_use() {
    let cell = Arc::new(OracleCell::new());
    let inits = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cell = Arc::clone(&cell);
            let inits = Arc::clone(&inits);
            std::thread::spawn(move || {
                let oracle = cell
                    .get_or_init(|| {
                        inits.fetch_add(1, Ordering::SeqCst);
                        Ok(Arc::new(StubBackend) as SharedOracle)
                    })
                    .unwrap();
                oracle.name().to_string()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "stub-model");
    }
    assert_eq!(inits.load(Ordering::SeqCst), 1);

    // Later calls reuse the stored handle without touching the initializer
    let oracle = cell
        .get_or_init(|| {
            inits.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(StubBackend) as SharedOracle)
        })
        .unwrap();
    assert_eq!(oracle.name(), "stub-model");
    assert_eq!(inits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_failed_initialization_is_retryable() {
    let cell = OracleCell::new();

    let first = cell.get_or_init(|| Err(anyhow::anyhow!("model file missing")));
    assert!(first.is_err());
    assert!(cell.get().is_none());

    let oracle = cell
        .get_or_init(|| Ok(Arc::new(StubBackend) as SharedOracle))
        .unwrap();
    assert_eq!(oracle.name(), "stub-model");
    assert!(cell.get().is_some());
}

#[test]
fn test_get_before_initialization_is_none() {
    let cell = OracleCell::default();
    assert!(cell.get().is_none());
}
