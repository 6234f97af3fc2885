use std::collections::HashSet;

/// Phrases that mark a hedging, non-committal span
const HEDGE_PHRASES: &[&str] = &["i don't know", "not sure", "unclear", "maybe", "possibly"];

/// Heuristic quality adjustment for a candidate answer, independent of the
/// model's own probability.
///
/// Penalizes fragments (under 10 trimmed characters) and hedge phrases,
/// rewards lexical overlap with the question and terminal punctuation.
/// Answers under 3 trimmed characters get a flat 0. The final delta is
/// clamped to [0.0, 1.0] before being added to the raw score, so ranking can
/// only move a candidate up, never below its raw score.
///
/// Deterministic and pure. The source window is part of the contract but
/// currently unused by the heuristic.
pub fn quality_delta(answer: &str, question: &str, _window_text: &str) -> f64 {
    let trimmed = answer.trim();
    if trimmed.chars().count() < 3 {
        return 0.0;
    }

    let mut delta = 0.0;

    if trimmed.chars().count() < 10 {
        delta -= 0.2;
    }

    let question_words = word_tokens(question);
    let answer_words = word_tokens(trimmed);
    let overlap = question_words.intersection(&answer_words).count();
    delta += 0.1 * overlap as f64;

    let lowered = trimmed.to_lowercase();
    if HEDGE_PHRASES.iter().any(|phrase| lowered.contains(phrase)) {
        delta -= 0.3;
    }

    if trimmed.ends_with('.') || trimmed.ends_with('!') {
        delta += 0.1;
    }

    delta.clamp(0.0, 1.0)
}

/// Distinct lowercase word tokens of `text`
fn word_tokens(text: &str) -> HashSet<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiny_answer_scores_zero() {
        assert_eq!(quality_delta("", "Who said hello?", ""), 0.0);
        assert_eq!(quality_delta("  a ", "Who said hello?", ""), 0.0);
    }

    #[test]
    fn test_keyword_overlap_bonus() {
        // "said" and "hello" overlap; short-answer penalty does not apply
        let delta = quality_delta("He said hello to everyone", "Who said hello?", "");
        assert!((delta - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_hedge_penalty_clamped_at_zero() {
        // -0.2 (short) - 0.3 (hedge) with no bonuses clamps to 0
        assert_eq!(quality_delta("maybe", "Who said hello?", ""), 0.0);
    }

    #[test]
    fn test_terminal_punctuation_bonus() {
        let with_period = quality_delta("He arrived at noon.", "When did he arrive?", "");
        let without = quality_delta("He arrived at noon", "When did he arrive?", "");
        assert!((with_period - without - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_deterministic() {
        let a = quality_delta("The meeting starts at nine.", "When does the meeting start?", "");
        let b = quality_delta("The meeting starts at nine.", "When does the meeting start?", "");
        assert_eq!(a, b);
    }
}
