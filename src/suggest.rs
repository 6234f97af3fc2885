/// Generic question prompts offered alongside the question box.
///
/// Always the same two prompts regardless of transcript content.
pub fn suggested_questions(_transcript: &str) -> Vec<String> {
    vec![
        "What is the main topic discussed here?".to_string(),
        "What are the important details discussed here?".to_string(),
    ]
}
