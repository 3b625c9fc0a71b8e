use cogito_types::{Thought, ThoughtId};

/// Payload that parses as JSON but is not an array.
pub const NON_ARRAY_CORPUS: &str = r#"{"thoughts": []}"#;

/// Build one thought record.
pub fn thought(id: &str, text: &str, author: &str, category: &str) -> Thought {
    Thought {
        id: ThoughtId::new(id),
        text: text.to_owned(),
        author: author.to_owned(),
        category: category.to_owned(),
    }
}

/// Small mixed-category corpus used across engine and CLI tests.
pub fn sample_thoughts() -> Vec<Thought> {
    vec![
        thought(
            "1",
            "The unexamined life is not worth living",
            "Socrates",
            "wisdom",
        ),
        thought(
            "2",
            "Love all, trust a few, do wrong to none",
            "Shakespeare",
            "love",
        ),
        thought("3", "The obstacle is the way", "Marcus Aurelius", "stoicism"),
        thought("4", "To love and be loved", "George Sand", "love"),
        thought("5", "Know thyself", "Socrates", "wisdom"),
    ]
}

/// Corpus of `count` generated thoughts in one category, for pagination
/// scenarios.
pub fn sized_thoughts(count: usize) -> Vec<Thought> {
    (0..count)
        .map(|i| {
            thought(
                &format!("t-{i}"),
                &format!("thought number {i}"),
                "generator",
                "generated",
            )
        })
        .collect()
}

/// Serialize a corpus the way a source document stores it.
pub fn corpus_json(thoughts: &[Thought]) -> String {
    serde_json::to_string_pretty(thoughts).expect("serializable corpus")
}
