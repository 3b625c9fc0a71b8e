use cogito_types::{FilterCriteria, Thought};

/// An item matches when the category selector accepts it and the search
/// term (already debounced by the caller) appears case-insensitively in
/// its text or author. An empty term matches everything.
pub fn matches(thought: &Thought, criteria: &FilterCriteria) -> bool {
    if !criteria.category.matches(&thought.category) {
        return false;
    }
    if criteria.term.is_empty() {
        return true;
    }
    let term = criteria.term.to_lowercase();
    thought.text.to_lowercase().contains(&term) || thought.author.to_lowercase().contains(&term)
}

/// Project the collection under the criteria. Returns indices into the
/// collection, preserving its original order; no re-ranking.
pub fn apply(collection: &[Thought], criteria: &FilterCriteria) -> Vec<usize> {
    collection
        .iter()
        .enumerate()
        .filter(|(_, thought)| matches(thought, criteria))
        .map(|(index, _)| index)
        .collect()
}

/// Distinct category values in first-seen collection order. The `all`
/// sentinel is not included; it belongs to the selector, not the data.
pub fn categories(collection: &[Thought]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for thought in collection {
        if !seen.iter().any(|c| c == &thought.category) {
            seen.push(thought.category.clone());
        }
    }
    seen
}
