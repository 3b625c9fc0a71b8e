use std::time::Instant;

use cogito_types::{CategoryFilter, FilterCriteria, Thought, ThoughtId};
use rand::Rng;

use crate::filter;
use crate::pacing::Pacing;
use crate::window::PageWindow;

/// Fraction of the scrollable distance past which another batch is
/// requested automatically.
pub const SCROLL_THRESHOLD: f64 = 0.8;

/// Browsing state over one loaded collection: filter criteria, the derived
/// filtered view, the display window, and the current selection.
///
/// The collection is set once and never mutated. The filtered view is a
/// pure projection recomputed whenever the applied criteria change; every
/// recomputation resets the display window. All timing flows through
/// `tick(now)`; the browser never sleeps.
pub struct Browser {
    collection: Vec<Thought>,
    categories: Vec<String>,
    search_input: String,
    criteria: FilterCriteria,
    debounce_due: Option<Instant>,
    filtered: Vec<usize>,
    window: PageWindow,
    selection: Option<ThoughtId>,
    pacing: Pacing,
}

impl Browser {
    pub fn new(collection: Vec<Thought>, pacing: Pacing) -> Self {
        let categories = filter::categories(&collection);
        let criteria = FilterCriteria::default();
        let filtered = filter::apply(&collection, &criteria);
        let window = PageWindow::new(filtered.len(), pacing.batch_size);
        Self {
            collection,
            categories,
            search_input: String::new(),
            criteria,
            debounce_due: None,
            filtered,
            window,
            selection: None,
            pacing,
        }
    }

    // ---- derived views -------------------------------------------------

    pub fn collection_len(&self) -> usize {
        self.collection.len()
    }

    /// Distinct categories in first-seen order, without the sentinel.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// The display window: a prefix of the filtered view.
    pub fn visible(&self) -> impl Iterator<Item = &Thought> {
        self.filtered[..self.window.loaded()]
            .iter()
            .map(|&index| &self.collection[index])
    }

    pub fn visible_len(&self) -> usize {
        self.window.loaded()
    }

    pub fn has_more(&self) -> bool {
        self.window.has_more()
    }

    pub fn is_extending(&self) -> bool {
        self.window.is_extending()
    }

    /// Raw search input, echoed before the debounce lands.
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Criteria currently applied to the filtered view.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn selection(&self) -> Option<&Thought> {
        let id = self.selection.as_ref()?;
        self.collection.iter().find(|thought| &thought.id == id)
    }

    pub fn is_selected(&self, id: &ThoughtId) -> bool {
        self.selection.as_ref() == Some(id)
    }

    // ---- filter criteria -----------------------------------------------

    /// Update the echoed input and reschedule the debounce. Each keystroke
    /// cancels the previous pending application; only the last one within
    /// the quiet window ever fires.
    pub fn set_search_input(&mut self, input: impl Into<String>, now: Instant) {
        let input = input.into();
        if input == self.search_input {
            return;
        }
        self.search_input = input;
        self.debounce_due = Some(now + self.pacing.debounce);
    }

    /// Category changes apply immediately; there is nothing to debounce.
    pub fn set_category(&mut self, category: CategoryFilter) {
        if category == self.criteria.category {
            return;
        }
        self.criteria.category = category;
        self.recompute();
    }

    /// Reset search and category to defaults. The selection is untouched.
    pub fn clear_filters(&mut self) {
        self.search_input.clear();
        self.debounce_due = None;
        if !self.criteria.is_default() {
            self.criteria = FilterCriteria::default();
            self.recompute();
        }
    }

    // ---- pagination ----------------------------------------------------

    /// Request one more batch; ignored while an extension is in flight.
    pub fn load_more(&mut self, now: Instant) -> bool {
        self.window.request_more(now, self.pacing.batch_delay)
    }

    /// Request the entire remainder of the filtered view.
    pub fn load_all(&mut self, now: Instant) -> bool {
        self.window.request_all(now, self.pacing.load_all_delay)
    }

    /// Scroll-position signal in `[0, 1]`; crossing the threshold requests
    /// another batch.
    pub fn on_scroll_progress(&mut self, progress: f64, now: Instant) -> bool {
        if progress >= SCROLL_THRESHOLD {
            self.load_more(now)
        } else {
            false
        }
    }

    /// Advance time: land a due debounce, then a due extension. Returns
    /// true when any derived state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if let Some(due) = self.debounce_due
            && now >= due
        {
            self.debounce_due = None;
            if self.criteria.term != self.search_input {
                self.criteria.term = self.search_input.clone();
                self.recompute();
                changed = true;
            }
        }
        if self.window.tick(now) {
            changed = true;
        }
        changed
    }

    // ---- selection -----------------------------------------------------

    /// Select the item, or clear the selection when it is already selected.
    pub fn toggle_select(&mut self, id: &ThoughtId) {
        if self.is_selected(id) {
            self.selection = None;
        } else {
            self.selection = Some(id.clone());
        }
    }

    /// Uniformly random pick from the filtered view; silent no-op when the
    /// view is empty.
    pub fn select_random<R: Rng>(&mut self, rng: &mut R) -> Option<&Thought> {
        if self.filtered.is_empty() {
            return None;
        }
        let index = self.filtered[rng.gen_range(0..self.filtered.len())];
        self.selection = Some(self.collection[index].id.clone());
        Some(&self.collection[index])
    }

    // ---- internals -----------------------------------------------------

    /// Rederive the filtered view and reset the window; the single code
    /// path behind every criteria change.
    fn recompute(&mut self) {
        self.filtered = filter::apply(&self.collection, &self.criteria);
        self.window.reset(self.filtered.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn thought(id: &str, text: &str, author: &str, category: &str) -> Thought {
        Thought {
            id: ThoughtId::new(id),
            text: text.to_owned(),
            author: author.to_owned(),
            category: category.to_owned(),
        }
    }

    fn sample() -> Vec<Thought> {
        vec![
            thought("1", "The unexamined life", "Socrates", "wisdom"),
            thought("2", "Love all, trust a few", "Shakespeare", "love"),
            thought("3", "Know thyself", "Socrates", "wisdom"),
        ]
    }

    #[test]
    fn test_debounce_applies_after_quiet_interval() {
        let now = Instant::now();
        let mut browser = Browser::new(sample(), Pacing::default());

        browser.set_search_input("soc", now);
        assert_eq!(browser.search_input(), "soc");
        // Still echoing only; nothing applied.
        assert_eq!(browser.criteria().term, "");
        assert_eq!(browser.filtered_len(), 3);

        // A later keystroke pushes the deadline out.
        browser.set_search_input("socr", now + Duration::from_millis(200));
        assert!(!browser.tick(now + Duration::from_millis(400)));
        assert_eq!(browser.criteria().term, "");

        assert!(browser.tick(now + Duration::from_millis(500)));
        assert_eq!(browser.criteria().term, "socr");
        assert_eq!(browser.filtered_len(), 2);
    }

    #[test]
    fn test_debounce_to_unchanged_term_does_not_reset() {
        let now = Instant::now();
        let mut browser = Browser::new(sample(), Pacing::immediate());
        browser.set_search_input("x", now);
        browser.set_search_input("", now);
        assert!(!browser.tick(now));
        assert_eq!(browser.filtered_len(), 3);
    }

    #[test]
    fn test_category_change_applies_immediately() {
        let mut browser = Browser::new(sample(), Pacing::default());
        browser.set_category(CategoryFilter::named("love"));
        assert_eq!(browser.filtered_len(), 1);
    }

    #[test]
    fn test_clear_filters_keeps_selection() {
        let now = Instant::now();
        let mut browser = Browser::new(sample(), Pacing::immediate());
        let id = ThoughtId::new("2");
        browser.toggle_select(&id);
        browser.set_category(CategoryFilter::named("wisdom"));
        browser.set_search_input("know", now);
        browser.tick(now);

        browser.clear_filters();
        assert_eq!(browser.search_input(), "");
        assert!(browser.criteria().is_default());
        assert_eq!(browser.filtered_len(), 3);
        assert!(browser.is_selected(&id));
    }

    #[test]
    fn test_toggle_select_twice_round_trips() {
        let mut browser = Browser::new(sample(), Pacing::default());
        let id = ThoughtId::new("1");
        browser.toggle_select(&id);
        assert!(browser.is_selected(&id));
        browser.toggle_select(&id);
        assert!(browser.selection().is_none());
    }

    #[test]
    fn test_select_random_on_empty_view_is_noop() {
        let now = Instant::now();
        let mut browser = Browser::new(sample(), Pacing::immediate());
        browser.set_search_input("no such thing", now);
        browser.tick(now);
        assert_eq!(browser.filtered_len(), 0);

        let mut rng = rand::thread_rng();
        assert!(browser.select_random(&mut rng).is_none());
        assert!(browser.selection().is_none());
    }

    #[test]
    fn test_scroll_threshold_triggers_load() {
        let now = Instant::now();
        let collection: Vec<Thought> = (0..30)
            .map(|i| thought(&i.to_string(), "text", "author", "cat"))
            .collect();
        let mut browser = Browser::new(collection, Pacing::default());

        assert!(!browser.on_scroll_progress(0.5, now));
        assert!(browser.on_scroll_progress(0.85, now));
        // Guard holds while the extension is in flight.
        assert!(!browser.on_scroll_progress(0.95, now));
    }
}
