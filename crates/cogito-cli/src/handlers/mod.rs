pub mod browse;
pub mod categories;
pub mod list;
pub mod random;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use cogito_engine::{Browser, Pacing, load_collection};
use cogito_types::CategoryFilter;

/// Load the collection and apply criteria under zero-delay pacing, for the
/// scripted commands. One tick settles the debounce, so the criteria are
/// fully applied on return.
fn filtered_browser(
    source: &Path,
    search: &str,
    category: &str,
    batch_size: usize,
) -> Result<Browser> {
    let collection = load_collection(source)?;
    let mut browser = Browser::new(collection, Pacing::immediate().with_batch_size(batch_size));
    let now = Instant::now();
    browser.set_category(CategoryFilter::parse(category));
    browser.set_search_input(search, now);
    browser.tick(now);
    Ok(browser)
}
