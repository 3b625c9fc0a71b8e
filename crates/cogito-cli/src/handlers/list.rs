use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use cogito_engine::Pacing;
use cogito_types::Thought;

use crate::args::OutputFormat;
use crate::output;

pub fn handle(
    source: &Path,
    search: &str,
    category: &str,
    limit: Option<usize>,
    all: bool,
    format: OutputFormat,
) -> Result<()> {
    let batch_size = limit.unwrap_or(Pacing::default().batch_size);
    let mut browser = super::filtered_browser(source, search, category, batch_size)?;

    if all {
        let now = Instant::now();
        browser.load_all(now);
        browser.tick(now);
    }

    let visible: Vec<&Thought> = browser.visible().collect();
    output::render_list(
        &visible,
        browser.filtered_len(),
        browser.collection_len(),
        format,
    )
}
