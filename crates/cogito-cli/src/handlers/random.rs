use std::path::Path;

use anyhow::Result;
use cogito_engine::Pacing;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::args::OutputFormat;
use crate::output;

pub fn handle(
    source: &Path,
    search: &str,
    category: &str,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    let batch_size = Pacing::default().batch_size;
    let mut browser = super::filtered_browser(source, search, category, batch_size)?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // An empty filtered view is a silent no-op, matching the browser.
    match browser.select_random(&mut rng) {
        Some(thought) => output::render_thought(thought, format),
        None => Ok(()),
    }
}
