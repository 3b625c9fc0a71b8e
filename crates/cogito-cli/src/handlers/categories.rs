use std::path::Path;

use anyhow::Result;
use cogito_engine::{filter, load_collection};

use crate::args::OutputFormat;
use crate::output;

pub fn handle(source: &Path, format: OutputFormat) -> Result<()> {
    let collection = load_collection(source)?;
    let categories = filter::categories(&collection);
    output::render_categories(&categories, format)
}
