use std::path::Path;

use anyhow::Result;
use cogito_engine::{Pacing, Session};

use crate::ui::{self, Locale, Theme};

pub fn handle(source: &Path, pacing: Pacing, theme: Theme, locale: Locale) -> Result<()> {
    let mut session = Session::new(source, pacing);
    session.load();
    ui::run(session, theme, locale)
}
