use std::path::{Path, PathBuf};

use cogito_types::LoadStatus;

use crate::browser::Browser;
use crate::loader;
use crate::pacing::Pacing;

/// One browsing session: the load-status machine plus, once ready, the
/// browsing state.
///
/// `Idle -> Loading -> {Ready, Failed}`. A failed session holds no
/// collection; the only way out of `Failed` is `reload`, which restarts
/// the whole lifecycle (there is no scoped retry of just the fetch).
pub struct Session {
    source: PathBuf,
    pacing: Pacing,
    status: LoadStatus,
    browser: Option<Browser>,
}

impl Session {
    pub fn new(source: impl Into<PathBuf>, pacing: Pacing) -> Self {
        Self {
            source: source.into(),
            pacing,
            status: LoadStatus::Idle,
            browser: None,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn browser(&self) -> Option<&Browser> {
        self.browser.as_ref()
    }

    pub fn browser_mut(&mut self) -> Option<&mut Browser> {
        self.browser.as_mut()
    }

    /// Perform the session's one load.
    pub fn load(&mut self) {
        self.status = LoadStatus::Loading;
        self.browser = None;
        match loader::load_collection(&self.source) {
            Ok(collection) => {
                self.browser = Some(Browser::new(collection, self.pacing.clone()));
                self.status = LoadStatus::Ready;
            }
            Err(err) => {
                self.status = LoadStatus::Failed(err.to_string());
            }
        }
    }

    /// Full reload: discard everything and run the lifecycle again.
    pub fn reload(&mut self) {
        self.browser = None;
        self.status = LoadStatus::Idle;
        self.load();
    }
}
