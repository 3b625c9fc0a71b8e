use std::path::{Path, PathBuf};

use anyhow::Result;
use assert_cmd::Command;
use cogito_types::Thought;
use tempfile::TempDir;

/// Disposable environment for CLI integration tests: a temp directory
/// holding one corpus file, plus pre-wired invocations of the binary
/// pointed at it.
pub struct TestWorld {
    dir: TempDir,
    source: PathBuf,
}

impl TestWorld {
    pub fn new() -> Result<Self> {
        let dir = TempDir::new()?;
        let source = dir.path().join("thoughts.json");
        Ok(Self { dir, source })
    }

    pub fn with_thoughts(thoughts: &[Thought]) -> Result<Self> {
        let world = Self::new()?;
        world.write_corpus(&serde_json::to_string_pretty(thoughts)?)?;
        Ok(world)
    }

    pub fn with_raw_corpus(raw: &str) -> Result<Self> {
        let world = Self::new()?;
        world.write_corpus(raw)?;
        Ok(world)
    }

    pub fn write_corpus(&self, raw: &str) -> Result<()> {
        std::fs::write(&self.source, raw)?;
        Ok(())
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Command for the cogito binary pointed at this world's corpus. The
    /// env override is cleared so the test environment cannot leak in.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("cogito").expect("cogito binary built");
        cmd.env_remove("COGITO_SOURCE");
        cmd.arg("--source").arg(&self.source);
        cmd
    }
}
