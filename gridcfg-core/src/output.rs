use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// How to handle an artifact whose target file already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Replace the existing file.
    #[default]
    Always,
    /// Leave an existing file untouched.
    IfMissing,
}

/// Result of writing an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// The file was written.
    Written,
    /// The file already existed and was kept.
    Skipped,
}

/// The rendered text of one generation pass together with its destination.
///
/// An artifact is only constructed from a complete rendering, so a failed
/// generation pass never reaches the filesystem.
#[derive(Debug, Clone)]
pub struct Artifact {
    path: PathBuf,
    content: String,
    overwrite: Overwrite,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::default(),
        }
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the artifact, creating parent directories as needed.
    pub fn write(&self) -> Result<WriteResult> {
        if self.overwrite == Overwrite::IfMissing && self.path.exists() {
            tracing::debug!(path = %self.path.display(), "keeping existing file");
            return Ok(WriteResult::Skipped);
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
        }
        std::fs::write(&self.path, &self.content)
            .wrap_err_with(|| format!("failed to write '{}'", self.path.display()))?;

        tracing::debug!(
            path = %self.path.display(),
            bytes = self.content.len(),
            "wrote artifact"
        );
        Ok(WriteResult::Written)
    }
}
