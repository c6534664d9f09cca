// release notes data structures

use super::extractor::{extract_release_notes, version_heading};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// placeholder printed when the changelog has no section for `version`
pub fn fallback_notes(version: &str, path: &Path) -> String {
    format!(
        "{}\n\n- Release notes not found in {}.",
        version_heading(version),
        path.display()
    )
}

/// outcome of looking up one version in one changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNotes {
    pub version: String,
    pub path: PathBuf,
    pub notes: Option<String>,
}

impl ReleaseNotes {
    pub fn new(version: impl Into<String>, path: impl Into<PathBuf>, notes: Option<String>) -> Self {
        Self {
            version: version.into(),
            path: path.into(),
            notes,
        }
    }

    /// read the changelog at `path` and extract the section for `version`
    pub fn lookup<P: AsRef<Path>>(version: &str, path: P) -> Result<Self> {
        let path = path.as_ref();
        let notes = extract_release_notes(version, path)?;
        Ok(Self::new(version, path, notes))
    }

    pub fn is_found(&self) -> bool {
        self.notes.is_some()
    }

    /// text to publish: the extracted section, or the placeholder
    pub fn render(&self) -> String {
        match &self.notes {
            Some(notes) => notes.clone(),
            None => fallback_notes(&self.version, &self.path),
        }
    }
}
