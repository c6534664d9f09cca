// builder for creating test changelogs

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// one top-level section of a test changelog
#[derive(Debug, Clone)]
pub struct TestSection {
    pub version: String,
    pub lines: Vec<String>,
}

impl TestSection {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            lines: Vec::new(),
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn blank(self) -> Self {
        self.line("")
    }
}

/// builder for changelog files written into a temporary directory
pub struct ChangelogBuilder {
    file_name: String,
    preamble: Vec<String>,
    sections: Vec<TestSection>,
    crlf: bool,
}

impl ChangelogBuilder {
    pub fn new() -> Self {
        Self {
            file_name: "Releases.md".to_string(),
            preamble: Vec::new(),
            sections: Vec::new(),
            crlf: false,
        }
    }

    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// add a line that appears before the first heading
    pub fn preamble(mut self, line: impl Into<String>) -> Self {
        self.preamble.push(line.into());
        self
    }

    pub fn section(mut self, section: TestSection) -> Self {
        self.sections.push(section);
        self
    }

    /// write `\r\n` line endings instead of `\n`
    pub fn crlf(mut self) -> Self {
        self.crlf = true;
        self
    }

    /// render the changelog text without touching the filesystem
    pub fn render(&self) -> String {
        let newline = if self.crlf { "\r\n" } else { "\n" };
        let mut content = String::new();

        for line in &self.preamble {
            content.push_str(line);
            content.push_str(newline);
        }

        for section in &self.sections {
            content.push_str("# ");
            content.push_str(&section.version);
            content.push_str(newline);
            for line in &section.lines {
                content.push_str(line);
                content.push_str(newline);
            }
        }

        content
    }

    /// write the changelog and return a handle that owns the temp dir
    pub fn build(self) -> Result<TestChangelog, Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join(&self.file_name);
        fs::write(&path, self.render())?;

        Ok(TestChangelog {
            path,
            temp_dir,
        })
    }
}

impl Default for ChangelogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// a changelog on disk, removed when dropped
pub struct TestChangelog {
    path: PathBuf,
    temp_dir: TempDir,
}

impl TestChangelog {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }
}
