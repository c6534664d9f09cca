// release notes extraction module

pub mod extractor;
pub mod types;

pub use extractor::{HEADING_PREFIX, extract_from_reader, extract_release_notes, version_heading};
pub use types::{ReleaseNotes, fallback_notes};
