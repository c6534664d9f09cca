pub mod error;
pub mod utils;

pub use error::*;
pub use utils::config::{CONFIG_FILE_NAME, OutputFormat, RelnotesConfig};
pub use utils::logging::setup_logging;
pub use utils::release_notes::{
    HEADING_PREFIX, ReleaseNotes, extract_from_reader, extract_release_notes, fallback_notes,
    version_heading,
};
