pub mod config;
pub mod logging;
pub mod release_notes;

pub mod testing;
