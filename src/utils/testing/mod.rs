// testing utilities for generating changelog fixtures

pub mod changelog_builder;
pub mod scenarios;

pub use changelog_builder::{ChangelogBuilder, TestChangelog, TestSection};
pub use scenarios::ChangelogScenario;
