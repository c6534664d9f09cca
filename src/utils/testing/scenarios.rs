// pre-defined test changelogs

use super::changelog_builder::{ChangelogBuilder, TestChangelog, TestSection};

/// pre-defined changelog layouts
pub enum ChangelogScenario {
    /// three releases: v2.0, v1.0, v0.9
    ThreeReleases,
    /// free text above the first heading, then v1.0 and v0.9
    WithPreamble,
    /// file without any top-level heading
    NoHeadings,
}

impl ChangelogScenario {
    pub fn builder(self) -> ChangelogBuilder {
        match self {
            ChangelogScenario::ThreeReleases => ChangelogBuilder::new()
                .section(TestSection::new("v2.0").line("- Feature A").blank())
                .section(
                    TestSection::new("v1.0")
                        .line("- Fix B")
                        .line("- Fix C")
                        .blank(),
                )
                .section(TestSection::new("v0.9").line("- Initial")),
            ChangelogScenario::WithPreamble => ChangelogBuilder::new()
                .preamble("Release history.")
                .preamble("")
                .preamble("- not a release entry")
                .section(
                    TestSection::new("v1.0")
                        .line("## Fixed")
                        .line("- Crash on startup")
                        .blank(),
                )
                .section(TestSection::new("v0.9").line("- Initial")),
            ChangelogScenario::NoHeadings => ChangelogBuilder::new()
                .preamble("## v1.0")
                .preamble("- sub-heading only"),
        }
    }

    /// write the scenario to a temporary file
    pub fn build(self) -> Result<TestChangelog, Box<dyn std::error::Error>> {
        self.builder().build()
    }
}
