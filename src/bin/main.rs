use anyhow::{Context, Result};
use clap::Parser;
use relnotes::{OutputFormat, RelnotesConfig, ReleaseNotes, setup_logging};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

// exactly two positionals: `--help`/`--version` are not flags, and values
// starting with `-` (e.g. `-rc1`) are taken as arguments
#[derive(Parser)]
#[command(name = "relnotes")]
#[command(about = "extract the release notes of one version from a changelog", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// version to look up, matched against `# <version>` headings
    #[arg(id = "release_version", value_name = "VERSION", allow_hyphen_values = true)]
    version: String,

    /// path to the changelog file (e.g. Releases.md)
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    path: PathBuf,

    /// output format (json or human), overrides the config file
    #[arg(long)]
    format: Option<OutputFormat>,

    /// path to a relnotes.toml (defaults to ./relnotes.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// json document printed by `--format json`
#[derive(Serialize)]
struct JsonNotes<'a> {
    version: &'a str,
    path: String,
    found: bool,
    notes: Option<&'a str>,
}

fn main() -> Result<()> {
    // usage errors exit with status 2 from clap
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RelnotesConfig::load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => RelnotesConfig::load_or_default("."),
    };

    setup_logging(&config.log_level);
    debug!("using config: {:?}", config);

    let format = cli.format.unwrap_or(config.format);
    let version = cli.version.trim();

    let notes = ReleaseNotes::lookup(version, &cli.path).with_context(|| {
        format!(
            "failed to extract release notes for {} from {}",
            version,
            cli.path.display()
        )
    })?;

    // a missing section is not a failure, release pipelines publish the placeholder
    if notes.is_found() {
        info!("found release notes for {} in {}", version, cli.path.display());
    } else {
        info!("no release notes for {} in {}", version, cli.path.display());
    }

    handle_output(&notes, format)
}

fn handle_output(notes: &ReleaseNotes, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            // lossy path so non utf-8 file names still serialize
            let output = JsonNotes {
                version: &notes.version,
                path: notes.path.display().to_string(),
                found: notes.is_found(),
                notes: notes.notes.as_deref(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", notes.render());
        }
    }

    Ok(())
}
