// release notes extractor

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// prefix shared by every top-level heading
pub const HEADING_PREFIX: &str = "# ";

/// build the heading line that opens the section for `version`
pub fn version_heading(version: &str) -> String {
    format!("{}{}", HEADING_PREFIX, version)
}

/// extract the section for `version` from the changelog at `path`
///
/// returns `Ok(None)` when no line equals `# <version>` after trimming.
/// open, read and utf-8 decoding failures are returned as
/// [`Error::FileReadError`].
pub fn extract_release_notes<P: AsRef<Path>>(version: &str, path: P) -> Result<Option<String>> {
    let path = path.as_ref();
    let read_error = |e: io::Error| Error::FileReadError {
        path: path.to_path_buf(),
        source: e,
    };

    let file = File::open(path).map_err(read_error)?;
    debug!("scanning {} for version {}", path.display(), version);

    extract_from_reader(version, BufReader::new(file)).map_err(read_error)
}

/// extract the section for `version` from any buffered reader
///
/// the section starts at the matching heading (inclusive) and ends right
/// before the next line starting with `# `, or at end of input. lines
/// before the matching heading are skipped, so a preamble above the first
/// heading never ends up in any section.
pub fn extract_from_reader<R: BufRead>(version: &str, mut reader: R) -> io::Result<Option<String>> {
    let header = version_heading(version);
    let mut notes = String::new();
    let mut found = false;
    let mut chunk = String::new();
    let mut line_number = 0;

    'scan: loop {
        chunk.clear();
        if reader.read_line(&mut chunk)? == 0 {
            break;
        }

        for line in split_lines(&chunk) {
            line_number += 1;

            if !found && line.trim() == header {
                debug!("found heading '{}' at line {}", header, line_number);
                found = true;
                notes.push_str(&line);
                continue;
            }

            if !found {
                continue;
            }

            // next top-level section, not part of ours
            if line.starts_with(HEADING_PREFIX) {
                debug!("section ends before line {}", line_number);
                break 'scan;
            }

            notes.push_str(&line);
        }
    }

    if !found {
        return Ok(None);
    }

    let mut section = notes.trim().to_string();
    section.push('\n');
    Ok(Some(section))
}

/// split one `read_line` chunk into lines terminated by `\n`
///
/// `\r\n` and a lone `\r` both end a line and come out as `\n`.
fn split_lines(chunk: &str) -> Vec<String> {
    chunk
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .split_inclusive('\n')
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "# v2.0\n- Feature A\n\n# v1.0\n- Fix B\n- Fix C\n\n# v0.9\n- Initial\n";

    fn extract(version: &str, content: &str) -> Option<String> {
        extract_from_reader(version, Cursor::new(content)).unwrap()
    }

    #[test]
    fn test_extract_middle_section() {
        assert_eq!(
            extract("v1.0", SAMPLE),
            Some("# v1.0\n- Fix B\n- Fix C\n".to_string())
        );
    }

    #[test]
    fn test_extract_first_section() {
        assert_eq!(
            extract("v2.0", SAMPLE),
            Some("# v2.0\n- Feature A\n".to_string())
        );
    }

    #[test]
    fn test_extract_last_section_runs_to_eof() {
        assert_eq!(
            extract("v0.9", SAMPLE),
            Some("# v0.9\n- Initial\n".to_string())
        );
    }

    #[test]
    fn test_missing_version() {
        assert_eq!(extract("v3.0", SAMPLE), None);
    }

    #[test]
    fn test_heading_match_is_exact() {
        let content = "# v1.0.1\n- Patch\n# v1.0-beta\n- Beta\n";
        assert_eq!(extract("v1.0", content), None);
    }

    #[test]
    fn test_heading_with_surrounding_whitespace_matches() {
        let content = "  # v1.0\n- Fix\n# v0.9\n";
        assert_eq!(extract("v1.0", content), Some("# v1.0\n- Fix\n".to_string()));

        // only the heading comparison is trimmed, collected lines are kept as is
        let content = "# v1.0\t\n- Fix\n";
        assert_eq!(
            extract("v1.0", content),
            Some("# v1.0\t\n- Fix\n".to_string())
        );
    }

    #[test]
    fn test_subheadings_are_body_content() {
        let content = "# v1.0\n## Added\n- Thing\n### Details\n```\n# not a heading in code\n```\n";
        // the line inside the fence starts with "# " and still ends the section
        assert_eq!(
            extract("v1.0", content),
            Some("# v1.0\n## Added\n- Thing\n### Details\n```\n".to_string())
        );
    }

    #[test]
    fn test_indented_hash_line_does_not_end_section() {
        let content = "# v1.0\n- Fix\n  # indented\n# v0.9\n";
        assert_eq!(
            extract("v1.0", content),
            Some("# v1.0\n- Fix\n  # indented\n".to_string())
        );
    }

    #[test]
    fn test_preamble_is_discarded() {
        let content = "Release history for the project.\n\nSee below.\n# v1.0\n- Fix\n";
        assert_eq!(extract("v1.0", content), Some("# v1.0\n- Fix\n".to_string()));
    }

    #[test]
    fn test_repeated_heading_ends_section() {
        let content = "# v1.0\n- First\n# v1.0\n- Second\n";
        assert_eq!(extract("v1.0", content), Some("# v1.0\n- First\n".to_string()));
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "# v1.0\r\n- Fix B\r\n\r\n# v0.9\r\n";
        assert_eq!(
            extract("v1.0", content),
            Some("# v1.0\n- Fix B\n".to_string())
        );
    }

    #[test]
    fn test_lone_cr_line_endings() {
        let content = "# v1.0\r- Fix\r# v0.9\r- Old\r";
        assert_eq!(extract("v1.0", content), Some("# v1.0\n- Fix\n".to_string()));
    }

    #[test]
    fn test_mixed_line_endings() {
        let content = "intro\r# v1.0\r\n- Fix A\r- Fix B\n\r# v0.9\n";
        assert_eq!(
            extract("v1.0", content),
            Some("# v1.0\n- Fix A\n- Fix B\n".to_string())
        );
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\rb\r\n"), vec!["a\n", "b\n"]);
        assert_eq!(split_lines("tail"), vec!["tail"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_heading_without_trailing_newline() {
        assert_eq!(extract("v1.0", "# v1.0"), Some("# v1.0\n".to_string()));
    }

    #[test]
    fn test_empty_version_never_matches() {
        assert_eq!(extract("", "# \n#\n- body\n"), None);
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let bytes: &[u8] = b"# v1.0\n\xff\xfe\n";
        let result = extract_from_reader("v1.0", Cursor::new(bytes));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_version_heading() {
        assert_eq!(version_heading("1.2.3"), "# 1.2.3");
    }
}
