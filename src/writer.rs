//! JSON rendering and output destinations.

use crate::config::{Config, Output};
use crate::error::{GeneratorError, Result};
use crate::record::UserRecord;
use log::info;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Renders records as a JSON array, two-space indented when `pretty`.
pub fn render(records: &[UserRecord], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(json)
}

/// Writes the rendered array to `writer` without a trailing newline.
pub fn write_records<W: Write>(
    records: &[UserRecord],
    mut writer: W,
    pretty: bool,
) -> io::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, records)?;
    } else {
        serde_json::to_writer(&mut writer, records)?;
    }
    writer.flush()
}

/// Sends the records to the configured destination.
///
/// Stdout gets the array plus a newline. A file is truncated for pretty
/// output; compact output is appended to whatever the file already holds,
/// with no separator between arrays.
pub fn write_output(records: &[UserRecord], config: &Config) -> Result<()> {
    match &config.output {
        Output::Stdout => {
            let stdout = io::stdout();
            write_stdout(records, stdout.lock(), config.pretty)?;
        }
        Output::File(path) => {
            let mut options = OpenOptions::new();
            if config.pretty {
                options.write(true).create(true).truncate(true);
            } else {
                options.append(true).create(true);
            }

            options
                .open(path)
                .and_then(|file| write_records(records, file, config.pretty))
                .map_err(|source| write_error(path, source))?;
        }
    }

    info!("Wrote {} users to {}", records.len(), config.output);
    Ok(())
}

/// Writes the array followed by a newline.
fn write_stdout<W: Write>(records: &[UserRecord], mut writer: W, pretty: bool) -> Result<()> {
    write_records(records, &mut writer, pretty)
        .and_then(|_| writeln!(writer))
        .map_err(GeneratorError::Stdout)
}

fn write_error(path: &Path, source: io::Error) -> GeneratorError {
    GeneratorError::Write {
        path: PathBuf::from(path),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::HashAlgorithm;
    use crate::record::{CALLER_ID, ROLE};
    use std::fs;
    use tempfile::TempDir;

    fn sample_records() -> Vec<UserRecord> {
        ["a@x.com", "b@x.com"]
            .iter()
            .map(|email| UserRecord {
                user_name: email.to_string(),
                password_salt: "AAAAAAAA".into(),
                password_hash: "d41d8cd98f00b204e9800998ecf8427e".into(),
                caller_id: CALLER_ID,
                role: ROLE,
                hash: HashAlgorithm::Md5,
            })
            .collect()
    }

    fn file_config(path: PathBuf, pretty: bool) -> Config {
        Config {
            input: PathBuf::from("emails.txt"),
            hash: HashAlgorithm::Md5,
            output: Output::File(path),
            pretty,
        }
    }

    #[test]
    fn test_render_compact_has_no_whitespace() {
        let json = render(&sample_records(), false).unwrap();
        assert!(json.starts_with("[{\"UserName\":\"a@x.com\""));
        assert!(!json.contains('\n'));
        assert!(!json.contains(": "));
    }

    #[test]
    fn test_render_pretty_uses_two_space_indent() {
        let json = render(&sample_records(), true).unwrap();
        assert!(json.starts_with("[\n  {\n    \"UserName\": \"a@x.com\","));
        assert!(json.ends_with("}\n]"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[], false).unwrap(), "[]");
        assert_eq!(render(&[], true).unwrap(), "[]");
    }

    #[test]
    fn test_pretty_and_compact_parse_identically() {
        let compact: serde_json::Value =
            serde_json::from_str(&render(&sample_records(), false).unwrap()).unwrap();
        let pretty: serde_json::Value =
            serde_json::from_str(&render(&sample_records(), true).unwrap()).unwrap();
        assert_eq!(compact, pretty);
    }

    #[test]
    fn test_write_records_to_buffer() {
        let mut buffer = Vec::new();
        write_records(&sample_records(), &mut buffer, false).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            render(&sample_records(), false).unwrap()
        );
    }

    #[test]
    fn test_stdout_output_ends_with_newline() {
        let mut buffer = Vec::new();
        write_stdout(&sample_records(), &mut buffer, true).unwrap();

        let printed = String::from_utf8(buffer).unwrap();
        assert_eq!(printed, format!("{}\n", render(&sample_records(), true).unwrap()));
    }

    #[test]
    fn test_stdout_failure_names_stdout() {
        struct ClosedPipe;

        impl Write for ClosedPipe {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = write_stdout(&sample_records(), ClosedPipe, false).unwrap_err();
        assert!(matches!(err, GeneratorError::Stdout(_)));
        assert_eq!(err.to_string(), "Was not able to write to stdout [pipe closed]");
    }

    #[test]
    fn test_pretty_file_is_overwritten() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        let config = file_config(path.clone(), true);

        write_output(&sample_records(), &config).unwrap();
        write_output(&sample_records(), &config).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, render(&sample_records(), true).unwrap());
    }

    #[test]
    fn test_compact_file_is_appended_without_separator() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        let config = file_config(path.clone(), false);

        write_output(&sample_records(), &config).unwrap();
        write_output(&sample_records(), &config).unwrap();

        let single = render(&sample_records(), false).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, format!("{}{}", single, single));
    }

    #[test]
    fn test_write_failure_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let config = file_config(path, true);

        let err = write_output(&sample_records(), &config).unwrap_err();
        assert!(matches!(err, GeneratorError::Write { .. }));
        assert!(err.to_string().contains("out.json"));
    }
}
