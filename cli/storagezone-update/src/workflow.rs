// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! GitHub Actions workflow commands
//!
//! The runner reads `::command key=value::message` lines from stdout and
//! appends step outputs to the file named by `GITHUB_OUTPUT`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Failed to write output file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unexpected input: {what} should not contain the delimiter \"{delimiter}\"")]
    DelimiterCollision {
        what: &'static str,
        delimiter: String,
    },
}

/// Escape a command message
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a command property value
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Format a workflow command line
pub fn command(name: &str, properties: &[(&str, &str)], message: &str) -> String {
    let mut line = format!("::{}", name);
    if !properties.is_empty() {
        line.push(' ');
        let props: Vec<String> = properties
            .iter()
            .map(|(key, value)| format!("{}={}", key, escape_property(value)))
            .collect();
        line.push_str(&props.join(","));
    }
    line.push_str("::");
    line.push_str(&escape_data(message));
    line
}

/// Mark the step as failed with `message`
pub fn error(message: &str) -> String {
    command("error", &[], message)
}

/// Ask the runner to redact `secret` from the log
pub fn add_mask(secret: &str) -> String {
    command("add-mask", &[], secret)
}

/// Where step outputs go
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputTarget {
    /// Append to the `GITHUB_OUTPUT` file
    File(PathBuf),
    /// Print the legacy `::set-output` command
    Stdout,
}

impl OutputTarget {
    pub fn from_env() -> Self {
        match std::env::var_os("GITHUB_OUTPUT") {
            Some(path) if !path.is_empty() => Self::File(PathBuf::from(path)),
            _ => Self::Stdout,
        }
    }

    /// Set step output `name` to `value`
    pub fn set_output(&self, name: &str, value: &str) -> Result<(), WorkflowError> {
        match self {
            Self::File(path) => {
                let entry = key_value_entry(name, value, &Uuid::new_v4().to_string())?;
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .and_then(|mut file| file.write_all(entry.as_bytes()))
                    .map_err(|source| WorkflowError::Io {
                        path: path.clone(),
                        source,
                    })
            }
            Self::Stdout => {
                println!("{}", command("set-output", &[("name", name)], value));
                Ok(())
            }
        }
    }
}

/// Heredoc entry for an environment file, terminated by a newline
fn key_value_entry(name: &str, value: &str, id: &str) -> Result<String, WorkflowError> {
    let delimiter = format!("ghadelimiter_{}", id);
    if name.contains(&delimiter) {
        return Err(WorkflowError::DelimiterCollision {
            what: "name",
            delimiter,
        });
    }
    if value.contains(&delimiter) {
        return Err(WorkflowError::DelimiterCollision {
            what: "value",
            delimiter,
        });
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_data() {
        assert_eq!(escape_data("100% done\r\nnext"), "100%25 done%0D%0Anext");
        assert_eq!(escape_data("plain"), "plain");
    }

    #[test]
    fn test_escape_property() {
        assert_eq!(escape_property("a:b,c%"), "a%3Ab%2Cc%25");
    }

    #[test]
    fn test_error_command() {
        assert_eq!(
            error("Updating failed with the status code 500."),
            "::error::Updating failed with the status code 500."
        );
        assert_eq!(error("line one\nline two"), "::error::line one%0Aline two");
    }

    #[test]
    fn test_command_with_properties() {
        assert_eq!(
            command("set-output", &[("name", "storageZoneId")], "42"),
            "::set-output name=storageZoneId::42"
        );
        assert_eq!(add_mask("s3cr3t"), "::add-mask::s3cr3t");
    }

    #[test]
    fn test_key_value_entry() {
        assert_eq!(
            key_value_entry("storageZoneId", "42", "abc").unwrap(),
            "storageZoneId<<ghadelimiter_abc\n42\nghadelimiter_abc\n"
        );
        assert!(matches!(
            key_value_entry("x", "ghadelimiter_abc", "abc"),
            Err(WorkflowError::DelimiterCollision { what: "value", .. })
        ));
    }

    #[test]
    fn test_set_output_appends_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output");
        std::fs::write(&path, "existing=1\n").unwrap();

        let target = OutputTarget::File(path.clone());
        target.set_output("storageZoneId", "42").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "existing=1");
        assert!(lines[1].starts_with("storageZoneId<<ghadelimiter_"));
        assert_eq!(lines[2], "42");
        assert_eq!(lines[3], lines[1].trim_start_matches("storageZoneId<<"));
    }
}
