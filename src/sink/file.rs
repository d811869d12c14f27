//! File-command sink: append outputs to the runner's output file.
//!
//! Single-line values are written as `key=value`. Values with a line break
//! use the delimited form:
//!
//! key<<ghadelimiter_<uuid>
//! value
//! ghadelimiter_<uuid>

use crate::diagnostics::EOL;
use crate::sink::{OutputSink, SinkError, render_value};
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileCommandSink {
    path: PathBuf,
}

impl FileCommandSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputSink for FileCommandSink {
    fn emit(&mut self, key: &str, value: &Value) -> Result<(), SinkError> {
        let line = format_entry(key, &render_value(value))?;

        // The runner creates the file; we only ever append to it.
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|source| SinkError::Open {
                path: self.path.clone(),
                source,
            })?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

fn format_entry(key: &str, value: &str) -> Result<String, SinkError> {
    if !key.contains(['\n', '\r']) && !value.contains(['\n', '\r']) {
        return Ok(format!("{}={}{}", key, value, EOL));
    }

    let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
    if key.contains(&delimiter) || value.contains(&delimiter) {
        return Err(SinkError::DelimiterCollision(delimiter));
    }
    Ok(format!(
        "{key}<<{delim}{eol}{value}{eol}{delim}{eol}",
        key = key,
        delim = delimiter,
        value = value,
        eol = EOL
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    #[test]
    fn appends_key_value_lines() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), format!("existing=1{}", EOL)).unwrap();

        let mut sink = FileCommandSink::new(file.path());
        sink.emit("id", &json!("U1")).unwrap();
        sink.emit("user", &json!({"id": "U1"})).unwrap();

        let text = fs::read_to_string(file.path()).unwrap();
        assert_eq!(
            text,
            format!("existing=1{eol}id=U1{eol}user={{\"id\":\"U1\"}}{eol}", eol = EOL)
        );
    }

    #[test]
    fn multiline_value_uses_delimiter() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut sink = FileCommandSink::new(file.path());
        sink.emit("title", &json!("a\nb")).unwrap();

        let text = fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        let delimiter = lines[0].strip_prefix("title<<").unwrap();
        assert!(delimiter.starts_with("ghadelimiter_"));
        assert_eq!(lines[1], "a");
        assert_eq!(lines[2], "b");
        assert_eq!(lines[3], delimiter);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent");
        let mut sink = FileCommandSink::new(&path);

        let err = sink.emit("id", &json!("U1")).unwrap_err();
        assert!(matches!(err, SinkError::Open { .. }));
        assert!(!path.exists());
    }
}
