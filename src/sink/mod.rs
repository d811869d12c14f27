//! Output sinks: where the step's key/value outputs go.
//!
//! The runner accepts outputs either through the file named by
//! `GITHUB_OUTPUT` or, on older runners, through the `set-output` command on
//! stdout. Both sit behind [`OutputSink`]; [`for_environment`] picks one.

pub mod command;
pub mod file;

pub use command::CommandSink;
pub use file::FileCommandSink;

use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("could not open output file {}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unexpected input: name or value contains the delimiter {0:?}")]
    DelimiterCollision(String),
}

pub trait OutputSink {
    fn emit(&mut self, key: &str, value: &Value) -> Result<(), SinkError>;
}

/// Choose the file sink when the runner provides an output file, otherwise
/// fall back to stdout commands.
pub fn for_environment(output_file: Option<PathBuf>) -> Box<dyn OutputSink> {
    match output_file {
        Some(path) if !path.as_os_str().is_empty() => {
            let sink = FileCommandSink::new(path);
            debug!("writing outputs to {}", sink.path().display());
            Box::new(sink)
        }
        _ => {
            debug!("no output file; writing set-output commands to stdout");
            Box::new(CommandSink::new(std::io::stdout()))
        }
    }
}

/// Render an output value the way the runner toolkit does: strings as-is,
/// `null` as empty, anything else as compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
