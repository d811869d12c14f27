//! Workflow commands understood by the CI runner (`::name key=value::message`).

use std::io::{self, Write};

/// Platform line terminator used for every command and file line.
pub const EOL: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Escape a command message.
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a command property value; stricter than [`escape_data`].
pub fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

/// Write a single workflow command line.
pub fn issue_command<W: Write>(
    out: &mut W,
    command: &str,
    properties: &[(&str, &str)],
    message: &str,
) -> io::Result<()> {
    let mut line = format!("::{}", command);
    for (i, (key, value)) in properties.iter().enumerate() {
        line.push(if i == 0 { ' ' } else { ',' });
        line.push_str(key);
        line.push('=');
        line.push_str(&escape_property(value));
    }
    line.push_str("::");
    line.push_str(&escape_data(message));
    line.push_str(EOL);
    out.write_all(line.as_bytes())?;
    out.flush()
}

/// Mark the run as failed with `message` as the annotation.
pub fn set_failed(message: &str) {
    if let Err(err) = issue_command(&mut io::stdout().lock(), "error", &[], message) {
        tracing::error!("could not write failure annotation: {}", err);
    }
}

/// Emit a warning annotation.
pub fn warning(message: &str) {
    if let Err(err) = issue_command(&mut io::stdout().lock(), "warning", &[], message) {
        tracing::warn!("could not write warning annotation: {}", err);
    }
}
