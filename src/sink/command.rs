//! Legacy `::set-output` sink.

use crate::diagnostics::{self, EOL};
use crate::sink::{OutputSink, SinkError, render_value};
use serde_json::Value;
use std::io::Write;

pub struct CommandSink<W: Write> {
    out: W,
}

impl<W: Write> CommandSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> OutputSink for CommandSink<W> {
    fn emit(&mut self, key: &str, value: &Value) -> Result<(), SinkError> {
        // The runner expects the command on a fresh line.
        self.out.write_all(EOL.as_bytes())?;
        diagnostics::issue_command(
            &mut self.out,
            "set-output",
            &[("name", key)],
            &render_value(value),
        )?;
        Ok(())
    }
}
