//! The lookup step: validate inputs, look the user up, project the requested
//! fields, flatten them and hand everything to the sink.

use crate::error::ActionError;
use crate::fields::{self, FlatEntry, Record};
use crate::inputs::Inputs;
use crate::sink::OutputSink;
use crate::slack::DirectoryLookup;

use serde_json::Value;
use tracing::{debug, info};

/// Key of the output holding the whole projected record.
pub const USER_OUTPUT: &str = "user";

/// Everything the step will emit, computed before anything is written.
#[derive(Debug, Clone, PartialEq)]
pub struct Outputs {
    pub entries: Vec<FlatEntry>,
    pub user: Record,
}

/// Look the user up and build the outputs. Nothing is emitted here.
pub async fn lookup_user(
    directory: &dyn DirectoryLookup,
    inputs: &Inputs,
) -> Result<Outputs, ActionError> {
    let email = inputs.email()?;

    let response = directory.lookup_by_email(email).await?;
    if !response.ok {
        debug!(
            "lookup failed: {}",
            response.error.as_deref().unwrap_or("unknown error")
        );
        return Err(ActionError::SlackApi {
            code: response.error,
        });
    }

    let paths = inputs.field_paths()?;
    debug!("projecting {} field path(s)", paths.len());

    let user = fields::project(&response.user, &paths);
    let entries = fields::flatten(&user);
    Ok(Outputs { entries, user })
}

/// Write every flat entry, then the full record under [`USER_OUTPUT`].
pub fn emit(outputs: &Outputs, sink: &mut dyn OutputSink) -> Result<(), ActionError> {
    for entry in &outputs.entries {
        sink.emit(&entry.key, &entry.value)?;
    }
    sink.emit(USER_OUTPUT, &Value::Object(outputs.user.clone()))?;
    debug!("emitted {} output(s)", outputs.entries.len() + 1);
    Ok(())
}

pub async fn run(
    directory: &dyn DirectoryLookup,
    inputs: &Inputs,
    sink: &mut dyn OutputSink,
) -> Result<(), ActionError> {
    let outputs = lookup_user(directory, inputs).await?;
    emit(&outputs, sink)?;
    info!("Success");
    Ok(())
}
