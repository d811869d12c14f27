//! The two action inputs and their required-value checks.

use crate::error::ActionError;
use crate::fields::FieldPath;

/// Raw action inputs, trimmed the way the runner trims `with:` values.
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    email: String,
    fields: String,
}

impl Inputs {
    pub fn new(email: impl Into<String>, fields: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            fields: fields.into().trim().to_string(),
        }
    }

    /// The email to look up; blank is a validation error.
    pub fn email(&self) -> Result<&str, ActionError> {
        if self.email.is_empty() {
            return Err(ActionError::MissingEmail);
        }
        Ok(&self.email)
    }

    /// Parse the comma-separated `fields` input into paths.
    ///
    /// Items are trimmed and blank items skipped; a list with nothing left is
    /// the same error as an empty input.
    pub fn field_paths(&self) -> Result<Vec<FieldPath>, ActionError> {
        let paths = self
            .fields
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::parse::<FieldPath>)
            .collect::<Result<Vec<_>, _>>()?;

        if paths.is_empty() {
            return Err(ActionError::MissingFields);
        }
        Ok(paths)
    }
}
