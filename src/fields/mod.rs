//! Field projection: pick dotted paths out of a user record and flatten them
//! into key/value outputs.
//!
//! Records are `serde_json` maps with insertion order preserved, so output
//! order follows the order the paths were requested in.

pub mod flatten;
pub mod path;
pub mod project;

pub use flatten::{FlatEntry, flatten};
pub use path::FieldPath;
pub use project::project;

/// A (possibly nested) string-keyed record.
pub type Record = serde_json::Map<String, serde_json::Value>;
