//! Project a record onto a set of dotted paths.

use crate::fields::{FieldPath, Record};
use serde_json::Value;

/// Written in place of any requested path the record does not have.
pub const INVALID_FIELD: &str = "invalid_field";

/// Build a fresh record holding exactly the requested paths.
///
/// Each path is read from `record` (or replaced by [`INVALID_FIELD`]) and
/// written back at the same position in the output. Paths sharing a prefix
/// merge into the same nested map.
pub fn project(record: &Record, paths: &[FieldPath]) -> Record {
    let mut out = Record::new();
    for path in paths {
        let value = lookup(record, path.segments())
            .cloned()
            .unwrap_or_else(|| Value::String(INVALID_FIELD.to_string()));
        assign(&mut out, path.segments(), value);
    }
    out
}

/// Walk `segments` through nested maps. Anything that is not a map along the
/// way ends the walk.
fn lookup<'a>(record: &'a Record, segments: &[String]) -> Option<&'a Value> {
    let (first, rest) = segments.split_first()?;
    let mut current = record.get(first)?;
    for segment in rest {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Nested assignment: create intermediate maps as needed and replace any
/// non-map that sits where a map is required.
fn assign(node: &mut Record, segments: &[String], value: Value) {
    match segments {
        [] => {}
        [last] => {
            node.insert(last.clone(), value);
        }
        [head, rest @ ..] => {
            let child = node
                .entry(head.clone())
                .or_insert_with(|| Value::Object(Record::new()));
            if let Value::Object(map) = child {
                assign(map, rest, value);
            } else {
                let mut map = Record::new();
                assign(&mut map, rest, value);
                *child = Value::Object(map);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    fn paths(raw: &[&str]) -> Vec<FieldPath> {
        raw.iter().map(|p| p.parse().unwrap()).collect()
    }

    #[test]
    fn missing_path_becomes_sentinel() {
        let source = record(json!({"profile": {"email": "a@b.com"}}));
        let out = project(&source, &paths(&["profile.email", "profile.phone"]));
        assert_eq!(
            Value::Object(out),
            json!({"profile": {"email": "a@b.com", "phone": "invalid_field"}})
        );
    }

    #[test]
    fn keeps_only_requested_paths() {
        let source = record(json!({
            "id": "U1",
            "name": "x",
            "profile": {"email": "x@y.com", "phone": "555"}
        }));
        let out = project(&source, &paths(&["id", "profile.email"]));
        assert_eq!(
            Value::Object(out),
            json!({"id": "U1", "profile": {"email": "x@y.com"}})
        );
    }

    #[test]
    fn whole_subtree_can_be_selected() {
        let source = record(json!({"profile": {"email": "x@y.com", "phone": "555"}}));
        let out = project(&source, &paths(&["profile"]));
        assert_eq!(
            Value::Object(out),
            json!({"profile": {"email": "x@y.com", "phone": "555"}})
        );
    }

    #[test]
    fn traversing_through_scalar_is_missing() {
        let source = record(json!({"id": "U1"}));
        let out = project(&source, &paths(&["id.length"]));
        assert_eq!(Value::Object(out), json!({"id": {"length": "invalid_field"}}));
    }

    #[test]
    fn null_is_a_real_value() {
        let source = record(json!({"tz": null}));
        let out = project(&source, &paths(&["tz"]));
        assert_eq!(Value::Object(out), json!({"tz": null}));
    }

    #[test]
    fn later_path_merges_into_or_replaces_earlier_value() {
        let source = record(json!({"profile": {"email": "x@y.com"}}));
        let out = project(&source, &paths(&["profile", "profile.email"]));
        assert_eq!(Value::Object(out), json!({"profile": {"email": "x@y.com"}}));

        let source = record(json!({"a": 1}));
        let out = project(&source, &paths(&["a", "a.b"]));
        assert_eq!(Value::Object(out), json!({"a": {"b": "invalid_field"}}));
    }

    #[test]
    fn order_follows_requested_paths() {
        let source = record(json!({"a": 1, "b": 2, "c": 3}));
        let out = project(&source, &paths(&["c", "a", "b"]));
        let keys: Vec<&str> = out.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn three_segment_paths_nest() {
        let source = record(json!({"profile": {"fields": {"title": "eng"}}}));
        let out = project(&source, &paths(&["profile.fields.title", "profile.fields.team"]));
        assert_eq!(
            Value::Object(out),
            json!({"profile": {"fields": {"title": "eng", "team": "invalid_field"}}})
        );
    }
}
