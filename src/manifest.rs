//! Package-manifest normalization.
//!
//! After the package manager's init command produces a manifest, a fixed edit
//! pipeline strips the fields botsmith does not want in a fresh project and
//! pins the ones it does. The transformer is pure (text in, text out) so it is
//! testable without touching the filesystem, and atomic: a manifest that fails
//! to parse aborts the pipeline before any edit is applied.

use indexmap::IndexMap;
use serde_json::Value;

use crate::constants::{ENTRY_POINT, INITIAL_VERSION};
use crate::error::{Error, Result};

/// A single field-level edit of the manifest document.
#[derive(Debug, Clone)]
pub enum Edit {
    /// Creates the field if missing, overwrites its value otherwise.
    Set { field: String, value: Value },
    /// Removes the field; silently a no-op when the field is absent.
    Delete { field: String },
}

impl Edit {
    pub fn set(field: impl Into<String>, value: Value) -> Self {
        Edit::Set { field: field.into(), value }
    }

    pub fn delete(field: impl Into<String>) -> Self {
        Edit::Delete { field: field.into() }
    }
}

/// The fixed pipeline applied to every freshly initialized manifest.
///
/// Order matters: each edit sees the output of the previous one.
pub fn normalization_pipeline() -> Vec<Edit> {
    vec![
        Edit::set("version", Value::String(INITIAL_VERSION.to_string())),
        Edit::delete("description"),
        Edit::delete("keywords"),
        Edit::delete("license"),
        Edit::set("main", Value::String(ENTRY_POINT.to_string())),
        Edit::delete("author"),
        Edit::delete("scripts"),
    ]
}

/// Applies `pipeline` to the manifest text, strictly in order.
///
/// The document must be a JSON object; anything else fails with
/// [`Error::MalformedManifest`] before any edit runs. Insertion order of the
/// untouched fields is preserved in the output for readability.
pub fn apply(document: &str, pipeline: &[Edit]) -> Result<String> {
    let mut fields: IndexMap<String, Value> = serde_json::from_str(document)
        .map_err(|e| Error::MalformedManifest(e.to_string()))?;

    for edit in pipeline {
        match edit {
            Edit::Set { field, value } => {
                fields.insert(field.clone(), value.clone());
            }
            Edit::Delete { field } => {
                // shift_remove keeps the remaining fields in document order.
                fields.shift_remove(field);
            }
        }
    }

    serde_json::to_string_pretty(&fields).map_err(|e| Error::MalformedManifest(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const INIT_MANIFEST: &str = r#"{"name":"bot","version":"1.0.0","description":"x","keywords":[],"license":"MIT","author":"a","scripts":{}}"#;

    fn parse(document: &str) -> IndexMap<String, Value> {
        serde_json::from_str(document).unwrap()
    }

    #[test]
    fn pipeline_normalizes_a_fresh_manifest() {
        let output = apply(INIT_MANIFEST, &normalization_pipeline()).unwrap();
        let fields = parse(&output);

        assert_eq!(fields.len(), 3);
        assert_eq!(fields["name"], json!("bot"));
        assert_eq!(fields["version"], json!("0.1.0"));
        assert_eq!(fields["main"], json!("src/index.js"));
    }

    #[test]
    fn apply_is_deterministic() {
        let pipeline = normalization_pipeline();
        let first = apply(INIT_MANIFEST, &pipeline).unwrap();
        let second = apply(INIT_MANIFEST, &pipeline).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn delete_on_missing_field_is_a_noop() {
        let document = r#"{"name":"bot"}"#;
        let untouched = apply(document, &[]).unwrap();
        let deleted = apply(document, &[Edit::delete("nonexistent")]).unwrap();
        assert_eq!(untouched, deleted);
    }

    #[test]
    fn set_creates_missing_field_and_overwrites_existing() {
        let pipeline = vec![
            Edit::set("version", json!("0.1.0")),
            Edit::set("main", json!("src/index.js")),
        ];
        let fields = parse(&apply(r#"{"version":"9.9.9"}"#, &pipeline).unwrap());
        assert_eq!(fields["version"], json!("0.1.0"));
        assert_eq!(fields["main"], json!("src/index.js"));
    }

    #[test]
    fn set_then_delete_leaves_field_absent() {
        let pipeline =
            vec![Edit::set("temp", json!("value")), Edit::delete("temp")];
        let fields = parse(&apply(r#"{"name":"bot"}"#, &pipeline).unwrap());
        assert!(!fields.contains_key("temp"));
        assert_eq!(fields["name"], json!("bot"));
    }

    #[test]
    fn malformed_document_aborts_before_any_edit() {
        let err = apply("not json at all", &normalization_pipeline()).unwrap_err();
        assert!(matches!(err, Error::MalformedManifest(_)));
    }

    #[test]
    fn non_object_document_is_malformed() {
        let err = apply(r#"["an","array"]"#, &normalization_pipeline()).unwrap_err();
        assert!(matches!(err, Error::MalformedManifest(_)));
    }

    #[test]
    fn untouched_field_order_is_preserved() {
        let document = r#"{"zeta":"1","name":"bot","alpha":"2"}"#;
        let output = apply(document, &[Edit::delete("name")]).unwrap();
        let keys: Vec<_> = parse(&output).keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }
}
