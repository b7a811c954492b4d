//! Dependency payload (deps.json) as rendered by the hub server.
//!
//! JSON shape, either a bare list or the version detail object:
//! {
//!   "dependencies": [
//!     {
//!       "parent": {
//!         "hub_id": "8f1c...",       // namespace id
//!         "hub_name": "sales",       // shown when hubs differ
//!         "dataset_id": "2b7e...",
//!         "dataset_name": "orders",
//!         "version": 3,              // integer or string
//!         "key": "8f1c...:2b7e...:3", // legacy, ignored
//!         "is_same_hub": true,
//!         "is_selected": false
//!       },
//!       "child": { ... }
//!     },
//!     ...
//!   ]
//! }
//!
//! Records are walked as JSON values instead of derived structs so that every
//! missing or mistyped field is reported as a ValidationError naming the
//! record, the side and the field, not as a generic serde error.

use crate::Result;
use crate::diagnostics;
use crate::error::{Side, ValidationError};
use crate::spec::{DependencyEdge, Endpoint};

use anyhow::Context;
use serde_json::{Map, Value};
use std::fs;

/// Dependency records in payload order, not yet validated.
#[derive(Debug, Clone, PartialEq)]
pub struct DepsSpec {
    records: Vec<Value>,
}

impl DepsSpec {
    /// Accept a bare list of records, or an object whose `dependencies` key
    /// holds that list. Anything else (including a misspelled key) is rejected.
    pub fn from_value(payload: Value) -> std::result::Result<Self, ValidationError> {
        let records = match payload {
            Value::Array(records) => records,
            Value::Object(mut fields) => match fields.remove("dependencies") {
                Some(Value::Array(records)) => records,
                _ => return Err(ValidationError::UnexpectedPayload),
            },
            _ => return Err(ValidationError::UnexpectedPayload),
        };
        Ok(Self { records })
    }

    /// Validate every record in input order, stopping at the first bad one.
    pub fn validate_and_build(
        &self,
    ) -> std::result::Result<Vec<DependencyEdge>, ValidationError> {
        self.records
            .iter()
            .enumerate()
            .map(|(idx, raw)| validate_record(raw, idx))
            .collect()
    }
}

fn validate_record(
    raw: &Value,
    edge: usize,
) -> std::result::Result<DependencyEdge, ValidationError> {
    let fields = raw
        .as_object()
        .ok_or(ValidationError::MalformedRecord { edge })?;
    Ok(DependencyEdge {
        parent: validate_endpoint(fields.get("parent"), edge, Side::Parent)?,
        child: validate_endpoint(fields.get("child"), edge, Side::Child)?,
    })
}

fn validate_endpoint(
    raw: Option<&Value>,
    edge: usize,
    side: Side,
) -> std::result::Result<Endpoint, ValidationError> {
    let fields = match raw {
        None | Some(Value::Null) => return Err(ValidationError::MissingEndpoint { edge, side }),
        Some(Value::Object(fields)) => fields,
        Some(_) => return Err(ValidationError::MalformedEndpoint { edge, side }),
    };
    let reader = EndpointReader { fields, edge, side };

    Ok(Endpoint {
        hub_id: reader.text("hub_id")?,
        hub_name: reader.text("hub_name")?,
        dataset_id: reader.text("dataset_id")?,
        dataset_name: reader.text("dataset_name")?,
        version: reader.version()?,
        is_selected: reader.flag("is_selected")?,
        is_same_hub: reader.flag("is_same_hub")?,
    })
}

/// Typed field access on one endpoint object. Unknown keys (e.g. the legacy
/// `key`) are ignored.
struct EndpointReader<'a> {
    fields: &'a Map<String, Value>,
    edge: usize,
    side: Side,
}

impl EndpointReader<'_> {
    fn missing(&self, field: &'static str) -> ValidationError {
        ValidationError::MissingField {
            edge: self.edge,
            side: self.side,
            field,
        }
    }

    fn invalid(&self, field: &'static str, expected: &'static str) -> ValidationError {
        ValidationError::InvalidField {
            edge: self.edge,
            side: self.side,
            field,
            expected,
        }
    }

    /// Required, trimmed, non-blank string.
    fn text(&self, field: &'static str) -> std::result::Result<String, ValidationError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Err(self.missing(field)),
            Some(Value::String(s)) => non_blank(s).ok_or_else(|| self.missing(field)),
            Some(_) => Err(self.invalid(field, "a string")),
        }
    }

    /// Versions are integers server-side; hand-written payloads may quote them.
    fn version(&self) -> std::result::Result<String, ValidationError> {
        const EXPECTED: &str = "a non-negative integer or a string";
        match self.fields.get("version") {
            None | Some(Value::Null) => Err(self.missing("version")),
            Some(Value::Number(n)) => n
                .as_u64()
                .map(|v| v.to_string())
                .ok_or_else(|| self.invalid("version", EXPECTED)),
            Some(Value::String(s)) => non_blank(s).ok_or_else(|| self.missing("version")),
            Some(_) => Err(self.invalid("version", EXPECTED)),
        }
    }

    /// Optional boolean, `false` when absent.
    fn flag(&self, field: &'static str) -> std::result::Result<bool, ValidationError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(self.invalid(field, "a boolean")),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Read, parse and validate a deps.json file.
pub fn load_deps_file(path: &str) -> Result<Vec<DependencyEdge>> {
    let text = fs::read_to_string(path)
        .with_context(|| diagnostics::error_message(format!("read deps file {}", path)))?;
    let payload: Value = serde_json::from_str(&text)
        .with_context(|| diagnostics::error_message(format!("parse deps file {}", path)))?;
    let edges = DepsSpec::from_value(payload)
        .and_then(|spec| spec.validate_and_build())
        .with_context(|| diagnostics::error_message(format!("validate deps file {}", path)))?;
    Ok(edges)
}
