// ── Payload shape validation ──
//
// The content API is consumed by generated front ends, so the client
// does not trust the envelope blindly: every paginated body is checked
// against the expected shape before it is handed to the store layer.
// The result is tagged — either the typed payload or the list of field
// errors — and is only ever produced at the decode boundary.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::payload::{PageMeta, PaginatedPayload};

/// A single shape violation, anchored to the offending field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Tagged validation result: the typed value, or every shape violation
/// found. Never a panic, never a partial value.
#[derive(Debug)]
pub enum Validated<T> {
    Valid(T),
    Invalid(Vec<FieldError>),
}

impl<T> Validated<T> {
    pub fn into_result(self) -> Result<T, Vec<FieldError>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }
}

/// Validate a JSON body against the paginated envelope shape and decode
/// the items into `T`.
///
/// Checks are accumulated rather than short-circuited so one response
/// reports every violation at once. The meta fields must be non-negative
/// integers with `page` and `limit` strictly positive; items that fail
/// to decode are reported by index.
pub fn paginated<T: DeserializeOwned>(body: &Value) -> Validated<PaginatedPayload<T>> {
    let Some(obj) = body.as_object() else {
        return Validated::Invalid(vec![FieldError::new("$", "expected a JSON object")]);
    };

    let mut errors = Vec::new();

    let raw_items = match obj.get("data") {
        Some(Value::Array(items)) => Some(items),
        Some(_) => {
            errors.push(FieldError::new("data", "expected an array"));
            None
        }
        None => {
            errors.push(FieldError::new("data", "missing field"));
            None
        }
    };

    let meta = require_meta(obj, &mut errors);

    let mut data = Vec::new();
    if let Some(items) = raw_items {
        for (index, item) in items.iter().enumerate() {
            match serde_json::from_value::<T>(item.clone()) {
                Ok(value) => data.push(value),
                Err(e) => errors.push(FieldError::new(format!("data[{index}]"), e.to_string())),
            }
        }
    }

    match (errors.is_empty(), meta) {
        (true, Some(meta)) => Validated::Valid(PaginatedPayload { data, meta }),
        _ => Validated::Invalid(errors),
    }
}

fn require_meta(obj: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<PageMeta> {
    let Some(meta) = obj.get("meta") else {
        errors.push(FieldError::new("meta", "missing field"));
        return None;
    };
    let Some(meta) = meta.as_object() else {
        errors.push(FieldError::new("meta", "expected an object"));
        return None;
    };

    let total_count = uint_field(meta, "total_count", errors);
    let total_pages = uint_field(meta, "total_pages", errors);
    let page = positive_u32_field(meta, "page", errors);
    let limit = positive_u32_field(meta, "limit", errors);

    Some(PageMeta {
        total_count: total_count?,
        page: page?,
        limit: limit?,
        total_pages: total_pages?,
    })
}

fn uint_field(meta: &Map<String, Value>, name: &str, errors: &mut Vec<FieldError>) -> Option<u64> {
    match meta.get(name) {
        Some(value) => match value.as_u64() {
            Some(n) => Some(n),
            None => {
                errors.push(FieldError::new(
                    format!("meta.{name}"),
                    "expected a non-negative integer",
                ));
                None
            }
        },
        None => {
            errors.push(FieldError::new(format!("meta.{name}"), "missing field"));
            None
        }
    }
}

fn positive_u32_field(
    meta: &Map<String, Value>,
    name: &str,
    errors: &mut Vec<FieldError>,
) -> Option<u32> {
    let n = uint_field(meta, name, errors)?;
    match u32::try_from(n) {
        Ok(n) if n > 0 => Some(n),
        _ => {
            errors.push(FieldError::new(
                format!("meta.{name}"),
                "expected a positive integer",
            ));
            None
        }
    }
}
