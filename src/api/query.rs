//! Field-path projection over API responses.

use crate::errors::Result;
use serde_json::{Deserializer, Value};

/// A dotted path into a JSON object, e.g. `owner.login`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<&'static str>,
}

impl FieldPath {
    pub fn new(path: &'static str) -> Self {
        Self {
            segments: path.split('.').filter(|s| !s.is_empty()).collect(),
        }
    }

    pub fn select<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(value, |current, segment| current.get(*segment))
    }

    /// The selected value as text; missing and null project to "".
    pub fn text(&self, value: &Value) -> String {
        self.select(value).map(scalar_text).unwrap_or_default()
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Decode a response body into its items.
///
/// Paginated responses are a sequence of JSON documents, one per page;
/// top-level arrays are flattened so every page contributes its elements.
/// An empty body yields no items.
pub fn items(body: &[u8]) -> Result<Vec<Value>> {
    let mut items = Vec::new();
    for document in Deserializer::from_slice(body).into_iter::<Value>() {
        match document? {
            Value::Array(elements) => items.extend(elements),
            other => items.push(other),
        }
    }
    Ok(items)
}

/// Decode a body that must hold exactly one document.
pub fn single(body: &[u8]) -> Result<Option<Value>> {
    let mut documents = Deserializer::from_slice(body).into_iter::<Value>();
    match documents.next() {
        Some(document) => Ok(Some(document?)),
        None => Ok(None),
    }
}

/// Project every item onto one row of text fields.
pub fn project(items: &[Value], paths: &[FieldPath]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|item| paths.iter().map(|path| path.text(item)).collect())
        .collect()
}
