//! Content Document
//!
//! The parsed JSON tree that drives every text and markup injection.
//! Created once per successful load, never mutated afterwards, and shared
//! read-only through cheap `ContentDocument` clones.
//!
//! - `path`: dot-notation resolution with a `None` sentinel
//! - `source`: where the document comes from (filesystem, HTTP, memory)

pub mod path;
pub mod source;

use std::sync::Arc;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::LoadError;

pub use path::resolve;
pub use source::{ContentSource, FsSource, StaticSource};
#[cfg(feature = "http")]
pub use source::HttpSource;

/// Immutable handle to a loaded content document.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentDocument(Arc<Value>);

impl ContentDocument {
    pub fn new(root: Value) -> Self {
        Self(Arc::new(root))
    }

    /// Parse a document from raw JSON text.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let root: Value = serde_json::from_str(text)?;
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Value {
        &self.0
    }

    /// Value at `path`, or `None` when any segment is absent.
    pub fn resolve(&self, path: &str) -> Option<&Value> {
        resolve(Some(self.root()), path)
    }
}

impl Serialize for ContentDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

// ============================================================================
// Value helpers
// ============================================================================

/// Extract a string field from a JSON object.
pub fn get_str<'a>(data: &'a Value, key: &str) -> Option<&'a str> {
    data.get(key).and_then(|v| v.as_str())
}

/// Extract an f64 field. Handles numeric values and string-encoded numbers.
pub fn get_f64(data: &Value, key: &str) -> Option<f64> {
    data.get(key).and_then(|v| {
        v.as_f64()
            .or_else(|| v.as_str().and_then(|s| s.trim().parse::<f64>().ok()))
    })
}

/// Array items of a value; empty for anything that is not an array.
pub fn items(value: &Value) -> &[Value] {
    value.as_array().map(Vec::as_slice).unwrap_or(&[])
}

/// Display string of a field, empty when the field is absent.
pub fn field(data: &Value, key: &str) -> String {
    data.get(key).map(display).unwrap_or_default()
}

/// Render a JSON value the way it reads as page text.
///
/// Integral floats drop their fraction (`100.0` -> `"100"`), arrays join
/// their items with commas, and `null`/objects render as nothing.
pub fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        Value::Array(arr) => arr.iter().map(display).collect::<Vec<_>>().join(","),
        Value::Null | Value::Object(_) => String::new(),
    }
}
