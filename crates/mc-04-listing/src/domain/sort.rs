//! # Explicit Sort
//!
//! The backend's response order is authoritative and is preserved as-is.
//! A `SortKey` re-orders client-side only when an operator explicitly asks
//! for it; nothing is ever sorted by default.

use serde_json::Value;

/// An explicitly requested sort over one top-level field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortKey {
    /// Field name in the raw item object.
    pub field: String,
    /// Sort direction.
    pub descending: bool,
}

impl SortKey {
    /// Ascending sort on a field.
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: false,
        }
    }

    /// Descending sort on a field.
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: true,
        }
    }

    /// Stable in-place sort of raw items by this key.
    ///
    /// Numbers compare numerically, everything else by its string form.
    /// Items missing the field keep their relative order at the end.
    pub fn apply(&self, items: &mut [Value]) {
        items.sort_by(|a, b| {
            let ord = match (a.get(&self.field), b.get(&self.field)) {
                (Some(x), Some(y)) => compare_values(x, y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            };
            if self.descending { ord.reverse() } else { ord }
        });
    }
}

fn compare_values(a: &Value, b: &Value) -> std::cmp::Ordering {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal),
        _ => value_string(a).cmp(&value_string(b)),
    }
}

fn value_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
