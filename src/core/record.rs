//! Column values of a typed row, in table order.

use rusqlite::types::Value;

/// A row that can be shown as a plain tuple of its column values.
pub trait Record {
    /// Column values in the order the table (or projection) declares them.
    fn values(&self) -> Vec<Value>;
}

pub(crate) fn opt_text(s: &Option<String>) -> Value {
    s.clone().map_or(Value::Null, Value::Text)
}

pub(crate) fn opt_int(n: Option<i64>) -> Value {
    n.map_or(Value::Null, Value::Integer)
}

pub(crate) fn opt_bool(b: Option<bool>) -> Value {
    // stored as 0/1
    opt_int(b.map(i64::from))
}
