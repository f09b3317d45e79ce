//! Query parameter encoding for filter records.
//!
//! # Design
//! Every resource filter implements [`QueryFilter`] through the
//! `query_fields!` macro, which produces a table of
//! `(wire name, FieldValue)` entries in field declaration order. [`encode`]
//! walks that table once and emits a [`Param`] for each entry that is not at
//! its zero value, so no per-resource encoding code exists anywhere. The
//! zero values are `0` for integers, `""` for strings, and `None` for
//! timestamps.

use chrono::{DateTime, Utc};

/// One key/value unit of an HTTP query string.
///
/// Keys are the wire attribute names shared between query parameters and
/// JSON response fields, so they are always static.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub key: &'static str,
    pub value: String,
}

impl Param {
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// A single filter-field value, as carried in a [`QueryFilter`] table entry.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Str(String),
    Time(Option<DateTime<Utc>>),
}

impl FieldValue {
    /// Whether the field is at its zero value and must be skipped.
    fn is_unset(&self) -> bool {
        match self {
            FieldValue::Int(n) => *n == 0,
            FieldValue::Str(s) => s.is_empty(),
            FieldValue::Time(t) => t.is_none(),
        }
    }

    /// String-encode a set value for the wire.
    fn render(&self) -> String {
        match self {
            FieldValue::Int(n) => n.to_string(),
            FieldValue::Str(s) => s.clone(),
            FieldValue::Time(Some(t)) => format_timestamp(*t),
            // is_unset() filters None out before render() is reached.
            FieldValue::Time(None) => String::new(),
        }
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Int(i64::from(n))
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Int(i64::from(n))
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Str(s)
    }
}

impl From<Option<DateTime<Utc>>> for FieldValue {
    fn from(t: Option<DateTime<Utc>>) -> Self {
        FieldValue::Time(t)
    }
}

/// A filter record that can describe its fields as a wire-name/value table.
///
/// Entries appear in field declaration order; [`encode`] relies on that
/// order being stable for reproducible request construction.
pub trait QueryFilter {
    fn fields(&self) -> Vec<(&'static str, FieldValue)>;
}

/// Implements [`QueryFilter`] for a filter struct from a `field => "wire_name"`
/// table.
macro_rules! query_fields {
    ($ty:ty { $($field:ident => $key:literal),+ $(,)? }) => {
        impl $crate::query::QueryFilter for $ty {
            fn fields(&self) -> Vec<(&'static str, $crate::query::FieldValue)> {
                vec![$(($key, $crate::query::FieldValue::from(self.$field.clone()))),+]
            }
        }
    };
}
pub(crate) use query_fields;

/// Convert a filter record into parameter pairs, skipping unset fields.
///
/// Pure and total: a filter with every field at its zero value yields an
/// empty sequence.
pub fn encode(filter: &impl QueryFilter) -> Vec<Param> {
    filter
        .fields()
        .into_iter()
        .filter(|(_, value)| !value.is_unset())
        .map(|(key, value)| Param::new(key, value.render()))
        .collect()
}

/// The latest-session sentinel pairs, in fixed order: `meeting_key` then
/// `session_key`, both valued `"latest"`. The OpenF1 API resolves them to
/// whatever meeting/session is live or most recently completed.
pub fn latest_session() -> [Param; 2] {
    [
        Param::new("meeting_key", "latest"),
        Param::new("session_key", "latest"),
    ]
}

/// Encode a timestamp for the wire: RFC 3339, UTC-normalized, second
/// precision (`YYYY-MM-DDTHH:MM:SSZ`).
fn format_timestamp(t: DateTime<Utc>) -> String {
    t.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
