//! Values accepted for extra query parameters.

use serde::Serialize;
use std::fmt;

/// A scalar query parameter value.
///
/// Rendering into a query string follows form-encoding conventions:
/// booleans become `1`/`0` and [`QueryValue::Null`] is left out of the
/// query string entirely (it still appears in records).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl QueryValue {
    /// Returns the string written into the query string, or `None` for null.
    pub fn to_query_string(&self) -> Option<String> {
        match self {
            QueryValue::Text(s) => Some(s.clone()),
            QueryValue::Integer(i) => Some(i.to_string()),
            QueryValue::Float(f) => Some(f.to_string()),
            QueryValue::Bool(true) => Some("1".to_string()),
            QueryValue::Bool(false) => Some("0".to_string()),
            QueryValue::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, QueryValue::Null)
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_query_string().as_deref().unwrap_or(""))
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::Text(value.clone())
    }
}

macro_rules! integer_query_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for QueryValue {
                fn from(value: $ty) -> Self {
                    QueryValue::Integer(i64::from(value))
                }
            }
        )*
    };
}

integer_query_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => QueryValue::Integer(v),
            Err(_) => QueryValue::Text(value.to_string()),
        }
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(QueryValue::Null, Into::into)
    }
}
