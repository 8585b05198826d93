//! Cell values and row identifiers

use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ColumnType;
use crate::error::ValueError;

/// Identifier of a row, unique within the row set.
///
/// Hosts key their records either by integer or by string; both are kept
/// as-is so callbacks hand back exactly what the host supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Int(i64),
    Str(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Int(v) => write!(f, "{}", v),
            RowId::Str(v) => f.write_str(v),
        }
    }
}

impl From<i64> for RowId {
    fn from(v: i64) -> Self {
        RowId::Int(v)
    }
}

impl From<i32> for RowId {
    fn from(v: i32) -> Self {
        RowId::Int(v as i64)
    }
}

impl From<&str> for RowId {
    fn from(v: &str) -> Self {
        RowId::Str(v.to_string())
    }
}

impl From<String> for RowId {
    fn from(v: String) -> Self {
        RowId::Str(v)
    }
}

/// A dynamic value held by one cell.
///
/// # Type Mapping
///
/// | Column type | Variant |
/// |-------------|---------|
/// | text, select | `Text` |
/// | number, rating | `Number` |
/// | boolean, checkbox, toggle | `Bool` |
/// | date | `Date` |
/// | multi-select | `List` |
/// | (empty) | `Null` |
///
/// A missing key in a row and `Null` both mean "absent".
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Absent value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Point in time.
    Date(DateTime<Utc>),
    /// String value.
    Text(String),
    /// Ordered list of strings (multi-select).
    List(Vec<String>),
}

impl CellValue {
    /// Returns `true` if this value is absent.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Bool(_) => "bool",
            CellValue::Number(_) => "number",
            CellValue::Date(_) => "date",
            CellValue::Text(_) => "text",
            CellValue::List(_) => "list",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            CellValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            CellValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Coerce a raw JSON value into a cell value for the given column type.
    ///
    /// `null` is accepted for every type. Dates accept RFC 3339 strings,
    /// plain `YYYY-MM-DD` strings (midnight UTC) and millisecond timestamps.
    pub fn from_json(raw: &serde_json::Value, column_type: ColumnType) -> Result<Self, ValueError> {
        use serde_json::Value as Json;

        if raw.is_null() {
            return Ok(CellValue::Null);
        }

        let mismatch = || ValueError::type_mismatch(column_type, json_type_name(raw));

        match column_type {
            ColumnType::Text | ColumnType::Select => match raw {
                Json::String(s) => Ok(CellValue::Text(s.clone())),
                _ => Err(mismatch()),
            },
            ColumnType::Number | ColumnType::Rating => {
                raw.as_f64().map(CellValue::Number).ok_or_else(mismatch)
            }
            ColumnType::Boolean | ColumnType::Checkbox | ColumnType::Toggle => {
                raw.as_bool().map(CellValue::Bool).ok_or_else(mismatch)
            }
            ColumnType::Date => match raw {
                Json::String(s) => parse_date(s).map(CellValue::Date),
                Json::Number(n) => n
                    .as_i64()
                    .and_then(DateTime::<Utc>::from_timestamp_millis)
                    .map(CellValue::Date)
                    .ok_or_else(mismatch),
                _ => Err(mismatch()),
            },
            ColumnType::MultiSelect => string_list(raw).ok_or_else(mismatch),
            ColumnType::Custom => match raw {
                Json::Bool(b) => Ok(CellValue::Bool(*b)),
                Json::Number(n) => n.as_f64().map(CellValue::Number).ok_or_else(mismatch),
                Json::String(s) => Ok(CellValue::Text(s.clone())),
                Json::Array(_) => string_list(raw).ok_or_else(mismatch),
                _ => Err(mismatch()),
            },
        }
    }
}

fn string_list(raw: &serde_json::Value) -> Option<CellValue> {
    raw.as_array()?
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()
        .map(CellValue::List)
}

fn parse_date(s: &str) -> Result<DateTime<Utc>, ValueError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ValueError::InvalidDate(s.to_string()))
}

fn json_type_name(raw: &serde_json::Value) -> &'static str {
    match raw {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Number(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Number(v as f64)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Number(v as f64)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<Vec<String>> for CellValue {
    fn from(v: Vec<String>) -> Self {
        CellValue::List(v)
    }
}

impl From<Vec<&str>> for CellValue {
    fn from(v: Vec<&str>) -> Self {
        CellValue::List(v.into_iter().map(str::to_string).collect())
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(v: DateTime<Utc>) -> Self {
        CellValue::Date(v)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(CellValue::Null)
    }
}
