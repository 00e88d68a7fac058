//! JSON-like value shapes: primitives, complex values and loose records.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Number, Value};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::xor::TypeXor;

/// Largest integer an `f64` holds exactly (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A record of string keys. Values default to [`Complex`]; `T` replaces it.
pub type Document<T = Complex> = BTreeMap<String, T>;

/// A record whose values are either [`Complex`] or an extra type `T`.
pub type ExtendedDocument<T> = Document<TypeXor<Complex, T>>;

/// Scalar values accepted as array elements.
///
/// Serializing a non-finite number fails: JSON has no representation for it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub enum Primitive {
    String(String),
    Number(f64),
    /// Unique named token, serialized as its description
    Symbol(String),
    Bool(bool),
}

/// Non-null values: primitives, arrays of primitives, nested records and dates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub enum Complex {
    String(String),
    Number(f64),
    Symbol(String),
    Bool(bool),
    Array(Vec<Primitive>),
    Record(Document),
    Date(DateTime<Utc>),
}

/// Every literal a truthiness test accepts, falsy ones included.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FalsyOrLiteral {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Symbol(String),
}

/// A JSON given either already parsed or as raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonOrString {
    Document(Document),
    Documents(Vec<Document>),
    String(String),
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Integral numbers are emitted as integers; `-0.0` keeps its sign.
fn number_to_value(n: f64) -> DomainResult<Value> {
    let negative_zero = n == 0.0 && n.is_sign_negative();
    if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER && !negative_zero {
        Ok(Value::from(n as i64))
    } else {
        Number::from_f64(n)
            .map(Value::Number)
            .ok_or_else(|| DomainError::InvalidNumber(n.to_string()))
    }
}

fn number_from_json(n: &Number) -> DomainResult<f64> {
    n.as_f64()
        .ok_or_else(|| DomainError::InvalidNumber(n.to_string()))
}

// ---------------------------------------------------------------------------
// Primitive
// ---------------------------------------------------------------------------

impl Primitive {
    pub fn is_falsy(&self) -> bool {
        match self {
            Primitive::String(s) => s.is_empty(),
            Primitive::Number(n) => *n == 0.0 || n.is_nan(),
            Primitive::Bool(b) => !b,
            Primitive::Symbol(_) => false,
        }
    }
}

impl TryFrom<Value> for Primitive {
    type Error = DomainError;

    fn try_from(value: Value) -> DomainResult<Self> {
        match value {
            Value::Bool(b) => Ok(Primitive::Bool(b)),
            Value::Number(n) => Ok(Primitive::Number(number_from_json(&n)?)),
            Value::String(s) => Ok(Primitive::String(s)),
            Value::Null => Err(DomainError::UnsupportedNull),
            other => Err(DomainError::NotPrimitive(kind_of(&other))),
        }
    }
}

impl TryFrom<&Primitive> for Value {
    type Error = DomainError;

    fn try_from(p: &Primitive) -> DomainResult<Self> {
        match p {
            Primitive::String(s) | Primitive::Symbol(s) => Ok(Value::String(s.clone())),
            Primitive::Number(n) => number_to_value(*n),
            Primitive::Bool(b) => Ok(Value::Bool(*b)),
        }
    }
}

impl Serialize for Primitive {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Value::try_from(self)
            .map_err(<S::Error as serde::ser::Error>::custom)?
            .serialize(serializer)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::String(s) => write!(f, "{}", s),
            Primitive::Number(n) => write!(f, "{}", n),
            Primitive::Symbol(s) => write!(f, "Symbol({})", s),
            Primitive::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Primitive {
    fn from(s: &str) -> Self {
        Primitive::String(s.to_string())
    }
}

impl From<String> for Primitive {
    fn from(s: String) -> Self {
        Primitive::String(s)
    }
}

impl From<f64> for Primitive {
    fn from(n: f64) -> Self {
        Primitive::Number(n)
    }
}

impl From<i32> for Primitive {
    fn from(n: i32) -> Self {
        Primitive::Number(f64::from(n))
    }
}

impl From<bool> for Primitive {
    fn from(b: bool) -> Self {
        Primitive::Bool(b)
    }
}

// ---------------------------------------------------------------------------
// Complex
// ---------------------------------------------------------------------------

impl Complex {
    /// Truthiness test: arrays, records, dates and symbols are always truthy.
    pub fn is_falsy(&self) -> bool {
        match self {
            Complex::String(s) => s.is_empty(),
            Complex::Number(n) => *n == 0.0 || n.is_nan(),
            Complex::Bool(b) => !b,
            Complex::Symbol(_) | Complex::Array(_) | Complex::Record(_) | Complex::Date(_) => {
                false
            }
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Complex::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Complex::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Document> {
        match self {
            Complex::Record(doc) => Some(doc),
            _ => None,
        }
    }

    /// Date value, parsing RFC 3339 strings on demand.
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Complex::Date(d) => Some(*d),
            Complex::String(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|d| d.with_timezone(&Utc)),
            _ => None,
        }
    }
}

impl TryFrom<Value> for Complex {
    type Error = DomainError;

    fn try_from(value: Value) -> DomainResult<Self> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(Primitive::try_from)
                .collect::<DomainResult<Vec<_>>>()
                .map(Complex::Array),
            Value::Object(map) => document_from_map(map).map(Complex::Record),
            other => Primitive::try_from(other).map(Complex::from),
        }
    }
}

impl TryFrom<&Complex> for Value {
    type Error = DomainError;

    fn try_from(c: &Complex) -> DomainResult<Self> {
        match c {
            Complex::String(s) | Complex::Symbol(s) => Ok(Value::String(s.clone())),
            Complex::Number(n) => number_to_value(*n),
            Complex::Bool(b) => Ok(Value::Bool(*b)),
            Complex::Array(items) => items
                .iter()
                .map(Value::try_from)
                .collect::<DomainResult<Vec<_>>>()
                .map(Value::Array),
            Complex::Record(doc) => document_to_map(doc).map(Value::Object),
            Complex::Date(d) => Ok(Value::String(d.to_rfc3339())),
        }
    }
}

impl Serialize for Complex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Value::try_from(self)
            .map_err(<S::Error as serde::ser::Error>::custom)?
            .serialize(serializer)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complex::String(s) => write!(f, "{}", s),
            Complex::Number(n) => write!(f, "{}", n),
            Complex::Symbol(s) => write!(f, "Symbol({})", s),
            Complex::Bool(b) => write!(f, "{}", b),
            Complex::Date(d) => write!(f, "{}", d.to_rfc3339()),
            Complex::Array(_) | Complex::Record(_) => match Value::try_from(self) {
                Ok(value) => write!(f, "{}", value),
                Err(_) => write!(f, "{:?}", self),
            },
        }
    }
}

impl From<Primitive> for Complex {
    fn from(p: Primitive) -> Self {
        match p {
            Primitive::String(s) => Complex::String(s),
            Primitive::Number(n) => Complex::Number(n),
            Primitive::Symbol(s) => Complex::Symbol(s),
            Primitive::Bool(b) => Complex::Bool(b),
        }
    }
}

impl From<&str> for Complex {
    fn from(s: &str) -> Self {
        Complex::String(s.to_string())
    }
}

impl From<String> for Complex {
    fn from(s: String) -> Self {
        Complex::String(s)
    }
}

impl From<f64> for Complex {
    fn from(n: f64) -> Self {
        Complex::Number(n)
    }
}

impl From<i32> for Complex {
    fn from(n: i32) -> Self {
        Complex::Number(f64::from(n))
    }
}

impl From<bool> for Complex {
    fn from(b: bool) -> Self {
        Complex::Bool(b)
    }
}

impl From<Vec<Primitive>> for Complex {
    fn from(items: Vec<Primitive>) -> Self {
        Complex::Array(items)
    }
}

impl From<Document> for Complex {
    fn from(doc: Document) -> Self {
        Complex::Record(doc)
    }
}

impl From<DateTime<Utc>> for Complex {
    fn from(d: DateTime<Utc>) -> Self {
        Complex::Date(d)
    }
}

// ---------------------------------------------------------------------------
// FalsyOrLiteral
// ---------------------------------------------------------------------------

impl FalsyOrLiteral {
    /// Truthiness test: undefined, null, `false`, `0`, `NaN` and `""` are falsy.
    pub fn is_falsy(&self) -> bool {
        match self {
            FalsyOrLiteral::Undefined | FalsyOrLiteral::Null => true,
            FalsyOrLiteral::Bool(b) => !b,
            FalsyOrLiteral::Number(n) => *n == 0.0 || n.is_nan(),
            FalsyOrLiteral::String(s) => s.is_empty(),
            FalsyOrLiteral::Symbol(_) => false,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FalsyOrLiteral::Undefined => "undefined",
            FalsyOrLiteral::Null => "null",
            FalsyOrLiteral::Bool(_) => "boolean",
            FalsyOrLiteral::Number(_) => "number",
            FalsyOrLiteral::String(_) => "string",
            FalsyOrLiteral::Symbol(_) => "symbol",
        }
    }
}

impl fmt::Display for FalsyOrLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FalsyOrLiteral::Undefined => write!(f, "undefined"),
            FalsyOrLiteral::Null => write!(f, "null"),
            FalsyOrLiteral::Bool(b) => write!(f, "{}", b),
            FalsyOrLiteral::Number(n) => write!(f, "{}", n),
            FalsyOrLiteral::String(s) => write!(f, "{:?}", s),
            FalsyOrLiteral::Symbol(s) => write!(f, "Symbol({})", s),
        }
    }
}

impl TryFrom<Value> for FalsyOrLiteral {
    type Error = DomainError;

    fn try_from(value: Value) -> DomainResult<Self> {
        match value {
            Value::Null => Ok(FalsyOrLiteral::Null),
            Value::Bool(b) => Ok(FalsyOrLiteral::Bool(b)),
            Value::Number(n) => Ok(FalsyOrLiteral::Number(number_from_json(&n)?)),
            Value::String(s) => Ok(FalsyOrLiteral::String(s)),
            other => Err(DomainError::NotPrimitive(kind_of(&other))),
        }
    }
}

impl From<Primitive> for FalsyOrLiteral {
    fn from(p: Primitive) -> Self {
        match p {
            Primitive::String(s) => FalsyOrLiteral::String(s),
            Primitive::Number(n) => FalsyOrLiteral::Number(n),
            Primitive::Symbol(s) => FalsyOrLiteral::Symbol(s),
            Primitive::Bool(b) => FalsyOrLiteral::Bool(b),
        }
    }
}

impl From<&str> for FalsyOrLiteral {
    fn from(s: &str) -> Self {
        FalsyOrLiteral::String(s.to_string())
    }
}

impl From<String> for FalsyOrLiteral {
    fn from(s: String) -> Self {
        FalsyOrLiteral::String(s)
    }
}

impl From<f64> for FalsyOrLiteral {
    fn from(n: f64) -> Self {
        FalsyOrLiteral::Number(n)
    }
}

impl From<i32> for FalsyOrLiteral {
    fn from(n: i32) -> Self {
        FalsyOrLiteral::Number(f64::from(n))
    }
}

impl From<i64> for FalsyOrLiteral {
    fn from(n: i64) -> Self {
        FalsyOrLiteral::Number(n as f64)
    }
}

impl From<bool> for FalsyOrLiteral {
    fn from(b: bool) -> Self {
        FalsyOrLiteral::Bool(b)
    }
}

/// `None` maps to undefined.
impl<T: Into<FalsyOrLiteral>> From<Option<T>> for FalsyOrLiteral {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FalsyOrLiteral::Undefined)
    }
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

fn document_from_map(map: Map<String, Value>) -> DomainResult<Document> {
    map.into_iter()
        .map(|(k, v)| Complex::try_from(v).map(|c| (k, c)))
        .collect()
}

fn document_to_map(doc: &Document) -> DomainResult<Map<String, Value>> {
    doc.iter()
        .map(|(k, v)| Value::try_from(v).map(|v| (k.clone(), v)))
        .collect()
}

/// Convert a JSON object into a [`Document`].
pub fn document_from_value(value: Value) -> DomainResult<Document> {
    match value {
        Value::Object(map) => document_from_map(map),
        other => Err(DomainError::NotAnObject(kind_of(&other))),
    }
}

/// Convert a [`Document`] into a JSON object; non-finite numbers are rejected.
pub fn document_to_value(doc: &Document) -> DomainResult<Value> {
    document_to_map(doc).map(Value::Object)
}

/// Parse text holding a JSON object or an array of objects.
pub fn parse_documents(text: &str) -> DomainResult<Vec<Document>> {
    match serde_json::from_str::<Value>(text)? {
        Value::Array(items) => items.into_iter().map(document_from_value).collect(),
        other => Ok(vec![document_from_value(other)?]),
    }
}

impl JsonOrString {
    /// Resolve into parsed documents, parsing the raw string variant.
    pub fn into_documents(self) -> DomainResult<Vec<Document>> {
        match self {
            JsonOrString::Document(doc) => Ok(vec![doc]),
            JsonOrString::Documents(docs) => Ok(docs),
            JsonOrString::String(text) => parse_documents(&text),
        }
    }
}

impl FromStr for JsonOrString {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match serde_json::from_str::<Value>(s)? {
            Value::Array(items) => items
                .into_iter()
                .map(document_from_value)
                .collect::<DomainResult<Vec<_>>>()
                .map(JsonOrString::Documents),
            other => document_from_value(other).map(JsonOrString::Document),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn given_integral_number_when_serializing_then_emits_integer() {
        assert_eq!(Value::try_from(&Complex::Number(3.0)).unwrap(), json!(3));
        assert_eq!(Value::try_from(&Complex::Number(2.5)).unwrap(), json!(2.5));
    }

    #[test]
    fn given_negative_zero_when_serializing_then_keeps_sign() {
        let value = Value::try_from(&Complex::Number(-0.0)).unwrap();
        let back = Complex::try_from(value).unwrap();
        assert!(back.as_f64().unwrap().is_sign_negative());
    }

    #[test]
    fn given_non_finite_number_when_serializing_then_errors() {
        for n in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                Value::try_from(&Complex::Number(n)),
                Err(DomainError::InvalidNumber(_))
            ));
            assert!(serde_json::to_string(&Primitive::Number(n)).is_err());
        }
    }

    #[test]
    fn given_array_with_object_when_converting_then_rejects() {
        let result = Complex::try_from(json!([1, {"a": 1}]));
        assert!(matches!(result, Err(DomainError::NotPrimitive("object"))));
    }

    #[test]
    fn given_null_when_converting_then_rejects() {
        assert!(matches!(
            Complex::try_from(Value::Null),
            Err(DomainError::UnsupportedNull)
        ));
    }
}
