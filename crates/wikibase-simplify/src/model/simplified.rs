//! Simplified output values.
//!
//! Everything here is freshly built by the simplifier; nothing borrows from
//! the input claims. Serialization produces the plain JSON shapes consumers
//! expect: bare scalars, `[lat, lng]` pairs, or wrapper objects holding only
//! the facets that were asked for.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::model::{Rank, SnakType};

/// A decoded snak value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SimpleValue {
    /// Entity ids, strings, monolingual text, iso/simple-day/raw times.
    String(String),
    /// Epoch milliseconds.
    Integer(i64),
    /// Quantity amounts.
    Number(f64),
    /// `[latitude, longitude]`.
    Coordinates([f64; 2]),
    MonolingualText(RichMonolingualText),
    Quantity(RichQuantity),
    GlobeCoordinate(RichGlobeCoordinate),
    Time(RichTime),
    /// Caller-supplied data: empty-snak placeholders and custom time conversions.
    Json(serde_json::Value),
}

impl SimpleValue {
    /// Wraps caller-supplied JSON, lifting plain strings to [`SimpleValue::String`].
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => SimpleValue::String(s),
            other => SimpleValue::Json(other),
        }
    }

    /// Returns the string if this is a plain string (or a JSON string).
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SimpleValue::String(s) => Some(s),
            SimpleValue::Json(serde_json::Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value of integers, numbers and JSON numbers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SimpleValue::Integer(n) => Some(*n as f64),
            SimpleValue::Number(n) => Some(*n),
            SimpleValue::Json(value) => value.as_f64(),
            _ => None,
        }
    }

    /// Returns true for the explicit `null` placeholder.
    pub fn is_null(&self) -> bool {
        matches!(self, SimpleValue::Json(serde_json::Value::Null))
    }
}

impl From<&str> for SimpleValue {
    fn from(s: &str) -> Self {
        SimpleValue::String(s.to_string())
    }
}

impl From<String> for SimpleValue {
    fn from(s: String) -> Self {
        SimpleValue::String(s)
    }
}

/// Monolingual text with its language code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichMonolingualText {
    pub text: String,
    pub language: String,
}

/// Quantity with bounds; the unit is a bare entity id, absent when dimensionless.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RichQuantity {
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<f64>,
}

/// Full globe coordinate; `altitude` serializes as `null` when unknown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RichGlobeCoordinate {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
    pub precision: Option<f64>,
    pub globe: String,
}

/// Full time value; `time` holds the output of the configured converter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RichTime {
    pub time: Box<SimpleValue>,
    pub timezone: i64,
    pub before: i64,
    pub after: i64,
    pub precision: u8,
    pub calendarmodel: String,
}

/// Wrapper built when any "keep" facet is requested.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ClaimObject {
    /// `None` for empty snaks without a placeholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<SimpleValue>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snaktype: Option<SnakType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<Rank>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifiers: Option<SimplifiedSnaks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<SimplifiedReference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// The simplified form of a claim or snak.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SimplifiedClaim {
    /// A bare value; `None` when an empty snak has no placeholder.
    Value(Option<SimpleValue>),
    Object(ClaimObject),
}

impl SimplifiedClaim {
    /// Returns the decoded value, bare or wrapped.
    pub fn value(&self) -> Option<&SimpleValue> {
        match self {
            SimplifiedClaim::Value(value) => value.as_ref(),
            SimplifiedClaim::Object(object) => object.value.as_ref(),
        }
    }

    /// Returns the bare string value, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SimplifiedClaim::Value(Some(value)) => value.as_str(),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ClaimObject> {
        match self {
            SimplifiedClaim::Object(object) => Some(object),
            SimplifiedClaim::Value(_) => None,
        }
    }

    /// True for a bare result with nothing in it (an `undefined` value).
    pub fn is_absent(&self) -> bool {
        matches!(self, SimplifiedClaim::Value(None))
    }
}

/// A simplified reference record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SimplifiedReference {
    /// `{ <property>: [values] }`
    Snaks(SimplifiedSnaks),
    /// `{ hash, snaks: { <property>: [values] } }`, when hashes are kept.
    Hashed {
        #[serde(skip_serializing_if = "Option::is_none")]
        hash: Option<String>,
        snaks: SimplifiedSnaks,
    },
}

impl SimplifiedReference {
    pub fn snaks(&self) -> &SimplifiedSnaks {
        match self {
            SimplifiedReference::Snaks(snaks) => snaks,
            SimplifiedReference::Hashed { snaks, .. } => snaks,
        }
    }

    pub fn hash(&self) -> Option<&str> {
        match self {
            SimplifiedReference::Snaks(_) => None,
            SimplifiedReference::Hashed { hash, .. } => hash.as_deref(),
        }
    }
}

/// Simplified snaks keyed by (possibly prefixed) property id.
pub type SimplifiedSnaks = FxHashMap<String, Vec<SimplifiedClaim>>;

/// Simplified claims keyed by (possibly prefixed) property id.
pub type SimplifiedClaims = FxHashMap<String, Vec<SimplifiedClaim>>;
