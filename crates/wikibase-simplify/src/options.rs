//! Simplification options.
//!
//! Options can be built fluently or deserialized from the familiar camelCase
//! option object:
//!
//! ```rust
//! use wikibase_simplify::{KeepFlags, SimplifyOptions, TimeConverter};
//!
//! let built = SimplifyOptions::new()
//!     .entity_prefix("wd")
//!     .keep_all(true)
//!     .keep_types(false)
//!     .time_converter(TimeConverter::SimpleDay);
//!
//! let parsed: SimplifyOptions = serde_json::from_str(
//!     r#"{ "entityPrefix": "wd", "keepAll": true, "keepTypes": false, "timeConverter": "simple-day" }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(KeepFlags::resolve(&built), KeepFlags::resolve(&parsed));
//! assert!(!KeepFlags::resolve(&built).types);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Deserializer};

use crate::error::UnknownTimeConverter;
use crate::model::TimeValue;

/// Signature of a custom time converter.
pub type TimeConverterFn = dyn Fn(&TimeValue) -> serde_json::Value + Send + Sync;

/// How time values are rendered.
#[derive(Clone, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum TimeConverter {
    /// ISO 8601 timestamp (`1939-11-08T00:00:00.000Z`).
    #[default]
    Iso,
    /// Milliseconds since the Unix epoch.
    Epoch,
    /// `YYYY-MM-DD`, shortened to `YYYY-MM` or `YYYY` by precision.
    SimpleDay,
    /// The Wikibase time string, untouched (`"none"`).
    Raw,
    /// Caller-supplied conversion of the raw time value.
    Custom(Arc<TimeConverterFn>),
}

impl TimeConverter {
    /// Wraps a custom conversion function.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&TimeValue) -> serde_json::Value + Send + Sync + 'static,
    {
        TimeConverter::Custom(Arc::new(f))
    }

    /// Returns the option name, `"custom"` for functions.
    pub fn name(&self) -> &'static str {
        match self {
            TimeConverter::Iso => "iso",
            TimeConverter::Epoch => "epoch",
            TimeConverter::SimpleDay => "simple-day",
            TimeConverter::Raw => "none",
            TimeConverter::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for TimeConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeConverter::Custom(_) => f.write_str("Custom(..)"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for TimeConverter {
    type Err = UnknownTimeConverter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iso" => Ok(TimeConverter::Iso),
            "epoch" => Ok(TimeConverter::Epoch),
            "simple-day" => Ok(TimeConverter::SimpleDay),
            "none" => Ok(TimeConverter::Raw),
            other => Err(UnknownTimeConverter(other.to_string())),
        }
    }
}

impl TryFrom<String> for TimeConverter {
    type Error = UnknownTimeConverter;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Options shared by every simplification entry point.
///
/// Keep flags are tri-state: `None` defers to `keep_all`, `Some(_)` wins.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimplifyOptions {
    /// Joined with `:` to every entity id value.
    pub entity_prefix: Option<String>,
    /// Joined with `:` to every property key.
    pub property_prefix: Option<String>,
    pub keep_qualifiers: Option<bool>,
    pub keep_references: Option<bool>,
    pub keep_ids: Option<bool>,
    pub keep_hashes: Option<bool>,
    pub keep_types: Option<bool>,
    pub keep_snaktypes: Option<bool>,
    pub keep_ranks: Option<bool>,
    pub keep_rich_values: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub keep_all: bool,
    /// Disables rank filtering entirely.
    #[serde(deserialize_with = "null_as_default")]
    pub keep_non_truthy: bool,
    /// Keeps every claim except deprecated ones.
    #[serde(deserialize_with = "null_as_default")]
    pub keep_non_deprecated: bool,
    /// Placeholder for `novalue` snaks; `None` leaves them absent.
    #[serde(deserialize_with = "explicit")]
    pub novalue_value: Option<serde_json::Value>,
    /// Placeholder for `somevalue` snaks; `None` leaves them absent.
    #[serde(deserialize_with = "explicit")]
    pub somevalue_value: Option<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub time_converter: TimeConverter,
}

/// Reads a present `null` as the field's default, like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Maps a present `null` to `Some(Null)`; a missing key stays `None`.
fn explicit<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

impl SimplifyOptions {
    /// Creates options with every default: truthy claims, bare values, iso times.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entity_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.entity_prefix = Some(prefix.into());
        self
    }

    pub fn property_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.property_prefix = Some(prefix.into());
        self
    }

    pub fn keep_qualifiers(mut self, keep: bool) -> Self {
        self.keep_qualifiers = Some(keep);
        self
    }

    pub fn keep_references(mut self, keep: bool) -> Self {
        self.keep_references = Some(keep);
        self
    }

    pub fn keep_ids(mut self, keep: bool) -> Self {
        self.keep_ids = Some(keep);
        self
    }

    pub fn keep_hashes(mut self, keep: bool) -> Self {
        self.keep_hashes = Some(keep);
        self
    }

    pub fn keep_types(mut self, keep: bool) -> Self {
        self.keep_types = Some(keep);
        self
    }

    pub fn keep_snaktypes(mut self, keep: bool) -> Self {
        self.keep_snaktypes = Some(keep);
        self
    }

    pub fn keep_ranks(mut self, keep: bool) -> Self {
        self.keep_ranks = Some(keep);
        self
    }

    pub fn keep_rich_values(mut self, keep: bool) -> Self {
        self.keep_rich_values = Some(keep);
        self
    }

    /// Turns on every keep flag not explicitly set.
    pub fn keep_all(mut self, keep: bool) -> Self {
        self.keep_all = keep;
        self
    }

    pub fn keep_non_truthy(mut self, keep: bool) -> Self {
        self.keep_non_truthy = keep;
        self
    }

    pub fn keep_non_deprecated(mut self, keep: bool) -> Self {
        self.keep_non_deprecated = keep;
        self
    }

    /// Sets the placeholder for `novalue` snaks (`serde_json::Value::Null` for `null`).
    pub fn novalue_value(mut self, placeholder: impl Into<serde_json::Value>) -> Self {
        self.novalue_value = Some(placeholder.into());
        self
    }

    /// Sets the placeholder for `somevalue` snaks (`serde_json::Value::Null` for `null`).
    pub fn somevalue_value(mut self, placeholder: impl Into<serde_json::Value>) -> Self {
        self.somevalue_value = Some(placeholder.into());
        self
    }

    pub fn time_converter(mut self, converter: TimeConverter) -> Self {
        self.time_converter = converter;
        self
    }
}

/// Keep flags after `keep_all` and explicit overrides are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeepFlags {
    pub qualifiers: bool,
    pub references: bool,
    pub ids: bool,
    pub hashes: bool,
    pub types: bool,
    pub snaktypes: bool,
    pub ranks: bool,
    pub rich_values: bool,
}

impl KeepFlags {
    /// Every facet on.
    pub const ALL: KeepFlags = KeepFlags {
        qualifiers: true,
        references: true,
        ids: true,
        hashes: true,
        types: true,
        snaktypes: true,
        ranks: true,
        rich_values: true,
    };

    /// Starts from all-on when `keep_all` is set, all-off otherwise, then
    /// applies the flags the caller set explicitly.
    pub fn resolve(options: &SimplifyOptions) -> Self {
        let base = if options.keep_all {
            Self::ALL
        } else {
            Self::default()
        };
        Self {
            qualifiers: options.keep_qualifiers.unwrap_or(base.qualifiers),
            references: options.keep_references.unwrap_or(base.references),
            ids: options.keep_ids.unwrap_or(base.ids),
            hashes: options.keep_hashes.unwrap_or(base.hashes),
            types: options.keep_types.unwrap_or(base.types),
            snaktypes: options.keep_snaktypes.unwrap_or(base.snaktypes),
            ranks: options.keep_ranks.unwrap_or(base.ranks),
            rich_values: options.keep_rich_values.unwrap_or(base.rich_values),
        }
    }

    /// True when claims must become wrapper objects.
    ///
    /// Hashes alone never wrap a claim: only qualifier snaks and
    /// references carry one.
    pub fn wraps_claims(&self) -> bool {
        self.qualifiers || self.references || self.ids || self.types || self.snaktypes || self.ranks
    }
}
