//! Claims, snaks and references as found in Wikibase entity JSON.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::model::DataValue;

/// Whether a snak carries a value, an unknown value, or states there is none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnakType {
    Value,
    SomeValue,
    NoValue,
}

impl SnakType {
    pub fn as_str(self) -> &'static str {
        match self {
            SnakType::Value => "value",
            SnakType::SomeValue => "somevalue",
            SnakType::NoValue => "novalue",
        }
    }
}

/// Truthiness tier of a claim, ordered `Deprecated < Normal < Preferred`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Deprecated,
    Normal,
    Preferred,
}

impl Rank {
    pub fn as_str(self) -> &'static str {
        match self {
            Rank::Deprecated => "deprecated",
            Rank::Normal => "normal",
            Rank::Preferred => "preferred",
        }
    }
}

/// The atomic unit: a property, a datatype and maybe a value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Snak {
    pub snaktype: SnakType,
    pub property: String,
    /// Raw datatype tag; absent in some old dumps.
    #[serde(default)]
    pub datatype: Option<String>,
    /// Present only when `snaktype` is `value`.
    #[serde(default)]
    pub datavalue: Option<DataValue>,
    /// Set on qualifier snaks; the hash is passed through, never computed.
    #[serde(default)]
    pub hash: Option<String>,
}

/// Snaks grouped by property id.
pub type SnakGroups = FxHashMap<String, Vec<Snak>>;

/// A supporting citation: snaks grouped by property.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Reference {
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub snaks: SnakGroups,
    #[serde(rename = "snaks-order", default)]
    pub snaks_order: Vec<String>,
}

/// One statement about an entity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Claim {
    #[serde(default)]
    pub id: Option<String>,
    pub mainsnak: Snak,
    #[serde(default = "normal_rank")]
    pub rank: Rank,
    #[serde(default)]
    pub qualifiers: SnakGroups,
    #[serde(rename = "qualifiers-order", default)]
    pub qualifiers_order: Vec<String>,
    #[serde(default)]
    pub references: Vec<Reference>,
}

fn normal_rank() -> Rank {
    Rank::Normal
}

/// An entity's full claim set, keyed by property id.
pub type ClaimsTable = FxHashMap<String, Vec<Claim>>;

/// Returns the keys of `groups`, those listed in `order` first, then the
/// rest in sorted order so that traversal is deterministic.
pub(crate) fn ordered_keys<'a, V>(
    groups: &'a FxHashMap<String, V>,
    order: &'a [String],
) -> Vec<&'a str> {
    let mut keys: Vec<&str> = Vec::with_capacity(groups.len());
    for key in order {
        if groups.contains_key(key.as_str()) && !keys.contains(&key.as_str()) {
            keys.push(key);
        }
    }
    let mut rest: Vec<&str> = groups
        .keys()
        .map(String::as_str)
        .filter(|key| !keys.contains(key))
        .collect();
    rest.sort_unstable();
    keys.extend(rest);
    keys
}
