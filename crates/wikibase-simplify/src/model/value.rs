//! Datatypes and raw datavalues as found in Wikibase entity JSON.
//!
//! A snak's `datatype` tag says how its `datavalue` should be read; the
//! datavalue itself carries its own `type` discriminator, which is how serde
//! picks the [`DataValue`] variant.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Datatypes understood by the value decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Datatype {
    WikibaseItem,
    WikibaseProperty,
    WikibaseLexeme,
    WikibaseForm,
    WikibaseSense,
    EntitySchema,
    String,
    CommonsMedia,
    Url,
    Math,
    ExternalId,
    GeoShape,
    TabularData,
    MusicalNotation,
    MonolingualText,
    Quantity,
    GlobeCoordinate,
    Time,
}

impl Datatype {
    /// Resolves a datatype from its tag in entity JSON.
    pub fn from_tag(tag: &str) -> Option<Datatype> {
        match tag {
            "wikibase-item" => Some(Datatype::WikibaseItem),
            "wikibase-property" => Some(Datatype::WikibaseProperty),
            "wikibase-lexeme" => Some(Datatype::WikibaseLexeme),
            "wikibase-form" => Some(Datatype::WikibaseForm),
            "wikibase-sense" => Some(Datatype::WikibaseSense),
            "entity-schema" => Some(Datatype::EntitySchema),
            "string" => Some(Datatype::String),
            "commonsMedia" => Some(Datatype::CommonsMedia),
            "url" => Some(Datatype::Url),
            "math" => Some(Datatype::Math),
            "external-id" => Some(Datatype::ExternalId),
            "geo-shape" => Some(Datatype::GeoShape),
            "tabular-data" => Some(Datatype::TabularData),
            "musical-notation" => Some(Datatype::MusicalNotation),
            "monolingualtext" => Some(Datatype::MonolingualText),
            "quantity" => Some(Datatype::Quantity),
            // Old dumps used the datavalue spelling as datatype.
            "globe-coordinate" | "globecoordinate" => Some(Datatype::GlobeCoordinate),
            "time" => Some(Datatype::Time),
            _ => None,
        }
    }

    /// Returns the canonical tag for this datatype.
    pub fn tag(self) -> &'static str {
        match self {
            Datatype::WikibaseItem => "wikibase-item",
            Datatype::WikibaseProperty => "wikibase-property",
            Datatype::WikibaseLexeme => "wikibase-lexeme",
            Datatype::WikibaseForm => "wikibase-form",
            Datatype::WikibaseSense => "wikibase-sense",
            Datatype::EntitySchema => "entity-schema",
            Datatype::String => "string",
            Datatype::CommonsMedia => "commonsMedia",
            Datatype::Url => "url",
            Datatype::Math => "math",
            Datatype::ExternalId => "external-id",
            Datatype::GeoShape => "geo-shape",
            Datatype::TabularData => "tabular-data",
            Datatype::MusicalNotation => "musical-notation",
            Datatype::MonolingualText => "monolingualtext",
            Datatype::Quantity => "quantity",
            Datatype::GlobeCoordinate => "globe-coordinate",
            Datatype::Time => "time",
        }
    }

    /// Infers a datatype from a datavalue, for snaks that lack a tag.
    pub fn infer(value: &DataValue) -> Datatype {
        match value {
            DataValue::String(_) => Datatype::String,
            DataValue::EntityId(id) => match id.entity_type.as_deref() {
                Some("property") => Datatype::WikibaseProperty,
                Some("lexeme") => Datatype::WikibaseLexeme,
                Some("form") => Datatype::WikibaseForm,
                Some("sense") => Datatype::WikibaseSense,
                Some("entity-schema") => Datatype::EntitySchema,
                _ => Datatype::WikibaseItem,
            },
            DataValue::MonolingualText(_) => Datatype::MonolingualText,
            DataValue::Quantity(_) => Datatype::Quantity,
            DataValue::GlobeCoordinate(_) => Datatype::GlobeCoordinate,
            DataValue::Time(_) => Datatype::Time,
        }
    }

    /// Returns true for datatypes whose values are entity ids.
    pub fn is_entity(self) -> bool {
        matches!(
            self,
            Datatype::WikibaseItem
                | Datatype::WikibaseProperty
                | Datatype::WikibaseLexeme
                | Datatype::WikibaseForm
                | Datatype::WikibaseSense
                | Datatype::EntitySchema
        )
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A raw datavalue: `{"type": ..., "value": ...}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum DataValue {
    #[serde(rename = "string")]
    String(String),
    #[serde(rename = "wikibase-entityid")]
    EntityId(EntityIdValue),
    #[serde(rename = "monolingualtext")]
    MonolingualText(MonolingualTextValue),
    #[serde(rename = "quantity")]
    Quantity(QuantityValue),
    #[serde(rename = "globecoordinate")]
    GlobeCoordinate(GlobeCoordinateValue),
    #[serde(rename = "time")]
    Time(TimeValue),
}

impl DataValue {
    /// Returns the datavalue type tag.
    pub fn kind(&self) -> &'static str {
        match self {
            DataValue::String(_) => "string",
            DataValue::EntityId(_) => "wikibase-entityid",
            DataValue::MonolingualText(_) => "monolingualtext",
            DataValue::Quantity(_) => "quantity",
            DataValue::GlobeCoordinate(_) => "globecoordinate",
            DataValue::Time(_) => "time",
        }
    }
}

/// Entity id payload.
///
/// Current dumps carry `id`; old dumps only carry `entity-type` and
/// `numeric-id`, and forms and senses only ever carry `id`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct EntityIdValue {
    #[serde(rename = "entity-type", default)]
    pub entity_type: Option<String>,
    #[serde(rename = "numeric-id", default)]
    pub numeric_id: Option<u64>,
    #[serde(default)]
    pub id: Option<String>,
}

impl EntityIdValue {
    /// Returns the entity id, rebuilding it from the numeric id when needed.
    pub fn entity_id(&self) -> Option<String> {
        if let Some(id) = &self.id {
            return Some(id.clone());
        }
        let letter = match self.entity_type.as_deref()? {
            "item" => 'Q',
            "property" => 'P',
            "lexeme" => 'L',
            _ => return None,
        };
        self.numeric_id.map(|n| format!("{letter}{n}"))
    }
}

/// Text in a given language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MonolingualTextValue {
    pub text: String,
    pub language: String,
}

/// Quantity payload; amounts are signed decimal strings such as `"+118"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuantityValue {
    pub amount: String,
    /// `"1"` for dimensionless quantities, otherwise an entity URI.
    #[serde(default = "dimensionless")]
    pub unit: String,
    #[serde(rename = "upperBound", default)]
    pub upper_bound: Option<String>,
    #[serde(rename = "lowerBound", default)]
    pub lower_bound: Option<String>,
}

fn dimensionless() -> String {
    "1".to_string()
}

/// WGS84-style coordinate on a globe.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GlobeCoordinateValue {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub altitude: Option<f64>,
    #[serde(default)]
    pub precision: Option<f64>,
    /// Globe entity URI.
    #[serde(default)]
    pub globe: String,
}

/// Point in time as stored by Wikibase.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimeValue {
    /// Signed time string, e.g. `+1939-11-08T00:00:00Z`.
    pub time: String,
    #[serde(default)]
    pub timezone: i64,
    #[serde(default)]
    pub before: i64,
    #[serde(default)]
    pub after: i64,
    /// See [`crate::util::time::TimePrecision`].
    pub precision: u8,
    #[serde(default)]
    pub calendarmodel: String,
}
