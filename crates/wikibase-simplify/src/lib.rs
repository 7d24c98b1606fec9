//! Wikibase claim simplification.
//!
//! This crate turns the claims of a Wikibase entity (as found in Wikidata's
//! entity JSON) into application-friendly values: bare strings, numbers and
//! coordinate pairs by default, or wrapper objects carrying exactly the
//! facets a caller asks for.
//!
//! # Overview
//!
//! Simplification works at three levels, all sharing one option set:
//! - **One claim**: [`simplify_claim`] decodes the main value and adds the
//!   requested facets (qualifiers, references, ids, ranks, types, snaktypes)
//! - **One property**: [`simplify_property_claims`] keeps only truthy claims
//!   by default, drops empty results and deduplicates bare values
//! - **One entity**: [`simplify_claims`] maps a whole claims table
//!
//! Inputs are never modified; every result is freshly allocated.
//!
//! # Quick Start
//!
//! ```rust
//! use wikibase_simplify::{simplify_claims, ClaimsTable, SimplifyOptions, TimeConverter};
//!
//! let claims: ClaimsTable = serde_json::from_value(serde_json::json!({
//!     "P569": [{
//!         "id": "Q646148$1",
//!         "rank": "normal",
//!         "mainsnak": {
//!             "snaktype": "value",
//!             "property": "P569",
//!             "datatype": "time",
//!             "datavalue": {
//!                 "value": {
//!                     "time": "+1939-11-08T00:00:00Z",
//!                     "timezone": 0, "before": 0, "after": 0, "precision": 11,
//!                     "calendarmodel": "http://www.wikidata.org/entity/Q1985727"
//!                 },
//!                 "type": "time"
//!             }
//!         }
//!     }]
//! }))
//! .unwrap();
//!
//! let options = SimplifyOptions::new()
//!     .property_prefix("wdt")
//!     .time_converter(TimeConverter::SimpleDay);
//! let simplified = simplify_claims(&claims, &options).unwrap();
//!
//! assert_eq!(
//!     serde_json::to_value(simplified).unwrap(),
//!     serde_json::json!({ "wdt:P569": ["1939-11-08"] })
//! );
//! ```
//!
//! # Modules
//!
//! - [`model`]: Input records (claims, snaks, datavalues) and simplified output
//! - [`options`]: Simplification options and time converters
//! - [`simplify`]: The value decoder, claim simplifier and collection simplifiers
//! - [`util`]: Wikibase time parsing and conversion
//! - [`error`]: Error types
//!
//! # Errors
//!
//! Well-formed input never fails. A datatype this crate does not know yields
//! [`SimplifyError::UnsupportedDatatype`], so that schema drift upstream is
//! distinguishable from an empty value.

pub mod error;
pub mod model;
pub mod options;
pub mod simplify;
pub mod util;

#[cfg(test)]
mod fixtures;

// Re-export commonly used types at crate root
pub use error::{ErrorCode, Result, SimplifyError, TimeParseError, UnknownTimeConverter};
pub use model::{
    Claim, ClaimObject, ClaimsTable, DataValue, Datatype, Rank, Reference, SimpleValue,
    SimplifiedClaim, SimplifiedClaims, SimplifiedReference, SimplifiedSnaks, Snak, SnakGroups,
    SnakType, TimeValue,
};
pub use options::{KeepFlags, SimplifyOptions, TimeConverter};
pub use simplify::{
    non_deprecated_property_claims, simplify_claim, simplify_claims, simplify_property_claims,
    simplify_property_snaks, simplify_qualifiers, simplify_reference_record, simplify_references,
    simplify_snak, simplify_snaks, simplify_value, truthy_claims, truthy_property_claims,
    Statement,
};
pub use util::{to_epoch_millis, to_iso_string, to_simple_day, TimePrecision};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
