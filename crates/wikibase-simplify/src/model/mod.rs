//! Data model types.
//!
//! This module contains the records the simplifier reads and the values it
//! produces:
//! - Claims, snaks and references (input)
//! - Datatypes and raw datavalues (input)
//! - Simplified values and wrappers (output)

pub mod claim;
pub mod simplified;
pub mod value;

pub use claim::{Claim, ClaimsTable, Rank, Reference, Snak, SnakGroups, SnakType};
pub use simplified::{
    ClaimObject, RichGlobeCoordinate, RichMonolingualText, RichQuantity, RichTime, SimpleValue,
    SimplifiedClaim, SimplifiedClaims, SimplifiedReference, SimplifiedSnaks,
};
pub use value::{
    DataValue, Datatype, EntityIdValue, GlobeCoordinateValue, MonolingualTextValue, QuantityValue,
    TimeValue,
};
