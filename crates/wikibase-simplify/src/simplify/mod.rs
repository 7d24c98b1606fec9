//! The simplification engine.
//!
//! Three layers, leaves first:
//! - [`value`]: decodes one snak's datavalue by datatype
//! - [`claim`]: wraps a decoded claim or snak with the requested facets,
//!   recursing into qualifiers and references
//! - [`collection`]: rank filtering, dropping and dedup over property
//!   sequences, and whole claims tables
//!
//! Every entry point takes `&SimplifyOptions`, resolves the keep flags once
//! and threads the same [`Context`] through the recursion.

pub mod claim;
pub mod collection;
pub mod value;

pub use claim::{
    simplify_claim, simplify_qualifiers, simplify_reference_record, simplify_references,
    simplify_snak, Statement,
};
pub use collection::{
    non_deprecated_property_claims, simplify_claims, simplify_property_claims,
    simplify_property_snaks, simplify_snaks, truthy_claims, truthy_property_claims,
};
pub use value::simplify_value;

use crate::options::{KeepFlags, SimplifyOptions};

/// Options plus their resolved keep flags, shared by one simplification call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Context<'a> {
    pub(crate) options: &'a SimplifyOptions,
    pub(crate) keep: KeepFlags,
}

impl<'a> Context<'a> {
    pub(crate) fn new(options: &'a SimplifyOptions) -> Self {
        Self {
            options,
            keep: KeepFlags::resolve(options),
        }
    }

    /// Joins `entityPrefix` to an entity id value.
    pub(crate) fn entity_value(&self, id: String) -> String {
        match &self.options.entity_prefix {
            Some(prefix) => format!("{prefix}:{id}"),
            None => id,
        }
    }

    /// Joins `propertyPrefix` to a property key.
    pub(crate) fn property_key(&self, property: &str) -> String {
        match &self.options.property_prefix {
            Some(prefix) => format!("{prefix}:{property}"),
            None => property.to_string(),
        }
    }
}
