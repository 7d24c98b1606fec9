//! Claim simplification.
//!
//! Claims and the snaks inside qualifiers and references go through the same
//! path, [`simplify_statement`]. The [`Statement`] trait says which facets a
//! record can offer: only claims have ranks, ids, qualifiers and references,
//! only sub-snaks have hashes.

use crate::error::{Result, SimplifyError};
use crate::model::{
    Claim, ClaimObject, Rank, Reference, SimplifiedClaim, SimplifiedReference, SimplifiedSnaks,
    Snak, SnakGroups,
};
use crate::options::{KeepFlags, SimplifyOptions};
use crate::simplify::collection::snak_groups_with;
use crate::simplify::value::{datatype_tag, decode_snak};
use crate::simplify::Context;

/// A record holding a mainsnak-like value.
pub trait Statement {
    /// The snak whose value is decoded.
    fn mainsnak(&self) -> &Snak;

    /// Returns `None` where ranks do not apply.
    fn rank(&self) -> Option<Rank> {
        None
    }

    fn statement_id(&self) -> Option<&str> {
        None
    }

    fn hash(&self) -> Option<&str> {
        None
    }

    /// Qualifier groups and their display order.
    fn qualifiers(&self) -> Option<(&SnakGroups, &[String])> {
        None
    }

    fn references(&self) -> Option<&[Reference]> {
        None
    }

    /// True when the simplified form must be a wrapper object.
    fn wraps(&self, keep: &KeepFlags) -> bool;
}

impl Statement for Claim {
    fn mainsnak(&self) -> &Snak {
        &self.mainsnak
    }

    fn rank(&self) -> Option<Rank> {
        Some(self.rank)
    }

    fn statement_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn qualifiers(&self) -> Option<(&SnakGroups, &[String])> {
        Some((&self.qualifiers, self.qualifiers_order.as_slice()))
    }

    fn references(&self) -> Option<&[Reference]> {
        Some(self.references.as_slice())
    }

    fn wraps(&self, keep: &KeepFlags) -> bool {
        keep.wraps_claims()
    }
}

impl Statement for Snak {
    fn mainsnak(&self) -> &Snak {
        self
    }

    fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    fn wraps(&self, keep: &KeepFlags) -> bool {
        keep.types || keep.snaktypes || (keep.hashes && self.hash.is_some())
    }
}

pub(crate) fn simplify_statement<S: Statement + ?Sized>(
    statement: &S,
    ctx: &Context<'_>,
) -> Result<SimplifiedClaim> {
    let snak = statement.mainsnak();
    let tag = |e: SimplifyError| e.with_claim_id(statement.statement_id());
    let value = decode_snak(snak, ctx).map_err(tag)?;

    let keep = ctx.keep;
    if !statement.wraps(&keep) {
        return Ok(SimplifiedClaim::Value(value));
    }

    let mut object = ClaimObject {
        value,
        ..Default::default()
    };
    if keep.types {
        object.datatype = datatype_tag(snak);
    }
    if keep.snaktypes {
        object.snaktype = Some(snak.snaktype);
    }
    if keep.ranks {
        object.rank = statement.rank();
    }
    if keep.hashes {
        object.hash = statement.hash().map(str::to_string);
    }
    if keep.qualifiers {
        if let Some((groups, order)) = statement.qualifiers() {
            object.qualifiers = Some(snak_groups_with(groups, order, ctx).map_err(tag)?);
        }
    }
    if keep.references {
        if let Some(references) = statement.references() {
            object.references = Some(references_with(references, ctx).map_err(tag)?);
        }
    }
    if keep.ids {
        object.id = statement.statement_id().map(str::to_string);
    }
    Ok(SimplifiedClaim::Object(object))
}

fn reference_with(reference: &Reference, ctx: &Context<'_>) -> Result<SimplifiedReference> {
    let snaks = snak_groups_with(&reference.snaks, &reference.snaks_order, ctx)?;
    Ok(if ctx.keep.hashes {
        SimplifiedReference::Hashed {
            hash: reference.hash.clone(),
            snaks,
        }
    } else {
        SimplifiedReference::Snaks(snaks)
    })
}

fn references_with(
    references: &[Reference],
    ctx: &Context<'_>,
) -> Result<Vec<SimplifiedReference>> {
    references
        .iter()
        .map(|reference| reference_with(reference, ctx))
        .collect()
}

// =====================
// Public entry points
// =====================

/// Simplifies one claim.
///
/// With no keep facet active the result is the bare value (absent for empty
/// snaks without a placeholder); otherwise it is a [`ClaimObject`] holding
/// exactly the requested facets.
///
/// ```rust
/// use wikibase_simplify::{simplify_claim, Claim, SimplifyOptions};
///
/// let claim: Claim = serde_json::from_value(serde_json::json!({
///     "id": "Q2112$1",
///     "rank": "normal",
///     "mainsnak": {
///         "snaktype": "value",
///         "property": "P190",
///         "datatype": "wikibase-item",
///         "datavalue": { "value": { "id": "Q207614" }, "type": "wikibase-entityid" }
///     }
/// }))
/// .unwrap();
///
/// let bare = simplify_claim(&claim, &SimplifyOptions::new()).unwrap();
/// assert_eq!(bare.as_str(), Some("Q207614"));
///
/// let typed = simplify_claim(&claim, &SimplifyOptions::new().keep_types(true)).unwrap();
/// assert_eq!(
///     serde_json::to_value(typed).unwrap(),
///     serde_json::json!({ "value": "Q207614", "type": "wikibase-item" })
/// );
/// ```
pub fn simplify_claim(claim: &Claim, options: &SimplifyOptions) -> Result<SimplifiedClaim> {
    simplify_statement(claim, &Context::new(options))
}

/// Simplifies one qualifier or reference snak.
///
/// Only the `type`, `snaktype` and `hash` facets apply to snaks.
pub fn simplify_snak(snak: &Snak, options: &SimplifyOptions) -> Result<SimplifiedClaim> {
    simplify_statement(snak, &Context::new(options))
}

/// Simplifies a claim's qualifiers, keyed by (prefixed) property.
pub fn simplify_qualifiers(claim: &Claim, options: &SimplifyOptions) -> Result<SimplifiedSnaks> {
    snak_groups_with(
        &claim.qualifiers,
        &claim.qualifiers_order,
        &Context::new(options),
    )
}

/// Simplifies a list of references, one entry per reference.
pub fn simplify_references(
    references: &[Reference],
    options: &SimplifyOptions,
) -> Result<Vec<SimplifiedReference>> {
    references_with(references, &Context::new(options))
}

/// Simplifies one reference: `{<prop>: [...]}`, or `{hash, snaks}` when
/// hashes are kept.
pub fn simplify_reference_record(
    reference: &Reference,
    options: &SimplifyOptions,
) -> Result<SimplifiedReference> {
    reference_with(reference, &Context::new(options))
}
