//! Property sequences and whole claims tables.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use crate::error::Result;
use crate::model::claim::ordered_keys;
use crate::model::{
    Claim, ClaimsTable, Rank, SimpleValue, SimplifiedClaim, SimplifiedClaims, SimplifiedSnaks,
    Snak, SnakGroups,
};
use crate::options::SimplifyOptions;
use crate::simplify::claim::{simplify_statement, Statement};
use crate::simplify::Context;

// =====================
// Rank filtering
// =====================

/// Which claims survive the rank filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RankFilter {
    /// Best non-deprecated rank only.
    Truthy,
    NonDeprecated,
    All,
}

impl RankFilter {
    fn from_options(options: &SimplifyOptions) -> Self {
        if options.keep_non_truthy {
            RankFilter::All
        } else if options.keep_non_deprecated {
            RankFilter::NonDeprecated
        } else {
            RankFilter::Truthy
        }
    }

    /// Keeps order. Records without a rank always pass.
    fn apply<'a, S: Statement>(self, items: &'a [S]) -> Vec<&'a S> {
        match self {
            RankFilter::All => items.iter().collect(),
            RankFilter::NonDeprecated => items
                .iter()
                .filter(|item| item.rank() != Some(Rank::Deprecated))
                .collect(),
            RankFilter::Truthy => {
                let best = items
                    .iter()
                    .filter_map(|item| item.rank())
                    .filter(|rank| *rank != Rank::Deprecated)
                    .max();
                items
                    .iter()
                    .filter(|item| match item.rank() {
                        None => true,
                        Some(rank) => Some(rank) == best,
                    })
                    .collect()
            }
        }
    }
}

/// Returns the truthy claims: the preferred ones if any, else the normal ones.
pub fn truthy_property_claims(claims: &[Claim]) -> Vec<&Claim> {
    RankFilter::Truthy.apply(claims)
}

/// Returns every claim that is not deprecated.
pub fn non_deprecated_property_claims(claims: &[Claim]) -> Vec<&Claim> {
    RankFilter::NonDeprecated.apply(claims)
}

/// Applies [`truthy_property_claims`] to every property of a table.
pub fn truthy_claims(claims: &ClaimsTable) -> FxHashMap<&str, Vec<&Claim>> {
    claims
        .iter()
        .map(|(property, claims)| (property.as_str(), truthy_property_claims(claims)))
        .collect()
}

// =====================
// Sequences
// =====================

/// Identity of a bare scalar for deduplication.
#[derive(Debug, PartialEq, Eq, Hash)]
enum DedupKey {
    Str(String),
    /// Bits of the value as `f64`, with `-0.0` folded into `0.0`.
    Num(u64),
}

fn dedup_key(simplified: &SimplifiedClaim) -> Option<DedupKey> {
    let SimplifiedClaim::Value(Some(value)) = simplified else {
        return None;
    };
    match value {
        SimpleValue::String(s) => Some(DedupKey::Str(s.clone())),
        SimpleValue::Integer(_) | SimpleValue::Number(_) => {
            value.as_f64().map(|n| DedupKey::Num((n + 0.0).to_bits()))
        }
        SimpleValue::Json(json) if json.is_number() => {
            json.as_f64().map(|n| DedupKey::Num((n + 0.0).to_bits()))
        }
        _ => None,
    }
}

/// Filters by rank, simplifies, drops absent results and deduplicates bare
/// scalars (first occurrence wins).
pub(crate) fn simplify_sequence<S: Statement>(
    items: &[S],
    ctx: &Context<'_>,
) -> Result<Vec<SimplifiedClaim>> {
    let filter = RankFilter::from_options(ctx.options);
    let kept = filter.apply(items);
    trace!(?filter, total = items.len(), kept = kept.len(), "rank filter");

    let mut seen = FxHashSet::default();
    let mut out = Vec::with_capacity(kept.len());
    for item in kept {
        let simplified = simplify_statement(item, ctx)?;
        if simplified.is_absent() {
            continue;
        }
        if let Some(key) = dedup_key(&simplified) {
            if !seen.insert(key) {
                continue;
            }
        }
        out.push(simplified);
    }
    Ok(out)
}

/// Simplifies property-keyed snak groups, visiting `order` first.
pub(crate) fn snak_groups_with(
    groups: &SnakGroups,
    order: &[String],
    ctx: &Context<'_>,
) -> Result<SimplifiedSnaks> {
    let mut out = SimplifiedSnaks::default();
    for property in ordered_keys(groups, order) {
        if let Some(snaks) = groups.get(property) {
            out.insert(ctx.property_key(property), simplify_sequence(snaks, ctx)?);
        }
    }
    Ok(out)
}

// =====================
// Public entry points
// =====================

/// Simplifies every claim of one property.
///
/// `None` and empty slices give an empty vector.
///
/// ```rust
/// use wikibase_simplify::{simplify_property_claims, Claim, SimplifyOptions};
///
/// let claims: Vec<Claim> = serde_json::from_value(serde_json::json!([
///     { "rank": "deprecated", "mainsnak": { "snaktype": "value", "property": "P135",
///       "datatype": "wikibase-item", "datavalue": { "value": { "id": "Q213454" }, "type": "wikibase-entityid" } } },
///     { "rank": "preferred", "mainsnak": { "snaktype": "value", "property": "P135",
///       "datatype": "wikibase-item", "datavalue": { "value": { "id": "Q2044250" }, "type": "wikibase-entityid" } } },
///     { "rank": "normal", "mainsnak": { "snaktype": "value", "property": "P135",
///       "datatype": "wikibase-item", "datavalue": { "value": { "id": "Q5843" }, "type": "wikibase-entityid" } } }
/// ]))
/// .unwrap();
///
/// let truthy = simplify_property_claims(Some(claims.as_slice()), &SimplifyOptions::new()).unwrap();
/// assert_eq!(truthy.len(), 1);
/// assert_eq!(truthy[0].as_str(), Some("Q2044250"));
///
/// let all = simplify_property_claims(Some(claims.as_slice()), &SimplifyOptions::new().keep_non_truthy(true)).unwrap();
/// assert_eq!(all.len(), 3);
/// ```
pub fn simplify_property_claims(
    claims: Option<&[Claim]>,
    options: &SimplifyOptions,
) -> Result<Vec<SimplifiedClaim>> {
    match claims {
        Some(claims) => simplify_sequence(claims, &Context::new(options)),
        None => Ok(Vec::new()),
    }
}

/// Simplifies the snaks of one qualifier or reference property.
pub fn simplify_property_snaks(
    snaks: Option<&[Snak]>,
    options: &SimplifyOptions,
) -> Result<Vec<SimplifiedClaim>> {
    match snaks {
        Some(snaks) => simplify_sequence(snaks, &Context::new(options)),
        None => Ok(Vec::new()),
    }
}

/// Simplifies property-keyed snak groups, e.g. a claim's qualifiers.
pub fn simplify_snaks(snaks: &SnakGroups, options: &SimplifyOptions) -> Result<SimplifiedSnaks> {
    snak_groups_with(snaks, &[], &Context::new(options))
}

/// Simplifies an entity's claims table.
///
/// The result has one (prefixed) key per input property.
pub fn simplify_claims(claims: &ClaimsTable, options: &SimplifyOptions) -> Result<SimplifiedClaims> {
    let ctx = Context::new(options);
    let mut out = SimplifiedClaims::default();
    for property in ordered_keys(claims, &[]) {
        if let Some(property_claims) = claims.get(property) {
            let simplified = simplify_sequence(property_claims, &ctx)?;
            trace!(property, values = simplified.len(), "simplified property");
            out.insert(ctx.property_key(property), simplified);
        }
    }
    Ok(out)
}
