//! Error types for claim simplification.

use thiserror::Error;

use crate::model::Datatype;

/// Stable, machine-readable classification of a [`SimplifyError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The datatype tag is not one this crate knows how to decode.
    UnsupportedDatatype,
    /// The datavalue does not have the shape its datatype requires.
    ValueMismatch,
    /// An entity id could not be built from its payload.
    MalformedEntityId,
    /// A quantity amount or bound is not a decimal number.
    MalformedQuantity,
    /// A time string is not in the Wikibase time format.
    MalformedTime,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "unsupported-datatype").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UnsupportedDatatype => "unsupported-datatype",
            ErrorCode::ValueMismatch => "value-mismatch",
            ErrorCode::MalformedEntityId => "malformed-entity-id",
            ErrorCode::MalformedQuantity => "malformed-quantity",
            ErrorCode::MalformedTime => "malformed-time",
        }
    }
}

/// Error while simplifying a claim, snak or claims table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimplifyError {
    /// Schema drift upstream: the datatype is newer than this crate.
    #[error("unsupported datatype {datatype:?} (claim: {})", .claim_id.as_deref().unwrap_or("-"))]
    UnsupportedDatatype {
        datatype: String,
        claim_id: Option<String>,
    },

    #[error("{datatype} snak carries a {found} datavalue")]
    ValueMismatch {
        datatype: Datatype,
        found: &'static str,
    },

    #[error("entity id value has neither an id nor a known entity-type with a numeric-id")]
    MalformedEntityId,

    #[error("quantity {field} is not a decimal number: {raw:?}")]
    MalformedQuantity { field: &'static str, raw: String },

    #[error(transparent)]
    Time(#[from] TimeParseError),
}

impl SimplifyError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SimplifyError::UnsupportedDatatype { .. } => ErrorCode::UnsupportedDatatype,
            SimplifyError::ValueMismatch { .. } => ErrorCode::ValueMismatch,
            SimplifyError::MalformedEntityId => ErrorCode::MalformedEntityId,
            SimplifyError::MalformedQuantity { .. } => ErrorCode::MalformedQuantity,
            SimplifyError::Time(_) => ErrorCode::MalformedTime,
        }
    }

    /// Attaches the id of the claim being simplified, if not yet known.
    pub(crate) fn with_claim_id(self, id: Option<&str>) -> Self {
        match self {
            SimplifyError::UnsupportedDatatype {
                datatype,
                claim_id: None,
            } => SimplifyError::UnsupportedDatatype {
                datatype,
                claim_id: id.map(str::to_string),
            },
            other => other,
        }
    }
}

/// Error type for Wikibase time parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid Wikibase time {time:?}: {reason}")]
pub struct TimeParseError {
    pub time: String,
    pub reason: &'static str,
}

impl TimeParseError {
    pub(crate) fn new(time: &str, reason: &'static str) -> Self {
        Self {
            time: time.to_string(),
            reason,
        }
    }
}

/// Error for an unknown time converter name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown time converter {0:?} (expected iso, epoch, simple-day or none)")]
pub struct UnknownTimeConverter(pub String);

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimplifyError>;
