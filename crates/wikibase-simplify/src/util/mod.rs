//! Utility modules.

pub mod time;

pub use time::{
    parse_wikibase_time, to_epoch_millis, to_iso_string, to_simple_day, TimePrecision,
    WikibaseTime,
};
