//! Value decoding.
//!
//! Turns a snak's datavalue into a [`SimpleValue`] according to its datatype:
//!
//! | datatype | bare | rich |
//! |---|---|---|
//! | entity family | prefixed entity id | same |
//! | string-like | the string | same |
//! | monolingualtext | text | `{text, language}` |
//! | quantity | amount | `{amount, unit, upperBound, lowerBound}` |
//! | globe-coordinate | `[lat, lng]` | `{latitude, longitude, altitude, precision, globe}` |
//! | time | converted time | `{time, timezone, before, after, precision, calendarmodel}` |
//!
//! `novalue` and `somevalue` snaks decode to their placeholder, or to `None`.

use tracing::debug;

use crate::error::{Result, SimplifyError};
use crate::model::{
    DataValue, Datatype, GlobeCoordinateValue, QuantityValue, RichGlobeCoordinate,
    RichMonolingualText, RichQuantity, RichTime, SimpleValue, Snak, SnakType, TimeValue,
};
use crate::options::{SimplifyOptions, TimeConverter};
use crate::simplify::Context;
use crate::util::{to_epoch_millis, to_iso_string, to_simple_day};

/// Decodes the value of one snak.
///
/// Returns `Ok(None)` for empty snaks without a placeholder and for value
/// snaks that carry no datavalue.
pub fn simplify_value(snak: &Snak, options: &SimplifyOptions) -> Result<Option<SimpleValue>> {
    decode_snak(snak, &Context::new(options))
}

pub(crate) fn decode_snak(snak: &Snak, ctx: &Context<'_>) -> Result<Option<SimpleValue>> {
    let placeholder = match snak.snaktype {
        SnakType::Value => None,
        SnakType::NoValue => Some(&ctx.options.novalue_value),
        SnakType::SomeValue => Some(&ctx.options.somevalue_value),
    };
    if let Some(placeholder) = placeholder {
        return Ok(placeholder.clone().map(SimpleValue::from_json));
    }

    let datatype = match snak.datatype.as_deref() {
        Some(tag) => match Datatype::from_tag(tag) {
            Some(datatype) => Some(datatype),
            None => {
                debug!(property = %snak.property, datatype = tag, "unsupported datatype");
                return Err(SimplifyError::UnsupportedDatatype {
                    datatype: tag.to_string(),
                    claim_id: None,
                });
            }
        },
        None => None,
    };

    let Some(datavalue) = &snak.datavalue else {
        debug!(property = %snak.property, "value snak without datavalue");
        return Ok(None);
    };
    let datatype = datatype.unwrap_or_else(|| Datatype::infer(datavalue));

    decode(datatype, datavalue, ctx).map(Some)
}

/// Returns the tag reported as the wrapper's `type`: the raw tag, or the
/// inferred one when the snak has none.
pub(crate) fn datatype_tag(snak: &Snak) -> Option<String> {
    match (&snak.datatype, &snak.datavalue) {
        (Some(tag), _) => Some(tag.clone()),
        (None, Some(datavalue)) => Some(Datatype::infer(datavalue).tag().to_string()),
        (None, None) => None,
    }
}

fn decode(datatype: Datatype, datavalue: &DataValue, ctx: &Context<'_>) -> Result<SimpleValue> {
    let rich = ctx.keep.rich_values;
    match (datatype, datavalue) {
        (dt, DataValue::EntityId(id)) if dt.is_entity() => {
            let id = id.entity_id().ok_or(SimplifyError::MalformedEntityId)?;
            Ok(SimpleValue::String(ctx.entity_value(id)))
        }
        (
            Datatype::String
            | Datatype::CommonsMedia
            | Datatype::Url
            | Datatype::Math
            | Datatype::ExternalId
            | Datatype::GeoShape
            | Datatype::TabularData
            | Datatype::MusicalNotation,
            DataValue::String(s),
        ) => Ok(SimpleValue::String(s.clone())),
        (Datatype::MonolingualText, DataValue::MonolingualText(m)) => Ok(if rich {
            SimpleValue::MonolingualText(RichMonolingualText {
                text: m.text.clone(),
                language: m.language.clone(),
            })
        } else {
            SimpleValue::String(m.text.clone())
        }),
        (Datatype::Quantity, DataValue::Quantity(q)) => decode_quantity(q, rich),
        (Datatype::GlobeCoordinate, DataValue::GlobeCoordinate(g)) => {
            Ok(decode_globe_coordinate(g, rich))
        }
        (Datatype::Time, DataValue::Time(t)) => decode_time(t, rich, &ctx.options.time_converter),
        (datatype, other) => Err(SimplifyError::ValueMismatch {
            datatype,
            found: other.kind(),
        }),
    }
}

/// Parses a signed decimal string such as `+118` or `-0.5`.
fn parse_decimal(raw: &str, field: &'static str) -> Result<f64> {
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    match digits.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(SimplifyError::MalformedQuantity {
            field,
            raw: raw.to_string(),
        }),
    }
}

fn decode_quantity(q: &QuantityValue, rich: bool) -> Result<SimpleValue> {
    let amount = parse_decimal(&q.amount, "amount")?;
    if !rich {
        return Ok(SimpleValue::Number(amount));
    }
    let unit = match q.unit.as_str() {
        "1" => None,
        uri => uri.rsplit('/').next().map(str::to_string),
    };
    let upper_bound = q
        .upper_bound
        .as_deref()
        .map(|raw| parse_decimal(raw, "upperBound"))
        .transpose()?;
    let lower_bound = q
        .lower_bound
        .as_deref()
        .map(|raw| parse_decimal(raw, "lowerBound"))
        .transpose()?;
    Ok(SimpleValue::Quantity(RichQuantity {
        amount,
        unit,
        upper_bound,
        lower_bound,
    }))
}

fn decode_globe_coordinate(g: &GlobeCoordinateValue, rich: bool) -> SimpleValue {
    if !rich {
        return SimpleValue::Coordinates([g.latitude, g.longitude]);
    }
    SimpleValue::GlobeCoordinate(RichGlobeCoordinate {
        latitude: g.latitude,
        longitude: g.longitude,
        altitude: g.altitude,
        precision: g.precision,
        globe: g.globe.clone(),
    })
}

fn decode_time(t: &TimeValue, rich: bool, converter: &TimeConverter) -> Result<SimpleValue> {
    let time = convert_time(t, converter)?;
    if !rich {
        return Ok(time);
    }
    Ok(SimpleValue::Time(RichTime {
        time: Box::new(time),
        timezone: t.timezone,
        before: t.before,
        after: t.after,
        precision: t.precision,
        calendarmodel: t.calendarmodel.clone(),
    }))
}

/// Applies a time converter.
///
/// `epoch` yields `NaN` for dates outside the representable range.
pub(crate) fn convert_time(t: &TimeValue, converter: &TimeConverter) -> Result<SimpleValue> {
    let precision = Some(t.precision);
    Ok(match converter {
        TimeConverter::Iso => SimpleValue::String(to_iso_string(&t.time, precision)?),
        TimeConverter::Epoch => match to_epoch_millis(&t.time, precision)? {
            Some(millis) => SimpleValue::Integer(millis),
            None => SimpleValue::Number(f64::NAN),
        },
        TimeConverter::SimpleDay => SimpleValue::String(to_simple_day(&t.time, precision)?),
        TimeConverter::Raw => SimpleValue::String(t.time.clone()),
        TimeConverter::Custom(f) => SimpleValue::from_json(f(t)),
    })
}
