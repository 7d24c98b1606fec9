//! Wikibase time parsing and conversion.
//!
//! Wikibase stores points in time as signed strings with arbitrarily long
//! years, e.g. `+1939-11-08T00:00:00Z` or `-13798000000-00-00T00:00:00Z`.
//! Months and days are `00` when the precision does not reach them.
//!
//! Converters:
//! - ISO 8601 string, as an ECMAScript `Date` would print it
//! - Milliseconds since Unix epoch
//! - Simple day (`YYYY-MM-DD`, `YYYY-MM` or `YYYY`, following precision)
//!
//! ECMAScript dates span ±8.64e15 ms around the epoch (about ±273,790
//! years). Outside that range `to_iso_string` falls back to a synthetic
//! string and `to_epoch_millis` returns `None`.

use crate::error::TimeParseError;

const MILLISECONDS_PER_SECOND: i128 = 1000;
const MILLISECONDS_PER_MINUTE: i128 = 60 * MILLISECONDS_PER_SECOND;
const MILLISECONDS_PER_HOUR: i128 = 60 * MILLISECONDS_PER_MINUTE;
const MILLISECONDS_PER_DAY: i128 = 24 * MILLISECONDS_PER_HOUR;
const MAX_TIME_VALUE_MS: i128 = 8_640_000_000_000_000;

/// Precision of a Wikibase time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TimePrecision {
    BillionYears = 0,
    HundredMillionYears = 1,
    TenMillionYears = 2,
    MillionYears = 3,
    HundredThousandYears = 4,
    TenThousandYears = 5,
    Millennium = 6,
    Century = 7,
    Decade = 8,
    Year = 9,
    Month = 10,
    Day = 11,
    Hour = 12,
    Minute = 13,
    Second = 14,
}

impl TimePrecision {
    /// Creates a TimePrecision from its numeric representation.
    pub fn from_u8(v: u8) -> Option<TimePrecision> {
        match v {
            0 => Some(TimePrecision::BillionYears),
            1 => Some(TimePrecision::HundredMillionYears),
            2 => Some(TimePrecision::TenMillionYears),
            3 => Some(TimePrecision::MillionYears),
            4 => Some(TimePrecision::HundredThousandYears),
            5 => Some(TimePrecision::TenThousandYears),
            6 => Some(TimePrecision::Millennium),
            7 => Some(TimePrecision::Century),
            8 => Some(TimePrecision::Decade),
            9 => Some(TimePrecision::Year),
            10 => Some(TimePrecision::Month),
            11 => Some(TimePrecision::Day),
            12 => Some(TimePrecision::Hour),
            13 => Some(TimePrecision::Minute),
            14 => Some(TimePrecision::Second),
            _ => None,
        }
    }
}

/// A parsed Wikibase time string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WikibaseTime<'a> {
    /// True when the string starts with `-`, even for year zero.
    pub negative: bool,
    /// Year digits as written, without sign.
    pub year_digits: &'a str,
    /// Signed year.
    pub year: i64,
    /// 0 when unknown.
    pub month: u32,
    /// 0 when unknown.
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

/// Calculates days since Unix epoch for a proleptic Gregorian date.
///
/// Howard Hinnant's `days_from_civil`, widened so that any `i64` year fits.
fn date_to_days(year: i64, month: u32, day: u32) -> i128 {
    let y = year as i128 - if month <= 2 { 1 } else { 0 };
    let m = if month <= 2 {
        month as i128 + 9
    } else {
        month as i128 - 3
    };

    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400; // year of era
    let doy = (153 * m + 2) / 5 + day as i128 - 1; // day of year
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // day of era

    era * 146097 + doe - 719468
}

/// Inverse of [`date_to_days`] (Hinnant's `civil_from_days`).
fn days_to_date(days: i128) -> (i64, u32, u32) {
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = z - era * 146097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if m <= 2 { y + 1 } else { y };
    (year as i64, m as u32, d as u32)
}

fn parse_field(time: &str, digits: &str, what: &'static str) -> Result<u32, TimeParseError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeParseError::new(time, what));
    }
    digits.parse().map_err(|_| TimeParseError::new(time, what))
}

/// Parses a Wikibase time string (`[+-]Y+-MM-DDTHH:MM:SSZ`).
pub fn parse_wikibase_time(time: &str) -> Result<WikibaseTime<'_>, TimeParseError> {
    let negative = match time.as_bytes().first() {
        Some(b'+') => false,
        Some(b'-') => true,
        _ => return Err(TimeParseError::new(time, "missing sign")),
    };

    let (date, clock) = time[1..]
        .split_once('T')
        .ok_or_else(|| TimeParseError::new(time, "missing time separator"))?;

    let mut date_parts = date.splitn(3, '-');
    let year_digits = date_parts.next().unwrap_or_default();
    let month = parse_field(time, date_parts.next().unwrap_or_default(), "invalid month")?;
    let day = parse_field(time, date_parts.next().unwrap_or_default(), "invalid day")?;

    if year_digits.is_empty() || !year_digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeParseError::new(time, "invalid year"));
    }
    let magnitude: i64 = year_digits
        .parse()
        .map_err(|_| TimeParseError::new(time, "year out of range"))?;
    let year = if negative { -magnitude } else { magnitude };

    // Validate month and day; 00 marks a field below the precision.
    // Julian dates such as 1700-02-29 are stored as written, so the day is
    // only bounded by 31 and rolls over in the calendar arithmetic.
    if month > 12 {
        return Err(TimeParseError::new(time, "invalid month"));
    }
    if month == 0 && day != 0 {
        return Err(TimeParseError::new(time, "day without month"));
    }
    if day > 31 {
        return Err(TimeParseError::new(time, "invalid day"));
    }

    let clock = clock.strip_suffix('Z').unwrap_or(clock);
    let mut clock_parts = clock.splitn(3, ':');
    let hour = parse_field(time, clock_parts.next().unwrap_or_default(), "invalid hours")?;
    let minute = parse_field(time, clock_parts.next().unwrap_or_default(), "invalid minutes")?;
    let second = parse_field(time, clock_parts.next().unwrap_or_default(), "invalid seconds")?;

    // Validate ranges
    if hour > 23 {
        return Err(TimeParseError::new(time, "invalid hours"));
    }
    if minute > 59 {
        return Err(TimeParseError::new(time, "invalid minutes"));
    }
    if second > 59 {
        return Err(TimeParseError::new(time, "invalid seconds"));
    }

    Ok(WikibaseTime {
        negative,
        year_digits,
        year,
        month,
        day,
        hour,
        minute,
        second,
    })
}

impl WikibaseTime<'_> {
    /// Replaces unknown (`00`) months and days with `01` and blanks every
    /// field finer than `precision`.
    pub fn normalized(mut self, precision: Option<TimePrecision>) -> Self {
        if self.month == 0 {
            self.month = 1;
        }
        if self.day == 0 {
            self.day = 1;
        }
        if let Some(precision) = precision {
            if precision < TimePrecision::Month {
                self.month = 1;
            }
            if precision < TimePrecision::Day {
                self.day = 1;
            }
            if precision < TimePrecision::Hour {
                self.hour = 0;
            }
            if precision < TimePrecision::Minute {
                self.minute = 0;
            }
            if precision < TimePrecision::Second {
                self.second = 0;
            }
        }
        self
    }

    /// Milliseconds since the epoch, or `None` outside the ECMAScript range.
    pub fn epoch_millis(&self) -> Option<i64> {
        let days = date_to_days(self.year, self.month.max(1), self.day.max(1));
        let millis = days * MILLISECONDS_PER_DAY
            + self.hour as i128 * MILLISECONDS_PER_HOUR
            + self.minute as i128 * MILLISECONDS_PER_MINUTE
            + self.second as i128 * MILLISECONDS_PER_SECOND;
        if millis.abs() > MAX_TIME_VALUE_MS {
            return None;
        }
        i64::try_from(millis).ok()
    }

    /// Moves days past the end of their month into the next one, so that
    /// `1700-02-29` reads as `1700-03-01` on the proleptic Gregorian calendar.
    fn rolled_over(mut self) -> Self {
        let (year, month, day) = days_to_date(date_to_days(self.year, self.month, self.day));
        self.year = year;
        self.month = month;
        self.day = day;
        self
    }

    fn signed_year(&self, min_digits: usize) -> String {
        let sign = if self.negative { "-" } else { "" };
        format!("{sign}{:0width$}", self.year.unsigned_abs(), width = min_digits)
    }

    /// Finest field the string itself carries (`00` fields are unknown).
    fn written_precision(&self) -> TimePrecision {
        if self.month == 0 {
            TimePrecision::Year
        } else if self.day == 0 {
            TimePrecision::Month
        } else {
            TimePrecision::Day
        }
    }
}

// =====================
// Converters
// =====================

/// Formats a Wikibase time as an ISO 8601 UTC timestamp.
///
/// Within the ECMAScript date range the output matches `Date#toISOString`
/// (`1939-11-08T00:00:00.000Z`, or `-000050-01-01T00:00:00.000Z` for years
/// outside 0..=9999). Beyond it, the original year is kept verbatim:
/// `-13798000000-01-01T00:00:00Z`.
pub fn to_iso_string(time: &str, precision: Option<u8>) -> Result<String, TimeParseError> {
    let parsed = parse_wikibase_time(time)?.normalized(precision.and_then(TimePrecision::from_u8));

    if parsed.epoch_millis().is_none() {
        let sign = if parsed.negative { '-' } else { '+' };
        return Ok(format!(
            "{}{}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            sign,
            parsed.year_digits,
            parsed.month,
            parsed.day,
            parsed.hour,
            parsed.minute,
            parsed.second
        ));
    }

    let parsed = parsed.rolled_over();
    let year = if (0..=9999).contains(&parsed.year) {
        format!("{:04}", parsed.year)
    } else {
        format!("{:+07}", parsed.year)
    };
    Ok(format!(
        "{}-{:02}-{:02}T{:02}:{:02}:{:02}.000Z",
        year, parsed.month, parsed.day, parsed.hour, parsed.minute, parsed.second
    ))
}

/// Converts a Wikibase time to milliseconds since the Unix epoch.
///
/// Returns `Ok(None)` when the date lies outside the ECMAScript range; such
/// dates have no faithful epoch representation.
pub fn to_epoch_millis(time: &str, precision: Option<u8>) -> Result<Option<i64>, TimeParseError> {
    let parsed = parse_wikibase_time(time)?.normalized(precision.and_then(TimePrecision::from_u8));
    Ok(parsed.epoch_millis())
}

/// Formats a Wikibase time as `YYYY-MM-DD`, `YYYY-MM` or `YYYY`.
///
/// The coarser of `precision` and the fields present in the string decides
/// the shape. Years too large for a calendar date come out bare.
pub fn to_simple_day(time: &str, precision: Option<u8>) -> Result<String, TimeParseError> {
    let raw = parse_wikibase_time(time)?;
    let mut granularity = raw.written_precision();
    if let Some(p) = precision.and_then(TimePrecision::from_u8) {
        granularity = granularity.min(p);
    }

    let parsed = raw.normalized(Some(granularity));
    if parsed.epoch_millis().is_none() {
        return Ok(parsed.signed_year(1));
    }

    let year = parsed.signed_year(4);
    Ok(match granularity {
        g if g < TimePrecision::Month => year,
        TimePrecision::Month => format!("{}-{:02}", year, parsed.month),
        _ => format!("{}-{:02}-{:02}", year, parsed.month, parsed.day),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_basic() {
        let t = parse_wikibase_time("+1939-11-08T00:00:00Z").unwrap();
        assert!(!t.negative);
        assert_eq!((t.year, t.month, t.day), (1939, 11, 8));
        assert_eq!((t.hour, t.minute, t.second), (0, 0, 0));

        let t = parse_wikibase_time("-13798000000-00-00T00:00:00Z").unwrap();
        assert!(t.negative);
        assert_eq!(t.year, -13_798_000_000);
        assert_eq!(t.year_digits, "13798000000");
        assert_eq!((t.month, t.day), (0, 0));
    }

    #[test]
    fn test_invalid_times() {
        assert!(parse_wikibase_time("2015-06-11T00:00:00Z").is_err()); // no sign
        assert!(parse_wikibase_time("+2015-06-11").is_err()); // no clock
        assert!(parse_wikibase_time("+2015-13-01T00:00:00Z").is_err()); // invalid month
        assert!(parse_wikibase_time("+2015-02-32T00:00:00Z").is_err()); // invalid day
        assert!(parse_wikibase_time("+2015-00-05T00:00:00Z").is_err()); // day without month
        assert!(parse_wikibase_time("+2015-06-11T24:00:00Z").is_err()); // invalid hour
        assert!(parse_wikibase_time("+20x5-06-11T00:00:00Z").is_err());
        assert!(parse_wikibase_time("").is_err());
    }

    #[test]
    fn test_iso() {
        assert_eq!(
            to_iso_string("+2015-06-11T00:00:00Z", Some(11)).unwrap(),
            "2015-06-11T00:00:00.000Z"
        );
        assert_eq!(
            to_iso_string("+1990-00-00T00:00:00Z", Some(9)).unwrap(),
            "1990-01-01T00:00:00.000Z"
        );
        // Year precision hides a stored month and day
        assert_eq!(
            to_iso_string("+1990-05-17T00:00:00Z", Some(9)).unwrap(),
            "1990-01-01T00:00:00.000Z"
        );
        assert_eq!(
            to_iso_string("-0050-00-00T00:00:00Z", Some(9)).unwrap(),
            "-000050-01-01T00:00:00.000Z"
        );
        assert_eq!(
            to_iso_string("+12000-03-01T00:00:00Z", Some(11)).unwrap(),
            "+012000-03-01T00:00:00.000Z"
        );
        assert_eq!(
            to_iso_string("-13798000000-00-00T00:00:00Z", Some(3)).unwrap(),
            "-13798000000-01-01T00:00:00Z"
        );
    }

    #[test]
    fn test_epoch() {
        assert_eq!(
            to_epoch_millis("+2015-06-11T00:00:00Z", Some(11)).unwrap(),
            Some(1_433_980_800_000)
        );
        assert_eq!(
            to_epoch_millis("+1939-11-08T00:00:00Z", Some(11)).unwrap(),
            Some(-951_436_800_000)
        );
        assert_eq!(to_epoch_millis("+1970-01-01T00:00:00Z", None).unwrap(), Some(0));
        assert_eq!(
            to_epoch_millis("-13798000000-00-00T00:00:00Z", Some(3)).unwrap(),
            None
        );
    }

    #[test]
    fn test_simple_day() {
        assert_eq!(
            to_simple_day("+1939-11-08T00:00:00Z", Some(11)).unwrap(),
            "1939-11-08"
        );
        assert_eq!(to_simple_day("+1990-05-00T00:00:00Z", Some(10)).unwrap(), "1990-05");
        assert_eq!(to_simple_day("+1990-05-17T00:00:00Z", Some(9)).unwrap(), "1990");
        // Without a precision the 00 fields decide
        assert_eq!(to_simple_day("+1990-00-00T00:00:00Z", None).unwrap(), "1990");
        assert_eq!(to_simple_day("-0050-00-00T00:00:00Z", Some(9)).unwrap(), "-0050");
        assert_eq!(to_simple_day("-0050-03-15T00:00:00Z", Some(11)).unwrap(), "-0050-03-15");
        assert_eq!(
            to_simple_day("-13798000000-00-00T00:00:00Z", Some(3)).unwrap(),
            "-13798000000"
        );
    }

    #[test]
    fn test_julian_leap_day() {
        // 1700 is a leap year only on the Julian calendar
        let time = "+1700-02-29T00:00:00Z";
        assert_eq!(parse_wikibase_time(time).unwrap().day, 29);
        assert_eq!(
            to_iso_string(time, Some(11)).unwrap(),
            "1700-03-01T00:00:00.000Z"
        );
        assert_eq!(
            to_epoch_millis(time, Some(11)).unwrap(),
            to_epoch_millis("+1700-03-01T00:00:00Z", Some(11)).unwrap()
        );
        assert_eq!(to_simple_day(time, Some(11)).unwrap(), "1700-02-29");

        assert_eq!(
            to_iso_string("+2015-04-31T00:00:00Z", Some(11)).unwrap(),
            "2015-05-01T00:00:00.000Z"
        );
    }

    #[test]
    fn test_precision_from_u8() {
        assert_eq!(TimePrecision::from_u8(11), Some(TimePrecision::Day));
        assert_eq!(TimePrecision::from_u8(0), Some(TimePrecision::BillionYears));
        assert_eq!(TimePrecision::from_u8(15), None);
        assert!(TimePrecision::Year < TimePrecision::Month);
    }

    proptest! {
        #[test]
        fn prop_days_roundtrip(days in -100_000_000i128..100_000_000i128) {
            let (year, month, day) = days_to_date(days);
            prop_assert_eq!(date_to_days(year, month, day), days);
        }

        #[test]
        fn prop_iso_epoch_agree(year in -270_000i64..270_000, month in 1u32..=12, day in 1u32..=28) {
            let sign = if year < 0 { '-' } else { '+' };
            let time = format!("{}{:04}-{:02}-{:02}T00:00:00Z", sign, year.unsigned_abs(), month, day);
            let millis = to_epoch_millis(&time, Some(11)).unwrap().unwrap();
            let (y, m, d) = days_to_date(millis as i128 / MILLISECONDS_PER_DAY);
            prop_assert_eq!((y, m, d), (year, month, day));
            prop_assert!(to_iso_string(&time, Some(11)).unwrap().ends_with(".000Z"));
        }
    }
}
