//! Ion timestamps.
//!
//! An Ion timestamp is more than an instant: it also carries the precision it
//! was written with and its local offset. `2007-02-23T12:14Z` and
//! `2007-02-23T12:14:00Z` denote the same instant but are different values.
//!
//! The unknown offset (`-00:00`) is represented as `offset() == None`. Dates
//! without a time component always have an unknown offset.

use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    Timelike, Utc,
};

const MAX_OFFSET_MINUTES: i32 = 24 * 60 - 1;
const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// The precision a timestamp was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precision {
    /// `2007T`
    Year,
    /// `2007-02T`
    Month,
    /// `2007-02-23`
    Day,
    /// `2007-02-23T12:14Z`
    Minute,
    /// `2007-02-23T12:14:33Z`
    Second,
    /// `2007-02-23T12:14:33.079Z`, with the number of fractional digits (1..=9).
    Fractional(u8),
}

impl Precision {
    /// Whether a timestamp of this precision carries a time of day (and so an offset).
    pub fn has_time(&self) -> bool {
        *self >= Precision::Minute
    }
}

/// Error building or parsing a [`Timestamp`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// The text is not a timestamp.
    InvalidSyntax { input: String, position: usize },
    /// A field is outside its allowed range.
    FieldOutOfRange { field: &'static str, value: i64 },
    /// The year/month/day combination does not exist.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// More than nine fractional digits, or nanoseconds not representable at the given digits.
    InvalidFraction { nanos: u32, digits: u8 },
    /// Offsets are only meaningful for timestamps with a time of day.
    OffsetWithoutTime,
}

impl fmt::Display for TimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampError::InvalidSyntax { input, position } => {
                write!(f, "invalid timestamp '{}' at position {}", input, position)
            }
            TimestampError::FieldOutOfRange { field, value } => {
                write!(f, "timestamp {} out of range: {}", field, value)
            }
            TimestampError::InvalidDate { year, month, day } => {
                write!(f, "invalid date {:04}-{:02}-{:02}", year, month, day)
            }
            TimestampError::InvalidFraction { nanos, digits } => {
                write!(
                    f,
                    "fraction of {} nanoseconds cannot be written with {} digits",
                    nanos, digits
                )
            }
            TimestampError::OffsetWithoutTime => {
                write!(f, "offset given for a timestamp without a time of day")
            }
        }
    }
}

impl std::error::Error for TimestampError {}

/// An Ion timestamp: local date-time, precision, and offset.
///
/// Fields below the precision are normalized (month and day to 1, time to
/// midnight), so derived equality is Ion equality: same instant, same
/// precision, same offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Timestamp {
    local: NaiveDateTime,
    precision: Precision,
    /// Minutes east of UTC. `None` is the unknown offset.
    offset: Option<i16>,
}

impl Timestamp {
    /// A year-precision timestamp (`2007T`).
    pub fn with_year(year: i32) -> Result<Self, TimestampError> {
        Self::build(year, 1, 1, 0, 0, 0, Precision::Year, None)
    }

    /// A month-precision timestamp (`2007-02T`).
    pub fn with_month(year: i32, month: u32) -> Result<Self, TimestampError> {
        Self::build(year, month, 1, 0, 0, 0, Precision::Month, None)
    }

    /// A day-precision timestamp (`2007-02-23`).
    pub fn with_date(year: i32, month: u32, day: u32) -> Result<Self, TimestampError> {
        Self::build(year, month, day, 0, 0, 0, Precision::Day, None)
    }

    /// A minute-precision timestamp (`2007-02-23T12:14Z`).
    pub fn with_minute(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        offset: Option<i16>,
    ) -> Result<Self, TimestampError> {
        Self::build(year, month, day, hour, minute, 0, Precision::Minute, offset)
    }

    /// A second-precision timestamp (`2007-02-23T12:14:33Z`).
    #[allow(clippy::too_many_arguments)]
    pub fn with_second(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        offset: Option<i16>,
    ) -> Result<Self, TimestampError> {
        Self::build(
            year,
            month,
            day,
            hour,
            minute,
            second,
            Precision::Second,
            offset,
        )
    }

    /// Add fractional seconds to a second-precision timestamp.
    ///
    /// `nanos` must be expressible with `digits` decimal digits, e.g. 79 ms
    /// is `with_fraction(79_000_000, 3)`.
    pub fn with_fraction(mut self, nanos: u32, digits: u8) -> Result<Self, TimestampError> {
        if self.precision < Precision::Second {
            return Err(TimestampError::InvalidFraction { nanos, digits });
        }
        if !(1..=9).contains(&digits)
            || nanos >= NANOS_PER_SECOND
            || nanos % 10u32.pow(9 - digits as u32) != 0
        {
            return Err(TimestampError::InvalidFraction { nanos, digits });
        }
        self.local = self
            .local
            .with_nanosecond(nanos)
            .ok_or(TimestampError::InvalidFraction { nanos, digits })?;
        self.precision = Precision::Fractional(digits);
        Ok(self)
    }

    #[allow(clippy::too_many_arguments)]
    fn build(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        precision: Precision,
        offset: Option<i16>,
    ) -> Result<Self, TimestampError> {
        if !(1..=9999).contains(&year) {
            return Err(TimestampError::FieldOutOfRange {
                field: "year",
                value: year as i64,
            });
        }
        if !(1..=12).contains(&month) {
            return Err(TimestampError::FieldOutOfRange {
                field: "month",
                value: month as i64,
            });
        }
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(TimestampError::InvalidDate { year, month, day })?;
        if hour > 23 {
            return Err(TimestampError::FieldOutOfRange {
                field: "hour",
                value: hour as i64,
            });
        }
        if minute > 59 {
            return Err(TimestampError::FieldOutOfRange {
                field: "minute",
                value: minute as i64,
            });
        }
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or(
            TimestampError::FieldOutOfRange {
                field: "second",
                value: second as i64,
            },
        )?;
        if let Some(offset) = offset {
            if !precision.has_time() {
                return Err(TimestampError::OffsetWithoutTime);
            }
            if (offset as i32).abs() > MAX_OFFSET_MINUTES {
                return Err(TimestampError::FieldOutOfRange {
                    field: "offset",
                    value: offset as i64,
                });
            }
        }
        Ok(Timestamp {
            local: date.and_time(time),
            precision,
            offset,
        })
    }

    /// Year (1..=9999).
    pub fn year(&self) -> i32 {
        self.local.year()
    }

    /// Month (1..=12). 1 below month precision.
    pub fn month(&self) -> u32 {
        self.local.month()
    }

    /// Day of month. 1 below day precision.
    pub fn day(&self) -> u32 {
        self.local.day()
    }

    /// Local hour.
    pub fn hour(&self) -> u32 {
        self.local.hour()
    }

    /// Local minute.
    pub fn minute(&self) -> u32 {
        self.local.minute()
    }

    /// Second.
    pub fn second(&self) -> u32 {
        self.local.second()
    }

    /// Fractional seconds in nanoseconds.
    pub fn nanosecond(&self) -> u32 {
        self.local.nanosecond()
    }

    /// The precision this timestamp was written with.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Offset in minutes east of UTC; `None` for the unknown offset.
    pub fn offset(&self) -> Option<i16> {
        self.offset
    }

    /// The instant this timestamp denotes. The unknown offset is treated as UTC.
    pub fn to_datetime(&self) -> DateTime<FixedOffset> {
        let minutes = self.offset.unwrap_or(0) as i32;
        let offset = FixedOffset::east_opt(minutes * 60).unwrap_or(Utc.fix());
        let utc = self.local - Duration::minutes(minutes as i64);
        DateTime::from_naive_utc_and_offset(utc, offset)
    }
}

impl TryFrom<DateTime<FixedOffset>> for Timestamp {
    type Error = TimestampError;

    /// Second precision, or nanosecond precision if there is a fractional part.
    ///
    /// Fails for offsets that are not whole minutes and for years outside 1..=9999.
    fn try_from(value: DateTime<FixedOffset>) -> Result<Self, Self::Error> {
        let offset_seconds = value.offset().local_minus_utc();
        if offset_seconds % 60 != 0 {
            return Err(TimestampError::FieldOutOfRange {
                field: "offset",
                value: offset_seconds as i64,
            });
        }
        let local = value.naive_local();
        let ts = Timestamp::with_second(
            local.year(),
            local.month(),
            local.day(),
            local.hour(),
            local.minute(),
            local.second(),
            Some((offset_seconds / 60) as i16),
        )?;
        // leap seconds are carried in the nanosecond field
        match value.nanosecond() % NANOS_PER_SECOND {
            0 => Ok(ts),
            nanos => ts.with_fraction(nanos, 9),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.precision {
            Precision::Year => return write!(f, "{:04}T", self.year()),
            Precision::Month => return write!(f, "{:04}-{:02}T", self.year(), self.month()),
            _ => write!(
                f,
                "{:04}-{:02}-{:02}",
                self.year(),
                self.month(),
                self.day()
            )?,
        }
        if !self.precision.has_time() {
            return Ok(());
        }
        write!(f, "T{:02}:{:02}", self.hour(), self.minute())?;
        if self.precision >= Precision::Second {
            write!(f, ":{:02}", self.second())?;
        }
        if let Precision::Fractional(digits) = self.precision {
            let nanos = format!("{:09}", self.nanosecond());
            write!(f, ".{}", &nanos[..digits as usize])?;
        }
        match self.offset {
            None => f.write_str("-00:00"),
            Some(0) => f.write_str("Z"),
            Some(minutes) => {
                let sign = if minutes < 0 { '-' } else { '+' };
                let abs = minutes.unsigned_abs();
                write!(f, "{}{:02}:{:02}", sign, abs / 60, abs % 60)
            }
        }
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    /// Parse an Ion text timestamp.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cur = Cursor::new(s);

        let year = cur.digits(4)? as i32;
        if cur.eat(b'T') {
            cur.finish()?;
            return Timestamp::with_year(year);
        }
        cur.expect(b'-')?;
        let month = cur.digits(2)?;
        if cur.eat(b'T') {
            cur.finish()?;
            return Timestamp::with_month(year, month);
        }
        cur.expect(b'-')?;
        let day = cur.digits(2)?;
        if cur.at_end() || (cur.eat(b'T') && cur.at_end()) {
            return Timestamp::with_date(year, month, day);
        }

        let hour = cur.digits(2)?;
        cur.expect(b':')?;
        let minute = cur.digits(2)?;
        if !cur.eat(b':') {
            let offset = cur.offset()?;
            cur.finish()?;
            return Timestamp::with_minute(year, month, day, hour, minute, offset);
        }
        let second = cur.digits(2)?;
        let fraction = if cur.eat(b'.') {
            Some(cur.fraction()?)
        } else {
            None
        };
        let offset = cur.offset()?;
        cur.finish()?;

        let ts = Timestamp::with_second(year, month, day, hour, minute, second, offset)?;
        match fraction {
            Some((nanos, digits)) => ts.with_fraction(nanos, digits),
            None => Ok(ts),
        }
    }
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn error(&self) -> TimestampError {
        TimestampError::InvalidSyntax {
            input: self.input.to_string(),
            position: self.pos,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, byte: u8) -> Result<(), TimestampError> {
        if self.eat(byte) {
            Ok(())
        } else {
            Err(self.error())
        }
    }

    fn finish(&self) -> Result<(), TimestampError> {
        if self.at_end() {
            Ok(())
        } else {
            Err(self.error())
        }
    }

    /// Exactly `count` ASCII digits.
    fn digits(&mut self, count: usize) -> Result<u32, TimestampError> {
        let mut value = 0u32;
        for _ in 0..count {
            match self.peek() {
                Some(b @ b'0'..=b'9') => {
                    value = value * 10 + (b - b'0') as u32;
                    self.pos += 1;
                }
                _ => return Err(self.error()),
            }
        }
        Ok(value)
    }

    /// Fractional seconds as (nanos, digits).
    fn fraction(&mut self) -> Result<(u32, u8), TimestampError> {
        let start = self.pos;
        while let Some(b'0'..=b'9') = self.peek() {
            self.pos += 1;
        }
        let text = &self.input[start..self.pos];
        if text.is_empty() {
            return Err(self.error());
        }
        if text.len() > 9 {
            return Err(TimestampError::InvalidFraction {
                nanos: 0,
                digits: text.len().min(u8::MAX as usize) as u8,
            });
        }
        let digits = text.len() as u8;
        let mut nanos: u32 = text.parse().map_err(|_| self.error())?;
        nanos *= 10u32.pow(9 - digits as u32);
        Ok((nanos, digits))
    }

    /// `Z`, `+hh:mm` or `-hh:mm`, where `-00:00` is the unknown offset.
    fn offset(&mut self) -> Result<Option<i16>, TimestampError> {
        if self.eat(b'Z') {
            return Ok(Some(0));
        }
        let negative = match self.peek() {
            Some(b'+') => false,
            Some(b'-') => true,
            _ => return Err(self.error()),
        };
        self.pos += 1;
        let hours = self.digits(2)?;
        self.expect(b':')?;
        let minutes = self.digits(2)?;
        if hours > 23 || minutes > 59 {
            return Err(TimestampError::FieldOutOfRange {
                field: "offset",
                value: (hours * 60 + minutes) as i64,
            });
        }
        let total = (hours * 60 + minutes) as i16;
        Ok(match (negative, total) {
            (true, 0) => None,
            (true, total) => Some(-total),
            (false, total) => Some(total),
        })
    }
}
