//! Native value representation.
use std::fmt;

use time::{Date, PrimitiveDateTime, Time};

use crate::interval::Interval;

/// A native value exchanged with the codec layer.
///
/// One variant per native kind the registry dispatches on: decoding
/// produces a `Value`, encoding consumes one.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value.
    ///
    /// Carried for callers, but no built-in encode adapter is
    /// registered for it: binding NULL is the caller's concern.
    Null,
    Bool(bool),
    /// One integer kind regardless of the wire's 2/4/8-byte width.
    Int(i64),
    Float(f64),
    /// Byte-natured text, encoded untouched.
    Bytes(Vec<u8>),
    /// Text-natured string, encoded as its UTF-8 bytes.
    Text(String),
    Date(Date),
    Time(Time),
    /// Date and time without zone.
    ///
    /// Also the result of decoding `timestamptz` wire text, the offset
    /// is discarded.
    Timestamp(PrimitiveDateTime),
    Interval(Interval),
}

impl Value {
    /// Returns the kind of this value.
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Bytes(_) => Kind::Bytes,
            Value::Text(_) => Kind::Text,
            Value::Date(_) => Kind::Date,
            Value::Time(_) => Kind::Time,
            Value::Timestamp(_) => Kind::Timestamp,
            Value::Interval(_) => Kind::Interval,
        }
    }
}

/// The default string form, what the passthrough encode behavior emits.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Bool(b) => fmt::Display::fmt(b, f),
            Value::Int(i) => f.write_str(itoa::Buffer::new().format(*i)),
            Value::Float(v) => fmt::Display::fmt(v, f),
            Value::Bytes(b) => fmt::Display::fmt(&String::from_utf8_lossy(b), f),
            Value::Text(s) => f.write_str(s),
            Value::Date(date) => fmt_date(*date, f),
            Value::Time(time) => fmt_clock(*time, f),
            Value::Timestamp(ts) => {
                fmt_date(ts.date(), f)?;
                f.write_str(" ")?;
                fmt_clock(ts.time(), f)
            }
            Value::Interval(iv) => fmt::Display::fmt(iv, f),
        }
    }
}

fn fmt_date(date: Date, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
        f,
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day(),
    )
}

/// The fraction is emitted with 6 digits and only when nonzero, which
/// keeps the integer microsecond convention of the clock parser
/// round-tripping.
fn fmt_clock(time: Time, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let (hour, minute, second, micro) = time.as_hms_micro();
    write!(f, "{hour:02}:{minute:02}:{second:02}")?;
    match micro {
        0 => Ok(()),
        _ => write!(f, ".{micro:06}"),
    }
}

/// Discriminant of [`Value`], the key of the encode dispatch index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int,
    Float,
    Bytes,
    Text,
    Date,
    Time,
    Timestamp,
    Interval,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Bytes => "bytes",
            Kind::Text => "text",
            Kind::Date => "date",
            Kind::Time => "time",
            Kind::Timestamp => "timestamp",
            Kind::Interval => "interval",
        })
    }
}

macro_rules! from {
    (<$ty:ty>$pat:pat => $body:expr) => {
        impl From<$ty> for Value {
            fn from($pat: $ty) -> Self {
                $body
            }
        }
    };
}

from!(<bool>v => Value::Bool(v));
from!(<i16>v => Value::Int(v.into()));
from!(<i32>v => Value::Int(v.into()));
from!(<i64>v => Value::Int(v));
from!(<f32>v => Value::Float(v.into()));
from!(<f64>v => Value::Float(v));
from!(<&str>v => Value::Text(v.into()));
from!(<String>v => Value::Text(v));
from!(<&[u8]>v => Value::Bytes(v.into()));
from!(<Vec<u8>>v => Value::Bytes(v));
from!(<Date>v => Value::Date(v));
from!(<Time>v => Value::Time(v));
from!(<PrimitiveDateTime>v => Value::Timestamp(v));
from!(<Interval>v => Value::Interval(v));
from!(<time::Duration>v => Value::Interval(Interval::new(v)));

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use time::{Duration, Month};

    #[test]
    fn kind_of() {
        assert_eq!(Value::Null.kind(), Kind::Null);
        assert_eq!(Value::from(1i32).kind(), Kind::Int);
        assert_eq!(Value::from(3.5f64).kind(), Kind::Float);
        assert_eq!(Value::from(None::<bool>).kind(), Kind::Null);
        assert_eq!(Value::from(Duration::days(1)).kind(), Kind::Interval);
    }

    #[test]
    fn display_forms() {
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Int(-42).to_string(), "-42");
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
        assert_eq!(Value::Text("paid".into()).to_string(), "paid");

        let date = Date::from_calendar_date(2021, Month::March, 4).unwrap();
        assert_eq!(Value::Date(date).to_string(), "2021-03-04");

        let time = Time::from_hms_micro(12, 30, 5, 250_000).unwrap();
        assert_eq!(Value::Time(time).to_string(), "12:30:05.250000");
        assert_eq!(
            Value::Timestamp(PrimitiveDateTime::new(date, time)).to_string(),
            "2021-03-04 12:30:05.250000",
        );

        let plain = Time::from_hms(10, 10, 10).unwrap();
        assert_eq!(Value::Time(plain).to_string(), "10:10:10");
    }
}
