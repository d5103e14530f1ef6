//! Built-in type codecs.
//!
//! Each [`Codec`] bundles the oids it decodes from, the native kinds it
//! encodes, and the conversion functions. [`BUILTIN`] is the explicit
//! registration list walked by [`Registry::builtin`], in order, so the
//! last codec claiming an oid owns it.
//!
//! [`Registry::builtin`]: crate::Registry::builtin
use bytes::Bytes;
use std::fmt;

use time::{
    Date, Duration, PrimitiveDateTime, Time,
    format_description::{BorrowedFormatItem as I, Component as C, modifier},
};

use crate::{
    encode::Encoded,
    error::DecodeError,
    interval::Interval,
    postgres::{Oid, oid},
    value::{Kind, Value},
};

/// Decode wire text into a native value.
pub type DecodeFn = fn(&str) -> Result<Value, DecodeError>;

/// Encode a native value into its wire payload and oid tag.
///
/// Infallible: dispatch already guarantees the value is of a kind the
/// codec registered for.
pub type EncodeFn = fn(&Value) -> Encoded;

/// A postgres type codec.
///
/// Fields are public so callers can build descriptors for types the
/// crate does not ship and hand them to [`Registry::register`].
///
/// [`Registry::register`]: crate::Registry::register
#[derive(Clone, Copy)]
pub struct Codec {
    /// Diagnostic name.
    pub name: &'static str,
    /// Oids this codec decodes. Empty keeps it out of decode dispatch.
    pub oids: &'static [Oid],
    /// Native kinds this codec encodes. Empty keeps it out of encode
    /// dispatch.
    pub kinds: &'static [Kind],
    pub decode: DecodeFn,
    pub encode: EncodeFn,
}

impl fmt::Debug for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec")
            .field("name", &self.name)
            .field("oids", &self.oids)
            .field("kinds", &self.kinds)
            .finish_non_exhaustive()
    }
}

/// Every codec registered by [`Registry::builtin`], in registration
/// order.
///
/// [`Registry::builtin`]: crate::Registry::builtin
pub const BUILTIN: &[Codec] = &[
    INTEGER,
    ROWID,
    FLOAT,
    BYTES,
    TEXT,
    DATE,
    TIMESTAMP,
    TIMESTAMPTZ,
    TIME,
    INTERVAL,
    BOOLEAN,
];

/// `int2`/`int4`/`int8` wire text, one native integer kind.
///
/// Encodes with the oid left unspecified so the server infers the
/// exact width.
pub const INTEGER: Codec = Codec {
    name: "integer",
    oids: &[oid::INT8, oid::INT2, oid::INT4],
    kinds: &[Kind::Int],
    decode: int_decode,
    encode: int_encode,
};

/// Row object identifier, shares the integer conversions.
pub const ROWID: Codec = Codec {
    name: "rowid",
    oids: &[oid::OID],
    kinds: &[],
    decode: int_decode,
    encode: int_encode,
};

pub const FLOAT: Codec = Codec {
    name: "float",
    oids: &[oid::FLOAT4, oid::FLOAT8],
    kinds: &[Kind::Float],
    decode: float_decode,
    encode: float_encode,
};

/// Byte-natured text, encode only: the payload goes out untouched with
/// the oid left unspecified.
pub const BYTES: Codec = Codec {
    name: "bytes",
    oids: &[],
    kinds: &[Kind::Bytes],
    decode: text_decode,
    encode: bytes_encode,
};

/// Text-natured string, owns decode for `text`/`varchar` and is the
/// stock decode fallback for unknown oids.
pub const TEXT: Codec = Codec {
    name: "text",
    oids: &[oid::TEXT, oid::VARCHAR],
    kinds: &[Kind::Text],
    decode: text_decode,
    encode: text_encode,
};

pub const DATE: Codec = Codec {
    name: "date",
    oids: &[oid::DATE],
    kinds: &[Kind::Date],
    decode: date_decode,
    encode: date_encode,
};

pub const TIMESTAMP: Codec = Codec {
    name: "timestamp",
    oids: &[oid::TIMESTAMP],
    kinds: &[Kind::Timestamp],
    decode: timestamp_decode,
    encode: timestamp_encode,
};

/// Decode only: a `+HH` offset is stripped and discarded before the
/// remainder is handed to the timestamp parser. A `-HH` offset is not
/// stripped and fails the layout parse.
pub const TIMESTAMPTZ: Codec = Codec {
    name: "timestamptz",
    oids: &[oid::TIMESTAMPTZ],
    kinds: &[],
    decode: timestamptz_decode,
    encode: timestamptz_encode,
};

pub const TIME: Codec = Codec {
    name: "time",
    oids: &[oid::TIME],
    kinds: &[Kind::Time],
    decode: time_decode,
    encode: time_encode,
};

pub const INTERVAL: Codec = Codec {
    name: "interval",
    oids: &[oid::INTERVAL],
    kinds: &[Kind::Interval],
    decode: interval_decode,
    encode: interval_encode,
};

/// Decode accepts exactly `t`/`f`, case-insensitive. Encode keeps the
/// default stringification, so an encoded `true`/`false` does not
/// decode back.
pub const BOOLEAN: Codec = Codec {
    name: "boolean",
    oids: &[oid::BOOL],
    kinds: &[Kind::Bool],
    decode: bool_decode,
    encode: bool_encode,
};

// ===== Decode =====

fn int_decode(text: &str) -> Result<Value, DecodeError> {
    Ok(Value::Int(text.parse()?))
}

fn float_decode(text: &str) -> Result<Value, DecodeError> {
    Ok(Value::Float(text.parse()?))
}

fn text_decode(text: &str) -> Result<Value, DecodeError> {
    Ok(Value::Text(text.into()))
}

fn bool_decode(text: &str) -> Result<Value, DecodeError> {
    match text {
        t if t.eq_ignore_ascii_case("t") => Ok(Value::Bool(true)),
        f if f.eq_ignore_ascii_case("f") => Ok(Value::Bool(false)),
        other => Err(DecodeError::Bool(other.into())),
    }
}

const DATE_DESCRIPTION: &[I<'_>] = &[
    I::Component(C::Year(modifier::Year::default())),
    I::Literal(b"-"),
    I::Component(C::Month(modifier::Month::default())),
    I::Literal(b"-"),
    I::Component(C::Day(modifier::Day::default())),
];

const TIMESTAMP_DESCRIPTION: &[I<'_>] = &[
    I::Component(C::Year(modifier::Year::default())),
    I::Literal(b"-"),
    I::Component(C::Month(modifier::Month::default())),
    I::Literal(b"-"),
    I::Component(C::Day(modifier::Day::default())),
    I::Literal(b" "),
    I::Component(C::Hour(modifier::Hour::default())),
    I::Literal(b":"),
    I::Component(C::Minute(modifier::Minute::default())),
    I::Literal(b":"),
    I::Component(C::Second(modifier::Second::default())),
];

/// Selected when the wire text carries a `.`.
const TIMESTAMP_MICRO_DESCRIPTION: &[I<'_>] = &[
    I::Component(C::Year(modifier::Year::default())),
    I::Literal(b"-"),
    I::Component(C::Month(modifier::Month::default())),
    I::Literal(b"-"),
    I::Component(C::Day(modifier::Day::default())),
    I::Literal(b" "),
    I::Component(C::Hour(modifier::Hour::default())),
    I::Literal(b":"),
    I::Component(C::Minute(modifier::Minute::default())),
    I::Literal(b":"),
    I::Component(C::Second(modifier::Second::default())),
    I::Literal(b"."),
    I::Component(C::Subsecond(modifier::Subsecond::default())),
];

fn date_decode(text: &str) -> Result<Value, DecodeError> {
    Ok(Value::Date(Date::parse(text, DATE_DESCRIPTION)?))
}

fn parse_timestamp(text: &str) -> Result<PrimitiveDateTime, DecodeError> {
    let description = match text.contains('.') {
        true => TIMESTAMP_MICRO_DESCRIPTION,
        false => TIMESTAMP_DESCRIPTION,
    };
    Ok(PrimitiveDateTime::parse(text, description)?)
}

fn timestamp_decode(text: &str) -> Result<Value, DecodeError> {
    Ok(Value::Timestamp(parse_timestamp(text)?))
}

fn timestamptz_decode(text: &str) -> Result<Value, DecodeError> {
    // TODO: apply the offset instead of discarding it
    let naive = match text.split_once('+') {
        Some((body, _offset)) => body,
        None => text,
    };
    Ok(Value::Timestamp(parse_timestamp(naive)?))
}

/// Clock parser shared by the time and interval codecs.
///
/// The fractional tail is an integer microsecond count. Without any
/// colon the clock fields all default to zero, so a bare fraction or
/// an empty string is a valid midnight.
fn parse_clock(text: &str) -> Result<Time, DecodeError> {
    let (clock, micro) = match text.split_once('.') {
        Some((clock, fraction)) => (clock, fraction.parse::<u32>()?),
        None => (text, 0),
    };

    if !clock.contains(':') {
        return Ok(Time::from_hms_micro(0, 0, 0, micro)?);
    }

    let mut parts = clock.split(':');
    let (Some(hour), Some(minute), Some(second), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(DecodeError::Clock(clock.into()));
    };

    Ok(Time::from_hms_micro(
        hour.parse()?,
        minute.parse()?,
        second.parse()?,
        micro,
    )?)
}

fn time_decode(text: &str) -> Result<Value, DecodeError> {
    Ok(Value::Time(parse_clock(text)?))
}

/// Peel a `" year"`/`" mon"`/`" day"` token: the numeric prefix before
/// the anchor, resuming after the first space past it so singular and
/// plural spellings both work. An absent anchor leaves the text
/// untouched.
fn take_unit<'a>(text: &'a str, anchor: &'static str) -> Result<(i64, &'a str), DecodeError> {
    let Some(at) = text.find(anchor) else {
        return Ok((0, text));
    };
    let count = text[..at].parse()?;
    let rest = match text[at + anchor.len()..].split_once(' ') {
        Some((_, rest)) => rest,
        None => "",
    };
    Ok((count, rest))
}

fn interval_decode(text: &str) -> Result<Value, DecodeError> {
    let (years, rest) = take_unit(text, " year")?;
    let (months, rest) = take_unit(rest, " mon")?;
    let (days, rest) = take_unit(rest, " day")?;
    let clock = parse_clock(rest)?;

    // Years fold to 365 days and months to 31. Lossy, the wire text
    // kept on the value carries the exact form.
    let days = 365 * years as i128 + 31 * months as i128 + days as i128;
    let (hour, minute, second, micro) = clock.as_hms_micro();
    let micros = days * 86_400_000_000
        + (hour as i128 * 3600 + minute as i128 * 60 + second as i128) * 1_000_000
        + micro as i128;

    // `Duration` caps out around 292 thousand years, saturate instead
    // of overflowing.
    let micros = micros.clamp(i64::MIN as i128, i64::MAX as i128) as i64;
    Ok(Value::Interval(Interval::with_original(
        Duration::microseconds(micros),
        text,
    )))
}

// ===== Encode =====

/// The default string form plus a fixed oid tag, the behavior every
/// stringifying codec shares.
fn display_encode(value: &Value, oid: Oid) -> Encoded {
    Encoded::new(value.to_string().into_bytes(), oid)
}

fn int_encode(value: &Value) -> Encoded {
    display_encode(value, oid::UNSPECIFIED)
}

fn float_encode(value: &Value) -> Encoded {
    display_encode(value, oid::FLOAT4)
}

fn bytes_encode(value: &Value) -> Encoded {
    match value {
        Value::Bytes(bytes) => Encoded::new(Bytes::copy_from_slice(bytes), oid::UNSPECIFIED),
        other => display_encode(other, oid::UNSPECIFIED),
    }
}

fn text_encode(value: &Value) -> Encoded {
    match value {
        Value::Text(text) => Encoded::new(Bytes::copy_from_slice(text.as_bytes()), oid::TEXT),
        other => display_encode(other, oid::TEXT),
    }
}

fn date_encode(value: &Value) -> Encoded {
    display_encode(value, oid::DATE)
}

fn time_encode(value: &Value) -> Encoded {
    display_encode(value, oid::TIME)
}

fn timestamp_encode(value: &Value) -> Encoded {
    display_encode(value, oid::TIMESTAMP)
}

fn timestamptz_encode(value: &Value) -> Encoded {
    display_encode(value, oid::TIMESTAMPTZ)
}

fn interval_encode(value: &Value) -> Encoded {
    display_encode(value, oid::INTERVAL)
}

fn bool_encode(value: &Value) -> Encoded {
    display_encode(value, oid::BOOL)
}
