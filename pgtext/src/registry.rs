//! Codec registries and dispatch.
use std::collections::HashMap;

use crate::{
    codec::{self, Codec},
    common::verbose,
    encode::Encoded,
    error::{DecodeError, UnsupportedType},
    postgres::Oid,
    value::{Kind, Value},
};

/// Bidirectional codec registry.
///
/// Holds the oid index for decode dispatch and the native kind index
/// for encode dispatch. A registry is built once at startup and only
/// read afterwards: every method besides registration takes `&self`,
/// so a populated registry can be shared freely across threads.
#[derive(Debug)]
pub struct Registry {
    oids: HashMap<Oid, Codec>,
    kinds: HashMap<Kind, Codec>,
    fallback: Codec,
}

impl Registry {
    /// An empty registry with the text codec as decode fallback.
    pub fn new() -> Self {
        Self {
            oids: HashMap::new(),
            kinds: HashMap::new(),
            fallback: codec::TEXT,
        }
    }

    /// A registry with every [`BUILTIN`][codec::BUILTIN] codec
    /// registered, in list order.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for &codec in codec::BUILTIN {
            registry.register(codec);
        }
        registry
    }

    /// Register a codec for all of its oids and kinds.
    ///
    /// Re-registering an oid or kind silently replaces the previous
    /// codec, registration order is the collision rule.
    pub fn register(&mut self, codec: Codec) {
        for &oid in codec.oids {
            verbose!(name = codec.name, oid, "register decode");
            self.oids.insert(oid, codec);
        }
        for &kind in codec.kinds {
            verbose!(name = codec.name, kind = %kind, "register encode");
            self.kinds.insert(kind, codec);
        }
    }

    /// Replace the decode fallback used for unknown oids.
    pub fn set_fallback(&mut self, codec: Codec) {
        self.fallback = codec;
    }

    /// Resolve the codec for an oid, falling back to the default
    /// textual codec when the oid is unknown or absent.
    pub fn by_oid(&self, oid: Option<Oid>) -> &Codec {
        oid.and_then(|oid| self.oids.get(&oid))
            .unwrap_or(&self.fallback)
    }

    /// Resolve the encode codec for a native kind.
    pub fn by_kind(&self, kind: Kind) -> Option<&Codec> {
        self.kinds.get(&kind)
    }

    /// Decode wire text tagged with an oid into a native value.
    ///
    /// An unknown or absent oid is not an error: the text is handed to
    /// the fallback codec, so an incomplete registry degrades to raw
    /// text instead of failing.
    pub fn decode(&self, text: &str, oid: Option<Oid>) -> Result<Value, DecodeError> {
        (self.by_oid(oid).decode)(text)
    }

    /// Encode a native value into its wire payload and oid tag.
    ///
    /// The lookup is an exact kind match, and unlike decode there is
    /// no fallback: a kind without a registered adapter is an
    /// [`UnsupportedType`] error.
    pub fn encode(&self, value: &Value) -> Result<Encoded, UnsupportedType> {
        match self.by_kind(value.kind()) {
            Some(codec) => Ok((codec.encode)(value)),
            None => Err(UnsupportedType::new(value.kind())),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{interval::Interval, postgres::oid};
    use time::{Date, Duration, Month, PrimitiveDateTime, Time};

    #[test]
    fn decode_by_oid() {
        let types = Registry::builtin();
        assert_eq!(types.decode("42", Some(oid::INT4)).unwrap(), Value::Int(42));
        assert_eq!(types.decode("42", Some(oid::INT8)).unwrap(), Value::Int(42));
        assert_eq!(types.decode("t", Some(oid::BOOL)).unwrap(), Value::Bool(true));
        assert_eq!(
            types.decode("hello", Some(oid::TEXT)).unwrap(),
            Value::Text("hello".into()),
        );
    }

    #[test]
    fn unknown_oid_falls_back_to_text() {
        let types = Registry::builtin();
        assert_eq!(
            types.decode("hello", Some(99999)).unwrap(),
            Value::Text("hello".into()),
        );
        assert_eq!(
            types.decode("hello", None).unwrap(),
            Value::Text("hello".into()),
        );
    }

    #[test]
    fn fallback_override() {
        let mut types = Registry::builtin();
        types.set_fallback(codec::INTEGER);
        assert_eq!(types.decode("7", Some(99999)).unwrap(), Value::Int(7));
    }

    #[test]
    fn encode_by_kind() {
        let types = Registry::builtin();
        let encoded = types.encode(&Value::Int(42)).unwrap();
        assert_eq!(encoded.value(), b"42");
        assert_eq!(encoded.oid(), oid::UNSPECIFIED);
    }

    #[test]
    fn encode_unregistered_kind() {
        let types = Registry::builtin();
        let err = types.encode(&Value::Null).unwrap_err();
        assert_eq!(err.kind(), Kind::Null);

        let empty = Registry::new();
        let err = empty.encode(&Value::Bool(true)).unwrap_err();
        assert_eq!(err.kind(), Kind::Bool);
    }

    #[test]
    fn register_last_wins() {
        fn zero_decode(_: &str) -> Result<Value, DecodeError> {
            Ok(Value::Int(0))
        }
        fn zero_encode(value: &Value) -> Encoded {
            Encoded::new(value.to_string().into_bytes(), oid::UNSPECIFIED)
        }

        let mut types = Registry::builtin();
        types.register(Codec {
            name: "zero",
            oids: &[oid::INT4],
            kinds: &[],
            decode: zero_decode,
            encode: zero_encode,
        });

        assert_eq!(types.decode("42", Some(oid::INT4)).unwrap(), Value::Int(0));
        // other integer oids keep the stock codec
        assert_eq!(types.decode("42", Some(oid::INT8)).unwrap(), Value::Int(42));
    }

    #[test]
    fn bool_asymmetry() {
        // decode demands t/f, encode keeps the plain stringification
        let types = Registry::builtin();
        let encoded = types.encode(&Value::Bool(true)).unwrap();
        assert_eq!(encoded.value(), b"true");
        assert_eq!(encoded.oid(), oid::BOOL);
        assert!(types.decode("true", Some(oid::BOOL)).is_err());
    }

    #[test]
    fn round_trips() {
        let types = Registry::builtin();
        let date = Date::from_calendar_date(2021, Month::March, 4).unwrap();
        let time = Time::from_hms_micro(12, 30, 5, 250_000).unwrap();

        for (value, oid) in [
            (Value::Int(-7), oid::INT8),
            (Value::Float(1.5), oid::FLOAT8),
            (Value::Text("sheet".into()), oid::VARCHAR),
            (Value::Date(date), oid::DATE),
            (Value::Time(time), oid::TIME),
            (Value::Timestamp(PrimitiveDateTime::new(date, time)), oid::TIMESTAMP),
        ] {
            let encoded = types.encode(&value).unwrap();
            let text = std::str::from_utf8(encoded.value()).unwrap();
            assert_eq!(types.decode(text, Some(oid)).unwrap(), value);
        }
    }

    #[test]
    fn interval_round_trips() {
        let types = Registry::builtin();

        // decoded intervals re-encode to the exact wire text
        let text = "10 years 10 mons 15 days 10:10:10";
        let decoded = types.decode(text, Some(oid::INTERVAL)).unwrap();
        let encoded = types.encode(&decoded).unwrap();
        assert_eq!(encoded.value(), text.as_bytes());
        assert_eq!(encoded.oid(), oid::INTERVAL);

        // constructed intervals synthesize a form that re-parses to the
        // same duration
        let synth = Value::Interval(Interval::new(
            Duration::days(2) + Duration::hours(3) + Duration::microseconds(250),
        ));
        let encoded = types.encode(&synth).unwrap();
        let text = std::str::from_utf8(encoded.value()).unwrap();
        assert_eq!(types.decode(text, Some(oid::INTERVAL)).unwrap(), synth);
    }
}
