//! `pgtext` error types.
use std::{
    fmt,
    num::{ParseFloatError, ParseIntError},
};

use crate::value::Kind;

macro_rules! from {
    (<$ty:ty>$pat:pat => $body:expr) => {
        impl From<$ty> for DecodeError {
            fn from($pat: $ty) -> Self {
                $body
            }
        }
    };
}

/// An error when decoding wire text into a [`Value`][crate::Value].
///
/// Raised for malformed text under a known oid. An *unknown* oid is not
/// an error, decode falls back to the default textual codec instead.
pub enum DecodeError {
    /// Malformed integer literal.
    Int(ParseIntError),
    /// Malformed float literal.
    Float(ParseFloatError),
    /// Boolean wire text other than `t`/`f`.
    Bool(Box<str>),
    /// Clock segment is not `HH:MM:SS`.
    Clock(Box<str>),
    /// Date or timestamp layout mismatch.
    Parse(time::error::Parse),
    /// Clock field out of range.
    Range(time::error::ComponentRange),
}

from!(<ParseIntError>e => Self::Int(e));
from!(<ParseFloatError>e => Self::Float(e));
from!(<time::error::Parse>e => Self::Parse(e));
from!(<time::error::ComponentRange>e => Self::Range(e));

impl std::error::Error for DecodeError { }

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("failed to decode value, ")?;
        match self {
            Self::Int(e) => write!(f, "{e}"),
            Self::Float(e) => write!(f, "{e}"),
            Self::Bool(s) => write!(f, "cannot convert {s:?} to bool"),
            Self::Clock(s) => write!(f, "invalid clock {s:?}, expected HH:MM:SS"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Range(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Debug for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

/// An error when encoding a value kind with no registered adapter.
///
/// Unlike decode, encode has no fallback: handing the registry a kind
/// nothing was registered for is a caller bug and is surfaced with the
/// offending kind name.
pub struct UnsupportedType {
    kind: Kind,
}

impl UnsupportedType {
    pub(crate) fn new(kind: Kind) -> Self {
        Self { kind }
    }

    /// Returns the kind that has no encode adapter.
    pub const fn kind(&self) -> Kind {
        self.kind
    }
}

impl std::error::Error for UnsupportedType { }

impl fmt::Display for UnsupportedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot cast `{}` to a postgres type", self.kind)
    }
}

impl fmt::Debug for UnsupportedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}
