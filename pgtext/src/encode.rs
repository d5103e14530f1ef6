//! Encode output type.
use bytes::Bytes;
use std::fmt;

use crate::postgres::Oid;

/// A value encoded for the wire, the payload plus its oid tag.
#[derive(Clone)]
pub struct Encoded {
    value: Bytes,
    oid: Oid,
}

impl Encoded {
    /// Create an encoded value from a payload and an oid tag.
    pub fn new(value: impl Into<Bytes>, oid: Oid) -> Self {
        Self { value: value.into(), oid }
    }

    /// The wire payload.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Consume self into the wire payload.
    pub fn into_value(self) -> Bytes {
        self.value
    }

    /// The oid tag, [`UNSPECIFIED`] leaves the type for the server to
    /// infer.
    ///
    /// [`UNSPECIFIED`]: crate::postgres::oid::UNSPECIFIED
    pub const fn oid(&self) -> Oid {
        self.oid
    }
}

impl fmt::Debug for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encoded")
            .field("value", &String::from_utf8_lossy(&self.value))
            .field("oid", &self.oid)
            .finish()
    }
}
