//! Postgres text-format value codec.
//!
//! A bidirectional registry between postgres wire text tagged with a
//! numeric [`Oid`] and native [`Value`]s, for driver and foreign-data
//! layers speaking the text protocol.
//!
//! # Examples
//!
//! Decoding received column values:
//!
//! ```
//! use pgtext::{Registry, Value, postgres::oid};
//!
//! # fn main() -> Result<(), pgtext::DecodeError> {
//! let types = Registry::builtin();
//!
//! assert_eq!(types.decode("t", Some(oid::BOOL))?, Value::Bool(true));
//! assert_eq!(types.decode("42", Some(oid::INT4))?, Value::Int(42));
//!
//! // unknown oids fall back to raw text instead of failing
//! assert_eq!(types.decode("hello", Some(99999))?, Value::Text("hello".into()));
//! # Ok(())
//! # }
//! ```
//!
//! Encoding values to bind into an outgoing query:
//!
//! ```
//! use pgtext::{Registry, Value};
//!
//! # fn main() -> Result<(), pgtext::UnsupportedType> {
//! let types = Registry::builtin();
//!
//! let encoded = types.encode(&Value::Int(42))?;
//! assert_eq!(encoded.value(), b"42");
//! assert_eq!(encoded.oid(), 0);
//! # Ok(())
//! # }
//! ```

mod common;

// Protocol
pub mod postgres;

// Values
mod interval;
mod value;

// Codec
pub mod codec;
mod encode;
mod registry;

mod error;

pub use codec::Codec;
pub use encode::Encoded;
pub use error::{DecodeError, UnsupportedType};
pub use interval::Interval;
pub use postgres::Oid;
pub use registry::Registry;
pub use value::{Kind, Value};
