//! Postgres wire protocol constants.
mod pg_type;

pub use pg_type::{Oid, oid};
