/// Postgres object identifier.
///
/// The oid type is implemented as an unsigned four-byte integer.
///
/// <https://www.postgresql.org/docs/current/datatype-oid.html>
pub type Oid = u32;

/// Fixed oids of the built-in postgres types.
///
/// The numbering is part of the wire protocol, hardcoded and never
/// negotiated. Only a subset has a codec in [`BUILTIN`], the remainder
/// are extension points for [`Registry::register`].
///
/// [`BUILTIN`]: crate::codec::BUILTIN
/// [`Registry::register`]: crate::Registry::register
pub mod oid {
    use super::Oid;

    /// Leaves the exact type for the server to infer.
    pub const UNSPECIFIED: Oid = 0;

    // Numeric

    /// `int8` ~18 digit integer, 8-byte storage
    pub const INT8: Oid = 20;
    /// `int2` -32 thousand to 32 thousand, 2-byte storage
    pub const INT2: Oid = 21;
    /// `int4` -2 billion to 2 billion integer, 4-byte storage
    pub const INT4: Oid = 23;
    /// `float4` single-precision floating point number, 4-byte storage
    pub const FLOAT4: Oid = 700;
    /// `float8` double-precision floating point number, 8-byte storage
    pub const FLOAT8: Oid = 701;
    /// `numeric` arbitrary precision number
    pub const NUMERIC: Oid = 1700;

    // Geometric

    pub const POINT: Oid = 600;
    pub const LSEG: Oid = 601;
    pub const PATH: Oid = 602;
    pub const BOX: Oid = 603;
    pub const POLYGON: Oid = 604;
    pub const LINE: Oid = 628;
    pub const CIRCLE: Oid = 718;

    // Network

    /// `cidr` network IP address/netmask
    pub const CIDR: Oid = 650;
    /// `macaddr` MAC address
    pub const MACADDR: Oid = 829;
    /// `inet` IP address/netmask
    pub const INET: Oid = 869;

    // Variable length

    /// `bpchar` blank-padded characters, length specified on column creation
    pub const BPCHAR: Oid = 1042;
    /// `varchar` variable-length string, maximum length specified on column creation
    pub const VARCHAR: Oid = 1043;
    /// `name` 63-byte type for storing system identifiers
    pub const NAME: Oid = 19;
    /// `text` variable-length string, no limit specified
    pub const TEXT: Oid = 25;
    /// `bit` fixed-length bit string
    pub const BIT: Oid = 1560;
    /// `varbit` variable-length bit string
    pub const VARBIT: Oid = 1562;
    /// `bytea` variable-length binary string
    pub const BYTEA: Oid = 17;

    // Date and time

    /// `date` date
    pub const DATE: Oid = 1082;
    /// `time` time of day
    pub const TIME: Oid = 1083;
    /// `timetz` time of day with timezone
    pub const TIMETZ: Oid = 1266;
    /// `timestamp` date and time
    pub const TIMESTAMP: Oid = 1114;
    /// `timestamptz` date and time with timezone
    pub const TIMESTAMPTZ: Oid = 1184;
    /// `interval` time span
    pub const INTERVAL: Oid = 1186;

    // Misc

    /// `char` single character
    pub const CHAR: Oid = 18;
    /// `bool` boolean, `t`/`f` on the wire
    pub const BOOL: Oid = 16;
    /// `oid` row object identifier
    pub const OID: Oid = 26;
    /// `money` monetary amount
    pub const CASH: Oid = 790;
    /// `record` anonymous composite type
    pub const RECORD: Oid = 2249;
    /// `uuid` universally unique identifier
    pub const UUID: Oid = 2950;
}
