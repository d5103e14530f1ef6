use pgtext::{Oid, Registry, Value, postgres::oid};

// a row as a foreign-data layer receives it: wire text plus oid tags
const ROW: &[(&str, Oid)] = &[
    ("42", oid::INT4),
    ("3.14", oid::FLOAT8),
    ("paid", oid::VARCHAR),
    ("t", oid::BOOL),
    ("2021-03-04", oid::DATE),
    ("2021-03-04 10:10:10.250000", oid::TIMESTAMP),
    ("10 years 10 mons 15 days 10:10:10", oid::INTERVAL),
];

pub fn main() {
    let types = Registry::builtin();

    for &(text, oid) in ROW {
        match types.decode(text, Some(oid)) {
            Ok(value) => tracing::info!(oid, ?value, "decoded"),
            Err(err) => tracing::error!(oid, %err, "decode failed"),
        }
    }

    // unknown oids degrade to raw text
    let fallback = types.decode("(52.5,13.4)", Some(oid::POINT)).unwrap();
    assert_eq!(fallback, Value::Text("(52.5,13.4)".into()));
}
