use pgtext::{Registry, Value};
use time::{Date, Month};

pub fn main() {
    let types = Registry::builtin();

    let row = [
        Value::Int(42),
        Value::Float(3.14),
        Value::Text("paid".into()),
        Value::Bool(true),
        Value::Date(Date::from_calendar_date(2021, Month::March, 4).unwrap()),
    ];

    for value in &row {
        match types.encode(value) {
            Ok(encoded) => tracing::info!(?encoded, "encoded"),
            Err(err) => tracing::error!(%err, "encode failed"),
        }
    }

    // NULL has no adapter on purpose, binding it is the caller's concern
    let err = types.encode(&Value::Null).unwrap_err();
    tracing::warn!(%err, "null stays unbound");
}
