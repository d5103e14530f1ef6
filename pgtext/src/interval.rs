//! Postgres `interval` value.
use std::fmt;

use time::Duration;

const DAY_MICROS: i128 = 86_400_000_000;

/// A postgres `interval`.
///
/// A plain elapsed-time [`Duration`] cannot carry everything the wire
/// text says: `1 mon` and `31 days` fold into the same duration. The
/// wire text is therefore kept alongside the normalized duration, and
/// encoding emits it verbatim when present.
#[derive(Clone)]
pub struct Interval {
    duration: Duration,
    original: Option<Box<str>>,
}

impl Interval {
    /// Create an interval from a plain duration.
    ///
    /// Carries no wire text, encoding synthesizes the canonical form.
    pub const fn new(duration: Duration) -> Self {
        Self { duration, original: None }
    }

    pub(crate) fn with_original(duration: Duration, original: &str) -> Self {
        Self { duration, original: Some(original.into()) }
    }

    /// The normalized duration.
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// The wire text this interval was decoded from, if any.
    pub fn original(&self) -> Option<&str> {
        self.original.as_deref()
    }
}

/// Equality compares the duration only, the preserved wire text is
/// round-trip freight, not identity.
impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.duration == other.duration
    }
}

impl Eq for Interval { }

impl From<Duration> for Interval {
    fn from(duration: Duration) -> Self {
        Self::new(duration)
    }
}

/// The wire text verbatim when present, otherwise the canonical
/// `<days> days HH:MM:SS[.ffffff]` form. The clock is floor-normalized
/// into `0..24h` (days may be negative), so the synthesized string
/// re-parses to the same duration.
impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(original) = &self.original {
            return f.write_str(original);
        }

        let micros = self.duration.whole_microseconds();
        let days = micros.div_euclid(DAY_MICROS);
        let in_day = micros.rem_euclid(DAY_MICROS);

        let (second, micro) = (in_day / 1_000_000, in_day % 1_000_000);
        let (hour, minute, second) = (second / 3600, second / 60 % 60, second % 60);

        write!(f, "{days} days {hour:02}:{minute:02}:{second:02}")?;
        match micro {
            0 => Ok(()),
            _ => write!(f, ".{micro:06}"),
        }
    }
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn canonical_form() {
        let iv = Interval::new(
            Duration::days(2) + Duration::hours(3) + Duration::minutes(4) + Duration::seconds(5),
        );
        assert_eq!(iv.to_string(), "2 days 03:04:05");
    }

    #[test]
    fn canonical_form_fraction() {
        let iv = Interval::new(Duration::seconds(5) + Duration::microseconds(250));
        assert_eq!(iv.to_string(), "0 days 00:00:05.000250");
    }

    #[test]
    fn canonical_form_negative() {
        let iv = Interval::new(Duration::hours(-1));
        assert_eq!(iv.to_string(), "-1 days 23:00:00");
    }

    #[test]
    fn original_verbatim() {
        let iv = Interval::with_original(Duration::days(1), "1 day");
        assert_eq!(iv.to_string(), "1 day");
    }

    #[test]
    fn eq_ignores_original() {
        let decoded = Interval::with_original(Duration::days(1), "1 day");
        assert_eq!(decoded, Interval::new(Duration::days(1)));
    }
}
