//! Rules over a single point in time.
//!
//! "Now" comes from the context clock and is sampled when each rule runs.
//!
//! `required` treats 0001-01-01T00:00:00Z as unset (see [`unset`]). The
//! Unix epoch is an ordinary instant and passes `required`.

use chrono::{DateTime, Duration, SecondsFormat, Utc};

use super::{Binding, FieldRules};

/// Seconds from the Unix epoch to 0001-01-01T00:00:00Z.
pub const UNSET_TIMESTAMP: i64 = -62_135_596_800;

/// The instant `required` rejects; use it for "no value given".
pub fn unset() -> DateTime<Utc> {
    DateTime::from_timestamp(UNSET_TIMESTAMP, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

pub fn is_unset(value: &DateTime<Utc>) -> bool {
    value.timestamp() == UNSET_TIMESTAMP && value.timestamp_subsec_nanos() == 0
}

pub struct TimeRules<'v> {
    binding: Binding<'v, DateTime<Utc>>,
}

impl<'v> TimeRules<'v> {
    pub(crate) fn new(binding: Binding<'v, DateTime<Utc>>) -> Self {
        Self { binding }
    }

    /// Fails on the [`unset`] instant.
    pub fn required(mut self) -> Self {
        self.binding
            .check(|_, value| is_unset(value).then(|| "is required".to_string()));
        self
    }

    pub fn past(mut self) -> Self {
        self.binding
            .check(|valid, value| (*value > valid.now()).then(|| "must be in the past".to_string()));
        self
    }

    pub fn future(mut self) -> Self {
        self.binding.check(|valid, value| {
            (*value < valid.now()).then(|| "must be in the future".to_string())
        });
        self
    }

    /// Fails when the value is after `reference`.
    pub fn before(mut self, reference: DateTime<Utc>) -> Self {
        self.binding.check(|_, value| {
            (*value > reference).then(|| format!("must be before {}", display(reference)))
        });
        self
    }

    /// Fails when the value is before `reference`.
    pub fn after(mut self, reference: DateTime<Utc>) -> Self {
        self.binding.check(|_, value| {
            (*value < reference).then(|| format!("must be after {}", display(reference)))
        });
        self
    }

    /// Fails unless the value lies in `[now - seconds, now + seconds]`.
    pub fn within(mut self, seconds: u32) -> Self {
        self.binding.check(|valid, value| {
            let now = valid.now();
            let window = Duration::seconds(i64::from(seconds));
            let (earliest, latest) = (now - window, now + window);

            (*value < earliest || *value > latest)
                .then(|| format!("must be within {} seconds from now", seconds))
        });
        self
    }
}

impl FieldRules for TimeRules<'_> {
    fn key(&self) -> Option<&str> {
        self.binding.key()
    }
}

fn display(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}
