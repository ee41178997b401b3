//! Rules over a single integer value.
//!
//! `required` treats `0` as missing: a field that was never sent and one
//! explicitly set to zero look the same here.

use super::{Binding, FieldRules};

pub struct NumberRules<'v> {
    binding: Binding<'v, i64>,
}

impl<'v> NumberRules<'v> {
    pub(crate) fn new(binding: Binding<'v, i64>) -> Self {
        Self { binding }
    }

    pub fn required(mut self) -> Self {
        self.binding
            .check(|_, value| (*value == 0).then(|| "is required".to_string()));
        self
    }

    /// Fails when the value is below `min`.
    pub fn min(mut self, min: i64) -> Self {
        self.binding
            .check(|_, value| (*value < min).then(|| format!("must be at least {}", min)));
        self
    }

    /// Fails when the value is above `max`.
    pub fn max(mut self, max: i64) -> Self {
        self.binding
            .check(|_, value| (*value > max).then(|| format!("must be at most {}", max)));
        self
    }
}

impl FieldRules for NumberRules<'_> {
    fn key(&self) -> Option<&str> {
        self.binding.key()
    }
}
