// File: src/rules/mod.rs
// Purpose: Field binding shared by the typed rule chains

use crate::context::Valid;

pub mod number;
pub mod text;
pub mod time;

pub use number::NumberRules;
pub use text::TextRules;
pub use time::TimeRules;

/// Common surface of the typed chains.
pub trait FieldRules {
    /// Key the chain records under, `None` for a dead chain.
    fn key(&self) -> Option<&str>;

    /// A dead chain was created on a cancelled context and never records.
    fn is_dead(&self) -> bool {
        self.key().is_none()
    }
}

struct Field<T> {
    key: String,
    value: T,
}

/// A context borrowed for the lifetime of one chain, plus the field it checks.
pub(crate) struct Binding<'v, T> {
    valid: &'v mut Valid,
    field: Option<Field<T>>,
}

impl<'v, T> Binding<'v, T> {
    /// Bind `key`/`value`, or produce a dead binding when the context is
    /// already cancelled. `value` is only built for live bindings.
    pub(crate) fn new(valid: &'v mut Valid, key: impl Into<String>, value: impl FnOnce() -> T) -> Self {
        if valid.is_cancelled() {
            return Self { valid, field: None };
        }
        let field = Field {
            key: key.into(),
            value: value(),
        };
        Self {
            valid,
            field: Some(field),
        }
    }

    pub(crate) fn key(&self) -> Option<&str> {
        self.field.as_ref().map(|field| field.key.as_str())
    }

    /// Evaluate one rule. `rule` returns the failure message, if any.
    ///
    /// Skipped entirely on dead bindings and once the context is cancelled.
    pub(crate) fn check<F>(&mut self, rule: F)
    where
        F: FnOnce(&Valid, &T) -> Option<String>,
    {
        if self.valid.is_cancelled() {
            return;
        }
        let Some(field) = &self.field else {
            return;
        };
        if let Some(message) = rule(&*self.valid, &field.value) {
            self.valid.record_error(&field.key, message);
        }
    }
}
