// File: src/context.rs
// Purpose: Validation context that owns the error store and spawns rule chains

use chrono::{DateTime, Utc};

use crate::config::{ReportFormat, ValidConfig};
use crate::rules::{Binding, NumberRules, TextRules, TimeRules};
use crate::store::{ErrorStore, FieldErrors, NestedErrors};

/// Accumulator for one validation run (typically one request).
///
/// Every chain spawned from a context records into the same store. In lazy
/// mode the first recorded error cancels the context: later rules on any
/// chain are skipped and chains created afterwards are dead.
///
/// ```ignore
/// let mut valid = Valid::new().lazy();
/// valid.text(&form.name, "name").required().max(64);
/// valid.number(form.age, "age").min(18);
/// valid.handle()?;
/// ```
#[derive(Debug, Clone)]
pub struct Valid {
    lazy: bool,
    cancelled: bool,
    store: ErrorStore,
    clock: fn() -> DateTime<Utc>,
    report: ReportFormat,
}

impl Default for Valid {
    fn default() -> Self {
        Self {
            lazy: false,
            cancelled: false,
            store: ErrorStore::new(),
            clock: Utc::now,
            report: ReportFormat::default(),
        }
    }
}

impl Valid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from loaded configuration
    pub fn from_config(config: &ValidConfig) -> Self {
        let valid = Self::new().with_report(config.report.format);
        if config.validation.lazy {
            valid.lazy()
        } else {
            valid
        }
    }

    /// Stop at the first recorded error.
    pub fn lazy(mut self) -> Self {
        self.lazy = true;
        self
    }

    /// Replace the "now" source used by time rules.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_report(mut self, format: ReportFormat) -> Self {
        self.report = format;
        self
    }

    /// Start a chain of text rules for `key`.
    pub fn text(&mut self, value: impl Into<String>, key: impl Into<String>) -> TextRules<'_> {
        TextRules::new(Binding::new(self, key, || value.into()))
    }

    /// Start a chain of integer rules for `key`.
    pub fn number(&mut self, value: impl Into<i64>, key: impl Into<String>) -> NumberRules<'_> {
        NumberRules::new(Binding::new(self, key, || value.into()))
    }

    /// Start a chain of time rules for `key`.
    pub fn time(&mut self, value: DateTime<Utc>, key: impl Into<String>) -> TimeRules<'_> {
        TimeRules::new(Binding::new(self, key, || value))
    }

    pub(crate) fn record_error(&mut self, key: &str, message: String) {
        tracing::debug!(field = key, message = %message, "validation failed");
        self.store.push(key, message);
        self.cancel_if_lazy();
    }

    pub(crate) fn record_nested(&mut self, key: &str, errors: FieldErrors) {
        let stored = self.store.nest(key, errors);
        if stored != key {
            tracing::debug!(field = key, stored = %stored, "nested key already used");
        }
        self.cancel_if_lazy();
    }

    fn cancel_if_lazy(&mut self) {
        if self.lazy && !self.cancelled {
            tracing::debug!("lazy validation cancelled after first error");
            self.cancelled = true;
        }
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    pub fn is_lazy(&self) -> bool {
        self.lazy
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn report_format(&self) -> ReportFormat {
        self.report
    }

    pub fn errors(&self) -> &FieldErrors {
        self.store.errors()
    }

    pub fn nested_errors(&self) -> &NestedErrors {
        self.store.nested()
    }

    pub fn store(&self) -> &ErrorStore {
        &self.store
    }

    pub fn into_store(self) -> ErrorStore {
        self.store
    }

    /// True when either the field or the nested map is non-empty.
    pub fn has_errors(&self) -> bool {
        self.store.has_errors()
    }
}
