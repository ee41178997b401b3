//! Log rendering of collected errors.
//!
//! Rendering is pure and returns strings; [`Valid::log`] and friends hand the
//! result to `tracing` at `warn` level. Nothing is emitted for a clean
//! context.

use crate::config::ReportFormat;
use crate::context::Valid;
use crate::store::ErrorStore;

const BANNER: &str = " VALIDATION ERROR ";
const END_BANNER: &str = " END VALIDATION ERROR ";

/// Human-readable block: fields, then each nested key with its fields indented.
pub fn render_plain(store: &ErrorStore) -> String {
    let mut lines = vec![BANNER.to_string()];
    for (field, messages) in store.errors() {
        lines.push(format!("{}:", field));
        lines.extend(messages.iter().map(|message| format!(" - {}", message)));
    }
    for (key, fields) in store.nested() {
        lines.push(format!("{}:", key));
        for (field, messages) in fields {
            lines.push(format!(" - {}:", field));
            lines.extend(messages.iter().map(|message| format!("    - {}", message)));
        }
    }
    lines.push(END_BANNER.to_string());
    lines.join("\n")
}

/// The whole store as one JSON document.
pub fn render_structured(store: &ErrorStore) -> serde_json::Result<String> {
    store.to_json()
}

impl Valid {
    /// Log errors as plain text.
    pub fn log(&self) -> &Self {
        if self.has_errors() {
            tracing::warn!("\n{}", render_plain(self.store()));
        }
        self
    }

    /// Log errors as a single JSON document.
    pub fn log_structured(&self) -> &Self {
        if self.has_errors() {
            match render_structured(self.store()) {
                Ok(json) => tracing::warn!(errors = %json, "{}", BANNER.trim()),
                Err(err) => tracing::error!("failed to encode validation errors: {}", err),
            }
        }
        self
    }

    /// Log using the configured format.
    pub fn report(&self) -> &Self {
        match self.report_format() {
            ReportFormat::Plain => self.log(),
            ReportFormat::Structured => self.log_structured(),
        }
    }
}
