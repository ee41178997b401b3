// rusty-valid - fluent field validation
// Chain typed rules over request fields and collect per-field messages

pub mod config;
pub mod context;
pub mod error;
pub mod nested;
pub mod patterns;
pub mod report;
pub mod rules;
pub mod store;

// Re-export core types
pub use config::{ReportFormat, ValidConfig};
pub use context::Valid;
pub use error::ValidationError;
pub use nested::Validate;
pub use report::{render_plain, render_structured};
pub use rules::{FieldRules, NumberRules, TextRules, TimeRules};
pub use store::{ErrorStore, FieldErrors, NestedErrors, NESTED_COLLISION_SUFFIX};

// Re-export the time type used by time rules
pub use chrono;
