// File: src/nested.rs
// Purpose: Validatable capability and folding of embedded entity errors

use crate::context::Valid;

/// Trait for types that can validate themselves
///
/// Implementations usually build a fresh [`Valid`] and chain rules over
/// their own fields.
pub trait Validate {
    /// Validates the value and returns the context describing its errors
    fn validate(&self) -> Valid;
}

impl<T: Validate + ?Sized> Validate for &T {
    fn validate(&self) -> Valid {
        (**self).validate()
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate(&self) -> Valid {
        (**self).validate()
    }
}

impl Valid {
    /// Validate an embedded entity and keep its field errors under `key`.
    ///
    /// Only the entity's own field errors are kept; errors it collected from
    /// its own nested entities are not carried up. A second entity under the
    /// same `key` goes to `key|`; a third replaces that second entry.
    /// Skipped once the context is cancelled. In lazy mode a nested failure
    /// cancels this context.
    pub fn validate_nested<V: Validate + ?Sized>(&mut self, entity: &V, key: &str) {
        if self.is_cancelled() {
            return;
        }
        let nested = entity.validate();
        tracing::trace!(field = key, failed = nested.has_errors(), "validated nested entity");

        let (errors, _) = nested.into_store().into_parts();
        if !errors.is_empty() {
            self.record_nested(key, errors);
        }
    }

    /// Validate each entity of a collection under `key[index]`.
    pub fn validate_each<V: Validate>(&mut self, entities: &[V], key: &str) {
        for (index, entity) in entities.iter().enumerate() {
            self.validate_nested(entity, &format!("{}[{}]", key, index));
        }
    }
}
