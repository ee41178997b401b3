//! Rules over a single string value.

use super::{Binding, FieldRules};
use crate::patterns;

/// Chain of text rules bound to one field.
///
/// ```ignore
/// let mut valid = Valid::new();
/// valid.text(&form.username, "username").required().min(3).max(20).alpha_numeric();
/// ```
pub struct TextRules<'v> {
    binding: Binding<'v, String>,
}

impl<'v> TextRules<'v> {
    pub(crate) fn new(binding: Binding<'v, String>) -> Self {
        Self { binding }
    }

    /// Fails on the empty string.
    pub fn required(mut self) -> Self {
        self.binding
            .check(|_, value| value.is_empty().then(|| "is required".to_string()));
        self
    }

    /// Fails when the value has fewer than `min` characters.
    pub fn min(mut self, min: usize) -> Self {
        self.binding.check(|_, value| {
            (value.chars().count() < min).then(|| format!("must have at least {} characters", min))
        });
        self
    }

    /// Fails when the value has more than `max` characters.
    pub fn max(mut self, max: usize) -> Self {
        self.binding.check(|_, value| {
            (value.chars().count() > max).then(|| format!("must have at most {} characters", max))
        });
        self
    }

    /// ASCII letters and spaces only.
    pub fn alpha(mut self) -> Self {
        self.binding.check(|_, value| {
            (!patterns::is_alpha(value)).then(|| "must contain only letters".to_string())
        });
        self
    }

    /// ASCII letters, digits and spaces only.
    pub fn alpha_numeric(mut self) -> Self {
        self.binding.check(|_, value| {
            (!patterns::is_alpha_numeric(value))
                .then(|| "must contain only letters and numbers".to_string())
        });
        self
    }

    /// ASCII digits only.
    pub fn numeric(mut self) -> Self {
        self.binding.check(|_, value| {
            (!patterns::is_numeric(value)).then(|| "must contain only numbers".to_string())
        });
        self
    }

    /// Fails if any character of the value is one of `invalid`.
    pub fn blacklist(mut self, invalid: &str) -> Self {
        self.binding.check(|_, value| {
            patterns::contains_any(value, invalid).then(|| "contains invalid characters".to_string())
        });
        self
    }

    /// Fails if any character of the value is not one of `valid`.
    pub fn whitelist(mut self, valid: &str) -> Self {
        self.binding.check(|_, value| {
            (!patterns::only_from(value, valid)).then(|| "contains invalid characters".to_string())
        });
        self
    }

    /// Must parse as a single mail address.
    pub fn email(mut self) -> Self {
        self.binding.check(|_, value| {
            (!patterns::is_valid_email(value)).then(|| "is not a valid email".to_string())
        });
        self
    }
}

impl FieldRules for TextRules<'_> {
    fn key(&self) -> Option<&str> {
        self.binding.key()
    }
}

#[cfg(test)]
mod tests {
    use crate::Valid;
    use rstest::rstest;

    fn messages(valid: &Valid, key: &str) -> Vec<String> {
        valid.errors().get(key).cloned().unwrap_or_default()
    }

    #[test]
    fn test_required() {
        let mut valid = Valid::new();
        valid.text("", "name").required();
        valid.text("Ada", "nick").required();

        assert_eq!(messages(&valid, "name"), vec!["is required"]);
        assert!(messages(&valid, "nick").is_empty());
    }

    #[rstest]
    #[case("abc", true)]
    #[case("ab", false)]
    #[case("abcd", true)]
    fn test_min_is_inclusive(#[case] value: &str, #[case] ok: bool) {
        let mut valid = Valid::new();
        valid.text(value, "code").min(3);
        assert_eq!(valid.has_errors(), !ok);
    }

    #[rstest]
    #[case("abcde", true)]
    #[case("abcdef", false)]
    #[case("abcd", true)]
    fn test_max_is_inclusive(#[case] value: &str, #[case] ok: bool) {
        let mut valid = Valid::new();
        valid.text(value, "code").max(5);
        assert_eq!(valid.has_errors(), !ok);
    }

    #[test]
    fn test_length_counts_characters() {
        let mut valid = Valid::new();
        valid.text("ééé", "word").max(3);
        assert!(!valid.has_errors());
    }

    #[test]
    fn test_min_message_only_when_violated() {
        let mut valid = Valid::new();
        valid.text("ab", "code").min(3).max(5);
        assert_eq!(messages(&valid, "code"), vec!["must have at least 3 characters"]);
    }

    #[test]
    fn test_character_classes() {
        let mut valid = Valid::new();
        valid.text("abc123", "a").alpha();
        valid.text("abc 123", "b").alpha_numeric();
        valid.text("12a", "c").numeric();

        assert_eq!(messages(&valid, "a"), vec!["must contain only letters"]);
        assert!(messages(&valid, "b").is_empty());
        assert_eq!(messages(&valid, "c"), vec!["must contain only numbers"]);
    }

    #[test]
    fn test_blacklist_records_once() {
        let mut valid = Valid::new();
        valid.text("<b>hi</b>", "bio").blacklist("<>");
        valid.text("plain", "other").blacklist("<>");

        assert_eq!(messages(&valid, "bio"), vec!["contains invalid characters"]);
        assert!(messages(&valid, "other").is_empty());
    }

    #[test]
    fn test_whitelist_records_once() {
        let mut valid = Valid::new();
        valid.text("ACGTX!", "dna").whitelist("ACGT");
        valid.text("GATTACA", "ok").whitelist("ACGT");

        assert_eq!(messages(&valid, "dna"), vec!["contains invalid characters"]);
        assert!(messages(&valid, "ok").is_empty());
    }

    #[test]
    fn test_email() {
        let mut valid = Valid::new();
        valid.text("john@@bad", "bad").email();
        valid.text("john@example.com", "good").email();

        assert_eq!(messages(&valid, "bad"), vec!["is not a valid email"]);
        assert!(messages(&valid, "good").is_empty());
    }

    #[test]
    fn test_every_failure_recorded_in_call_order() {
        let mut valid = Valid::new();
        valid.text("", "code").required().min(2).numeric().max(10);

        assert_eq!(
            messages(&valid, "code"),
            vec!["is required", "must have at least 2 characters"]
        );
    }

    #[test]
    fn test_lazy_stops_same_chain() {
        let mut valid = Valid::new().lazy();
        valid.text("", "code").required().min(2).alpha();

        assert_eq!(messages(&valid, "code"), vec!["is required"]);
        assert!(valid.is_cancelled());
    }
}
