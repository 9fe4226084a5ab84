//! Reusable matching strategies
//!
//! Concrete validators are thin wrappers around one of these: an inclusive
//! integer range, an anchored regular grammar, or an enumerated choice set.

use regex::Regex;

use crate::error::{ValidationError, ValidationOutcome};
use crate::value::{FieldValue, ValueKind};

const INPUT_SLOT: &str = "{input}";
const CHOICES_SLOT: &str = "{choices}";

/// Error message with `{input}` (and optionally `{choices}`) substitution points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageTemplate(&'static str);

impl MessageTemplate {
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn render(&self, input: &str) -> String {
        self.0.replace(INPUT_SLOT, input)
    }

    pub fn render_with_choices(&self, input: &str, choices: &str) -> String {
        // Substitute choices first so a value containing "{choices}" stays literal.
        self.0.replace(CHOICES_SLOT, choices).replace(INPUT_SLOT, input)
    }
}

fn unexpected(value: &FieldValue<'_>, expected: ValueKind) -> ValidationError {
    ValidationError::UnexpectedType {
        input: value.render(),
        expected,
    }
}

/// Inclusive integer range check
#[derive(Debug, Clone)]
pub struct RangeValidator {
    min: i128,
    max: i128,
    error: MessageTemplate,
}

impl RangeValidator {
    pub fn new(min: i64, max: i64, error: MessageTemplate) -> Self {
        Self {
            min: i128::from(min),
            max: i128::from(max),
            error,
        }
    }

    pub fn contains(&self, value: i128) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn check(&self, value: &FieldValue<'_>) -> ValidationOutcome {
        let Some(number) = value.as_int() else {
            return Err(unexpected(value, ValueKind::Integer));
        };
        if self.contains(number) {
            Ok(())
        } else {
            let input = value.render();
            Err(ValidationError::Format {
                message: self.error.render(&input),
                input,
            })
        }
    }
}

/// Full-string regular grammar check
///
/// Patterns are expected to carry their own `^`/`$` anchors.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    regex: Regex,
    error: MessageTemplate,
}

impl RegexValidator {
    pub fn new(pattern: &str, error: MessageTemplate) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            error,
        })
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    /// Failure for this grammar, rendered for `input`
    pub fn failure(&self, input: &str) -> ValidationError {
        ValidationError::Format {
            input: input.to_string(),
            message: self.error.render(input),
        }
    }

    pub fn check(&self, value: &FieldValue<'_>) -> ValidationOutcome {
        let Some(text) = value.as_str() else {
            return Err(unexpected(value, ValueKind::String));
        };
        if self.is_match(text) {
            Ok(())
        } else {
            Err(self.failure(text))
        }
    }
}

/// Exact membership in a fixed set of strings
#[derive(Debug, Clone)]
pub struct OneOfValidator {
    choices: &'static [&'static str],
    error: MessageTemplate,
}

impl OneOfValidator {
    pub const fn new(choices: &'static [&'static str], error: MessageTemplate) -> Self {
        Self { choices, error }
    }

    pub fn choices(&self) -> &'static [&'static str] {
        self.choices
    }

    /// Choices rendered as a JSON array, e.g. `["<","<="]`
    pub fn choices_text(&self) -> String {
        serde_json::to_string(self.choices).unwrap_or_default()
    }

    pub fn check(&self, value: &FieldValue<'_>) -> ValidationOutcome {
        if let Some(text) = value.as_str() {
            if self.choices.contains(&text) {
                return Ok(());
            }
        }
        let input = value.render();
        Err(ValidationError::NotOneOf {
            message: self.error.render_with_choices(&input, &self.choices_text()),
            choices: self.choices.iter().map(|c| c.to_string()).collect(),
            input,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANGE_ERROR: MessageTemplate = MessageTemplate::new("Value {input} is out of range.");

    #[test]
    fn test_template_render() {
        assert_eq!(RANGE_ERROR.render("42"), "Value 42 is out of range.");
        let choices = MessageTemplate::new("Value {input} must be one of {choices}.");
        assert_eq!(
            choices.render_with_choices("{choices}", "[\"a\"]"),
            "Value {choices} must be one of [\"a\"]."
        );
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let range = RangeValidator::new(0, 10, RANGE_ERROR);
        assert!(range.check(&FieldValue::Int(0)).is_ok());
        assert!(range.check(&FieldValue::Int(10)).is_ok());
        assert!(range.check(&FieldValue::Int(-1)).is_err());
        assert!(range.check(&FieldValue::Int(11)).is_err());
    }

    #[test]
    fn test_range_rejects_text() {
        let range = RangeValidator::new(0, 10, RANGE_ERROR);
        let err = range.check(&FieldValue::Text("5")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnexpectedType {
                input: "5".to_string(),
                expected: ValueKind::Integer,
            }
        );
    }

    #[test]
    fn test_regex_message_embeds_input() {
        let re = RegexValidator::new(
            r"^[a-z]+$",
            MessageTemplate::new("Value {input} is not lowercase."),
        )
        .unwrap();
        assert!(re.check(&FieldValue::Text("abc")).is_ok());
        let err = re.check(&FieldValue::Text("ABC")).unwrap_err();
        assert_eq!(err.to_string(), "Value ABC is not lowercase.");
        assert_eq!(err.input(), "ABC");
    }

    #[test]
    fn test_regex_dollar_does_not_accept_trailing_newline() {
        let re = RegexValidator::new(r"^[0-9.]+$", MessageTemplate::new("bad")).unwrap();
        assert!(!re.is_match("1.0\n"));
    }

    #[test]
    fn test_one_of_exact() {
        let ops = OneOfValidator::new(&["<", ">"], MessageTemplate::new("{input} not in {choices}"));
        assert_eq!(ops.choices(), ["<", ">"]);
        assert!(ops.check(&FieldValue::Text("<")).is_ok());
        assert!(ops.check(&FieldValue::Text(" <")).is_err());
        let err = ops.check(&FieldValue::Int(1)).unwrap_err();
        assert_eq!(err.to_string(), r#"1 not in ["<",">"]"#);
        assert_eq!(err.choices().unwrap(), ["<".to_string(), ">".to_string()]);
    }
}
