pub mod batch;
pub mod input;
pub mod tokenizer;

use input::{text_input, ConversionError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tokenizer::Separators;

/// Target casing convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Case {
    #[default]
    Kebab,
    Camel,
    Dot,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Kebab, Case::Camel, Case::Dot];

    /// Name of the conversion function, used in error messages
    pub fn operation(self) -> &'static str {
        match self {
            Case::Kebab => "to_kebab_case",
            Case::Camel => "to_camel_case",
            Case::Dot => "to_dot_case",
        }
    }
}

impl FromStr for Case {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kebab" | "kebab-case" => Ok(Case::Kebab),
            "camel" | "camelcase" => Ok(Case::Camel),
            "dot" | "dot.case" => Ok(Case::Dot),
            _ => Err(ConversionError::UnknownCase(s.to_string())),
        }
    }
}

impl TryFrom<String> for Case {
    type Error = ConversionError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Case::Kebab => write!(f, "kebab"),
            Case::Camel => write!(f, "camel"),
            Case::Dot => write!(f, "dot"),
        }
    }
}

/// Convert `input` to the given case.
pub fn convert(case: Case, input: &str) -> String {
    match case {
        Case::Kebab => to_kebab_case(input),
        Case::Camel => to_camel_case(input),
        Case::Dot => to_dot_case(input),
    }
}

/// Convert a dynamically typed value, rejecting anything that is not a string.
pub fn convert_value(case: Case, value: &Value) -> Result<String, ConversionError> {
    let text = text_input(case.operation(), value)?;
    Ok(convert(case, text))
}

/// Convert to kebab-case.
///
/// Whitespace and underscores become hyphens, everything is lower-cased and
/// other punctuation is kept as is.
///
/// ```
/// use casekit::to_kebab_case;
///
/// assert_eq!(to_kebab_case("Hello World!"), "hello-world!");
/// assert_eq!(to_kebab_case("  spaces_and_underscores  "), "spaces-and-underscores");
/// ```
pub fn to_kebab_case(input: &str) -> String {
    let normalized = input.trim().to_lowercase();
    if normalized.is_empty() {
        return String::new();
    }

    tokenizer::hyphenate(&normalized)
}

/// Convert to camelCase.
///
/// ```
/// use casekit::to_camel_case;
///
/// assert_eq!(to_camel_case("user_id"), "userId");
/// assert_eq!(to_camel_case("SCREEN_NAME"), "screenName");
/// assert_eq!(to_camel_case("mobile-number"), "mobileNumber");
/// ```
pub fn to_camel_case(input: &str) -> String {
    let mut words = tokenizer::split_words(input.trim(), Separators::Word)
        .into_iter()
        .map(str::to_lowercase);

    let Some(first) = words.next() else {
        return String::new();
    };

    words.fold(first, |mut camel, word| {
        camel.push_str(&capitalize(&word));
        camel
    })
}

/// Convert to dot.case, splitting camelCase input at its word boundaries.
///
/// ```
/// use casekit::to_dot_case;
///
/// assert_eq!(to_dot_case("userId"), "user.id");
/// assert_eq!(to_dot_case("SCREEN_NAME"), "screen.name");
/// ```
pub fn to_dot_case(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let marked = tokenizer::mark_case_boundaries(trimmed, '.');
    tokenizer::split_words(&marked, Separators::Dotted)
        .into_iter()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(".")
}

/// Type errors use the same `"<operation>: expected a string but received <type>"`
/// message as the other conversions.
pub fn to_kebab_case_value(value: &Value) -> Result<String, ConversionError> {
    convert_value(Case::Kebab, value)
}

pub fn to_camel_case_value(value: &Value) -> Result<String, ConversionError> {
    convert_value(Case::Camel, value)
}

pub fn to_dot_case_value(value: &Value) -> Result<String, ConversionError> {
    convert_value(Case::Dot, value)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use input::ValueKind;
    use serde_json::json;

    #[test]
    fn test_kebab_case() {
        assert_eq!(to_kebab_case("Hello World!"), "hello-world!");
        assert_eq!(
            to_kebab_case("  multiple   spaces_and_underscores  "),
            "multiple-spaces-and-underscores"
        );
        assert_eq!(to_kebab_case("already-kebab"), "already-kebab");
        assert_eq!(to_kebab_case("a - _ b"), "a-b");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(to_camel_case("first name"), "firstName");
        assert_eq!(to_camel_case("user_id"), "userId");
        assert_eq!(to_camel_case("SCREEN_NAME"), "screenName");
        assert_eq!(to_camel_case("mobile-number"), "mobileNumber");
        assert_eq!(to_camel_case("  __leading and trailing--  "), "leadingAndTrailing");
        assert_eq!(to_camel_case("single"), "single");
    }

    #[test]
    fn test_dot_case() {
        assert_eq!(to_dot_case("userId"), "user.id");
        assert_eq!(to_dot_case("SCREEN_NAME"), "screen.name");
        assert_eq!(to_dot_case("mobileNumber"), "mobile.number");
        assert_eq!(to_dot_case("first name"), "first.name");
        assert_eq!(to_dot_case("XMLHttpRequest"), "xml.http.request");
        assert_eq!(to_dot_case("already..dotted"), "already.dotted");
    }

    #[test]
    fn test_separator_only_input_is_empty() {
        for input in ["", "   ", "___", "---", " _-_ \t\n"] {
            for case in Case::ALL {
                assert_eq!(convert(case, input), "", "{case} of {input:?}");
            }
        }
        assert_eq!(to_dot_case("..."), "");
    }

    #[test]
    fn test_kebab_case_is_idempotent() {
        let inputs = [
            "Hello World!",
            "  multiple   spaces_and_underscores  ",
            "-_-edge-_-",
            "MiXeD cAsE__input",
            "tabs\tand\nnewlines",
        ];
        for input in inputs {
            let once = to_kebab_case(input);
            assert_eq!(to_kebab_case(&once), once);
        }
    }

    #[test]
    fn test_camel_case_preserves_words() {
        let inputs = ["first name", "user_id", "SCREEN_NAME", "some-mixed_input here"];
        for input in inputs {
            let camel = to_camel_case(input);
            let marked = tokenizer::mark_case_boundaries(&camel, ' ');
            let recovered: Vec<String> = tokenizer::split_words(&marked, Separators::Word)
                .into_iter()
                .map(str::to_lowercase)
                .collect();
            let expected: Vec<String> = tokenizer::split_words(input.trim(), Separators::Word)
                .into_iter()
                .map(str::to_lowercase)
                .collect();
            assert_eq!(recovered, expected, "input {input:?}");
        }
    }

    #[test]
    fn test_non_text_values_rejected() {
        let values = [json!(null), json!(1.5), json!(false), json!([]), json!({})];
        for value in &values {
            for case in Case::ALL {
                let err = convert_value(case, value).unwrap_err();
                assert!(matches!(
                    err,
                    ConversionError::InvalidInputType { operation, .. } if operation == case.operation()
                ));
            }
        }

        assert_eq!(
            to_camel_case_value(&json!(7)),
            Err(ConversionError::InvalidInputType {
                operation: "to_camel_case",
                received: ValueKind::Number,
            })
        );
    }

    #[test]
    fn test_value_conversion() {
        assert_eq!(to_kebab_case_value(&json!("Hello World")), Ok("hello-world".to_string()));
        assert_eq!(to_camel_case_value(&json!("user_id")), Ok("userId".to_string()));
        assert_eq!(to_dot_case_value(&json!("userId")), Ok("user.id".to_string()));
    }

    #[test]
    fn test_case_parsing() {
        assert_eq!("kebab".parse::<Case>(), Ok(Case::Kebab));
        assert_eq!("camelCase".parse::<Case>(), Ok(Case::Camel));
        assert_eq!("DOT.CASE".parse::<Case>(), Ok(Case::Dot));
        assert_eq!(
            "snake".parse::<Case>(),
            Err(ConversionError::UnknownCase("snake".to_string()))
        );

        for case in Case::ALL {
            assert_eq!(case.to_string().parse::<Case>(), Ok(case));
        }
    }

    #[test]
    fn test_case_deserializes_like_it_parses() {
        for (name, case) in [("Kebab-Case", Case::Kebab), ("camelCase", Case::Camel), ("DOT", Case::Dot)] {
            let parsed: Case = serde_json::from_value(json!(name)).unwrap();
            assert_eq!(parsed, case);
        }
        assert!(serde_json::from_value::<Case>(json!("snake")).is_err());
        assert_eq!(serde_json::to_value(Case::Camel).unwrap(), json!("camel"));
    }

    #[test]
    fn test_kebab_type_error_message() {
        let err = to_kebab_case_value(&json!(null)).unwrap_err();
        assert_eq!(err.to_string(), "to_kebab_case: expected a string but received null");
    }
}
