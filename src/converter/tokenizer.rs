use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Gaps that become a single hyphen in kebab-case
    static ref KEBAB_GAPS: Regex = Regex::new(r"[\s_]+").unwrap();
    static ref HYPHEN_RUNS: Regex = Regex::new(r"-+").unwrap();
    static ref WORD_SEPARATORS: Regex = Regex::new(r"[\s_-]+").unwrap();
    static ref DOTTED_SEPARATORS: Regex = Regex::new(r"[\s._-]+").unwrap();
}

/// Which characters count as word separators when splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separators {
    /// Whitespace, underscore and hyphen
    Word,
    /// Whitespace, dot, underscore and hyphen
    Dotted,
}

impl Separators {
    fn pattern(self) -> &'static Regex {
        match self {
            Separators::Word => &WORD_SEPARATORS,
            Separators::Dotted => &DOTTED_SEPARATORS,
        }
    }
}

/// Split text on runs of separators, dropping empty pieces.
pub fn split_words(text: &str, separators: Separators) -> Vec<&str> {
    separators
        .pattern()
        .split(text)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Replace whitespace/underscore runs with one hyphen, collapse repeated
/// hyphens, and drop a hyphen left at either end.
pub fn hyphenate(text: &str) -> String {
    let hyphenated = KEBAB_GAPS.replace_all(text, "-");
    let collapsed = HYPHEN_RUNS.replace_all(&hyphenated, "-");
    let trimmed = collapsed.strip_prefix('-').unwrap_or(&collapsed);
    let trimmed = trimmed.strip_suffix('-').unwrap_or(trimmed);
    trimmed.to_string()
}

/// Insert `marker` before every uppercase letter that starts a new word.
///
/// An uppercase letter starts a word when it follows a lowercase letter or a
/// digit (`userId`), or when it closes an all-caps run and is followed by a
/// lowercase letter (`XMLHttp`). Letters keep their case.
pub fn mark_case_boundaries(text: &str, marker: char) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len() + chars.len() / 4);

    for (i, &ch) in chars.iter().enumerate() {
        if i > 0 && ch.is_uppercase() {
            let prev = chars[i - 1];
            let next = chars.get(i + 1).copied();

            let after_lower = prev.is_lowercase() || prev.is_numeric();
            let ends_acronym = prev.is_uppercase() && matches!(next, Some(c) if c.is_lowercase());

            if after_lower || ends_acronym {
                result.push(marker);
            }
        }
        result.push(ch);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        assert_eq!(
            split_words("  first__name - here\t", Separators::Word),
            vec!["first", "name", "here"]
        );
        assert_eq!(split_words("a.b_c", Separators::Word), vec!["a.b", "c"]);
        assert_eq!(split_words("a.b_c", Separators::Dotted), vec!["a", "b", "c"]);
        assert!(split_words("_-_ ", Separators::Word).is_empty());
    }

    #[test]
    fn test_hyphenate() {
        assert_eq!(hyphenate("snake_case word"), "snake-case-word");
        assert_eq!(hyphenate("_a -- b_"), "a-b");
        assert_eq!(hyphenate("---"), "");
    }

    #[test]
    fn test_case_boundaries() {
        assert_eq!(mark_case_boundaries("camelCaseWord", '.'), "camel.Case.Word");
        assert_eq!(mark_case_boundaries("SCREEN_NAME", '.'), "SCREEN_NAME");
        assert_eq!(mark_case_boundaries("XMLHttpRequest", '.'), "XML.Http.Request");
        assert_eq!(mark_case_boundaries("v2Api", '.'), "v2.Api");
        assert_eq!(mark_case_boundaries("Leading", '.'), "Leading");
    }
}
