use regex::Regex;

use crate::language::Language;

/// Counts function-definition-like patterns for one language.
///
/// This is a syntactic heuristic, not a parser: keyword text inside strings,
/// comments or nested definitions over- and under-counts.
pub struct DefinitionCounter {
    pattern: Regex,
}

impl Default for DefinitionCounter {
    fn default() -> Self {
        Self::new(Language::Python)
    }
}

impl DefinitionCounter {
    #[must_use]
    pub fn new(language: Language) -> Self {
        let pattern = match language {
            // Optional leading whitespace, `def`, a name, an opening paren.
            Language::Python => Regex::new(r"(?m)^\s*def\s+\w+\s*\(").expect("Invalid regex"),
            // Named `function`, assignment of an (optionally async) function
            // expression, or an arrow function with a parenthesized list.
            Language::JavaScript => Regex::new(
                r"(?m)function\s+\w+\s*\(|^\s*\w+\s*[=:]\s*(?:async\s+)?function|\w+\s*=\s*\([^)]*\)\s*=>",
            )
            .expect("Invalid regex"),
        };
        Self { pattern }
    }

    /// Build a counter from a raw language tag, falling back to the Python
    /// pattern for unrecognized tags.
    #[must_use]
    pub fn for_tag(tag: &str) -> Self {
        Self::new(Language::from_tag(tag))
    }

    #[must_use]
    pub fn count(&self, content: &str) -> usize {
        self.pattern.find_iter(content).count()
    }
}

#[cfg(test)]
#[path = "functions_tests.rs"]
mod tests;
