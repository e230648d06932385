mod complexity;
mod functions;
mod imports;

pub use complexity::{ComplexityEstimator, ComplexityReport};
pub use functions::DefinitionCounter;
pub use imports::ImportScanner;

/// Count function-definition-like patterns in `content` using the heuristic
/// for `language`, falling back to the Python pattern for unrecognized tags.
#[must_use]
pub fn count_functions(content: &str, language: &str) -> usize {
    DefinitionCounter::for_tag(language).count(content)
}

/// Extract the sorted, deduplicated top-level package names imported by
/// Python source.
#[must_use]
pub fn analyze_imports(content: &str) -> Vec<String> {
    ImportScanner::new().scan(content)
}

/// Estimate cyclomatic complexity of `content`. Always at least 1.
#[must_use]
pub fn calculate_complexity(content: &str) -> usize {
    ComplexityEstimator::new().score(content)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
