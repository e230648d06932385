use std::collections::BTreeSet;

use regex::Regex;

/// Extracts top-level imported package names from Python source.
///
/// Recognizes `import <dotted.path>` and `from <dotted.path> import ...` at
/// line starts; only Python syntax is supported.
pub struct ImportScanner {
    plain_import: Regex,
    from_import: Regex,
}

impl Default for ImportScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportScanner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            plain_import: Regex::new(r"(?m)^import\s+([\w.]+)").expect("Invalid regex"),
            from_import: Regex::new(r"(?m)^from\s+([\w.]+)\s+import").expect("Invalid regex"),
        }
    }

    /// Scan `content` and return the deduplicated top-level package names in
    /// lexicographic order.
    #[must_use]
    pub fn scan(&self, content: &str) -> Vec<String> {
        let mut names = BTreeSet::new();

        for caps in self.plain_import.captures_iter(content) {
            let path = caps.get(1).map_or("", |m| m.as_str());
            names.insert(top_level_name(path));
        }
        for caps in self.from_import.captures_iter(content) {
            let path = caps.get(1).map_or("", |m| m.as_str());
            names.insert(top_level_name(path));
        }

        names.into_iter().collect()
    }
}

/// First dot-separated segment of an import path.
fn top_level_name(path: &str) -> String {
    path.split('.').next().unwrap_or(path).to_string()
}

#[cfg(test)]
#[path = "imports_tests.rs"]
mod tests;
