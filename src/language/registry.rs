use std::str::FromStr;

use crate::error::CodeProbeError;

/// Extensions treated as source code by [`is_code_file`].
pub const CODE_EXTENSIONS: [&str; 9] = ["py", "js", "ts", "java", "c", "cpp", "go", "rs", "rb"];

/// Extract the extension from a filename: everything after the last `.`,
/// lowercased. Returns an empty string when the filename has no `.`.
///
/// No validation is applied to the rest of the name, so `"archive.tar.gz"`
/// yields `"gz"` and `".gitignore"` yields `"gitignore"`.
#[must_use]
pub fn file_extension(filename: &str) -> String {
    filename
        .rfind('.')
        .map_or_else(String::new, |idx| filename[idx + 1..].to_lowercase())
}

/// Check whether a filename looks like a source code file.
///
/// Membership is decided by extension against [`CODE_EXTENSIONS`];
/// case-insensitive because the extension is lowercased first.
#[must_use]
pub fn is_code_file(filename: &str) -> bool {
    let ext = file_extension(filename);
    CODE_EXTENSIONS.contains(&ext.as_str())
}

/// Languages with a dedicated function-definition pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    JavaScript,
}

impl Language {
    /// Resolve a language tag, falling back to [`Language::Python`] for any
    /// unrecognized value.
    ///
    /// Matching is exact: `"javascript"` selects the JavaScript pattern,
    /// everything else (including differently-cased spellings) gets the
    /// Python fallback.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        Self::from_str(tag).unwrap_or(Self::Python)
    }
}

impl FromStr for Language {
    type Err = CodeProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "python" => Ok(Self::Python),
            "javascript" => Ok(Self::JavaScript),
            _ => Err(CodeProbeError::UnknownLanguage { tag: s.to_string() }),
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
