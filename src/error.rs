use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodeProbeError {
    #[error("Unknown language tag: {tag}")]
    UnknownLanguage { tag: String },
}

pub type Result<T> = std::result::Result<T, CodeProbeError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
