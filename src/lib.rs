pub mod analyzer;
pub mod counter;
pub mod error;
pub mod language;

pub use analyzer::{
    ComplexityEstimator, ComplexityReport, DefinitionCounter, ImportScanner, analyze_imports,
    calculate_complexity, count_functions,
};
pub use counter::{LineStats, count_lines};
pub use error::{CodeProbeError, Result};
pub use language::{CODE_EXTENSIONS, Language, file_extension, is_code_file};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
