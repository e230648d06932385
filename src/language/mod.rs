mod registry;

pub use registry::{CODE_EXTENSIONS, Language, file_extension, is_code_file};
