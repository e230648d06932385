mod lines;

pub use lines::{LineStats, count_lines};
