use serde::{Deserialize, Serialize};

const COMMENT_MARKER: char = '#';

/// Line classification counts for one file's contents.
///
/// Invariant: `code + blank + comment == total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStats {
    pub total: usize,
    pub code: usize,
    pub blank: usize,
    pub comment: usize,
}

impl LineStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            code: 0,
            blank: 0,
            comment: 0,
        }
    }

    #[must_use]
    pub const fn sloc(&self) -> usize {
        self.code
    }
}

/// Classify every line of `content` as code, blank or comment.
///
/// Splits on `'\n'` rather than `str::lines`: content after the last newline
/// still counts as a line, and an empty string is one empty line. A line is
/// blank when its trimmed form is empty, a comment when the trimmed form
/// starts with `#` (the marker check never fires on blank lines, so the two
/// buckets are mutually exclusive), and code otherwise.
#[must_use]
pub fn count_lines(content: &str) -> LineStats {
    let mut stats = LineStats::new();
    for line in content.split('\n') {
        classify_line(line, &mut stats);
    }
    stats
}

fn classify_line(line: &str, stats: &mut LineStats) {
    stats.total += 1;

    let trimmed = line.trim();

    if trimmed.is_empty() {
        stats.blank += 1;
        return;
    }

    if trimmed.starts_with(COMMENT_MARKER) {
        stats.comment += 1;
        return;
    }

    stats.code += 1;
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
