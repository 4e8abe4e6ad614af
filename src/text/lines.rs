//! Line width scanning.

/// A line whose character count exceeds the configured width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    /// 1-indexed line number
    pub line: usize,
    /// Width of the line in characters
    pub length: usize,
}

/// Yield the 1-indexed lines of `text` wider than `limit` characters, in
/// source order. A trailing carriage return is not counted.
pub fn violations(text: &str, limit: usize) -> Vec<Violation> {
    text.split('\n')
        .enumerate()
        .filter_map(|(idx, line)| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let length = line.chars().count();
            (length > limit).then_some(Violation {
                line: idx + 1,
                length,
            })
        })
        .collect()
}
