//! Byte-range edits and their application.

use crate::error::{FormatError, FormatResult};

/// A replacement of the byte range `[start_byte, end_byte)` with `text`.
///
/// Edits emitted within one pass must be pairwise non-overlapping; the
/// applicator treats overlap as a planner bug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub start_byte: usize,
    pub end_byte: usize,
    pub text: String,
}

impl Edit {
    pub fn new(start_byte: usize, end_byte: usize, text: impl Into<String>) -> Self {
        Edit {
            start_byte,
            end_byte,
            text: text.into(),
        }
    }
}

/// Apply a set of non-overlapping edits to `source`.
///
/// Edits are applied in descending start order so the byte offsets of the
/// edits not yet applied stay valid.
pub fn apply_edits(source: &str, edits: &[Edit]) -> FormatResult<String> {
    let mut ordered: Vec<&Edit> = edits.iter().collect();
    ordered.sort_by(|a, b| b.start_byte.cmp(&a.start_byte));

    for pair in ordered.windows(2) {
        if pair[1].end_byte > pair[0].start_byte {
            return Err(FormatError::internal(format!(
                "overlapping edits: {}..{} and {}..{}",
                pair[1].start_byte, pair[1].end_byte, pair[0].start_byte, pair[0].end_byte
            )));
        }
    }

    let mut out = source.to_string();
    for edit in ordered {
        if edit.start_byte > edit.end_byte || edit.end_byte > out.len() {
            return Err(FormatError::internal(format!(
                "edit out of bounds: {}..{} in {} bytes",
                edit.start_byte,
                edit.end_byte,
                out.len()
            )));
        }
        out.replace_range(edit.start_byte..edit.end_byte, &edit.text);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_a_single_edit() {
        let out = apply_edits("(a b)", &[Edit::new(2, 3, "\n ")]).expect("apply");
        assert_eq!(out, "(a\n b)");
    }

    #[test]
    fn applies_edits_regardless_of_emission_order() {
        let edits = vec![Edit::new(2, 3, "\n "), Edit::new(4, 5, "\n ")];
        let out = apply_edits("(a b c)", &edits).expect("apply");
        assert_eq!(out, "(a\n b\n c)");

        let reversed: Vec<Edit> = edits.into_iter().rev().collect();
        let out = apply_edits("(a b c)", &reversed).expect("apply");
        assert_eq!(out, "(a\n b\n c)");
    }

    #[test]
    fn rejects_overlapping_edits() {
        let edits = vec![Edit::new(1, 4, "x"), Edit::new(3, 6, "y")];
        let err = apply_edits("abcdefg", &edits).expect_err("overlap is an internal error");
        assert!(matches!(err, FormatError::Internal { .. }));
    }

    #[test]
    fn rejects_out_of_bounds_edits() {
        let err = apply_edits("abc", &[Edit::new(2, 9, "x")]).expect_err("past the end");
        assert!(matches!(err, FormatError::Internal { .. }));
    }

    #[test]
    fn touching_edits_are_allowed() {
        // [1,2) and [2,3) share no byte
        let edits = vec![Edit::new(1, 2, "X"), Edit::new(2, 3, "Y")];
        let out = apply_edits("abc", &edits).expect("apply");
        assert_eq!(out, "aXY");
    }

    #[test]
    fn empty_edit_set_returns_source_unchanged() {
        let out = apply_edits("(a b)", &[]).expect("apply");
        assert_eq!(out, "(a b)");
    }
}
