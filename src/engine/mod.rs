//! The reformatting engine: scan, plan, edit, repeat.
//!
//! `check_source` reports violations without mutating anything;
//! `fix_source` runs the parse-edit-reparse loop to a fixed point, the
//! first unbreakable violation, or the iteration cap.

pub mod breaks;
pub mod ignore;
pub mod rules;

pub use ignore::IGNORE_SENTINEL;

use crate::config::FormatSettings;
use crate::error::FormatResult;
use crate::language;
use crate::text::edits::apply_edits;
use crate::text::lines::{Violation, violations};
use ignore::IgnoredRanges;

/// Safety net for the fix loop. Correct inputs converge far below this
/// because every successful pass replaces at least one intra-line gap with
/// a newline.
const MAX_ITERATIONS: usize = 100;

/// Report the lines of `source` wider than the configured limit, minus the
/// lines protected by ignore markers. Never mutates the source.
pub fn check_source(source: &str, settings: &FormatSettings) -> FormatResult<Vec<Violation>> {
    let found = violations(source, settings.line_length);
    if found.is_empty() {
        return Ok(found);
    }
    let tree = language::parse(source)?;
    let ignored = IgnoredRanges::collect(&tree, source);
    Ok(found
        .into_iter()
        .filter(|violation| !ignored.covers_line(violation.line))
        .collect())
}

/// Rewrite `source` so that lines fit the configured limit wherever a
/// structural break can make them fit.
///
/// Each pass targets the first violating line, tries its breakable forms
/// outermost first, and keeps the first application that changes the
/// source. Remaining unbreakable violations are not an error.
pub fn fix_source(source: &str, settings: &FormatSettings) -> FormatResult<String> {
    let mut current = source.to_string();

    for iteration in 0..MAX_ITERATIONS {
        let found = violations(&current, settings.line_length);
        let Some(target) = found.first().copied() else {
            return Ok(current);
        };

        let tree = language::parse(&current)?;
        let ignored = IgnoredRanges::collect(&tree, &current);
        let candidates = breaks::breakable_forms(&tree, target.line, &ignored);

        let mut progressed = false;
        for candidate in candidates {
            let edits = breaks::plan_edits(candidate, &current, settings);
            if edits.is_empty() {
                continue;
            }
            let next = apply_edits(&current, &edits)?;
            if next != current {
                log::debug!(
                    "pass {}: broke a {} on line {}",
                    iteration + 1,
                    candidate.kind(),
                    target.line
                );
                current = next;
                progressed = true;
                break;
            }
        }

        if !progressed {
            log::debug!(
                "line {} ({} chars) cannot be broken further",
                target.line,
                target.length
            );
            return Ok(current);
        }
    }

    log::warn!("iteration cap of {MAX_ITERATIONS} reached, returning best effort");
    Ok(current)
}
