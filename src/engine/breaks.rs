//! Break planning: locating breakable forms on a line and turning one into
//! a set of gap-replacement edits.

use crate::config::FormatSettings;
use crate::engine::ignore::IgnoredRanges;
use crate::engine::rules;
use crate::text::edits::Edit;
use crate::text::index::char_column;
use tree_sitter::{Node, Tree};

/// Forms on the 1-indexed `line` that can still be broken, outermost first.
///
/// A form qualifies when its kind is breakable, it is not inside an ignored
/// byte range, and at least two adjacent named children still start on the
/// target line. A form already broken one-element-per-line is not re-broken.
pub fn breakable_forms<'t>(
    tree: &'t Tree,
    line: usize,
    ignored: &IgnoredRanges,
) -> Vec<Node<'t>> {
    let row = line - 1;
    let mut found = Vec::new();
    collect(tree.root_node(), row, ignored, &mut found);
    found
}

fn collect<'t>(node: Node<'t>, row: usize, ignored: &IgnoredRanges, found: &mut Vec<Node<'t>>) {
    if node.start_position().row > row || node.end_position().row < row {
        return;
    }
    if is_candidate(node, row, ignored) {
        found.push(node);
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect(child, row, ignored, found);
    }
}

fn is_candidate(node: Node, row: usize, ignored: &IgnoredRanges) -> bool {
    if !rules::is_breakable_kind(node.kind()) {
        return false;
    }
    if ignored.covers_bytes(node.start_byte(), node.end_byte()) {
        return false;
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.named_children(&mut cursor).collect();
    children
        .windows(2)
        .any(|pair| pair[0].start_position().row == row && pair[1].start_position().row == row)
}

/// Plan the edits that break `node` according to its effective rule.
///
/// Every child that must start a fresh line yields one edit replacing the
/// gap to its immediate predecessor. An empty result means the node offers
/// no change.
pub fn plan_edits(node: Node, source: &str, settings: &FormatSettings) -> Vec<Edit> {
    let rule = rules::effective_rule(node, source, settings);
    let keep = rules::keep_count(rule);

    let mut cursor = node.walk();
    let children: Vec<Node> = node.named_children(&mut cursor).collect();
    if children.len() <= keep {
        return Vec::new();
    }

    let column = char_column(source, node.start_byte());
    let indent = " ".repeat(column + rules::indent_offset(rule));

    let break_targets: Vec<usize> = if rules::groups_pairs(rule) {
        pair_starts(&children, keep)
    } else {
        (keep..children.len()).collect()
    };

    let mut edits = Vec::new();
    for idx in break_targets {
        let prev = children[idx - 1];
        let next = children[idx];

        // An inline comment stays attached to the element it trails.
        if next.kind() == "comment" && next.start_position().row == prev.end_position().row {
            continue;
        }

        // Comment tokens carry their trailing newline already.
        let replacement = if prev.kind() == "comment" {
            indent.clone()
        } else {
            format!("\n{indent}")
        };

        if &source[prev.end_byte()..next.start_byte()] == replacement.as_str() {
            continue;
        }
        edits.push(Edit::new(prev.end_byte(), next.start_byte(), replacement));
    }
    edits
}

/// Indexes of the tail children that open a pair. Comments never occupy a
/// pair slot; an odd trailing element opens a "pair" of its own.
fn pair_starts(children: &[Node], keep: usize) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut slot = 0;
    for (idx, child) in children.iter().enumerate().skip(keep) {
        if child.kind() == "comment" {
            continue;
        }
        if slot == 0 {
            starts.push(idx);
        }
        slot = (slot + 1) % 2;
    }
    starts
}
