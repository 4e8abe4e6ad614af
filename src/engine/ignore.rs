//! Structural ignore mechanism.
//!
//! A discard whose single named child is the sentinel keyword protects its
//! next named sibling: the sibling's byte range is never rewritten and its
//! lines are never reported.

use crate::language::node_text;
use tree_sitter::{Node, Tree};

/// Fixed namespaced keyword marking the following form as ignored.
pub const IGNORE_SENTINEL: &str = ":orikaeshi/ignore";

/// Byte and line ranges protected by ignore markers, collected in one
/// traversal per pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IgnoredRanges {
    /// 1-indexed line spans, inclusive on both ends
    pub lines: Vec<(usize, usize)>,
    /// Half-open byte spans
    pub bytes: Vec<(usize, usize)>,
}

impl IgnoredRanges {
    /// Walk the tree and record every marked form.
    pub fn collect(tree: &Tree, source: &str) -> Self {
        let mut ranges = IgnoredRanges::default();
        ranges.walk(tree.root_node(), source);
        ranges
    }

    /// Whether a 1-indexed line lies inside any ignored span.
    pub fn covers_line(&self, line: usize) -> bool {
        self.lines
            .iter()
            .any(|&(start, end)| start <= line && line <= end)
    }

    /// Whether the byte range `[start, end)` is contained in an ignored span.
    pub fn covers_bytes(&self, start: usize, end: usize) -> bool {
        self.bytes
            .iter()
            .any(|&(from, to)| from <= start && end <= to)
    }

    fn walk(&mut self, node: Node, source: &str) {
        let mut cursor = node.walk();
        let children: Vec<Node> = node.named_children(&mut cursor).collect();

        let mut protected = None;
        for (idx, child) in children.iter().enumerate() {
            if is_ignore_marker(*child, source) {
                // A trailing marker with nothing to protect records no range.
                if let Some(target) = children.get(idx + 1) {
                    let start = target.start_position().row + 1;
                    let end = target.end_position().row + 1;
                    self.lines.push((start, end));
                    self.bytes.push((target.start_byte(), target.end_byte()));
                    protected = Some(idx + 1);
                }
                continue;
            }
            if protected == Some(idx) {
                continue;
            }
            self.walk(*child, source);
        }
    }
}

/// A discard node carrying exactly the sentinel keyword.
///
/// Back-to-back markers chain naturally: the first marker's successor is the
/// second marker, which still records its own successor when visited.
fn is_ignore_marker(node: Node, source: &str) -> bool {
    if node.kind() != "dis_expr" || node.named_child_count() != 1 {
        return false;
    }
    match node.named_child(0) {
        Some(child) => child.kind() == "kwd_lit" && node_text(child, source) == IGNORE_SENTINEL,
        None => false,
    }
}
