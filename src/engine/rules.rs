//! Indent rule dispatch.
//!
//! Behaviour is keyed off a flat symbol-to-tag table: the tag decides how
//! many children stay on the opening line, where broken children land, and
//! whether the tail is consumed in pairs.

use crate::config::{FormatSettings, IndentKind, defaults};
use crate::language::node_text;
use tree_sitter::Node;

/// Node kinds the planner may break.
pub fn is_breakable_kind(kind: &str) -> bool {
    matches!(
        kind,
        "list_lit"
            | "vec_lit"
            | "map_lit"
            | "set_lit"
            | "anon_fn_lit"
            | "read_cond_lit"
            | "splicing_read_cond_lit"
    )
}

fn is_list_like(kind: &str) -> bool {
    matches!(kind, "list_lit" | "anon_fn_lit")
}

/// Rule derived from the head symbol of a list-like node, user table first.
fn head_rule(node: Node, source: &str, settings: &FormatSettings) -> Option<IndentKind> {
    let head = node.named_child(0)?;
    if head.kind() != "sym_lit" {
        return None;
    }
    let name = node_text(head, source);
    settings
        .indents
        .get(name)
        .copied()
        .or_else(|| defaults::builtin_indent(name))
}

/// The effective rule for a node.
///
/// List-like nodes dispatch on their head symbol; map literals carry the
/// synthetic `map` tag; a vector sitting in the binding position of a
/// binding form carries `binding-vector`; everything else is a plain call
/// or data literal.
pub fn effective_rule(node: Node, source: &str, settings: &FormatSettings) -> Option<IndentKind> {
    let kind = node.kind();
    if is_list_like(kind) {
        return head_rule(node, source, settings);
    }
    if kind == "map_lit" {
        return Some(IndentKind::Map);
    }
    if kind == "vec_lit" {
        let parent = node.parent()?;
        if is_list_like(parent.kind())
            && head_rule(parent, source, settings) == Some(IndentKind::Binding)
            && parent.named_child(1).map(|n| n.id()) == Some(node.id())
        {
            return Some(IndentKind::BindingVector);
        }
    }
    None
}

/// How many named children stay on the opening line.
pub fn keep_count(rule: Option<IndentKind>) -> usize {
    match rule {
        // head + predicate + expression
        Some(IndentKind::Condp) => 3,
        // head + (name / args / test / bindings / first pair)
        Some(
            IndentKind::Defn
            | IndentKind::Def
            | IndentKind::Fn
            | IndentKind::Binding
            | IndentKind::If
            | IndentKind::Case
            | IndentKind::CondThread
            | IndentKind::Map
            | IndentKind::BindingVector,
        ) => 2,
        // only the head, or the first element of a plain call / data literal
        Some(IndentKind::Cond | IndentKind::Try | IndentKind::Do) | None => 1,
    }
}

/// Offset added to the opening delimiter's column for broken children.
pub fn indent_offset(rule: Option<IndentKind>) -> usize {
    match rule {
        // align to the first element inside the bracket
        Some(IndentKind::BindingVector) => 1,
        // body-form indent
        Some(_) => 2,
        // one space from the opening delimiter
        None => 1,
    }
}

/// Whether the tail children are consumed two at a time.
pub fn groups_pairs(rule: Option<IndentKind>) -> bool {
    matches!(
        rule,
        Some(
            IndentKind::Map
                | IndentKind::BindingVector
                | IndentKind::Cond
                | IndentKind::Condp
                | IndentKind::Case
                | IndentKind::CondThread
        )
    )
}
