//! Parser adapter over the statically embedded Clojure grammar.
//!
//! The grammar is process-wide immutable data; a fresh `Parser` is acquired
//! for each pass and dropped before the next one.

use crate::error::{FormatError, FormatResult};
use tree_sitter::{Parser, Tree};

/// The Clojure language backing every parse.
pub fn clojure_language() -> tree_sitter::Language {
    tree_sitter_clojure::LANGUAGE.into()
}

/// Create a parser with the Clojure grammar loaded.
pub fn new_parser() -> FormatResult<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(&clojure_language())
        .map_err(|e| FormatError::internal(format!("failed to load clojure grammar: {e}")))?;
    Ok(parser)
}

/// Parse source text into a concrete syntax tree.
///
/// A missing tree is a fatal parse error. Trees containing `ERROR` nodes are
/// returned as-is; error nodes are opaque to the break planner and therefore
/// never rewritten.
pub fn parse(source: &str) -> FormatResult<Tree> {
    let mut parser = new_parser()?;
    parser
        .parse(source, None)
        .ok_or_else(|| FormatError::parse("parser produced no tree"))
}

/// Source text of a node.
pub fn node_text<'s>(node: tree_sitter::Node, source: &'s str) -> &'s str {
    node.utf8_text(source.as_bytes()).unwrap_or_default()
}
