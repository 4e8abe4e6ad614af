use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Indent rule tag attached to a head symbol.
///
/// The set is closed: behaviour (keep count, indent column, pair grouping)
/// is keyed off the tag, so adding a rule means adding a variant here and a
/// branch in the engine's dispatch, never a new type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndentKind {
    /// Definition with a name: keep head and name on the opening line
    Defn,
    /// Plain def: keep head and name
    Def,
    /// Anonymous function: keep head and argument vector
    Fn,
    /// Binding form: keep head and binding vector
    Binding,
    /// Conditional: keep head and test
    If,
    /// Dispatch form with paired clauses and an optional default
    Case,
    /// Clause-paired conditional: only the head stays
    Cond,
    /// Predicate conditional: keep head, predicate, and expression
    Condp,
    /// Threading conditional with test/expression pairs
    #[serde(rename = "cond->")]
    CondThread,
    /// Body form: only the head stays
    Try,
    /// Body form: only the head stays
    Do,
    /// Synthetic tag for map literals
    Map,
    /// Synthetic tag for the binding vector child of a binding form
    BindingVector,
}

/// Settings consumed by the engine, deserializable from `.orikaeshi.toml`.
///
/// `indents` maps a head symbol name to its rule tag and is consulted before
/// the built-in table, so users can add or override rules per symbol.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct FormatSettings {
    /// Maximum line width in characters
    pub line_length: usize,
    /// Per-symbol indent rule overrides, merged over the built-in table
    pub indents: HashMap<String, IndentKind>,
}

/// Default maximum line width
pub const DEFAULT_LINE_LENGTH: usize = 80;

impl Default for FormatSettings {
    fn default() -> Self {
        FormatSettings {
            line_length: DEFAULT_LINE_LENGTH,
            indents: HashMap::new(),
        }
    }
}
