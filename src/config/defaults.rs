//! Built-in indent rule table.
//!
//! User configuration is consulted first; this table supplies the rules for
//! the core special forms and macros when the user says nothing.

use super::settings::IndentKind;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Rules for well-known head symbols. Kept as data so that adding a symbol
/// is adding a row, not code.
static BUILTIN_INDENTS: LazyLock<HashMap<&'static str, IndentKind>> = LazyLock::new(|| {
    let pairs = [
        // Named definitions
        ("defn", IndentKind::Defn),
        ("defn-", IndentKind::Defn),
        ("defmacro", IndentKind::Defn),
        ("defmethod", IndentKind::Defn),
        ("deftest", IndentKind::Defn),
        // Plain definitions
        ("def", IndentKind::Def),
        ("defonce", IndentKind::Def),
        // Anonymous functions
        ("fn", IndentKind::Fn),
        // Binding forms
        ("let", IndentKind::Binding),
        ("binding", IndentKind::Binding),
        ("loop", IndentKind::Binding),
        ("for", IndentKind::Binding),
        ("doseq", IndentKind::Binding),
        ("if-let", IndentKind::Binding),
        ("when-let", IndentKind::Binding),
        ("with-open", IndentKind::Binding),
        ("with-redefs", IndentKind::Binding),
        // Conditionals keeping their test on the opening line
        ("if", IndentKind::If),
        ("if-not", IndentKind::If),
        ("when", IndentKind::If),
        ("when-not", IndentKind::If),
        // Clause-paired forms
        ("case", IndentKind::Case),
        ("cond", IndentKind::Cond),
        ("condp", IndentKind::Condp),
        ("cond->", IndentKind::CondThread),
        ("cond->>", IndentKind::CondThread),
        // Body forms
        ("try", IndentKind::Try),
        ("do", IndentKind::Do),
        ("doto", IndentKind::Do),
    ];

    pairs.into_iter().collect()
});

/// Look a head symbol up in the built-in table.
pub fn builtin_indent(symbol: &str) -> Option<IndentKind> {
    BUILTIN_INDENTS.get(symbol).copied()
}
