//! Structural invariants of the fix engine, checked over a corpus of
//! representative inputs.

use orikaeshi::language::parse;
use orikaeshi::{FormatSettings, check_source, fix_source};
use tree_sitter::Node;

const CORPUS: &[(&str, usize)] = &[
    ("(println \"Hello\" \"World\" \"from\" \"Clojure\")", 30),
    ("(defn foo [x] (+ x 1))", 15),
    ("(let [x 1 y 2 z 3] body)", 14),
    ("{:a 1 :b 2 :c 3}", 10),
    ("(a (b c d e) f)", 10),
    ("(def x \"long-string-literal\")", 10),
    ("(é b c)", 5),
    ("(case x :a 1 :b 2 fallback)", 12),
    ("(condp = x 1 :one 2 :two :none)", 16),
    ("(cond-> {} (pos? x) (assoc :pos true) (neg? x) (assoc :neg true))", 24),
    ("#{:alpha :beta :gamma :delta}", 12),
    ("[:div {:class \"wide\"} [:span \"nested content here\"]]", 20),
    ("(f a ;; trailing comment\n b c d e f g h i j k)", 12),
    ("#_:orikaeshi/ignore (this stays exactly as written)", 10),
    ("(outer #_:orikaeshi/ignore (protected form here) tail-element)", 16),
    ("#?(:clj (clojure-only thing) :cljs (script-only thing))", 20),
];

fn settings(line_length: usize) -> FormatSettings {
    FormatSettings {
        line_length,
        ..FormatSettings::default()
    }
}

fn is_atom_kind(kind: &str) -> bool {
    matches!(
        kind,
        "sym_lit"
            | "kwd_lit"
            | "str_lit"
            | "num_lit"
            | "char_lit"
            | "regex_lit"
            | "bool_lit"
            | "nil_lit"
    )
}

fn collect_atoms(node: Node, source: &str, atoms: &mut Vec<String>) {
    if is_atom_kind(node.kind()) {
        atoms.push(source[node.start_byte()..node.end_byte()].to_string());
        return;
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect_atoms(child, source, atoms);
    }
}

fn atoms(source: &str) -> Vec<String> {
    let tree = parse(source).expect("source should parse");
    let mut atoms = Vec::new();
    collect_atoms(tree.root_node(), source, &mut atoms);
    atoms
}

/// Flatten a tree to (kind, leaf text) pairs in traversal order.
fn shape(node: Node, source: &str, out: &mut Vec<(String, Option<String>)>) {
    let text = if node.named_child_count() == 0 {
        Some(source[node.start_byte()..node.end_byte()].trim_end().to_string())
    } else {
        None
    };
    out.push((node.kind().to_string(), text));
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        shape(child, source, out);
    }
}

fn tree_shape(source: &str) -> Vec<(String, Option<String>)> {
    let tree = parse(source).expect("source should parse");
    let mut out = Vec::new();
    shape(tree.root_node(), source, &mut out);
    out
}

#[test]
fn atomic_tokens_survive_fixing_unchanged() {
    for (source, limit) in CORPUS {
        let fixed = fix_source(source, &settings(*limit)).expect("fix");
        assert_eq!(
            atoms(source),
            atoms(&fixed),
            "token sequence changed for {source:?}"
        );
    }
}

#[test]
fn fixed_source_parses_to_the_same_structure() {
    for (source, limit) in CORPUS {
        let fixed = fix_source(source, &settings(*limit)).expect("fix");
        assert_eq!(
            tree_shape(source),
            tree_shape(&fixed),
            "tree structure changed for {source:?}"
        );
    }
}

#[test]
fn fixing_is_idempotent() {
    for (source, limit) in CORPUS {
        let once = fix_source(source, &settings(*limit)).expect("fix");
        let twice = fix_source(&once, &settings(*limit)).expect("fix again");
        assert_eq!(once, twice, "second fix changed output for {source:?}");
    }
}

#[test]
fn ignored_ranges_appear_verbatim_in_the_output() {
    let source = "(outer #_:orikaeshi/ignore (protected form here) tail-element)";
    let fixed = fix_source(source, &settings(16)).expect("fix");
    assert!(
        fixed.contains("(protected form here)"),
        "protected form was rewritten: {fixed:?}"
    );
}

#[test]
fn remaining_violations_have_no_productive_break_left() {
    use orikaeshi::engine::breaks::{breakable_forms, plan_edits};
    use orikaeshi::engine::ignore::IgnoredRanges;
    use orikaeshi::text::edits::apply_edits;

    for (source, limit) in CORPUS {
        let config = settings(*limit);
        let fixed = fix_source(source, &config).expect("fix");
        let tree = parse(&fixed).expect("fixed source parses");
        let ignored = IgnoredRanges::collect(&tree, &fixed);

        for violation in check_source(&fixed, &config).expect("check") {
            for candidate in breakable_forms(&tree, violation.line, &ignored) {
                let edits = plan_edits(candidate, &fixed, &config);
                if edits.is_empty() {
                    continue;
                }
                let applied = apply_edits(&fixed, &edits).expect("apply");
                assert_eq!(
                    applied, fixed,
                    "line {} of {fixed:?} still had a productive break",
                    violation.line
                );
            }
        }
    }
}

#[test]
fn fix_never_lengthens_the_longest_line() {
    for (source, limit) in CORPUS {
        let config = settings(*limit);
        let fixed = fix_source(source, &config).expect("fix");
        let longest = |text: &str| {
            text.split('\n')
                .map(|line| line.chars().count())
                .max()
                .unwrap_or(0)
        };
        assert!(
            longest(&fixed) <= longest(source),
            "fixing lengthened a line of {source:?}"
        );
    }
}
