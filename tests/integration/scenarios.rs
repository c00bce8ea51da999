//! End-to-end scenarios
//!
//! Each scenario parses a ruleset, runs it over a small corpus, and pins the
//! exact output.

use wordshift_engine::{DiagnosticKind, Engine};
use wordshift_parser::{parse_ruleset, parse_words};

fn run(rules: &str, words: &str) -> (Vec<String>, Engine) {
    let ruleset = parse_ruleset(rules).unwrap();
    let mut engine = Engine::new(ruleset, parse_words(words));
    let out = engine.run().words().to_vec();
    (out, engine)
}

// =============================================================================
// Group substitution
// =============================================================================

#[test]
fn group_substitution() {
    let rules = "$GROUP\nP:p,t,k\nB:b,d,g\n$POST\nP:B\n";
    let (out, engine) = run(rules, "pat\n");
    assert_eq!(out, vec!["bad"]);
    assert!(engine.diagnostics().is_empty());
}

// =============================================================================
// Context-sensitive change
// =============================================================================

#[test]
fn context_sensitive_change() {
    let rules = "$GROUP\nV:a,e,i,o,u\n$POST\nt:d:V_V\n";
    let (out, engine) = run(rules, "ata\ntap\n");
    assert_eq!(out, vec!["ada", "tap"]);
    assert!(engine.diagnostics().is_empty());
}

// =============================================================================
// Pairing error
// =============================================================================

#[test]
fn pairing_error_skips_rule() {
    let rules = "$GROUP\nP:p,t,k\nB:b,d,g\n$POST\nP:BB\n";
    let (out, engine) = run(rules, "pat\n");
    assert_eq!(out, vec!["pat"]);

    let diagnostics: Vec<_> = engine.diagnostics().iter().collect();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].origin.line, 5);
    assert_eq!(diagnostics[0].rule, "P:BB");
    assert_eq!(
        diagnostics[0].kind,
        DiagnosticKind::LengthMismatch {
            find_count: 3,
            replace_count: 9
        }
    );
}

#[test]
fn every_broken_rule_reported_in_one_run() {
    let rules = "\
$GROUP
P:p,t,k
B:b,d,g
V:a,e,i,o,u
$POST
P:BB
t:d:VV
a:o
k:g:%_
";
    let (out, engine) = run(rules, "pat\n");
    assert_eq!(out, vec!["pot"]);

    let lines: Vec<usize> = engine.diagnostics().iter().map(|d| d.origin.line).collect();
    assert_eq!(lines, vec![6, 7, 9]);
    assert_eq!(engine.diagnostics().skipped(), 3);
}

// =============================================================================
// SUBST before POST
// =============================================================================

#[test]
fn subst_precedes_post() {
    let rules = "$POST\nk:g\n$SUBST\nqu:kw\n";
    let (out, _) = run(rules, "quest\n");
    assert_eq!(out, vec!["gwest"]);
}

// =============================================================================
// Cascading and ordering
// =============================================================================

#[test]
fn later_rules_see_earlier_output() {
    let rules = "\
$GROUP
P:p,t,k
B:b,d,g
F:f,θ,x
V:a,e,i,o,u
$POST
P:B:V_V
B:F:V_V
";
    // Voiceless stops voice, then every intervocalic voiced stop spirantises,
    // including the ones produced by the first rule.
    let (out, _) = run(rules, "apa\naba\nata\nakta\n");
    assert_eq!(out, vec!["afa", "afa", "aθa", "akta"]);
}

#[test]
fn reversed_order_gives_different_result() {
    let rules = "\
$GROUP
P:p,t,k
B:b,d,g
F:f,θ,x
V:a,e,i,o,u
$POST
B:F:V_V
P:B:V_V
";
    let (out, _) = run(rules, "apa\naba\n");
    assert_eq!(out, vec!["aba", "afa"]);
}

#[test]
fn deletion_and_insertion() {
    let rules = "$GROUP\nV:a,e,i,o,u\n$POST\nh::V_\n:e:s_t\n";
    let (out, _) = run(rules, "aha\nstop\n");
    assert_eq!(out, vec!["aa", "setop"]);
}

#[test]
fn empty_find_is_reported_not_inserted() {
    let (out, engine) = run("$SUBST\n:x\n$POST\n:y\n", "pat\n");
    assert_eq!(out, vec!["pat"]);

    let lines: Vec<usize> = engine.diagnostics().iter().map(|d| d.origin.line).collect();
    assert_eq!(lines, vec![2, 4]);
    assert!(
        engine
            .diagnostics()
            .iter()
            .all(|d| d.kind == DiagnosticKind::EmptyFind { pair: 0 })
    );
}
