//! Session pipeline tests

use std::fs;

use wordshift_engine::EngineConfig;
use wordshift_runtime::{RunConfig, Session};

const RULES: &str = "\
# Toy daughter language
$GROUP
V:a,e,i,o,u
P:p,t,k
B:b,d,g
N:m,n

$SUBST
qu:kw
c:k

$POST
P:B:V_V
mb:mm
u:o
e::_%
";

#[test]
fn session_from_sources() {
    let mut session =
        Session::from_sources(RULES, "aqua\ncanto\npeta\n", EngineConfig::default()).unwrap();
    let out = session.run().words().to_vec();

    // "aqua" -> "akwa" (SUBST); nothing intervocalic to voice.
    // "canto" -> "kanto"; "nt" is not intervocalic.
    // "peta" -> "peda".
    assert_eq!(out, vec!["akwa", "kanto", "peda"]);

    // The anchored rule on the last line is reserved syntax.
    let diagnostics: Vec<_> = session.diagnostics().iter().collect();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].origin.line, 16);

    // A second run reports the same problems, not twice as many.
    session.run();
    assert_eq!(session.diagnostics().len(), 1);
}

#[test]
fn session_from_files() {
    let dir = std::env::temp_dir().join(format!("wordshift-pipeline-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let rules = dir.join("rules.txt");
    let words = dir.join("words.txt");
    fs::write(&rules, RULES).unwrap();
    fs::write(&words, "tuta\n\nmaga\n").unwrap();

    let config = RunConfig::new(&rules).with_words(&words).with_trace_rules(true);
    let mut session = Session::load(&config).unwrap();
    let out = session.run().words().to_vec();

    assert_eq!(out, vec!["toda", "", "maga"]);
    assert_eq!(session.stats().rules_applied, 5);
    assert_eq!(session.stats().rules_skipped, 1);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn transform_word_agrees_with_batch_run() {
    let words = ["aqua", "canto", "peta", "tuta", "mamba"];
    let mut session =
        Session::from_sources(RULES, &words.join("\n"), EngineConfig::default()).unwrap();

    let single: Vec<String> = words
        .iter()
        .map(|w| session.engine().transform_word(w))
        .collect();
    assert_eq!(session.run().words(), single.as_slice());
}

#[test]
fn demo_ruleset() {
    let demos = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");
    let config = RunConfig::new(demos.join("lenition.txt")).with_words(demos.join("words.txt"));
    let mut session = Session::load(&config).unwrap();

    assert_eq!(
        session.run().words(),
        &["akwa", "kafiθa", "setella", "mii", "amixus"]
    );
    assert!(session.diagnostics().is_empty());
}
