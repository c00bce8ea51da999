//! Ruleset parsing tests

use wordshift_foundation::ErrorKind;
use wordshift_parser::{Line, RulesetLexer, parse_ruleset};

const LENITION: &str = "\
# Lenition between vowels, then cluster simplification.
$GROUP
V:a,e,i,o,u
P:p,t,k
B:b,d,g
F:f,θ,x

$SUBST
ph:f
th:θ

$POST
# voicing
P:B:V_V
# spirantisation of the voiced series
B:F:V_V
h::V_
";

#[test]
fn full_ruleset() {
    let ruleset = parse_ruleset(LENITION).unwrap();

    assert_eq!(ruleset.groups.len(), 4);
    assert_eq!(ruleset.groups.members('F').unwrap(), &["f", "θ", "x"]);

    let subst: Vec<(&str, &str)> = ruleset
        .substitutions
        .iter()
        .map(|s| (s.find.as_str(), s.replace.as_str()))
        .collect();
    assert_eq!(subst, vec![("ph", "f"), ("th", "θ")]);

    let post: Vec<String> = ruleset
        .sound_changes
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(post, vec!["P:B:V_V", "B:F:V_V", "h::V_"]);
}

#[test]
fn comments_and_blank_lines_skipped() {
    let lines: Vec<Line<'_>> = RulesetLexer::lines(LENITION).map(|(_, l)| l).collect();
    let records = lines
        .iter()
        .filter(|l| matches!(l, Line::Record(_)))
        .count();
    assert_eq!(records, 9);
}

#[test]
fn indented_lines_are_trimmed() {
    let ruleset = parse_ruleset("  $POST\n   k:g   \n").unwrap();
    assert_eq!(ruleset.sound_changes[0].pattern2, "g");
}

#[test]
fn first_error_stops_parsing() {
    let source = "$GROUP\nP:p,t\n$POST\nP\nQ:R:S:T:U\n";
    let err = parse_ruleset(source).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingFields { .. }));
    assert_eq!(err.line(), Some(4));
}

#[test]
fn presubstitution_section_is_not_supported() {
    let err = parse_ruleset("$PRESUB\nc:k\n").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownSection(_)));
    assert_eq!(err.line(), Some(1));
}

#[test]
fn group_members_are_not_trimmed() {
    let ruleset = parse_ruleset("$GROUP\nV:a, e\n").unwrap();
    assert_eq!(ruleset.groups.members('V').unwrap(), &["a", " e"]);
}
