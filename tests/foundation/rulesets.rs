//! Ruleset construction tests

use wordshift_foundation::{Rule, RuleOrigin, Ruleset, Section, SoundChange, Substitution};

#[test]
fn rules_iterate_subst_then_post() {
    let ruleset = Ruleset::new()
        .with_rule(SoundChange::new("k", "g").with_origin(RuleOrigin::at_line(2)))
        .with_rule(Substitution::new("qu", "kw").with_origin(RuleOrigin::at_line(5)));

    let rules: Vec<Rule> = ruleset.rules().collect();
    assert_eq!(rules[0].section(), Section::Subst);
    assert_eq!(rules[0].origin().line, 5);
    assert_eq!(rules[1].section(), Section::Post);
    assert_eq!(rules[1].origin().line, 2);
}

#[test]
fn post_rule_display_keeps_all_fields() {
    let rule = SoundChange::new("h", "")
        .with_context("V_")
        .with_exceptions("aha");
    assert_eq!(rule.to_string(), "h::V_:aha");

    let rule = SoundChange::new("h", "").with_exceptions("aha");
    assert_eq!(rule.to_string(), "h:::aha");
}

#[test]
fn field_bounds_per_section() {
    assert_eq!(Section::Group.field_bounds(), (2, 2));
    assert_eq!(Section::Subst.field_bounds(), (2, 2));
    assert_eq!(Section::Post.field_bounds(), (2, 4));
}
