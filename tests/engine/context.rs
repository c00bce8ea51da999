//! Context binding tests

use proptest::prelude::*;
use wordshift_engine::{BoundPairs, ContextBinder, DiagnosticKind, expand};
use wordshift_foundation::{Group, GroupTable};

fn table() -> GroupTable {
    GroupTable::new()
        .with_group(Group::new('V', ["a", "e", "i"]))
        .unwrap()
        .with_group(Group::new('P', ["p", "t"]))
        .unwrap()
        .with_group(Group::new('B', ["b", "d"]))
        .unwrap()
        .with_group(Group::new('U', ["a_", "e"]))
        .unwrap()
}

fn rule_pairs(g: &GroupTable, p1: &str, p2: &str) -> BoundPairs {
    BoundPairs::new(expand(p1, g), expand(p2, g))
}

#[test]
fn vowel_environment() {
    let g = table();
    let bound = ContextBinder::new(&g)
        .bind("V_V", &rule_pairs(&g, "t", "d"))
        .unwrap();
    assert_eq!(bound.len(), 9);
    assert_eq!(bound.find[0], "ata");
    assert_eq!(bound.replace[0], "ada");
    assert_eq!(bound.find[8], "iti");
}

#[test]
fn one_bad_variant_fails_whole_rule() {
    let g = table();
    // "U_" expands to "a__" (two markers) and "e_" (fine).
    let err = ContextBinder::new(&g)
        .bind("U_", &rule_pairs(&g, "t", "d"))
        .unwrap_err();
    assert_eq!(
        err,
        DiagnosticKind::MultipleBoundaries {
            variant: "a__".to_string(),
            count: 2
        }
    );
}

proptest! {
    #[test]
    fn bound_pairs_share_environment(left in "[aeiV]{0,2}", right in "[aeiV]{0,2}") {
        let g = table();
        let context = format!("{left}_{right}");
        let pairs = rule_pairs(&g, "P", "B");
        let bound = ContextBinder::new(&g).bind(&context, &pairs).unwrap();

        let environments = expand(&context, &g);
        prop_assert_eq!(bound.len(), environments.len() * pairs.len());

        for (i, (f, r)) in bound.iter().enumerate() {
            let environment = &environments[i / pairs.len()];
            let (l, rt) = environment.split_once('_').unwrap();
            let s1 = &pairs.find[i % pairs.len()];
            let s2 = &pairs.replace[i % pairs.len()];
            prop_assert_eq!(f.to_string(), format!("{l}{s1}{rt}"));
            prop_assert_eq!(r.to_string(), format!("{l}{s2}{rt}"));
        }
    }
}
