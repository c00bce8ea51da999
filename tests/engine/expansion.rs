//! Template expansion tests

use proptest::prelude::*;
use wordshift_engine::{Expander, expand};
use wordshift_foundation::{Group, GroupTable};

fn table() -> GroupTable {
    GroupTable::new()
        .with_group(Group::new('P', ["p", "t", "k"]))
        .unwrap()
        .with_group(Group::new('B', ["b", "d", "g"]))
        .unwrap()
        .with_group(Group::new('F', ["f", "s", "x"]))
        .unwrap()
        .with_group(Group::new('N', ["m", "n"]))
        .unwrap()
        .with_group(Group::new('L', ["l", "r"]))
        .unwrap()
}

#[test]
fn outer_group_member_varies_slowest() {
    assert_eq!(
        expand("PN", &table()),
        vec!["pm", "pn", "tm", "tn", "km", "kn"]
    );
}

#[test]
fn trace_does_not_change_result() {
    let g = table();
    assert_eq!(
        Expander::new(&g).with_trace(true).expand("NPL"),
        expand("NPL", &g)
    );
}

/// Template built from slots: each slot is a literal or one of two groups
/// with matching cardinality on each side.
fn paired_templates() -> impl Strategy<Value = (String, String)> {
    let slot = prop_oneof![
        "[aeiou]".prop_map(|s| (s.clone(), s)),
        Just(("P".to_string(), "B".to_string())),
        Just(("P".to_string(), "F".to_string())),
        Just(("N".to_string(), "L".to_string())),
        Just(("N".to_string(), "N".to_string())),
    ];
    prop::collection::vec(slot, 0..5).prop_map(|slots| {
        slots
            .into_iter()
            .fold((String::new(), String::new()), |(mut a, mut b), (x, y)| {
                a.push_str(&x);
                b.push_str(&y);
                (a, b)
            })
    })
}

fn index_in(group: &[&str], member: char) -> Option<usize> {
    group.iter().position(|m| m.starts_with(member))
}

proptest! {
    #[test]
    fn pairing_lengths_match((find, replace) in paired_templates()) {
        let g = table();
        prop_assert_eq!(expand(&find, &g).len(), expand(&replace, &g).len());
    }

    #[test]
    fn pairing_uses_same_member_index((find, replace) in paired_templates()) {
        let g = table();
        let stops = ["p", "t", "k"];
        let voiced = ["b", "d", "g"];
        let fricatives = ["f", "s", "x"];
        let nasals = ["m", "n"];
        let liquids = ["l", "r"];

        for (f, r) in expand(&find, &g).iter().zip(expand(&replace, &g).iter()) {
            for ((fc, rc), slot) in f.chars().zip(r.chars()).zip(find.chars().zip(replace.chars())) {
                let (a, b) = match slot {
                    ('P', 'B') => (index_in(&stops, fc), index_in(&voiced, rc)),
                    ('P', 'F') => (index_in(&stops, fc), index_in(&fricatives, rc)),
                    ('N', 'L') => (index_in(&nasals, fc), index_in(&liquids, rc)),
                    ('N', 'N') => (index_in(&nasals, fc), index_in(&nasals, rc)),
                    _ => (Some(0), Some(usize::from(fc != rc))),
                };
                prop_assert!(a.is_some());
                prop_assert_eq!(a, b);
            }
        }
    }
}
