//! Group table tests

use proptest::prelude::*;
use wordshift_foundation::{ErrorKind, Group, GroupTable};

fn vowels_and_stops() -> GroupTable {
    GroupTable::new()
        .with_group(Group::new('V', ["a", "e", "i", "o", "u"]))
        .unwrap()
        .with_group(Group::new('P', ["p", "t", "k"]))
        .unwrap()
}

#[test]
fn members_keep_definition_order() {
    let table = vowels_and_stops();
    assert_eq!(table.members('V').unwrap(), &["a", "e", "i", "o", "u"]);
    assert_eq!(table.get('P').unwrap().len(), 3);
}

#[test]
fn unknown_names_are_absent() {
    let table = vowels_and_stops();
    assert!(table.get('B').is_none());
    assert!(!table.contains('_'));
}

#[test]
fn duplicate_names_rejected() {
    let err = vowels_and_stops()
        .with_group(Group::new('V', ["y"]))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateGroup('V')));
}

#[test]
fn cardinality_of_context_template() {
    let table = vowels_and_stops();
    assert_eq!(table.cardinality("V_V"), 25);
    assert_eq!(table.cardinality("VPV"), 75);
}

proptest! {
    #[test]
    fn literal_templates_have_cardinality_one(template in "[a-z_]{0,16}") {
        prop_assert_eq!(vowels_and_stops().cardinality(&template), 1);
    }

    #[test]
    fn cardinality_multiplies_per_reference(repeats in 0usize..6) {
        let template = "P".repeat(repeats);
        prop_assert_eq!(vowels_and_stops().cardinality(&template), 3usize.pow(repeats as u32));
    }
}
