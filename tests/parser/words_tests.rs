//! Word-list parsing tests

use wordshift_parser::parse_words;

#[test]
fn positions_follow_input_lines() {
    let corpus = parse_words("pat\n\n  ata\ntap");
    assert_eq!(corpus.len(), 4);
    assert_eq!(corpus.words()[1], "");
    assert_eq!(corpus.words()[2], "ata");
}

#[test]
fn unicode_words() {
    let corpus = parse_words("θalassa\nŋaru\n");
    assert_eq!(corpus.words(), &["θalassa", "ŋaru"]);
}
