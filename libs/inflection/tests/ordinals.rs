use inflection::ordinalize;
use pretty_assertions::assert_eq;

#[test]
fn numbers_in_a_sentence() {
    assert_eq!(ordinalize("the 1 pitch"), "the 1st pitch");
    assert_eq!(ordinalize("the 11 run"), "the 11th run");
    assert_eq!(ordinalize("the 22 run"), "the 22nd run");
    assert_eq!(ordinalize("the 103 day of the 2 year"), "the 103rd day of the 2nd year");
}

#[test]
fn words_are_not_treated_as_numbers() {
    // Only tokens that parse as integers get a suffix, so "pitch" does not
    // become "pitchth".
    assert_eq!(ordinalize("pitch"), "pitch");
    assert_eq!(ordinalize("room 1b on floor 3"), "room 1b on floor 3rd");
    assert_eq!(ordinalize("11a"), "11a");
}

#[test]
fn inter_token_whitespace_is_normalized() {
    assert_eq!(ordinalize("the\t1\n  pitch"), "the 1st pitch");
}
