use super::*;
use numeric_core::{Key, Modifiers, SignRange};

fn press(field: &mut NumericField, text: &str, caret: usize, name: &str) -> KeyOutcome {
    field.keydown(text, caret, caret, &KeyInfo::from_name(name, Modifiers::NONE))
}

fn chord(field: &mut NumericField, text: &str, caret: usize, c: char, m: Modifiers) -> KeyOutcome {
    field.keydown(text, caret, caret, &KeyInfo::new(Key::Char(c), m))
}

fn applied(outcome: KeyOutcome) -> (String, usize) {
    match outcome {
        KeyOutcome::Applied { display, caret } => (display, caret),
        other => panic!("expected Applied, got {other:?}"),
    }
}

#[test]
fn typing_digits_regroups_and_keeps_the_caret_at_the_end() {
    let mut field = NumericField::with_defaults();

    let (text, caret) = applied(press(&mut field, "", 0, "1"));
    assert_eq!((text.as_str(), caret), ("1", 1));
    let (text, caret) = applied(press(&mut field, &text, caret, "2"));
    assert_eq!((text.as_str(), caret), ("12", 2));
    let (text, caret) = applied(press(&mut field, &text, caret, "3"));
    assert_eq!((text.as_str(), caret), ("123", 3));
    let (text, caret) = applied(press(&mut field, &text, caret, "4"));
    // The reformat inserts a separator before the caret, so it shifts by one.
    assert_eq!((text.as_str(), caret), ("1,234", 5));
}

#[test]
fn stray_letters_are_rejected() {
    let mut field = NumericField::with_defaults();
    assert_eq!(press(&mut field, "12", 2, "x"), KeyOutcome::Rejected);
}

#[test]
fn control_keys_pass_through() {
    let mut field = NumericField::with_defaults();
    assert_eq!(press(&mut field, "12", 1, "ArrowLeft"), KeyOutcome::PassThrough);
    assert_eq!(press(&mut field, "12", 1, "Tab"), KeyOutcome::PassThrough);
    let copy = KeyInfo::new(Key::Char('c'), Modifiers::CTRL);
    assert_eq!(field.keydown("12", 0, 2, &copy), KeyOutcome::PassThrough);
}

#[test]
fn delete_skips_the_separator_and_shifts_the_caret_back() {
    let mut field = NumericField::with_defaults();
    let (text, caret) = applied(press(&mut field, "1,234", 1, "Delete"));
    assert_eq!(text, "134");
    assert_eq!(caret, 1);
}

#[test]
fn undo_and_redo_walk_the_committed_values() {
    let mut field = NumericField::with_defaults();
    let (t, c) = applied(press(&mut field, "", 0, "1"));
    let (t, c) = applied(press(&mut field, &t, c, "2"));
    let (t, c) = applied(press(&mut field, &t, c, "3"));
    assert_eq!(t, "123");

    let (t, c) = applied(chord(&mut field, &t, c, 'z', Modifiers::CTRL));
    assert_eq!((t.as_str(), c), ("12", 2));
    let (t, c) = applied(chord(&mut field, &t, c, 'z', Modifiers::CTRL));
    assert_eq!((t.as_str(), c), ("1", 1));
    let (t, c) = applied(chord(&mut field, &t, c, 'z', Modifiers::CTRL.shift()));
    assert_eq!((t.as_str(), c), ("12", 2));
    let (t, c) = applied(chord(&mut field, &t, c, 'y', Modifiers::META));
    assert_eq!((t.as_str(), c), ("123", 3));
}

#[test]
fn a_fresh_edit_discards_the_redo_branch() {
    let mut field = NumericField::with_defaults();
    let (t, c) = applied(press(&mut field, "", 0, "1"));
    let (t, c) = applied(press(&mut field, &t, c, "2"));
    let (t, _c) = applied(press(&mut field, &t, c, "3"));
    assert_eq!(t, "123");

    let (t, c) = applied(chord(&mut field, &t, 3, 'z', Modifiers::CTRL));
    assert_eq!(t, "12");
    let (t, c) = applied(press(&mut field, &t, c, "5"));
    assert_eq!(t, "125");

    // "123" is no longer reachable: redo stays on the new branch tip.
    let (t, _c) = applied(chord(&mut field, &t, c, 'z', Modifiers::CTRL.shift()));
    assert_eq!(t, "125");
}

#[test]
fn undo_of_the_first_keystroke_clears_the_field() {
    let mut field = NumericField::with_defaults();
    let (t, _c) = applied(press(&mut field, "", 0, "7"));
    assert_eq!(t, "7");
    let (t, c) = applied(chord(&mut field, &t, 1, 'z', Modifiers::CTRL));
    assert_eq!((t.as_str(), c), ("", 0));
}

#[test]
fn paste_parses_and_fully_formats() {
    let mut field = NumericField::with_defaults();
    assert_eq!(field.paste("1,234.56"), Some("1,234.56".to_string()));
    assert_eq!(field.paste("2.5m"), Some("2,500,000.00".to_string()));
    assert_eq!(field.paste("no numbers here"), None);
}

#[test]
fn commit_pads_to_the_configured_scale() {
    let mut field = NumericField::with_defaults();
    assert_eq!(field.commit("1,234"), "1,234.00");
    assert_eq!(field.commit(""), "");
}

#[test]
fn programmatic_assignment_and_readback() {
    let mut field = NumericField::with_defaults();
    assert_eq!(field.set_number(1234.5), "1,234.50");
    assert_eq!(field.raw_value("1,234.50"), Some(1234.5));
    assert_eq!(field.raw_value(""), None);

    // No plain rendering: the field is cleared, not set to garbage.
    assert_eq!(field.set_number(f64::NAN), "");
    assert_eq!(field.set_number(1e22), "");
}

#[test]
fn positive_fields_refuse_the_minus_key() {
    let mut field = NumericField::new(NumericOptions {
        sign_range: SignRange::Positive,
        ..NumericOptions::default()
    });
    assert_eq!(press(&mut field, "", 0, "-"), KeyOutcome::Rejected);
}

#[test]
fn options_can_change_between_edits() {
    let mut field = NumericField::with_defaults();
    let (t, _c) = applied(press(&mut field, "", 0, "5"));
    assert_eq!(t, "5");

    field.set_options(NumericOptions {
        scale: 0,
        ..NumericOptions::default()
    });
    assert_eq!(press(&mut field, "5", 1, "."), KeyOutcome::Rejected);
    assert_eq!(field.commit("5"), "5");
}
