#![no_main]

use field::{KeyOutcome, NumericField};
use libfuzzer_sys::fuzz_target;
use numeric_core::{KeyInfo, Modifiers};

fuzz_target!(|data: &[u8]| {
    let mut field = NumericField::with_defaults();
    let mut text = String::new();
    let mut caret = 0usize;

    for chunk in data.chunks(2) {
        let modifiers = match chunk.get(1) {
            Some(b) if b % 4 == 1 => Modifiers::CTRL,
            Some(b) if b % 4 == 2 => Modifiers::CTRL.shift(),
            Some(b) if b % 4 == 3 => Modifiers::META,
            _ => Modifiers::NONE,
        };
        let key = match chunk[0] {
            0 => KeyInfo::from_name("Backspace", modifiers),
            1 => KeyInfo::from_name("Delete", modifiers),
            2 => KeyInfo::from_name("ArrowLeft", modifiers),
            b => KeyInfo::from_name(&char::from(b % 128).to_string(), modifiers),
        };

        // Exercise arbitrary caret positions too, not just the one the
        // engine handed back.
        if let Some(b) = chunk.get(1) {
            caret = usize::from(*b) % (text.len() + 1);
        }

        match field.keydown(&text, caret, caret, &key) {
            KeyOutcome::Applied {
                display,
                caret: new_caret,
            } => {
                // Structural invariants of every accepted state.
                assert!(display.matches('.').count() <= 1, "text {display:?}");
                assert!(
                    display.is_empty() || !display[1..].contains('-'),
                    "text {display:?}"
                );
                assert!(new_caret <= display.len());
                assert!(display.is_char_boundary(new_caret));
                text = display;
                caret = new_caret;
            }
            KeyOutcome::Rejected | KeyOutcome::PassThrough => {}
        }
    }
});
