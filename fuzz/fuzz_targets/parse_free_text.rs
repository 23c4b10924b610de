#![no_main]

use libfuzzer_sys::fuzz_target;
use numeric_core::{NumericOptions, parse_free_text, to_display, to_number};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let options = NumericOptions::default();

    let parsed = parse_free_text(text, &options);
    if parsed.is_empty() {
        return;
    }

    // Whatever survives parsing must be readable as a finite number and
    // format stably.
    assert!(to_number(&parsed, &options).is_some(), "unreadable {parsed:?}");
    let display = to_display(&parsed, &options);
    assert_eq!(to_display(&display, &options), display);
});
