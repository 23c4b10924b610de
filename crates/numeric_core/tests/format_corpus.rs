//! Fixture-driven formatter corpus.
//!
//! Cases live in `fixtures/format_cases.toml` so new display/parse
//! expectations can be added without touching the runner.

use numeric_core::{NumericOptions, parse_free_text, to_display, to_number};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Corpus {
    #[serde(default)]
    display: Vec<Case>,
    #[serde(default)]
    parse: Vec<Case>,
}

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    input: String,
    expect: String,
    #[serde(default)]
    decimal: Option<char>,
    #[serde(default)]
    thousands: Option<char>,
    #[serde(default)]
    scale: Option<u8>,
    #[serde(default)]
    fixed: Option<bool>,
}

impl Case {
    fn options(&self) -> NumericOptions {
        let mut options = NumericOptions::default();
        if let Some(decimal) = self.decimal {
            options.decimal = decimal;
        }
        if let Some(thousands) = self.thousands {
            options.thousands = thousands;
        }
        if let Some(scale) = self.scale {
            options.scale = scale;
        }
        if let Some(fixed) = self.fixed {
            options.fixed = fixed;
        }
        options
    }
}

fn corpus() -> Corpus {
    toml::from_str(include_str!("fixtures/format_cases.toml")).expect("corpus parses")
}

#[test]
fn display_cases() {
    for case in corpus().display {
        let options = case.options();
        let got = to_display(&case.input, &options);
        assert_eq!(got, case.expect, "display case '{}'", case.name);
        // Committed output must be stable under a second pass.
        assert_eq!(
            to_display(&got, &options),
            got,
            "display case '{}' is not idempotent",
            case.name
        );
    }
}

#[test]
fn parse_cases() {
    for case in corpus().parse {
        let options = case.options();
        let got = parse_free_text(&case.input, &options);
        assert_eq!(got, case.expect, "parse case '{}'", case.name);
        if !got.is_empty() {
            assert!(
                to_number(&got, &options).is_some(),
                "parse case '{}' produced unreadable output {:?}",
                case.name,
                got
            );
        }
    }
}
