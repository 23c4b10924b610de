//! Keystroke classification.

use crate::key::{Key, KeyInfo};
use crate::options::NumericOptions;

/// What a keystroke means to the engine.
///
/// The set is closed: the evaluator is a single `match` over it, and hosts
/// never register new actions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// A decimal digit to insert.
    Digit(char),
    /// The minus key.
    Minus,
    /// The configured decimal character.
    Decimal,
    /// The configured thousands character (always rejected downstream).
    Thousands,
    /// A configured shortcut multiplier key.
    Shortcut(char),
    /// The Backspace key.
    Backspace,
    /// The Delete key.
    Delete,
    /// The undo chord (command + `z`).
    Undo,
    /// The redo chord (command + shift + `z`, or command + `y`).
    Redo,
    /// Anything the engine does not handle.
    Unknown,
}

/// Map a keystroke to its [`Action`] under the given options.
///
/// Pure lookup, no side effects. Undo/redo chords are recognized first so a
/// shortcut letter bound to `z` or `y` cannot shadow them.
pub fn classify(key: &KeyInfo, options: &NumericOptions) -> Action {
    if key.modifiers.command() {
        match key.key {
            Key::Char('z') if !key.modifiers.shift => return Action::Undo,
            Key::Char('z') => return Action::Redo,
            Key::Char('y') => return Action::Redo,
            _ => {}
        }
    }

    match &key.key {
        Key::Backspace => Action::Backspace,
        Key::Delete => Action::Delete,
        Key::Char(c) if c.is_ascii_digit() => Action::Digit(*c),
        Key::Char('-') => Action::Minus,
        Key::Char(c) if *c == options.decimal => Action::Decimal,
        Key::Char(c) if *c == options.thousands => Action::Thousands,
        Key::Char(c) if options.shortcuts.contains_key(c) => Action::Shortcut(*c),
        Key::Char(_) | Key::Named(_) => Action::Unknown,
    }
}
