//! Keystroke descriptors delivered by the host adapter.
//!
//! The engine never talks to an event source. The host builds one [`KeyInfo`]
//! per key-down from whatever its platform reports (a DOM `KeyboardEvent.key`
//! string, a toolkit key code) and hands it to the classifier.

/// Modifier keys held during a keystroke.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Whether Ctrl is held.
    pub ctrl: bool,
    /// Whether the platform command key (Cmd/Win) is held.
    pub meta: bool,
    /// Whether Shift is held.
    pub shift: bool,
    /// Whether Alt is held.
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        ctrl: false,
        meta: false,
        shift: false,
        alt: false,
    };

    /// Only Ctrl pressed.
    pub const CTRL: Self = Self {
        ctrl: true,
        meta: false,
        shift: false,
        alt: false,
    };

    /// Only the platform command key pressed.
    pub const META: Self = Self {
        ctrl: false,
        meta: true,
        shift: false,
        alt: false,
    };

    /// Returns a copy with Shift added.
    pub fn shift(self) -> Self {
        Self {
            shift: true,
            ..self
        }
    }

    /// Returns a copy with Alt added.
    pub fn alt(self) -> Self {
        Self { alt: true, ..self }
    }

    /// The "control group": Ctrl or the platform command key.
    ///
    /// This is the modifier that turns Backspace/Delete into delete-to-edge
    /// and `z`/`y` into undo/redo.
    #[inline]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }

    /// Returns true if no modifiers are set.
    pub fn is_empty(self) -> bool {
        !self.ctrl && !self.meta && !self.shift && !self.alt
    }
}

/// A single key, lowercased.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// A printable character key.
    Char(char),
    /// The Backspace key.
    Backspace,
    /// The Delete (forward delete) key.
    Delete,
    /// Any other named key: `"arrowleft"`, `"tab"`, `"enter"`, ...
    Named(String),
}

/// A keystroke: the key plus the modifiers held with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyInfo {
    /// The key itself.
    pub key: Key,
    /// Modifiers held when the key went down.
    pub modifiers: Modifiers,
}

impl KeyInfo {
    /// Create a keystroke descriptor.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Build from a host key name, e.g. a DOM `KeyboardEvent.key` value.
    ///
    /// Names are lowercased; a one-character name becomes [`Key::Char`],
    /// everything else maps to the named-key variants.
    ///
    /// # Examples
    ///
    /// ```
    /// use numeric_core::{Key, KeyInfo, Modifiers};
    ///
    /// let k = KeyInfo::from_name("5", Modifiers::NONE);
    /// assert_eq!(k.key, Key::Char('5'));
    ///
    /// let k = KeyInfo::from_name("Backspace", Modifiers::NONE);
    /// assert_eq!(k.key, Key::Backspace);
    ///
    /// let k = KeyInfo::from_name("ArrowLeft", Modifiers::NONE);
    /// assert_eq!(k.key, Key::Named("arrowleft".to_string()));
    /// ```
    pub fn from_name(name: &str, modifiers: Modifiers) -> Self {
        let lower = name.to_lowercase();
        let mut chars = lower.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) => Key::Char(c),
            _ => match lower.as_str() {
                "backspace" => Key::Backspace,
                "delete" => Key::Delete,
                _ => Key::Named(lower),
            },
        };
        Self { key, modifiers }
    }

    /// Convenience constructor for an unmodified character key.
    pub fn char_key(c: char) -> Self {
        Self::new(Key::Char(c.to_ascii_lowercase()), Modifiers::NONE)
    }

    /// True when this keystroke would put a character into the field if left
    /// to the host's default handling.
    ///
    /// Character keys carried with the control group (e.g. ctrl+c) are
    /// commands, not text, and count as non-printable here.
    pub fn is_printable(&self) -> bool {
        matches!(self.key, Key::Char(_)) && !self.modifiers.command()
    }
}
