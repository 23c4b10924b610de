//! Field-session layer over the numeric editing engine.
//!
//! One [`NumericField`] stands in for one bound input field: it owns the
//! field's options and undo history and packages the call sequence a host
//! adapter performs per event: key-down, paste/drop of external text,
//! commit on blur, programmatic assignment. The crate stays pure: the host
//! owns the visible text and caret and applies whatever these methods
//! return.
//!
//! Binding is explicit. Constructing a [`NumericField`] is "bind"; dropping
//! it is "unbind" and releases the history with it. Nothing here registers
//! callbacks or holds host resources.

use numeric_core::{
    Action, EditState, KeyInfo, NumericOptions, ValueHistory, caret_offset, classify,
    clamp_to_char_boundary, evaluate, from_number, parse_free_text, reformat, to_display,
    to_number,
};

/// What the host should do with a keystroke.
#[derive(Clone, Debug, PartialEq)]
pub enum KeyOutcome {
    /// Suppress the key's default effect and show the returned text/caret.
    Applied {
        /// New display text for the field.
        display: String,
        /// New collapsed caret position, as a byte offset into `display`.
        caret: usize,
    },
    /// Suppress the key's default effect and fire the host's invalid-key
    /// notification.
    Rejected,
    /// A control key the engine does not own; leave the host's default
    /// behavior alone.
    PassThrough,
}

/// Engine-side stand-in for one bound numeric input field.
pub struct NumericField {
    options: NumericOptions,
    history: ValueHistory,
}

impl NumericField {
    /// Bind a field with the given options.
    pub fn new(options: NumericOptions) -> Self {
        Self {
            options,
            history: ValueHistory::new(),
        }
    }

    /// Bind a field with the default options.
    pub fn with_defaults() -> Self {
        Self::new(NumericOptions::default())
    }

    /// The current options.
    pub fn options(&self) -> &NumericOptions {
        &self.options
    }

    /// Swap the configuration. Takes effect from the next event; the history
    /// keeps whatever was committed under the old options.
    pub fn set_options(&mut self, options: NumericOptions) {
        self.options = options;
    }

    /// Run one keystroke through the pipeline.
    ///
    /// `text`, `caret_start`, and `caret_end` are the field's live contents
    /// and selection at key-down; out-of-range or mid-character offsets are
    /// clamped. Committed results are recorded for undo, except for the
    /// undo/redo chords themselves, which read the history instead.
    pub fn keydown(
        &mut self,
        text: &str,
        caret_start: usize,
        caret_end: usize,
        key: &KeyInfo,
    ) -> KeyOutcome {
        let state = EditState::new(text, caret_start, caret_end);
        let action = classify(key, &self.options);
        let next = evaluate(action, &state, key, &self.options, &mut self.history);

        if !next.valid {
            log::trace!(target: "field.keydown", "rejected {action:?} on {text:?}");
            return KeyOutcome::Rejected;
        }
        if action == Action::Unknown {
            return KeyOutcome::PassThrough;
        }

        let display = reformat(&next.text, &self.options);
        let shift = caret_offset(&next.text, &display, next.caret(), &self.options);
        let caret = next.caret().saturating_add_signed(shift);
        let caret = clamp_to_char_boundary(&display, caret);

        if !matches!(action, Action::Undo | Action::Redo) {
            self.history.record(&display);
        }
        log::trace!(target: "field.keydown", "applied {action:?} -> {display:?}");
        KeyOutcome::Applied { display, caret }
    }

    /// Take pasted or dropped external text.
    ///
    /// Returns the new display text to show, or `None` when nothing
    /// parseable was found, in which case the field stays untouched.
    pub fn paste(&mut self, pasted: &str) -> Option<String> {
        let parsed = parse_free_text(pasted, &self.options);
        if parsed.is_empty() {
            log::trace!(target: "field.paste", "nothing parseable in {pasted:?}");
            return None;
        }
        Some(self.assign(&parsed))
    }

    /// Normalize the field on blur or host-driven input: fully format
    /// whatever is in it and record the result.
    pub fn commit(&mut self, text: &str) -> String {
        self.assign(text)
    }

    /// Programmatic value assignment.
    pub fn set_value(&mut self, text: &str) -> String {
        self.assign(text)
    }

    /// Programmatic numeric assignment. A value with no plain-notation
    /// rendering (non-finite, exponent range) clears the field.
    pub fn set_number(&mut self, value: f64) -> String {
        let raw = from_number(value, &self.options);
        self.assign(&raw)
    }

    /// Numeric readback of display text. `None` means "no committed value",
    /// which is distinct from zero.
    pub fn raw_value(&self, display: &str) -> Option<f64> {
        to_number(display, &self.options)
    }

    fn assign(&mut self, text: &str) -> String {
        let display = to_display(text, &self.options);
        self.history.record(&display);
        display
    }
}

#[cfg(test)]
mod tests;
