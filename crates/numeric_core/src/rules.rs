//! One edit rule per classified action.
//!
//! Every rule is pure: it takes the pre-edit state and returns the post-edit
//! state, with `valid` cleared to mark a rejected keystroke. Candidate text
//! is always produced by splicing the replacement over the selection; rules
//! only differ in what they splice and what they refuse.

use crate::action::Action;
use crate::format::{from_number, to_number};
use crate::history::ValueHistory;
use crate::key::KeyInfo;
use crate::options::{NumericOptions, SignRange};
use crate::state::EditState;
use crate::text::{decimal_index, decimal_part, integer_part, prev_char_boundary, sign_len, splice};

/// Apply the rule for `action` to `state`.
///
/// `history` is consulted only by [`Action::Undo`] and [`Action::Redo`];
/// recording new values remains the caller's job so that undo/redo
/// themselves never pollute the log.
pub fn evaluate(
    action: Action,
    state: &EditState,
    key: &KeyInfo,
    options: &NumericOptions,
    history: &mut ValueHistory,
) -> EditState {
    match action {
        Action::Digit(digit) => on_digit(state, digit, options),
        Action::Minus => on_minus(state, options),
        Action::Decimal => on_decimal(state, options),
        Action::Thousands => state.rejected(),
        Action::Shortcut(c) => on_shortcut(state, c, options),
        Action::Backspace => on_backspace(state, key),
        Action::Delete => on_delete(state, key, options),
        Action::Undo => recall(history.undo()),
        Action::Redo => recall(history.redo()),
        Action::Unknown => on_unknown(state, key),
    }
}

fn on_digit(state: &EditState, digit: char, options: &NumericOptions) -> EditState {
    let sel = state.selection();

    // A collapsed caret at 0 cannot put a digit ahead of an existing sign.
    if sign_len(&state.text) == 1 && sel.start == 0 && sel.end == 0 {
        return state.rejected();
    }

    let remaining = splice(&state.text, "", sel.start, sel.end);
    if !zero_rule_allows(&remaining, sel.start, options) {
        return state.rejected();
    }

    let mut buf = [0u8; 4];
    let candidate = splice(&state.text, digit.encode_utf8(&mut buf), sel.start, sel.end);
    let scale = usize::from(options.scale);
    if decimal_part(&candidate, options.decimal).chars().count() > scale {
        return state.rejected();
    }

    EditState::accepted(candidate, sel.start + digit.len_utf8())
}

/// The leading-zero rule, applied to the text with the selection removed.
///
/// Inside the integer part (positions up to and including its end): when the
/// integer part is exactly `0` no digit may land anywhere, otherwise no
/// digit may land at position 0 (that would read `d...` ahead of existing
/// digits, e.g. `0123`). Positions past the decimal point are exempt.
fn zero_rule_allows(value: &str, caret: usize, options: &NumericOptions) -> bool {
    let int = integer_part(value, options.decimal);
    if int.is_empty() {
        return true;
    }
    let caret = caret.saturating_sub(sign_len(value));
    if caret > int.len() {
        return true;
    }
    if int == "0" { false } else { caret > 0 }
}

fn on_minus(state: &EditState, options: &NumericOptions) -> EditState {
    let sel = state.selection();
    let allowed = sel.start == 0
        && (sign_len(&state.text) == 0 || sel.end > 0)
        && options.sign_range != SignRange::Positive;
    if !allowed {
        return state.rejected();
    }
    EditState::accepted(splice(&state.text, "-", sel.start, sel.end), 1)
}

fn on_decimal(state: &EditState, options: &NumericOptions) -> EditState {
    if options.scale == 0 {
        return state.rejected();
    }
    let sel = state.selection();
    let allowed = match decimal_index(&state.text, options.decimal) {
        None => true,
        // The existing point must be part of what the edit replaces.
        Some(i) => i >= sel.start && i < sel.end,
    };
    if !allowed {
        return state.rejected();
    }
    let mut buf = [0u8; 4];
    let candidate = splice(
        &state.text,
        options.decimal.encode_utf8(&mut buf),
        sel.start,
        sel.end,
    );
    EditState::accepted(candidate, sel.start + options.decimal.len_utf8())
}

fn on_shortcut(state: &EditState, key: char, options: &NumericOptions) -> EditState {
    let Some(multiplier) = options.shortcut(key) else {
        // Unmapped shortcut keys are consumed as a no-op.
        return state.clone();
    };

    let sel = state.selection();
    let remaining = splice(&state.text, "", sel.start, sel.end);
    // An empty or zero field scales from 1, so a bare 'k' yields 1000.
    let base = to_number(&remaining, options)
        .filter(|v| *v != 0.0)
        .unwrap_or(1.0);

    let rendered = from_number(base * multiplier, options);
    let text = if rendered.is_empty() {
        // Product too large for fixed notation: keep the field as it was.
        state.text.clone()
    } else {
        rendered
    };
    let caret = text.len();
    EditState::accepted(text, caret)
}

fn on_backspace(state: &EditState, key: &KeyInfo) -> EditState {
    let sel = state.selection();
    if !sel.is_empty() {
        return EditState::accepted(splice(&state.text, "", sel.start, sel.end), sel.start);
    }
    if key.modifiers.command() {
        // Delete to start.
        return EditState::accepted(state.text[sel.start..].to_string(), 0);
    }
    if sel.start == 0 {
        return EditState::accepted(state.text.clone(), 0);
    }
    let prev = prev_char_boundary(&state.text, sel.start);
    EditState::accepted(splice(&state.text, "", prev, sel.start), prev)
}

fn on_delete(state: &EditState, key: &KeyInfo, options: &NumericOptions) -> EditState {
    let sel = state.selection();
    if !sel.is_empty() {
        return EditState::accepted(splice(&state.text, "", sel.start, sel.end), sel.start);
    }
    if key.modifiers.command() {
        // Delete to end.
        return EditState::accepted(state.text[..sel.start].to_string(), sel.start);
    }

    let mut at = sel.start;
    if let Some(c) = state.text[at..].chars().next() {
        // Separators are cosmetic; step past one and take the digit behind it.
        if c == options.thousands {
            at += c.len_utf8();
        }
    }
    match state.text[at..].chars().next() {
        Some(c) => EditState::accepted(splice(&state.text, "", at, at + c.len_utf8()), at),
        None => EditState::accepted(state.text.clone(), at),
    }
}

fn recall(value: &str) -> EditState {
    let caret = value.len();
    EditState::accepted(value.to_string(), caret)
}

fn on_unknown(state: &EditState, key: &KeyInfo) -> EditState {
    if key.is_printable() {
        state.rejected()
    } else {
        state.clone()
    }
}
