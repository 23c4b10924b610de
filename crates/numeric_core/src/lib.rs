//! # numeric_core
//!
//! UI-agnostic masked numeric text-editing engine.
//!
//! Given a text buffer representing a number, a caret/selection range, a
//! keystroke descriptor, and a formatting configuration, this crate decides
//! whether the keystroke is legal and what text and caret result from it:
//!
//! - [`classify`]: keystroke → [`Action`]
//! - [`evaluate`]: one pure edit rule per action over an [`EditState`]
//! - [`reformat`] / [`to_display`]: raw ⇄ display conversion
//! - [`parse_free_text`]: pasted/dropped text → value string
//! - [`caret_offset`]: keeps the caret on the same digit across reformatting
//! - [`ValueHistory`]: linear undo/redo of committed display strings
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any graphics framework or DOM layer
//! - Platform event sources
//!
//! It depends only on `std` and provides pure editing semantics that can be
//! tested independently and reused across different hosts. The host owns the
//! visible field: it builds a [`KeyInfo`] and an [`EditState`] per key-down,
//! runs the pipeline, and applies (or suppresses) the returned text and
//! caret. The `field` crate packages that call sequence.
//!
//! All caret positions are byte offsets into UTF-8 strings, clamped onto
//! character boundaries at the crate boundary.

mod action;
mod format;
mod history;
mod key;
mod offset;
mod options;
mod rules;
mod state;
mod text;

pub use action::{Action, classify};
pub use format::{from_number, parse_free_text, reformat, to_display, to_number};
pub use history::{MAX_HISTORY, ValueHistory};
pub use key::{Key, KeyInfo, Modifiers};
pub use offset::caret_offset;
pub use options::{NumericOptions, SignRange};
pub use rules::evaluate;
pub use state::{EditState, SelectionRange};

// Re-exported for hosts that do their own caret bookkeeping.
pub use text::{clamp_to_char_boundary, prev_char_boundary, splice};
