//! Formatting and editing configuration.
//!
//! One [`NumericOptions`] value describes everything a field needs to know
//! about its number format: separator characters, decimal scale, sign policy,
//! and the shortcut letters that act as multipliers. Options are immutable
//! for the duration of a single edit; the host may swap them between edits.

use std::collections::HashMap;

/// Which signs a field accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignRange {
    /// Positive and negative values.
    All,
    /// Positive values only; the minus key is rejected.
    Positive,
    /// Negative values permitted (the minus key is accepted).
    Negative,
}

/// Configuration for one masked numeric field.
///
/// `decimal` and `thousands` must differ; the formatter tells them apart by
/// exact character substitution, never by locale-aware parsing.
#[derive(Clone, Debug)]
pub struct NumericOptions {
    /// Character shown as the decimal point.
    pub decimal: char,
    /// Character used to group the integer part in threes.
    pub thousands: char,
    /// Number of decimal digits retained.
    pub scale: u8,
    /// When set, committed values are padded/truncated to exactly `scale`
    /// decimal digits.
    pub fixed: bool,
    /// Sign policy for the field.
    pub sign_range: SignRange,
    /// Single characters that multiply the current value when typed,
    /// e.g. `k` for thousand.
    pub shortcuts: HashMap<char, f64>,
}

impl Default for NumericOptions {
    fn default() -> Self {
        Self {
            decimal: '.',
            thousands: ',',
            scale: 2,
            fixed: true,
            sign_range: SignRange::All,
            shortcuts: HashMap::from([('k', 1e3), ('m', 1e6), ('b', 1e9)]),
        }
    }
}

impl NumericOptions {
    /// Multiplier bound to a shortcut character, if any.
    #[inline]
    pub fn shortcut(&self, key: char) -> Option<f64> {
        self.shortcuts.get(&key).copied()
    }
}
