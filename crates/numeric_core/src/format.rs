//! Raw ⇄ display conversion and free-text parsing.
//!
//! "Raw" text carries no thousands separators and is what numeric parsing
//! operates on; "display" text is grouped in threes and, on commit, padded
//! to the configured scale. Mid-edit text is repaired with [`reformat`];
//! committed values go through [`to_display`].

use crate::options::NumericOptions;
use crate::text::{decimal_index, decimal_part, integer_part, sign_len};

/// Reformat mid-edit text: strip stray thousands characters, drop disallowed
/// leading zeros, cap the decimal part at the configured scale, and regroup
/// the integer part in threes.
///
/// The empty string passes through unchanged. Applying `reformat` to its own
/// output is a no-op.
pub fn reformat(text: &str, options: &NumericOptions) -> String {
    if text.is_empty() {
        return String::new();
    }
    let stripped = strip_thousands(text, options);
    let trimmed = remove_leading_zeros(&stripped, options);
    let scaled = truncate_decimals(&trimmed, options);
    group_thousands(&scaled, options)
}

/// Format a committed value for display.
///
/// Runs [`reformat`] first. With `fixed` set and a positive scale, the
/// decimal part is padded or truncated to exactly `scale` digits and an
/// empty integer part becomes `0`; with `fixed` and scale zero only the
/// signed integer part remains. Without `fixed` the [`reformat`] result is
/// returned as-is. The empty string stays empty.
pub fn to_display(raw: &str, options: &NumericOptions) -> String {
    let value = reformat(raw, options);
    if value.is_empty() || !options.fixed {
        return value;
    }

    let sign = if sign_len(&value) == 1 { "-" } else { "" };
    let int = integer_part(&value, options.decimal);
    if options.scale == 0 {
        return format!("{sign}{int}");
    }

    let scale = usize::from(options.scale);
    let mut dec: String = decimal_part(&value, options.decimal)
        .chars()
        .take(scale)
        .collect();
    for _ in dec.chars().count()..scale {
        dec.push('0');
    }
    let int = if int.is_empty() { "0" } else { int };
    format!("{sign}{int}{}{dec}", options.decimal)
}

/// Distill pasted or dropped text into a value string.
///
/// Scans left to right: digits are kept, the first occurrence of the decimal
/// character is kept, shortcut characters multiply an accumulator, `-` is
/// kept only as the first emitted character, everything else is dropped.
/// The filtered number times the accumulated multiplier is rendered in the
/// configured separator convention (ungrouped). Returns the empty string
/// when nothing parseable remains or the product cannot be written in plain
/// fixed notation.
pub fn parse_free_text(text: &str, options: &NumericOptions) -> String {
    let mut multiplier = 1.0f64;
    let mut parsed = String::new();
    let mut seen_decimal = false;

    for c in text.chars() {
        if c.is_ascii_digit() {
            parsed.push(c);
        } else if c == options.decimal && !seen_decimal {
            parsed.push(c);
            seen_decimal = true;
        } else if let Some(m) = options.shortcut(c) {
            multiplier *= m;
        } else if c == '-' && parsed.is_empty() {
            parsed.push('-');
        }
    }

    if parsed.is_empty() {
        return String::new();
    }
    let Some(value) = to_number(&parsed, options) else {
        return String::new();
    };
    from_number(value * multiplier, options)
}

/// Parse display text into a number.
///
/// Thousands characters are removed and the decimal character is substituted
/// with `.` by exact character replacement, never locale-aware parsing, so
/// a `.`-grouped, `,`-pointed configuration cannot be misread. Returns
/// `None` for empty, unparseable, or non-finite input.
pub fn to_number(display: &str, options: &NumericOptions) -> Option<f64> {
    if display.is_empty() {
        return None;
    }
    let mut normalized = String::with_capacity(display.len());
    for c in display.chars() {
        // Grouping characters go first so a '.' used for grouping is never
        // left to masquerade as a decimal point.
        if c == options.thousands {
            continue;
        }
        normalized.push(if c == options.decimal { '.' } else { c });
    }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Render a number as an ungrouped value string in the configured separator
/// convention.
///
/// Returns the empty string when the value is non-finite or falls outside
/// the range plain fixed notation covers (|v| ≥ 1e21, or 0 < |v| < 1e-6).
pub fn from_number(value: f64, options: &NumericOptions) -> String {
    match format_plain(value) {
        Some(plain) if options.decimal != '.' => plain
            .chars()
            .map(|c| if c == '.' { options.decimal } else { c })
            .collect(),
        Some(plain) => plain,
        None => String::new(),
    }
}

// --- Internal helper functions ---

/// Shortest plain decimal rendering, or `None` when fixed notation does not
/// cover the value.
fn format_plain(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    if value == 0.0 {
        return Some("0".to_string());
    }
    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        return None;
    }
    Some(format!("{value}"))
}

fn strip_thousands(text: &str, options: &NumericOptions) -> String {
    text.chars().filter(|c| *c != options.thousands).collect()
}

/// Drop leading zeros from the integer part, keeping a single zero that
/// stands directly before the decimal point (so `0.5` survives).
fn remove_leading_zeros(text: &str, options: &NumericOptions) -> String {
    let sign = &text[..sign_len(text)];
    let end = decimal_index(text, options.decimal)
        .unwrap_or(text.len())
        .max(sign.len());
    let mut int = &text[sign.len()..end];
    while int.len() > 1 && int.starts_with('0') {
        int = &int[1..];
    }
    format!("{sign}{int}{}", &text[end..])
}

/// Cap the decimal part at `scale` characters.
fn truncate_decimals(text: &str, options: &NumericOptions) -> String {
    let Some(di) = decimal_index(text, options.decimal) else {
        return text.to_string();
    };
    let after = di + options.decimal.len_utf8();
    let keep = usize::from(options.scale);
    let cut = text[after..]
        .char_indices()
        .nth(keep)
        .map(|(i, _)| after + i)
        .unwrap_or(text.len());
    text[..cut].to_string()
}

/// Insert the thousands character every three digits from the right of the
/// integer part, skipping a leading sign.
fn group_thousands(text: &str, options: &NumericOptions) -> String {
    let sign = &text[..sign_len(text)];
    let end = decimal_index(text, options.decimal)
        .unwrap_or(text.len())
        .max(sign.len());
    let int = &text[sign.len()..end];
    let digits = int.chars().count();

    let mut out = String::with_capacity(text.len() + digits / 3);
    out.push_str(sign);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(options.thousands);
        }
        out.push(c);
    }
    out.push_str(&text[end..]);
    out
}
