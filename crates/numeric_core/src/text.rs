//! Byte-level text utilities shared by the edit rules and the formatter.
//!
//! All caret positions in this crate are byte indices into UTF-8 strings.
//! Host adapters report whatever offsets their platform uses; [`crate::EditState::new`]
//! clamps them onto character boundaries with the helpers here before any
//! rule runs, so slicing never panics.

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// If `index` is beyond the string length, it is clamped to `s.len()`.
/// If `index` falls in the middle of a multi-byte character, it is
/// adjusted backwards to the start of that character.
///
/// # Examples
///
/// ```
/// use numeric_core::clamp_to_char_boundary;
///
/// let s = "1€2"; // '€' is 3 bytes
/// assert_eq!(clamp_to_char_boundary(s, 0), 0);
/// assert_eq!(clamp_to_char_boundary(s, 2), 1); // mid '€' -> start of '€'
/// assert_eq!(clamp_to_char_boundary(s, 100), 5); // beyond end -> len
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Find the previous valid caret position (character boundary) before `i`.
///
/// Returns 0 if already at the start.
pub fn prev_char_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    if i == 0 {
        return 0;
    }
    s[..i]
        .char_indices()
        .last()
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

/// Replace `s[start..end)` with `replacement`.
///
/// This is the single editing primitive every rule builds its candidate
/// text with. Out-of-range or mid-character positions are clamped first.
///
/// # Examples
///
/// ```
/// use numeric_core::splice;
///
/// assert_eq!(splice("1234", "9", 1, 3), "194");
/// assert_eq!(splice("1234", "", 0, 2), "34");
/// assert_eq!(splice("", "5", 0, 0), "5");
/// ```
pub fn splice(s: &str, replacement: &str, start: usize, end: usize) -> String {
    let start = clamp_to_char_boundary(s, start);
    let end = clamp_to_char_boundary(s, end.max(start)).max(start);
    let mut out = String::with_capacity(s.len() - (end - start) + replacement.len());
    out.push_str(&s[..start]);
    out.push_str(replacement);
    out.push_str(&s[end..]);
    out
}

/// Byte index of the first occurrence of the decimal character.
#[inline]
pub(crate) fn decimal_index(s: &str, decimal: char) -> Option<usize> {
    s.find(decimal)
}

/// Byte length of a leading sign: 1 when the text starts with `-`, else 0.
#[inline]
pub(crate) fn sign_len(s: &str) -> usize {
    usize::from(s.starts_with('-'))
}

/// The slice between any leading sign and the decimal character.
///
/// For display text this still contains the thousands separators; callers
/// that need pure digits strip them first.
pub(crate) fn integer_part(s: &str, decimal: char) -> &str {
    let start = sign_len(s);
    let end = decimal_index(s, decimal).unwrap_or(s.len()).max(start);
    &s[start..end]
}

/// The slice after the decimal character (empty when there is none).
pub(crate) fn decimal_part(s: &str, decimal: char) -> &str {
    match decimal_index(s, decimal) {
        Some(i) => &s[i + decimal.len_utf8()..],
        None => "",
    }
}
