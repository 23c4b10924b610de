//! Caret translation across reformatting.

use crate::options::NumericOptions;

/// How far the caret must shift so it stays attached to the same logical
/// digit after a reformat.
///
/// Counts thousands characters strictly before byte position `pos` in each
/// string and returns `next - prev`; the caller adds the result to the
/// pre-reformat caret.
///
/// # Examples
///
/// ```
/// use numeric_core::{NumericOptions, caret_offset};
///
/// let options = NumericOptions::default();
/// assert_eq!(caret_offset("1000", "1,000", 4, &options), 1);
/// assert_eq!(caret_offset("1,000", "100", 4, &options), -1);
/// ```
pub fn caret_offset(prev: &str, next: &str, pos: usize, options: &NumericOptions) -> isize {
    separators_before(next, pos, options.thousands)
        - separators_before(prev, pos, options.thousands)
}

fn separators_before(s: &str, pos: usize, thousands: char) -> isize {
    s.char_indices()
        .take_while(|(i, _)| *i < pos)
        .filter(|(_, c)| *c == thousands)
        .count() as isize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_inserted_separators_before_the_caret() {
        let options = NumericOptions::default();
        assert_eq!(caret_offset("1000", "1,000", 4, &options), 1);
        assert_eq!(caret_offset("1000000", "1,000,000", 7, &options), 2);
    }

    #[test]
    fn separators_after_the_caret_do_not_count() {
        let options = NumericOptions::default();
        assert_eq!(caret_offset("1000", "1,000", 1, &options), 0);
        assert_eq!(caret_offset("1000000", "1,000,000", 2, &options), 1);
    }

    #[test]
    fn removed_separators_yield_a_negative_shift() {
        let options = NumericOptions::default();
        assert_eq!(caret_offset("1,234", "134", 3, &options), -1);
    }

    #[test]
    fn positions_past_either_string_are_safe() {
        let options = NumericOptions::default();
        assert_eq!(caret_offset("1", "1,000", 50, &options), 1);
    }
}
