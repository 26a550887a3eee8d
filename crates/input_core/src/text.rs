//! UTF-8 offset utilities.
//!
//! Selection offsets are byte indices on char boundaries. Hosts that report
//! char (or UTF-16) positions convert at the boundary with these helpers.

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// If `index` is beyond the string length, it is clamped to `s.len()`.
/// If `index` falls in the middle of a multi-byte character, it is
/// adjusted backwards to the start of that character.
///
/// # Examples
///
/// ```
/// use input_core::clamp_to_char_boundary;
///
/// let s = "a€b"; // '€' is 3 bytes
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

/// Byte offset of the `char_index`-th char, or `None` past the end.
///
/// `char_index == char count` maps to `s.len()`.
///
/// ```
/// use input_core::byte_offset_for_char;
///
/// assert_eq!(byte_offset_for_char("a€b", 2), Some(4));
/// assert_eq!(byte_offset_for_char("a€b", 3), Some(5));
/// assert_eq!(byte_offset_for_char("a€b", 4), None);
/// ```
pub fn byte_offset_for_char(s: &str, char_index: usize) -> Option<usize> {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .nth(char_index)
}

/// Byte offset of a UTF-16 code unit position, as reported by DOM-style
/// hosts. Positions inside a surrogate pair resolve to the start of the char.
pub fn byte_offset_for_utf16(s: &str, utf16_index: usize) -> Option<usize> {
    let mut units = 0usize;
    for (i, ch) in s.char_indices() {
        if units >= utf16_index {
            return Some(i);
        }
        units += ch.len_utf16();
        if units > utf16_index {
            return Some(i);
        }
    }
    (units >= utf16_index).then_some(s.len())
}

/// Number of chars in `s` that are not whitespace.
#[inline]
pub fn non_whitespace_chars(s: &str) -> usize {
    s.chars().filter(|c| !c.is_whitespace()).count()
}
