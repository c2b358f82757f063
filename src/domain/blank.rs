//! Blank-text predicate shared by every field rule.

/// Whether `c` counts as whitespace for blank detection.
///
/// Space, line and paragraph separators, the ASCII controls `\t \n \x0B \x0C \r`
/// and the information separators `U+001C..=U+001F`. No-break spaces
/// (`U+00A0`, `U+2007`, `U+202F`) and `U+0085` are not whitespace here.
pub fn is_blank_char(c: char) -> bool {
    match c {
        '\u{1C}'..='\u{1F}' => true,
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        _ => c.is_whitespace(),
    }
}

/// Returns `true` when the value is absent, empty, or made only of
/// [whitespace](is_blank_char).
///
/// # Example
///
/// ```
/// use contact_manager::domain::is_blank;
///
/// assert!(is_blank(None));
/// assert!(is_blank(Some(" \t")));
/// assert!(!is_blank(Some("Diego")));
/// ```
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |s| s.chars().all(is_blank_char))
}
