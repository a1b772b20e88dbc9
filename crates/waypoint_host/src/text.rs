//! # Chat Text Helpers
//!
//! Ampersand color-code translation for configuration text. Hosts render
//! color codes introduced by the section sign, while configuration files use
//! `&` so operators can type them; this module converts between the two.

/// The set of characters that are valid color/format codes after `&`.
const COLOR_CODES: &str = "0123456789AaBbCcDdEeFfKkLlMmNnOoRrXx";

/// The section sign hosts use to introduce a rendered color code.
pub const SECTION_CHAR: char = '\u{00A7}';

/// Translates `&`-prefixed color codes into section-sign form.
///
/// An `&` immediately followed by a valid code character becomes the section
/// sign, and the code character is folded to lowercase. Any other `&`,
/// including a trailing one, passes through untouched, as does text that
/// already uses section signs.
///
/// # Examples
///
/// ```rust
/// use waypoint_host::translate_color_codes;
///
/// assert_eq!(translate_color_codes("&aHello"), "\u{00A7}aHello");
/// assert_eq!(translate_color_codes("&AHello"), "\u{00A7}aHello");
/// assert_eq!(translate_color_codes("no codes"), "no codes");
/// ```
pub fn translate_color_codes(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '&' && i + 1 < chars.len() && COLOR_CODES.contains(chars[i + 1]) {
            out.push(SECTION_CHAR);
            out.push(chars[i + 1].to_ascii_lowercase());
            i += 2;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}
