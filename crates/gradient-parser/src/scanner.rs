//! Gradient expression scanner
//!
//! Anchored lexical matching over the remaining input. The scanner never
//! searches ahead: a pattern either matches at the cursor or is reported
//! absent, and leading whitespace is stripped before every attempt.

/// Lexical patterns of the gradient grammar
///
/// Each pattern defines what it consumes and what it captures; the two can
/// differ (units and the hash sign are consumed but not captured).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// The keyword `linear-gradient`, case-insensitive.
    LinearGradient,
    /// A `to <side-or-corner>` phrase such as `to left` or `to right bottom`,
    /// case-insensitive, captured as written.
    SideOrCorner,
    /// ASCII digits followed by `deg`; captures the digits only.
    Angle,
    /// ASCII digits followed by `px`; captures the digits only.
    Px,
    /// ASCII digits followed by `%`; captures the digits only.
    Percentage,
    /// ASCII digits followed by `em`; captures the digits only.
    Em,
    /// The keyword `rgba`, case-insensitive.
    Rgba,
    /// The keyword `rgb`, case-insensitive.
    Rgb,
    /// `#` followed by hex digits; captures the digits without the `#`.
    Hash,
    /// A run of ASCII letters.
    Word,
    /// A numeric literal: fractional (`.5`, `0.5`) or integer with an
    /// optional trailing dot (`12`, `12.`).
    Number,
    /// A literal `(`.
    LeftParen,
    /// A literal `)`.
    RightParen,
    /// A literal `,`.
    Comma,
}

/// Cursor over a gradient expression
///
/// Holds the full input alongside the unconsumed tail; the byte offset of
/// the cursor is derived from the two, so the scanner has a single point of
/// mutation.
pub struct Scanner<'a> {
    input: &'a str,
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, rest: input }
    }

    /// The full input this scanner was created over.
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Byte offset of the cursor within the input.
    pub fn offset(&self) -> usize {
        self.input.len() - self.rest.len()
    }

    /// True once the entire input has been consumed.
    pub fn at_end(&self) -> bool {
        self.rest.is_empty()
    }

    /// Attempt to match `pattern` at the cursor.
    ///
    /// Leading whitespace is consumed first, even when the pattern then
    /// fails to match. On success the cursor advances past the full match
    /// and the pattern's capture is returned; on failure the cursor stays
    /// where the whitespace strip left it.
    pub fn try_match(&mut self, pattern: Pattern) -> Option<&'a str> {
        self.skip_whitespace();

        let (capture, matched_len) = match pattern {
            Pattern::LinearGradient => match_keyword(self.rest, "linear-gradient")?,
            Pattern::SideOrCorner => match_side_or_corner(self.rest)?,
            Pattern::Angle => match_digits_with_suffix(self.rest, "deg")?,
            Pattern::Px => match_digits_with_suffix(self.rest, "px")?,
            Pattern::Percentage => match_digits_with_suffix(self.rest, "%")?,
            Pattern::Em => match_digits_with_suffix(self.rest, "em")?,
            Pattern::Rgba => match_keyword(self.rest, "rgba")?,
            Pattern::Rgb => match_keyword(self.rest, "rgb")?,
            Pattern::Hash => match_hex_color(self.rest)?,
            Pattern::Word => match_word(self.rest)?,
            Pattern::Number => match_number(self.rest)?,
            Pattern::LeftParen => match_char(self.rest, '(')?,
            Pattern::RightParen => match_char(self.rest, ')')?,
            Pattern::Comma => match_char(self.rest, ',')?,
        };

        self.rest = &self.rest[matched_len..];
        Some(capture)
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }
}

/// Side-or-corner phrases in match order. Two-word corners come first so
/// `to left top` is never read as `to left` with trailing text.
const SIDE_OR_CORNER_PHRASES: [&str; 8] = [
    "to left top",
    "to left bottom",
    "to right top",
    "to right bottom",
    "to left",
    "to right",
    "to top",
    "to bottom",
];

/// Case-insensitive keyword match. There is no word-boundary check, so the
/// keyword also matches as the bare prefix of longer text.
fn match_keyword<'a>(rest: &'a str, keyword: &str) -> Option<(&'a str, usize)> {
    let head = rest.get(..keyword.len())?;
    if head.eq_ignore_ascii_case(keyword) {
        Some((head, keyword.len()))
    } else {
        None
    }
}

fn match_side_or_corner(rest: &str) -> Option<(&str, usize)> {
    for phrase in SIDE_OR_CORNER_PHRASES {
        if let Some((head, len)) = match_keyword(rest, phrase) {
            return Some((head, len));
        }
    }
    None
}

/// One or more ASCII digits immediately followed by `suffix`. The digits are
/// captured; the suffix is consumed and dropped. The suffix comparison is
/// case-sensitive.
fn match_digits_with_suffix<'a>(rest: &'a str, suffix: &str) -> Option<(&'a str, usize)> {
    let digits = leading_digits(rest);
    if digits == 0 || !rest[digits..].starts_with(suffix) {
        return None;
    }
    Some((&rest[..digits], digits + suffix.len()))
}

fn match_hex_color(rest: &str) -> Option<(&str, usize)> {
    let tail = rest.strip_prefix('#')?;
    let digits = tail
        .bytes()
        .take_while(|byte| byte.is_ascii_hexdigit())
        .count();
    if digits == 0 {
        return None;
    }
    Some((&tail[..digits], 1 + digits))
}

fn match_word(rest: &str) -> Option<(&str, usize)> {
    let len = rest
        .bytes()
        .take_while(|byte| byte.is_ascii_alphabetic())
        .count();
    if len == 0 {
        return None;
    }
    Some((&rest[..len], len))
}

/// Numeric literal. The fractional form (`[0-9]*.[0-9]+`) is tried before
/// the integer form (`[0-9]+` with an optional trailing dot), so `1.5` is
/// consumed whole rather than stopping at `1.`.
fn match_number(rest: &str) -> Option<(&str, usize)> {
    let int_digits = leading_digits(rest);
    let after_int = &rest[int_digits..];

    if let Some(fraction) = after_int.strip_prefix('.') {
        let frac_digits = leading_digits(fraction);
        if frac_digits > 0 {
            let len = int_digits + 1 + frac_digits;
            return Some((&rest[..len], len));
        }
    }

    if int_digits == 0 {
        return None;
    }
    let len = if after_int.starts_with('.') {
        int_digits + 1
    } else {
        int_digits
    };
    Some((&rest[..len], len))
}

fn match_char(rest: &str, expected: char) -> Option<(&str, usize)> {
    if rest.starts_with(expected) {
        let len = expected.len_utf8();
        Some((&rest[..len], len))
    } else {
        None
    }
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(|byte| byte.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_is_case_insensitive() {
        let mut scanner = Scanner::new("LINEAR-Gradient(");
        assert_eq!(
            scanner.try_match(Pattern::LinearGradient),
            Some("LINEAR-Gradient")
        );
        assert_eq!(scanner.try_match(Pattern::LeftParen), Some("("));
        assert!(scanner.at_end());
    }

    #[test]
    fn test_keyword_matches_as_prefix() {
        let mut scanner = Scanner::new("rgbx");
        assert_eq!(scanner.try_match(Pattern::Rgb), Some("rgb"));
        assert_eq!(scanner.offset(), 3);
    }

    #[test]
    fn test_whitespace_skipped_before_match() {
        let mut scanner = Scanner::new(" \t\r\n rgba(");
        assert_eq!(scanner.try_match(Pattern::Rgba), Some("rgba"));
        assert_eq!(scanner.try_match(Pattern::LeftParen), Some("("));
    }

    #[test]
    fn test_whitespace_consumed_even_when_pattern_fails() {
        let mut scanner = Scanner::new("   red");
        assert_eq!(scanner.try_match(Pattern::Comma), None);
        assert_eq!(scanner.offset(), 3);
        assert_eq!(scanner.try_match(Pattern::Word), Some("red"));
    }

    #[test]
    fn test_match_is_anchored_at_cursor() {
        let mut scanner = Scanner::new("red,");
        assert_eq!(scanner.try_match(Pattern::Comma), None);
        assert_eq!(scanner.try_match(Pattern::Word), Some("red"));
        assert_eq!(scanner.try_match(Pattern::Comma), Some(","));
    }

    #[test]
    fn test_corner_phrase_wins_over_side() {
        let mut scanner = Scanner::new("to left top,");
        assert_eq!(scanner.try_match(Pattern::SideOrCorner), Some("to left top"));
        assert_eq!(scanner.try_match(Pattern::Comma), Some(","));
    }

    #[test]
    fn test_single_side_phrase() {
        let mut scanner = Scanner::new("to right,");
        assert_eq!(scanner.try_match(Pattern::SideOrCorner), Some("to right"));
    }

    #[test]
    fn test_side_or_corner_keeps_original_casing() {
        let mut scanner = Scanner::new("To Left Bottom");
        assert_eq!(
            scanner.try_match(Pattern::SideOrCorner),
            Some("To Left Bottom")
        );
    }

    #[test]
    fn test_angle_captures_digits_without_unit() {
        let mut scanner = Scanner::new("45deg");
        assert_eq!(scanner.try_match(Pattern::Angle), Some("45"));
        assert!(scanner.at_end());
    }

    #[test]
    fn test_unit_suffix_is_case_sensitive() {
        let mut scanner = Scanner::new("45DEG");
        assert_eq!(scanner.try_match(Pattern::Angle), None);
    }

    #[test]
    fn test_length_suffixes() {
        let mut scanner = Scanner::new("10px 25% 3em");
        assert_eq!(scanner.try_match(Pattern::Px), Some("10"));
        assert_eq!(scanner.try_match(Pattern::Percentage), Some("25"));
        assert_eq!(scanner.try_match(Pattern::Em), Some("3"));
    }

    #[test]
    fn test_length_digits_are_integer_only() {
        let mut scanner = Scanner::new("45.5px");
        assert_eq!(scanner.try_match(Pattern::Px), None);
    }

    #[test]
    fn test_hash_capture_drops_the_hash_sign() {
        let mut scanner = Scanner::new("#Ff0030 ");
        assert_eq!(scanner.try_match(Pattern::Hash), Some("Ff0030"));
    }

    #[test]
    fn test_hash_requires_hex_digits() {
        let mut scanner = Scanner::new("#zz");
        assert_eq!(scanner.try_match(Pattern::Hash), None);
        assert_eq!(scanner.offset(), 0);
    }

    #[test]
    fn test_word_stops_at_non_letter() {
        let mut scanner = Scanner::new("red2");
        assert_eq!(scanner.try_match(Pattern::Word), Some("red"));
        assert_eq!(scanner.offset(), 3);
    }

    #[test]
    fn test_number_forms() {
        for (input, expected) in [
            ("12", "12"),
            ("12.", "12."),
            ("1.5", "1.5"),
            (".5", ".5"),
            ("0", "0"),
        ] {
            let mut scanner = Scanner::new(input);
            assert_eq!(scanner.try_match(Pattern::Number), Some(expected));
            assert!(scanner.at_end());
        }
    }

    #[test]
    fn test_lone_dot_is_not_a_number() {
        let mut scanner = Scanner::new(".");
        assert_eq!(scanner.try_match(Pattern::Number), None);
    }

    #[test]
    fn test_offset_tracks_consumed_bytes() {
        let mut scanner = Scanner::new("rgb( 1 ");
        scanner.try_match(Pattern::Rgb);
        assert_eq!(scanner.offset(), 3);
        scanner.try_match(Pattern::LeftParen);
        assert_eq!(scanner.offset(), 4);
        scanner.try_match(Pattern::Number);
        assert_eq!(scanner.offset(), 6);
        assert!(!scanner.at_end());
    }
}
