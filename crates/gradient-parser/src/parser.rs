//! Gradient grammar parser
//!
//! Recursive descent over the scanner, one matcher per grammar production.
//! Matchers return `Ok(None)` when their production does not apply at the
//! cursor; they return `Err` only once a commitment point (a consumed
//! keyword, paren or comma) has ruled out every alternative.

use log::debug;

use crate::ast::{Color, ColorStop, Definition, GradientKind, Length, LengthUnit, Orientation};
use crate::error::{GradientError, GradientResult};
use crate::scanner::{Pattern, Scanner};

/// Gradient expression parser
///
/// Owns the cursor for exactly one parse; [`GradientParser::parse`] consumes
/// the instance, so no state survives between invocations.
pub struct GradientParser<'a> {
    scanner: Scanner<'a>,
}

impl<'a> GradientParser<'a> {
    /// Create a parser over `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            scanner: Scanner::new(input),
        }
    }

    /// Parse the input as a comma-separated listing of gradient definitions.
    ///
    /// The entire input must be consumed; anything left after the listing is
    /// a trailing-input error. Empty or whitespace-only input yields an
    /// empty listing.
    pub fn parse(mut self) -> GradientResult<Vec<Definition>> {
        debug!(
            "Parsing gradient listing ({} bytes)",
            self.scanner.input().len()
        );

        let definitions = self.parse_listing(Self::try_parse_definition)?;

        if !self.scanner.at_end() {
            return Err(GradientError::trailing_input(
                self.scanner.offset(),
                self.scanner.input(),
            ));
        }

        debug!("Parsed {} gradient definition(s)", definitions.len());
        Ok(definitions)
    }

    /// Match a comma-separated listing of `element`.
    ///
    /// The first element is optional, so an absent element yields an empty
    /// listing. Every element after a consumed comma is mandatory: a
    /// separator with nothing behind it is fatal, never an early end.
    fn parse_listing<T>(
        &mut self,
        mut element: impl FnMut(&mut Self) -> GradientResult<Option<T>>,
    ) -> GradientResult<Vec<T>> {
        let mut items = Vec::new();

        match element(self)? {
            Some(first) => items.push(first),
            None => return Ok(items),
        }

        while self.scanner.try_match(Pattern::Comma).is_some() {
            match element(self)? {
                Some(item) => items.push(item),
                None => {
                    return Err(GradientError::dangling_comma(
                        self.scanner.offset(),
                        self.scanner.input(),
                    ));
                }
            }
        }

        Ok(items)
    }

    fn try_parse_definition(&mut self) -> GradientResult<Option<Definition>> {
        self.try_parse_gradient(GradientKind::Linear, Pattern::LinearGradient)
    }

    /// Match one gradient call: keyword, parens, an optional orientation and
    /// the color-stop listing.
    ///
    /// A matched orientation commits the call to a comma before the first
    /// color stop.
    fn try_parse_gradient(
        &mut self,
        kind: GradientKind,
        keyword: Pattern,
    ) -> GradientResult<Option<Definition>> {
        self.try_parse_call(keyword, |parser| {
            let orientation = parser.try_parse_orientation();

            if orientation.is_some() && parser.scanner.try_match(Pattern::Comma).is_none() {
                return Err(GradientError::missing_comma(
                    parser.scanner.offset(),
                    parser.scanner.input(),
                ));
            }

            let color_stops = parser.parse_listing(Self::try_parse_color_stop)?;

            Ok(Definition {
                kind,
                orientation,
                color_stops,
            })
        })
    }

    /// Match a `keyword(...)` call, running `body` between the parens.
    ///
    /// An absent keyword means the production does not apply. Once the
    /// keyword has matched the call is committed and both parens are
    /// mandatory.
    fn try_parse_call<T>(
        &mut self,
        keyword: Pattern,
        body: impl FnOnce(&mut Self) -> GradientResult<T>,
    ) -> GradientResult<Option<T>> {
        if self.scanner.try_match(keyword).is_none() {
            return Ok(None);
        }

        if self.scanner.try_match(Pattern::LeftParen).is_none() {
            return Err(GradientError::missing_left_paren(
                self.scanner.offset(),
                self.scanner.input(),
            ));
        }

        let result = body(self)?;

        if self.scanner.try_match(Pattern::RightParen).is_none() {
            return Err(GradientError::missing_right_paren(
                self.scanner.offset(),
                self.scanner.input(),
            ));
        }

        Ok(Some(result))
    }

    /// Match an optional orientation, side-or-corner phrase before angle.
    fn try_parse_orientation(&mut self) -> Option<Orientation> {
        if let Some(phrase) = self.scanner.try_match(Pattern::SideOrCorner) {
            return Some(Orientation::Directional(phrase.to_string()));
        }
        if let Some(degrees) = self.scanner.try_match(Pattern::Angle) {
            return Some(Orientation::Angular(degrees.to_string()));
        }
        None
    }

    /// Match one color stop: a color with an optional length suffix.
    ///
    /// A stop position holding a length with no color in front of it is
    /// fatal; a position holding neither is absent and left to the listing
    /// combinator to judge.
    fn try_parse_color_stop(&mut self) -> GradientResult<Option<ColorStop>> {
        let color = match self.try_parse_color()? {
            Some(color) => color,
            None => {
                let offset = self.scanner.offset();
                if self.try_parse_length().is_some() {
                    return Err(GradientError::expected_color(offset, self.scanner.input()));
                }
                return Ok(None);
            }
        };

        let length = self.try_parse_length();
        Ok(Some(ColorStop { color, length }))
    }

    /// Match one color alternative in fixed order: hex, `rgba(...)`,
    /// `rgb(...)`, bare word. `rgba` must be tried before `rgb` so the
    /// shorter keyword cannot swallow the prefix of an `rgba(...)` call.
    fn try_parse_color(&mut self) -> GradientResult<Option<Color>> {
        if let Some(digits) = self.scanner.try_match(Pattern::Hash) {
            return Ok(Some(Color::Hex(digits.to_string())));
        }
        if let Some(components) = self.try_parse_components(Pattern::Rgba)? {
            return Ok(Some(Color::Rgba(components)));
        }
        if let Some(components) = self.try_parse_components(Pattern::Rgb)? {
            return Ok(Some(Color::Rgb(components)));
        }
        if let Some(word) = self.scanner.try_match(Pattern::Word) {
            return Ok(Some(Color::Literal(word.to_string())));
        }
        Ok(None)
    }

    /// Match the component listing of an `rgb(...)` or `rgba(...)` call.
    fn try_parse_components(&mut self, keyword: Pattern) -> GradientResult<Option<Vec<String>>> {
        self.try_parse_call(keyword, |parser| {
            parser.parse_listing(Self::try_parse_number)
        })
    }

    fn try_parse_number(&mut self) -> GradientResult<Option<String>> {
        Ok(self.scanner.try_match(Pattern::Number).map(str::to_string))
    }

    /// Match an optional length suffix, trying `px`, then `%`, then `em`.
    fn try_parse_length(&mut self) -> Option<Length> {
        for (pattern, unit) in [
            (Pattern::Px, LengthUnit::Px),
            (Pattern::Percentage, LengthUnit::Percent),
            (Pattern::Em, LengthUnit::Em),
        ] {
            if let Some(digits) = self.scanner.try_match(pattern) {
                return Some(Length {
                    unit,
                    value: digits.to_string(),
                });
            }
        }
        None
    }
}
