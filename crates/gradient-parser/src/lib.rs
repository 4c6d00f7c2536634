//! Gradient Expression Parser
//!
//! Parses CSS `linear-gradient(...)` expression listings into a syntax tree.

mod ast;
mod error;
mod parser;
mod scanner;

pub use ast::{Color, ColorStop, Definition, GradientKind, Length, LengthUnit, Orientation};
pub use error::{GradientError, GradientResult};
pub use parser::GradientParser;
pub use scanner::{Pattern, Scanner};

/// Parse a gradient expression listing into its syntax tree.
///
/// Returns one [`Definition`] per comma-separated gradient call. The whole
/// input must be consumed; empty input yields an empty listing.
pub fn parse(input: &str) -> GradientResult<Vec<Definition>> {
    GradientParser::new(input).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry_point() {
        let definitions = parse("linear-gradient(to right, #c00 25%, blue)").unwrap();

        assert_eq!(definitions.len(), 1);
        assert_eq!(definitions[0].kind, GradientKind::Linear);
        assert_eq!(definitions[0].color_stops.len(), 2);
    }

    #[test]
    fn test_parse_entry_point_reports_errors() {
        let error = parse("linear-gradient(red,)").unwrap_err();
        assert!(matches!(error, GradientError::DanglingComma { .. }));
    }
}
