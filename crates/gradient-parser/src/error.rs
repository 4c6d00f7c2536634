//! Gradient parsing error types

use thiserror::Error;

/// Gradient parsing result type
pub type GradientResult<T> = Result<T, GradientError>;

/// Gradient parsing errors
///
/// Each variant records the byte offset at which an expectation failed,
/// measured after the leading whitespace of the failed match attempt, plus
/// the full text the parser was invoked on.
#[derive(Debug, Error)]
pub enum GradientError {
    /// Input remained after the definition listing ended.
    #[error("Unexpected trailing input at offset {offset}")]
    TrailingInput { offset: usize, input: String },

    /// A matched call keyword was not followed by `(`.
    #[error("Missing '(' at offset {offset}")]
    MissingLeftParen { offset: usize, input: String },

    /// A call body ended without its closing `)`.
    #[error("Missing ')' at offset {offset}")]
    MissingRightParen { offset: usize, input: String },

    /// An orientation was not separated from the color stops by a comma.
    #[error("Missing comma before color stops at offset {offset}")]
    MissingComma { offset: usize, input: String },

    /// A listing comma was consumed but no element followed it.
    #[error("Dangling comma with no element after it at offset {offset}")]
    DanglingComma { offset: usize, input: String },

    /// A color-stop position held a length where a color was required.
    #[error("Expected a color at offset {offset}")]
    ExpectedColor { offset: usize, input: String },
}

impl GradientError {
    pub fn trailing_input(offset: usize, input: impl Into<String>) -> Self {
        GradientError::TrailingInput {
            offset,
            input: input.into(),
        }
    }

    pub fn missing_left_paren(offset: usize, input: impl Into<String>) -> Self {
        GradientError::MissingLeftParen {
            offset,
            input: input.into(),
        }
    }

    pub fn missing_right_paren(offset: usize, input: impl Into<String>) -> Self {
        GradientError::MissingRightParen {
            offset,
            input: input.into(),
        }
    }

    pub fn missing_comma(offset: usize, input: impl Into<String>) -> Self {
        GradientError::MissingComma {
            offset,
            input: input.into(),
        }
    }

    pub fn dangling_comma(offset: usize, input: impl Into<String>) -> Self {
        GradientError::DanglingComma {
            offset,
            input: input.into(),
        }
    }

    pub fn expected_color(offset: usize, input: impl Into<String>) -> Self {
        GradientError::ExpectedColor {
            offset,
            input: input.into(),
        }
    }

    /// Byte offset within the parsed input at which the failure occurred.
    pub fn offset(&self) -> usize {
        match self {
            GradientError::TrailingInput { offset, .. } => *offset,
            GradientError::MissingLeftParen { offset, .. } => *offset,
            GradientError::MissingRightParen { offset, .. } => *offset,
            GradientError::MissingComma { offset, .. } => *offset,
            GradientError::DanglingComma { offset, .. } => *offset,
            GradientError::ExpectedColor { offset, .. } => *offset,
        }
    }

    /// The full text of the parse call that failed.
    pub fn source_text(&self) -> &str {
        match self {
            GradientError::TrailingInput { input, .. } => input,
            GradientError::MissingLeftParen { input, .. } => input,
            GradientError::MissingRightParen { input, .. } => input,
            GradientError::MissingComma { input, .. } => input,
            GradientError::DanglingComma { input, .. } => input,
            GradientError::ExpectedColor { input, .. } => input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = GradientError::missing_right_paren(21, "linear-gradient(red blue)");
        assert_eq!(format!("{}", error), "Missing ')' at offset 21");

        let error = GradientError::missing_comma(20, "linear-gradient(45deg red)");
        assert_eq!(
            format!("{}", error),
            "Missing comma before color stops at offset 20"
        );
    }

    #[test]
    fn test_error_accessors() {
        let error = GradientError::dangling_comma(20, "linear-gradient(red,)");
        assert_eq!(error.offset(), 20);
        assert_eq!(error.source_text(), "linear-gradient(red,)");
    }
}
