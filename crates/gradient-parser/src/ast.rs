//! Gradient syntax tree
//!
//! Owned nodes produced by the parser. Captured text is stored as written,
//! so nodes hold no references into the parsed input.

/// Gradient function families
///
/// Only [`GradientKind::Linear`] is produced by this crate's grammar; the
/// radial variants exist so downstream code can dispatch on a shared kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientKind {
    /// `linear-gradient(...)`
    Linear,
    /// `radial-gradient(...)`
    Radial,
    /// `repeating-radial-gradient(...)`
    RepeatingRadial,
}

impl GradientKind {
    /// The CSS function name for this gradient family.
    pub fn as_str(&self) -> &'static str {
        match self {
            GradientKind::Linear => "linear-gradient",
            GradientKind::Radial => "radial-gradient",
            GradientKind::RepeatingRadial => "repeating-radial-gradient",
        }
    }
}

/// One parsed gradient function call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// Which gradient function was called.
    pub kind: GradientKind,
    /// Direction clause preceding the color stops, if one was written.
    pub orientation: Option<Orientation>,
    /// Color stops in source order. May be empty for an empty call body.
    pub color_stops: Vec<ColorStop>,
}

/// Direction clause of a gradient call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Orientation {
    /// A side-or-corner phrase, stored exactly as written including the
    /// leading `to` (e.g. `to left top`).
    Directional(String),
    /// An angle; the digits as written, with the `deg` unit dropped.
    Angular(String),
}

/// A color with an optional position along the gradient line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorStop {
    pub color: Color,
    pub length: Option<Length>,
}

/// Color notation of a color stop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    /// Hex digits without the leading `#`. The digit count is not checked.
    Hex(String),
    /// An `rgb(...)` call; component texts in call order.
    Rgb(Vec<String>),
    /// An `rgba(...)` call; component texts in call order.
    Rgba(Vec<String>),
    /// A bare color word, not validated against any name table.
    Literal(String),
}

/// Position of a color stop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Length {
    pub unit: LengthUnit,
    /// The digits as written, without the unit.
    pub value: String,
}

/// Units accepted for a color-stop position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    /// Pixels (`px`)
    Px,
    /// Percentage of the gradient line (`%`)
    Percent,
    /// Em units (`em`)
    Em,
}

impl LengthUnit {
    /// The unit suffix as written in CSS.
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Percent => "%",
            LengthUnit::Em => "em",
        }
    }
}
