// ============================================================================
// Numeric Input
// Values accepted by the converter operations
// ============================================================================

/// A value to convert: already numeric, or text in some regional notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericInput<'a> {
    Float(f64),
    Integer(i64),
    Text(&'a str),
}

impl From<f64> for NumericInput<'_> {
    fn from(value: f64) -> Self {
        NumericInput::Float(value)
    }
}

impl From<f32> for NumericInput<'_> {
    fn from(value: f32) -> Self {
        NumericInput::Float(f64::from(value))
    }
}

impl From<i64> for NumericInput<'_> {
    fn from(value: i64) -> Self {
        NumericInput::Integer(value)
    }
}

impl From<i32> for NumericInput<'_> {
    fn from(value: i32) -> Self {
        NumericInput::Integer(i64::from(value))
    }
}

impl<'a> From<&'a str> for NumericInput<'a> {
    fn from(value: &'a str) -> Self {
        NumericInput::Text(value)
    }
}

impl<'a> From<&'a String> for NumericInput<'a> {
    fn from(value: &'a String) -> Self {
        NumericInput::Text(value.as_str())
    }
}
