//! Java numeric literals.

/// Parse a captured Java numeric literal such as `-2`, `0.5F` or `1.0E-2d`.
///
/// One trailing type suffix (`f`, `d`, `l` in either case) is ignored.
/// Returns `None` when the remaining text is not a number.
pub fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_suffix(['f', 'F', 'd', 'D', 'l', 'L'])
        .unwrap_or(trimmed);
    // "-" followed by whitespace can survive capture when the source wrote `- 2`
    let body: String = body.chars().filter(|c| !c.is_whitespace()).collect();
    if body.is_empty() || body == "-" {
        return None;
    }
    body.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Render a number as a Java literal.
///
/// Whole numbers that fit a Java `int` print bare (`4`, `-2`); anything
/// else gets the float suffix (`4.5F`, `10000000000F`). Negative zero
/// prints as `0`.
pub fn format_literal(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let int_range = f64::from(i32::MIN)..=f64::from(i32::MAX);
    if value.fract() == 0.0 && int_range.contains(&value) {
        format!("{}", value)
    } else {
        format!("{}F", value)
    }
}
