//! Unit conversion utilities
//!
//! Rooms are measured in feet and tiles and grout in inches.
//! Supports decimal and fractional inch parsing and formatting.

/// Inches in one foot.
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Square inches in one square foot.
pub const SQUARE_INCHES_PER_SQUARE_FOOT: f64 = 144.0;

/// Convert inches to feet
pub fn inches_to_feet(inches: f64) -> f64 {
    inches / INCHES_PER_FOOT
}

/// Convert an area in square inches to square feet
pub fn square_inches_to_square_feet(square_inches: f64) -> f64 {
    square_inches / SQUARE_INCHES_PER_SQUARE_FOOT
}

/// Parse a plain decimal number (feet, prices)
///
/// Empty input is an error so callers can fall back to their last good value.
pub fn parse_decimal(input: &str) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let value = input.parse::<f64>().map_err(|e| e.to_string())?;
    if !value.is_finite() {
        return Err("Value is not finite".to_string());
    }
    Ok(value)
}

/// Parse an inch value, accepting decimals and fractions
///
/// * `"12"`, `"0.125"` - decimal inches
/// * `"1/8"`, `"1 1/2"` - fractional inches
/// * A trailing `"` or `in` is ignored
pub fn parse_inches(input: &str) -> Result<f64, String> {
    let input = input
        .trim()
        .trim_end_matches('"')
        .trim_end_matches("in")
        .trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }

    if !input.contains('/') {
        return parse_decimal(input);
    }

    let mut total_inches = 0.0;
    for part in input.split_whitespace() {
        if part.contains('/') {
            let frac_parts: Vec<&str> = part.split('/').collect();
            if frac_parts.len() != 2 {
                return Err("Invalid fraction format".to_string());
            }
            let num = frac_parts[0]
                .parse::<f64>()
                .map_err(|_| "Invalid numerator")?;
            let den = frac_parts[1]
                .parse::<f64>()
                .map_err(|_| "Invalid denominator")?;
            if den == 0.0 {
                return Err("Division by zero".to_string());
            }
            total_inches += num / den;
        } else {
            total_inches += part.parse::<f64>().map_err(|_| "Invalid number part")?;
        }
    }
    Ok(total_inches)
}

/// Format an inch value as a sixteenth-inch fraction when it is one
///
/// `0.125` becomes `1/8"`, `1.5` becomes `1 1/2"`, anything else falls back to
/// a decimal such as `0.3"`.
pub fn format_fraction_inches(inches: f64) -> String {
    let sixteenths = inches * 16.0;
    let rounded = sixteenths.round();
    if (sixteenths - rounded).abs() > 1e-9 || rounded < 0.0 {
        return format!("{}\"", inches);
    }

    let rounded = rounded as u32;
    let whole = rounded / 16;
    let mut num = rounded % 16;
    let mut den = 16;
    while num > 0 && num % 2 == 0 {
        num /= 2;
        den /= 2;
    }

    match (whole, num) {
        (w, 0) => format!("{}\"", w),
        (0, n) => format!("{}/{}\"", n, den),
        (w, n) => format!("{} {}/{}\"", w, n, den),
    }
}

/// Format a length in feet with the foot mark (`8'`, `10.5'`)
pub fn format_feet(feet: f64) -> String {
    format!("{}'", feet)
}

/// Format a currency amount with two decimals (`$440.00`)
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(inches_to_feet(12.0), 1.0);
        assert_eq!(inches_to_feet(6.0), 0.5);
        assert_eq!(square_inches_to_square_feet(144.0), 1.0);
        assert_eq!(square_inches_to_square_feet(36.0), 0.25);
    }

    #[test]
    fn test_decimal_inches() {
        assert_eq!(parse_inches("12").unwrap(), 12.0);
        assert_eq!(parse_inches("0.125").unwrap(), 0.125);
        assert_eq!(parse_inches("  24  ").unwrap(), 24.0);
        assert_eq!(parse_inches("6\"").unwrap(), 6.0);
        assert_eq!(parse_inches("6 in").unwrap(), 6.0);
    }

    #[test]
    fn test_fractional_inches() {
        assert_eq!(parse_inches("1/8").unwrap(), 0.125);
        assert_eq!(parse_inches("3/16").unwrap(), 0.1875);
        assert_eq!(parse_inches("1 1/2").unwrap(), 1.5);
        assert_eq!(parse_inches("  1  1/2  ").unwrap(), 1.5);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(parse_inches("").is_err());
        assert!(parse_inches("abc").is_err());
        assert!(parse_inches("1/0").is_err());
        assert!(parse_inches("1/2/3").is_err());
        assert!(parse_decimal("   ").is_err());
        assert!(parse_decimal("ten").is_err());
        assert!(parse_decimal("inf").is_err());
    }

    #[test]
    fn test_format_fraction() {
        assert_eq!(format_fraction_inches(0.0625), "1/16\"");
        assert_eq!(format_fraction_inches(0.125), "1/8\"");
        assert_eq!(format_fraction_inches(0.1875), "3/16\"");
        assert_eq!(format_fraction_inches(0.25), "1/4\"");
        assert_eq!(format_fraction_inches(0.5), "1/2\"");
        assert_eq!(format_fraction_inches(1.5), "1 1/2\"");
        assert_eq!(format_fraction_inches(2.0), "2\"");
        assert_eq!(format_fraction_inches(0.3), "0.3\"");
    }

    #[test]
    fn test_format_labels() {
        assert_eq!(format_feet(8.0), "8'");
        assert_eq!(format_feet(10.5), "10.5'");
        assert_eq!(format_currency(440.00000000000006), "$440.00");
        assert_eq!(format_currency(25.0), "$25.00");
    }
}
