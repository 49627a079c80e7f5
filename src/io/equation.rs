//! Human-readable equation strings for the algebra panel.
//!
//! A cubic `a*u^3 + b*u^2 + c*u + d` is rendered with the display rules of
//! the algebra panel: zero terms omitted, unit coefficients implicit on
//! non-constant terms, the first term's leading '+' stripped. Coefficients
//! are rounded to two decimal places and printed without trailing zeros.
//!
//! Formatting is deterministic and idempotent: re-extracting the
//! coefficients from a formatted string and formatting them again yields
//! the same string.
//!
//! # Example
//!
//! ```
//! use hermite2d::curves::CubicCoeffs;
//! use hermite2d::io::{format_cubic, parse_cubic};
//!
//! let coeffs = CubicCoeffs::new(-15.0, 24.0, 1.0, 2.0);
//! let eq = format_cubic(&coeffs, 'u');
//! assert_eq!(eq, "-15u³ + 24u² + u + 2");
//!
//! let back: CubicCoeffs<f64> = parse_cubic(&eq, 'u').unwrap();
//! assert_eq!(back, coeffs);
//! ```

use crate::curves::CubicCoeffs;
use crate::error::EquationError;
use num_traits::Float;

/// Rounds a coefficient to the two decimal places used for display.
fn round_display<F: Float>(v: F) -> f64 {
    let v = v.to_f64().unwrap_or(f64::NAN);
    (v * 100.0).round() / 100.0
}

/// Prints a non-negative coefficient, dropping trailing zeros ("2.50" -> "2.5").
fn coeff_text(v: f64) -> String {
    let mut s = format!("{:.2}", v);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

/// Formats cubic coefficients as a display equation in the given variable.
///
/// Terms appear in decreasing power. A term whose rounded coefficient is
/// zero is omitted; a coefficient of magnitude 1 on a non-constant term
/// omits the explicit "1"; signs are rendered as ` + ` / ` - ` separators
/// with the first term's leading '+' stripped. All four coefficients zero
/// formats as `"0"`.
pub fn format_cubic<F: Float>(coeffs: &CubicCoeffs<F>, var: char) -> String {
    let terms = [
        (round_display(coeffs.a), format!("{var}\u{b3}")),
        (round_display(coeffs.b), format!("{var}\u{b2}")),
        (round_display(coeffs.c), var.to_string()),
        (round_display(coeffs.d), String::new()),
    ];

    let mut out = String::new();
    for (value, suffix) in &terms {
        if *value == 0.0 {
            continue;
        }

        if out.is_empty() {
            if *value < 0.0 {
                out.push('-');
            }
        } else {
            out.push_str(if *value < 0.0 { " - " } else { " + " });
        }

        let magnitude = value.abs();
        if magnitude != 1.0 || suffix.is_empty() {
            out.push_str(&coeff_text(magnitude));
        }
        out.push_str(suffix);
    }

    if out.is_empty() {
        out.push('0');
    }
    out
}

/// Re-extracts cubic coefficients from a formatted equation string.
///
/// Accepts the output of [`format_cubic`]: signed terms in the given
/// variable with optional `²`/`³` superscripts. Missing terms read as zero.
pub fn parse_cubic<F: Float>(s: &str, var: char) -> Result<CubicCoeffs<F>, EquationError> {
    let mut chars = s.char_indices().peekable();
    // Indexed by power of the variable.
    let mut coeffs = [0.0f64; 4];
    let mut seen = [false; 4];
    let mut any = false;

    loop {
        skip_whitespace(&mut chars);
        let Some(&(pos, c)) = chars.peek() else { break };

        // Sign: optional on the first term, required between terms.
        let mut sign = 1.0;
        if c == '+' || c == '-' {
            if c == '-' {
                sign = -1.0;
            }
            chars.next();
            skip_whitespace(&mut chars);
        } else if any {
            return Err(EquationError::UnexpectedChar(c, pos));
        }

        // Numeric part, optional when the variable is present.
        let mut number = String::new();
        while let Some(&(_, c)) = chars.peek() {
            if c.is_ascii_digit() || c == '.' {
                number.push(c);
                chars.next();
            } else {
                break;
            }
        }

        // Variable with optional superscript power.
        let mut power = 0u32;
        let mut has_var = false;
        if let Some(&(_, c)) = chars.peek() {
            if c == var {
                has_var = true;
                power = 1;
                chars.next();
                if let Some(&(_, exp)) = chars.peek() {
                    if exp == '\u{b3}' {
                        power = 3;
                        chars.next();
                    } else if exp == '\u{b2}' {
                        power = 2;
                        chars.next();
                    }
                }
            }
        }

        if number.is_empty() && !has_var {
            return match chars.peek() {
                Some(&(pos, c)) => Err(EquationError::UnexpectedChar(c, pos)),
                None => Err(EquationError::InvalidCoefficient(String::new())),
            };
        }

        let magnitude: f64 = if number.is_empty() {
            1.0
        } else {
            number
                .parse()
                .map_err(|_| EquationError::InvalidCoefficient(number.clone()))?
        };

        let idx = power as usize;
        if seen[idx] {
            return Err(EquationError::DuplicateTerm(power));
        }
        seen[idx] = true;
        coeffs[idx] = sign * magnitude;
        any = true;
    }

    if !any {
        return Err(EquationError::Empty);
    }

    let from = |v: f64| F::from(v).unwrap();
    Ok(CubicCoeffs::new(
        from(coeffs[3]),
        from(coeffs[2]),
        from(coeffs[1]),
        from(coeffs[0]),
    ))
}

fn skip_whitespace(chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>) {
    while let Some(&(_, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(a: f64, b: f64, c: f64, d: f64) -> String {
        format_cubic(&CubicCoeffs::new(a, b, c, d), 'u')
    }

    #[test]
    fn test_full_cubic() {
        assert_eq!(fmt(-15.0, 24.0, 1.0, 2.0), "-15u³ + 24u² + u + 2");
    }

    #[test]
    fn test_zero_terms_omitted() {
        assert_eq!(fmt(0.0, -3.0, 1.0, 2.0), "-3u² + u + 2");
        assert_eq!(fmt(4.0, 0.0, 0.0, 0.0), "4u³");
    }

    #[test]
    fn test_unit_coefficients() {
        assert_eq!(fmt(1.0, 0.0, -1.0, 0.0), "u³ - u");
        // The constant term keeps its "1".
        assert_eq!(fmt(0.0, 0.0, 0.0, 1.0), "1");
        assert_eq!(fmt(0.0, 0.0, 0.0, -1.0), "-1");
    }

    #[test]
    fn test_all_zero() {
        assert_eq!(fmt(0.0, 0.0, 0.0, 0.0), "0");
    }

    #[test]
    fn test_decimal_display() {
        assert_eq!(fmt(0.0, 2.5, 0.0, 0.25), "2.5u² + 0.25");
        // Display rounding to two places; a coefficient rounding to zero drops out.
        assert_eq!(fmt(1.006, 0.0, 0.002, 3.0), "1.01u³ + 3");
    }

    #[test]
    fn test_parse_round_trip() {
        let cases = [
            (-15.0, 24.0, 1.0, 2.0),
            (0.0, -3.0, 1.0, 2.0),
            (1.0, 0.0, -1.0, 0.0),
            (0.0, 0.0, 0.0, 0.0),
            (0.25, -2.5, 0.0, -7.0),
        ];

        for (a, b, c, d) in cases {
            let eq = fmt(a, b, c, d);
            let parsed: CubicCoeffs<f64> = parse_cubic(&eq, 'u').unwrap();
            assert_eq!(parsed, CubicCoeffs::new(a, b, c, d), "case {eq:?}");
        }
    }

    #[test]
    fn test_formatting_idempotent() {
        let coeffs = CubicCoeffs::new(0.0, -3.0, 1.0, 2.0);
        let eq = format_cubic(&coeffs, 'u');
        let reparsed: CubicCoeffs<f64> = parse_cubic(&eq, 'u').unwrap();
        assert_eq!(format_cubic(&reparsed, 'u'), eq);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_cubic::<f64>("", 'u'), Err(EquationError::Empty));
        assert_eq!(parse_cubic::<f64>("   ", 'u'), Err(EquationError::Empty));
        assert!(matches!(
            parse_cubic::<f64>("3x + 1", 'u'),
            Err(EquationError::UnexpectedChar('x', _))
        ));
        assert!(matches!(
            parse_cubic::<f64>("3u² + 4u²", 'u'),
            Err(EquationError::DuplicateTerm(2))
        ));
        // A second term needs an explicit sign.
        assert!(matches!(
            parse_cubic::<f64>("5 5", 'u'),
            Err(EquationError::UnexpectedChar('5', _))
        ));
    }
}
