//! Rule parameter coercion
//!
//! A rule parameter arrives as text and is coerced to the numeric type the
//! rule needs. Every malformed or out-of-range parameter becomes
//! [`RuleError::BadParameter`]; nothing here panics.
//!
//! # Integer grammar
//!
//! An optional sign (signed only), then an optional base prefix:
//! `0x`/`0X` (hex), `0o`/`0O` (octal), `0b`/`0B` (binary), or a bare leading
//! `0` (octal). Underscores may separate digits, or follow a base prefix.
//!
//! # Float grammar
//!
//! Decimal literals (`1.5`, `.5`, `2.`, `1e-3`), hexadecimal mantissas with a
//! mandatory binary exponent (`0x1.8p3`), and case-insensitive `inf`,
//! `infinity` (optionally signed) and `nan`. A finite literal too large for
//! `f64` is rejected rather than saturated to infinity.

use crate::error::RuleError;

/// Coerces a parameter to a signed 64-bit integer.
///
/// # Examples
///
/// ```
/// use tagcheck_validator::param::as_int;
///
/// assert_eq!(as_int("-42"), Ok(-42));
/// assert_eq!(as_int("0x1F"), Ok(31));
/// assert_eq!(as_int("0755"), Ok(493));
/// assert!(as_int("ten").is_err());
/// ```
pub fn as_int(param: &str) -> Result<i64, RuleError> {
    let (negative, magnitude) = match param.as_bytes().first() {
        Some(b'-') => (true, &param[1..]),
        Some(b'+') => (false, &param[1..]),
        _ => (false, param),
    };
    let n = as_uint(magnitude)?;
    if negative {
        // i64::MIN has no positive counterpart.
        match n.cmp(&i64::MIN.unsigned_abs()) {
            std::cmp::Ordering::Greater => Err(RuleError::BadParameter),
            std::cmp::Ordering::Equal => Ok(i64::MIN),
            std::cmp::Ordering::Less => Ok(-(n as i64)),
        }
    } else {
        i64::try_from(n).map_err(|_| RuleError::BadParameter)
    }
}

/// Coerces a parameter to an unsigned 64-bit integer.
///
/// Signs are rejected, including `+`.
pub fn as_uint(param: &str) -> Result<u64, RuleError> {
    if param.is_empty() {
        return Err(RuleError::BadParameter);
    }

    let (radix, digits) = split_radix(param);
    if digits.contains('_') && !underscores_ok(param) {
        return Err(RuleError::BadParameter);
    }

    let mut n: u64 = 0;
    for c in digits.chars().filter(|&c| c != '_') {
        let d = c.to_digit(radix).ok_or(RuleError::BadParameter)?;
        n = n
            .checked_mul(u64::from(radix))
            .and_then(|n| n.checked_add(u64::from(d)))
            .ok_or(RuleError::BadParameter)?;
    }
    Ok(n)
}

/// Coerces a parameter to a 64-bit float.
///
/// # Examples
///
/// ```
/// use tagcheck_validator::param::as_float;
///
/// assert_eq!(as_float("2.5"), Ok(2.5));
/// assert_eq!(as_float("1_000.5"), Ok(1000.5));
/// assert_eq!(as_float("0x1p-2"), Ok(0.25));
/// assert!(as_float("1e400").is_err());
/// ```
pub fn as_float(param: &str) -> Result<f64, RuleError> {
    if let Some(special) = parse_special(param) {
        return Ok(special);
    }

    let (negative, body) = match param.as_bytes().first() {
        Some(b'-') => (true, &param[1..]),
        Some(b'+') => (false, &param[1..]),
        _ => (false, param),
    };

    if body.contains('_') && !underscores_ok(body) {
        return Err(RuleError::BadParameter);
    }

    let magnitude = match hex_body(body) {
        Some(hex) => parse_hex_float(hex)?,
        None => parse_decimal_float(body)?,
    };

    if magnitude.is_infinite() {
        return Err(RuleError::BadParameter);
    }
    Ok(if negative { -magnitude } else { magnitude })
}

// ============================================================================
// HELPERS
// ============================================================================

/// Splits a base prefix off an unsigned literal.
fn split_radix(s: &str) -> (u32, &str) {
    let bytes = s.as_bytes();
    if bytes.first() != Some(&b'0') {
        return (10, s);
    }
    if bytes.len() >= 3 {
        match bytes[1].to_ascii_lowercase() {
            b'b' => return (2, &s[2..]),
            b'o' => return (8, &s[2..]),
            b'x' => return (16, &s[2..]),
            _ => {}
        }
    }
    (8, &s[1..])
}

/// Underscores must sit between digits, or directly after a base prefix, and
/// may not end the literal.
fn underscores_ok(s: &str) -> bool {
    #[derive(PartialEq)]
    enum Saw {
        Start,
        Digit,
        Underscore,
        Other,
    }

    let s = s.strip_prefix(['+', '-']).unwrap_or(s);
    let bytes = s.as_bytes();
    let mut saw = Saw::Start;
    let mut i = 0;
    let mut hex = false;

    if bytes.len() >= 2 && bytes[0] == b'0' {
        let prefix = bytes[1].to_ascii_lowercase();
        if matches!(prefix, b'b' | b'o' | b'x') {
            i = 2;
            saw = Saw::Digit;
            hex = prefix == b'x';
        }
    }

    for &b in &bytes[i..] {
        if b.is_ascii_digit() || (hex && b.is_ascii_hexdigit()) {
            saw = Saw::Digit;
        } else if b == b'_' {
            if saw != Saw::Digit {
                return false;
            }
            saw = Saw::Underscore;
        } else {
            if saw == Saw::Underscore {
                return false;
            }
            saw = Saw::Other;
        }
    }
    saw != Saw::Underscore
}

fn parse_special(s: &str) -> Option<f64> {
    if s.eq_ignore_ascii_case("nan") {
        return Some(f64::NAN);
    }
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    if rest.eq_ignore_ascii_case("inf") || rest.eq_ignore_ascii_case("infinity") {
        Some(sign * f64::INFINITY)
    } else {
        None
    }
}

fn hex_body(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'0' && bytes[1].eq_ignore_ascii_case(&b'x') {
        Some(&s[2..])
    } else {
        None
    }
}

fn parse_decimal_float(s: &str) -> Result<f64, RuleError> {
    let cleaned: String = s.chars().filter(|&c| c != '_').collect();
    // `inf`/`nan` spellings were handled by `parse_special`.
    let well_formed = cleaned
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !well_formed || cleaned.starts_with(['+', '-']) {
        return Err(RuleError::BadParameter);
    }
    cleaned.parse::<f64>().map_err(|_| RuleError::BadParameter)
}

/// Parses the part of a hex float after `0x`: mantissa digits with an optional
/// point, then a mandatory `p` exponent.
fn parse_hex_float(s: &str) -> Result<f64, RuleError> {
    let (mantissa, exponent) = s
        .split_once(['p', 'P'])
        .ok_or(RuleError::BadParameter)?;

    let mut bits: u64 = 0;
    let mut scale: i64 = 0;
    let mut seen_point = false;
    let mut seen_digit = false;
    // Any nonzero digit dropped past the kept precision.
    let mut sticky = false;

    for c in mantissa.chars().filter(|&c| c != '_') {
        if c == '.' {
            if seen_point {
                return Err(RuleError::BadParameter);
            }
            seen_point = true;
            continue;
        }
        let d = c.to_digit(16).ok_or(RuleError::BadParameter)?;
        seen_digit = true;
        if bits >> 60 == 0 {
            bits = bits << 4 | u64::from(d);
            if seen_point {
                scale -= 4;
            }
        } else {
            // Out of mantissa precision: keep the magnitude, drop the digit.
            sticky |= d != 0;
            if !seen_point {
                scale += 4;
            }
        }
    }
    if !seen_digit {
        return Err(RuleError::BadParameter);
    }
    // At least 61 bits are kept, so the low bit lies below the f64 rounding
    // position and only breaks ties.
    bits |= u64::from(sticky);

    let exponent: i64 = {
        let exponent: String = exponent.chars().filter(|&c| c != '_').collect();
        let exponent = exponent.as_str();
        let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RuleError::BadParameter);
        }
        // Saturate absurd exponents; the result is 0 or infinity either way.
        exponent.parse::<i64>().unwrap_or(if exponent.starts_with('-') {
            i64::MIN / 2
        } else {
            i64::MAX / 2
        })
    };

    Ok(ldexp(bits as f64, exponent.saturating_add(scale)))
}

/// `x * 2^exp` without intermediate overflow or underflow.
fn ldexp(mut x: f64, mut exp: i64) -> f64 {
    const STEP: i64 = 1000;
    while x.is_finite() && x != 0.0 && exp != 0 {
        let step = exp.clamp(-STEP, STEP);
        x *= 2f64.powi(step as i32);
        exp -= step;
    }
    x
}

// ============================================================================
// TESTS
// ============================================================================
