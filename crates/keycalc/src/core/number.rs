//! Operand parsing, result rounding and display formatting

/// Default number of decimal places results are rounded to
pub const DEFAULT_PRECISION: u8 = 10;

/// Fractional digits needed to print any finite `f64` exactly
const EXACT_DIGITS: usize = 1100;

/// Parses the leading number of an operand string.
///
/// Only the longest numeric prefix is read, so digits typed after a result
/// like `Infinity` are ignored (`Infinity5` is `Infinity`). Returns `None`
/// for anything that is not a number yet: the empty string, a lone `.` or
/// `-`, and a previous `NaN` result.
#[must_use]
pub fn parse_operand(text: &str) -> Option<f64> {
    numeric_prefix(text)
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}

/// Longest prefix of `text` shaped like `[sign](Infinity | digits[.digits][e[sign]digits])`
fn numeric_prefix(text: &str) -> &str {
    const INFINITY: &str = "Infinity";

    let bytes = text.as_bytes();
    let digits_from = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if text[end..].starts_with(INFINITY) {
        return &text[..end + INFINITY.len()];
    }

    let int_len = digits_from(end);
    end += int_len;
    if bytes.get(end) == Some(&b'.') {
        let frac_len = digits_from(end + 1);
        if int_len + frac_len == 0 {
            return "";
        }
        end += 1 + frac_len;
    } else if int_len == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_len = digits_from(exp);
        if exp_len > 0 {
            end = exp + exp_len;
        }
    }
    &text[..end]
}

/// Rounds `value` to `precision` decimal places.
///
/// The exact decimal expansion of `value` is rounded half away from zero,
/// then read back as the nearest double, e.g. `0.1 + 0.2` becomes `0.3` and
/// `1 / 2048` (exactly `0.00048828125`) becomes `0.0004882813`.
#[must_use]
pub fn round_to_precision(value: f64, precision: u8) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    round_half_away(&exact, usize::from(precision))
        .parse::<f64>()
        .map_or(value, |magnitude| magnitude.copysign(value))
}

/// Rounds a plain non-negative decimal string to `precision` fractional digits
fn round_half_away(exact: &str, precision: usize) -> String {
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact, ""));
    let keep = precision.min(frac_part.len());
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(keep))
        .collect();

    if frac_part.as_bytes().get(keep).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let (int_digits, frac_digits) = digits.split_at(digits.len() - keep);
    let mut out: String = int_digits.iter().copied().map(char::from).collect();
    if !frac_digits.is_empty() {
        out.push('.');
        out.extend(frac_digits.iter().copied().map(char::from));
    }
    out
}

/// Formats a number as the shortest decimal string that reads back exactly.
///
/// Trailing zeros never survive (`2.5000000000` prints as `2.5`), negative
/// zero prints as `0`, and non-finite values are spelled out so they can be
/// parsed again by [`parse_operand`].
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}
