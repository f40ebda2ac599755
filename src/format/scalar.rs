use std::fmt::{LowerExp, Write};

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::format::Complex;

/// Exponents below this use the exponent form.
const MIN_PLAIN_EXP: i32 = -4;
/// Exponents at or above this use the exponent form.
const MAX_PLAIN_EXP: i32 = 6;

/// Floating point types that can be laid out in the general form.
pub(crate) trait Float: Copy + LowerExp {
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    fn is_sign_negative(self) -> bool;
}

impl Float for f32 {
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }

    fn is_infinite(self) -> bool {
        f32::is_infinite(self)
    }

    fn is_sign_negative(self) -> bool {
        f32::is_sign_negative(self)
    }
}

impl Float for f64 {
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    fn is_infinite(self) -> bool {
        f64::is_infinite(self)
    }

    fn is_sign_negative(self) -> bool {
        f64::is_sign_negative(self)
    }
}

/// Writes the shortest representation of `value` that round-trips, in the general form: plain
/// decimal for moderate exponents, otherwise `d.dddE±dd`.
pub(crate) fn write_general<F: Float>(buf: &mut String, value: F) {
    if value.is_nan() {
        buf.push_str("NaN");
        return;
    }
    if value.is_infinite() {
        buf.push_str(if value.is_sign_negative() { "-Inf" } else { "+Inf" });
        return;
    }

    // LowerExp yields the shortest round-trip digits, e.g. "-1.23e10" or "5e-7".
    let scientific = format!("{:e}", value);
    let (mantissa, exp) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => (scientific.as_str(), "0"),
    };
    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa),
    };
    let digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    let exp: i32 = exp.parse().unwrap_or(0);

    if negative {
        buf.push('-');
    }

    if exp < MIN_PLAIN_EXP || exp >= MAX_PLAIN_EXP {
        buf.push(digits[0] as char);
        if digits.len() > 1 {
            buf.push('.');
            buf.extend(digits[1..].iter().map(|d| *d as char));
        }
        buf.push('E');
        buf.push(if exp < 0 { '-' } else { '+' });
        let _ = write!(buf, "{:02}", exp.unsigned_abs());
    } else {
        // The decimal point sits after `point` digits, which may be outside the digit string.
        let point = exp + 1;
        if point <= 0 {
            buf.push('0');
        } else {
            for i in 0..point as usize {
                buf.push(digits.get(i).map_or('0', |d| *d as char));
            }
        }
        let fraction = digits.len() as i32 - point;
        if fraction > 0 {
            buf.push('.');
            for i in point..digits.len() as i32 {
                buf.push(if i < 0 { '0' } else { digits[i as usize] as char });
            }
        }
    }
}

/// Writes a float so that it never looks like an integer: `.0` is appended whenever the general
/// form has neither a decimal point nor an exponent, including `NaN` and the infinities.
pub(crate) fn write_float<F: Float>(buf: &mut String, value: F) {
    let start = buf.len();
    write_general(buf, value);
    let written = &buf[start..];
    if !written.contains(['.', 'E']) {
        buf.push_str(".0");
    }
}

/// Writes a complex number as `(re±imi)`.
pub(crate) fn write_complex<F: Float>(buf: &mut String, value: Complex<F>) {
    buf.push('(');
    write_general(buf, value.re);
    let start = buf.len();
    write_general(buf, value.im);
    if !buf[start..].starts_with(['+', '-']) {
        buf.insert(start, '+');
    }
    buf.push_str("i)");
}

/// Returns true if the character can be written without escaping: letters, marks, numbers,
/// punctuation, symbols and the ASCII space. Every other separator, control, format, private use
/// and unassigned character is escaped.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

/// Writes `value` surrounded by `delimiter`, escaping the delimiter, backslashes and anything
/// that isn't printable.
pub(crate) fn write_quoted(buf: &mut String, value: &str, delimiter: char) {
    buf.push(delimiter);
    for c in value.chars() {
        write_escaped(buf, c, delimiter);
    }
    buf.push(delimiter);
}

fn write_escaped(buf: &mut String, c: char, delimiter: char) {
    if c == delimiter || c == '\\' {
        buf.push('\\');
        buf.push(c);
        return;
    }
    if is_printable(c) {
        buf.push(c);
        return;
    }
    match c {
        '\x07' => buf.push_str("\\a"),
        '\x08' => buf.push_str("\\b"),
        '\x0C' => buf.push_str("\\f"),
        '\n' => buf.push_str("\\n"),
        '\r' => buf.push_str("\\r"),
        '\t' => buf.push_str("\\t"),
        '\x0B' => buf.push_str("\\v"),
        c if (c as u32) < 0x80 => {
            let _ = write!(buf, "\\x{:02x}", c as u32);
        },
        c if (c as u32) < 0x10000 => {
            let _ = write!(buf, "\\u{:04x}", c as u32);
        },
        c => {
            let _ = write!(buf, "\\U{:08x}", c as u32);
        },
    }
}
