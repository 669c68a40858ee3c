use super::{into_string, Conversion, Convert, Target};
use crate::{bail, BoxError, Error, Result, Type, Value};

use chrono::format::{Item, ParseErrorKind, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, Utc};
use num_complex::{Complex32, Complex64};
use std::num::IntErrorKind;

/// Parses a signed integer in the given base.
///
/// Base 0 infers the base from a `0x`, `0o`, `0b` or `0` prefix and
/// defaults to 10. The value must fit in `bits` bits; 0 means 64.
#[derive(Debug, Clone, Copy)]
pub struct ParseInt {
    base: u32,
    bits: u32,
}

/// Parses an unsigned integer. Same parameters as [`ParseInt`]; signs are
/// rejected.
#[derive(Debug, Clone, Copy)]
pub struct ParseUint {
    base: u32,
    bits: u32,
}

/// Parses a floating point number. With 32 bits the result is exactly
/// representable as `f32`.
#[derive(Debug, Clone, Copy)]
pub struct ParseFloat {
    bits: u32,
}

/// Parses a complex number such as `1+2i` or `(1.5-2i)`, with 64 or 128
/// bits in total.
#[derive(Debug, Clone, Copy)]
pub struct ParseComplex {
    bits: u32,
}

/// Parses `1 t T TRUE true True` and `0 f F FALSE false False`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseBool;

/// Parses a timestamp with a `strftime` layout.
///
/// Layouts without an offset are read in the configured offset, UTC unless
/// set. Date-only layouts yield midnight.
#[derive(Debug, Clone)]
pub struct ParseTime {
    layout: String,
    offset: FixedOffset,
}

#[derive(Debug)]
enum NumError {
    Syntax,
    Range,
}

impl std::error::Error for NumError {}

impl core::fmt::Display for NumError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            NumError::Syntax => f.write_str("invalid syntax"),
            NumError::Range => f.write_str("value out of range"),
        }
    }
}

impl ParseInt {
    pub fn new(base: u32, bits: u32) -> ParseInt {
        ParseInt { base, bits }
    }
}

impl ParseUint {
    pub fn new(base: u32, bits: u32) -> ParseUint {
        ParseUint { base, bits }
    }
}

impl ParseFloat {
    pub fn new(bits: u32) -> ParseFloat {
        ParseFloat { bits }
    }
}

impl ParseComplex {
    pub fn new(bits: u32) -> ParseComplex {
        ParseComplex { bits }
    }
}

impl ParseTime {
    pub fn new(layout: impl Into<String>) -> ParseTime {
        ParseTime::in_offset(layout, Utc.fix())
    }

    pub fn in_offset(layout: impl Into<String>, offset: FixedOffset) -> ParseTime {
        ParseTime {
            layout: layout.into(),
            offset,
        }
    }
}

impl Convert for ParseInt {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        let bits = int_bits("ParseInt", self.base, self.bits)?;
        let base = self.base;
        Conversion::produce(dest, Type::String, Type::I64, move |value| {
            let input = into_string(value)?;
            match parse_int(&input, base, bits) {
                Ok(v) => Ok(Value::I64(v)),
                Err(err) => Err(Error::parse_failure("ParseInt", &input, err)),
            }
        })
    }
}

impl Convert for ParseUint {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        let bits = int_bits("ParseUint", self.base, self.bits)?;
        let base = self.base;
        Conversion::produce(dest, Type::String, Type::U64, move |value| {
            let input = into_string(value)?;
            match parse_uint(&input, base, bits) {
                Ok(v) => Ok(Value::U64(v)),
                Err(err) => Err(Error::parse_failure("ParseUint", &input, err)),
            }
        })
    }
}

impl Convert for ParseFloat {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        if !matches!(self.bits, 32 | 64) {
            bail!("ParseFloat: invalid bit size {}", self.bits);
        }
        let bits = self.bits;
        Conversion::produce(dest, Type::String, Type::F64, move |value| {
            let input = into_string(value)?;
            match parse_float(&input, bits) {
                Ok(v) => Ok(Value::F64(v)),
                Err(err) => Err(Error::parse_failure("ParseFloat", &input, err)),
            }
        })
    }
}

impl Convert for ParseComplex {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        if !matches!(self.bits, 64 | 128) {
            bail!("ParseComplex: invalid bit size {}", self.bits);
        }
        let bits = self.bits;
        Conversion::produce(dest, Type::String, Type::Complex, move |value| {
            let input = into_string(value)?;
            match parse_complex(&input, bits) {
                Ok(v) => Ok(Value::Complex(v)),
                Err(err) => Err(Error::parse_failure("ParseComplex", &input, err)),
            }
        })
    }
}

impl Convert for ParseBool {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        Conversion::produce(dest, Type::String, Type::Bool, |value| {
            let input = into_string(value)?;
            match &input[..] {
                "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(Value::Bool(true)),
                "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(Value::Bool(false)),
                _ => Err(Error::parse_failure("ParseBool", &input, NumError::Syntax)),
            }
        })
    }
}

impl Convert for ParseTime {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        check_layout("ParseTime", &self.layout)?;
        let layout = self.layout.clone();
        let offset = self.offset;
        Conversion::produce(dest, Type::String, Type::Timestamp, move |value| {
            let input = into_string(value)?;
            match parse_time(&input, &layout, offset) {
                Ok(v) => Ok(Value::Timestamp(v)),
                Err(err) => Err(Error::parse_failure("ParseTime", &input, err)),
            }
        })
    }
}

/// Validates base and bit size, returning the effective bit size.
fn int_bits(op: &str, base: u32, bits: u32) -> Result<u32> {
    if base == 1 || base > 36 {
        bail!("{}: invalid base {}", op, base);
    }
    match bits {
        0 => Ok(64),
        8 | 16 | 32 | 64 => Ok(bits),
        _ => bail!("{}: invalid bit size {}", op, bits),
    }
}

/// Returns an error if `layout` is not a valid `strftime` layout.
pub(super) fn check_layout(op: &str, layout: &str) -> Result<()> {
    if StrftimeItems::new(layout).any(|item| matches!(item, Item::Error)) {
        bail!("{}: invalid layout {:?}", op, layout);
    }
    Ok(())
}

/// Splits off the sign and, for base 0, the base prefix.
fn split_base(input: &str, base: u32) -> (bool, u32, &str) {
    let (negative, rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if base != 0 {
        return (negative, base, rest);
    }

    let prefix = rest.get(..2).map(str::to_ascii_lowercase);
    match prefix.as_deref() {
        Some("0x") => (negative, 16, &rest[2..]),
        Some("0o") => (negative, 8, &rest[2..]),
        Some("0b") => (negative, 2, &rest[2..]),
        _ if rest.len() > 1 && rest.starts_with('0') => (negative, 8, &rest[1..]),
        _ => (negative, 10, rest),
    }
}

fn parse_magnitude(digits: &str, base: u32) -> Result<u128, NumError> {
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(NumError::Syntax);
    }
    u128::from_str_radix(digits, base).map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => NumError::Range,
        _ => NumError::Syntax,
    })
}

fn parse_int(input: &str, base: u32, bits: u32) -> Result<i64, NumError> {
    let (negative, base, digits) = split_base(input, base);
    let magnitude = i128::try_from(parse_magnitude(digits, base)?).map_err(|_| NumError::Range)?;
    let value = if negative { -magnitude } else { magnitude };

    let max = (1i128 << (bits - 1)) - 1;
    let min = -(1i128 << (bits - 1));
    if value < min || value > max {
        return Err(NumError::Range);
    }
    i64::try_from(value).map_err(|_| NumError::Range)
}

fn parse_uint(input: &str, base: u32, bits: u32) -> Result<u64, NumError> {
    if input.starts_with(['+', '-']) {
        return Err(NumError::Syntax);
    }
    let (_, base, digits) = split_base(input, base);
    let value = parse_magnitude(digits, base)?;

    let max = (1u128 << bits) - 1;
    if value > max {
        return Err(NumError::Range);
    }
    u64::try_from(value).map_err(|_| NumError::Range)
}

fn parse_float(input: &str, bits: u32) -> Result<f64, NumError> {
    let value = if bits == 32 {
        input.parse::<f32>().map(f64::from)
    } else {
        input.parse::<f64>()
    }
    .map_err(|_| NumError::Syntax)?;

    if value.is_infinite() && !is_infinity(input) {
        return Err(NumError::Range);
    }
    Ok(value)
}

fn is_infinity(input: &str) -> bool {
    let unsigned = input.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn parse_complex(input: &str, bits: u32) -> Result<Complex64, NumError> {
    let input = input
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(input);

    let value = if bits == 64 {
        let v: Complex32 = input.parse().map_err(|_| NumError::Syntax)?;
        Complex64::new(v.re.into(), v.im.into())
    } else {
        input.parse().map_err(|_| NumError::Syntax)?
    };

    let infinite = value.re.is_infinite() || value.im.is_infinite();
    if infinite && !input.to_ascii_lowercase().contains("inf") {
        return Err(NumError::Range);
    }
    Ok(value)
}

fn parse_time(
    input: &str,
    layout: &str,
    offset: FixedOffset,
) -> core::result::Result<DateTime<FixedOffset>, BoxError> {
    match DateTime::parse_from_str(input, layout) {
        Ok(v) => return Ok(v),
        Err(err) if err.kind() != ParseErrorKind::NotEnough => return Err(err.into()),
        Err(_) => {}
    }

    // The layout carries no offset, or no time of day either.
    let naive = match NaiveDateTime::parse_from_str(input, layout) {
        Ok(v) => v,
        Err(err) if err.kind() == ParseErrorKind::NotEnough => {
            NaiveDate::parse_from_str(input, layout)?.and_time(NaiveTime::MIN)
        }
        Err(err) => return Err(err.into()),
    };

    naive
        .and_local_timezone(offset)
        .single()
        .ok_or_else(|| "local time does not exist in the offset".into())
}
