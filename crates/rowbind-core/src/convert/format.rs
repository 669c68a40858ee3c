use super::parse::check_layout;
use super::{Conversion, Convert, Target};
use crate::{bail, Result, Type, Value};

use chrono::{DateTime, FixedOffset};

/// Renders a signed integer in the given base (2 to 36).
#[derive(Debug, Clone, Copy)]
pub struct FormatInt {
    base: u32,
}

/// Renders an unsigned integer in the given base (2 to 36).
#[derive(Debug, Clone, Copy)]
pub struct FormatUint {
    base: u32,
}

/// Renders a float, with a fixed number of decimals if set and the shortest
/// exact representation otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatFloat {
    precision: Option<usize>,
}

/// Renders `true` or `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatBool;

/// Renders a timestamp with a `strftime` layout.
#[derive(Debug, Clone)]
pub struct FormatTime {
    layout: String,
}

impl FormatInt {
    pub fn new(base: u32) -> FormatInt {
        FormatInt { base }
    }
}

impl FormatUint {
    pub fn new(base: u32) -> FormatUint {
        FormatUint { base }
    }
}

impl FormatFloat {
    pub fn new(precision: Option<usize>) -> FormatFloat {
        FormatFloat { precision }
    }
}

impl FormatTime {
    pub fn new(layout: impl Into<String>) -> FormatTime {
        FormatTime {
            layout: layout.into(),
        }
    }
}

fn check_base(op: &str, base: u32) -> Result<()> {
    if !(2..=36).contains(&base) {
        bail!("{}: invalid base {}", op, base);
    }
    Ok(())
}

impl Convert for FormatInt {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        check_base("FormatInt", self.base)?;
        let base = self.base;
        Conversion::produce(dest, Type::I64, Type::String, move |value| {
            let v = i64::try_from(value)?;
            let digits = radix(v.unsigned_abs(), base);
            Ok(Value::String(if v < 0 {
                format!("-{}", digits)
            } else {
                digits
            }))
        })
    }
}

impl Convert for FormatUint {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        check_base("FormatUint", self.base)?;
        let base = self.base;
        Conversion::produce(dest, Type::U64, Type::String, move |value| {
            Ok(Value::String(radix(u64::try_from(value)?, base)))
        })
    }
}

impl Convert for FormatFloat {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        let precision = self.precision;
        Conversion::produce(dest, Type::F64, Type::String, move |value| {
            let v = f64::try_from(value)?;
            Ok(Value::String(match precision {
                Some(precision) => format!("{:.*}", precision, v),
                None => v.to_string(),
            }))
        })
    }
}

impl Convert for FormatBool {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        Conversion::produce(dest, Type::Bool, Type::String, |value| {
            Ok(Value::String(bool::try_from(value)?.to_string()))
        })
    }
}

impl Convert for FormatTime {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        check_layout("FormatTime", &self.layout)?;
        let layout = self.layout.clone();
        Conversion::produce(dest, Type::Timestamp, Type::String, move |value| {
            let v = DateTime::<FixedOffset>::try_from(value)?;
            Ok(Value::String(v.format(&layout).to_string()))
        })
    }
}

fn radix(mut v: u64, base: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if v == 0 {
        return "0".to_string();
    }

    let base = u64::from(base);
    let mut out = vec![];
    while v > 0 {
        out.push(DIGITS[(v % base) as usize]);
        v /= base;
    }
    out.iter().rev().map(|&b| char::from(b)).collect()
}
