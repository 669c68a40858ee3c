use super::{into_string, Conversion, Convert, Target};
use crate::{Result, Type, Value};

/// Removes leading and trailing characters contained in a cutset.
#[derive(Debug, Clone)]
pub struct Trim {
    cutset: String,
}

/// Removes leading and trailing whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrimSpace;

/// Removes a prefix, if present.
#[derive(Debug, Clone)]
pub struct TrimPrefix {
    prefix: String,
}

/// Removes a suffix, if present.
#[derive(Debug, Clone)]
pub struct TrimSuffix {
    suffix: String,
}

impl Trim {
    pub fn new(cutset: impl Into<String>) -> Trim {
        Trim {
            cutset: cutset.into(),
        }
    }
}

impl TrimPrefix {
    pub fn new(prefix: impl Into<String>) -> TrimPrefix {
        TrimPrefix {
            prefix: prefix.into(),
        }
    }
}

impl TrimSuffix {
    pub fn new(suffix: impl Into<String>) -> TrimSuffix {
        TrimSuffix {
            suffix: suffix.into(),
        }
    }
}

fn string_step<F>(dest: &Target, f: F) -> Result<Conversion>
where
    F: Fn(&str) -> &str + Send + Sync + 'static,
{
    Conversion::produce(dest, Type::String, Type::String, move |value| {
        let input = into_string(value)?;
        let output = f(&input);
        if output.len() == input.len() {
            Ok(Value::String(input))
        } else {
            Ok(Value::from(output))
        }
    })
}

impl Convert for Trim {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        let cutset: Vec<char> = self.cutset.chars().collect();
        string_step(dest, move |s| s.trim_matches(&cutset[..]))
    }
}

impl Convert for TrimSpace {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        string_step(dest, str::trim)
    }
}

impl Convert for TrimPrefix {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        let prefix = self.prefix.clone();
        string_step(dest, move |s| s.strip_prefix(&prefix[..]).unwrap_or(s))
    }
}

impl Convert for TrimSuffix {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        let suffix = self.suffix.clone();
        string_step(dest, move |s| s.strip_suffix(&suffix[..]).unwrap_or(s))
    }
}
