//! Builders for scanner pipelines.
//!
//! A pipeline starts from the representation requested from the row cursor
//! and is extended one step at a time:
//!
//! ```ignore
//! use rowbind::scan;
//!
//! let scanners = [
//!     scan::int().to("id"),
//!     scan::string().trim_space().parse_int(10, 32).nullable().to("count"),
//!     scan::string().default("unknown").to("label"),
//!     scan::string().split(",").parse_int(10, 32).sort().to("scores"),
//! ];
//! ```
//!
//! The kind parameter tracks what the pipeline produces so that only the
//! steps accepting it are offered. Type checks against the destination field
//! still happen when the scanners are bound.

use crate::Scanner;

use rowbind_core::convert::{
    Chain, Conversion, Convert, Converter, Cut, Decode, Each, Fallback, FormatBool, FormatFloat,
    FormatInt, FormatTime, FormatUint, Identity, Lookup, Nullable, Order, ParseBool,
    ParseComplex, ParseFloat, ParseInt, ParseTime, ParseUint, Sort, Source, Split, Target, Trim,
    TrimPrefix, TrimSpace, TrimSuffix,
};
use rowbind_core::{Error, Result, Type, Value};

use chrono::FixedOffset;
use std::marker::PhantomData;
use std::sync::Arc;

/// Marker types for what a pipeline produces.
pub mod kind {
    use std::marker::PhantomData;

    /// Anything; only generic steps are offered.
    #[derive(Debug)]
    pub struct Any;

    #[derive(Debug)]
    pub struct Str;

    #[derive(Debug)]
    pub struct Int;

    #[derive(Debug)]
    pub struct Uint;

    #[derive(Debug)]
    pub struct Float;

    #[derive(Debug)]
    pub struct Complex;

    #[derive(Debug)]
    pub struct Bool;

    #[derive(Debug)]
    pub struct Bytes;

    #[derive(Debug)]
    pub struct Time;

    /// Handed to a decoder; nothing can follow.
    #[derive(Debug)]
    pub struct Decoded;

    #[derive(Debug)]
    pub struct List<K>(PhantomData<K>);
}

use kind::{Any, Bool, Bytes, Complex, Decoded, Float, Int, List, Str, Time, Uint};

/// A converter under construction.
pub struct Pipeline<K> {
    chain: Chain,
    _kind: PhantomData<fn() -> K>,
}

/// One member of an enumeration: its name and its numeric code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    pub string: String,
    pub int: i64,
}

/// A step whose configuration was rejected while the pipeline was built.
///
/// The error is reported when the pipeline is bound, together with every
/// other setup error.
#[derive(Debug)]
struct Invalid(Error);

impl Convert for Invalid {
    fn bind(&self, _dest: &Target) -> Result<Conversion> {
        Err(self.0.clone())
    }
}

/// Reads the destination's own representation.
pub fn field() -> Pipeline<Any> {
    Pipeline::start(Identity)
}

pub fn string() -> Pipeline<Str> {
    Pipeline::start(Source(Type::String))
}

pub fn int() -> Pipeline<Int> {
    Pipeline::start(Source(Type::I64))
}

pub fn uint() -> Pipeline<Uint> {
    Pipeline::start(Source(Type::U64))
}

pub fn float() -> Pipeline<Float> {
    Pipeline::start(Source(Type::F64))
}

pub fn complex() -> Pipeline<Complex> {
    Pipeline::start(Source(Type::Complex))
}

pub fn bool() -> Pipeline<Bool> {
    Pipeline::start(Source(Type::Bool))
}

pub fn bytes() -> Pipeline<Bytes> {
    Pipeline::start(Source(Type::Bytes))
}

pub fn time() -> Pipeline<Time> {
    Pipeline::start(Source(Type::Timestamp))
}

impl Enum {
    pub fn new(string: impl Into<String>, int: i64) -> Enum {
        Enum {
            string: string.into(),
            int,
        }
    }
}

impl<K> Pipeline<K> {
    fn start(step: impl Convert) -> Pipeline<K> {
        Pipeline::from_chain(Chain::default().step(step))
    }

    fn from_chain(chain: Chain) -> Pipeline<K> {
        Pipeline {
            chain,
            _kind: PhantomData,
        }
    }

    fn push<K2>(self, step: impl Convert) -> Pipeline<K2> {
        Pipeline::from_chain(self.chain.step(step))
    }

    fn wrap<K2, C: Convert>(self, f: impl FnOnce(Converter) -> C) -> Pipeline<K2> {
        Pipeline::start(f(Arc::new(self.chain)))
    }

    /// Appends an arbitrary step. The result only offers generic steps.
    pub fn with(self, step: impl Convert) -> Pipeline<Any> {
        self.push(step)
    }

    /// Accepts absent values; the field keeps its zero value when the column
    /// is `NULL`.
    pub fn nullable(self) -> Pipeline<K> {
        self.wrap(Nullable::new)
    }

    /// Commits `value` when the column is `NULL`.
    ///
    /// The fallback is checked against the destination when the pipeline is
    /// bound.
    pub fn default(self, value: impl Into<Value>) -> Pipeline<K> {
        let value = value.into();
        self.wrap(|inner| Fallback::new(inner, value))
    }

    /// Binds the pipeline to the field at `path`.
    ///
    /// An empty path names the record itself.
    pub fn to(self, path: impl Into<String>) -> Scanner {
        Scanner::new(path, self.chain)
    }

    /// The number of steps in the pipeline.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

impl<K: 'static> Convert for Pipeline<K> {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        self.chain.bind(dest)
    }
}

impl<K> Clone for Pipeline<K> {
    fn clone(&self) -> Pipeline<K> {
        Pipeline::from_chain(self.chain.clone())
    }
}

impl<K> core::fmt::Debug for Pipeline<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Pipeline")
            .field("steps", &self.chain.len())
            .finish()
    }
}

impl Pipeline<Str> {
    /// Removes leading and trailing characters contained in `cutset`.
    pub fn trim(self, cutset: impl Into<String>) -> Pipeline<Str> {
        self.push(Trim::new(cutset))
    }

    pub fn trim_space(self) -> Pipeline<Str> {
        self.push(TrimSpace)
    }

    pub fn trim_prefix(self, prefix: impl Into<String>) -> Pipeline<Str> {
        self.push(TrimPrefix::new(prefix))
    }

    pub fn trim_suffix(self, suffix: impl Into<String>) -> Pipeline<Str> {
        self.push(TrimSuffix::new(suffix))
    }

    /// Parses a signed integer. Base 0 infers the base from the prefix and a
    /// bit size of 0 means 64.
    pub fn parse_int(self, base: u32, bits: u32) -> Pipeline<Int> {
        self.push(ParseInt::new(base, bits))
    }

    pub fn parse_uint(self, base: u32, bits: u32) -> Pipeline<Uint> {
        self.push(ParseUint::new(base, bits))
    }

    pub fn parse_float(self, bits: u32) -> Pipeline<Float> {
        self.push(ParseFloat::new(bits))
    }

    pub fn parse_complex(self, bits: u32) -> Pipeline<Complex> {
        self.push(ParseComplex::new(bits))
    }

    pub fn parse_bool(self) -> Pipeline<Bool> {
        self.push(ParseBool)
    }

    /// Parses a timestamp with a `strftime` layout. Inputs without an offset
    /// are taken as UTC.
    pub fn parse_time(self, layout: impl Into<String>) -> Pipeline<Time> {
        self.push(ParseTime::new(layout))
    }

    /// Like [`parse_time`](Self::parse_time), with inputs lacking an offset
    /// taken in `offset`.
    pub fn parse_time_in(self, layout: impl Into<String>, offset: FixedOffset) -> Pipeline<Time> {
        self.push(ParseTime::in_offset(layout, offset))
    }

    /// Splits around every occurrence of `sep`.
    pub fn split(self, sep: impl Into<String>) -> Pipeline<List<Str>> {
        self.push(Split::new(sep))
    }

    /// Splits around the first occurrence of `sep` into two parts.
    pub fn cut(self, sep: impl Into<String>) -> Pipeline<List<Str>> {
        self.push(Cut::new(sep))
    }

    /// Maps enum names to their codes.
    pub fn lookup(self, members: &[Enum]) -> Pipeline<Int> {
        match enum_table(members) {
            Ok(table) => self.push(table),
            Err(err) => self.push(Invalid(err)),
        }
    }

    pub fn text(self) -> Pipeline<Decoded> {
        self.push(Decode::text())
    }

    pub fn json(self) -> Pipeline<Decoded> {
        self.push(Decode::json())
    }
}

impl Pipeline<Int> {
    pub fn format(self, base: u32) -> Pipeline<Str> {
        self.push(FormatInt::new(base))
    }

    /// Maps enum codes to their names.
    pub fn lookup(self, members: &[Enum]) -> Pipeline<Str> {
        match enum_table(members) {
            Ok(table) => self.push(table.reverse()),
            Err(err) => self.push(Invalid(err)),
        }
    }
}

impl Pipeline<Uint> {
    pub fn format(self, base: u32) -> Pipeline<Str> {
        self.push(FormatUint::new(base))
    }
}

impl Pipeline<Float> {
    /// Renders with `precision` decimals, or the shortest exact form.
    pub fn format(self, precision: Option<usize>) -> Pipeline<Str> {
        self.push(FormatFloat::new(precision))
    }
}

impl Pipeline<Bool> {
    pub fn format(self) -> Pipeline<Str> {
        self.push(FormatBool)
    }
}

impl Pipeline<Time> {
    pub fn format(self, layout: impl Into<String>) -> Pipeline<Str> {
        self.push(FormatTime::new(layout))
    }
}

impl Pipeline<Bytes> {
    pub fn text(self) -> Pipeline<Decoded> {
        self.push(Decode::text())
    }

    pub fn binary(self) -> Pipeline<Decoded> {
        self.push(Decode::binary())
    }

    pub fn json(self) -> Pipeline<Decoded> {
        self.push(Decode::json())
    }
}

impl<K> Pipeline<List<K>> {
    /// Applies the pipeline built by `f` to every item.
    pub fn each<K2>(self, f: impl FnOnce(Pipeline<K>) -> Pipeline<K2>) -> Pipeline<List<K2>> {
        let item = f(Pipeline::from_chain(Chain::default()));
        self.push(Each::new(Arc::new(item.chain)))
    }

    pub fn sort(self) -> Pipeline<List<K>> {
        self.push(Sort::new(Order::Asc))
    }

    pub fn sort_desc(self) -> Pipeline<List<K>> {
        self.push(Sort::new(Order::Desc))
    }
}

impl Pipeline<List<Str>> {
    pub fn trim_space(self) -> Pipeline<List<Str>> {
        self.each(|item| item.trim_space())
    }

    pub fn parse_int(self, base: u32, bits: u32) -> Pipeline<List<Int>> {
        self.each(|item| item.parse_int(base, bits))
    }

    pub fn parse_uint(self, base: u32, bits: u32) -> Pipeline<List<Uint>> {
        self.each(|item| item.parse_uint(base, bits))
    }

    pub fn parse_float(self, bits: u32) -> Pipeline<List<Float>> {
        self.each(|item| item.parse_float(bits))
    }

    pub fn parse_bool(self) -> Pipeline<List<Bool>> {
        self.each(|item| item.parse_bool())
    }
}

fn enum_table(members: &[Enum]) -> Result<Lookup> {
    Lookup::new(
        members
            .iter()
            .map(|member| (member.string.clone(), member.int)),
    )
}
