//! Type-directed value conversion.
//!
//! A converter is bound against its destination before any row is read. The
//! resulting [`Conversion`] names the representation it wants from the row
//! cursor and holds the function that turns that representation into a
//! value the destination accepts. Binding fails with `TypeIncompatible` when
//! the two sides cannot line up, so misconfigured bindings surface when they
//! are built rather than on the first row.

mod chain;
pub use chain::Chain;

mod decode;
pub use decode::Decode;

mod fallback;
pub use fallback::Fallback;

mod format;
pub use format::{FormatBool, FormatFloat, FormatInt, FormatTime, FormatUint};

mod identity;
pub use identity::{Identity, Source};

mod lookup;
pub use lookup::{Direction, Lookup};

mod nullable;
pub use nullable::Nullable;

mod parse;
pub use parse::{ParseBool, ParseComplex, ParseFloat, ParseInt, ParseTime, ParseUint};

mod sort;
pub use sort::{Order, Sort};

mod split;
pub use split::{Cut, Each, Split};

mod string;
pub use string::{Trim, TrimPrefix, TrimSpace, TrimSuffix};

use crate::shape::{Format, Shape};
use crate::{Error, Result, Type, Value};

use std::sync::Arc;

/// A shareable converter.
pub type Converter = Arc<dyn Convert>;

/// Function applied to each non-null value, or to every value when the
/// conversion handles `Null` itself.
pub type MapFn = Arc<dyn Fn(Value) -> Result<Value> + Send + Sync>;

/// A converter step.
///
/// Implementations are stateless: binding the same converter against the
/// same destination always yields conversions that behave the same way.
pub trait Convert: Send + Sync + 'static {
    fn bind(&self, dest: &Target) -> Result<Conversion>;
}

/// What a converter step writes to.
#[derive(Debug, Clone)]
pub enum Target {
    /// A record field, committed through the shape.
    Field(&'static Shape),

    /// The input of the next step in a chain.
    Value(Type),
}

/// A converter bound to its destination.
#[derive(Clone)]
pub struct Conversion {
    source: Type,
    nullable: bool,
    handles_null: bool,
    apply: Apply,
    commit: Commit,
}

#[derive(Clone)]
pub enum Apply {
    /// The value is committed unchanged.
    Identity,

    Map(MapFn),
}

/// How a converted value reaches a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// Assigned with the usual coercion rules.
    Assign,

    /// Handed to the field's decoder.
    Decode(Format),
}

impl Target {
    pub fn field(shape: &'static Shape) -> Target {
        Target::Field(shape)
    }

    /// The representation the destination takes without conversion.
    pub fn natural_type(&self) -> Option<Type> {
        match self {
            Target::Field(shape) => shape.natural_type(),
            Target::Value(ty) => Some(ty.clone()),
        }
    }

    /// The representation of each item, for list destinations.
    pub fn item_type(&self) -> Option<Type> {
        match self {
            Target::Field(shape) => {
                let (base, _) = shape.strip();
                base.item()?.natural_type()
            }
            Target::Value(Type::List(item)) => Some((**item).clone()),
            Target::Value(_) => None,
        }
    }

    /// Returns `true` if values of type `ty` can be committed here.
    pub fn accepts(&self, ty: &Type) -> bool {
        match self {
            Target::Field(shape) => shape.accepts(ty),
            Target::Value(to) => ty.coercible_to(to),
        }
    }

    /// Returns an error unless values of type `ty` can be committed here.
    pub fn expect(&self, ty: &Type) -> Result<()> {
        if self.accepts(ty) {
            Ok(())
        } else {
            Err(Error::type_incompatible(ty, self))
        }
    }
}

impl core::fmt::Display for Target {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Target::Field(shape) => core::fmt::Display::fmt(shape, f),
            Target::Value(ty) => core::fmt::Display::fmt(ty, f),
        }
    }
}

impl Conversion {
    /// A conversion that reads `source` and commits it unchanged.
    pub fn identity(source: Type) -> Conversion {
        Conversion {
            source,
            nullable: false,
            handles_null: false,
            apply: Apply::Identity,
            commit: Commit::Assign,
        }
    }

    /// A conversion that reads `source` and maps each non-null value with `f`.
    pub fn map<F>(source: Type, f: F) -> Conversion
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        Conversion {
            apply: Apply::Map(Arc::new(f)),
            ..Conversion::identity(source)
        }
    }

    /// A step that reads `source` and produces values of type `output`.
    ///
    /// Fails unless `dest` accepts `output`. When the next step of a chain
    /// expects a different but compatible type, produced values are coerced
    /// into it.
    pub fn produce<F>(dest: &Target, source: Type, output: Type, f: F) -> Result<Conversion>
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        dest.expect(&output)?;

        Ok(match dest {
            Target::Value(ty) if *ty != output => {
                let ty = ty.clone();
                Conversion::map(source, move |value| f(value)?.coerce(&ty))
            }
            _ => Conversion::map(source, f),
        })
    }

    /// The representation requested from the row cursor.
    pub fn source(&self) -> &Type {
        &self.source
    }

    /// Returns `true` if `Null` is an expected input.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Returns `true` if `Null` inputs are passed to the apply function
    /// rather than short-circuiting.
    pub fn handles_null(&self) -> bool {
        self.handles_null
    }

    pub fn apply(&self) -> &Apply {
        &self.apply
    }

    pub fn commit(&self) -> Commit {
        self.commit
    }

    pub fn is_identity(&self) -> bool {
        matches!(self.apply, Apply::Identity)
    }

    pub fn with_nullable(mut self, nullable: bool) -> Conversion {
        self.nullable = nullable;
        self
    }

    pub fn with_commit(mut self, commit: Commit) -> Conversion {
        self.commit = commit;
        self
    }

    pub(crate) fn with_null_handler(mut self, apply: MapFn) -> Conversion {
        self.handles_null = true;
        self.nullable = true;
        self.apply = Apply::Map(apply);
        self
    }

    /// Converts one value.
    ///
    /// `Null` is returned unchanged unless the conversion handles it.
    pub fn run(&self, value: Value) -> Result<Value> {
        run(&self.apply, self.handles_null, value)
    }

    /// Composes two steps: `self` runs first, its output feeds `next`.
    ///
    /// The composed conversion reads `self`'s source and commits the way
    /// `next` does.
    pub fn then(self, next: Conversion) -> Conversion {
        let apply = match (self.apply, next.apply) {
            (Apply::Identity, apply) | (apply, Apply::Identity) => apply,
            (first, second) => {
                let first_handles_null = self.handles_null;
                let second_handles_null = next.handles_null;
                Apply::Map(Arc::new(move |value| {
                    let value = run(&first, first_handles_null, value)?;
                    run(&second, second_handles_null, value)
                }))
            }
        };

        Conversion {
            source: self.source,
            nullable: self.nullable || next.nullable,
            handles_null: self.handles_null || next.handles_null,
            apply,
            commit: next.commit,
        }
    }
}

impl core::fmt::Debug for Conversion {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Conversion")
            .field("source", &self.source)
            .field("nullable", &self.nullable)
            .field("handles_null", &self.handles_null)
            .field("apply", &self.apply)
            .field("commit", &self.commit)
            .finish()
    }
}

impl core::fmt::Debug for Apply {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Apply::Identity => f.write_str("Identity"),
            Apply::Map(_) => f.write_str("Map(..)"),
        }
    }
}

fn run(apply: &Apply, handles_null: bool, value: Value) -> Result<Value> {
    if value.is_null() && !handles_null {
        return Ok(Value::Null);
    }

    match apply {
        Apply::Identity => Ok(value),
        Apply::Map(f) => f(value),
    }
}

/// Returns an error unless the step is the last one writing a field.
pub(crate) fn expect_field(dest: &Target, what: &str) -> Result<&'static Shape> {
    match dest {
        Target::Field(shape) => Ok(*shape),
        Target::Value(ty) => Err(Error::type_incompatible_because(
            what,
            ty,
            "must be the last step of a pipeline",
        )),
    }
}

/// Extracts the string of a value the chain guarantees to be a string.
pub(crate) fn into_string(value: Value) -> Result<String> {
    String::try_from(value)
}

impl<C: Convert + ?Sized> Convert for Arc<C> {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        (**self).bind(dest)
    }
}

impl<C: Convert + ?Sized> Convert for Box<C> {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        (**self).bind(dest)
    }
}
