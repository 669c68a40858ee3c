//! Static type information for records and the values they hold.
//!
//! A [`Shape`] describes how a Rust type is laid out as far as row binding is
//! concerned: whether it is a scalar the converter pipeline can write to, a
//! nullable or boxed pointer level, a list, or a struct with named fields.
//! Every operation that touches a live instance goes through the function
//! pointers stored in the shape, so the binding engine works on `&mut dyn Any`
//! without knowing the concrete type.

mod impls;
mod impls_chrono;
mod impls_complex;
mod impls_json;

use crate::{BoxError, Error, Result, Type, Value};

use std::any::{Any, TypeId};
use std::str::FromStr;

/// A type that rows can be bound to.
///
/// Implemented for the supported scalars, `Option<T>`, `Box<T>`, `Vec<T>`,
/// `[T; N]` and, through `#[derive(Record)]`, for user structs.
pub trait Reflect: Default + Send + 'static {
    const SHAPE: &'static Shape;
}

/// Returns the shape of `T`.
///
/// Shapes refer to each other through this function rather than directly so
/// that recursive records can be described.
pub fn shape_of<T: Reflect>() -> &'static Shape {
    T::SHAPE
}

pub struct Shape {
    /// Name used in error messages. Wrapper shapes only carry the wrapper's
    /// name; `Display` renders the full type.
    pub type_name: &'static str,

    pub id: fn() -> TypeId,

    pub def: Def,

    pub decoders: Decoders,

    /// Allocates a default instance, used to validate fallback values.
    pub zeroed: fn() -> Box<dyn Any + Send>,
}

pub enum Def {
    Scalar(ScalarDef),
    Option(OptionDef),
    Pointer(PointerDef),
    List(ListDef),
    Array(ArrayDef),
    Struct(StructDef),

    /// Only writable through a decoder.
    Opaque,
}

/// The scalar kinds values can be committed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    String,
    Complex32,
    Complex64,
    DateTimeUtc,
    DateTimeFixed,
    NaiveDateTime,
    NaiveDate,
}

pub struct ScalarDef {
    pub scalar: Scalar,
    pub set: fn(&mut dyn Any, Value) -> Result<()>,
}

/// An `Option<T>` level.
pub struct OptionDef {
    pub inner: fn() -> &'static Shape,

    /// Returns the inner value, inserting `T::default()` first if unset.
    pub vivify: fn(&mut dyn Any) -> Option<&mut dyn Any>,

    pub clear: fn(&mut dyn Any),
}

/// A non-null pointer level such as `Box<T>`.
pub struct PointerDef {
    pub inner: fn() -> &'static Shape,
    pub deref: fn(&mut dyn Any) -> Option<&mut dyn Any>,
}

pub struct ListDef {
    pub item: fn() -> &'static Shape,

    /// Replaces the contents with `len` default items.
    pub reset: fn(&mut dyn Any, usize) -> bool,

    pub index: fn(&mut dyn Any, usize) -> Option<&mut dyn Any>,
}

pub struct ArrayDef {
    pub item: fn() -> &'static Shape,
    pub len: usize,
    pub index: fn(&mut dyn Any, usize) -> Option<&mut dyn Any>,
}

pub struct StructDef {
    pub fields: &'static [FieldDef],
}

pub struct FieldDef {
    /// Path segment addressing the field.
    pub name: &'static str,

    /// `false` for fields that are not `pub`.
    pub exported: bool,

    pub shape: fn() -> &'static Shape,

    pub access: fn(&mut dyn Any) -> Option<&mut dyn Any>,
}

pub type TextDecodeFn = fn(&mut dyn Any, &str) -> core::result::Result<(), BoxError>;
pub type BytesDecodeFn = fn(&mut dyn Any, &[u8]) -> core::result::Result<(), BoxError>;

/// Decoding capabilities of a type.
#[derive(Clone, Copy)]
pub struct Decoders {
    pub text: Option<TextDecodeFn>,
    pub binary: Option<BytesDecodeFn>,
    pub json: Option<BytesDecodeFn>,
}

/// A decode function, by the input it reads.
#[derive(Clone, Copy)]
pub enum DecodeFn {
    Text(TextDecodeFn),
    Bytes(BytesDecodeFn),
}

/// A decoding capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Binary,
    Json,
}

impl Shape {
    /// Returns `true` if this shape describes `T`.
    pub fn is<T: Any>(&self) -> bool {
        (self.id)() == TypeId::of::<T>()
    }

    /// Strips `Option` and `Box` levels, returning the base shape and the
    /// number of levels removed.
    pub fn strip(&'static self) -> (&'static Shape, usize) {
        let mut shape = self;
        let mut levels = 0;
        loop {
            shape = match &shape.def {
                Def::Option(def) => (def.inner)(),
                Def::Pointer(def) => (def.inner)(),
                _ => return (shape, levels),
            };
            levels += 1;
        }
    }

    pub fn is_option(&self) -> bool {
        matches!(self.def, Def::Option(_))
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self.def, Def::Option(_) | Def::Pointer(_))
    }

    /// Returns the struct fields, or `None` for non-struct shapes.
    pub fn fields(&self) -> Option<&'static [FieldDef]> {
        match &self.def {
            Def::Struct(def) => Some(def.fields),
            _ => None,
        }
    }

    /// Returns the item shape of a list or array.
    pub fn item(&self) -> Option<&'static Shape> {
        match &self.def {
            Def::List(def) => Some((def.item)()),
            Def::Array(def) => Some((def.item)()),
            _ => None,
        }
    }

    /// Returns the representation a row cursor should produce for this shape
    /// when no converter asks for another one.
    pub fn natural_type(&'static self) -> Option<Type> {
        let (base, _) = self.strip();
        match &base.def {
            Def::Scalar(def) => Some(def.scalar.value_type()),
            Def::List(def) => {
                let item = (def.item)();
                if item.is::<u8>() {
                    Some(Type::Bytes)
                } else {
                    item.natural_type().map(Type::list)
                }
            }
            Def::Array(def) => (def.item)().natural_type().map(Type::list),
            _ => None,
        }
    }

    /// Returns `true` if a value of type `ty` can be committed to this shape.
    pub fn accepts(&'static self, ty: &Type) -> bool {
        let (base, _) = self.strip();
        match (&base.def, ty) {
            (Def::Scalar(def), ty) => ty.coercible_to(&def.scalar.value_type()),
            (_, Type::Bytes) => base.item().is_some_and(|item| item.is::<u8>()),
            (_, Type::List(ty)) => base.item().is_some_and(|item| item.accepts(ty)),
            _ => false,
        }
    }

    /// Returns the decoder for `format`, looking through pointer levels.
    pub fn decoder(&'static self, format: Format) -> Option<&'static Shape> {
        let mut shape = self;
        loop {
            if shape.decoders.has(format) {
                return Some(shape);
            }
            shape = match &shape.def {
                Def::Option(def) => (def.inner)(),
                Def::Pointer(def) => (def.inner)(),
                _ => return None,
            };
        }
    }
}

impl core::fmt::Display for Shape {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.def {
            Def::Option(def) => write!(f, "Option<{}>", (def.inner)()),
            Def::Pointer(def) => write!(f, "{}<{}>", self.type_name, (def.inner)()),
            Def::List(def) => write!(f, "Vec<{}>", (def.item)()),
            Def::Array(def) => write!(f, "[{}; {}]", (def.item)(), def.len),
            _ => f.write_str(self.type_name),
        }
    }
}

impl core::fmt::Debug for Shape {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Shape({})", self)
    }
}

impl Scalar {
    /// The value representation committed to this scalar without conversion.
    pub fn value_type(self) -> Type {
        match self {
            Scalar::Bool => Type::Bool,
            Scalar::I8 | Scalar::I16 | Scalar::I32 | Scalar::I64 | Scalar::Isize => Type::I64,
            Scalar::U8 | Scalar::U16 | Scalar::U32 | Scalar::U64 | Scalar::Usize => Type::U64,
            Scalar::F32 | Scalar::F64 => Type::F64,
            Scalar::String => Type::String,
            Scalar::Complex32 | Scalar::Complex64 => Type::Complex,
            Scalar::DateTimeUtc
            | Scalar::DateTimeFixed
            | Scalar::NaiveDateTime
            | Scalar::NaiveDate => Type::Timestamp,
        }
    }
}

impl Decoders {
    pub const NONE: Decoders = Decoders {
        text: None,
        binary: None,
        json: None,
    };

    pub fn get(&self, format: Format) -> Option<DecodeFn> {
        match format {
            Format::Text => self.text.map(DecodeFn::Text),
            Format::Binary => self.binary.map(DecodeFn::Bytes),
            Format::Json => self.json.map(DecodeFn::Bytes),
        }
    }

    pub fn has(&self, format: Format) -> bool {
        self.get(format).is_some()
    }
}

impl Format {
    pub fn name(self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Binary => "binary",
            Format::Json => "json",
        }
    }

    /// The representation a decoder of this format reads.
    pub fn source_type(self) -> Type {
        match self {
            Format::Text => Type::String,
            Format::Binary | Format::Json => Type::Bytes,
        }
    }
}

impl core::fmt::Display for Format {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

fn mismatch(expected: &'static str) -> Error {
    Error::type_incompatible("destination", expected)
}

/// Writes `value` into a scalar of type `T`.
pub fn set_scalar<T>(dest: &mut dyn Any, value: Value) -> Result<()>
where
    T: TryFrom<Value, Error = Error> + 'static,
{
    let dest = dest
        .downcast_mut::<T>()
        .ok_or_else(|| mismatch(std::any::type_name::<T>()))?;
    *dest = T::try_from(value)?;
    Ok(())
}

pub fn zeroed<T: Reflect>() -> Box<dyn Any + Send> {
    Box::new(T::default())
}

/// Shape listed for fields that are not `pub`.
pub fn unexported() -> &'static Shape {
    <() as Reflect>::SHAPE
}

/// Access function for fields that cannot be written.
pub fn no_access(_: &mut dyn Any) -> Option<&mut dyn Any> {
    None
}

/// Decodes `T` through its `FromStr` implementation.
pub fn decode_text<T>(dest: &mut dyn Any, input: &str) -> core::result::Result<(), BoxError>
where
    T: FromStr + 'static,
    T::Err: Into<BoxError>,
{
    let dest = dest
        .downcast_mut::<T>()
        .ok_or("decode destination has the wrong type")?;
    *dest = input.parse().map_err(Into::into)?;
    Ok(())
}

/// Decodes `T` through its `TryFrom<&[u8]>` implementation.
pub fn decode_binary<T>(dest: &mut dyn Any, input: &[u8]) -> core::result::Result<(), BoxError>
where
    T: for<'a> TryFrom<&'a [u8]> + 'static,
    for<'a> <T as TryFrom<&'a [u8]>>::Error: Into<BoxError>,
{
    let dest = dest
        .downcast_mut::<T>()
        .ok_or("decode destination has the wrong type")?;
    *dest = T::try_from(input).map_err(Into::into)?;
    Ok(())
}

/// Decodes `T` from JSON.
pub fn decode_json<T>(dest: &mut dyn Any, input: &[u8]) -> core::result::Result<(), BoxError>
where
    T: serde::de::DeserializeOwned + 'static,
{
    let dest = dest
        .downcast_mut::<T>()
        .ok_or("decode destination has the wrong type")?;
    *dest = serde_json::from_slice(input)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_counts_levels() {
        let shape = shape_of::<Option<Box<Option<i32>>>>();
        let (base, levels) = shape.strip();
        assert!(base.is::<i32>());
        assert_eq!(levels, 3);
    }

    #[test]
    fn display_renders_wrappers() {
        assert_eq!(
            shape_of::<Option<Vec<[u8; 4]>>>().to_string(),
            "Option<Vec<[u8; 4]>>"
        );
        assert_eq!(shape_of::<Box<String>>().to_string(), "Box<String>");
    }

    #[test]
    fn natural_types() {
        assert_eq!(shape_of::<i16>().natural_type(), Some(Type::I64));
        assert_eq!(shape_of::<Option<u8>>().natural_type(), Some(Type::U64));
        assert_eq!(shape_of::<Vec<u8>>().natural_type(), Some(Type::Bytes));
        assert_eq!(
            shape_of::<Vec<i32>>().natural_type(),
            Some(Type::list(Type::I64))
        );
        assert_eq!(shape_of::<serde_json::Value>().natural_type(), None);
    }

    #[test]
    fn accepts_follows_coercion_rules() {
        assert!(shape_of::<i8>().accepts(&Type::U64));
        assert!(shape_of::<String>().accepts(&Type::Bytes));
        assert!(!shape_of::<String>().accepts(&Type::I64));
        assert!(shape_of::<Vec<i32>>().accepts(&Type::list(Type::I64)));
        assert!(!shape_of::<Vec<i32>>().accepts(&Type::list(Type::String)));
        assert!(shape_of::<[String; 2]>().accepts(&Type::list(Type::String)));
    }

    #[test]
    fn only_byte_lists_accept_bytes() {
        assert!(shape_of::<Vec<u8>>().accepts(&Type::Bytes));
        assert!(shape_of::<Option<[u8; 4]>>().accepts(&Type::Bytes));
        assert!(!shape_of::<Vec<i32>>().accepts(&Type::Bytes));
        assert!(!shape_of::<Vec<u8>>().accepts(&Type::String));
        assert!(!shape_of::<Vec<i32>>().accepts(&Type::String));
    }

    #[test]
    fn decoder_is_found_through_pointers() {
        let shape = shape_of::<Option<Box<serde_json::Value>>>();
        let found = shape.decoder(Format::Json).unwrap();
        assert!(found.is::<serde_json::Value>());
        assert!(shape.decoder(Format::Binary).is_none());
    }

    #[test]
    fn set_scalar_checks_range() {
        let mut dest = 0u8;
        set_scalar::<u8>(&mut dest, Value::I64(200)).unwrap();
        assert_eq!(dest, 200);
        assert!(set_scalar::<u8>(&mut dest, Value::I64(300)).is_err());
        assert_eq!(dest, 200);
    }
}
