/// A value representation a row cursor can produce or a converter step consumes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    I64,
    U64,
    F64,
    Complex,
    String,
    Bytes,
    Timestamp,

    /// A list of items of the inner type
    List(Box<Type>),
}

impl Type {
    pub fn list(item: impl Into<Box<Type>>) -> Type {
        Type::List(item.into())
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::I64 | Type::U64 | Type::F64)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Type::List(_))
    }

    /// Returns the item type if this is a list.
    pub fn item(&self) -> Option<&Type> {
        match self {
            Type::List(item) => Some(item),
            _ => None,
        }
    }

    /// Returns `true` if values of this type may be coerced into `to`.
    ///
    /// This is the static counterpart of [`Value::coerce`](super::Value::coerce):
    /// when it returns `true` coercion can still fail for individual values
    /// that overflow or lose precision, but never because the representations
    /// do not line up.
    pub fn coercible_to(&self, to: &Type) -> bool {
        match (self, to) {
            (a, b) if a == b => true,
            (a, b) if a.is_numeric() && b.is_numeric() => true,
            (Type::String, Type::Bytes) | (Type::Bytes, Type::String) => true,
            (Type::Bytes, Type::List(item)) => Type::U64.coercible_to(item),
            (Type::List(a), Type::List(b)) => a.coercible_to(b),
            _ => false,
        }
    }
}

impl core::fmt::Display for Type {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Type::Bool => f.write_str("bool"),
            Type::I64 => f.write_str("i64"),
            Type::U64 => f.write_str("u64"),
            Type::F64 => f.write_str("f64"),
            Type::Complex => f.write_str("complex"),
            Type::String => f.write_str("string"),
            Type::Bytes => f.write_str("bytes"),
            Type::Timestamp => f.write_str("timestamp"),
            Type::List(item) => write!(f, "list<{}>", item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_family_is_coercible() {
        for from in [Type::I64, Type::U64, Type::F64] {
            for to in [Type::I64, Type::U64, Type::F64] {
                assert!(from.coercible_to(&to), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn families_do_not_mix() {
        assert!(!Type::String.coercible_to(&Type::I64));
        assert!(!Type::Bool.coercible_to(&Type::I64));
        assert!(!Type::Timestamp.coercible_to(&Type::String));
        assert!(!Type::I64.coercible_to(&Type::Complex));
    }

    #[test]
    fn lists_coerce_by_item() {
        assert!(Type::list(Type::I64).coercible_to(&Type::list(Type::U64)));
        assert!(!Type::list(Type::String).coercible_to(&Type::list(Type::I64)));
        assert!(Type::Bytes.coercible_to(&Type::list(Type::I64)));
    }

    #[test]
    fn display() {
        assert_eq!(Type::list(Type::I64).to_string(), "list<i64>");
    }
}
