use super::Value;

use std::cmp::Ordering;

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Null, Value::Null) => Some(Ordering::Equal),
            (Value::Bool(a), Value::Bool(b)) => a.partial_cmp(b),
            (Value::I64(a), Value::I64(b)) => a.partial_cmp(b),
            (Value::U64(a), Value::U64(b)) => a.partial_cmp(b),
            (Value::F64(a), Value::F64(b)) => a.partial_cmp(b),
            (Value::I64(a), Value::U64(b)) => i128::from(*a).partial_cmp(&i128::from(*b)),
            (Value::U64(a), Value::I64(b)) => i128::from(*a).partial_cmp(&i128::from(*b)),
            (Value::String(a), Value::String(b)) => a.partial_cmp(b),
            (Value::Bytes(a), Value::Bytes(b)) => a.partial_cmp(b),
            (Value::Timestamp(a), Value::Timestamp(b)) => a.partial_cmp(b),
            (Value::List(a), Value::List(b)) => a.partial_cmp(b),
            // Complex numbers have no ordering, and values of different
            // types are not comparable.
            _ => None,
        }
    }
}

impl Value {
    /// Total order used for sorting lists.
    ///
    /// Incomparable pairs (NaN, complex numbers, mixed types) compare equal
    /// so a stable sort leaves them in place.
    pub fn sort_cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}
