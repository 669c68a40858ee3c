//! The row cursor interface the binding engine reads from.
//!
//! Database drivers, or adapters around them, implement [`Rows`] for result
//! sets and [`Row`] for single-row results. Both fill a list of [`Slot`]s, one
//! per column, with the representation each slot asks for.

use crate::{Result, Type, Value};

/// Receives one column of the current row.
#[derive(Debug, Clone)]
pub struct Slot {
    ty: Type,
    nullable: bool,
    value: Value,
}

impl Slot {
    pub fn new(ty: Type, nullable: bool) -> Slot {
        Slot {
            ty,
            nullable,
            value: Value::Null,
        }
    }

    /// The representation the column should be delivered as.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns `true` if `Null` is an expected value for this column.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Stores a column value, converting it to the slot's type.
    ///
    /// `Null` is stored as-is regardless of nullability; the binding decides
    /// what a missing value means.
    pub fn set(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        self.value = if value.is_null() {
            Value::Null
        } else {
            value.coerce(&self.ty)?
        };
        Ok(())
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Takes the stored value, leaving `Null` behind.
    pub fn take(&mut self) -> Value {
        std::mem::take(&mut self.value)
    }
}

/// A forward-only cursor over a result set.
pub trait Rows {
    /// Advances to the next row, returning `false` when there are no more rows
    /// or the cursor failed. [`Rows::err`] tells the two apart.
    fn next(&mut self) -> bool;

    /// Reads the current row into `slots`, one slot per column.
    fn scan(&mut self, slots: &mut [Slot]) -> Result<()>;

    /// Returns the error that stopped iteration, if any.
    fn err(&mut self) -> Result<()>;

    /// Releases the cursor. Called exactly once by the binding engine.
    fn close(&mut self) -> Result<()>;
}

/// A single-row result.
pub trait Row {
    /// Reads the row into `slots`. Reports [`Error::no_rows`] if the query
    /// returned nothing.
    ///
    /// [`Error::no_rows`]: crate::Error::no_rows
    fn scan(self, slots: &mut [Slot]) -> Result<()>;
}

impl<R: Rows + ?Sized> Rows for &mut R {
    fn next(&mut self) -> bool {
        (**self).next()
    }

    fn scan(&mut self, slots: &mut [Slot]) -> Result<()> {
        (**self).scan(slots)
    }

    fn err(&mut self) -> Result<()> {
        (**self).err()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

impl<R: Rows + ?Sized> Rows for Box<R> {
    fn next(&mut self) -> bool {
        (**self).next()
    }

    fn scan(&mut self, slots: &mut [Slot]) -> Result<()> {
        (**self).scan(slots)
    }

    fn err(&mut self) -> Result<()> {
        (**self).err()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}
