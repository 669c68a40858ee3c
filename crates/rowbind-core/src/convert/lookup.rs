use super::{Conversion, Convert, Target};
use crate::{bail, Error, Result, Type, Value};

use std::sync::Arc;

/// Which side of a lookup table the input is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Match keys, produce values.
    Forward,

    /// Match values, produce keys.
    Reverse,
}

/// Translates values through a fixed table of pairs, such as enum names and
/// their numeric codes.
///
/// Keys are unique. Values may repeat, in which case the reverse direction
/// yields the first key listed for a value.
#[derive(Debug, Clone)]
pub struct Lookup {
    table: Arc<Table>,
    direction: Direction,
}

#[derive(Debug)]
struct Table {
    pairs: Vec<(Value, Value)>,
    key_type: Type,
    value_type: Type,
}

impl Lookup {
    /// Builds a forward lookup from `(key, value)` pairs.
    ///
    /// Fails if the table is empty, if keys or values are of mixed types or
    /// null, or if a key appears twice.
    pub fn new<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Result<Lookup>
    where
        K: Into<Value>,
        V: Into<Value>,
    {
        let pairs: Vec<(Value, Value)> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let Some((first_key, first_value)) = pairs.first() else {
            bail!("lookup table is empty");
        };
        let key_type = column_type(first_key)?;
        let value_type = column_type(first_value)?;

        for (i, (key, value)) in pairs.iter().enumerate() {
            if column_type(key)? != key_type || column_type(value)? != value_type {
                bail!(
                    "lookup table entry ({}, {}) does not match ({}, {})",
                    key,
                    value,
                    key_type,
                    value_type
                );
            }
            if pairs[..i].iter().any(|(k, _)| k == key) {
                bail!("lookup table has duplicate key {}", key);
            }
        }

        Ok(Lookup {
            table: Arc::new(Table {
                pairs,
                key_type,
                value_type,
            }),
            direction: Direction::Forward,
        })
    }

    /// The same table, matched in the opposite direction.
    pub fn reverse(&self) -> Lookup {
        Lookup {
            table: self.table.clone(),
            direction: match self.direction {
                Direction::Forward => Direction::Reverse,
                Direction::Reverse => Direction::Forward,
            },
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The input and output types in the current direction.
    pub fn types(&self) -> (&Type, &Type) {
        match self.direction {
            Direction::Forward => (&self.table.key_type, &self.table.value_type),
            Direction::Reverse => (&self.table.value_type, &self.table.key_type),
        }
    }

    /// Translates one value.
    pub fn get(&self, input: &Value) -> Result<Value> {
        let found = self.table.pairs.iter().find_map(|(k, v)| match self.direction {
            Direction::Forward if k == input => Some(v),
            Direction::Reverse if v == input => Some(k),
            _ => None,
        });

        match found {
            Some(output) => Ok(output.clone()),
            None => Err(Error::enum_lookup(input.clone(), self.inputs())),
        }
    }

    fn inputs(&self) -> Vec<Value> {
        self.table
            .pairs
            .iter()
            .map(|(k, v)| match self.direction {
                Direction::Forward => k.clone(),
                Direction::Reverse => v.clone(),
            })
            .collect()
    }
}

fn column_type(value: &Value) -> Result<Type> {
    match value.ty() {
        Some(ty) => Ok(ty),
        None => bail!("lookup table entries cannot be null"),
    }
}

impl Convert for Lookup {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        let (input, output) = self.types();
        let lookup = self.clone();
        Conversion::produce(dest, input.clone(), output.clone(), move |value| {
            lookup.get(&value)
        })
    }
}
