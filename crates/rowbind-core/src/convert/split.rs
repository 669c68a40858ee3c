use super::{into_string, Commit, Conversion, Convert, Converter, Target};
use crate::{bail, Error, Result, Type, Value};

/// Splits a string into all parts around a separator.
///
/// The empty string yields an empty list, not a list with one empty part.
#[derive(Debug, Clone)]
pub struct Split {
    sep: String,
}

/// Splits a string into the parts before and after the first occurrence of
/// a separator. Without a separator the whole string comes first and the
/// second part is empty.
#[derive(Debug, Clone)]
pub struct Cut {
    sep: String,
}

/// Applies a converter to every item of a list.
#[derive(Clone)]
pub struct Each {
    item: Converter,
}

impl Split {
    pub fn new(sep: impl Into<String>) -> Split {
        Split { sep: sep.into() }
    }
}

impl Cut {
    pub fn new(sep: impl Into<String>) -> Cut {
        Cut { sep: sep.into() }
    }
}

impl Each {
    pub fn new(item: Converter) -> Each {
        Each { item }
    }
}

fn list_of_strings() -> Type {
    Type::list(Type::String)
}

fn into_list(parts: impl Iterator<Item = impl Into<String>>) -> Value {
    Value::List(parts.map(|part| Value::String(part.into())).collect())
}

impl Convert for Split {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        if self.sep.is_empty() {
            bail!("Split: empty separator");
        }
        let sep = self.sep.clone();
        Conversion::produce(dest, Type::String, list_of_strings(), move |value| {
            let input = into_string(value)?;
            if input.is_empty() {
                return Ok(Value::List(vec![]));
            }
            Ok(into_list(input.split(&sep[..])))
        })
    }
}

impl Convert for Cut {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        if self.sep.is_empty() {
            bail!("Cut: empty separator");
        }
        let sep = self.sep.clone();
        Conversion::produce(dest, Type::String, list_of_strings(), move |value| {
            let input = into_string(value)?;
            let (before, after) = input.split_once(&sep[..]).unwrap_or((input.as_str(), ""));
            Ok(into_list([before, after].into_iter()))
        })
    }
}

impl Convert for Each {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        let Some(item_type) = dest.item_type() else {
            return Err(Error::type_incompatible_because(
                "list",
                dest,
                "destination is not a list",
            ));
        };

        let item = self.item.bind(&Target::Value(item_type.clone()))?;
        if item.commit() != Commit::Assign {
            bail!("decoders cannot be applied to list items");
        }

        let source = Type::list(item.source().clone());
        Conversion::produce(dest, source, Type::list(item_type), move |value| match value {
            Value::List(items) => items
                .into_iter()
                .map(|value| item.run(value))
                .collect::<Result<Vec<_>>>()
                .map(Value::List),
            value => Err(Error::type_incompatible(value.describe(), "list")),
        })
    }
}
