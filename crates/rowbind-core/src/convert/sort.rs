use super::{Conversion, Convert, Target};
use crate::{Error, Result, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

/// Sorts a list. The sort is stable; items that cannot be compared keep
/// their relative order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sort {
    order: Order,
}

impl Sort {
    pub fn new(order: Order) -> Sort {
        Sort { order }
    }
}

impl Convert for Sort {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        let ty = match dest.natural_type() {
            Some(ty) if ty.is_list() => ty,
            _ => {
                return Err(Error::type_incompatible_because(
                    "list",
                    dest,
                    "destination is not a list",
                ))
            }
        };

        let order = self.order;
        Conversion::produce(dest, ty.clone(), ty, move |value| match value {
            Value::List(mut items) => {
                match order {
                    Order::Asc => items.sort_by(Value::sort_cmp),
                    Order::Desc => items.sort_by(|a, b| b.sort_cmp(a)),
                }
                Ok(Value::List(items))
            }
            value => Err(Error::type_incompatible(value.describe(), "list")),
        })
    }
}
