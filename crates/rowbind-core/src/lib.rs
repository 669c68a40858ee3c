mod access;

mod assign;
pub use assign::{assign, decode};

pub mod convert;

pub mod descriptor;
pub use descriptor::{Descriptor, Resolver};

mod error;
pub use error::{BoxError, Error, IntoError};

pub mod rows;
pub use rows::{Row, Rows, Slot};

pub mod shape;
pub use shape::{Reflect, Shape};

pub mod value;
pub use value::{Type, Value};

#[cfg(test)]
mod fixtures;

pub type Result<T, E = Error> = core::result::Result<T, E>;
