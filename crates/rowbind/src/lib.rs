pub mod runner;
pub use runner::Runner;

pub mod scan;
pub use scan::{Enum, Pipeline};

mod scanner;
pub use scanner::Scanner;

pub mod schema;
pub use schema::{PoolConfig, Schema};

pub use rowbind_core::{
    bail, convert, descriptor, err, rows, shape, value, BoxError, Error, IntoError, Reflect,
    Result, Row, Rows, Shape, Slot, Type, Value,
};

pub use rowbind_macros::Record;

#[doc(hidden)]
pub mod codegen_support {
    pub use rowbind_core::shape::{
        decode_binary, decode_json, decode_text, no_access, shape_of, unexported, zeroed,
        Decoders, Def, FieldDef, Reflect, Shape, StructDef,
    };
}
