//! Hand-written records for unit tests, shaped the way `#[derive(Record)]`
//! describes structs.

use crate::shape::*;

use std::any::{Any, TypeId};

#[derive(Debug, Default, PartialEq)]
pub(crate) struct Address {
    pub zip: String,
    pub(crate) secret: i32,
}

#[derive(Debug, Default, PartialEq)]
pub(crate) struct User {
    pub id: i64,
    pub name: Option<String>,
    pub address: Option<Box<Address>>,
    pub tags: Vec<String>,
    pub pair: [i32; 2],
    pub next: Option<Box<User>>,
}

impl Reflect for Address {
    const SHAPE: &'static Shape = &Shape {
        type_name: "Address",
        id: TypeId::of::<Address>,
        def: Def::Struct(StructDef {
            fields: &[
                FieldDef {
                    name: "zip",
                    exported: true,
                    shape: shape_of::<String>,
                    access: {
                        fn access(v: &mut dyn Any) -> Option<&mut dyn Any> {
                            Some(&mut v.downcast_mut::<Address>()?.zip)
                        }
                        access
                    },
                },
                FieldDef {
                    name: "secret",
                    exported: false,
                    shape: unexported,
                    access: no_access,
                },
            ],
        }),
        decoders: Decoders::NONE,
        zeroed: zeroed::<Address>,
    };
}

macro_rules! user_field {
    ($name:ident: $ty:ty) => {
        FieldDef {
            name: stringify!($name),
            exported: true,
            shape: shape_of::<$ty>,
            access: {
                fn access(v: &mut dyn Any) -> Option<&mut dyn Any> {
                    Some(&mut v.downcast_mut::<User>()?.$name)
                }
                access
            },
        }
    };
}

impl Reflect for User {
    const SHAPE: &'static Shape = &Shape {
        type_name: "User",
        id: TypeId::of::<User>,
        def: Def::Struct(StructDef {
            fields: &[
                user_field!(id: i64),
                user_field!(name: Option<String>),
                user_field!(address: Option<Box<Address>>),
                user_field!(tags: Vec<String>),
                user_field!(pair: [i32; 2]),
                user_field!(next: Option<Box<User>>),
            ],
        }),
        decoders: Decoders::NONE,
        zeroed: zeroed::<User>,
    };
}
