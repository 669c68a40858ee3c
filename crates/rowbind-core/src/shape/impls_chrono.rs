use super::*;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

macro_rules! impl_time {
    ($ty:ty, $name:literal, $scalar:ident) => {
        impl Reflect for $ty {
            const SHAPE: &'static Shape = &Shape {
                type_name: $name,
                id: TypeId::of::<$ty>,
                def: Def::Scalar(ScalarDef {
                    scalar: Scalar::$scalar,
                    set: set_scalar::<$ty>,
                }),
                decoders: Decoders {
                    text: Some(decode_text::<$ty>),
                    binary: None,
                    json: None,
                },
                zeroed: zeroed::<$ty>,
            };
        }
    };
}

impl_time!(DateTime<Utc>, "DateTime<Utc>", DateTimeUtc);
impl_time!(DateTime<FixedOffset>, "DateTime<FixedOffset>", DateTimeFixed);
impl_time!(NaiveDateTime, "NaiveDateTime", NaiveDateTime);
impl_time!(NaiveDate, "NaiveDate", NaiveDate);
