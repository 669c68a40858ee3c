use super::*;

use num_complex::{Complex32, Complex64};

macro_rules! impl_complex {
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

impl_complex!(Complex32, "Complex<f32>", Complex32);
impl_complex!(Complex64, "Complex<f64>", Complex64);
