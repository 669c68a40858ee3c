use super::*;

macro_rules! impl_scalar {
    (
        $(
            $ty:ident => $scalar:ident
        )*
    ) => {
        $(
            impl Reflect for $ty {
                const SHAPE: &'static Shape = &Shape {
                    type_name: stringify!($ty),
                    id: TypeId::of::<$ty>,
                    def: Def::Scalar(ScalarDef {
                        scalar: Scalar::$scalar,
                        set: set_scalar::<$ty>,
                    }),
                    decoders: Decoders {
                        text: Some(decode_text::<$ty>),
                        binary: None,
                        json: Some(decode_json::<$ty>),
                    },
                    zeroed: zeroed::<$ty>,
                };
            }
        )*
    };
}

impl_scalar! {
    bool => Bool
    i8 => I8
    i16 => I16
    i32 => I32
    i64 => I64
    isize => Isize
    u8 => U8
    u16 => U16
    u32 => U32
    u64 => U64
    usize => Usize
    f32 => F32
    f64 => F64
    String => String
}

impl Reflect for () {
    const SHAPE: &'static Shape = &Shape {
        type_name: "()",
        id: TypeId::of::<()>,
        def: Def::Opaque,
        decoders: Decoders::NONE,
        zeroed: zeroed::<()>,
    };
}

impl<T: Reflect> Reflect for Option<T> {
    const SHAPE: &'static Shape = &Shape {
        type_name: "Option",
        id: TypeId::of::<Option<T>>,
        def: Def::Option(OptionDef {
            inner: shape_of::<T>,
            vivify: option_vivify::<T>,
            clear: option_clear::<T>,
        }),
        decoders: Decoders::NONE,
        zeroed: zeroed::<Option<T>>,
    };
}

fn option_vivify<T: Reflect>(dest: &mut dyn Any) -> Option<&mut dyn Any> {
    let dest = dest.downcast_mut::<Option<T>>()?;
    Some(dest.get_or_insert_with(T::default))
}

fn option_clear<T: Reflect>(dest: &mut dyn Any) {
    if let Some(dest) = dest.downcast_mut::<Option<T>>() {
        *dest = None;
    }
}

impl<T: Reflect> Reflect for Box<T> {
    const SHAPE: &'static Shape = &Shape {
        type_name: "Box",
        id: TypeId::of::<Box<T>>,
        def: Def::Pointer(PointerDef {
            inner: shape_of::<T>,
            deref: box_deref::<T>,
        }),
        decoders: Decoders::NONE,
        zeroed: zeroed::<Box<T>>,
    };
}

fn box_deref<T: Reflect>(dest: &mut dyn Any) -> Option<&mut dyn Any> {
    let dest = dest.downcast_mut::<Box<T>>()?;
    Some(&mut **dest)
}

impl<T: Reflect> Reflect for Vec<T> {
    const SHAPE: &'static Shape = &Shape {
        type_name: "Vec",
        id: TypeId::of::<Vec<T>>,
        def: Def::List(ListDef {
            item: shape_of::<T>,
            reset: vec_reset::<T>,
            index: vec_index::<T>,
        }),
        decoders: Decoders::NONE,
        zeroed: zeroed::<Vec<T>>,
    };
}

fn vec_reset<T: Reflect>(dest: &mut dyn Any, len: usize) -> bool {
    match dest.downcast_mut::<Vec<T>>() {
        Some(dest) => {
            dest.clear();
            dest.resize_with(len, T::default);
            true
        }
        None => false,
    }
}

fn vec_index<T: Reflect>(dest: &mut dyn Any, index: usize) -> Option<&mut dyn Any> {
    let item = dest.downcast_mut::<Vec<T>>()?.get_mut(index)?;
    Some(item)
}

impl<T: Reflect, const N: usize> Reflect for [T; N]
where
    [T; N]: Default,
{
    const SHAPE: &'static Shape = &Shape {
        type_name: "array",
        id: TypeId::of::<[T; N]>,
        def: Def::Array(ArrayDef {
            item: shape_of::<T>,
            len: N,
            index: array_index::<T, N>,
        }),
        decoders: Decoders::NONE,
        zeroed: zeroed::<[T; N]>,
    };
}

fn array_index<T: Reflect, const N: usize>(
    dest: &mut dyn Any,
    index: usize,
) -> Option<&mut dyn Any> {
    let item = dest.downcast_mut::<[T; N]>()?.get_mut(index)?;
    Some(item)
}
