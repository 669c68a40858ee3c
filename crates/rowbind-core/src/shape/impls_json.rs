use super::*;

impl Reflect for serde_json::Value {
    const SHAPE: &'static Shape = &Shape {
        type_name: "serde_json::Value",
        id: TypeId::of::<serde_json::Value>,
        def: Def::Opaque,
        decoders: Decoders {
            text: None,
            binary: None,
            json: Some(decode_json::<serde_json::Value>),
        },
        zeroed: zeroed::<serde_json::Value>,
    };
}
