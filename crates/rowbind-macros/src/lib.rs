extern crate proc_macro;

use proc_macro::TokenStream;

/// Implements `rowbind::Reflect` for a struct or enum.
///
/// Named fields become addressable by path; fields that are not `pub` are
/// known but cannot be bound. Field options:
///
/// - `#[record(rename = "name")]` sets the path segment.
/// - `#[record(skip)]` hides the field.
///
/// Type options `#[record(text)]`, `#[record(binary)]` and `#[record(json)]`
/// enable decoding through `FromStr`, `TryFrom<&[u8]>` and `serde`. Types
/// without named fields must enable at least one.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match rowbind_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
