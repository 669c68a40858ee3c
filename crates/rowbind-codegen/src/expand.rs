mod access;
mod shape;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for rowbind types
    rowbind: TokenStream,
}

pub(super) fn record(record: &Record) -> TokenStream {
    let expand = Expand {
        record,
        rowbind: quote!(_rowbind::codegen_support),
    };

    wrap_in_const(expand.expand_reflect())
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowbind as _rowbind;
            #code
        };
    }
}
