use super::Expand;
use crate::schema::RecordKind;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_reflect(&self) -> TokenStream {
        let rowbind = &self.rowbind;
        let ident = &self.record.ident;
        let type_name = ident.to_string();
        let def = self.expand_def();
        let decoders = self.expand_decoders();

        quote! {
            impl #rowbind::Reflect for #ident {
                const SHAPE: &'static #rowbind::Shape = &#rowbind::Shape {
                    type_name: #type_name,
                    id: ::std::any::TypeId::of::<#ident>,
                    def: #def,
                    decoders: #decoders,
                    zeroed: #rowbind::zeroed::<#ident>,
                };
            }
        }
    }

    fn expand_def(&self) -> TokenStream {
        let rowbind = &self.rowbind;

        match &self.record.kind {
            RecordKind::Struct(fields) => {
                let fields = fields
                    .iter()
                    .filter(|field| !field.skip)
                    .map(|field| self.expand_field_def(field));

                quote! {
                    #rowbind::Def::Struct(#rowbind::StructDef {
                        fields: &[ #( #fields, )* ],
                    })
                }
            }
            RecordKind::Opaque => quote!(#rowbind::Def::Opaque),
        }
    }

    fn expand_decoders(&self) -> TokenStream {
        let rowbind = &self.rowbind;
        let ident = &self.record.ident;
        let attrs = &self.record.attrs;

        let decoder = |enabled: bool, decode: TokenStream| {
            if enabled {
                quote!(::std::option::Option::Some(#rowbind::#decode::<#ident>))
            } else {
                quote!(::std::option::Option::None)
            }
        };

        let text = decoder(attrs.text, quote!(decode_text));
        let binary = decoder(attrs.binary, quote!(decode_binary));
        let json = decoder(attrs.json, quote!(decode_json));

        quote! {
            #rowbind::Decoders {
                text: #text,
                binary: #binary,
                json: #json,
            }
        }
    }
}
