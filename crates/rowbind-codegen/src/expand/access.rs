use super::Expand;
use crate::schema::Field;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Describes one field. Fields that are not `pub` are listed so path
    /// resolution can report them, but can be neither inspected nor written.
    pub(super) fn expand_field_def(&self, field: &Field) -> TokenStream {
        let rowbind = &self.rowbind;
        let name = &field.name;

        if !field.exported {
            return quote! {
                #rowbind::FieldDef {
                    name: #name,
                    exported: false,
                    shape: #rowbind::unexported,
                    access: #rowbind::no_access,
                }
            };
        }

        let ty = &field.ty;
        let access = self.expand_access_fn(field);

        quote! {
            #rowbind::FieldDef {
                name: #name,
                exported: true,
                shape: #rowbind::shape_of::<#ty>,
                access: #access,
            }
        }
    }

    fn expand_access_fn(&self, field: &Field) -> TokenStream {
        let ident = &self.record.ident;
        let field_ident = &field.ident;

        quote! {
            {
                fn access(
                    record: &mut dyn ::std::any::Any,
                ) -> ::std::option::Option<&mut dyn ::std::any::Any> {
                    ::std::option::Option::Some(&mut record.downcast_mut::<#ident>()?.#field_ident)
                }
                access
            }
        }
    }
}
