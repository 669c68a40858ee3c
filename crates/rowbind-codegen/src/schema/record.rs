use super::{report, Field, RecordAttr};

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Struct-level options
    pub(crate) attrs: RecordAttr,

    pub(crate) kind: RecordKind,
}

#[derive(Debug)]
pub(crate) enum RecordKind {
    /// Struct with named fields, addressable by path
    Struct(Vec<Field>),

    /// Any other type; only writable through its decoders
    Opaque,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Self> {
        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let attrs = RecordAttr::from_ast(&ast.attrs)?;

        let kind = match &ast.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => RecordKind::Struct(fields_from_ast(named)?),
                _ => RecordKind::Opaque,
            },
            syn::Data::Enum(_) => RecordKind::Opaque,
            syn::Data::Union(data) => {
                return Err(syn::Error::new_spanned(
                    data.union_token,
                    "unions cannot be records",
                ))
            }
        };

        if matches!(kind, RecordKind::Opaque) && !(attrs.text || attrs.binary || attrs.json) {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "records without named fields need a decoder: #[record(text)], #[record(binary)] or #[record(json)]",
            ));
        }

        Ok(Self {
            ident: ast.ident.clone(),
            attrs,
            kind,
        })
    }
}

fn fields_from_ast(named: &syn::FieldsNamed) -> syn::Result<Vec<Field>> {
    let mut errs = vec![];
    let mut fields: Vec<Field> = vec![];

    for node in &named.named {
        match Field::from_ast(node) {
            Ok(field) => {
                let duplicate = fields
                    .iter()
                    .any(|other| !other.skip && !field.skip && other.name == field.name);
                if duplicate {
                    errs.push(syn::Error::new_spanned(
                        node,
                        format!("duplicate field name `{}`", field.name),
                    ));
                }
                fields.push(field);
            }
            Err(err) => errs.push(err),
        }
    }

    report(errs)?;
    Ok(fields)
}
