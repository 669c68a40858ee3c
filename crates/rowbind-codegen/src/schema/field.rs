use super::report;

#[derive(Debug)]
pub(crate) struct Field {
    /// Rust identifier of the field
    pub(crate) ident: syn::Ident,

    /// Path segment addressing the field
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,

    /// True if the field is `pub`
    pub(crate) exported: bool,

    /// True if the field is annotated with `#[record(skip)]`
    pub(crate) skip: bool,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = vec![];
        let mut rename: Option<syn::LitStr> = None;
        let mut skip = false;

        for attr in &field.attrs {
            if !attr.path().is_ident("record") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let lit: syn::LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() || lit.value().contains('.') {
                        errs.push(syn::Error::new_spanned(
                            &lit,
                            "field name must be non-empty and cannot contain `.`",
                        ));
                    }
                    if rename.is_some() {
                        errs.push(syn::Error::new_spanned(&meta.path, "duplicate `rename`"));
                    }
                    rename = Some(lit);
                } else if meta.path.is_ident("skip") {
                    if skip {
                        errs.push(syn::Error::new_spanned(&meta.path, "duplicate `skip`"));
                    }
                    skip = true;
                } else {
                    return Err(syn::Error::new_spanned(
                        &meta.path,
                        "expected `rename = \"...\"` or `skip`",
                    ));
                }

                Ok(())
            })?;
        }

        report(errs)?;

        let name = match rename {
            Some(lit) => lit.value(),
            None => ident.to_string().trim_start_matches("r#").to_string(),
        };

        Ok(Self {
            ident: ident.clone(),
            name,
            ty: field.ty.clone(),
            exported: matches!(field.vis, syn::Visibility::Public(_)),
            skip,
        })
    }
}
