use super::report;

/// Struct-level `#[record(...)]` options.
#[derive(Debug, Default)]
pub(crate) struct RecordAttr {
    /// Decode through `FromStr`
    pub(crate) text: bool,

    /// Decode through `TryFrom<&[u8]>`
    pub(crate) binary: bool,

    /// Decode through `serde::Deserialize`
    pub(crate) json: bool,
}

impl RecordAttr {
    pub(super) fn from_ast(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut errs = vec![];
        let mut out = RecordAttr::default();

        for attr in attrs {
            if !attr.path().is_ident("record") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                let flag = if meta.path.is_ident("text") {
                    &mut out.text
                } else if meta.path.is_ident("binary") {
                    &mut out.binary
                } else if meta.path.is_ident("json") {
                    &mut out.json
                } else {
                    return Err(syn::Error::new_spanned(
                        &meta.path,
                        "expected `text`, `binary` or `json`",
                    ));
                };

                if *flag {
                    errs.push(syn::Error::new_spanned(&meta.path, "duplicate decoder"));
                }
                *flag = true;
                Ok(())
            })?;
        }

        report(errs)?;
        Ok(out)
    }
}
