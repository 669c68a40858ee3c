mod field;
pub(crate) use field::Field;

mod record;
pub(crate) use record::{Record, RecordKind};

mod record_attr;
pub(crate) use record_attr::RecordAttr;

/// Fails with every collected error combined into one.
fn report(errs: Vec<syn::Error>) -> syn::Result<()> {
    let combined = errs.into_iter().reduce(|mut acc, err| {
        acc.combine(err);
        acc
    });

    match combined {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
