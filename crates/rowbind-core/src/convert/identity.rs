use super::{Commit, Conversion, Convert, Target};
use crate::shape::Format;
use crate::{Error, Result, Type};

/// Reads the destination's own representation and commits it unchanged.
///
/// Fields without a scalar or list representation fall back to their
/// decoders, text first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

/// Requests an explicit representation from the row cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Source(pub Type);

impl Convert for Identity {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        let shape = match dest {
            Target::Value(ty) => return Ok(Conversion::identity(ty.clone())),
            Target::Field(shape) => *shape,
        };

        if let Some(ty) = shape.natural_type() {
            return Ok(Conversion::identity(ty));
        }

        for format in [Format::Text, Format::Binary, Format::Json] {
            if shape.decoder(format).is_some() {
                return Ok(Conversion::identity(format.source_type())
                    .with_commit(Commit::Decode(format)));
            }
        }

        Err(Error::type_incompatible_because(
            "row value",
            shape,
            "the type has no row representation and no decoder",
        ))
    }
}

impl Convert for Source {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        let Source(ty) = self;
        dest.expect(ty)?;

        Ok(match dest {
            Target::Value(to) if to != ty => {
                let to = to.clone();
                Conversion::map(ty.clone(), move |value| value.coerce(&to))
            }
            _ => Conversion::identity(ty.clone()),
        })
    }
}
