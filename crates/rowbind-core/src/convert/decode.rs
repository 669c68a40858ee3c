use super::{expect_field, Commit, Conversion, Convert, Target};
use crate::shape::Format;
use crate::{Error, Result};

/// Hands the input to one of the destination's decoders.
///
/// Text decoding reads a string and uses the type's `FromStr`
/// implementation. Binary decoding reads bytes through `TryFrom<&[u8]>`, and
/// JSON decoding reads bytes through `serde`. A decoder declared on the type
/// inside an `Option` or `Box` is found through those levels.
#[derive(Debug, Clone, Copy)]
pub struct Decode {
    format: Format,
}

impl Decode {
    pub fn new(format: Format) -> Decode {
        Decode { format }
    }

    pub fn text() -> Decode {
        Decode::new(Format::Text)
    }

    pub fn binary() -> Decode {
        Decode::new(Format::Binary)
    }

    pub fn json() -> Decode {
        Decode::new(Format::Json)
    }

    pub fn format(&self) -> Format {
        self.format
    }
}

impl Convert for Decode {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        let shape = expect_field(dest, &format!("{} decoder", self.format))?;

        if shape.decoder(self.format).is_none() {
            return Err(Error::type_incompatible_because(
                self.format.source_type(),
                shape,
                format!("{} does not implement {} decoding", shape, self.format),
            ));
        }

        Ok(Conversion::identity(self.format.source_type()).with_commit(Commit::Decode(self.format)))
    }
}
