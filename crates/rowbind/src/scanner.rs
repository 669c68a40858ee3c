use crate::scan::Pipeline;

use rowbind_core::convert::{Commit, Conversion, Convert, Converter, Identity, Target};
use rowbind_core::descriptor::{Descriptor, Resolver};
use rowbind_core::{assign, decode, Error, Result, Slot, Value};

use std::any::Any;
use std::sync::Arc;

/// A converter paired with the field it writes.
#[derive(Clone)]
pub struct Scanner {
    path: Box<str>,
    converter: Converter,
}

/// A scanner resolved against a record type.
pub(crate) struct BoundScanner {
    path: Box<str>,
    descriptor: Arc<Descriptor>,
    conversion: Conversion,
}

impl Scanner {
    pub fn new(path: impl Into<String>, converter: impl Convert) -> Scanner {
        Scanner {
            path: path.into().into_boxed_str(),
            converter: Arc::new(converter),
        }
    }

    /// Scans the whole record as a single column.
    pub fn root() -> Scanner {
        Scanner::new("", Identity)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn bind(&self, resolver: &mut Resolver) -> Result<BoundScanner> {
        let descriptor = resolver.resolve(&self.path)?;
        let conversion = self.converter.bind(&Target::field(descriptor.declared()))?;

        Ok(BoundScanner {
            path: self.path.clone(),
            descriptor,
            conversion,
        })
    }
}

impl<K> From<Pipeline<K>> for Scanner {
    fn from(pipeline: Pipeline<K>) -> Scanner {
        pipeline.to("")
    }
}

impl core::fmt::Debug for Scanner {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Scanner").field("path", &self.path).finish()
    }
}

impl BoundScanner {
    pub(crate) fn path(&self) -> &str {
        &self.path
    }

    /// A fresh placeholder for this scanner's column.
    pub(crate) fn slot(&self) -> Slot {
        Slot::new(
            self.conversion.source().clone(),
            self.conversion.is_nullable(),
        )
    }

    /// Converts one column value and writes it into `record`.
    ///
    /// A `NULL` the conversion does not replace leaves the record untouched:
    /// no intermediate levels are allocated for it.
    pub(crate) fn commit(&self, record: &mut dyn Any, value: Value) -> Result<()> {
        let value = self.conversion.run(value)?;
        if value.is_null() {
            return Ok(());
        }

        let declared = self.descriptor.declared();
        let Some(field) = self.descriptor.access(record) else {
            return Err(Error::type_incompatible("record", self.descriptor.root()));
        };

        match self.conversion.commit() {
            Commit::Assign => assign(declared, field, value),
            Commit::Decode(format) => decode(declared, field, format, value),
        }
    }
}

impl core::fmt::Debug for BoundScanner {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("BoundScanner")
            .field("path", &self.path)
            .field("conversion", &self.conversion)
            .finish()
    }
}
