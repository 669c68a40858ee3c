use crate::descriptor::{Descriptor, Step};
use crate::shape::{Def, Shape};

use std::any::Any;

impl Descriptor {
    /// Returns a writable reference to the described field of `root`.
    ///
    /// Unset `Option` levels between the root and the field are filled with
    /// default values on the way down, so the returned reference is always
    /// reachable. The field itself is returned as declared, pointer levels
    /// included; committing a value takes care of those.
    ///
    /// Returns `None` only when `root` is not an instance of the type the
    /// descriptor was resolved against.
    pub fn access<'a>(&self, root: &'a mut dyn Any) -> Option<&'a mut dyn Any> {
        if Any::type_id(&*root) != (self.root().id)() {
            return None;
        }

        let mut current = root;
        for step in self.steps() {
            current = match *step {
                Step::Deref(shape) => deref(shape, current)?,
                Step::Field { owner, index } => (owner.fields()?.get(index)?.access)(current)?,
            };
        }
        Some(current)
    }
}

/// Passes through one pointer level, allocating the pointee if it is unset.
pub(crate) fn deref<'a>(shape: &Shape, value: &'a mut dyn Any) -> Option<&'a mut dyn Any> {
    match &shape.def {
        Def::Option(def) => (def.vivify)(value),
        Def::Pointer(def) => (def.deref)(value),
        _ => None,
    }
}
