use super::{Conversion, Convert, Converter, Identity, Target};
use crate::Result;

use std::sync::Arc;

/// Runs converters one after another, left to right.
///
/// Binding walks the steps from the destination backwards: the last step is
/// bound against the destination and every earlier step against the input of
/// the step that follows it. A mismatch at any seam fails the whole chain.
#[derive(Clone, Default)]
pub struct Chain {
    steps: Vec<Converter>,
}

impl Chain {
    pub fn new(steps: Vec<Converter>) -> Chain {
        Chain { steps }
    }

    /// Appends a step.
    pub fn step(mut self, step: impl Convert) -> Chain {
        self.steps.push(Arc::new(step));
        self
    }

    pub fn push(&mut self, step: Converter) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Convert for Chain {
    fn bind(&self, dest: &Target) -> Result<Conversion> {
        let Some((last, rest)) = self.steps.split_last() else {
            return Identity.bind(dest);
        };

        let mut conversion = last.bind(dest)?;
        for step in rest.iter().rev() {
            let next = Target::Value(conversion.source().clone());
            conversion = step.bind(&next)?.then(conversion);
        }
        Ok(conversion)
    }
}
