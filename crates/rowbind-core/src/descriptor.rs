use crate::shape::{Def, Reflect, Shape};
use crate::{Error, Result};

use std::collections::HashMap;
use std::sync::Arc;

/// How to reach one field of a record type.
///
/// Descriptors are computed once per path by a [`Resolver`] and never change
/// afterwards.
#[derive(Debug)]
pub struct Descriptor {
    path: Box<str>,

    root: &'static Shape,

    /// The field's declared shape, pointer levels included.
    declared: &'static Shape,

    /// `declared` with all pointer levels stripped.
    base: &'static Shape,

    indirections: usize,

    steps: Vec<Step>,
}

/// One step of the walk from the record root to a field.
#[derive(Debug, Clone, Copy)]
pub enum Step {
    /// Pass through the pointer level described by the shape.
    Deref(&'static Shape),

    /// Select field `index` of the struct described by `owner`.
    Field {
        owner: &'static Shape,
        index: usize,
    },
}

impl Descriptor {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn root(&self) -> &'static Shape {
        self.root
    }

    pub fn declared(&self) -> &'static Shape {
        self.declared
    }

    pub fn base(&self) -> &'static Shape {
        self.base
    }

    /// Number of `Option`/`Box` levels wrapping the field.
    pub fn indirections(&self) -> usize {
        self.indirections
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns `true` if the field is the record itself.
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

/// Resolves and caches field paths for one record type.
#[derive(Debug)]
pub struct Resolver {
    root: &'static Shape,
    cache: HashMap<Box<str>, Arc<Descriptor>>,
}

impl Resolver {
    pub fn new(root: &'static Shape) -> Resolver {
        Resolver {
            root,
            cache: HashMap::new(),
        }
    }

    pub fn of<T: Reflect>() -> Resolver {
        Resolver::new(T::SHAPE)
    }

    pub fn root(&self) -> &'static Shape {
        self.root
    }

    /// Resolves a dot-separated field path.
    ///
    /// The empty path denotes the record itself. Repeated calls for the same
    /// path return the cached descriptor.
    pub fn resolve(&mut self, path: &str) -> Result<Arc<Descriptor>> {
        if let Some(descriptor) = self.cache.get(path) {
            return Ok(descriptor.clone());
        }

        let descriptor = Arc::new(walk(self.root, path)?);
        self.cache.insert(path.into(), descriptor.clone());
        Ok(descriptor)
    }

    /// Number of cached paths.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

fn walk(root: &'static Shape, path: &str) -> Result<Descriptor> {
    let mut steps = vec![];
    let mut current = root;

    if !path.is_empty() {
        for segment in path.split('.') {
            while let Some(inner) = pointee(current) {
                steps.push(Step::Deref(current));
                current = inner;
            }

            let Some(fields) = current.fields() else {
                return Err(Error::field_not_found(path, segment, current.type_name));
            };

            let Some(index) = fields.iter().position(|field| field.name == segment) else {
                return Err(Error::field_not_found(path, segment, current.type_name));
            };

            if !fields[index].exported {
                return Err(Error::field_not_exported(path, segment, current.type_name));
            }

            steps.push(Step::Field {
                owner: current,
                index,
            });
            current = (fields[index].shape)();
        }
    }

    let (base, indirections) = current.strip();

    Ok(Descriptor {
        path: path.into(),
        root,
        declared: current,
        base,
        indirections,
        steps,
    })
}

fn pointee(shape: &Shape) -> Option<&'static Shape> {
    match &shape.def {
        Def::Option(def) => Some((def.inner)()),
        Def::Pointer(def) => Some((def.inner)()),
        _ => None,
    }
}
