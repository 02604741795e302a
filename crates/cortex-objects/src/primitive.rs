//! Geometric primitives and their variables.

use std::collections::BTreeMap;
use std::fmt;

use cortex_core::ObjectPtr;
use cortex_macros::RunTimeTyped;

use crate::{ObjectError, Renderable, type_ids};

/// How a primitive variable is distributed over a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interpolation {
    /// One value for the whole primitive.
    #[default]
    Constant,
    /// One value per face.
    Uniform,
    /// One value per vertex, interpolated linearly.
    Varying,
    /// One value per vertex, interpolated with the surface.
    Vertex,
    /// One value per face corner.
    FaceVarying,
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Interpolation::Constant => "constant",
            Interpolation::Uniform => "uniform",
            Interpolation::Varying => "varying",
            Interpolation::Vertex => "vertex",
            Interpolation::FaceVarying => "facevarying",
        };
        f.write_str(name)
    }
}

/// A named value attached to a primitive.
#[derive(Debug, Clone)]
pub struct PrimitiveVariable {
    pub interpolation: Interpolation,
    data: ObjectPtr,
}

impl PrimitiveVariable {
    /// The held data. Always an instance of `Data`.
    pub fn data(&self) -> &ObjectPtr {
        &self.data
    }
}

/// A renderable with named primitive variables.
#[derive(Debug, Clone, Default, RunTimeTyped)]
#[cortex(id = type_ids::PRIMITIVE)]
pub struct Primitive {
    #[cortex(base)]
    renderable: Renderable,
    variables: BTreeMap<String, PrimitiveVariable>,
}

impl Primitive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `data` as variable `name`, replacing any previous one.
    ///
    /// Fails when `data` is not an instance of `Data`.
    pub fn set_variable(
        &mut self,
        name: impl Into<String>,
        interpolation: Interpolation,
        data: ObjectPtr,
    ) -> Result<(), ObjectError> {
        let name = name.into();
        if !data.is_instance_of(type_ids::DATA) {
            return Err(ObjectError::NotData {
                name,
                type_name: data.type_name(),
            });
        }
        self.variables.insert(
            name,
            PrimitiveVariable {
                interpolation,
                data,
            },
        );
        Ok(())
    }

    pub fn variable(&self, name: &str) -> Option<&PrimitiveVariable> {
        self.variables.get(name)
    }

    pub fn remove_variable(&mut self, name: &str) -> Option<PrimitiveVariable> {
        self.variables.remove(name)
    }

    /// Variables in name order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &PrimitiveVariable)> {
        self.variables.iter().map(|(name, var)| (name.as_str(), var))
    }

    pub fn renderable(&self) -> &Renderable {
        &self.renderable
    }

    pub fn renderable_mut(&mut self) -> &mut Renderable {
        &mut self.renderable
    }
}
