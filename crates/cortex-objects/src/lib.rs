//! Cortex Objects
//!
//! The core object model built on the Cortex runtime type system.
//!
//! ```text
//! RunTimeTyped
//! └── Object
//!     ├── Data
//!     │   ├── BoolData, IntData, FloatData, StringData
//!     │   └── CompoundData
//!     └── BlindDataHolder
//!         └── Renderable
//!             ├── Primitive
//!             │   ├── MeshPrimitive
//!             │   └── PointsPrimitive
//!             └── Group
//! ```
//!
//! Types register themselves the first time a handle to them is created.
//! Registering the whole model up front lets name-based queries see types
//! that have no instances yet.

mod blind_data;
mod compound;
mod data;
mod error;
mod group;
mod mesh;
mod object;
mod primitive;
mod renderable;
pub mod type_ids;

pub use blind_data::BlindDataHolder;
pub use compound::CompoundData;
pub use data::{BoolData, Data, FloatData, IntData, StringData};
pub use error::ObjectError;
pub use group::Group;
pub use mesh::{MeshPrimitive, PointsPrimitive};
pub use object::Object;
pub use primitive::{Interpolation, Primitive, PrimitiveVariable};
pub use renderable::Renderable;
