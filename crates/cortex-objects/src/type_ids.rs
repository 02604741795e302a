//! Type ids of the core object model.
//!
//! All ids sit inside [`cortex_core::ranges::CORE`]. Ids are never reused;
//! retired types keep their slot.

use cortex_core::TypeId;

pub const OBJECT: TypeId = TypeId(2);
pub const DATA: TypeId = TypeId(3);
pub const BLIND_DATA_HOLDER: TypeId = TypeId(4);
pub const RENDERABLE: TypeId = TypeId(5);
pub const PRIMITIVE: TypeId = TypeId(6);
pub const MESH_PRIMITIVE: TypeId = TypeId(7);
pub const POINTS_PRIMITIVE: TypeId = TypeId(8);
pub const GROUP: TypeId = TypeId(9);
pub const COMPOUND_DATA: TypeId = TypeId(10);
pub const BOOL_DATA: TypeId = TypeId(11);
pub const INT_DATA: TypeId = TypeId(12);
pub const FLOAT_DATA: TypeId = TypeId(13);
pub const STRING_DATA: TypeId = TypeId(14);
