//! Polygon meshes and point clouds.

use cortex_macros::RunTimeTyped;

use crate::{ObjectError, Primitive, type_ids};

/// A polygon mesh described by per-face vertex counts and vertex indices.
#[derive(Debug, Clone, Default, RunTimeTyped)]
#[cortex(id = type_ids::MESH_PRIMITIVE)]
pub struct MeshPrimitive {
    #[cortex(base)]
    primitive: Primitive,
    vertices_per_face: Vec<u32>,
    vertex_ids: Vec<u32>,
    num_vertices: usize,
}

impl MeshPrimitive {
    /// Build a mesh, checking the topology.
    ///
    /// Every face needs at least three vertices, the counts must add up to
    /// the number of indices, and every index must be below the vertex count.
    pub fn new(vertices_per_face: Vec<u32>, vertex_ids: Vec<u32>) -> Result<Self, ObjectError> {
        if let Some(face) = vertices_per_face.iter().position(|&count| count < 3) {
            return Err(ObjectError::InvalidTopology {
                reason: format!("face {} has fewer than 3 vertices", face),
            });
        }
        let expected: u64 = vertices_per_face.iter().map(|&count| u64::from(count)).sum();
        if expected != vertex_ids.len() as u64 {
            return Err(ObjectError::InvalidTopology {
                reason: format!(
                    "faces use {} vertex ids but {} were given",
                    expected,
                    vertex_ids.len()
                ),
            });
        }
        let num_vertices = vertex_ids.iter().max().map_or(0, |&max| max as usize + 1);

        Ok(Self {
            primitive: Primitive::default(),
            vertices_per_face,
            vertex_ids,
            num_vertices,
        })
    }

    pub fn num_faces(&self) -> usize {
        self.vertices_per_face.len()
    }

    /// Number of distinct vertex positions the indices address.
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn vertices_per_face(&self) -> &[u32] {
        &self.vertices_per_face
    }

    pub fn vertex_ids(&self) -> &[u32] {
        &self.vertex_ids
    }

    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    pub fn primitive_mut(&mut self) -> &mut Primitive {
        &mut self.primitive
    }
}

/// A set of disconnected points.
#[derive(Debug, Clone, Default, RunTimeTyped)]
#[cortex(id = type_ids::POINTS_PRIMITIVE)]
pub struct PointsPrimitive {
    #[cortex(base)]
    primitive: Primitive,
    num_points: usize,
}

impl PointsPrimitive {
    pub fn new(num_points: usize) -> Self {
        Self {
            primitive: Primitive::default(),
            num_points,
        }
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    pub fn primitive_mut(&mut self) -> &mut Primitive {
        &mut self.primitive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FloatData, Interpolation};
    use cortex_core::{Ptr, run_time_cast, run_time_cast_ptr};

    fn quad() -> MeshPrimitive {
        MeshPrimitive::new(vec![4], vec![0, 1, 2, 3]).unwrap()
    }

    #[test]
    fn mesh_topology_is_validated() {
        let mesh = quad();
        assert_eq!(mesh.num_faces(), 1);
        assert_eq!(mesh.num_vertices(), 4);

        assert!(matches!(
            MeshPrimitive::new(vec![2], vec![0, 1]),
            Err(ObjectError::InvalidTopology { .. })
        ));
        assert!(matches!(
            MeshPrimitive::new(vec![3, 3], vec![0, 1, 2]),
            Err(ObjectError::InvalidTopology { .. })
        ));
        assert_eq!(MeshPrimitive::new(vec![], vec![]).unwrap().num_vertices(), 0);
    }

    #[test]
    fn mesh_is_a_primitive() {
        let mut mesh = quad();
        mesh.primitive_mut()
            .set_variable("width", Interpolation::Vertex, Ptr::new(FloatData::new(1.0)).upcast())
            .unwrap();

        let mesh = Ptr::new(mesh);
        let primitive = run_time_cast::<Primitive, _>(&*mesh).unwrap();
        assert!(primitive.variable("width").is_some());

        let object = mesh.upcast();
        assert!(object.is_instance_of(type_ids::RENDERABLE));
        assert!(object.is_instance_of(type_ids::BLIND_DATA_HOLDER));
        assert!(run_time_cast_ptr::<PointsPrimitive, _>(&object).is_none());
    }

    #[test]
    fn points_are_not_meshes() {
        let points = Ptr::new(PointsPrimitive::new(128));
        assert_eq!(points.num_points(), 128);
        assert!(points.is_instance_of(type_ids::PRIMITIVE));
        assert!(!points.is_instance_of(type_ids::MESH_PRIMITIVE));
    }
}
