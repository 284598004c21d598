//! Mesh validation utilities.
//!
//! `MeshValidator` checks kernel output before it enters the session:
//! correct stride, in-range indices, triangle grouping.

use crate::mesh::IndexedMesh;

/// Validator for `IndexedMesh` integrity checks.
pub struct MeshValidator<'a> {
    mesh: &'a IndexedMesh,
}

impl<'a> MeshValidator<'a> {
    /// Create a new validator for the given mesh.
    pub fn new(mesh: &'a IndexedMesh) -> Self {
        Self { mesh }
    }

    /// Check that the vertex buffer length is a multiple of 3 (the stride).
    pub fn is_stride_valid(&self) -> bool {
        self.mesh.vertices.len() % 3 == 0
    }

    /// Check that the index buffer length is a multiple of 3.
    pub fn is_index_stride_valid(&self) -> bool {
        self.mesh.indices.len() % 3 == 0
    }

    /// Check that all indices are within the valid vertex range.
    pub fn are_indices_in_range(&self) -> bool {
        let max_idx = self.mesh.vertex_count() as u32;
        self.mesh.indices.iter().all(|&i| i < max_idx)
    }

    /// Non-indexed meshes need a vertex count divisible by 3.
    pub fn is_implicit_grouping_valid(&self) -> bool {
        !self.mesh.indices.is_empty() || self.mesh.vertex_count() % 3 == 0
    }

    /// Run all checks, returning human-readable descriptions of failures.
    pub fn validate_all(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if !self.is_stride_valid() {
            errors.push(format!(
                "vertex buffer length {} is not a multiple of 3",
                self.mesh.vertices.len()
            ));
        }
        if !self.is_index_stride_valid() {
            errors.push(format!(
                "index buffer length {} is not a multiple of 3",
                self.mesh.indices.len()
            ));
        }
        if !self.are_indices_in_range() {
            errors.push(format!(
                "index buffer references vertices beyond count {}",
                self.mesh.vertex_count()
            ));
        }
        if !self.is_implicit_grouping_valid() {
            errors.push(format!(
                "non-indexed vertex count {} is not a multiple of 3",
                self.mesh.vertex_count()
            ));
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::single_triangle_mesh;

    #[test]
    fn fixture_mesh_is_valid() {
        let mesh = single_triangle_mesh();
        assert!(MeshValidator::new(&mesh).validate_all().is_empty());
    }

    #[test]
    fn detects_bad_vertex_stride() {
        let mesh = IndexedMesh {
            vertices: vec![0.0; 10],
            indices: vec![0, 1, 2],
        };
        let v = MeshValidator::new(&mesh);
        assert!(!v.is_stride_valid());
        assert_eq!(v.validate_all().len(), 1);
    }

    #[test]
    fn detects_out_of_range_index() {
        let mesh = IndexedMesh {
            vertices: vec![0.0; 9],
            indices: vec![0, 1, 3],
        };
        let v = MeshValidator::new(&mesh);
        assert!(!v.are_indices_in_range());
        assert!(!v.validate_all().is_empty());
    }

    #[test]
    fn detects_ragged_index_buffer() {
        let mesh = IndexedMesh {
            vertices: vec![0.0; 9],
            indices: vec![0, 1],
        };
        assert!(!MeshValidator::new(&mesh).is_index_stride_valid());
    }

    #[test]
    fn gates_export_of_bad_kernel_buffers() {
        // The wasm boundary runs validate_all before serializing raw JS
        // buffers; both failure shapes must be caught here.
        let ragged = IndexedMesh {
            vertices: vec![0.0; 10],
            indices: vec![0, 1, 2],
        };
        assert!(!MeshValidator::new(&ragged).validate_all().is_empty());

        let out_of_range = IndexedMesh {
            vertices: vec![0.0; 9],
            indices: vec![0, 1, 7],
        };
        assert!(!MeshValidator::new(&out_of_range).validate_all().is_empty());
    }

    #[test]
    fn detects_ragged_non_indexed_mesh() {
        let mesh = IndexedMesh {
            vertices: vec![0.0; 12],
            indices: vec![],
        };
        assert!(!MeshValidator::new(&mesh).is_implicit_grouping_valid());
    }
}
