use glam::Vec3;

/// CPU-side indexed triangle mesh as returned by the geometry kernel:
/// flat position buffer plus an index buffer grouping vertices into
/// triangles.
///
/// An empty index buffer means non-indexed geometry: vertices are consumed
/// in order, three per triangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexedMesh {
    /// 3 floats per vertex: position (x, y, z)
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl IndexedMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        if self.indices.is_empty() {
            self.vertex_count() / 3
        } else {
            self.indices.len() / 3
        }
    }

    /// Position of vertex `i`. Panics if `i` is out of bounds; callers run
    /// [`crate::validation::MeshValidator`] on kernel output first.
    pub fn position(&self, i: u32) -> Vec3 {
        let base = i as usize * 3;
        Vec3::new(
            self.vertices[base],
            self.vertices[base + 1],
            self.vertices[base + 2],
        )
    }

    /// Vertex indices of triangle `t`, resolving the implicit indexing of
    /// non-indexed meshes.
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        if self.indices.is_empty() {
            let base = (t * 3) as u32;
            [base, base + 1, base + 2]
        } else {
            [
                self.indices[t * 3],
                self.indices[t * 3 + 1],
                self.indices[t * 3 + 2],
            ]
        }
    }
}
