//! Factory functions for creating test data.
//!
//! Provides canned meshes and stub kernels used by unit and integration
//! tests in place of the real geometry module.

use shared::AdapterConfig;

use crate::kernel::{KernelError, MeshKernel};
use crate::mesh::IndexedMesh;

/// Single right triangle in the XY plane: p0=(0,0,0), p1=(1,0,0), p2=(0,1,0).
pub fn single_triangle_mesh() -> IndexedMesh {
    IndexedMesh {
        vertices: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        indices: vec![0, 1, 2],
    }
}

/// Unit quad in the XY plane, two triangles over four shared vertices.
pub fn quad_mesh() -> IndexedMesh {
    IndexedMesh {
        vertices: vec![
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            1.0, 1.0, 0.0, //
            0.0, 1.0, 0.0,
        ],
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

/// Kernel stub returning a clone of a fixed mesh for any configuration.
pub struct StubKernel {
    pub mesh: IndexedMesh,
}

impl StubKernel {
    pub fn with_quad() -> Self {
        Self { mesh: quad_mesh() }
    }
}

impl MeshKernel for StubKernel {
    fn generate(&self, _config: &AdapterConfig) -> Result<IndexedMesh, KernelError> {
        Ok(self.mesh.clone())
    }
}

/// Kernel stub that always fails with a fixed error.
pub struct FailingKernel {
    pub error: KernelError,
}

impl MeshKernel for FailingKernel {
    fn generate(&self, _config: &AdapterConfig) -> Result<IndexedMesh, KernelError> {
        Err(self.error.clone())
    }
}

/// Kernel stub that scales triangle output with the radial segment count,
/// for tests that need regeneration to visibly depend on the config.
pub struct SegmentFanKernel;

impl MeshKernel for SegmentFanKernel {
    fn generate(&self, config: &AdapterConfig) -> Result<IndexedMesh, KernelError> {
        let segments = config.resolution.radial_segments as usize;
        let radius = config.end_a.size.thread_entry().major_diameter_mm as f32 / 2.0;
        let z = (config.body.length_mm / 2.0) as f32;

        let mut vertices = vec![0.0, 0.0, z];
        let mut indices = Vec::with_capacity(segments * 3);
        for s in 0..segments {
            let angle = s as f32 / segments as f32 * std::f32::consts::TAU;
            vertices.extend_from_slice(&[radius * angle.cos(), radius * angle.sin(), z]);
        }
        for s in 0..segments {
            let next = (s % segments) as u32 + 1;
            let wrap = ((s + 1) % segments) as u32 + 1;
            indices.extend_from_slice(&[0, next, wrap]);
        }
        Ok(IndexedMesh { vertices, indices })
    }
}
