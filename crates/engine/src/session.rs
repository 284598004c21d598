//! Regeneration session state.
//!
//! Holds the kernel plus the last successfully generated mesh and its
//! canonical configuration. A failed regeneration leaves both untouched, so
//! the viewport keeps showing (and the user keeps exporting) the previous
//! valid adapter until a new one replaces it.

use shared::{sanitize, AdapterConfig, RawAdapterParams};

use crate::kernel::{KernelError, MeshKernel};
use crate::mesh::IndexedMesh;
use crate::stl::export_binary_stl;
use crate::validation::MeshValidator;

/// Position of the two end-reference markers on the body axis, derived from
/// the canonical body length. This is the one piece of geometric placement
/// done outside the kernel.
pub fn end_marker_positions(length_mm: f64) -> ([f64; 3], [f64; 3]) {
    let half = length_mm / 2.0;
    ([0.0, 0.0, -half], [0.0, 0.0, half])
}

struct GeneratedState {
    config: AdapterConfig,
    mesh: IndexedMesh,
}

/// One interactive configurator session.
pub struct FittingSession<K: MeshKernel> {
    kernel: K,
    current: Option<GeneratedState>,
}

impl<K: MeshKernel> FittingSession<K> {
    pub fn new(kernel: K) -> Self {
        Self {
            kernel,
            current: None,
        }
    }

    /// Sanitize a raw working copy and regenerate the mesh.
    ///
    /// On success the new mesh and config replace the previous ones; the old
    /// buffers are dropped only after the replacement lands. On failure the
    /// previous state stays intact and the error is returned for a single
    /// user-visible notice.
    pub fn regenerate(
        &mut self,
        raw: &RawAdapterParams,
    ) -> Result<&IndexedMesh, KernelError> {
        let config = sanitize(raw);
        tracing::info!(
            "Regenerating {}x{} adapter, length {} mm",
            config.end_a.size.label(),
            config.end_b.size.label(),
            config.body.length_mm
        );

        match self.kernel.generate(&config) {
            Ok(mesh) => {
                let errors = MeshValidator::new(&mesh).validate_all();
                if !errors.is_empty() {
                    tracing::warn!("Kernel returned invalid mesh: {}", errors.join("; "));
                    return Err(KernelError::Generation(errors.join("; ")));
                }
                tracing::info!(
                    "Kernel produced {} vertices, {} triangles",
                    mesh.vertex_count(),
                    mesh.triangle_count()
                );
                let state = self.current.insert(GeneratedState { config, mesh });
                Ok(&state.mesh)
            }
            Err(e) => {
                tracing::warn!("Regeneration failed, keeping previous mesh: {}", e);
                Err(e)
            }
        }
    }

    /// Canonical configuration of the currently displayed mesh, if any.
    pub fn current_config(&self) -> Option<&AdapterConfig> {
        self.current.as_ref().map(|s| &s.config)
    }

    /// The currently displayed mesh, if any.
    pub fn current_mesh(&self) -> Option<&IndexedMesh> {
        self.current.as_ref().map(|s| &s.mesh)
    }

    /// End-marker positions for the current adapter, if any.
    pub fn end_markers(&self) -> Option<([f64; 3], [f64; 3])> {
        self.current_config()
            .map(|c| end_marker_positions(c.body.length_mm))
    }

    /// Serialize the current mesh as binary STL, if any.
    pub fn export_stl(&self) -> Option<Vec<u8>> {
        self.current_mesh().map(export_binary_stl)
    }
}
