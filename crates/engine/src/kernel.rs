//! Geometry kernel contract.
//!
//! Thread and body geometry generation lives outside this crate (the wasm
//! kernel module in the deployed app). The engine only depends on this
//! trait plus the serialized request record, so tests and tooling can
//! substitute their own kernels.

use shared::AdapterConfig;

use crate::mesh::IndexedMesh;

/// Errors reported by a geometry kernel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// Kernel module not initialized (e.g. wasm module not loaded yet).
    Unavailable,
    /// Generation failed for this configuration.
    Generation(String),
}

impl std::fmt::Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Unavailable => write!(f, "Geometry kernel not available"),
            KernelError::Generation(msg) => write!(f, "Mesh generation failed: {}", msg),
        }
    }
}

impl std::error::Error for KernelError {}

/// An injected geometry generator.
///
/// Takes a canonical configuration, returns raw vertex/index buffers.
/// Implementations are free to ignore fields they do not model, but must
/// uphold the `IndexedMesh` invariants on success.
pub trait MeshKernel {
    fn generate(&self, config: &AdapterConfig) -> Result<IndexedMesh, KernelError>;
}

/// Serialize a canonical configuration as the kernel request record.
///
/// The field names in this JSON (`endA.standard`, `body.type`,
/// `resolution.radial_segments`, ...) are the agreed wire contract with
/// out-of-process kernels.
pub fn kernel_request_json(config: &AdapterConfig) -> Result<String, KernelError> {
    config
        .to_json()
        .map_err(|e| KernelError::Generation(format!("request encoding: {}", e)))
}
