//! WASM boundary for the fitting configurator frontend.
//!
//! The JS side owns the viewport, the control panel, and the geometry
//! kernel module; this crate exposes the sanitizer, the binary STL
//! serializer, and end-marker placement. Every failure is mapped to a
//! `JsError` at its single call site.

use wasm_bindgen::prelude::*;

use fitting_engine::mesh::IndexedMesh;
use fitting_engine::session::end_marker_positions;
use fitting_engine::stl::export_binary_stl as export_stl;
use fitting_engine::validation::MeshValidator;
use shared::{sanitize, RawAdapterParams};

/// Initialize WASM module with panic hook and logging
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!("Fitting configurator WASM module initialized");
}

/// Stock adapter parameters as raw JSON, for seeding the control panel.
#[wasm_bindgen]
pub fn default_adapter_params() -> Result<String, JsError> {
    serde_json::to_string(&RawAdapterParams::default())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Sanitize a raw parameter snapshot and return the canonical kernel
/// request record.
///
/// Unknown labels and out-of-range numbers are corrected, never rejected;
/// only structurally broken JSON errors out.
#[wasm_bindgen]
pub fn sanitize_adapter_params(raw_json: &str) -> Result<String, JsError> {
    let raw: RawAdapterParams = serde_json::from_str(raw_json)
        .map_err(|e| JsError::new(&format!("Invalid params: {e}")))?;
    let config = sanitize(&raw);
    config.to_json().map_err(|e| JsError::new(&e.to_string()))
}

/// Serialize kernel output buffers as a binary STL file.
///
/// `vertices` is the flat position buffer (3 floats per vertex); an empty
/// `indices` buffer means non-indexed geometry. Buffers that violate the
/// mesh invariants are rejected before any bytes are produced.
#[wasm_bindgen]
pub fn export_binary_stl(vertices: &[f32], indices: &[u32]) -> Result<Vec<u8>, JsError> {
    let mesh = IndexedMesh {
        vertices: vertices.to_vec(),
        indices: indices.to_vec(),
    };
    let errors = MeshValidator::new(&mesh).validate_all();
    if !errors.is_empty() {
        return Err(JsError::new(&format!(
            "Invalid mesh buffers: {}",
            errors.join("; ")
        )));
    }
    Ok(export_stl(&mesh))
}

/// End-marker positions for a sanitized body length, as
/// `[ax, ay, az, bx, by, bz]`.
#[wasm_bindgen]
pub fn end_marker_positions_for_length(length_mm: f64) -> Vec<f64> {
    let (a, b) = end_marker_positions(length_mm);
    vec![a[0], a[1], a[2], b[0], b[1], b[2]]
}
