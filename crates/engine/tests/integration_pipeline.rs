//! Integration tests for the regeneration pipeline.
//!
//! Tests end-to-end: RawAdapterParams -> FittingSession -> binary STL,
//! with stub kernels standing in for the external geometry module.

use fitting_engine::fixtures::{FailingKernel, SegmentFanKernel, StubKernel};
use fitting_engine::kernel::{KernelError, MeshKernel};
use fitting_engine::mesh::IndexedMesh;
use fitting_engine::session::{end_marker_positions, FittingSession};
use fitting_engine::validation::MeshValidator;
use shared::{RawAdapterParams, RawResolution};

#[test]
fn regenerate_then_export() {
    let mut session = FittingSession::new(StubKernel::with_quad());
    let mesh = session.regenerate(&RawAdapterParams::default()).unwrap();
    assert_eq!(mesh.triangle_count(), 2);

    let stl = session.export_stl().unwrap();
    assert_eq!(stl.len(), 84 + 50 * 2);
    assert_eq!(u32::from_le_bytes(stl[80..84].try_into().unwrap()), 2);
}

#[test]
fn fresh_session_has_nothing_to_export() {
    let session = FittingSession::new(StubKernel::with_quad());
    assert!(session.current_mesh().is_none());
    assert!(session.current_config().is_none());
    assert!(session.export_stl().is_none());
    assert!(session.end_markers().is_none());
}

#[test]
fn first_failure_leaves_session_empty() {
    let mut session = FittingSession::new(FailingKernel {
        error: KernelError::Generation("degenerate profile".into()),
    });
    let err = session.regenerate(&RawAdapterParams::default()).unwrap_err();
    assert_eq!(err, KernelError::Generation("degenerate profile".into()));
    assert!(session.current_mesh().is_none());
    assert!(session.export_stl().is_none());
}

#[test]
fn later_failure_keeps_previous_mesh() {
    // Succeeds once, then reports the module as gone, like a wasm kernel
    // unloading mid-session.
    struct FlakyKernel {
        calls: std::cell::Cell<u32>,
    }
    impl MeshKernel for FlakyKernel {
        fn generate(
            &self,
            config: &shared::AdapterConfig,
        ) -> Result<IndexedMesh, KernelError> {
            let n = self.calls.get();
            self.calls.set(n + 1);
            if n == 0 {
                StubKernel::with_quad().generate(config)
            } else {
                Err(KernelError::Unavailable)
            }
        }
    }

    let mut session = FittingSession::new(FlakyKernel {
        calls: std::cell::Cell::new(0),
    });
    session.regenerate(&RawAdapterParams::default()).unwrap();
    let before = session.current_mesh().unwrap().clone();
    let config_before = *session.current_config().unwrap();

    let mut raw = RawAdapterParams::default();
    raw.body.length_mm = 80.0;
    let err = session.regenerate(&raw).unwrap_err();
    assert_eq!(err, KernelError::Unavailable);

    // Previous mesh, config, and export all survive the failure.
    assert_eq!(session.current_mesh().unwrap(), &before);
    assert_eq!(session.current_config().unwrap(), &config_before);
    assert!(session.export_stl().is_some());
}

#[test]
fn invalid_kernel_output_is_a_generation_error() {
    struct BrokenKernel;
    impl MeshKernel for BrokenKernel {
        fn generate(
            &self,
            _config: &shared::AdapterConfig,
        ) -> Result<IndexedMesh, KernelError> {
            // Index 7 points past the three vertices.
            Ok(IndexedMesh {
                vertices: vec![0.0; 9],
                indices: vec![0, 1, 7],
            })
        }
    }

    let mut session = FittingSession::new(BrokenKernel);
    let err = session.regenerate(&RawAdapterParams::default()).unwrap_err();
    match err {
        KernelError::Generation(msg) => assert!(msg.contains("index")),
        other => panic!("unexpected error: {other}"),
    }
    assert!(session.current_mesh().is_none());
}

#[test]
fn config_drives_kernel_output() {
    let mut session = FittingSession::new(SegmentFanKernel);

    let mut raw = RawAdapterParams::default();
    raw.resolution.radial_segments = 24.0;
    let tris_coarse = session.regenerate(&raw).unwrap().triangle_count();
    assert_eq!(tris_coarse, 24);

    raw.resolution.radial_segments = 160.0;
    let tris_fine = session.regenerate(&raw).unwrap().triangle_count();
    assert_eq!(tris_fine, 160);

    // Out-of-range request is clamped before it reaches the kernel.
    raw.resolution.radial_segments = 1e9;
    assert_eq!(session.regenerate(&raw).unwrap().triangle_count(), 160);

    let mesh = session.current_mesh().unwrap();
    assert!(MeshValidator::new(mesh).validate_all().is_empty());
}

#[test]
fn params_built_as_literal_drive_the_session() {
    // Downstream code constructs raw params directly, including the nested
    // resolution section.
    let raw = RawAdapterParams {
        resolution: RawResolution {
            radial_segments: 32.0,
            turns_per_thread: 5.0,
        },
        ..RawAdapterParams::default()
    };
    let mut session = FittingSession::new(SegmentFanKernel);
    assert_eq!(session.regenerate(&raw).unwrap().triangle_count(), 32);
}

#[test]
fn end_markers_track_sanitized_length() {
    let mut session = FittingSession::new(StubKernel::with_quad());

    let mut raw = RawAdapterParams::default();
    raw.body.length_mm = 100.0;
    session.regenerate(&raw).unwrap();
    assert_eq!(
        session.end_markers().unwrap(),
        ([0.0, 0.0, -50.0], [0.0, 0.0, 50.0])
    );

    // Clamped length feeds the markers, not the raw value.
    raw.body.length_mm = -10.0;
    session.regenerate(&raw).unwrap();
    assert_eq!(
        session.end_markers().unwrap(),
        end_marker_positions(20.0)
    );
}
