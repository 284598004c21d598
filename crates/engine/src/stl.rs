//! Binary STL export.
//!
//! Fixed little-endian layout: 80-byte zero-filled header, u32 triangle
//! count, then one 50-byte record per triangle (facet normal, three
//! vertices, u16 attribute field). Total size is exactly
//! `84 + 50 * triangle_count` bytes.

use crate::mesh::IndexedMesh;

/// Unconstrained leading header, left zero-filled.
const HEADER_LEN: usize = 80;
/// Normal + 3 vertices (4 x 3 x f32) + u16 attribute field.
const TRIANGLE_RECORD_LEN: usize = 50;

/// Serialize an indexed triangle mesh into a binary STL buffer.
///
/// The facet normal is `normalize(cross(p2 - p1, p0 - p1))`. This operand
/// pairing is the historical convention of the export path; downstream
/// consumers assume the resulting orientation, so it must not be "fixed"
/// to the `(p1-p0) x (p2-p0)` form. Degenerate triangles get a zero
/// normal instead of failing the export.
///
/// The mesh must satisfy the `IndexedMesh` invariants (see
/// [`crate::validation::MeshValidator`]); out-of-range indices panic.
pub fn export_binary_stl(mesh: &IndexedMesh) -> Vec<u8> {
    let tri_count = mesh.triangle_count();
    let mut buf = Vec::with_capacity(HEADER_LEN + 4 + tri_count * TRIANGLE_RECORD_LEN);

    buf.resize(HEADER_LEN, 0);
    buf.extend_from_slice(&(tri_count as u32).to_le_bytes());

    for t in 0..tri_count {
        let [i0, i1, i2] = mesh.triangle(t);
        let p0 = mesh.position(i0);
        let p1 = mesh.position(i1);
        let p2 = mesh.position(i2);

        let normal = (p2 - p1).cross(p0 - p1).normalize_or_zero();

        for v in [normal, p0, p1, p2] {
            buf.extend_from_slice(&v.x.to_le_bytes());
            buf.extend_from_slice(&v.y.to_le_bytes());
            buf.extend_from_slice(&v.z.to_le_bytes());
        }
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    buf
}
