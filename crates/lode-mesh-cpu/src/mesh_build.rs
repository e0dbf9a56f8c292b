use lode_geom::{Direction, Vec3};

use crate::cube::{CUBE_INDICES, CUBE_UVS, CUBE_VERTICES, FACE_INDICES, UNIQUE_INDICES};

/// CPU-side geometry streams for one batch of faces.
///
/// Indices are relative to the batch's own vertex range; when batches
/// are concatenated into a shared buffer, each pass's `vertices_start`
/// is applied at bind time instead of rewriting indices.
#[derive(Default, Clone, Debug)]
pub struct MeshBuild {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub uv: Vec<f32>,
    pub material: Vec<f32>,
    pub idx: Vec<u32>,
}

impl MeshBuild {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.idx.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idx.is_empty()
    }

    /// Clears all streams but retains capacity for reuse.
    pub fn clear_keep_capacity(&mut self) {
        self.pos.clear();
        self.norm.clear();
        self.uv.clear();
        self.material.clear();
        self.idx.clear();
    }

    /// Pre-reserves for approximately `n_quads` quads.
    pub fn reserve_quads(&mut self, n_quads: usize) {
        self.pos.reserve(n_quads * 4 * 3);
        self.norm.reserve(n_quads * 4 * 3);
        self.uv.reserve(n_quads * 4 * 2);
        self.material.reserve(n_quads * 4 * 4);
        self.idx.reserve(n_quads * 6);
    }

    /// Emits one cube face at `origin`: four vertices carrying normal,
    /// atlas UV and packed material, plus two triangles.
    pub fn add_face(
        &mut self,
        dir: Direction,
        origin: Vec3,
        uv_offset: (f32, f32),
        uv_size: (f32, f32),
        material: [f32; 4],
    ) {
        let base = self.vertex_count() as u32;
        let n = dir.normal();
        for (i, &u) in UNIQUE_INDICES.iter().enumerate() {
            let corner = CUBE_VERTICES[CUBE_INDICES[dir.index() * 6 + u]];
            let p = origin + corner;
            self.pos.extend_from_slice(&[p.x, p.y, p.z]);
            self.norm.extend_from_slice(&[n.x, n.y, n.z]);
            self.uv.extend_from_slice(&[
                CUBE_UVS[i].0 * uv_size.0 + uv_offset.0,
                CUBE_UVS[i].1 * uv_size.1 + uv_offset.1,
            ]);
            self.material.extend_from_slice(&material);
        }
        for i in FACE_INDICES {
            self.idx.push(base + i);
        }
    }

    /// Concatenates `other`'s streams onto this build. Indices are
    /// copied as-is (still relative to `other`'s vertex range).
    pub fn append(&mut self, other: &MeshBuild) {
        self.pos.extend_from_slice(&other.pos);
        self.norm.extend_from_slice(&other.norm);
        self.uv.extend_from_slice(&other.uv);
        self.material.extend_from_slice(&other.material);
        self.idx.extend_from_slice(&other.idx);
    }
}
