use lode_geom::Vec3;

/* Unit cube corners:
 *
 *   1-------2        5-------6
 *   | -z    |        |  +z   |
 *   0-------3        4-------7
 *
 * y up; 0 = (0,0,0), 6 = (1,1,1).
 */
pub(crate) const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(1.0, 1.0, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(0.0, 1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, 0.0, 1.0),
];

/// Six corner indices per face, in `Direction` order, fixed winding.
pub(crate) const CUBE_INDICES: [usize; 36] = [
    4, 7, 6, 4, 6, 5, // south  (+z)
    3, 0, 1, 3, 1, 2, // north  (-z)
    7, 3, 2, 7, 2, 6, // east   (+x)
    0, 4, 5, 0, 5, 1, // west   (-x)
    2, 1, 5, 2, 5, 6, // top    (+y)
    0, 3, 7, 0, 7, 4, // bottom (-y)
];

/// Positions, within a face's six indices, of its four unique corners.
pub(crate) const UNIQUE_INDICES: [usize; 4] = [0, 1, 2, 5];

/// Two triangles over the four emitted vertices of a face.
pub(crate) const FACE_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

pub(crate) const CUBE_UVS: [(f32, f32); 4] = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
