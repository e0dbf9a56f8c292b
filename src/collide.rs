//! Swept-AABB collision resolution against static boxes, one axis at
//! a time.

use lode_geom::{Aabb, Vec3};

/// Slack left between a resolved box and the obstacle it hit. Axis
/// movement within this margin is treated as stopped.
pub const EPSILON: f32 = 0.05;

/// Outcome of a resolve: the displacement actually achieved, and per
/// axis whether the request was cut short (callers zero velocity on
/// stopped axes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub moved: Vec3,
    pub stopped: [bool; 3],
}

/// Legal movement along one axis, sweeping `bbox` translated on that
/// axis only.
fn move_axis(bbox: Aabb, movement: f32, colliders: &[Aabb], axis: usize) -> f32 {
    if movement == 0.0 {
        return 0.0;
    }

    let mut axis_vec = Vec3::ZERO;
    axis_vec[axis] = 1.0;
    let sign = if movement > 0.0 { 1.0 } else { -1.0 };

    let mut d_v = axis_vec * movement;
    let mut moved = bbox.translate(d_v);

    for c in colliders {
        if !c.collides(moved) {
            continue;
        }

        // back the displacement off by the penetration depth, then
        // re-test the remaining obstacles against the new box
        let depth = moved.depth(*c)[axis];
        d_v[axis] += -sign * (depth + EPSILON);
        moved = bbox.translate(d_v);

        if d_v[axis].abs() <= EPSILON {
            d_v[axis] = 0.0;
            break;
        }
    }

    let result = d_v[axis];
    if result.abs() <= f32::EPSILON { 0.0 } else { result }
}

/// Resolves `movement` for `bbox` against `colliders`, axis by axis in
/// x, y, z order. Every axis sweeps the ORIGINAL box translated on
/// that axis alone, so resolution order matters in corner cases; this
/// mirrors the long-standing behavior movement code is tuned against.
pub fn resolve(bbox: Aabb, movement: Vec3, colliders: &[Aabb]) -> Resolution {
    let mut moved = Vec3::ZERO;
    let mut stopped = [false; 3];

    for axis in 0..3 {
        let achieved = move_axis(bbox, movement[axis], colliders, axis);
        moved[axis] = achieved;
        stopped[axis] = (movement[axis] - achieved).abs() >= f32::EPSILON;
    }

    Resolution { moved, stopped }
}
