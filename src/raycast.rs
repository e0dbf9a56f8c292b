//! Incremental grid traversal (Amanatides-Woo DDA).

use lode_geom::{Direction, IVec3, Vec3};

/// First cell satisfying the predicate, plus the face the ray entered
/// it through. `face` is `None` when the origin cell itself matched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub cell: IVec3,
    pub face: Option<Direction>,
}

#[inline]
fn sign(v: f32) -> i32 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Parametric distance from `s` along `ds` to the next grid line;
/// infinite for an axis that does not move.
#[inline]
fn intbound(s: f32, ds: f32) -> f32 {
    if ds == 0.0 {
        f32::INFINITY
    } else if ds > 0.0 {
        (s.ceil() - s) / ds
    } else {
        (s - s.floor()) / -ds
    }
}

/// Marches from `origin` along `direction` (not required to be
/// normalized), testing `f` against each visited cell, the starting
/// cell included, until a cell matches or the traveled distance
/// exceeds `max_distance`.
pub fn intersect<F>(origin: Vec3, direction: Vec3, max_distance: f32, mut f: F) -> Option<RayHit>
where
    F: FnMut(IVec3) -> bool,
{
    let len = direction.length();
    if len < 1e-6 {
        return None;
    }

    let mut p = origin.floor();
    let step = IVec3::new(sign(direction.x), sign(direction.y), sign(direction.z));
    let mut t_max = Vec3::new(
        intbound(origin.x, direction.x),
        intbound(origin.y, direction.y),
        intbound(origin.z, direction.z),
    );
    let t_delta = Vec3::new(
        if step.x == 0 {
            f32::INFINITY
        } else {
            step.x as f32 / direction.x
        },
        if step.y == 0 {
            f32::INFINITY
        } else {
            step.y as f32 / direction.y
        },
        if step.z == 0 {
            f32::INFINITY
        } else {
            step.z as f32 / direction.z
        },
    );
    // parametric travel bound; t_max values compare against this
    let radius = max_distance / len;
    let mut face: Option<Direction> = None;

    loop {
        if f(p) {
            return Some(RayHit { cell: p, face });
        }

        // advance the axis with the nearest grid line, checking the
        // bound before stepping
        if t_max.x < t_max.y {
            if t_max.x < t_max.z {
                if t_max.x > radius {
                    return None;
                }
                p.x += step.x;
                t_max.x += t_delta.x;
                face = Direction::from_delta(IVec3::new(-step.x, 0, 0));
            } else {
                if t_max.z > radius {
                    return None;
                }
                p.z += step.z;
                t_max.z += t_delta.z;
                face = Direction::from_delta(IVec3::new(0, 0, -step.z));
            }
        } else if t_max.y < t_max.z {
            if t_max.y > radius {
                return None;
            }
            p.y += step.y;
            t_max.y += t_delta.y;
            face = Direction::from_delta(IVec3::new(0, -step.y, 0));
        } else {
            if t_max.z > radius {
                return None;
            }
            p.z += step.z;
            t_max.z += t_delta.z;
            face = Direction::from_delta(IVec3::new(0, 0, -step.z));
        }
    }
}
