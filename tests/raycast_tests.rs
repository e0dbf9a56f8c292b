use lode::raycast::intersect;
use lode_geom::{Direction, IVec3, Vec3};

#[test]
fn hits_target_cell_through_its_entry_face() {
    let hit = intersect(
        Vec3::new(0.5, 0.5, 0.5),
        Vec3::new(1.0, 0.0, 0.0),
        10.0,
        |p| p == IVec3::new(3, 0, 0),
    )
    .expect("should hit");
    assert_eq!(hit.cell, IVec3::new(3, 0, 0));
    assert_eq!(hit.face, Some(Direction::West));
}

#[test]
fn starting_cell_hit_has_no_face() {
    let hit = intersect(
        Vec3::new(0.5, 0.5, 0.5),
        Vec3::new(1.0, 0.0, 0.0),
        10.0,
        |_| true,
    )
    .expect("origin cell matches");
    assert_eq!(hit.cell, IVec3::new(0, 0, 0));
    assert_eq!(hit.face, None);
}

#[test]
fn stops_at_max_distance() {
    let hit = intersect(
        Vec3::new(0.5, 0.5, 0.5),
        Vec3::new(1.0, 0.0, 0.0),
        2.0,
        |p| p == IVec3::new(3, 0, 0),
    );
    assert_eq!(hit, None);
}

#[test]
fn max_distance_is_in_world_units_for_unnormalized_directions() {
    // direction length 4: parametric bound must still allow 10 world
    // units of travel
    let hit = intersect(
        Vec3::new(0.5, 0.5, 0.5),
        Vec3::new(4.0, 0.0, 0.0),
        10.0,
        |p| p == IVec3::new(7, 0, 0),
    )
    .expect("should hit within 10 world units");
    assert_eq!(hit.cell, IVec3::new(7, 0, 0));

    let miss = intersect(
        Vec3::new(0.5, 0.5, 0.5),
        Vec3::new(4.0, 0.0, 0.0),
        5.0,
        |p| p == IVec3::new(7, 0, 0),
    );
    assert_eq!(miss, None);
}

#[test]
fn descending_ray_enters_through_top_faces() {
    let hit = intersect(
        Vec3::new(0.5, 10.5, 0.5),
        Vec3::new(0.0, -1.0, 0.0),
        32.0,
        |p| p.y <= 4,
    )
    .expect("should hit");
    assert_eq!(hit.cell, IVec3::new(0, 4, 0));
    assert_eq!(hit.face, Some(Direction::Top));
}

#[test]
fn negative_coordinates_traverse_correctly() {
    let hit = intersect(
        Vec3::new(0.5, 0.5, 0.5),
        Vec3::new(-1.0, 0.0, 0.0),
        10.0,
        |p| p == IVec3::new(-3, 0, 0),
    )
    .expect("should hit");
    assert_eq!(hit.cell, IVec3::new(-3, 0, 0));
    assert_eq!(hit.face, Some(Direction::East));
}

#[test]
fn zero_direction_never_hits() {
    assert_eq!(
        intersect(Vec3::new(0.5, 0.5, 0.5), Vec3::ZERO, 10.0, |_| true),
        None
    );
}
