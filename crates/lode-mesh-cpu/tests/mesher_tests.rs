use lode_blocks::{RenderPass, TileRegistry};
use lode_chunk::Chunk;
use lode_geom::IVec3;
use lode_mesh_cpu::{MeshCache, build_chunk_mesh, chunk_translation};
use lode_world::{Area, Budget};

fn noop(_: &mut Area, _: &TileRegistry, _: IVec3) {}

fn empty_area(radius: i32) -> (TileRegistry, Area) {
    let reg = TileRegistry::builtin();
    let mut area = Area::new(7, radius, noop);
    area.tick(&reg, &mut Budget::unlimited());
    (reg, area)
}

#[test]
fn single_block_emits_six_faces_in_default_pass() {
    let (reg, mut area) = empty_area(0);
    let stone = reg.id_by_name("stone").unwrap();
    area.set_tile(IVec3::new(5, 5, 5), stone);

    let mesh = build_chunk_mesh(&area, area.chunk(IVec3::ZERO).unwrap(), &reg);
    let default = mesh.pass(RenderPass::Default);
    let water = mesh.pass(RenderPass::Water);
    assert_eq!(default.num_vertices, 24);
    assert_eq!(default.num_indices, 36);
    assert_eq!(default.vertices_start, 0);
    assert_eq!(water.num_indices, 0);
    assert_eq!(mesh.build.vertex_count(), 24);
}

#[test]
fn adjacent_solid_blocks_cull_the_shared_face() {
    let (reg, mut area) = empty_area(0);
    let stone = reg.id_by_name("stone").unwrap();
    area.set_tile(IVec3::new(5, 5, 5), stone);
    area.set_tile(IVec3::new(6, 5, 5), stone);

    let mesh = build_chunk_mesh(&area, area.chunk(IVec3::ZERO).unwrap(), &reg);
    // 10 faces: both blocks lose the face they share
    assert_eq!(mesh.pass(RenderPass::Default).num_indices, 10 * 6);
}

#[test]
fn merged_transparency_suppresses_same_id_faces_only() {
    let (reg, mut area) = empty_area(0);
    let water = reg.id_by_name("water").unwrap();
    let glass = reg.id_by_name("glass").unwrap();

    area.set_tile(IVec3::new(5, 5, 5), water);
    area.set_tile(IVec3::new(6, 5, 5), water);
    let mesh = build_chunk_mesh(&area, area.chunk(IVec3::ZERO).unwrap(), &reg);
    // same merged id on both sides: internal faces dropped
    assert_eq!(mesh.pass(RenderPass::Water).num_indices, 10 * 6);
    assert_eq!(mesh.pass(RenderPass::Default).num_indices, 0);

    // a differing transparent neighbor gets faces on both sides
    area.set_tile(IVec3::new(6, 5, 5), glass);
    let mesh = build_chunk_mesh(&area, area.chunk(IVec3::ZERO).unwrap(), &reg);
    assert_eq!(mesh.pass(RenderPass::Water).num_indices, 6 * 6);
    assert_eq!(mesh.pass(RenderPass::Default).num_indices, 6 * 6);
}

#[test]
fn passes_share_one_buffer_with_subranges() {
    let (reg, mut area) = empty_area(0);
    let stone = reg.id_by_name("stone").unwrap();
    let water = reg.id_by_name("water").unwrap();
    area.set_tile(IVec3::new(2, 5, 2), stone);
    area.set_tile(IVec3::new(8, 5, 8), water);

    let mesh = build_chunk_mesh(&area, area.chunk(IVec3::ZERO).unwrap(), &reg);
    let default = mesh.pass(RenderPass::Default);
    let water_pass = mesh.pass(RenderPass::Water);
    assert_eq!(default.vertices_start, 0);
    assert_eq!(water_pass.vertices_start, default.num_vertices);
    assert_eq!(water_pass.indices_start, default.num_indices);
    assert_eq!(
        mesh.build.vertex_count(),
        default.num_vertices + water_pass.num_vertices
    );
}

#[test]
fn buried_blocks_emit_no_faces() {
    let (reg, mut area) = empty_area(0);
    let stone = reg.id_by_name("stone").unwrap();
    for x in 4..7 {
        for y in 4..7 {
            for z in 4..7 {
                area.set_tile(IVec3::new(x, y, z), stone);
            }
        }
    }
    let mesh = build_chunk_mesh(&area, area.chunk(IVec3::ZERO).unwrap(), &reg);
    // 3x3x3 cube surface: 6 sides of 9 quads
    assert_eq!(mesh.pass(RenderPass::Default).num_indices, 54 * 6);
    assert_eq!(mesh.build.vertex_count(), 54 * 4);
}

#[test]
fn boundary_faces_cull_through_neighbor_chunks() {
    let (reg, mut area) = empty_area(1);
    let stone = reg.id_by_name("stone").unwrap();
    area.set_tile(IVec3::new(Chunk::SIZE.x - 1, 5, 5), stone);
    area.set_tile(IVec3::new(Chunk::SIZE.x, 5, 5), stone);

    let west = build_chunk_mesh(&area, area.chunk(IVec3::ZERO).unwrap(), &reg);
    let east = build_chunk_mesh(&area, area.chunk(IVec3::new(1, 0, 0)).unwrap(), &reg);
    assert_eq!(west.pass(RenderPass::Default).num_indices, 5 * 6);
    assert_eq!(east.pass(RenderPass::Default).num_indices, 5 * 6);
}

#[test]
fn uv_offsets_flip_atlas_rows_vertically() {
    let (reg, mut area) = empty_area(0);
    let grass = reg.id_by_name("grass").unwrap();
    area.set_tile(IVec3::new(5, 5, 5), grass);

    let mesh = build_chunk_mesh(&area, area.chunk(IVec3::ZERO).unwrap(), &reg);
    // faces are emitted in Direction order; Top is the fifth face.
    // grass top sits at atlas (0, 0), so the flipped v base is 15/16.
    let top_face_uv_start = 4 * 4 * 2;
    let u = mesh.build.uv[top_face_uv_start];
    let v = mesh.build.uv[top_face_uv_start + 1];
    assert!((u - 0.0).abs() < 1e-6);
    assert!((v - 15.0 / 16.0).abs() < 1e-6);
}

#[test]
fn material_stream_carries_normalized_shininess() {
    let (reg, mut area) = empty_area(0);
    let water = reg.id_by_name("water").unwrap();
    area.set_tile(IVec3::new(5, 5, 5), water);

    let mesh = build_chunk_mesh(&area, area.chunk(IVec3::ZERO).unwrap(), &reg);
    assert!((mesh.build.material[3] - 230.0 / 255.0).abs() < 1e-6);
    assert_eq!(mesh.build.material[0], 0.0);
}

#[test]
fn chunk_translation_is_offset_times_size() {
    let t = chunk_translation(IVec3::new(-1, 0, 2));
    assert_eq!(t, IVec3::new(-16, 0, 32).to_vec3());
}

#[test]
fn cache_rebuilds_only_on_version_change() {
    let (reg, mut area) = empty_area(0);
    let stone = reg.id_by_name("stone").unwrap();
    area.set_tile(IVec3::new(5, 5, 5), stone);

    let mut cache = MeshCache::new();
    let mut budget = Budget::unlimited();
    cache.update(&area, &reg, &mut budget);
    assert_eq!(budget.used(), 1);
    let version = cache.get(IVec3::ZERO).unwrap().mesh_version;
    assert!(version.is_some());

    // no version change: second pass does no work
    let mut budget = Budget::unlimited();
    cache.update(&area, &reg, &mut budget);
    assert_eq!(budget.used(), 0);

    // same-value write still bumps the version and remeshes
    area.set_tile(IVec3::new(5, 5, 5), stone);
    let mut budget = Budget::unlimited();
    cache.update(&area, &reg, &mut budget);
    assert_eq!(budget.used(), 1);
    assert_ne!(cache.get(IVec3::ZERO).unwrap().mesh_version, version);
}

#[test]
fn exhausted_budget_keeps_the_stale_mesh() {
    let (reg, mut area) = empty_area(0);
    let stone = reg.id_by_name("stone").unwrap();
    area.set_tile(IVec3::new(5, 5, 5), stone);

    let mut cache = MeshCache::new();
    cache.update(&area, &reg, &mut Budget::unlimited());
    let before = cache.get(IVec3::ZERO).unwrap();
    let (version, indices) = (before.mesh_version, before.build.index_count());

    area.set_tile(IVec3::new(8, 5, 5), stone);
    cache.update(&area, &reg, &mut Budget::new(0));
    let stale = cache.get(IVec3::ZERO).unwrap();
    assert_eq!(stale.mesh_version, version);
    assert_eq!(stale.build.index_count(), indices);

    cache.update(&area, &reg, &mut Budget::unlimited());
    let fresh = cache.get(IVec3::ZERO).unwrap();
    assert_ne!(fresh.mesh_version, version);
    // the second, non-adjacent block contributes six more faces
    assert_eq!(fresh.build.index_count(), indices + 36);
}

#[test]
fn empty_chunk_still_counts_as_meshed() {
    let (reg, area) = empty_area(0);
    let mut cache = MeshCache::new();
    cache.update(&area, &reg, &mut Budget::unlimited());
    let mesh = cache.get(IVec3::ZERO).unwrap();
    assert!(mesh.mesh_version.is_some());
    assert!(mesh.build.is_empty());
    for pass in RenderPass::ALL {
        assert_eq!(mesh.pass(pass).num_indices, 0);
    }
}

#[test]
fn cache_entries_die_with_their_chunk() {
    let (reg, mut area) = empty_area(1);
    let mut cache = MeshCache::new();
    cache.update(&area, &reg, &mut Budget::unlimited());
    assert_eq!(cache.len(), 9);
    assert!(cache.get(IVec3::ZERO).is_some());

    area.center = IVec3::new(100 * Chunk::SIZE.x, 0, 0);
    area.tick(&reg, &mut Budget::unlimited());
    cache.update(&area, &reg, &mut Budget::unlimited());
    assert_eq!(cache.len(), 9);
    assert!(cache.get(IVec3::ZERO).is_none());
    assert!(cache.get(IVec3::new(100, 0, 0)).is_some());
}
