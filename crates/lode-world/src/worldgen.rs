//! Terrain synthesis: warped fractal heightmap, three biomes, trees.

use lode_blocks::{TileId, TileRegistry};
use lode_chunk::Chunk;
use lode_geom::{Direction, IVec3};

use crate::area::Area;
use crate::noise::{Combined, Octave};

pub const WATER_LEVEL: i32 = 64;

const BASE_SCALE: f32 = 1.3;
const TREE_CHANCE: f32 = 0.001;

const SALT_TREE: u32 = 0xA11CE;
const SALT_TRUNK: u32 = 0x7EE701;
const SALT_CANOPY: u32 = 0xC0FFEE;
const SALT_LEAF: u32 = 0x1EAF;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Biome {
    Ocean,
    Beach,
    Plains,
}

/// Tile ids the generator writes, resolved from the registry by name.
struct GenTiles {
    grass: TileId,
    dirt: TileId,
    water: TileId,
    stone: TileId,
    log: TileId,
    leaves: TileId,
    sand: TileId,
}

impl GenTiles {
    fn resolve(reg: &TileRegistry) -> Self {
        let id = |name: &str| {
            reg.id_by_name(name).unwrap_or_else(|| {
                log::warn!("generator tile {:?} not registered; using air", name);
                0
            })
        };
        Self {
            grass: id("grass"),
            dirt: id("dirt"),
            water: id("water"),
            stone: id("stone"),
            log: id("log"),
            leaves: id("leaves"),
            sand: id("sand"),
        }
    }
}

// Order-independent per-column randomness: every draw is a hash of
// (world seed, column, salt), so output does not depend on the order
// columns are visited in.
fn hash2(ix: i32, iz: i32, seed: u32) -> u32 {
    let mut h = (ix as u32).wrapping_mul(0x85eb_ca6b)
        ^ (iz as u32).wrapping_mul(0xc2b2_ae35)
        ^ seed.wrapping_mul(0x27d4_eb2d);
    h ^= h >> 16;
    h = h.wrapping_mul(0x7feb_352d);
    h ^= h >> 15;
    h = h.wrapping_mul(0x846c_a68b);
    h ^= h >> 16;
    h
}

fn rand01(seed: u32, ix: i32, iz: i32, salt: u32) -> f32 {
    let h = hash2(ix, iz, (seed ^ salt).wrapping_add(0x9E37_79B9));
    ((h & 0x00FF_FFFF) as f32) / 16_777_216.0
}

/// Inclusive integer draw.
fn rand_range(seed: u32, ix: i32, iz: i32, salt: u32, min: i32, max: i32) -> i32 {
    let h = hash2(ix, iz, (seed ^ salt).wrapping_add(0x9E37_79B9));
    min + (h % (max - min + 1) as u32) as i32
}

/// Writes `tile` at a position given in coordinates local to the chunk
/// at `offset` (possibly outside it): in-bounds writes go straight to
/// that chunk; writes landing in another loaded chunk go through the
/// area; anything else is queued until its chunk generates.
fn set(area: &mut Area, offset: IVec3, pos: IVec3, tile: TileId, only_empty: bool) {
    let pos_w = offset * Chunk::SIZE + pos;
    if Chunk::in_bounds(pos) {
        if let Some(chunk) = area.chunk_mut(offset) {
            if !only_empty || chunk.tile(pos) == 0 {
                chunk.set_tile(pos, tile);
            }
        }
    } else if area.contains_chunk(Area::to_offset(pos_w)) {
        if !only_empty || area.tile_at(pos_w) == 0 {
            area.set_tile(pos_w, tile);
        }
    } else {
        area.push_pending(pos_w, tile);
    }
}

fn tree(area: &mut Area, tiles: &GenTiles, seed: u32, offset: IVec3, pos: IVec3) {
    let base = offset * Chunk::SIZE;
    let (wx, wz) = (base.x + pos.x, base.z + pos.z);

    let under = area.tile_at(base + pos - IVec3::new(0, 1, 0));
    if under != tiles.grass && under != tiles.dirt {
        return;
    }

    let trunk = rand_range(seed, wx, wz, SALT_TRUNK, 4, 6);
    for y in pos.y..=pos.y + trunk {
        set(area, offset, IVec3::new(pos.x, y, pos.z), tiles.log, true);
    }

    let mut layer = |s: i32, y_start: i32, height: i32, cc: f32| {
        for xx in pos.x - s..=pos.x + s {
            for zz in pos.z - s..=pos.z + s {
                for yy in pos.y + y_start..pos.y + y_start + height {
                    let corner = (xx == pos.x - s || xx == pos.x + s)
                        && (zz == pos.z - s || zz == pos.z + s);
                    let layer_top = yy == pos.y + y_start + height - 1;
                    // corners at the layer top are dropped with chance
                    // `cc` for a rounder canopy
                    if corner
                        && layer_top
                        && rand01(seed, base.x + xx, base.z + zz, SALT_LEAF ^ yy as u32) < cc
                    {
                        continue;
                    }
                    set(area, offset, IVec3::new(xx, yy, zz), tiles.leaves, true);
                }
            }
        }
    };

    let lower = rand_range(seed, wx, wz, SALT_CANOPY, 2, 3);
    let upper = 2;
    layer(2, trunk - 1, lower, 0.4);
    layer(1, trunk - 1 + lower, upper, 0.8);
}

/// Fills the chunk at `offset` (already inserted into `area`).
///
/// Deterministic for a given (seed, offset): noise fields are seeded
/// by arithmetic on the world seed, randomness is per-column hashing.
pub fn generate(area: &mut Area, reg: &TileRegistry, offset: IVec3) {
    let seed = area.seed;
    let tiles = GenTiles::resolve(reg);

    // selector/variance field, and the domain-warped height field
    let n = Octave::new(seed, 6, 0);
    let height = Octave::new(seed, 8, 1);
    let warp = Octave::new(seed, 8, 2);
    let combined = Combined {
        n: &height,
        m: &warp,
    };

    let base = offset * Chunk::SIZE;
    for x in 0..Chunk::SIZE.x {
        for z in 0..Chunk::SIZE.z {
            let (wx, wz) = ((base.x + x) as f32, (base.z + z) as f32);

            let b = combined.sample(wx * BASE_SCALE, wz * BASE_SCALE) / 6.0;
            let hl = (b - 4.0) as i32;
            let hh = (b + 6.0) as i32;

            // selector picks the low surface or the higher of the two;
            // the negated-input sample adds per-column variance
            let t = n.sample(wx, wz);
            let r = n.sample(-wx, -wz);
            let hr = if t > 0.0 { hl } else { hh.max(hl) };
            let h = hr + WATER_LEVEL;

            let biome = if h < WATER_LEVEL {
                Biome::Ocean
            } else if t < 0.08 && h < WATER_LEVEL + 2 {
                Biome::Beach
            } else {
                Biome::Plains
            };

            // depth of the subsurface band under the top block
            let d = (r * 1.4 + 5.0) as i32;

            let top = match biome {
                Biome::Ocean => {
                    if r > 0.1 || t > 0.01 {
                        tiles.sand
                    } else {
                        tiles.dirt
                    }
                }
                Biome::Beach => tiles.sand,
                Biome::Plains => tiles.grass,
            };

            {
                let Some(chunk) = area.chunk_mut(offset) else {
                    return;
                };
                for y in 0..h.min(Chunk::SIZE.y) {
                    let tile = if y == h - 1 {
                        top
                    } else if y > h - d {
                        if top == tiles.grass { tiles.dirt } else { top }
                    } else {
                        tiles.stone
                    };
                    chunk.set_tile(IVec3::new(x, y, z), tile);
                }
                for y in h.max(0)..WATER_LEVEL {
                    chunk.set_tile(IVec3::new(x, y, z), tiles.water);
                }
            }

            if biome == Biome::Plains
                && rand01(seed as u32, base.x + x, base.z + z, SALT_TREE) < TREE_CHANCE
            {
                tree(area, &tiles, seed as u32, offset, IVec3::new(x, h, z));
            }
        }
    }

    // writes queued by earlier chunks may land in this one
    area.apply_pending(offset);

    // neighbors may see new faces across the shared borders
    for dir in Direction::ALL {
        if let Some(c) = area.chunk_mut(offset + dir.delta()) {
            c.version += 1;
        }
    }
}
