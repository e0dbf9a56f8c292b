use hashbrown::HashMap;

use lode_blocks::{TileId, TileRegistry};
use lode_chunk::{Chunk, Field, RAW, TILE};
use lode_geom::{Aabb, Aabbi, IVec3, Vec3};

use crate::budget::Budget;

/// Fills a freshly inserted chunk. Receives the owning area so it can
/// write across chunk boundaries and queue writes for chunks that do
/// not exist yet.
pub type GeneratorFn = fn(&mut Area, &TileRegistry, IVec3);

/// Streaming manager: owns every loaded chunk, keyed by chunk-grid
/// offset. A chunk lives exactly as long as its key is present.
pub struct Area {
    chunks: HashMap<IVec3, Chunk>,
    /// Writes that resolved to chunks not loaded at the time; retried
    /// whenever a new chunk generates.
    pending: Vec<(IVec3, TileId)>,
    generator: GeneratorFn,
    /// Streaming center, world/block coordinates (typically the
    /// player position).
    pub center: IVec3,
    /// Chunk-grid radius of the streamed (x,z) neighborhood.
    pub radius: i32,
    pub seed: i32,
}

impl Area {
    pub fn new(seed: i32, radius: i32, generator: GeneratorFn) -> Self {
        Self {
            chunks: HashMap::new(),
            pending: Vec::new(),
            generator,
            center: IVec3::ZERO,
            radius,
            seed,
        }
    }

    /// An area streaming the built-in terrain generator.
    pub fn with_terrain(seed: i32, radius: i32) -> Self {
        Self::new(seed, radius, crate::worldgen::generate)
    }

    // --- coordinate helpers ---

    /// World block position to position within its chunk. Euclidean
    /// wrap keeps negatives correct: world x = -1 is local x = 15.
    #[inline]
    pub fn to_chunk_pos(pos: IVec3) -> IVec3 {
        IVec3::new(
            pos.x.rem_euclid(Chunk::SIZE.x),
            pos.y.rem_euclid(Chunk::SIZE.y),
            pos.z.rem_euclid(Chunk::SIZE.z),
        )
    }

    /// World block position to chunk-grid offset.
    #[inline]
    pub fn to_offset(pos: IVec3) -> IVec3 {
        IVec3::new(
            pos.x.div_euclid(Chunk::SIZE.x),
            pos.y.div_euclid(Chunk::SIZE.y),
            pos.z.div_euclid(Chunk::SIZE.z),
        )
    }

    /// Continuous world position to the block containing it.
    #[inline]
    pub fn to_tile(pos: Vec3) -> IVec3 {
        pos.floor()
    }

    // --- chunk map ---

    #[inline]
    pub fn contains_chunk(&self, offset: IVec3) -> bool {
        self.chunks.contains_key(&offset)
    }

    #[inline]
    pub fn chunk(&self, offset: IVec3) -> Option<&Chunk> {
        self.chunks.get(&offset)
    }

    #[inline]
    pub fn chunk_mut(&mut self, offset: IVec3) -> Option<&mut Chunk> {
        self.chunks.get_mut(&offset)
    }

    pub fn chunks(&self) -> impl Iterator<Item = (&IVec3, &Chunk)> {
        self.chunks.iter()
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    // --- world-space access ---

    /// Reads a field at a world position; a missing chunk reads as the
    /// field's zero value so callers never crash on a streaming edge.
    #[inline]
    pub fn read(&self, field: Field, pos: IVec3) -> u64 {
        match self.chunks.get(&Self::to_offset(pos)) {
            Some(c) => c.get(field, Self::to_chunk_pos(pos)),
            None => 0,
        }
    }

    /// Writes a field at a world position; a missing chunk drops the
    /// write. A write on a chunk face also bumps the version of the
    /// single neighbor sharing that face (its visible faces changed).
    pub fn write(&mut self, field: Field, pos: IVec3, value: u64) {
        let offset = Self::to_offset(pos);
        let local = Self::to_chunk_pos(pos);
        if !self.chunks.contains_key(&offset) {
            return;
        }
        if let Some(d) = Chunk::border(local) {
            if let Some(n) = self.chunks.get_mut(&(offset + d.delta())) {
                n.version += 1;
            }
        }
        if let Some(c) = self.chunks.get_mut(&offset) {
            c.set(field, local, value);
        }
    }

    #[inline]
    pub fn tile_at(&self, pos: IVec3) -> TileId {
        self.read(TILE, pos) as TileId
    }

    #[inline]
    pub fn raw_at(&self, pos: IVec3) -> u64 {
        self.read(RAW, pos)
    }

    #[inline]
    pub fn set_tile(&mut self, pos: IVec3, tile: TileId) {
        self.write(TILE, pos, tile as u64);
    }

    /// Reads from `chunk` when `pos` is inside it, otherwise resolves
    /// `pos` through the area. Meshing and generation use this to see
    /// across chunk boundaries without tracking the owner themselves.
    #[inline]
    pub fn or_area(&self, chunk: &Chunk, field: Field, pos: IVec3) -> u64 {
        if Chunk::in_bounds(pos) {
            chunk.get(field, pos)
        } else {
            self.read(field, chunk.offset_blocks + pos)
        }
    }

    // --- out-of-bounds queue ---

    pub fn push_pending(&mut self, pos: IVec3, tile: TileId) {
        self.pending.push((pos, tile));
    }

    pub fn pending(&self) -> &[(IVec3, TileId)] {
        &self.pending
    }

    /// Applies and removes every queued write that resolves into the
    /// chunk at `offset`. Entries for still-missing chunks stay queued.
    pub fn apply_pending(&mut self, offset: IVec3) {
        let mut i = 0;
        while i < self.pending.len() {
            let (pos, tile) = self.pending[i];
            if Self::to_offset(pos) == offset {
                let local = Self::to_chunk_pos(pos);
                if let Some(c) = self.chunks.get_mut(&offset) {
                    c.set(TILE, local, tile as u64);
                }
                self.pending.remove(i);
            } else {
                i += 1;
            }
        }
    }

    // --- streaming ---

    /// One streaming step: unload chunks outside the (x,z) rectangle
    /// around the center, then load+generate missing ones while the
    /// per-frame budget admits. Chunk height spans the world, so y is
    /// never filtered.
    pub fn tick(&mut self, reg: &TileRegistry, budget: &mut Budget) {
        let center_offset = Self::to_offset(self.center);
        let min = center_offset - IVec3::new(self.radius, 0, self.radius);
        let max = center_offset + IVec3::new(self.radius, 0, self.radius);

        self.chunks
            .retain(|o, _| o.x >= min.x && o.x <= max.x && o.z >= min.z && o.z <= max.z);

        let generate = self.generator;
        for x in min.x..=max.x {
            for z in min.z..=max.z {
                let offset = IVec3::new(x, 0, z);
                if !self.chunks.contains_key(&offset) && budget.admit() {
                    self.chunks.insert(offset, Chunk::new(offset));
                    generate(self, reg, offset);
                }
            }
        }

        for (_, chunk) in self.chunks.iter_mut() {
            chunk.tick();
        }
    }

    // --- collision support ---

    /// Collects collision boxes of solid tiles in an inclusive block
    /// region into `dest`, returning the count written. A full buffer
    /// truncates the scan; that is a soft condition, but it is logged
    /// so callers can size their buffers.
    pub fn get_colliders(&self, reg: &TileRegistry, dest: &mut [Aabb], region: Aabbi) -> usize {
        let mut n = 0;
        for x in region.min.x..=region.max.x {
            for y in region.min.y..=region.max.y {
                for z in region.min.z..=region.max.z {
                    let pos = IVec3::new(x, y, z);
                    let tile = self.tile_at(pos);
                    if tile == 0 {
                        continue;
                    }
                    let Some(ty) = reg.get(tile) else { continue };
                    if !ty.solid {
                        continue;
                    }
                    if n >= dest.len() {
                        log::error!("no more space in colliders buffer ({} boxes)", dest.len());
                        return n;
                    }
                    dest[n] = ty.aabb(pos);
                    n += 1;
                }
            }
        }
        n
    }
}
