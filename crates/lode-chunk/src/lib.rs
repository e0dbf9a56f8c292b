//! Fixed-size voxel chunk with bit-packed multi-field cells.
#![forbid(unsafe_code)]

use lode_blocks::TileId;
use lode_geom::{Direction, IVec3};

/// A typed view into one region of a cell word. Cells carry several
/// fields side by side; every accessor goes through a descriptor so
/// new fields can be added without touching existing ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub offset: u32,
    pub bits: u32,
}

impl Field {
    pub const fn new(offset: u32, bits: u32) -> Self {
        assert!(bits >= 1 && offset + bits <= 64);
        Self { offset, bits }
    }

    #[inline]
    pub const fn mask(self) -> u64 {
        if self.bits >= 64 {
            u64::MAX
        } else {
            ((1u64 << self.bits) - 1) << self.offset
        }
    }

    #[inline]
    pub const fn decode(self, word: u64) -> u64 {
        (word & self.mask()) >> self.offset
    }

    /// Writes `value` into this field of `word`, leaving the other
    /// bits untouched.
    #[inline]
    pub const fn encode(self, word: u64, value: u64) -> u64 {
        (word & !self.mask()) | ((value << self.offset) & self.mask())
    }
}

/// The whole cell word.
pub const RAW: Field = Field::new(0, 64);

/// The tile id field.
pub const TILE: Field = Field::new(0, 16);

#[derive(Clone, Debug)]
pub struct Chunk {
    /// Position on the chunk grid (which chunk, not which block).
    pub offset: IVec3,
    /// World-space block position of this chunk's minimum corner.
    pub offset_blocks: IVec3,
    /// Bumped on every write through [`Chunk::set`], same-value writes
    /// included. Derived state (meshes) compares against it.
    pub version: u64,
    cells: Vec<u64>,
}

impl Chunk {
    pub const SIZE: IVec3 = IVec3::new(16, 128, 16);
    pub const VOLUME: usize =
        (Self::SIZE.x * Self::SIZE.y * Self::SIZE.z) as usize;

    pub fn new(offset: IVec3) -> Self {
        Self {
            offset,
            offset_blocks: offset * Self::SIZE,
            version: 0,
            cells: vec![0; Self::VOLUME],
        }
    }

    #[inline]
    pub fn idx(pos: IVec3) -> usize {
        (pos.x * Self::SIZE.y * Self::SIZE.z + pos.y * Self::SIZE.z + pos.z) as usize
    }

    /// Fast-path read. Callers must pass a position in `[0, SIZE)`;
    /// out-of-range positions are not checked here.
    #[inline]
    pub fn get(&self, field: Field, pos: IVec3) -> u64 {
        field.decode(self.cells[Self::idx(pos)])
    }

    /// Fast-path write; bumps the chunk version. Same bounds contract
    /// as [`Chunk::get`].
    #[inline]
    pub fn set(&mut self, field: Field, pos: IVec3, value: u64) {
        self.version += 1;
        let cell = &mut self.cells[Self::idx(pos)];
        *cell = field.encode(*cell, value);
    }

    #[inline]
    pub fn tile(&self, pos: IVec3) -> TileId {
        self.get(TILE, pos) as TileId
    }

    #[inline]
    pub fn set_tile(&mut self, pos: IVec3, tile: TileId) {
        self.set(TILE, pos, tile as u64);
    }

    /// Per-tick hook for future per-chunk dynamic behavior.
    pub fn tick(&mut self) {}

    #[inline]
    pub fn in_bounds(pos: IVec3) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && pos.z >= 0
            && pos.x < Self::SIZE.x
            && pos.y < Self::SIZE.y
            && pos.z < Self::SIZE.z
    }

    #[inline]
    pub fn on_border(pos: IVec3) -> bool {
        pos.x == 0
            || pos.y == 0
            || pos.z == 0
            || pos.x == Self::SIZE.x - 1
            || pos.y == Self::SIZE.y - 1
            || pos.z == Self::SIZE.z - 1
    }

    /// The face of the chunk `pos` lies on, or `None` in the interior.
    /// A corner matches several faces; only the first in the fixed
    /// priority order (west, bottom, north, east, top, south) is
    /// returned, so the other neighbors sharing the corner are not
    /// notified on a border write.
    #[inline]
    pub fn border(pos: IVec3) -> Option<Direction> {
        if pos.x == 0 {
            Some(Direction::West)
        } else if pos.y == 0 {
            Some(Direction::Bottom)
        } else if pos.z == 0 {
            Some(Direction::North)
        } else if pos.x == Self::SIZE.x - 1 {
            Some(Direction::East)
        } else if pos.y == Self::SIZE.y - 1 {
            Some(Direction::Top)
        } else if pos.z == Self::SIZE.z - 1 {
            Some(Direction::South)
        } else {
            None
        }
    }
}
