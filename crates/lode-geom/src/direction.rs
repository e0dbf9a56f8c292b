use crate::{IVec3, Vec3};

/// The six axis-aligned face directions.
///
/// Variant order is load-bearing: it is the face order of the mesher's
/// cube tables and the priority order of chunk border classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// +z
    South = 0,
    /// -z
    North = 1,
    /// +x
    East = 2,
    /// -x
    West = 3,
    /// +y
    Top = 4,
    /// -y
    Bottom = 5,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::South,
        Direction::North,
        Direction::East,
        Direction::West,
        Direction::Top,
        Direction::Bottom,
    ];

    pub const COUNT: usize = 6;

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Integer grid delta when stepping out of this face.
    #[inline]
    pub fn delta(self) -> IVec3 {
        match self {
            Direction::South => IVec3::new(0, 0, 1),
            Direction::North => IVec3::new(0, 0, -1),
            Direction::East => IVec3::new(1, 0, 0),
            Direction::West => IVec3::new(-1, 0, 0),
            Direction::Top => IVec3::new(0, 1, 0),
            Direction::Bottom => IVec3::new(0, -1, 0),
        }
    }

    /// Unit-normal vector for this face.
    #[inline]
    pub fn normal(self) -> Vec3 {
        self.delta().to_vec3()
    }

    /// Inverse of [`Direction::delta`]; `None` for any other vector.
    #[inline]
    pub fn from_delta(v: IVec3) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.delta() == v)
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::South => Direction::North,
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
        }
    }
}
