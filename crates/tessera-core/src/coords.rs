//! Block coordinates in world space.

use bytemuck::{Pod, Zeroable};
use glam::{DVec3, IVec3};
use serde::{Deserialize, Serialize};

use crate::face::Face;

/// Integer position of a block in world coordinates.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    /// The world origin
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Create a new block position
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Position offset by a vector
    #[inline]
    #[must_use]
    pub const fn offset(self, delta: IVec3) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.z + delta.z)
    }

    /// The adjacent position across the given face
    #[inline]
    #[must_use]
    pub const fn neighbor(self, face: Face) -> Self {
        self.offset(face.normal())
    }

    /// Get the six adjacent positions, in face index order
    #[must_use]
    pub fn neighbors(self) -> [Self; 6] {
        Face::ALL.map(|face| self.neighbor(face))
    }

    /// Minimum corner of the block as floating point
    #[inline]
    #[must_use]
    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }

    /// Geometric centre of the block
    #[inline]
    #[must_use]
    pub fn center(self) -> DVec3 {
        self.to_dvec3() + DVec3::splat(0.5)
    }
}

impl From<IVec3> for BlockPos {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<DVec3> for BlockPos {
    fn from(v: DVec3) -> Self {
        Self::new(v.x.floor() as i32, v.y.floor() as i32, v.z.floor() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_follows_face_normal() {
        let pos = BlockPos::new(10, 64, -3);
        assert_eq!(pos.neighbor(Face::Up), BlockPos::new(10, 65, -3));
        assert_eq!(pos.neighbor(Face::North), BlockPos::new(10, 64, -4));
        assert_eq!(pos.neighbor(Face::East), BlockPos::new(11, 64, -3));
    }

    #[test]
    fn neighbors_are_reversible() {
        let pos = BlockPos::new(-7, 2, 5);
        for (face, n) in Face::ALL.into_iter().zip(pos.neighbors()) {
            assert_eq!(n.neighbor(face.opposite()), pos);
        }
    }

    #[test]
    fn center_is_half_offset() {
        let pos = BlockPos::new(1, -2, 3);
        assert_eq!(pos.center(), DVec3::new(1.5, -1.5, 3.5));
    }

    #[test]
    fn from_negative_float_floors() {
        let pos = BlockPos::from(DVec3::new(-0.25, 3.9, -1.0));
        assert_eq!(pos, BlockPos::new(-1, 3, -1));
    }
}
