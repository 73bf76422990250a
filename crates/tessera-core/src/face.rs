//! Block faces and coordinate axes.

use std::fmt;

use glam::{DVec3, IVec3};
use serde::{Deserialize, Serialize};

/// One of the three coordinate axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in order
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Positive unit vector along this axis
    #[inline]
    #[must_use]
    pub const fn unit(self) -> IVec3 {
        match self {
            Self::X => IVec3::X,
            Self::Y => IVec3::Y,
            Self::Z => IVec3::Z,
        }
    }

    /// Lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the six faces of a block.
///
/// North is -Z, south is +Z, west is -X, east is +X.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl Face {
    /// All faces in index order
    pub const ALL: [Self; 6] = [
        Self::Down,
        Self::Up,
        Self::North,
        Self::South,
        Self::West,
        Self::East,
    ];

    /// The four faces perpendicular to the Y axis
    pub const HORIZONTAL: [Self; 4] = [Self::North, Self::South, Self::West, Self::East];

    /// Create from a face index (0-5)
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 6 {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Face index (0-5)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Outward unit normal
    #[inline]
    #[must_use]
    pub const fn normal(self) -> IVec3 {
        match self {
            Self::Down => IVec3::NEG_Y,
            Self::Up => IVec3::Y,
            Self::North => IVec3::NEG_Z,
            Self::South => IVec3::Z,
            Self::West => IVec3::NEG_X,
            Self::East => IVec3::X,
        }
    }

    /// Face whose normal is exactly `v`
    #[must_use]
    pub fn from_normal(v: IVec3) -> Option<Self> {
        Self::ALL.into_iter().find(|face| face.normal() == v)
    }

    /// Axis the normal lies on
    #[inline]
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Down | Self::Up => Axis::Y,
            Self::North | Self::South => Axis::Z,
            Self::West | Self::East => Axis::X,
        }
    }

    /// Whether the face is one of the four side faces
    #[inline]
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        !matches!(self, Self::Down | Self::Up)
    }

    /// The face on the other side of the block
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /// Face whose normal is closest to a direction.
    ///
    /// Ties resolve in face index order; a zero vector yields `Down`.
    #[must_use]
    pub fn nearest(direction: DVec3) -> Self {
        let mut best = Self::Down;
        let mut best_dot = f64::NEG_INFINITY;
        for face in Self::ALL {
            let dot = face.normal().as_dvec3().dot(direction);
            if dot > best_dot {
                best = face;
                best_dot = dot;
            }
        }
        best
    }

    /// Horizontal face an entity with the given yaw is looking toward.
    ///
    /// Yaw is in degrees, 0 facing south and increasing clockwise seen from
    /// above (south, west, north, east).
    #[must_use]
    pub fn from_yaw(yaw_degrees: f64) -> Self {
        let quadrant = (yaw_degrees / 90.0 + 0.5).floor() as i64;
        match quadrant.rem_euclid(4) {
            0 => Self::South,
            1 => Self::West,
            2 => Self::North,
            _ => Self::East,
        }
    }

    /// Lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Up => "up",
            Self::North => "north",
            Self::South => "south",
            Self::West => "west",
            Self::East => "east",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for face in Face::ALL {
            assert_eq!(Face::from_index(face.index()), Some(face));
        }
        assert_eq!(Face::from_index(6), None);
    }

    #[test]
    fn opposite_normals_cancel() {
        for face in Face::ALL {
            assert_eq!(face.normal() + face.opposite().normal(), IVec3::ZERO);
            assert_eq!(face.opposite().opposite(), face);
            assert_eq!(face.axis(), face.opposite().axis());
        }
    }

    #[test]
    fn from_normal_matches() {
        for face in Face::ALL {
            assert_eq!(Face::from_normal(face.normal()), Some(face));
        }
        assert_eq!(Face::from_normal(IVec3::ONE), None);
    }

    #[test]
    fn nearest_picks_dominant_component() {
        assert_eq!(Face::nearest(DVec3::new(0.2, -0.9, 0.1)), Face::Down);
        assert_eq!(Face::nearest(DVec3::new(0.7, 0.1, -0.3)), Face::East);
        assert_eq!(Face::nearest(DVec3::new(0.0, 0.0, -1.0)), Face::North);
    }

    #[test]
    fn yaw_quadrants() {
        assert_eq!(Face::from_yaw(0.0), Face::South);
        assert_eq!(Face::from_yaw(90.0), Face::West);
        assert_eq!(Face::from_yaw(180.0), Face::North);
        assert_eq!(Face::from_yaw(270.0), Face::East);
        assert_eq!(Face::from_yaw(-90.0), Face::East);
        assert_eq!(Face::from_yaw(44.0), Face::South);
        assert_eq!(Face::from_yaw(46.0), Face::West);
    }

    #[test]
    fn horizontal_faces() {
        for face in Face::HORIZONTAL {
            assert!(face.is_horizontal());
            assert_ne!(face.axis(), Axis::Y);
        }
        assert!(!Face::Up.is_horizontal());
    }
}
