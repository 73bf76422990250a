//! Cube rotations and local-to-global transforms.

use std::ops::Mul;

use glam::{DMat3, DMat4, DVec3, IVec3};

use crate::face::{Axis, Face};

/// An element of the cube symmetry group.
///
/// Stored as the images of the three basis vectors. Every image is a signed
/// unit axis vector and the three images cover all axes, so the group has
/// 48 elements: 24 proper rotations and 24 reflections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rotation {
    x: IVec3,
    y: IVec3,
    z: IVec3,
}

impl Rotation {
    /// The identity rotation
    pub const IDENTITY: Self = Self {
        x: IVec3::X,
        y: IVec3::Y,
        z: IVec3::Z,
    };

    /// Build from the images of the X, Y and Z basis vectors.
    ///
    /// Returns `None` unless the images form a signed permutation.
    #[must_use]
    pub fn from_basis(x: IVec3, y: IVec3, z: IVec3) -> Option<Self> {
        let is_unit_axis = |v: IVec3| v.abs().element_sum() == 1 && v.abs().max_element() == 1;
        if !(is_unit_axis(x) && is_unit_axis(y) && is_unit_axis(z)) {
            return None;
        }
        if x.abs() + y.abs() + z.abs() != IVec3::ONE {
            return None;
        }
        Some(Self { x, y, z })
    }

    /// Quarter turns about a positive axis, counterclockwise looking
    /// down the axis toward the origin.
    #[must_use]
    pub fn quarter_turns(axis: Axis, turns: i32) -> Self {
        let step = match axis {
            Axis::X => Self {
                x: IVec3::X,
                y: IVec3::Z,
                z: IVec3::NEG_Y,
            },
            Axis::Y => Self {
                x: IVec3::NEG_Z,
                y: IVec3::Y,
                z: IVec3::X,
            },
            Axis::Z => Self {
                x: IVec3::Y,
                y: IVec3::NEG_X,
                z: IVec3::Z,
            },
        };
        (0..turns.rem_euclid(4)).fold(Self::IDENTITY, |acc, _| step * acc)
    }

    /// Reflection through the plane perpendicular to an axis
    #[must_use]
    pub const fn mirror(axis: Axis) -> Self {
        let mut m = Self::IDENTITY;
        match axis {
            Axis::X => m.x = IVec3::NEG_X,
            Axis::Y => m.y = IVec3::NEG_Y,
            Axis::Z => m.z = IVec3::NEG_Z,
        }
        m
    }

    /// Proper rotation taking face `from` onto face `to` along the shortest
    /// path. Opposite faces turn half way about Y, or about X when the
    /// faces are vertical.
    #[must_use]
    pub fn face_to_face(from: Face, to: Face) -> Self {
        if from == to {
            return Self::IDENTITY;
        }
        if from == to.opposite() {
            let axis = if from.is_horizontal() { Axis::Y } else { Axis::X };
            return Self::quarter_turns(axis, 2);
        }
        let (a, b) = (from.normal(), to.normal());
        let pivot = IVec3::new(
            a.y * b.z - a.z * b.y,
            a.z * b.x - a.x * b.z,
            a.x * b.y - a.y * b.x,
        );
        let axis = if pivot.x != 0 {
            Axis::X
        } else if pivot.y != 0 {
            Axis::Y
        } else {
            Axis::Z
        };
        let turns = if pivot.element_sum() > 0 { 1 } else { 3 };
        Self::quarter_turns(axis, turns)
    }

    /// Every element of the group, in a stable order.
    pub fn all() -> impl Iterator<Item = Self> {
        const PERMUTATIONS: [[usize; 3]; 6] = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        let units = [IVec3::X, IVec3::Y, IVec3::Z];
        PERMUTATIONS.into_iter().flat_map(move |perm| {
            (0..8).map(move |signs: i32| {
                let sign = |bit: i32| if signs & (1 << bit) == 0 { 1 } else { -1 };
                Self {
                    x: units[perm[0]] * sign(0),
                    y: units[perm[1]] * sign(1),
                    z: units[perm[2]] * sign(2),
                }
            })
        })
    }

    /// Rotate an integer vector
    #[inline]
    #[must_use]
    pub fn apply_ivec3(&self, v: IVec3) -> IVec3 {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    /// Rotate a vector
    #[inline]
    #[must_use]
    pub fn apply(&self, v: DVec3) -> DVec3 {
        self.x.as_dvec3() * v.x + self.y.as_dvec3() * v.y + self.z.as_dvec3() * v.z
    }

    /// Face that `face` is carried onto
    #[must_use]
    pub fn apply_face(&self, face: Face) -> Face {
        // Signed permutations always map a face normal onto a face normal.
        Face::from_normal(self.apply_ivec3(face.normal())).unwrap_or(face)
    }

    /// Inverse element (the transpose)
    #[must_use]
    pub const fn inverse(&self) -> Self {
        Self {
            x: IVec3::new(self.x.x, self.y.x, self.z.x),
            y: IVec3::new(self.x.y, self.y.y, self.z.y),
            z: IVec3::new(self.x.z, self.y.z, self.z.z),
        }
    }

    /// Determinant: 1 for rotations, -1 for reflections
    #[must_use]
    pub const fn determinant(&self) -> i32 {
        let (a, b, c) = (self.x, self.y, self.z);
        a.x * (b.y * c.z - b.z * c.y) - b.x * (a.y * c.z - a.z * c.y) + c.x * (a.y * b.z - a.z * b.y)
    }

    /// Whether this element reverses handedness
    #[inline]
    #[must_use]
    pub const fn is_reflection(&self) -> bool {
        self.determinant() < 0
    }

    /// As a floating point matrix
    #[must_use]
    pub fn to_dmat3(&self) -> DMat3 {
        DMat3::from_cols(self.x.as_dvec3(), self.y.as_dvec3(), self.z.as_dvec3())
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// `a * b` applies `b` first, then `a`.
impl Mul for Rotation {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            x: self.apply_ivec3(rhs.x),
            y: self.apply_ivec3(rhs.y),
            z: self.apply_ivec3(rhs.z),
        }
    }
}

/// Local-to-global transform: a cube rotation followed by a translation.
///
/// `apply_point(p) = origin + rotation * p`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    /// Where the local origin lands in global space
    pub origin: DVec3,
    /// Orientation of the local frame
    pub rotation: Rotation,
}

impl Transform {
    /// The identity transform
    pub const IDENTITY: Self = Self {
        origin: DVec3::ZERO,
        rotation: Rotation::IDENTITY,
    };

    /// Anchor a rotated local frame at `origin`
    #[inline]
    #[must_use]
    pub const fn new(origin: DVec3, rotation: Rotation) -> Self {
        Self { origin, rotation }
    }

    /// Pure translation
    #[inline]
    #[must_use]
    pub const fn from_origin(origin: DVec3) -> Self {
        Self::new(origin, Rotation::IDENTITY)
    }

    /// Map a local point to global space
    #[inline]
    #[must_use]
    pub fn apply_point(&self, p: DVec3) -> DVec3 {
        self.origin + self.rotation.apply(p)
    }

    /// Map a local direction to global space (ignores translation)
    #[inline]
    #[must_use]
    pub fn apply_direction(&self, v: DVec3) -> DVec3 {
        self.rotation.apply(v)
    }

    /// Map a local face to the global face it ends up on
    #[inline]
    #[must_use]
    pub fn apply_face(&self, face: Face) -> Face {
        self.rotation.apply_face(face)
    }

    /// Map a local box to the global box that bounds it
    #[must_use]
    pub fn apply_aabb(&self, aabb: &Aabb) -> Aabb {
        let a = self.apply_point(aabb.min);
        let b = self.apply_point(aabb.max);
        Aabb::new(a.min(b), a.max(b))
    }

    /// Global-to-local transform
    #[must_use]
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.inverse();
        Self::new(-rotation.apply(self.origin), rotation)
    }

    /// Apply `self`, then `next`
    #[inline]
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        next * self
    }

    /// As a homogeneous matrix
    #[must_use]
    pub fn to_dmat4(&self) -> DMat4 {
        let m = self.rotation.to_dmat3();
        DMat4::from_cols(
            m.x_axis.extend(0.0),
            m.y_axis.extend(0.0),
            m.z_axis.extend(0.0),
            self.origin.extend(1.0),
        )
    }
}

/// `a * b` applies `b` first, then `a`.
impl Mul for Transform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.apply_point(rhs.origin),
            self.rotation * rhs.rotation,
        )
    }
}

/// Axis-aligned box in block-local or world space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: DVec3,
    /// Maximum corner
    pub max: DVec3,
}

impl Aabb {
    /// Box spanning two corners; `min` must not exceed `max` on any axis
    #[inline]
    #[must_use]
    pub const fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Edge lengths
    #[inline]
    #[must_use]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Whether the point lies inside or on the boundary
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}
