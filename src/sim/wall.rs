//! Wall plane primitive
//!
//! A wall is a rectangular section of the XZ plane, rotated about the x
//! axis then the y axis and translated to its center. Collision math
//! treats the wall as its infinite plane; the rectangular extent only
//! matters to room construction and drawing consumers.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::color::{self, Rgba};
use crate::consts::WALL_SIZE;

/// A rectangular section of a rotated, translated plane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    /// Center of the rectangle, on the plane
    pub center: Vec3,
    /// Rotation about the x axis, degrees
    x_rotation: f32,
    /// Rotation about the y axis, degrees
    y_rotation: f32,
    // Cached radians, kept in sync by the setters
    x_rotation_radians: f32,
    y_rotation_radians: f32,
    /// Rectangular extent (width, depth)
    pub size: Vec2,
    pub color: Rgba,
}

impl Wall {
    pub fn new(center: Vec3, x_rotation: f32, y_rotation: f32) -> Self {
        Self {
            center,
            x_rotation,
            y_rotation,
            x_rotation_radians: x_rotation.to_radians(),
            y_rotation_radians: y_rotation.to_radians(),
            size: Vec2::splat(WALL_SIZE),
            color: color::WALL_TINT,
        }
    }

    /// Rotation about the x axis, degrees
    #[inline]
    pub fn x_rotation(&self) -> f32 {
        self.x_rotation
    }

    /// Rotation about the y axis, degrees
    #[inline]
    pub fn y_rotation(&self) -> f32 {
        self.y_rotation
    }

    /// Set the x rotation; the cached radian value updates with it
    pub fn set_x_rotation(&mut self, degrees: f32) {
        self.x_rotation = degrees;
        self.x_rotation_radians = degrees.to_radians();
    }

    /// Set the y rotation; the cached radian value updates with it
    pub fn set_y_rotation(&mut self, degrees: f32) {
        self.y_rotation = degrees;
        self.y_rotation_radians = degrees.to_radians();
    }

    /// Unit vector normal to the wall plane
    ///
    /// The normal starts along +Y and is rotated about x, then y. The
    /// rotation order must match `inplane_vector` and the drawing
    /// transform.
    pub fn normal_vector(&self) -> Vec3 {
        let (rx, ry) = (self.x_rotation_radians, self.y_rotation_radians);
        Vec3::new(ry.sin() * rx.sin(), rx.cos(), ry.cos() * rx.sin())
    }

    /// Unit vector lying in the wall plane (the rotated +Z axis)
    pub fn inplane_vector(&self) -> Vec3 {
        let (rx, ry) = (self.x_rotation_radians, self.y_rotation_radians);
        Vec3::new(ry.sin() * rx.cos(), -rx.sin(), ry.cos() * rx.cos())
    }

    /// Unsigned distance from `point` to the infinite plane containing
    /// the wall. The rectangular extent is not tested.
    pub fn distance_to(&self, point: Vec3) -> f32 {
        let normal = self.normal_vector();
        let displacement_along_normal = -normal.dot(self.center);
        // normal is unit length; the division guards against drift only
        (normal.dot(point) + displacement_along_normal).abs() / normal.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_normal_is_unit_at_axis_angles() {
        for &x in &[0.0f32, 90.0, 180.0, 270.0] {
            for &y in &[0.0f32, 90.0, 180.0, 270.0] {
                let wall = Wall::new(Vec3::ZERO, x, y);
                let n = wall.normal_vector();
                assert!(
                    (n.length() - 1.0).abs() < EPS,
                    "|n| = {} at ({x}, {y})",
                    n.length()
                );
            }
        }
    }

    #[test]
    fn test_normal_and_inplane_orthogonal() {
        for &(x, y) in &[(0.0f32, 0.0f32), (90.0, 90.0), (45.0, 30.0), (270.0, -90.0)] {
            let wall = Wall::new(Vec3::ZERO, x, y);
            let dot = wall.normal_vector().dot(wall.inplane_vector());
            assert!(dot.abs() < EPS, "n . u = {dot} at ({x}, {y})");
        }
    }

    #[test]
    fn test_flat_wall_normal_is_up() {
        let wall = Wall::new(Vec3::ZERO, 0.0, 0.0);
        let n = wall.normal_vector();
        assert!((n - Vec3::Y).length() < EPS);
    }

    #[test]
    fn test_distance_to_center_is_zero() {
        let mut wall = Wall::new(Vec3::new(3.0, -2.0, 7.5), 90.0, 45.0);
        assert!(wall.distance_to(wall.center).abs() < EPS);
        wall.set_x_rotation(12.0);
        assert!(wall.distance_to(wall.center).abs() < EPS);
    }

    #[test]
    fn test_distance_to_offset_point() {
        // Floor at the origin: plane distance is |y|
        let wall = Wall::new(Vec3::ZERO, 0.0, 0.0);
        assert!((wall.distance_to(Vec3::new(2.0, 5.0, -3.0)) - 5.0).abs() < EPS);
        assert!((wall.distance_to(Vec3::new(0.0, -4.0, 0.0)) - 4.0).abs() < EPS);
    }

    #[test]
    fn test_setters_keep_radians_in_sync() {
        let mut wall = Wall::new(Vec3::ZERO, 0.0, 0.0);
        wall.set_x_rotation(90.0);
        wall.set_y_rotation(90.0);
        assert_eq!(wall.x_rotation(), 90.0);
        assert_eq!(wall.y_rotation(), 90.0);
        // x then y rotation carries +Y onto +X
        assert!((wall.normal_vector() - Vec3::X).length() < EPS);
    }

    proptest! {
        #[test]
        fn normal_is_unit_for_any_angles(x in -720.0f32..720.0, y in -720.0f32..720.0) {
            let wall = Wall::new(Vec3::ZERO, x, y);
            prop_assert!((wall.normal_vector().length() - 1.0).abs() < EPS);
            prop_assert!((wall.inplane_vector().length() - 1.0).abs() < EPS);
        }
    }
}
