//! Ball entity and sphere-vs-plane collision response
//!
//! Balls carry Verlet state: current and previous position. Velocity is
//! never stored; it is derived as `position - past_position` each step,
//! and collision response changes velocity by rewriting `past_position`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::color::{self, Rgba};
use super::wall::Wall;
use crate::consts::{BALL_MASS, BALL_RADIUS, DT};

/// A rigid sphere
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec3,
    /// Position one logical step ago
    pub past_position: Vec3,
    /// Constant acceleration applied every step
    pub acceleration: Vec3,
    pub radius: f32,
    pub mass: f32,
    pub color: Rgba,
    /// Record every integrated position into `path`
    pub track_path: bool,
    /// Trajectory log for path visualization (unbounded)
    #[serde(skip)]
    pub path: Vec<Vec3>,
}

impl Ball {
    /// Create a ball whose first `velocity()` equals `velocity`
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self {
            position,
            past_position: position - velocity * DT,
            acceleration: Vec3::ZERO,
            radius: BALL_RADIUS,
            mass: BALL_MASS,
            color: color::BLUE,
            track_path: false,
            path: Vec::new(),
        }
    }

    /// Velocity by finite difference. No side effects.
    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.position - self.past_position
    }

    /// Rewrite `past_position` so the next `velocity()` returns `velocity`
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.past_position = self.position - velocity * DT;
    }

    /// Verlet step: `position += velocity*DT + acceleration*DT^2`
    pub fn update_position(&mut self) {
        let velocity = self.velocity();
        self.past_position = self.position;
        self.position += velocity * DT + self.acceleration * (DT * DT);
        if self.track_path {
            self.path.push(self.position);
        }
    }

    /// Reflect off a wall plane when the sphere penetrates it
    ///
    /// Triggers when the plane distance drops to the radius. The normal
    /// velocity component is flipped, then the position is pushed out
    /// along the normal by whatever penetration the reflected velocity
    /// would still leave next step. Walls have effectively infinite mass,
    /// so the bounce is perfectly elastic. A miss mutates nothing.
    pub fn handle_wall_collision(&mut self, wall: &Wall) {
        if wall.distance_to(self.position) > self.radius {
            return;
        }
        let velocity = self.velocity();
        let normal = wall.normal_vector();

        // normal is unit length, so the dot product is the full normal
        // component of the velocity
        let normal_speed = velocity.dot(normal);
        let new_velocity = velocity - normal * (2.0 * normal_speed);

        let next_position = self.position + new_velocity * DT;
        let overlap = self.radius - wall.distance_to(next_position);
        if overlap > 0.0 {
            self.position += normal * overlap;
        }

        self.set_velocity(new_velocity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_velocity_matches_initial() {
        let ball = Ball::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.1, -0.2, 0.3));
        assert!((ball.velocity() - Vec3::new(0.1, -0.2, 0.3)).length() < EPS);
    }

    #[test]
    fn test_set_velocity_round_trips() {
        let mut ball = Ball::new(Vec3::ZERO, Vec3::ZERO);
        ball.set_velocity(Vec3::new(-0.4, 0.0, 0.25));
        assert!((ball.velocity() - Vec3::new(-0.4, 0.0, 0.25)).length() < EPS);
    }

    #[test]
    fn test_update_position_integrates_acceleration() {
        let mut ball = Ball::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.1, 0.0, 0.0));
        ball.acceleration = Vec3::new(0.0, -0.01, 0.0);
        ball.update_position();
        assert!((ball.position - Vec3::new(0.1, 4.99, 0.0)).length() < EPS);
        // velocity picked up the acceleration for the next step
        assert!((ball.velocity() - Vec3::new(0.1, -0.01, 0.0)).length() < EPS);
    }

    #[test]
    fn test_wall_bounce_flips_normal_component_only() {
        // Floor at the origin, ball resting exactly one radius above it
        let floor = Wall::new(Vec3::ZERO, 0.0, 0.0);
        let mut ball = Ball::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.3, -0.2, 0.1));
        ball.handle_wall_collision(&floor);
        let v = ball.velocity();
        assert!((v.x - 0.3).abs() < EPS);
        assert!((v.y - 0.2).abs() < EPS);
        assert!((v.z - 0.1).abs() < EPS);
    }

    #[test]
    fn test_stationary_ball_on_wall_stays_put() {
        let floor = Wall::new(Vec3::ZERO, 0.0, 0.0);
        let mut ball = Ball::new(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO);
        ball.handle_wall_collision(&floor);
        assert!((ball.position - Vec3::new(0.0, 1.0, 0.0)).length() < EPS);
        assert!(ball.velocity().length() < EPS);
    }

    #[test]
    fn test_wall_collision_noop_when_clear() {
        let floor = Wall::new(Vec3::ZERO, 0.0, 0.0);
        let mut ball = Ball::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -0.05, 0.0));
        let before = ball.clone();
        ball.handle_wall_collision(&floor);
        assert_eq!(ball, before);
    }

    #[test]
    fn test_overlap_correction_pushes_out() {
        // Ball sunk half a radius into the floor, sliding almost parallel
        let floor = Wall::new(Vec3::ZERO, 0.0, 0.0);
        let mut ball = Ball::new(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.2, -0.001, 0.0));
        ball.handle_wall_collision(&floor);
        // reflected velocity alone cannot clear the plane next step, so
        // the position is nudged out along the normal
        let next = ball.position + ball.velocity();
        assert!(floor.distance_to(next) >= ball.radius - 1e-4);
    }

    #[test]
    fn test_path_tracking_records_positions() {
        let mut ball = Ball::new(Vec3::ZERO, Vec3::new(0.1, 0.0, 0.0));
        ball.track_path = true;
        for _ in 0..3 {
            ball.update_position();
        }
        assert_eq!(ball.path.len(), 3);
        assert!((ball.path[2] - Vec3::new(0.3, 0.0, 0.0)).length() < EPS);
    }
}
