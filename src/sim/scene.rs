//! Starting states: rooms and ball configurations
//!
//! Generation is deterministic; randomized builders take a seeded RNG so
//! the same seed reproduces the same scene.

use glam::{Vec2, Vec3};
use rand::Rng;
use rand_pcg::Pcg32;

use super::ball::Ball;
use super::color::{self, Rgba};
use super::wall::Wall;

/// Six-wall axis-aligned cube room with the bottom wall centered at the
/// origin and every normal facing into the room
pub fn cube_room(wall_length: f32) -> Vec<Wall> {
    let size = Vec2::splat(wall_length);
    let half = wall_length / 2.0;

    let mut room = Vec::with_capacity(6);
    let mut push_wall = |center: Vec3, x_rotation: f32, y_rotation: f32| {
        let mut wall = Wall::new(center, x_rotation, y_rotation);
        wall.size = size;
        room.push(wall);
    };
    push_wall(Vec3::ZERO, 0.0, 0.0); // bottom
    push_wall(Vec3::new(0.0, wall_length, 0.0), 180.0, 0.0); // top
    push_wall(Vec3::new(-half, half, 0.0), 90.0, 90.0); // left
    push_wall(Vec3::new(half, half, 0.0), 90.0, -90.0); // right
    push_wall(Vec3::new(0.0, half, -half), 90.0, 0.0); // south
    push_wall(Vec3::new(0.0, half, half), 270.0, 0.0); // north
    room
}

/// Fixed demo: two unit-mass balls on crossing paths plus one heavy red
/// ball drifting low
pub fn three_balls() -> Vec<Ball> {
    let mut heavy = Ball::new(Vec3::new(0.0, 1.5, 1.5), Vec3::new(0.001, 0.001, -0.01));
    heavy.color = color::RED;
    heavy.mass = 10.0;
    vec![
        Ball::new(Vec3::new(-2.0, 5.0, 0.0), Vec3::new(0.02, 0.5, 0.0)),
        Ball::new(Vec3::new(2.0, 5.0, 0.0), Vec3::new(-0.02, -0.3, 0.0)),
        heavy,
    ]
}

/// One large ball plus up to `n_small` copies of `small` packed on a
/// cube-root lattice inside the room
///
/// Lattice sites that would overlap the large ball are skipped. Each
/// small ball keeps the template's speed with a randomized direction.
pub fn brownian_motion(
    room_dimensions: Vec3,
    small: &Ball,
    large: &Ball,
    n_small: usize,
    rng: &mut Pcg32,
) -> Vec<Ball> {
    let mut balls = Vec::with_capacity(n_small + 1);
    balls.push(large.clone());

    let per_row = (n_small as f32).cbrt() as usize;
    let spacing = (room_dimensions - Vec3::splat(2.0 * small.radius)) / (n_small as f32).cbrt();
    let speed = small.velocity().length();

    for i in 0..per_row {
        for j in 0..per_row {
            for k in 0..per_row {
                if balls.len() > n_small {
                    return balls;
                }
                let position = lattice_position(room_dimensions, small.radius, spacing, i, j, k);
                if position.distance(large.position) < small.radius + large.radius {
                    continue;
                }
                let mut ball = Ball::new(position, random_direction(rng) * speed);
                ball.radius = small.radius;
                ball.mass = small.mass;
                ball.color = small.color;
                balls.push(ball);
            }
        }
    }
    balls
}

/// Lattice of up to `n` uniform balls with randomized velocity direction
/// and a randomized blue-ish color
pub fn generate_balls(
    room_dimensions: Vec3,
    ball_radius: f32,
    velocity_magnitude: f32,
    n: usize,
    rng: &mut Pcg32,
) -> Vec<Ball> {
    let mut balls = Vec::with_capacity(n);
    let per_row = (n as f32).cbrt() as usize;
    let spacing = (room_dimensions - Vec3::splat(2.0 * ball_radius)) / (n as f32).cbrt();

    for i in 0..per_row {
        for j in 0..per_row {
            for k in 0..per_row {
                if balls.len() >= n {
                    return balls;
                }
                let position = lattice_position(room_dimensions, ball_radius, spacing, i, j, k);
                let mut ball = Ball::new(position, random_direction(rng) * velocity_magnitude);
                ball.radius = ball_radius;
                ball.color = Rgba::new(
                    rng.random_range(0..=50u8),
                    rng.random_range(0..=50u8),
                    rng.random_range(100..=255u8),
                    255,
                );
                balls.push(ball);
            }
        }
    }
    balls
}

/// Lattice site `(i, j, k)`: x and z centered on the origin, y resting on
/// the floor
fn lattice_position(
    room_dimensions: Vec3,
    radius: f32,
    spacing: Vec3,
    i: usize,
    j: usize,
    k: usize,
) -> Vec3 {
    Vec3::new(
        -room_dimensions.x / 2.0 + radius + i as f32 * spacing.x,
        radius + j as f32 * spacing.y,
        -room_dimensions.z / 2.0 + radius + k as f32 * spacing.z,
    )
}

/// Random unit vector from a cube sample
fn random_direction(rng: &mut Pcg32) -> Vec3 {
    let v = Vec3::new(
        rng.random_range(-1.0f32..1.0),
        rng.random_range(-1.0f32..1.0),
        rng.random_range(-1.0f32..1.0),
    );
    v.try_normalize().unwrap_or(Vec3::X)
}
