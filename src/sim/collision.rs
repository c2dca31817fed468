//! Pairwise sphere-sphere collision response
//!
//! A free function mutating both balls in place: mass-weighted elastic
//! exchange on the contact normal with tangential components untouched,
//! then a positional separation for whatever overlap the new velocities
//! would leave next step.

use super::ball::Ball;
use crate::consts::DT;

/// Below this center distance the contact normal is numerically
/// meaningless; resolution is skipped instead of dividing by it.
const MIN_SEPARATION: f32 = 1e-6;

/// Resolve a sphere-sphere contact, mutating both balls in place
///
/// No-op unless the spheres overlap. On contact the velocities are
/// decomposed along the unit normal from `b` toward `a`; the normal
/// components exchange via the 1-D elastic formula weighted by mass, the
/// tangential components pass through unchanged. Remaining next-step
/// penetration is removed by displacing each ball in proportion to the
/// other's radius, so the larger ball stays more anchored.
pub fn resolve_ball_collision(a: &mut Ball, b: &mut Ball) {
    let distance = a.position.distance(b.position);
    if distance > a.radius + b.radius || distance < MIN_SEPARATION {
        return;
    }

    let velocity_a = a.velocity();
    let velocity_b = b.velocity();

    // Unit normal pointing from b toward a
    let normal = (a.position - b.position) / distance;

    // Normal components of each velocity
    let u_a = normal.dot(velocity_a);
    let u_b = normal.dot(velocity_b);

    // 1-D elastic collision on the normal components
    let mass_sum = a.mass + b.mass;
    let w_a = (u_a * (a.mass - b.mass) + 2.0 * b.mass * u_b) / mass_sum;
    let w_b = (u_b * (b.mass - a.mass) + 2.0 * a.mass * u_a) / mass_sum;

    // Swap in the new normal components, tangential parts unchanged
    let new_velocity_a = velocity_a + normal * (w_a - u_a);
    let new_velocity_b = velocity_b + normal * (w_b - u_b);

    // Separate whatever overlap the new velocities would leave next step
    let radius_sum = a.radius + b.radius;
    let distance_after =
        (a.position + new_velocity_a * DT).distance(b.position + new_velocity_b * DT);
    let overlap = radius_sum - distance_after;
    if overlap > 0.0 {
        a.position += normal * (overlap * (b.radius / radius_sum));
        b.position -= normal * (overlap * (a.radius / radius_sum));
    }

    a.set_velocity(new_velocity_a);
    b.set_velocity(new_velocity_b);
}
