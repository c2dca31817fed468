//! Simulation state and diagnostics
//!
//! All state that must survive a snapshot for determinism lives here.
//! The renderer is a read-only consumer that runs between full ticks,
//! never interleaved with one.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::wall::Wall;

/// Complete simulation state: an ordered room and an ordered ball list
///
/// Ball order is the collision-resolution order; see `tick` for the
/// ordering contract. Walls are static for the lifetime of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub walls: Vec<Wall>,
    pub balls: Vec<Ball>,
    /// Fixed steps advanced so far
    pub time_ticks: u64,
}

impl SimState {
    pub fn new(walls: Vec<Wall>, balls: Vec<Ball>) -> Self {
        Self {
            walls,
            balls,
            time_ticks: 0,
        }
    }

    /// Total kinetic energy, `sum of 0.5 * m * |v|^2`
    pub fn kinetic_energy(&self) -> f32 {
        self.balls
            .iter()
            .map(|b| 0.5 * b.mass * b.velocity().length_squared())
            .sum()
    }

    /// Total momentum, `sum of m * v`
    pub fn momentum(&self) -> Vec3 {
        self.balls
            .iter()
            .fold(Vec3::ZERO, |acc, b| acc + b.velocity() * b.mass)
    }
}
