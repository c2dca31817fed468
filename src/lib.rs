//! Ballroom - rigid spheres bouncing inside a convex polyhedral room
//!
//! Core module:
//! - `sim`: deterministic simulation (walls, balls, collision response,
//!   spatial grid broad phase, scene builders)
//!
//! The simulation advances in fixed logical steps. Rendering, camera
//! control, and input handling are external front ends that construct
//! entities, call a tick entry point zero or more times per frame from
//! their own accumulator, and read positions back for drawing.

pub mod sim;

pub use sim::{Ball, CollisionGrid, Rgba, SimState, Wall};

/// Simulation constants
pub mod consts {
    /// Fixed logical timestep. Real elapsed time is absorbed upstream by
    /// the caller's frame accumulator, which invokes the tick at this
    /// constant step.
    pub const DT: f32 = 1.0;

    /// Default ball radius
    pub const BALL_RADIUS: f32 = 1.0;
    /// Default ball mass
    pub const BALL_MASS: f32 = 1.0;
    /// Default wall extent (width and depth)
    pub const WALL_SIZE: f32 = 10.0;
}
