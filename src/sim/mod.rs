//! Deterministic rigid-sphere simulation
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - Fixed timestep only (`consts::DT`)
//! - Seeded RNG only (randomized scene builders take a `Pcg32`)
//! - Stable iteration order (ball index order; see `tick` for the
//!   ordering contract)
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod color;
pub mod grid;
pub mod scene;
pub mod state;
pub mod tick;
pub mod wall;

pub use ball::Ball;
pub use collision::resolve_ball_collision;
pub use color::Rgba;
pub use grid::{CollisionGrid, GridCell};
pub use scene::{brownian_motion, cube_room, generate_balls, three_balls};
pub use state::SimState;
pub use tick::{tick, tick_gridded};
pub use wall::Wall;
