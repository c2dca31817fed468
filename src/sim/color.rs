//! Owned display colors for simulation entities
//!
//! The core never interprets these; renderers read them between ticks.

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Default ball color
pub const BLUE: Rgba = Rgba::new(0, 121, 241, 255);
/// Accent color for marked balls
pub const RED: Rgba = Rgba::new(230, 41, 55, 255);
/// Translucent wall fill
pub const WALL_TINT: Rgba = Rgba::new(0, 0, 0, 100);
