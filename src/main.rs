//! Headless demo runner
//!
//! Builds one of the example scenes and advances it at the fixed logical
//! step, logging energy and momentum diagnostics. Rendering, camera, and
//! input handling live in external front ends; this binary only drives
//! the core.
//!
//! Usage: `ballroom [three-balls|brownian|random] [ticks] [seed]`

use std::env;

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use ballroom::sim::{self, Ball, SimState, color};

const ROOM_SIZE: f32 = 10.0;
const DEFAULT_TICKS: u64 = 1200;
const DEFAULT_SEED: u64 = 7;
const LOG_EVERY: u64 = 120;

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let scene = args.next().unwrap_or_else(|| "three-balls".into());
    let ticks: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TICKS);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);

    let mut state = build_scene(&scene, seed);
    log::info!(
        "scene `{}`: {} balls, {} walls, seed {}",
        scene,
        state.balls.len(),
        state.walls.len(),
        seed
    );

    for _ in 0..ticks {
        sim::tick(&mut state);
        if state.time_ticks % LOG_EVERY == 0 {
            let p = state.momentum();
            log::info!(
                "tick {:5}  E {:8.4}  p ({:+.4}, {:+.4}, {:+.4})",
                state.time_ticks,
                state.kinetic_energy(),
                p.x,
                p.y,
                p.z
            );
        }
    }

    let p = state.momentum();
    println!(
        "{} ticks, E {:.4}, p ({:+.4}, {:+.4}, {:+.4})",
        state.time_ticks,
        state.kinetic_energy(),
        p.x,
        p.y,
        p.z
    );
}

fn build_scene(name: &str, seed: u64) -> SimState {
    let walls = sim::cube_room(ROOM_SIZE);
    let room = Vec3::splat(ROOM_SIZE);
    let mut rng = Pcg32::seed_from_u64(seed);

    let balls = match name {
        "brownian" => {
            let mut small = Ball::new(Vec3::ZERO, Vec3::new(0.05, 0.0, 0.0));
            small.radius = 0.3;
            let mut large = Ball::new(Vec3::new(0.0, ROOM_SIZE / 2.0, 0.0), Vec3::ZERO);
            large.radius = 1.5;
            large.mass = 25.0;
            large.color = color::RED;
            large.track_path = true;
            sim::brownian_motion(room, &small, &large, 125, &mut rng)
        }
        "random" => sim::generate_balls(room, 0.5, 0.05, 64, &mut rng),
        "three-balls" => sim::three_balls(),
        other => {
            log::warn!("unknown scene `{other}`, using three-balls");
            sim::three_balls()
        }
    };
    SimState::new(walls, balls)
}
