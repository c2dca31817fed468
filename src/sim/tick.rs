//! Fixed timestep simulation tick
//!
//! Entry points that advance every ball by one logical step of
//! `consts::DT`. Callers run zero or more ticks per rendered frame from
//! their own accumulator.
//!
//! Ordering contract (stable, test-covered): balls are processed in
//! index order, and each ball is processed fully before the next one:
//! wall responses, then pairwise responses against every later ball,
//! then integration. Ball `i`'s collision with ball `j > i` therefore
//! sees `j`'s pre-integration state. The bias is deliberate and
//! identical run-to-run.

use super::collision::resolve_ball_collision;
use super::grid::CollisionGrid;
use super::state::SimState;

/// Advance the simulation one fixed step with all-pairs collision checks
///
/// This is the reference semantics. `tick_gridded` trades exactness for
/// broad-phase pruning.
pub fn tick(state: &mut SimState) {
    for i in 0..state.balls.len() {
        let (left, right) = state.balls.split_at_mut(i + 1);
        let ball = &mut left[i];

        for wall in &state.walls {
            ball.handle_wall_collision(wall);
        }
        for other in right {
            resolve_ball_collision(ball, other);
        }
        ball.update_position();
    }
    state.time_ticks += 1;
}

/// Advance one fixed step using the grid broad phase
///
/// Pairwise checks only run between balls sharing a grid cell, so a pair
/// straddling a cell boundary is missed whenever `cell_size` is smaller
/// than twice the largest ball radius. Size the grid accordingly; this
/// path is opt-in and is not equivalent to `tick` in general.
///
/// Per-tick protocol: clear the grid, then for each ball in index order:
/// wall responses, insert into the grid, resolve against the balls
/// already inserted into the same cell, integrate.
pub fn tick_gridded(state: &mut SimState, grid: &mut CollisionGrid) {
    grid.clear();
    for i in 0..state.balls.len() {
        let (earlier, rest) = state.balls.split_at_mut(i);
        let ball = &mut rest[0];

        for wall in &state.walls {
            ball.handle_wall_collision(wall);
        }

        let cell = grid.insert(ball.position, i);
        // everything already in this cell was inserted earlier this
        // tick, so every candidate index is < i
        for &j in &grid.cell(cell).ball_indices {
            if j == i {
                continue;
            }
            resolve_ball_collision(&mut earlier[j], ball);
        }
        ball.update_position();
    }
    state.time_ticks += 1;
}
