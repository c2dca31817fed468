//! Uniform spatial grid for broad-phase pruning
//!
//! Cells store indices into the caller's ball list, never ball copies.
//! Indices are invalidated if balls are added or removed mid-run, which
//! the simulation does not support. Cell contents are transient: cleared
//! and repopulated every gridded tick.

use glam::Vec3;

/// One cell's ball-index list
#[derive(Debug, Clone, Default)]
pub struct GridCell {
    pub ball_indices: Vec<usize>,
}

impl GridCell {
    pub fn clear(&mut self) {
        self.ball_indices.clear();
    }
}

/// Flattened 3-D grid of cells over an axis-aligned extent
#[derive(Debug, Clone)]
pub struct CollisionGrid {
    cell_size: f32,
    nx: usize,
    ny: usize,
    nz: usize,
    origin: Vec3,
    cells: Vec<GridCell>,
}

impl CollisionGrid {
    pub fn new(cell_size: f32, nx: usize, ny: usize, nz: usize, origin: Vec3) -> Self {
        Self {
            cell_size,
            nx,
            ny,
            nz,
            origin,
            cells: vec![GridCell::default(); nx * ny * nz],
        }
    }

    /// Size a grid to cover the axis-aligned box from `min` to `max`
    pub fn for_extent(min: Vec3, max: Vec3, cell_size: f32) -> Self {
        let counts = ((max - min) / cell_size).ceil();
        Self::new(
            cell_size,
            (counts.x as usize).max(1),
            (counts.y as usize).max(1),
            (counts.z as usize).max(1),
            min,
        )
    }

    /// Cell coordinates for a position, clamped into the grid extent
    ///
    /// Positions inside the extent floor-divide exactly; positions
    /// outside it land in the nearest border cell rather than indexing
    /// out of bounds.
    pub fn cell_coords(&self, position: Vec3) -> (usize, usize, usize) {
        let local = (position - self.origin) / self.cell_size;
        let clamp = |v: f32, n: usize| (v.floor().max(0.0) as usize).min(n - 1);
        (
            clamp(local.x, self.nx),
            clamp(local.y, self.ny),
            clamp(local.z, self.nz),
        )
    }

    /// Flatten cell coordinates: `x + y*nx + z*nx*ny`
    #[inline]
    pub fn cell_index(&self, x: usize, y: usize, z: usize) -> usize {
        x + y * self.nx + z * self.nx * self.ny
    }

    /// Record `ball_index` in the cell containing `position`, returning
    /// the flat index of that cell
    pub fn insert(&mut self, position: Vec3, ball_index: usize) -> usize {
        let (x, y, z) = self.cell_coords(position);
        let index = self.cell_index(x, y, z);
        self.cells[index].ball_indices.push(ball_index);
        index
    }

    /// Empty every cell; call once per tick before repopulating
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    #[inline]
    pub fn cell(&self, index: usize) -> &GridCell {
        &self.cells[index]
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Total ball entries across all cells
    pub fn entry_count(&self) -> usize {
        self.cells.iter().map(|c| c.ball_indices.len()).sum()
    }
}
