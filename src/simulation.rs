use super::grid::Grid;
use super::material::{MaterialKind, UpdateRule};

/// Swaps made by the physics pass are visible to the cells visited later in
/// the same pass; there is no double buffering.
pub struct Simulator {
    grid: Grid,
}

impl Simulator {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            grid: Grid::new(rows, cols),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Stamps a `radius / 2`-extent square of `kind` centered on `(row, col)`.
    /// The first out-of-range target abandons the whole stamp for this tick;
    /// painting near an edge truncates the rest of the brush rather than
    /// clipping individual cells.
    pub fn paint(&mut self, row: isize, col: isize, radius: usize, kind: MaterialKind) {
        let size = (radius / 2) as isize;
        for i in -size..=size {
            for j in -size..=size {
                let r = row + i;
                let c = col + j;
                if !self.grid.in_bounds(r, c) {
                    return;
                }
                self.grid.set(r as usize, c as usize, kind);
            }
        }
    }

    /// One physics pass: rows from the bottom up, columns left to right.
    pub fn step(&mut self) {
        for r in (0..self.grid.rows()).rev() {
            for c in 0..self.grid.cols() {
                match self.grid.get(r, c).update_rule() {
                    UpdateRule::Flow => self.flow(r, c),
                    UpdateRule::Displacement => self.displace(r, c),
                    UpdateRule::Inert => {}
                }
            }
        }
    }

    /// The first below-neighbor (down, down-left, down-right) with strictly
    /// smaller weight is swapped in; the rest are not considered. Neighbors
    /// past the side edges are never eligible.
    fn displace(&mut self, r: usize, c: usize) {
        if r + 1 >= self.grid.rows() {
            return;
        }
        let weight = self.grid.get(r, c).weight();
        let below = r as isize + 1;
        for target in &[c as isize, c as isize - 1, c as isize + 1] {
            if let Some(neighbor) = self.grid.get_checked(below, *target) {
                if weight > neighbor.weight() {
                    self.grid.swap(r, c, below as usize, *target as usize);
                    return;
                }
            }
        }
    }

    /// Five independent conditional exchanges into `Empty` neighbors, NOT an
    /// if/else chain: every exchange re-reads `(r, c)` as left by the ones
    /// before it.
    fn flow(&mut self, r: usize, c: usize) {
        if r + 1 >= self.grid.rows() {
            return;
        }
        let (ri, ci) = (r as isize, c as isize);
        let neighbors = [
            (ri + 1, ci),
            (ri + 1, ci - 1),
            (ri + 1, ci + 1),
            (ri, ci + 1),
            (ri, ci - 1),
        ];
        for (nr, nc) in &neighbors {
            if self.grid.get_checked(*nr, *nc) == Some(MaterialKind::Empty) {
                self.grid.swap(r, c, *nr as usize, *nc as usize);
            }
        }
    }
}
