use super::material::MaterialKind;

/// Fixed-size cell field, row-major storage. Never resized; every cell starts
/// as `Empty`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<MaterialKind>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![MaterialKind::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, r: isize, c: isize) -> bool {
        r >= 0 && (r as usize) < self.rows && c >= 0 && (c as usize) < self.cols
    }

    /// Caller guarantees `r < rows` and `c < cols`.
    pub fn get(&self, r: usize, c: usize) -> MaterialKind {
        self.cells[r * self.cols + c]
    }

    pub fn set(&mut self, r: usize, c: usize, kind: MaterialKind) {
        self.cells[r * self.cols + c] = kind;
    }

    /// Neighbor read that treats out-of-range coordinates as an absent cell.
    /// The physics rules use this for horizontal and diagonal neighbors, so
    /// a missing neighbor is simply never eligible for a swap.
    pub fn get_checked(&self, r: isize, c: isize) -> Option<MaterialKind> {
        if self.in_bounds(r, c) {
            Some(self.get(r as usize, c as usize))
        } else {
            None
        }
    }

    pub fn swap(&mut self, r1: usize, c1: usize, r2: usize, c2: usize) {
        let a = r1 * self.cols + c1;
        let b = r2 * self.cols + c2;
        self.cells.swap(a, b);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_grid_is_all_empty() {
        let grid = Grid::new(3, 4);
        for r in 0..3 {
            for c in 0..4 {
                assert!(grid.get(r, c).is_empty());
            }
        }
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut grid = Grid::new(2, 2);
        grid.set(1, 0, MaterialKind::Sand);
        assert_eq!(grid.get(1, 0), MaterialKind::Sand);
        assert!(grid.get(0, 1).is_empty());
    }

    #[test]
    fn swap_exchanges_two_cells() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 0, MaterialKind::Water);
        grid.set(1, 1, MaterialKind::Stone);
        grid.swap(0, 0, 1, 1);
        assert_eq!(grid.get(0, 0), MaterialKind::Stone);
        assert_eq!(grid.get(1, 1), MaterialKind::Water);
    }

    #[test]
    fn checked_read_is_none_outside_the_grid() {
        let mut grid = Grid::new(2, 3);
        grid.set(1, 2, MaterialKind::Dirt);
        assert_eq!(grid.get_checked(1, 2), Some(MaterialKind::Dirt));
        assert_eq!(grid.get_checked(-1, 0), None);
        assert_eq!(grid.get_checked(0, -1), None);
        assert_eq!(grid.get_checked(2, 0), None);
        assert_eq!(grid.get_checked(0, 3), None);
    }

    #[test]
    fn bounds_cover_all_four_edges() {
        let grid = Grid::new(2, 3);
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(1, 2));
        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(0, -1));
        assert!(!grid.in_bounds(2, 0));
        assert!(!grid.in_bounds(0, 3));
    }
}
