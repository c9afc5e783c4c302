use super::Coord;

/// Dense width x height grid indexed by (x, y), y growing north.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![T::default(); width * height],
        }
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, at: Coord) -> Option<usize> {
        if at.x < 0 || at.y < 0 {
            return None;
        }
        let (x, y) = (at.x as usize, at.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn get(&self, at: Coord) -> Option<&T> {
        self.index(at).map(|i| &self.cells[i])
    }

    /// Writes `value` at `at`; out-of-bounds writes are ignored
    pub fn set(&mut self, at: Coord, value: T) {
        if let Some(i) = self.index(at) {
            self.cells[i] = value;
        }
    }
}

impl Grid<bool> {
    /// Out-of-bounds cells read as false
    pub fn is_set(&self, at: Coord) -> bool {
        self.get(at).copied().unwrap_or(false)
    }

    /// Coordinates of all set cells, column-major like the classic food grid
    pub fn as_list(&self) -> Vec<Coord> {
        let mut list = Vec::new();
        for x in 0..self.width {
            for y in 0..self.height {
                let at = Coord::new(x as i32, y as i32);
                if self.is_set(at) {
                    list.push(at);
                }
            }
        }
        list
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_list() {
        let mut grid: Grid<bool> = Grid::new(3, 2);
        grid.set(Coord::new(2, 1), true);
        grid.set(Coord::new(0, 0), true);
        assert_eq!(grid.count(), 2);
        assert_eq!(grid.as_list(), vec![Coord::new(0, 0), Coord::new(2, 1)]);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid: Grid<bool> = Grid::new(2, 2);
        grid.set(Coord::new(5, 5), true);
        assert_eq!(grid.count(), 0);
        assert!(!grid.is_set(Coord::new(-1, 0)));
        assert!(grid.get(Coord::new(2, 0)).is_none());
    }
}
