// Copyright 2026 the Loam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `Vec2I`-addressed grid access (feature `geom`).
//!
//! `Vec2I` components are signed, so these accessors treat any negative
//! component as out of bounds rather than panicking on conversion.

use core::ops::{Index, IndexMut};

use loam_geom::{Direction, Vec2I};

use crate::Grid;

impl<T> Grid<T> {
    /// Whether `pos` names a cell of this grid.
    #[must_use]
    pub fn contains(&self, pos: Vec2I) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width() && (pos.y as usize) < self.height()
    }

    /// The cell at `pos`, or `None` when `pos` is outside the grid.
    #[must_use]
    pub fn get_vec(&self, pos: Vec2I) -> Option<&T> {
        if self.contains(pos) {
            self.get(pos.x as usize, pos.y as usize)
        } else {
            None
        }
    }

    /// Mutable access to the cell at `pos`, or `None` outside the grid.
    pub fn get_vec_mut(&mut self, pos: Vec2I) -> Option<&mut T> {
        if self.contains(pos) {
            self.get_mut(pos.x as usize, pos.y as usize)
        } else {
            None
        }
    }

    /// The coordinate one step from `pos` in `dir`, if it is still on the
    /// grid.
    ///
    /// `pos` itself need not be in bounds; only the destination is checked.
    #[must_use]
    pub fn neighbor(&self, pos: Vec2I, dir: Direction) -> Option<Vec2I> {
        let next = pos + dir.offset();
        self.contains(next).then_some(next)
    }
}

impl<T> Index<Vec2I> for Grid<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `pos` is outside the grid (including negative components).
    fn index(&self, pos: Vec2I) -> &T {
        match self.get_vec(pos) {
            Some(cell) => cell,
            None => panic!(
                "position {pos} out of bounds for {}x{} grid",
                self.width(),
                self.height()
            ),
        }
    }
}

impl<T> IndexMut<Vec2I> for Grid<T> {
    fn index_mut(&mut self, pos: Vec2I) -> &mut T {
        let (width, height) = (self.width(), self.height());
        match self.get_vec_mut(pos) {
            Some(cell) => cell,
            None => panic!("position {pos} out of bounds for {width}x{height} grid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_rejects_negative_components() {
        let grid: Grid<i32> = Grid::new(3, 3);
        assert!(grid.contains(Vec2I::ZERO));
        assert!(grid.contains(Vec2I::new(2, 2)));
        assert!(!grid.contains(Vec2I::new(-1, 0)));
        assert!(!grid.contains(Vec2I::new(0, -1)));
        assert!(!grid.contains(Vec2I::new(3, 0)));
    }

    #[test]
    fn vec_indexing_round_trips() {
        let mut grid: Grid<i32> = Grid::new(3, 3);
        let pos = Vec2I::new(1, 2);
        grid[pos] = 9;
        assert_eq!(grid[pos], 9);
        assert_eq!(grid.get_vec(pos), Some(&9));
        assert_eq!(grid.get_vec(Vec2I::new(-1, 2)), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn negative_position_panics_on_index() {
        let grid: Grid<i32> = Grid::new(3, 3);
        let _ = grid[Vec2I::new(-1, 0)];
    }

    #[test]
    fn neighbor_stays_on_grid() {
        let grid: Grid<i32> = Grid::new(3, 3);
        let corner = Vec2I::ZERO;
        assert_eq!(grid.neighbor(corner, Direction::NORTH), None);
        assert_eq!(grid.neighbor(corner, Direction::WEST), None);
        assert_eq!(
            grid.neighbor(corner, Direction::SOUTH_EAST),
            Some(Vec2I::ONE)
        );
    }

    #[test]
    fn compass_neighbors_of_center() {
        let grid: Grid<i32> = Grid::new(3, 3);
        let center = Vec2I::ONE;
        let count = Direction::COMPASS
            .iter()
            .filter(|dir| grid.neighbor(center, **dir).is_some())
            .count();
        assert_eq!(count, 8);
    }
}
