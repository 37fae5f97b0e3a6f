// Copyright 2026 the Loam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dense 2D grid container.

use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

/// A fixed-size two-dimensional grid of `T`.
///
/// Cells are addressed as `(i, j)` with `i` in `0..width` and `j` in
/// `0..height`. Storage is a single dense allocation in column-major order
/// (all of column `i` is contiguous), which is also the iteration order.
///
/// Equality is structural: dimensions plus every cell. `Clone` produces an
/// independent grid; mutating the clone never affects the original.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Create a grid with every cell set to `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self
    where
        T: Default,
    {
        Self::from_fn(width, height, |_, _| T::default())
    }

    /// Create a grid by evaluating `f(i, j)` for every cell, column-major.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    #[must_use]
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        assert!(width >= 1, "grid width must be at least 1");
        assert!(height >= 1, "grid height must be at least 1");

        let mut cells = Vec::with_capacity(width * height);
        for i in 0..width {
            for j in 0..height {
                cells.push(f(i, j));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// The number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// The number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// The total number of cells, `width * height`. Never zero.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.width * self.height
    }

    /// Always `false`; a grid has at least one cell by construction.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    fn flat_index(&self, i: usize, j: usize) -> Option<usize> {
        (i < self.width && j < self.height).then(|| i * self.height + j)
    }

    /// The cell at `(i, j)`, or `None` when either index is out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        let idx = self.flat_index(i, j)?;
        Some(&self.cells[idx])
    }

    /// Mutable access to the cell at `(i, j)`, or `None` out of bounds.
    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize) -> Option<&mut T> {
        let idx = self.flat_index(i, j)?;
        Some(&mut self.cells[idx])
    }

    /// Set every cell to a clone of `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.cells.fill(value);
    }

    /// Iterate over all cells in column-major order.
    ///
    /// Each call returns a fresh iterator starting at `(0, 0)`.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.cells.iter(),
        }
    }

    /// Iterate over `((i, j), &cell)` pairs in column-major order.
    pub fn indexed_iter(&self) -> IndexedIter<'_, T> {
        IndexedIter {
            inner: self.cells.iter().enumerate(),
            height: self.height,
        }
    }

    /// Mutably iterate over all cells in column-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.cells.iter_mut()
    }

    /// Iterate over the cells that hold something other than `T::default()`.
    ///
    /// This is the "skip empty slots" view of a sparsely populated grid.
    /// Column-major order; a fresh iterator each call.
    pub fn occupied(&self) -> impl Iterator<Item = &T>
    where
        T: Default + PartialEq,
    {
        let empty = T::default();
        self.cells.iter().filter(move |cell| **cell != empty)
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    fn index(&self, (i, j): (usize, usize)) -> &T {
        match self.get(i, j) {
            Some(cell) => cell,
            None => panic!(
                "index ({i}, {j}) out of bounds for {}x{} grid",
                self.width, self.height
            ),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        let (width, height) = (self.width, self.height);
        match self.get_mut(i, j) {
            Some(cell) => cell,
            None => panic!("index ({i}, {j}) out of bounds for {width}x{height} grid"),
        }
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Column-major iterator over all cells of a [`Grid`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: core::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Column-major iterator yielding `((i, j), &cell)` pairs.
#[derive(Clone, Debug)]
pub struct IndexedIter<'a, T> {
    inner: core::iter::Enumerate<core::slice::Iter<'a, T>>,
    height: usize,
}

impl<'a, T> Iterator for IndexedIter<'a, T> {
    type Item = ((usize, usize), &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (flat, cell) = self.inner.next()?;
        Some(((flat / self.height, flat % self.height), cell))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IndexedIter<'_, T> {}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    /// Render one bracketed line per column, in index order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.width {
            write!(f, "[ ")?;
            for j in 0..self.height {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self[(i, j)])?;
            }
            writeln!(f, " ]")?;
        }
        Ok(())
    }
}
