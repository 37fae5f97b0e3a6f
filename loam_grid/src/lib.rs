// Copyright 2026 the Loam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loam Grid: a fixed-size dense 2D container.
//!
//! [`Grid`] owns a `width × height` block of cells and offers:
//!
//! - Checked access ([`Grid::get`] / [`Grid::get_mut`]) and panicking
//!   `grid[(i, j)]` indexing, like the standard library containers.
//! - Structural equality: two grids are equal iff their dimensions match and
//!   every corresponding cell is equal.
//! - Cloning into an independent grid (per-cell `Clone`; cells that are
//!   themselves handles are duplicated shallowly).
//! - Column-major iteration, including [`Grid::occupied`], which skips cells
//!   still holding the element type's default value.
//!
//! Dimensions must be at least one in each axis; a zero-sized grid has no
//! addressable cells and construction rejects it outright.
//!
//! # Minimal example
//!
//! ```rust
//! use loam_grid::Grid;
//!
//! let mut grid: Grid<u8> = Grid::new(3, 2);
//! grid[(2, 1)] = 7;
//!
//! assert_eq!(grid.get(2, 1), Some(&7));
//! assert_eq!(grid.get(3, 0), None);
//!
//! // `occupied` skips default cells; a fresh iterator each call.
//! assert_eq!(grid.occupied().copied().collect::<Vec<_>>(), vec![7]);
//!
//! let copy = grid.clone();
//! assert_eq!(copy, grid);
//! ```
//!
//! ## Features
//!
//! - `geom`: [`Vec2I`](loam_geom::Vec2I)-addressed accessors and
//!   [`Grid::neighbor`] lookup, pulling in `loam_geom`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "geom")]
mod geom;
mod grid;

pub use grid::{Grid, IndexedIter, Iter};
