// Copyright 2026 the Loam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loam Geom: integer 2D vector and compass-direction primitives.
//!
//! These are the leaf value types shared by the other Loam crates:
//!
//! - [`Vec2I`]: an immutable integer 2-vector with component-wise arithmetic,
//!   value-semantic equality, and hashing.
//! - [`Direction`]: compass direction flags for 4- and 8-connected grid
//!   neighborhoods, with helpers to turn a direction into a step offset.
//!
//! The crate deliberately does not depend on any geometry or math crate;
//! higher layers that work in floating-point space can convert at their own
//! boundary.
//!
//! # Minimal example
//!
//! ```rust
//! use loam_geom::{Direction, Vec2I};
//!
//! let pos = Vec2I::new(3, 4);
//! let step = Direction::NORTH_EAST.offset();
//! assert_eq!(pos + step, Vec2I::new(4, 3));
//!
//! // Named methods are the contract; operators are sugar over them.
//! assert_eq!(pos.add(step), pos + step);
//! assert_eq!(pos.dot(pos), 25);
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

mod direction;
mod vec2i;

pub use direction::Direction;
pub use vec2i::Vec2I;
