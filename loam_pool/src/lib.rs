// Copyright 2026 the Loam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loam Pool: a fixed-capacity pool of reusable objects.
//!
//! [`Pool`] eagerly builds `capacity` instances up front and hands them out
//! on [`Pool::alloc`]; [`Pool::free`] resets a returned instance and
//! re-admits it. Exhaustion is not an error — an empty pool falls back to
//! constructing fresh instances — and returning to a full pool simply drops
//! the instance. The pool never holds more than `capacity` objects.
//!
//! Construction is decoupled from any particular mechanism: supply a factory
//! closure with [`Pool::with_factory`], or use [`Pool::new`] when the type
//! implements [`Default`].
//!
//! # Minimal example
//!
//! ```rust
//! use loam_pool::{Pool, Poolable};
//!
//! #[derive(Default)]
//! struct Particle {
//!     ttl: u32,
//! }
//!
//! impl Poolable for Particle {
//!     fn reset(&mut self) {
//!         self.ttl = 0;
//!     }
//! }
//!
//! let mut pool: Pool<Particle> = Pool::new(8);
//! let mut particle = pool.alloc();
//! particle.ttl = 120;
//!
//! // `free` resets before re-admission...
//! pool.free(particle);
//! // ...so the next alloc observes the just-constructed state.
//! assert_eq!(pool.alloc().ttl, 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// An object that can live in a [`Pool`].
///
/// [`reset`](Self::reset) must return the object to its initial state, as if
/// it had just been constructed; the pool calls it on every re-admission.
pub trait Poolable {
    /// Reset this object to its initial state.
    fn reset(&mut self);
}

/// A bounded free list of reusable `T` instances.
///
/// Single-threaded, like the rest of Loam: no internal locking.
pub struct Pool<T> {
    free: Vec<T>,
    capacity: usize,
    factory: Box<dyn FnMut() -> T>,
}

impl<T: Poolable> Pool<T> {
    /// Create a pool of `capacity` default-constructed instances.
    #[must_use]
    pub fn new(capacity: usize) -> Self
    where
        T: Default + 'static,
    {
        Self::with_factory(capacity, T::default)
    }

    /// Create a pool that builds instances with `factory`.
    ///
    /// `capacity` instances are constructed eagerly; the factory is also
    /// consulted whenever [`alloc`](Self::alloc) finds the pool empty.
    #[must_use]
    pub fn with_factory(capacity: usize, factory: impl FnMut() -> T + 'static) -> Self {
        let mut factory = Box::new(factory);
        let mut free = Vec::with_capacity(capacity);
        free.extend((0..capacity).map(|_| factory()));
        Self {
            free,
            capacity,
            factory,
        }
    }

    /// Take an instance out of the pool, or construct a fresh one.
    ///
    /// Never fails; an empty pool is a cache miss, not an error.
    #[must_use]
    pub fn alloc(&mut self) -> T {
        self.free.pop().unwrap_or_else(&mut self.factory)
    }

    /// Return an instance to the pool.
    ///
    /// The instance is [`reset`](Poolable::reset) and re-admitted, unless the
    /// pool is already at capacity — then it is dropped untouched and the
    /// caller is done with it either way.
    pub fn free(&mut self, mut object: T) {
        if self.free.len() >= self.capacity {
            return;
        }
        object.reset();
        self.free.push(object);
    }

    /// Maximum number of pooled instances.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of instances currently waiting in the pool.
    #[must_use]
    pub fn available(&self) -> usize {
        self.free.len()
    }
}

impl<T> fmt::Debug for Pool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("available", &self.free.len())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
