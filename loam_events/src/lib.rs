// Copyright 2026 the Loam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loam Events: a queue-and-drain publish/subscribe dispatcher.
//!
//! [`EventManager`] buffers [`Event`]s as they are queued and, at a point the
//! host chooses (typically once per simulation tick), drains the queue and
//! delivers each event synchronously to the listeners registered for its
//! kind.
//!
//! The drain is *breadth-level*: everything queued before
//! [`EventManager::process`] is delivered first, then a new round picks up
//! whatever those deliveries queued, and so on until no new events appear.
//! Listeners re-enter the manager through the [`EventContext`] handed to each
//! callback; queueing from inside a callback lands in the next round, never
//! the one in flight, and listener registration changes take effect before
//! the next event is delivered.
//!
//! # Minimal example
//!
//! ```rust
//! use loam_events::EventManager;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let mut manager: EventManager<&str, i32> = EventManager::new();
//!
//! let seen = Rc::new(Cell::new(0));
//! let sink = seen.clone();
//! manager.register("damage", move |event, _ctx| {
//!     sink.set(sink.get() + event.data().copied().unwrap_or(0));
//! });
//!
//! manager.queue_with("damage", 5);
//! manager.queue_with("damage", 3);
//! manager.queue("heal"); // nobody listens; silently dropped
//! manager.process();
//!
//! assert_eq!(seen.get(), 8);
//! assert!(manager.is_idle());
//! ```
//!
//! ## Scope
//!
//! The manager is a single-threaded, in-memory component with no internal
//! locking; share it across threads only behind external synchronization.
//! There is no persistence, no delivery priority beyond FIFO within a round,
//! and no wildcard kind matching. A callback that panics propagates out of
//! [`EventManager::process`] immediately, leaving the queue at most partially
//! delivered.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod event;
mod manager;

pub use event::Event;
pub use manager::{EventContext, EventManager, ListenerId};
