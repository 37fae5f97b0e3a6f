// Copyright 2026 the Loam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The event value type.

use core::fmt;

/// An immutable event: a kind plus optional payload data.
///
/// `K` is an opaque comparable key (an enum, a string, an id) that listeners
/// register against; `D` is whatever payload those listeners might care
/// about. A kind is always present by construction; only the data is
/// optional.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event<K, D> {
    kind: K,
    data: Option<D>,
}

impl<K, D> Event<K, D> {
    /// Create an event carrying no data.
    #[must_use]
    pub const fn new(kind: K) -> Self {
        Self { kind, data: None }
    }

    /// Create an event carrying `data`.
    #[must_use]
    pub const fn with_data(kind: K, data: D) -> Self {
        Self {
            kind,
            data: Some(data),
        }
    }

    /// The kind of this event.
    #[must_use]
    pub const fn kind(&self) -> &K {
        &self.kind
    }

    /// The payload of this event, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&D> {
        self.data.as_ref()
    }

    /// Deconstruct into kind and optional data.
    #[must_use]
    pub fn into_parts(self) -> (K, Option<D>) {
        (self.kind, self.data)
    }
}

impl<K: fmt::Display, D: fmt::Display> fmt::Display for Event<K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            Some(data) => write!(f, "event {} ({data})", self.kind),
            None => write!(f, "event {}", self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn accessors() {
        let bare: Event<&str, i32> = Event::new("spawn");
        assert_eq!(*bare.kind(), "spawn");
        assert_eq!(bare.data(), None);

        let loaded = Event::with_data("damage", 5);
        assert_eq!(*loaded.kind(), "damage");
        assert_eq!(loaded.data(), Some(&5));
        assert_eq!(loaded.into_parts(), ("damage", Some(5)));
    }

    #[test]
    fn display() {
        assert_eq!(Event::<_, i32>::new("spawn").to_string(), "event spawn");
        assert_eq!(
            Event::with_data("damage", 5).to_string(),
            "event damage (5)"
        );
    }

    #[test]
    fn equality_covers_kind_and_data() {
        assert_eq!(Event::with_data("a", 1), Event::with_data("a", 1));
        assert_ne!(Event::with_data("a", 1), Event::with_data("a", 2));
        assert_ne!(Event::with_data("a", 1), Event::new("a"));
    }
}
