// Copyright 2026 the Loam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compass directions for grid neighborhoods.

use bitflags::bitflags;

use crate::Vec2I;

bitflags! {
    /// Compass direction flags.
    ///
    /// The four cardinal directions are independent bits; diagonals are the
    /// union of their two cardinals, so `Direction::NORTH_WEST` contains both
    /// `Direction::NORTH` and `Direction::WEST`. `Direction::empty()` means
    /// "no direction".
    ///
    /// Coordinates follow the usual grid convention: x grows eastward and
    /// y grows southward, so [`Direction::NORTH`] steps to a smaller y.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Direction: u8 {
        /// Toward smaller y.
        const NORTH = 1 << 0;
        /// Toward larger y.
        const SOUTH = 1 << 1;
        /// Toward smaller x.
        const WEST = 1 << 2;
        /// Toward larger x.
        const EAST = 1 << 3;
        /// North and west combined.
        const NORTH_WEST = Self::NORTH.bits() | Self::WEST.bits();
        /// North and east combined.
        const NORTH_EAST = Self::NORTH.bits() | Self::EAST.bits();
        /// South and west combined.
        const SOUTH_WEST = Self::SOUTH.bits() | Self::WEST.bits();
        /// South and east combined.
        const SOUTH_EAST = Self::SOUTH.bits() | Self::EAST.bits();
    }
}

impl Direction {
    /// The four cardinal directions in clockwise order starting north.
    pub const CARDINAL: [Self; 4] = [Self::NORTH, Self::EAST, Self::SOUTH, Self::WEST];

    /// All eight neighbor directions in clockwise order starting north.
    pub const COMPASS: [Self; 8] = [
        Self::NORTH,
        Self::NORTH_EAST,
        Self::EAST,
        Self::SOUTH_EAST,
        Self::SOUTH,
        Self::SOUTH_WEST,
        Self::WEST,
        Self::NORTH_WEST,
    ];

    /// The unit step this direction takes on a grid.
    ///
    /// Opposed flags cancel: a direction containing both `NORTH` and `SOUTH`
    /// contributes no vertical movement, and `Direction::empty()` yields
    /// [`Vec2I::ZERO`].
    #[must_use]
    pub const fn offset(self) -> Vec2I {
        let mut x = 0;
        let mut y = 0;
        if self.contains(Self::NORTH) {
            y -= 1;
        }
        if self.contains(Self::SOUTH) {
            y += 1;
        }
        if self.contains(Self::WEST) {
            x -= 1;
        }
        if self.contains(Self::EAST) {
            x += 1;
        }
        Vec2I::new(x, y)
    }

    /// The direction pointing the opposite way, flag by flag.
    #[must_use]
    pub const fn opposite(self) -> Self {
        let mut out = Self::empty();
        if self.contains(Self::NORTH) {
            out = out.union(Self::SOUTH);
        }
        if self.contains(Self::SOUTH) {
            out = out.union(Self::NORTH);
        }
        if self.contains(Self::WEST) {
            out = out.union(Self::EAST);
        }
        if self.contains(Self::EAST) {
            out = out.union(Self::WEST);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonals_contain_their_cardinals() {
        assert!(Direction::NORTH_WEST.contains(Direction::NORTH));
        assert!(Direction::NORTH_WEST.contains(Direction::WEST));
        assert!(!Direction::NORTH_WEST.contains(Direction::EAST));
    }

    #[test]
    fn offsets() {
        assert_eq!(Direction::empty().offset(), Vec2I::ZERO);
        assert_eq!(Direction::NORTH.offset(), Vec2I::new(0, -1));
        assert_eq!(Direction::SOUTH.offset(), Vec2I::new(0, 1));
        assert_eq!(Direction::WEST.offset(), Vec2I::new(-1, 0));
        assert_eq!(Direction::EAST.offset(), Vec2I::new(1, 0));
        assert_eq!(Direction::SOUTH_EAST.offset(), Vec2I::new(1, 1));
    }

    #[test]
    fn opposed_flags_cancel() {
        let push_pull = Direction::NORTH | Direction::SOUTH;
        assert_eq!(push_pull.offset(), Vec2I::ZERO);
    }

    #[test]
    fn opposite_round_trips() {
        for dir in Direction::COMPASS {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.offset() + dir.opposite().offset(), Vec2I::ZERO);
        }
    }

    #[test]
    fn compass_walk_returns_home() {
        // Stepping once in every compass direction ends where it started.
        let mut pos = Vec2I::new(10, 10);
        for dir in Direction::COMPASS {
            pos = pos + dir.offset();
        }
        assert_eq!(pos, Vec2I::new(10, 10));
    }
}
