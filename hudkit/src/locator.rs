// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Relative placement of components.

/// An origin for component placement.
///
/// Every configuration embeds a locator; moving the locator moves the
/// component the configuration eventually builds. Locators are plain values,
/// so copying a configuration copies its origin with it and the copies are
/// fully independent.
///
/// ```
/// use hudkit::Locator;
///
/// let loc = Locator::new().offset(200, 0).offset(0, 50);
/// let slot = loc.build_component(|x, y| (x, y));
/// assert_eq!(slot, (200, 50));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Locator {
    /// X coordinate of the origin.
    pub x: i32,
    /// Y coordinate of the origin.
    pub y: i32,
}

impl Locator {
    /// Create a locator at the top-left origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the origin by a relative distance.
    #[must_use]
    pub fn offset(mut self, x: i32, y: i32) -> Self {
        self.x += x;
        self.y += y;
        self
    }

    /// Set the absolute origin position.
    #[must_use]
    pub fn location(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Build a component at the located position.
    pub fn build_component<R>(self, build: impl FnOnce(i32, i32) -> R) -> R {
        build(self.x, self.y)
    }
}
