// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item slots.

use crate::error::BuildError;
use crate::locator::Locator;

/// An item slot inside a GUI. Slots render 16×16.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Slot id; reassigned sequentially when the slot is built into a GUI.
    pub id: i32,
    /// X position.
    pub x: i32,
    /// Y position.
    pub y: i32,
    /// Host item reference placed in the slot.
    pub item: String,
}

/// Configuration for [`Slot`] components.
#[derive(Debug, Clone, Default)]
pub struct SlotConfig {
    loc: Locator,
    id: i32,
    item: Option<String>,
}

impl SlotConfig {
    /// An empty slot configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the slot by a relative distance.
    #[must_use]
    pub fn offset(mut self, x: i32, y: i32) -> Self {
        self.loc = self.loc.offset(x, y);
        self
    }

    /// Set the absolute slot position.
    #[must_use]
    pub fn location(mut self, x: i32, y: i32) -> Self {
        self.loc = self.loc.location(x, y);
        self
    }

    /// Set the item placed in the slot.
    #[must_use]
    pub fn item(mut self, item: impl Into<String>) -> Self {
        self.item = Some(item.into());
        self
    }

    /// Set the slot id.
    ///
    /// Unnecessary inside a GUI build, which assigns ids itself.
    #[must_use]
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Build the slot.
    pub fn build(&self) -> Result<Slot, BuildError> {
        Ok(Slot {
            id: self.id,
            x: self.loc.x,
            y: self.loc.y,
            item: self.item.clone().ok_or(BuildError::Missing("slot item"))?,
        })
    }
}
