// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrolling list components: a clipped viewport over a taller column
//! of child components.

use crate::button::ButtonConfig;
use crate::component::ScrollingComponent;
use crate::error::BuildError;
use crate::image::ImageConfig;
use crate::locator::Locator;
use crate::slot::SlotConfig;
use crate::text::TextConfig;

/// A scrollable column of components inside a GUI.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollingList {
    /// Viewport X position.
    pub x: i32,
    /// Viewport Y position.
    pub y: i32,
    /// Viewport width.
    pub width: i32,
    /// Visible viewport height.
    pub height: i32,
    /// Full scrollable height.
    pub full_height: i32,
    /// Border drawn around the viewport.
    pub border: i32,
    /// Children, positioned in list coordinates.
    pub components: Vec<ScrollingComponent>,
}

/// Configuration for [`ScrollingList`] components.
///
/// The embedded locator positions the viewport; children are placed by
/// a second, list-local locator seeded via [`Self::component_location`]
/// and advanced with [`Self::component_offset`].
#[derive(Debug, Clone, Default)]
pub struct ScrollingListConfig {
    loc: Locator,
    inner: Locator,
    width: i32,
    height: i32,
    full_height: i32,
    border: i32,
    components: Vec<ScrollingComponent>,
}

impl ScrollingListConfig {
    /// An empty list configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the absolute viewport position.
    #[must_use]
    pub fn location(mut self, x: i32, y: i32) -> Self {
        self.loc = self.loc.location(x, y);
        self
    }

    /// Move the viewport by a relative distance.
    #[must_use]
    pub fn offset(mut self, x: i32, y: i32) -> Self {
        self.loc = self.loc.offset(x, y);
        self
    }

    /// Set the viewport size. `height` is the visible part.
    #[must_use]
    pub fn size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the full scrollable height.
    #[must_use]
    pub fn full_height(mut self, full_height: i32) -> Self {
        self.full_height = full_height;
        self
    }

    /// Set the border width drawn around the viewport.
    #[must_use]
    pub fn border(mut self, border: i32) -> Self {
        self.border = border;
        self
    }

    /// Place the list-local cursor for the next child.
    #[must_use]
    pub fn component_location(mut self, x: i32, y: i32) -> Self {
        self.inner = self.inner.location(x, y);
        self
    }

    /// Move the list-local cursor by a relative distance.
    #[must_use]
    pub fn component_offset(mut self, x: i32, y: i32) -> Self {
        self.inner = self.inner.offset(x, y);
        self
    }

    /// Add an image child at the list-local cursor.
    pub fn image(
        mut self,
        f: impl FnOnce(ImageConfig) -> Result<ImageConfig, BuildError>,
    ) -> Result<Self, BuildError> {
        let config = f(ImageConfig::new().location(self.inner.x, self.inner.y))?;
        self.components.push(ScrollingComponent::Image(config.build()?));
        Ok(self)
    }

    /// Add a text child at the list-local cursor.
    pub fn text(
        mut self,
        f: impl FnOnce(TextConfig) -> Result<TextConfig, BuildError>,
    ) -> Result<Self, BuildError> {
        let config = f(TextConfig::new().location(self.inner.x, self.inner.y))?;
        self.components.push(ScrollingComponent::Text(config.build()));
        Ok(self)
    }

    /// Add a button child at the list-local cursor.
    pub fn button(
        mut self,
        f: impl FnOnce(ButtonConfig) -> Result<ButtonConfig, BuildError>,
    ) -> Result<Self, BuildError> {
        let config = f(ButtonConfig::new().location(self.inner.x, self.inner.y))?;
        self.components.push(ScrollingComponent::Button(config.build()?));
        Ok(self)
    }

    /// Add an item slot child at the list-local cursor.
    pub fn slot(
        mut self,
        f: impl FnOnce(SlotConfig) -> Result<SlotConfig, BuildError>,
    ) -> Result<Self, BuildError> {
        let config = f(SlotConfig::new().location(self.inner.x, self.inner.y))?;
        self.components.push(ScrollingComponent::Slot(config.build()?));
        Ok(self)
    }

    /// Build the list component.
    pub fn build(&self) -> ScrollingList {
        ScrollingList {
            x: self.loc.x,
            y: self.loc.y,
            width: self.width,
            height: self.height,
            full_height: self.full_height,
            border: self.border,
            components: self.components.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_are_placed_by_the_inner_cursor() {
        let list = ScrollingListConfig::new()
            .location(10, 20)
            .size(100, 60)
            .full_height(200)
            .component_location(4, 4)
            .text(|t| Ok(t.add_line("first")))
            .unwrap()
            .component_offset(0, 12)
            .text(|t| Ok(t.add_line("second")))
            .unwrap()
            .build();
        assert_eq!(list.components.len(), 2);
        match &list.components[1] {
            ScrollingComponent::Text(text) => {
                assert_eq!((text.x, text.y), (4, 16));
            }
            other => panic!("unexpected component {other:?}"),
        }
    }
}
