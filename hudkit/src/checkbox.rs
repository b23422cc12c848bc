// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-state checkboxes.

use crate::error::BuildError;
use crate::locator::Locator;
use crate::text::HoverText;

/// A checkbox inside a GUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    /// Component id.
    pub id: i32,
    /// Image shown while unchecked.
    pub background: String,
    /// Image shown while checked.
    pub focus: String,
    /// X position.
    pub x: i32,
    /// Y position.
    pub y: i32,
    /// Checkbox width.
    pub width: i32,
    /// Checkbox height.
    pub height: i32,
    /// Initial state.
    pub checked: bool,
    /// Optional hover overlay.
    pub hover: Option<HoverText>,
}

/// Configuration for [`Checkbox`] components.
#[derive(Debug, Clone, Default)]
pub struct CheckboxConfig {
    loc: Locator,
    id: i32,
    checked: bool,
    width: i32,
    height: i32,
    hover: Option<HoverText>,
    background: Option<String>,
    focus: Option<String>,
}

impl CheckboxConfig {
    /// An empty checkbox configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the checkbox size.
    #[must_use]
    pub fn size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the component id.
    #[must_use]
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Set the absolute checkbox position.
    #[must_use]
    pub fn location(mut self, x: i32, y: i32) -> Self {
        self.loc = self.loc.location(x, y);
        self
    }

    /// Move the checkbox by a relative distance.
    #[must_use]
    pub fn offset(mut self, x: i32, y: i32) -> Self {
        self.loc = self.loc.offset(x, y);
        self
    }

    /// Attach a hover overlay.
    #[must_use]
    pub fn hover(mut self, hover: HoverText) -> Self {
        self.hover = Some(hover);
        self
    }

    /// Set the initial state.
    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the unchecked and checked images. Both are required to build.
    #[must_use]
    pub fn background(mut self, background: impl Into<String>, focus: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self.focus = Some(focus.into());
        self
    }

    /// Build the checkbox.
    pub fn build(&self) -> Result<Checkbox, BuildError> {
        Ok(Checkbox {
            id: self.id,
            background: self
                .background
                .clone()
                .ok_or(BuildError::Missing("checkbox background"))?,
            focus: self
                .focus
                .clone()
                .ok_or(BuildError::Missing("checkbox focus"))?,
            x: self.loc.x,
            y: self.loc.y,
            width: self.width,
            height: self.height,
            checked: self.checked,
            hover: self.hover.clone(),
        })
    }
}
