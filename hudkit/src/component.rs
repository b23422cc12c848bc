// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The component sum types GUIs and scrolling lists are assembled from.

use crate::button::Button;
use crate::checkbox::Checkbox;
use crate::entity::EntityDraw;
use crate::image::{Base64Image, GifImage, Image, McImage, SplitImage};
use crate::input::{TextArea, TextField};
use crate::scrolling::ScrollingList;
use crate::slot::Slot;
use crate::text::Text;

/// Any component a GUI can contain.
#[derive(Debug, Clone, PartialEq)]
pub enum GuiComponent {
    Image(Image),
    SplitImage(SplitImage),
    McImage(McImage),
    GifImage(GifImage),
    Base64Image(Base64Image),
    Button(Button),
    Checkbox(Checkbox),
    Text(Text),
    TextField(TextField),
    TextArea(TextArea),
    Slot(Slot),
    ScrollingList(ScrollingList),
    EntityDraw(EntityDraw),
}

/// The subset of components a scrolling list can contain.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollingComponent {
    Image(Image),
    Text(Text),
    Button(Button),
    Slot(Slot),
}

/// Orientation and visibility of an in-world tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagDirection {
    /// Rotation around the X axis, in degrees.
    pub angle_x: f32,
    /// Rotation around the Y axis, in degrees.
    pub angle_y: f32,
    /// Rotation around the Z axis, in degrees.
    pub angle_z: f32,
    /// Restrict visibility to this player, by UUID.
    pub for_player: Option<String>,
    /// Whether the anchored player sees their own tag.
    pub self_visible: bool,
}

impl TagDirection {
    /// A tag facing the default direction, visible to everyone.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed angles around each axis, in degrees.
    #[must_use]
    pub fn angles(mut self, x: f32, y: f32, z: f32) -> Self {
        self.angle_x = x;
        self.angle_y = y;
        self.angle_z = z;
        self
    }

    /// Show the tag to a single player only.
    #[must_use]
    pub fn only_for(mut self, uuid: impl Into<String>) -> Self {
        self.for_player = Some(uuid.into());
        self
    }

    /// Let the anchored player see their own tag.
    #[must_use]
    pub fn self_visible(mut self) -> Self {
        self.self_visible = true;
        self
    }
}
