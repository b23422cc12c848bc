// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image components for GUIs, HUD overlays, and in-world tags.
//!
//! One flat [`ImageConfig`] covers the plain, split (sub-rectangle), Minecraft
//! texture, GIF, and base64-sourced variants. The variant is an explicit
//! [`ImageKind`] tag rather than a builder subclass; `build_component`
//! dispatches on it, and the specialized `build_*` calls produce the concrete
//! records directly.

use crate::component::{GuiComponent, TagDirection};
use crate::error::BuildError;
use crate::locator::Locator;
use crate::text::HoverText;

/// Which record family an [`ImageConfig`] builds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageKind {
    /// A whole image stretched to the display size.
    #[default]
    Plain,
    /// A sub-rectangle cut from a larger sheet.
    Split,
    /// A sub-rectangle of a texture the client already has loaded.
    Mc,
    /// An image transferred inline as base64 data.
    Base64,
}

/// A stretched whole image inside a GUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Image reference.
    pub background: String,
    /// X position.
    pub x: i32,
    /// Y position.
    pub y: i32,
    /// Display width.
    pub width: i32,
    /// Display height.
    pub height: i32,
    /// Optional hover overlay.
    pub hover: Option<HoverText>,
}

/// A sub-rectangle of a sheet, stretched to the display size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitImage {
    /// Sheet reference.
    pub background: String,
    /// X position.
    pub x: i32,
    /// Y position.
    pub y: i32,
    /// Left edge of the source rectangle within the sheet.
    pub split_x: i32,
    /// Top edge of the source rectangle within the sheet.
    pub split_y: i32,
    /// Display width.
    pub width: i32,
    /// Display height.
    pub height: i32,
    /// Source rectangle width.
    pub split_width: i32,
    /// Source rectangle height.
    pub split_height: i32,
    /// Full sheet width.
    pub image_width: i32,
    /// Full sheet height.
    pub image_height: i32,
    /// Optional hover overlay.
    pub hover: Option<HoverText>,
}

/// A [`SplitImage`] taken from a client-side texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McImage(pub SplitImage);

/// An animated image; frames advance every `interval` ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GifImage {
    /// Image reference.
    pub background: String,
    /// X position.
    pub x: i32,
    /// Y position.
    pub y: i32,
    /// Display width.
    pub width: i32,
    /// Display height.
    pub height: i32,
    /// Ticks between frames.
    pub interval: i32,
    /// Optional hover overlay.
    pub hover: Option<HoverText>,
}

/// An image transferred inline rather than by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base64Image {
    /// Raw encoded image bytes (PNG/JPEG); transported base64-encoded.
    pub data: Vec<u8>,
    /// Component id.
    pub id: String,
    /// X position.
    pub x: i32,
    /// Y position.
    pub y: i32,
    /// Display width.
    pub width: i32,
    /// Display height.
    pub height: i32,
    /// Optional hover overlay.
    pub hover: Option<HoverText>,
}

/// A timed whole-image HUD overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHud {
    /// Overlay id.
    pub id: String,
    /// Image reference.
    pub background: String,
    /// X position.
    pub x: i32,
    /// Y position.
    pub y: i32,
    /// Z order.
    pub z: i32,
    /// Source image width.
    pub image_width: i32,
    /// Source image height.
    pub image_height: i32,
    /// Display width.
    pub width: i32,
    /// Display height.
    pub height: i32,
    /// Display duration in ticks, 0 for unlimited.
    pub time: i32,
}

/// A timed split-image HUD overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitImageHud {
    /// The overlay geometry shared with [`ImageHud`].
    pub base: ImageHud,
    /// Source rectangle width.
    pub split_width: i32,
    /// Source rectangle height.
    pub split_height: i32,
    /// Left edge of the source rectangle.
    pub split_x: i32,
    /// Top edge of the source rectangle.
    pub split_y: i32,
}

/// A timed HUD overlay cut from a client-side texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McImageHud(pub SplitImageHud);

/// A base64-sourced HUD overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base64ImageHud {
    /// Z order.
    pub z: i32,
    /// The transferred image.
    pub image: Base64Image,
}

/// A whole image anchored in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTag {
    /// Tag id.
    pub id: String,
    /// X offset from the anchor.
    pub x: f64,
    /// Y offset from the anchor.
    pub y: f64,
    /// Z offset from the anchor.
    pub z: f64,
    /// Image reference.
    pub background: String,
    /// Source image width.
    pub image_width: i32,
    /// Source image height.
    pub image_height: i32,
    /// Display width in world units (1.0 is one block).
    pub width: f32,
    /// Display height in world units.
    pub height: f32,
    /// Facing of the tag.
    pub direction: TagDirection,
}

/// A split image anchored in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitImageTag {
    /// The tag geometry shared with [`ImageTag`].
    pub base: ImageTag,
    /// Source rectangle width.
    pub split_width: i32,
    /// Source rectangle height.
    pub split_height: i32,
    /// Left edge of the source rectangle.
    pub split_x: i32,
    /// Top edge of the source rectangle.
    pub split_y: i32,
}

/// A split tag cut from a client-side texture.
#[derive(Debug, Clone, PartialEq)]
pub struct McImageTag(pub SplitImageTag);

/// An animated image anchored in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct GifImageTag(pub ImageTag);

/// Configuration for every image component variant.
#[derive(Debug, Clone, Default)]
pub struct ImageConfig {
    loc: Locator,
    kind: ImageKind,
    width: i32,
    height: i32,
    background: Option<String>,
    image_width: i32,
    image_height: i32,
    split_x: i32,
    split_y: i32,
    split_width: i32,
    split_height: i32,
    hover: Option<HoverText>,
    source: Option<Vec<u8>>,
    id: Option<String>,
}

impl ImageConfig {
    /// A plain image configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// The variant this configuration currently builds.
    pub fn kind(&self) -> ImageKind {
        self.kind
    }

    /// Switch to the split-image variant.
    #[must_use]
    pub fn split(mut self) -> Self {
        self.kind = ImageKind::Split;
        self
    }

    /// Switch to the client-texture variant.
    #[must_use]
    pub fn mc_image(mut self) -> Self {
        self.kind = ImageKind::Mc;
        self
    }

    /// Switch to the base64 variant.
    #[must_use]
    pub fn base64(mut self) -> Self {
        self.kind = ImageKind::Base64;
        self
    }

    /// Move the component by a relative distance.
    #[must_use]
    pub fn offset(mut self, x: i32, y: i32) -> Self {
        self.loc = self.loc.offset(x, y);
        self
    }

    /// Set the absolute component position.
    #[must_use]
    pub fn location(mut self, x: i32, y: i32) -> Self {
        self.loc = self.loc.location(x, y);
        self
    }

    /// Set the display size.
    #[must_use]
    pub fn size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the true size of the source image.
    ///
    /// The base64 variant has no separate source size; there this is an alias
    /// for [`size`](Self::size).
    #[must_use]
    pub fn image_size(mut self, width: i32, height: i32) -> Self {
        if self.kind == ImageKind::Base64 {
            return self.size(width, height);
        }
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set the image reference.
    #[must_use]
    pub fn background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    /// Set the top-left corner of the source rectangle within the sheet.
    #[must_use]
    pub fn split_offset(mut self, x: i32, y: i32) -> Self {
        self.split_x = x;
        self.split_y = y;
        self
    }

    /// Set the size of the source rectangle.
    #[must_use]
    pub fn split_size(mut self, width: i32, height: i32) -> Self {
        self.split_width = width;
        self.split_height = height;
        self
    }

    /// Attach a hover overlay.
    #[must_use]
    pub fn hover(mut self, hover: HoverText) -> Self {
        self.hover = Some(hover);
        self
    }

    /// Set the raw bytes of a base64-sourced image.
    #[must_use]
    pub fn source(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.source = Some(data.into());
        self
    }

    /// Set the component id (base64 variant).
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    fn require_background(&self) -> Result<String, BuildError> {
        self.background
            .clone()
            .ok_or(BuildError::Missing("image background"))
    }

    /// Build a plain stretched image.
    pub fn build(&self) -> Result<Image, BuildError> {
        Ok(Image {
            background: self.require_background()?,
            x: self.loc.x,
            y: self.loc.y,
            width: self.width,
            height: self.height,
            hover: self.hover.clone(),
        })
    }

    /// Build a split image.
    pub fn build_split(&self) -> Result<SplitImage, BuildError> {
        Ok(SplitImage {
            background: self.require_background()?,
            x: self.loc.x,
            y: self.loc.y,
            split_x: self.split_x,
            split_y: self.split_y,
            width: self.width,
            height: self.height,
            split_width: self.split_width,
            split_height: self.split_height,
            image_width: self.image_width,
            image_height: self.image_height,
            hover: self.hover.clone(),
        })
    }

    /// Build a client-texture split image.
    pub fn build_mc(&self) -> Result<McImage, BuildError> {
        Ok(McImage(self.build_split()?))
    }

    /// Build an animated image.
    pub fn build_gif(&self, interval: i32) -> Result<GifImage, BuildError> {
        Ok(GifImage {
            background: self.require_background()?,
            x: self.loc.x,
            y: self.loc.y,
            width: self.width,
            height: self.height,
            interval,
            hover: self.hover.clone(),
        })
    }

    /// Build a base64-sourced image.
    pub fn build_base64(&self) -> Result<Base64Image, BuildError> {
        Ok(Base64Image {
            data: self
                .source
                .clone()
                .ok_or(BuildError::Missing("base64 image source"))?,
            id: self.id.clone().unwrap_or_default(),
            x: self.loc.x,
            y: self.loc.y,
            width: self.width,
            height: self.height,
            hover: self.hover.clone(),
        })
    }

    /// Build the GUI component matching the configured [`ImageKind`].
    pub fn build_component(&self) -> Result<GuiComponent, BuildError> {
        Ok(match self.kind {
            ImageKind::Plain => GuiComponent::Image(self.build()?),
            ImageKind::Split => GuiComponent::SplitImage(self.build_split()?),
            ImageKind::Mc => GuiComponent::McImage(self.build_mc()?),
            ImageKind::Base64 => GuiComponent::Base64Image(self.build_base64()?),
        })
    }

    /// Build a HUD overlay matching the configured [`ImageKind`].
    ///
    /// The GIF variant has no HUD form.
    pub fn hud(&self, id: impl Into<String>, time: i32, z: i32) -> Result<HudImage, BuildError> {
        let id = id.into();
        Ok(match self.kind {
            ImageKind::Plain => HudImage::Image(ImageHud {
                id,
                background: self.require_background()?,
                x: self.loc.x,
                y: self.loc.y,
                z,
                image_width: self.image_width,
                image_height: self.image_height,
                width: self.width,
                height: self.height,
                time,
            }),
            ImageKind::Split => HudImage::Split(self.split_hud(id, time, z)?),
            ImageKind::Mc => HudImage::Mc(McImageHud(self.split_hud(id, time, z)?)),
            ImageKind::Base64 => HudImage::Base64(Base64ImageHud {
                z,
                image: Base64Image {
                    id,
                    ..self.build_base64()?
                },
            }),
        })
    }

    fn split_hud(&self, id: String, time: i32, z: i32) -> Result<SplitImageHud, BuildError> {
        Ok(SplitImageHud {
            base: ImageHud {
                id,
                background: self.require_background()?,
                x: self.loc.x,
                y: self.loc.y,
                z,
                image_width: self.image_width,
                image_height: self.image_height,
                width: self.width,
                height: self.height,
                time,
            },
            split_width: self.split_width,
            split_height: self.split_height,
            split_x: self.split_x,
            split_y: self.split_y,
        })
    }

    fn tag_base(
        &self,
        id: String,
        x: f64,
        y: f64,
        z: f64,
        width: f32,
        height: f32,
        direction: TagDirection,
    ) -> Result<ImageTag, BuildError> {
        Ok(ImageTag {
            id,
            x,
            y,
            z,
            background: self.require_background()?,
            image_width: self.image_width,
            image_height: self.image_height,
            width,
            height,
            direction,
        })
    }

    /// Build an in-world tag matching the configured [`ImageKind`].
    ///
    /// Width and height are in world units. The base64 variant has no tag
    /// form.
    #[allow(clippy::too_many_arguments)]
    pub fn tag(
        &self,
        id: impl Into<String>,
        x: f64,
        y: f64,
        z: f64,
        width: f32,
        height: f32,
        direction: TagDirection,
    ) -> Result<TagImage, BuildError> {
        let base = |direction| self.tag_base(id.into(), x, y, z, width, height, direction);
        Ok(match self.kind {
            ImageKind::Plain => TagImage::Image(base(direction)?),
            ImageKind::Split => TagImage::Split(self.split_tag(base(direction)?)),
            ImageKind::Mc => TagImage::Mc(McImageTag(self.split_tag(base(direction)?))),
            ImageKind::Base64 => return Err(BuildError::Unsupported("base64 image tag")),
        })
    }

    /// Build an animated in-world tag.
    #[allow(clippy::too_many_arguments)]
    pub fn gif_tag(
        &self,
        id: impl Into<String>,
        x: f64,
        y: f64,
        z: f64,
        width: f32,
        height: f32,
        direction: TagDirection,
    ) -> Result<GifImageTag, BuildError> {
        if self.kind == ImageKind::Base64 {
            return Err(BuildError::Unsupported("base64 gif tag"));
        }
        Ok(GifImageTag(self.tag_base(
            id.into(),
            x,
            y,
            z,
            width,
            height,
            direction,
        )?))
    }

    fn split_tag(&self, base: ImageTag) -> SplitImageTag {
        SplitImageTag {
            base,
            split_width: self.split_width,
            split_height: self.split_height,
            split_x: self.split_x,
            split_y: self.split_y,
        }
    }
}

/// A HUD overlay built from an [`ImageConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HudImage {
    /// Whole-image overlay.
    Image(ImageHud),
    /// Split-image overlay.
    Split(SplitImageHud),
    /// Client-texture overlay.
    Mc(McImageHud),
    /// Inline-transferred overlay.
    Base64(Base64ImageHud),
}

/// An in-world tag built from an [`ImageConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum TagImage {
    /// Whole-image tag.
    Image(ImageTag),
    /// Split-image tag.
    Split(SplitImageTag),
    /// Client-texture tag.
    Mc(McImageTag),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_is_required() {
        let err = ImageConfig::new().size(4, 4).build().unwrap_err();
        assert_eq!(err, BuildError::Missing("image background"));
    }

    #[test]
    fn kind_switch_dispatches_build_component() {
        let cfg = ImageConfig::new()
            .split()
            .background("sheet.png")
            .split_offset(1, 2)
            .split_size(3, 4)
            .image_size(9, 9)
            .size(6, 8)
            .offset(100, 0);
        match cfg.build_component().unwrap() {
            GuiComponent::SplitImage(split) => {
                assert_eq!((split.x, split.y), (100, 0));
                assert_eq!((split.split_x, split.split_y), (1, 2));
                assert_eq!((split.split_width, split.split_height), (3, 4));
                assert_eq!((split.image_width, split.image_height), (9, 9));
            }
            other => panic!("expected a split image, got {other:?}"),
        }
    }

    #[test]
    fn base64_image_size_aliases_size() {
        let cfg = ImageConfig::new()
            .base64()
            .source(vec![1, 2, 3])
            .image_size(60, 40);
        let image = cfg.build_base64().unwrap();
        assert_eq!((image.width, image.height), (60, 40));
    }

    #[test]
    fn base64_has_no_tag_form() {
        let err = ImageConfig::new()
            .base64()
            .source(vec![0])
            .tag("t", 0.0, 0.0, 0.0, 1.0, 1.0, TagDirection::default())
            .unwrap_err();
        assert_eq!(err, BuildError::Unsupported("base64 image tag"));
    }
}
