// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Buttons, including the gated "clickable" variant.

use crate::error::BuildError;
use crate::locator::Locator;
use crate::metrics::FontMetrics;
use crate::text::HoverText;

/// A button inside a GUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    /// Button id, reported back on click.
    pub id: String,
    /// Label text, if any.
    pub text: Option<String>,
    /// Image shown at rest.
    pub background: String,
    /// Image shown under the cursor.
    pub focus: String,
    /// X position.
    pub x: i32,
    /// Y position.
    pub y: i32,
    /// Button width.
    pub width: i32,
    /// Button height.
    pub height: i32,
    /// Optional hover overlay.
    pub hover: Option<HoverText>,
    /// Click gating, when this is the clickable variant.
    pub gate: Option<ClickGate>,
}

/// Gating state of a clickable button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickGate {
    /// Image shown while the button rejects clicks.
    pub disabled_background: String,
    /// Whether the button currently accepts clicks.
    pub clickable: bool,
}

/// A timed button HUD overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonHud {
    /// Overlay id.
    pub id: String,
    /// The displayed button.
    pub button: Button,
    /// Display duration in ticks, 0 for unlimited.
    pub time: i32,
    /// Z order.
    pub z: i32,
}

/// Configuration for [`Button`] components.
#[derive(Debug, Clone, Default)]
pub struct ButtonConfig {
    loc: Locator,
    id: Option<String>,
    text: Option<String>,
    background: Option<String>,
    focus: Option<String>,
    width: i32,
    height: i32,
    hover: Option<HoverText>,
    unclickable: Option<String>,
    clickable: Option<bool>,
}

impl ButtonConfig {
    /// An empty button configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the button id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the rest image, and the focus image when one is given.
    ///
    /// A missing focus image falls back to the rest image.
    #[must_use]
    pub fn background(mut self, background: impl Into<String>, focus: Option<String>) -> Self {
        let background = background.into();
        self.focus = Some(focus.unwrap_or_else(|| background.clone()));
        self.background = Some(background);
        self
    }

    /// Move the button by a relative distance.
    #[must_use]
    pub fn offset(mut self, x: i32, y: i32) -> Self {
        self.loc = self.loc.offset(x, y);
        self
    }

    /// Set the absolute button position.
    #[must_use]
    pub fn location(mut self, x: i32, y: i32) -> Self {
        self.loc = self.loc.location(x, y);
        self
    }

    /// Set the button size.
    #[must_use]
    pub fn size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Size the button around its label.
    ///
    /// The four offsets are the padding between the label and the respective
    /// button edge; the label itself is measured with `metrics`. Server-side
    /// measurement can differ slightly from the client, so generous left and
    /// right padding is advisable.
    #[must_use]
    pub fn calculate_size(
        self,
        metrics: &FontMetrics,
        left: i32,
        right: i32,
        top: i32,
        bottom: i32,
    ) -> Self {
        match &self.text {
            None => self.size(left + right, top + bottom),
            Some(text) => {
                let width = metrics.line_width(text) as i32;
                let height = FontMetrics::LINE_HEIGHT as i32;
                self.size(left + right + width, top + bottom + height)
            }
        }
    }

    /// Set the label text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Attach a hover overlay.
    #[must_use]
    pub fn hover(mut self, hover: HoverText) -> Self {
        self.hover = Some(hover);
        self
    }

    /// Set the image shown while the button rejects clicks.
    ///
    /// Setting it switches the build to the clickable variant, initially
    /// accepting clicks.
    #[must_use]
    pub fn unclickable(mut self, image: impl Into<String>) -> Self {
        self.unclickable = Some(image.into());
        if self.clickable.is_none() {
            self.clickable = Some(true);
        }
        self
    }

    /// Set whether the button currently accepts clicks.
    ///
    /// Setting it switches the build to the clickable variant.
    #[must_use]
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = Some(clickable);
        self
    }

    /// Build the button.
    ///
    /// Returns the clickable variant when [`unclickable`](Self::unclickable)
    /// or [`clickable`](Self::clickable) was used; the disabled image is then
    /// required.
    pub fn build(&self) -> Result<Button, BuildError> {
        let id = self.id.clone().ok_or(BuildError::Missing("button id"))?;
        let background = self
            .background
            .clone()
            .ok_or(BuildError::Missing("button background"))?;
        let focus = self
            .focus
            .clone()
            .ok_or(BuildError::Missing("button focus"))?;
        let gate = match self.clickable {
            None => None,
            Some(clickable) => Some(ClickGate {
                disabled_background: self
                    .unclickable
                    .clone()
                    .ok_or(BuildError::Missing("unclickable image"))?,
                clickable,
            }),
        };
        if self.width == 0 || self.height == 0 {
            log::warn!("button [{id}] size is 0");
        }
        Ok(Button {
            id,
            text: self.text.clone(),
            background,
            focus,
            x: self.loc.x,
            y: self.loc.y,
            width: self.width,
            height: self.height,
            hover: self.hover.clone(),
            gate,
        })
    }

    /// Build a HUD overlay showing the button.
    ///
    /// The clickable variant has no HUD form.
    pub fn hud(&self, id: impl Into<String>, time: i32, z: i32) -> Result<ButtonHud, BuildError> {
        if self.clickable.is_some() {
            return Err(BuildError::Unsupported("clickable button HUD"));
        }
        Ok(ButtonHud {
            id: id.into(),
            button: self.build()?,
            time,
            z,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_defaults_to_background() {
        let button = ButtonConfig::new()
            .id("b")
            .background("rest.png", None)
            .size(10, 10)
            .build()
            .unwrap();
        assert_eq!(button.focus, "rest.png");
        assert!(button.gate.is_none());
    }

    #[test]
    fn unclickable_switches_variant() {
        let button = ButtonConfig::new()
            .id("b")
            .background("rest.png", Some("focus.png".into()))
            .size(10, 10)
            .unclickable("off.png")
            .clickable(false)
            .build()
            .unwrap();
        let gate = button.gate.unwrap();
        assert_eq!(gate.disabled_background, "off.png");
        assert!(!gate.clickable);
    }

    #[test]
    fn clickable_without_disabled_image_fails() {
        let err = ButtonConfig::new()
            .id("b")
            .background("rest.png", None)
            .clickable(true)
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::Missing("unclickable image"));
    }

    #[test]
    fn calculate_size_uses_padding_for_missing_text() {
        let metrics = FontMetrics::new();
        let button = ButtonConfig::new()
            .id("b")
            .background("rest.png", None)
            .calculate_size(&metrics, 10, 10, 3, 4)
            .build()
            .unwrap();
        assert_eq!((button.width, button.height), (20, 7));
    }
}
