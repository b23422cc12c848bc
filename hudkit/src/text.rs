// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text components, hover overlays, and the text tag.

use crate::component::TagDirection;
use crate::error::BuildError;
use crate::locator::Locator;

/// Lines shown when the cursor hovers over a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverText {
    /// Lines of the overlay, top to bottom.
    pub lines: Vec<String>,
}

/// A multi-line text block inside a GUI.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// X position.
    pub x: i32,
    /// Y position.
    pub y: i32,
    /// Lines of text, top to bottom.
    pub lines: Vec<String>,
    /// Uniform scale applied at render time.
    pub scale: f64,
    /// Optional hover overlay.
    pub hover: Option<HoverText>,
    /// Width of the hover trigger area, when a hover is present.
    pub hover_width: i32,
}

/// A timed text overlay on the HUD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextHud {
    /// Overlay id, unique per player.
    pub id: String,
    /// X position.
    pub x: i32,
    /// Y position.
    pub y: i32,
    /// Z order.
    pub z: i32,
    /// Lines of text.
    pub lines: Vec<String>,
    /// Display duration in ticks, 0 for unlimited.
    pub time: i32,
}

/// A single line of text anchored in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct TextTag {
    /// Tag id.
    pub id: String,
    /// X offset from the anchor.
    pub x: f64,
    /// Y offset from the anchor.
    pub y: f64,
    /// Z offset from the anchor.
    pub z: f64,
    /// The single line shown.
    pub line: String,
    /// Whether the line renders on a dark backdrop.
    pub backdrop: bool,
    /// Facing of the tag.
    pub direction: TagDirection,
}

/// Configuration for [`Text`] components and [`HoverText`] overlays.
#[derive(Debug, Clone, Default)]
pub struct TextConfig {
    loc: Locator,
    lines: Vec<String>,
    scale: f64,
    hover: Option<HoverText>,
    hover_width: i32,
}

impl TextConfig {
    /// An empty text configuration with scale 1.
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            ..Self::default()
        }
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

    /// Set the render-time scale.
    #[must_use]
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Append one line.
    #[must_use]
    pub fn add_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Append several lines.
    #[must_use]
    pub fn add_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Replace all lines.
    #[must_use]
    pub fn lines(mut self, lines: Vec<String>) -> Self {
        self.lines = lines;
        self
    }

    /// Attach a hover overlay built from a nested text configuration.
    ///
    /// `width` is the width of the area that triggers the overlay.
    #[must_use]
    pub fn hover(mut self, build: impl FnOnce(Self) -> Self, width: i32) -> Self {
        self.hover = Some(build(Self::new()).build_hover());
        self.hover_width = width;
        self
    }

    /// Build the GUI text block.
    pub fn build(self) -> Text {
        Text {
            x: self.loc.x,
            y: self.loc.y,
            lines: self.lines,
            scale: self.scale,
            hover: self.hover,
            hover_width: self.hover_width,
        }
    }

    /// Build a hover overlay from the accumulated lines.
    pub fn build_hover(self) -> HoverText {
        HoverText { lines: self.lines }
    }

    /// Build a HUD text overlay.
    pub fn hud(self, id: impl Into<String>, time: i32, z: i32) -> TextHud {
        TextHud {
            id: id.into(),
            x: self.loc.x,
            y: self.loc.y,
            z,
            lines: self.lines,
            time,
        }
    }

    /// Build an in-world text tag.
    ///
    /// Tags hold exactly one line; anything else is a [`BuildError::LineCount`].
    pub fn tag(
        self,
        id: impl Into<String>,
        x: f64,
        y: f64,
        z: f64,
        backdrop: bool,
        direction: TagDirection,
    ) -> Result<TextTag, BuildError> {
        let mut lines = self.lines;
        if lines.len() != 1 {
            return Err(BuildError::LineCount(lines.len()));
        }
        Ok(TextTag {
            id: id.into(),
            x,
            y,
            z,
            line: lines.remove(0),
            backdrop,
            direction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_requires_single_line() {
        let direction = TagDirection::default();
        let err = TextConfig::new()
            .tag("t", 0.0, 0.0, 0.0, false, direction.clone())
            .unwrap_err();
        assert_eq!(err, BuildError::LineCount(0));

        let err = TextConfig::new()
            .add_line("a")
            .add_line("b")
            .tag("t", 0.0, 0.0, 0.0, false, direction.clone())
            .unwrap_err();
        assert_eq!(err, BuildError::LineCount(2));

        let tag = TextConfig::new()
            .add_line("only")
            .tag("t", 1.0, 2.0, 3.0, true, direction)
            .unwrap();
        assert_eq!(tag.line, "only");
        assert!(tag.backdrop);
    }

    #[test]
    fn hover_builds_from_nested_config() {
        let text = TextConfig::new()
            .add_line("body")
            .hover(|h| h.add_line("tip"), 40)
            .build();
        assert_eq!(text.hover.unwrap().lines, ["tip"]);
        assert_eq!(text.hover_width, 40);
    }
}
