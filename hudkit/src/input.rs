// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-line input fields and multi-line text areas.

use crate::color::Color;
use crate::component::GuiComponent;
use crate::locator::Locator;
use crate::text::HoverText;

/// A single-line input field inside a GUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    /// X position.
    pub x: i32,
    /// Y position.
    pub y: i32,
    /// Field width.
    pub width: i32,
    /// Field height.
    pub height: i32,
    /// Maximum number of characters accepted.
    pub max_length: i32,
    /// Component id.
    pub id: i32,
    /// Initial value.
    pub value: String,
    /// Fill and border colors, when the colored variant is used.
    pub colors: Option<(Color, Color)>,
    /// Optional hover overlay.
    pub hover: Option<HoverText>,
}

/// A multi-line text area inside a GUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextArea {
    /// X position.
    pub x: i32,
    /// Y position.
    pub y: i32,
    /// Area width.
    pub width: i32,
    /// Area height.
    pub height: i32,
    /// Maximum number of characters accepted.
    pub max_length: i32,
    /// Component id.
    pub id: i32,
    /// Initial value, one entry per line.
    pub lines: Vec<String>,
    /// Fill and border colors, when the colored variant is used.
    pub colors: Option<(Color, Color)>,
    /// Optional hover overlay.
    pub hover: Option<HoverText>,
}

/// Configuration for [`TextField`] and [`TextArea`] components.
///
/// Builds a field unless [`area`](Self::area) was called.
#[derive(Debug, Clone)]
pub struct InputConfig {
    loc: Locator,
    width: i32,
    height: i32,
    max_length: i32,
    id: i32,
    value: String,
    is_area: bool,
    hover: Option<HoverText>,
    main_color: Option<Color>,
    side_color: Option<Color>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            loc: Locator::new(),
            width: 0,
            height: 0,
            max_length: i32::MAX,
            id: 0,
            value: String::new(),
            is_area: false,
            hover: None,
            main_color: None,
            side_color: None,
        }
    }
}

impl InputConfig {
    /// An empty input configuration in field mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the absolute component position.
    #[must_use]
    pub fn location(mut self, x: i32, y: i32) -> Self {
        self.loc = self.loc.location(x, y);
        self
    }

    /// Move the component by a relative distance.
    #[must_use]
    pub fn offset(mut self, x: i32, y: i32) -> Self {
        self.loc = self.loc.offset(x, y);
        self
    }

    /// Set the component size.
    #[must_use]
    pub fn size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Cap the number of characters the component accepts.
    #[must_use]
    pub fn max_length(mut self, max: i32) -> Self {
        self.max_length = max;
        self
    }

    /// Set the component id.
    #[must_use]
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Attach a hover overlay.
    #[must_use]
    pub fn hover(mut self, hover: HoverText) -> Self {
        self.hover = Some(hover);
        self
    }

    /// Build a multi-line area instead of a field.
    #[must_use]
    pub fn area(mut self) -> Self {
        self.is_area = true;
        self
    }

    /// Build a single-line field (the default).
    #[must_use]
    pub fn field(mut self) -> Self {
        self.is_area = false;
        self
    }

    /// Use the colored variant with the given fill and border colors.
    ///
    /// E.g. `0x70EEAD0E`: `70` is the alpha, `EEAD0E` the color.
    #[must_use]
    pub fn color(mut self, main: Color, side: Color) -> Self {
        self.main_color = Some(main);
        self.side_color = Some(side);
        self
    }

    /// Set the initial value. Newlines split into lines in area mode.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    fn colors(&self) -> Option<(Color, Color)> {
        self.main_color.zip(self.side_color)
    }

    /// Build a single-line field, regardless of mode.
    pub fn build_field(&self) -> TextField {
        TextField {
            x: self.loc.x,
            y: self.loc.y,
            width: self.width,
            height: self.height,
            max_length: self.max_length,
            id: self.id,
            value: self.value.clone(),
            colors: self.colors(),
            hover: self.hover.clone(),
        }
    }

    /// Build a multi-line area, regardless of mode.
    pub fn build_area(&self) -> TextArea {
        TextArea {
            x: self.loc.x,
            y: self.loc.y,
            width: self.width,
            height: self.height,
            max_length: self.max_length,
            id: self.id,
            lines: split_lines(&self.value),
            colors: self.colors(),
            hover: self.hover.clone(),
        }
    }

    /// Build the component matching the configured mode.
    pub fn build(&self) -> GuiComponent {
        if self.is_area {
            GuiComponent::TextArea(self.build_area())
        } else {
            GuiComponent::TextField(self.build_field())
        }
    }
}

/// Split a value on `'\n'`, keeping empty lines.
pub fn split_lines(value: &str) -> Vec<String> {
    value.split('\n').map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_mode_splits_value() {
        let component = InputConfig::new().area().value("a\nb\n").build();
        match component {
            GuiComponent::TextArea(area) => assert_eq!(area.lines, ["a", "b", ""]),
            other => panic!("expected an area, got {other:?}"),
        }
    }

    #[test]
    fn field_is_the_default_mode() {
        assert!(matches!(
            InputConfig::new().build(),
            GuiComponent::TextField(_)
        ));
    }

    #[test]
    fn colors_require_both_halves() {
        let cfg = InputConfig::new().color(Color::new(), Color::from_code(0x70EEAD0E));
        assert!(cfg.build_field().colors.is_some());
        assert!(InputConfig::new().build_field().colors.is_none());
    }
}
