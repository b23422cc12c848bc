// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! GUI assembly: a component sink plus sizing, scoped placement, and the
//! final screen records.

use crate::button::ButtonConfig;
use crate::checkbox::CheckboxConfig;
use crate::component::GuiComponent;
use crate::entity::EntityDrawConfig;
use crate::error::BuildError;
use crate::image::ImageConfig;
use crate::input::InputConfig;
use crate::locator::Locator;
use crate::metrics::FontMetrics;
use crate::scrolling::ScrollingListConfig;
use crate::slice9::Slice9;
use crate::slot::SlotConfig;
use crate::text::TextConfig;

/// A full-screen GUI ready to open for a player.
#[derive(Debug, Clone, PartialEq)]
pub struct Gui {
    /// Background image reference.
    pub background: String,
    /// X position on screen.
    pub x: i32,
    /// Y position on screen.
    pub y: i32,
    /// GUI width.
    pub width: i32,
    /// GUI height.
    pub height: i32,
    /// Whether the player can close the GUI themselves.
    pub closable: bool,
    /// The assembled components.
    pub components: Vec<GuiComponent>,
}

/// A GUI that also shows the player's inventory below it.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryGui {
    /// The screen part shared with [`Gui`].
    pub base: Gui,
    /// True width of the background image.
    pub image_width: i32,
    /// True height of the background image.
    pub image_height: i32,
    /// X position of the inventory slot grid.
    pub slot_x: i32,
    /// Y position of the inventory slot grid.
    pub slot_y: i32,
}

/// Configuration assembling a [`Gui`].
///
/// Components are inserted through closures that receive a fresh
/// configuration already placed at the current origin:
///
/// ```
/// use hudkit::gui::GuiConfig;
///
/// let gui = GuiConfig::new()
///     .size(400, 200)
///     .image(|i| Ok(i.background("[local]login.png").image_size(564, 507).size(400, 200)))?
///     .offset(30, 20)
///     .text(|t| Ok(t.add_line("Welcome")))?
///     .build("[local]bg.png", -1, -1);
/// assert_eq!(gui.components.len(), 2);
/// # Ok::<(), hudkit::BuildError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GuiConfig {
    loc: Locator,
    width: i32,
    height: i32,
    right_border: i32,
    bottom_border: i32,
    closable: bool,
    components: Vec<GuiComponent>,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            loc: Locator::new(),
            width: 0,
            height: 0,
            right_border: 0,
            bottom_border: 0,
            closable: true,
            components: Vec::new(),
        }
    }
}

impl GuiConfig {
    /// An empty, closable configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the GUI size.
    #[must_use]
    pub fn size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Extra size appended by [`Self::calculate_size`].
    #[must_use]
    pub fn border(mut self, right: i32, bottom: i32) -> Self {
        self.right_border = right;
        self.bottom_border = bottom;
        self
    }

    /// Whether the player can close the GUI themselves.
    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Set the absolute component origin.
    #[must_use]
    pub fn location(mut self, x: i32, y: i32) -> Self {
        self.loc = self.loc.location(x, y);
        self
    }

    /// Move the component origin by a relative distance.
    #[must_use]
    pub fn offset(mut self, x: i32, y: i32) -> Self {
        self.loc = self.loc.offset(x, y);
        self
    }

    /// Run a placement scope: origin moves inside the closure are undone
    /// afterwards, inserted components stay.
    pub fn scope(
        mut self,
        f: impl FnOnce(Self) -> Result<Self, BuildError>,
    ) -> Result<Self, BuildError> {
        let saved = self.loc;
        self = f(self)?;
        self.loc = saved;
        Ok(self)
    }

    /// Add an already-built component.
    #[must_use]
    pub fn component(mut self, component: GuiComponent) -> Self {
        self.components.push(component);
        self
    }

    /// Add an image component at the current origin.
    pub fn image(
        self,
        f: impl FnOnce(ImageConfig) -> Result<ImageConfig, BuildError>,
    ) -> Result<Self, BuildError> {
        let config = f(ImageConfig::new().location(self.loc.x, self.loc.y))?;
        let component = config.build_component()?;
        Ok(self.component(component))
    }

    /// Add a text component at the current origin.
    pub fn text(
        self,
        f: impl FnOnce(TextConfig) -> Result<TextConfig, BuildError>,
    ) -> Result<Self, BuildError> {
        let config = f(TextConfig::new().location(self.loc.x, self.loc.y))?;
        let component = GuiComponent::Text(config.build());
        Ok(self.component(component))
    }

    /// Add a button component at the current origin.
    pub fn button(
        self,
        f: impl FnOnce(ButtonConfig) -> Result<ButtonConfig, BuildError>,
    ) -> Result<Self, BuildError> {
        let config = f(ButtonConfig::new().location(self.loc.x, self.loc.y))?;
        let component = GuiComponent::Button(config.build()?);
        Ok(self.component(component))
    }

    /// Add a checkbox component at the current origin.
    pub fn check(
        self,
        f: impl FnOnce(CheckboxConfig) -> Result<CheckboxConfig, BuildError>,
    ) -> Result<Self, BuildError> {
        let config = f(CheckboxConfig::new().location(self.loc.x, self.loc.y))?;
        let component = GuiComponent::Checkbox(config.build()?);
        Ok(self.component(component))
    }

    /// Add a text input component at the current origin.
    pub fn input(
        self,
        f: impl FnOnce(InputConfig) -> Result<InputConfig, BuildError>,
    ) -> Result<Self, BuildError> {
        let config = f(InputConfig::new().location(self.loc.x, self.loc.y))?;
        let component = config.build();
        Ok(self.component(component))
    }

    /// Add an item slot component at the current origin.
    ///
    /// Slot ids are reassigned in insertion order when the GUI builds.
    pub fn slot(
        self,
        f: impl FnOnce(SlotConfig) -> Result<SlotConfig, BuildError>,
    ) -> Result<Self, BuildError> {
        let config = f(SlotConfig::new().location(self.loc.x, self.loc.y))?;
        let component = GuiComponent::Slot(config.build()?);
        Ok(self.component(component))
    }

    /// Add an entity render component at the current origin.
    pub fn draw(
        self,
        f: impl FnOnce(EntityDrawConfig) -> Result<EntityDrawConfig, BuildError>,
    ) -> Result<Self, BuildError> {
        let config = f(EntityDrawConfig::new().location(self.loc.x, self.loc.y))?;
        let component = GuiComponent::EntityDraw(config.build()?);
        Ok(self.component(component))
    }

    /// Add a scrolling list component at the current origin.
    pub fn scrolling_list(
        self,
        f: impl FnOnce(ScrollingListConfig) -> Result<ScrollingListConfig, BuildError>,
    ) -> Result<Self, BuildError> {
        let config = f(ScrollingListConfig::new().location(self.loc.x, self.loc.y))?;
        let component = GuiComponent::ScrollingList(config.build());
        Ok(self.component(component))
    }

    /// Size the GUI to enclose every inserted component, plus the
    /// configured border.
    ///
    /// Text extents come from the client font metrics table; slots count
    /// as 16x16.
    #[must_use]
    pub fn calculate_size(mut self, metrics: &FontMetrics) -> Self {
        let mut width = 0;
        let mut height = 0;
        let mut grow = |w: i32, h: i32| {
            width = width.max(w);
            height = height.max(h);
        };
        for component in &self.components {
            match component {
                GuiComponent::Slot(slot) => grow(slot.x + 16, slot.y + 16),
                GuiComponent::Text(text) => {
                    let mut longest = 0.0_f32;
                    let mut line_count = 0_usize;
                    for entry in &text.lines {
                        for line in crate::input::split_lines(entry) {
                            line_count += 1;
                            longest = longest.max(metrics.line_width(&line));
                        }
                    }
                    let lines_height = line_count as f64 * f64::from(FontMetrics::LINE_HEIGHT);
                    grow(
                        text.x + (text.scale * f64::from(longest)).abs() as i32,
                        text.y + (text.scale * lines_height).abs() as i32,
                    );
                }
                GuiComponent::ScrollingList(list) => grow(list.x + list.width, list.y + list.height),
                GuiComponent::Image(image) => grow(image.x + image.width, image.y + image.height),
                GuiComponent::SplitImage(split) => grow(split.x + split.width, split.y + split.height),
                GuiComponent::McImage(mc) => grow(mc.0.x + mc.0.width, mc.0.y + mc.0.height),
                GuiComponent::GifImage(gif) => grow(gif.x + gif.width, gif.y + gif.height),
                GuiComponent::Base64Image(image) => grow(image.x + image.width, image.y + image.height),
                GuiComponent::Button(button) => grow(button.x + button.width, button.y + button.height),
                GuiComponent::TextField(field) => grow(field.x + field.width, field.y + field.height),
                GuiComponent::TextArea(area) => grow(area.x + area.width, area.y + area.height),
                GuiComponent::EntityDraw(draw) => grow(draw.x + draw.scale / 2, draw.y),
                GuiComponent::Checkbox(_) => {}
            }
        }
        self.width = width + self.right_border;
        self.height = height + self.bottom_border;
        self
    }

    fn assign_slot_ids(components: &mut [GuiComponent]) {
        let mut id = 0;
        for component in components {
            if let GuiComponent::Slot(slot) = component {
                slot.id = id;
                id += 1;
            }
        }
    }

    /// Build the GUI.
    #[must_use]
    pub fn build(&self, background: impl Into<String>, x: i32, y: i32) -> Gui {
        let mut components = self.components.clone();
        Self::assign_slot_ids(&mut components);
        Gui {
            background: background.into(),
            x,
            y,
            width: self.width,
            height: self.height,
            closable: self.closable,
            components,
        }
    }

    /// Build the GUI with a nine-slice background.
    ///
    /// The slice is resized to the GUI, its tiles are prepended to the
    /// component list, and its center image becomes the GUI background.
    pub fn build_with(&self, slice9: &Slice9, x: i32, y: i32) -> Result<Gui, BuildError> {
        let background = slice9
            .center
            .clone()
            .ok_or(BuildError::Missing("slice9 center"))?;
        let resized = slice9.clone().location(0, 0).size(self.width, self.height);
        let mut components = resized.expand(false);
        components.extend_from_slice(&self.components);
        Self::assign_slot_ids(&mut components);
        Ok(Gui {
            background,
            x,
            y,
            width: self.width,
            height: self.height,
            closable: self.closable,
            components,
        })
    }

    /// Build a GUI with the player inventory attached.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn build_inventory(
        &self,
        background: impl Into<String>,
        x: i32,
        y: i32,
        image_width: i32,
        image_height: i32,
        slot_x: i32,
        slot_y: i32,
    ) -> InventoryGui {
        InventoryGui {
            base: self.build(background, x, y),
            image_width,
            image_height,
            slot_x,
            slot_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_restores_the_origin() -> Result<(), BuildError> {
        let gui = GuiConfig::new()
            .size(100, 100)
            .scope(|g| g.offset(40, 40).text(|t| Ok(t.add_line("inner"))))?
            .text(|t| Ok(t.add_line("outer")))?
            .build("bg.png", -1, -1);
        match (&gui.components[0], &gui.components[1]) {
            (GuiComponent::Text(inner), GuiComponent::Text(outer)) => {
                assert_eq!((inner.x, inner.y), (40, 40));
                assert_eq!((outer.x, outer.y), (0, 0));
            }
            other => panic!("unexpected components {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn slot_ids_are_reassigned_in_order() -> Result<(), BuildError> {
        let gui = GuiConfig::new()
            .slot(|s| Ok(s.item("minecraft:stone")))?
            .offset(20, 0)
            .slot(|s| Ok(s.item("minecraft:dirt")))?
            .build("bg.png", -1, -1);
        let ids: Vec<i32> = gui
            .components
            .iter()
            .map(|c| match c {
                GuiComponent::Slot(slot) => slot.id,
                other => panic!("unexpected component {other:?}"),
            })
            .collect();
        assert_eq!(ids, [0, 1]);
        Ok(())
    }

    #[test]
    fn calculate_size_encloses_components() -> Result<(), BuildError> {
        let metrics = {
            let mut m = FontMetrics::new();
            m.set(b'x'.into(), 6.0);
            m
        };
        let gui = GuiConfig::new()
            .border(10, 10)
            .offset(50, 30)
            .slot(|s| Ok(s.item("minecraft:stone")))?
            .location(0, 0)
            .text(|t| Ok(t.add_line("xxxx").scale(2.0)))?
            .calculate_size(&metrics)
            .build("bg.png", -1, -1);
        // Slot: 50+16 wide, 30+16 tall. Text: 48 wide, 19 tall. Border adds 10.
        assert_eq!(gui.width, 76);
        assert_eq!(gui.height, 56);
        Ok(())
    }

    #[test]
    fn build_with_prepends_slice_tiles() -> Result<(), BuildError> {
        let slice = Slice9::new()
            .insets(3, 3, 3, 3)
            .image_size(9, 9, 1, 1)
            .address("sheet.png", "center.png");
        let gui = GuiConfig::new()
            .size(233, 233)
            .text(|t| Ok(t.add_line("hello")))?
            .build_with(&slice, -1, -1)?;
        assert_eq!(gui.background, "center.png");
        // Eight border tiles, no center tile, then the text.
        assert_eq!(gui.components.len(), 9);
        assert!(matches!(gui.components[8], GuiComponent::Text(_)));
        Ok(())
    }
}
