// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nine-slice tiling: expand a small bordered sheet into the split-image
//! rectangles that fill an arbitrary target size.
//!
//! The sheet is cut along four inset lines into corners, edges, and a
//! center. Corners render at their source size, edges stretch along one
//! axis, and the center (a separate image) fills the middle. When the
//! target is smaller than the insets along an axis, the layout collapses:
//! one constrained axis drops the edge tiles for that axis, two
//! constrained axes drop all edges and the center, leaving only the four
//! corner quadrants at half target size each.
//!
//! When a half-split is needed, the first half takes the floor of the
//! target over two and the second half takes the remainder, so odd
//! targets bias the far tile larger by one unit.

use crate::component::GuiComponent;
use crate::image::{Image, SplitImage};
use crate::locator::Locator;

/// A nine-slice background description.
///
/// ```
/// use hudkit::slice9::Slice9;
///
/// let tiles = Slice9::new()
///     .insets(3, 3, 3, 3)
///     .image_size(9, 9, 1, 1)
///     .address("[local]slice9.png", "[local]slice9.center.png")
///     .size(100, 100)
///     .expand(true);
/// assert_eq!(tiles.len(), 9);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slice9 {
    loc: Locator,
    /// Left inset, in sheet pixels.
    pub left: i32,
    /// Right inset.
    pub right: i32,
    /// Top inset.
    pub top: i32,
    /// Bottom inset.
    pub bottom: i32,
    /// Target render width.
    pub width: i32,
    /// Target render height.
    pub height: i32,
    /// Reference of the bordered sheet image.
    pub sheet: Option<String>,
    /// Reference of the center fill image.
    pub center: Option<String>,
    /// Sheet image width.
    pub sheet_width: i32,
    /// Sheet image height.
    pub sheet_height: i32,
    /// Center image width.
    pub center_width: i32,
    /// Center image height.
    pub center_height: i32,
}

impl Slice9 {
    /// An empty description. Insets are not validated; geometry for
    /// insets larger than the sheet is the caller's problem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the absolute anchor position.
    #[must_use]
    pub fn location(mut self, x: i32, y: i32) -> Self {
        self.loc = self.loc.location(x, y);
        self
    }

    /// Move the anchor by a relative distance.
    #[must_use]
    pub fn offset(mut self, x: i32, y: i32) -> Self {
        self.loc = self.loc.offset(x, y);
        self
    }

    /// Set all four cut-line insets at once.
    #[must_use]
    pub fn insets(self, left: i32, right: i32, top: i32, bottom: i32) -> Self {
        self.left(left).right(right).top(top).bottom(bottom)
    }

    /// Distance of the left cut line from the sheet's left edge.
    #[must_use]
    pub fn left(mut self, left: i32) -> Self {
        self.left = left;
        self
    }

    /// Distance of the right cut line from the sheet's right edge.
    #[must_use]
    pub fn right(mut self, right: i32) -> Self {
        self.right = right;
        self
    }

    /// Distance of the top cut line from the sheet's top edge.
    #[must_use]
    pub fn top(mut self, top: i32) -> Self {
        self.top = top;
        self
    }

    /// Distance of the bottom cut line from the sheet's bottom edge.
    #[must_use]
    pub fn bottom(mut self, bottom: i32) -> Self {
        self.bottom = bottom;
        self
    }

    /// Set the target render size.
    #[must_use]
    pub fn size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the source sizes of the sheet and center images.
    #[must_use]
    pub fn image_size(
        mut self,
        sheet_width: i32,
        sheet_height: i32,
        center_width: i32,
        center_height: i32,
    ) -> Self {
        self.sheet_width = sheet_width;
        self.sheet_height = sheet_height;
        self.center_width = center_width;
        self.center_height = center_height;
        self
    }

    /// Set the sheet and center image references.
    #[must_use]
    pub fn address(mut self, sheet: impl Into<String>, center: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self.center = Some(center.into());
        self
    }

    fn tile(&self, dx: i32, dy: i32, w: i32, h: i32, sx: i32, sy: i32, sw: i32, sh: i32) -> GuiComponent {
        GuiComponent::SplitImage(SplitImage {
            background: self.sheet.clone().unwrap_or_default(),
            x: self.loc.x + dx,
            y: self.loc.y + dy,
            split_x: sx,
            split_y: sy,
            width: w,
            height: h,
            split_width: sw,
            split_height: sh,
            image_width: self.sheet_width,
            image_height: self.sheet_height,
            hover: None,
        })
    }

    /// Expand into positioned draw rectangles.
    ///
    /// `with_center` adds the center fill in the unconstrained layout;
    /// the collapsed layouts never draw a center.
    pub fn expand(&self, with_center: bool) -> Vec<GuiComponent> {
        let Self {
            left,
            right,
            top,
            bottom,
            width,
            height,
            sheet_width: sw,
            sheet_height: sh,
            ..
        } = *self;
        // First half floors, second half takes the remainder.
        let (w1, w2) = (width / 2, width - width / 2);
        let (h1, h2) = (height / 2, height - height / 2);
        let wmin = width < left + right;
        let hmin = height < top + bottom;
        let mut tiles = Vec::new();
        if wmin && hmin {
            tiles.push(self.tile(0, 0, w1, h1, 0, 0, left, top));
            tiles.push(self.tile(w1, 0, w2, h1, sw - right, 0, right, top));
            tiles.push(self.tile(0, h1, w1, h2, 0, sh - bottom, left, bottom));
            tiles.push(self.tile(w1, h1, w2, h2, sw - right, sh - bottom, right, bottom));
        } else if wmin {
            tiles.push(self.tile(0, 0, w1, top, 0, 0, left, top));
            tiles.push(self.tile(w1, 0, w2, top, sw - right, 0, right, top));
            // The bottom row anchors at height - top, matching the client.
            tiles.push(self.tile(0, height - top, w1, bottom, 0, sh - bottom, left, bottom));
            tiles.push(self.tile(w1, height - top, w2, bottom, sw - right, sh - bottom, right, bottom));
            tiles.push(self.tile(0, top, w1, height - top - bottom, 0, top, left, sh - top - bottom));
            tiles.push(self.tile(w1, top, w2, height - top - bottom, sw - right, top, right, sh - top - bottom));
        } else if hmin {
            tiles.push(self.tile(0, 0, left, h1, 0, 0, left, top));
            tiles.push(self.tile(0, h1, left, h2, 0, sh - bottom, left, bottom));
            // The right column anchors at width - left, matching the client.
            tiles.push(self.tile(width - left, 0, right, h1, sw - right, 0, right, top));
            tiles.push(self.tile(width - left, h1, right, h2, sw - right, sh - bottom, right, bottom));
            tiles.push(self.tile(left, 0, width - left - right, h1, left, 0, sw - left - right, top));
            tiles.push(self.tile(left, h1, width - left - right, h2, left, sh - bottom, sw - left - right, bottom));
        } else {
            tiles.push(self.tile(0, 0, left, top, 0, 0, left, top));
            tiles.push(self.tile(width - right, 0, right, top, sw - right, 0, right, top));
            tiles.push(self.tile(0, height - bottom, left, bottom, 0, sh - bottom, left, bottom));
            tiles.push(self.tile(width - right, height - bottom, right, bottom, sw - right, sh - bottom, right, bottom));
            tiles.push(self.tile(0, top, left, height - top - bottom, 0, top, left, sh - top - bottom));
            tiles.push(self.tile(width - right, top, right, height - top - bottom, sw - right, top, right, sh - top - bottom));
            tiles.push(self.tile(left, 0, width - left - right, top, left, 0, sw - left - right, top));
            tiles.push(self.tile(left, height - bottom, width - left - right, bottom, left, sh - bottom, sw - left - right, bottom));
            if with_center {
                if let Some(center) = &self.center {
                    tiles.push(GuiComponent::Image(Image {
                        background: center.clone(),
                        x: self.loc.x + left,
                        y: self.loc.y + top,
                        width: width - left - right,
                        height: height - top - bottom,
                        hover: None,
                    }));
                }
            }
        }
        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice() -> Slice9 {
        Slice9::new()
            .insets(3, 3, 3, 3)
            .image_size(9, 9, 1, 1)
            .address("sheet.png", "center.png")
    }

    fn dest(tile: &GuiComponent) -> (i32, i32, i32, i32) {
        match tile {
            GuiComponent::SplitImage(s) => (s.x, s.y, s.width, s.height),
            GuiComponent::Image(i) => (i.x, i.y, i.width, i.height),
            other => panic!("unexpected tile {other:?}"),
        }
    }

    #[test]
    fn normal_layout_emits_nine_rectangles() {
        let tiles = slice().size(100, 100).expand(true);
        assert_eq!(tiles.len(), 9);
        // Corners render at source size.
        assert_eq!(dest(&tiles[0]), (0, 0, 3, 3));
        assert_eq!(dest(&tiles[1]), (97, 0, 3, 3));
        assert_eq!(dest(&tiles[2]), (0, 97, 3, 3));
        assert_eq!(dest(&tiles[3]), (97, 97, 3, 3));
        // Center fills the remainder.
        assert_eq!(dest(&tiles[8]), (3, 3, 94, 94));
        assert!(matches!(tiles[8], GuiComponent::Image(_)));
    }

    #[test]
    fn center_is_skipped_without_request() {
        let tiles = slice().size(100, 100).expand(false);
        assert_eq!(tiles.len(), 8);
    }

    #[test]
    fn both_axes_constrained_emits_four_quadrants() {
        let tiles = slice().size(4, 4).expand(true);
        assert_eq!(tiles.len(), 4);
        for tile in &tiles {
            let (.., w, h) = dest(tile);
            assert_eq!((w, h), (2, 2));
        }
    }

    #[test]
    fn odd_target_biases_the_far_half() {
        let tiles = slice().size(5, 5).expand(true);
        assert_eq!(tiles.len(), 4);
        assert_eq!(dest(&tiles[0]), (0, 0, 2, 2));
        assert_eq!(dest(&tiles[3]), (2, 2, 3, 3));
    }

    #[test]
    fn height_constrained_emits_six_rectangles() {
        let tiles = slice().size(100, 4).expand(true);
        assert_eq!(tiles.len(), 6);
        // Right column keeps its observed client anchor.
        assert_eq!(dest(&tiles[2]), (97, 0, 3, 2));
        // Middle columns split the height between the two rows.
        assert_eq!(dest(&tiles[4]), (3, 0, 94, 2));
        assert_eq!(dest(&tiles[5]), (3, 2, 94, 2));
    }

    #[test]
    fn anchor_offsets_every_tile() {
        let tiles = slice().size(100, 100).offset(10, 20).expand(true);
        assert_eq!(dest(&tiles[0]), (10, 20, 3, 3));
        assert_eq!(dest(&tiles[8]), (13, 23, 94, 94));
    }
}
