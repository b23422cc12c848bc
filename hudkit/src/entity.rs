// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entity model renders for GUIs, HUDs, and tags.

use crate::component::TagDirection;
use crate::error::BuildError;
use crate::locator::Locator;

/// A host game profile: the player identity a render resolves against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameProfile {
    /// Player UUID, as the host formats it.
    pub uuid: String,
    /// Player name, if known.
    pub name: Option<String>,
}

/// What an entity render draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntitySource {
    /// A model for an entity type, e.g. `minecraft:zombie`.
    Kind(String),
    /// A live entity, referenced by its UUID.
    Entity(String),
    /// A player model resolved from a profile.
    Player(GameProfile),
}

/// A rotating entity model inside a GUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDraw {
    /// X position.
    pub x: i32,
    /// Y position.
    pub y: i32,
    /// Model scale.
    pub scale: i32,
    /// What to draw.
    pub source: EntitySource,
}

/// A timed entity-model HUD overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDrawHud {
    /// Overlay id.
    pub id: String,
    /// The displayed model.
    pub draw: EntityDraw,
    /// Display duration in ticks, 0 for unlimited.
    pub time: i32,
    /// Whether the model spins.
    pub rotate: bool,
    /// Z order.
    pub z: i32,
}

/// An entity model anchored in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityDrawTag {
    /// Tag id.
    pub id: String,
    /// X offset from the anchor.
    pub x: f64,
    /// Y offset from the anchor.
    pub y: f64,
    /// Z offset from the anchor.
    pub z: f64,
    /// Facing of the tag.
    pub direction: TagDirection,
    /// The displayed model.
    pub draw: EntityDraw,
}

/// Configuration for [`EntityDraw`] components.
#[derive(Debug, Clone)]
pub struct EntityDrawConfig {
    loc: Locator,
    scale: i32,
    source: Option<EntitySource>,
}

impl Default for EntityDrawConfig {
    fn default() -> Self {
        Self {
            loc: Locator::new(),
            scale: 1,
            source: None,
        }
    }
}

impl EntityDrawConfig {
    /// An empty entity render configuration at scale 1.
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

    /// Set the model scale.
    #[must_use]
    pub fn scale(mut self, scale: i32) -> Self {
        self.scale = scale;
        self
    }

    /// Draw the model of an entity type.
    #[must_use]
    pub fn of_kind(mut self, kind: impl Into<String>) -> Self {
        self.source = Some(EntitySource::Kind(kind.into()));
        self
    }

    /// Draw a live entity, referenced by its UUID.
    #[must_use]
    pub fn of_entity(mut self, uuid: impl Into<String>) -> Self {
        self.source = Some(EntitySource::Entity(uuid.into()));
        self
    }

    /// Draw a player model for the given name and UUID.
    #[must_use]
    pub fn player(mut self, name: Option<String>, uuid: impl Into<String>) -> Self {
        self.source = Some(EntitySource::Player(GameProfile {
            uuid: uuid.into(),
            name,
        }));
        self
    }

    /// Draw a player model resolved from a full profile.
    #[must_use]
    pub fn profile(mut self, profile: GameProfile) -> Self {
        self.source = Some(EntitySource::Player(profile));
        self
    }

    fn source(&self) -> Result<EntitySource, BuildError> {
        self.source
            .clone()
            .ok_or(BuildError::Missing("entity draw source"))
    }

    /// Build the GUI component.
    pub fn build(&self) -> Result<EntityDraw, BuildError> {
        Ok(EntityDraw {
            x: self.loc.x,
            y: self.loc.y,
            scale: self.scale,
            source: self.source()?,
        })
    }

    /// Build a HUD overlay showing the model.
    pub fn hud(
        &self,
        id: impl Into<String>,
        time: i32,
        z: i32,
        rotate: bool,
    ) -> Result<EntityDrawHud, BuildError> {
        Ok(EntityDrawHud {
            id: id.into(),
            draw: self.build()?,
            time,
            rotate,
            z,
        })
    }

    /// Build an in-world tag showing the model.
    ///
    /// Player models have no tag form.
    pub fn tag(
        &self,
        id: impl Into<String>,
        x: f64,
        y: f64,
        z: f64,
        direction: TagDirection,
    ) -> Result<EntityDrawTag, BuildError> {
        let draw = self.build()?;
        if matches!(draw.source, EntitySource::Player(_)) {
            return Err(BuildError::Unsupported("player draw tag"));
        }
        Ok(EntityDrawTag {
            id: id.into(),
            x,
            y,
            z,
            direction,
            draw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_is_required() {
        let err = EntityDrawConfig::new().build().unwrap_err();
        assert_eq!(err, BuildError::Missing("entity draw source"));
    }

    #[test]
    fn player_tag_is_rejected() {
        let err = EntityDrawConfig::new()
            .player(Some("steve".into()), "069a79f4-44e9-4726-a5be-fca90e38aaf5")
            .tag("t", 0.0, 0.0, 0.0, TagDirection::default())
            .unwrap_err();
        assert_eq!(err, BuildError::Unsupported("player draw tag"));
    }

    #[test]
    fn kind_tag_builds() {
        let tag = EntityDrawConfig::new()
            .of_kind("minecraft:zombie")
            .scale(30)
            .offset(0, 233)
            .tag("t", 0.5, 1.0, 0.5, TagDirection::default())
            .unwrap();
        assert_eq!(tag.draw.scale, 30);
        assert_eq!(tag.draw.y, 233);
        // Tags compare by value, fractional offsets and angles included.
        assert_eq!(tag, tag.clone());
    }
}
