// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chat channels: named rooms with allow and deny lists and chat-event
//! handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::BuildError;

/// A chat message passing through a channel.
///
/// Handlers may rewrite the message or cancel it outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelChatEvent {
    /// UUID of the speaking player.
    pub player: String,
    /// The message text.
    pub message: String,
    /// Cancelled messages are not delivered.
    pub cancelled: bool,
}

type ChatHandler = Arc<dyn Fn(&mut ChannelChatEvent) + Send + Sync>;

fn relock<'a, T>(
    guard: Result<MutexGuard<'a, T>, PoisonError<MutexGuard<'a, T>>>,
) -> MutexGuard<'a, T> {
    guard.unwrap_or_else(PoisonError::into_inner)
}

/// A registered chat channel.
pub struct ChatChannel {
    name: String,
    white_enabled: bool,
    whites: Mutex<Vec<String>>,
    blacks: Mutex<Vec<String>>,
    handlers: Mutex<Vec<ChatHandler>>,
}

impl std::fmt::Debug for ChatChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatChannel")
            .field("name", &self.name)
            .field("white_enabled", &self.white_enabled)
            .finish_non_exhaustive()
    }
}

impl ChatChannel {
    /// The channel name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the allow list is enforced.
    pub fn white_enabled(&self) -> bool {
        self.white_enabled
    }

    /// Add a player to the allow list.
    pub fn white(&self, uuid: impl Into<String>) {
        relock(self.whites.lock()).push(uuid.into());
    }

    /// Add a player to the deny list.
    pub fn black(&self, uuid: impl Into<String>) {
        relock(self.blacks.lock()).push(uuid.into());
    }

    /// Whether a player may speak in this channel.
    ///
    /// The deny list always wins; the allow list only applies when
    /// enabled.
    pub fn may_speak(&self, uuid: &str) -> bool {
        if relock(self.blacks.lock()).iter().any(|u| u == uuid) {
            return false;
        }
        !self.white_enabled || relock(self.whites.lock()).iter().any(|u| u == uuid)
    }

    /// Attach a chat handler. Handlers run in attachment order.
    pub fn on_chat(&self, handler: impl Fn(&mut ChannelChatEvent) + Send + Sync + 'static) {
        relock(self.handlers.lock()).push(Arc::new(handler));
    }

    /// Run a chat event through this channel.
    ///
    /// Returns the message to deliver, or `None` when a handler cancelled
    /// it or the player may not speak here.
    pub fn dispatch(&self, player: impl Into<String>, message: impl Into<String>) -> Option<String> {
        let mut event = ChannelChatEvent {
            player: player.into(),
            message: message.into(),
            cancelled: false,
        };
        if !self.may_speak(&event.player) {
            log::debug!("channel [{}] rejected chat from {}", self.name, event.player);
            return None;
        }
        // Snapshot the list so handlers can attach further handlers to
        // this channel without deadlocking.
        let handlers: Vec<ChatHandler> = relock(self.handlers.lock()).clone();
        for handler in &handlers {
            handler(&mut event);
        }
        if event.cancelled {
            return None;
        }
        Some(event.message)
    }
}

/// The set of channels known to the host.
#[derive(Debug, Default)]
pub struct ChannelRegistry {
    channels: Mutex<Vec<Arc<ChatChannel>>>,
}

impl ChannelRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a channel by name.
    pub fn get(&self, name: &str) -> Option<Arc<ChatChannel>> {
        relock(self.channels.lock())
            .iter()
            .find(|c| c.name == name)
            .cloned()
    }

    fn add(&self, channel: Arc<ChatChannel>) {
        relock(self.channels.lock()).push(channel);
    }
}

/// Configuration registering a [`ChatChannel`].
#[derive(Default)]
pub struct ChannelConfig {
    name: Option<String>,
    whites: Vec<String>,
    blacks: Vec<String>,
    white_enabled: bool,
    handlers: Vec<ChatHandler>,
}

impl std::fmt::Debug for ChannelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelConfig")
            .field("name", &self.name)
            .field("white_enabled", &self.white_enabled)
            .finish_non_exhaustive()
    }
}

impl ChannelConfig {
    /// An empty channel configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the channel name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a player to the allow list and enforce it.
    #[must_use]
    pub fn white(mut self, uuid: impl Into<String>) -> Self {
        self.whites.push(uuid.into());
        self.enable_white_list()
    }

    /// Add a player to the deny list.
    #[must_use]
    pub fn black(mut self, uuid: impl Into<String>) -> Self {
        self.blacks.push(uuid.into());
        self
    }

    /// Enforce the allow list even when it is empty.
    #[must_use]
    pub fn enable_white_list(mut self) -> Self {
        self.white_enabled = true;
        self
    }

    /// Attach a chat handler.
    #[must_use]
    pub fn on_chat(mut self, handler: impl Fn(&mut ChannelChatEvent) + Send + Sync + 'static) -> Self {
        self.handlers.push(Arc::new(handler));
        self
    }

    /// Register the channel.
    pub fn register(self, registry: &ChannelRegistry) -> Result<Arc<ChatChannel>, BuildError> {
        let name = self.name.ok_or(BuildError::Missing("channel name"))?;
        log::info!("registering chat channel [{name}]");
        let channel = Arc::new(ChatChannel {
            name,
            white_enabled: self.white_enabled,
            whites: Mutex::new(self.whites),
            blacks: Mutex::new(self.blacks),
            handlers: Mutex::new(self.handlers),
        });
        registry.add(channel.clone());
        Ok(channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEVE: &str = "069a79f4-44e9-4726-a5be-fca90e38aaf5";
    const ALEX: &str = "ec561538-f3fd-461d-aff5-086b22154bce";

    #[test]
    fn name_is_required() {
        let err = ChannelConfig::new()
            .register(&ChannelRegistry::new())
            .unwrap_err();
        assert_eq!(err, BuildError::Missing("channel name"));
    }

    #[test]
    fn deny_list_beats_allow_list() {
        let registry = ChannelRegistry::new();
        let channel = ChannelConfig::new()
            .name("trade")
            .white(STEVE)
            .black(STEVE)
            .register(&registry)
            .unwrap();
        assert!(!channel.may_speak(STEVE));
        assert!(!channel.may_speak(ALEX));
        assert_eq!(registry.get("trade").unwrap().name(), "trade");
    }

    #[test]
    fn handlers_rewrite_and_cancel() {
        let channel = ChannelConfig::new()
            .name("global")
            .on_chat(|event| {
                if event.message == "spam" {
                    event.cancelled = true;
                }
            })
            .on_chat(|event| event.message.make_ascii_uppercase())
            .register(&ChannelRegistry::new())
            .unwrap();
        assert_eq!(channel.dispatch(STEVE, "hello"), Some("HELLO".into()));
        assert_eq!(channel.dispatch(STEVE, "spam"), None);
    }

    #[test]
    fn handlers_may_attach_to_their_own_channel() {
        let channel = ChannelConfig::new()
            .name("global")
            .register(&ChannelRegistry::new())
            .unwrap();
        let inner = channel.clone();
        channel.on_chat(move |event| {
            if event.message == "censor" {
                inner.on_chat(|event| {
                    if event.message == "hello" {
                        event.cancelled = true;
                    }
                });
            }
        });
        // Attaching from inside a running handler must not deadlock, and
        // the new handler applies from the next dispatch on.
        assert_eq!(channel.dispatch(STEVE, "censor"), Some("censor".into()));
        assert_eq!(channel.dispatch(STEVE, "hello"), None);
        assert_eq!(channel.dispatch(ALEX, "bye"), Some("bye".into()));
    }
}
