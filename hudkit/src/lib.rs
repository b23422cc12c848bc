// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration builders for server-driven display components.
//!
//! This crate collects the parameters of HUD overlays, GUIs, in-world tags,
//! and chat channels through fluent configuration values, and turns them into
//! immutable display records that a rendering runtime consumes. It performs no
//! rendering itself.
//!
//! # Usage
//!
//! Every component follows the same shape: a `*Config` value with chained
//! setters and one or more terminal `build*` calls producing plain records.
//!
//! ```
//! use hudkit::image::ImageConfig;
//!
//! let image = ImageConfig::new()
//!     .background("[local]login.png")
//!     .image_size(564, 507)
//!     .size(400, 200)
//!     .offset(0, 20)
//!     .build()
//!     .unwrap();
//! assert_eq!(image.y, 20);
//! ```
//!
//! # Contents
//!
//! - Display records for GUI, HUD, and tag components
//! - Nine-slice background expansion ([`slice9`])
//! - Glyph-advance based text measurement ([`metrics`])
//! - Chat channel registration ([`channel`])

// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(clippy::print_stdout, clippy::print_stderr)]
#![forbid(unsafe_code)]

pub mod button;
pub mod channel;
pub mod checkbox;
pub mod color;
pub mod component;
pub mod entity;
pub mod gui;
pub mod image;
pub mod input;
pub mod locator;
pub mod metrics;
pub mod scrolling;
pub mod slice9;
pub mod slot;
pub mod text;

mod error;

pub use color::Color;
pub use error::BuildError;
pub use locator::Locator;
