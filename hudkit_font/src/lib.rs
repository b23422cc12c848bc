// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font asset parsing and glyph-advance extraction.
//!
//! This crate reads the declarative font JSON of a game client archive,
//! resolves its provider chain (glyph sheets, TrueType fonts, the legacy
//! unicode width table), and produces the fixed advance table that
//! [`hudkit`] uses for server-side text measurement.
//!
//! ```no_run
//! use hudkit_font::descriptor::FontDescriptor;
//! use hudkit_font::providers::ProviderChain;
//! use hudkit_font::resource::{DirLoader, ResourceKey, ResourceLoader};
//!
//! # fn main() -> Result<(), hudkit_font::FontError> {
//! let fonts = DirLoader::new("client", None);
//! let textures = DirLoader::new("client", Some("textures"));
//! let data = fonts.open(&ResourceKey::parse("font/default.json")?)?;
//! let descriptor = FontDescriptor::from_json(&data)?;
//! let mut chain = ProviderChain::new();
//! chain.extend_from_descriptors(&descriptor.providers, &fonts, &textures);
//! let table = hudkit_font::table::generate(&chain);
//! std::fs::write("out.sizes.bin", table.to_bytes())?;
//! # Ok(())
//! # }
//! ```

// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(clippy::print_stdout, clippy::print_stderr)]
#![forbid(unsafe_code)]

pub mod descriptor;
pub mod pixmap;
pub mod providers;
pub mod resource;
pub mod table;

mod error;

pub use error::FontError;
