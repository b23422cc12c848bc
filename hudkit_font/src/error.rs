// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors raised while loading font assets or extracting glyph metrics.
#[derive(Debug, Error)]
pub enum FontError {
    /// A resource key or descriptor field failed validation.
    #[error("malformed font descriptor: {0}")]
    Descriptor(String),
    /// A resource key contained more than one namespace separator.
    #[error("invalid resource key `{0}`")]
    InvalidKey(String),
    /// A referenced resource does not exist in the loader.
    #[error("resource `{0}` not found")]
    NotFound(String),
    /// Reading from the archive or filesystem failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// The client archive is unreadable.
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
    /// A glyph sheet failed to decode.
    #[error("png error: {0}")]
    Png(#[from] png::DecodingError),
    /// A font descriptor failed to parse as JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// A TrueType font failed to parse.
    #[error("font error: {0}")]
    Font(#[from] skrifa::raw::ReadError),
}
