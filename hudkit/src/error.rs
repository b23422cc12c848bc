// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported while turning configurations into display records.

use thiserror::Error;

/// Errors that can occur when building a display record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// A required field was never set on the configuration.
    #[error("{0} is not set")]
    Missing(&'static str),
    /// A tag text component accepts exactly one line.
    #[error("expected exactly 1 line, found {0}")]
    LineCount(usize),
    /// The requested output does not exist for this configuration variant.
    #[error("{0} is not supported for this variant")]
    Unsupported(&'static str),
    /// The metrics binary had the wrong length.
    #[error("expected a {expected} byte metrics table, found {found} bytes")]
    MetricsLength {
        /// Required byte count.
        expected: usize,
        /// Byte count actually supplied.
        found: usize,
    },
}
