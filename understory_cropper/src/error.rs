// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while configuring or building a crop session.

use alloc::string::String;

use thiserror::Error;

/// Errors returned by configuration parsing and session construction.
///
/// Geometry never fails: degenerate boxes and conflicting constraints are
/// resolved silently by the constraint pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CropError {
    /// The return mode is not one of `real`, `ratio`, or `raw`.
    #[error("invalid return mode `{0}`, expected one of `real`, `ratio`, `raw`")]
    InvalidReturnMode(String),

    /// The aspect ratio is zero, negative, or not finite.
    #[error("invalid aspect ratio {0}")]
    InvalidAspectRatio(f64),

    /// A session was built without image metrics.
    #[error("image source not provided")]
    MissingImage,

    /// The displayed image has no usable area.
    #[error("image has an empty display size ({width}x{height})")]
    EmptyImage {
        /// Displayed width.
        width: f64,
        /// Displayed height.
        height: f64,
    },
}
