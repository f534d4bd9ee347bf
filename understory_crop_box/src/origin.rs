// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized pivot points and ratio growth axes.

use kurbo::Point;

/// A normalized point inside a crop box.
///
/// `(0, 0)` is the `(x1, y1)` corner and `(1, 1)` is the `(x2, y2)` corner. The
/// origin is the point held fixed in absolute space while a box is resized,
/// scaled, or constrained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Origin {
    /// Normalized horizontal position.
    pub x: f64,
    /// Normalized vertical position.
    pub y: f64,
}

impl Origin {
    /// The `(x1, y1)` corner.
    pub const TOP_LEFT: Self = Self::new(0.0, 0.0);
    /// The middle of the box.
    pub const CENTER: Self = Self::new(0.5, 0.5);
    /// The `(x2, y2)` corner.
    pub const BOTTOM_RIGHT: Self = Self::new(1.0, 1.0);

    /// Creates an origin from normalized coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The diagonally opposite point, `(1 - x, 1 - y)`.
    #[must_use]
    pub fn opposite(self) -> Self {
        Self::new(1.0 - self.x, 1.0 - self.y)
    }

    /// Mirrors the horizontal component (`x` becomes `1 - x`).
    #[must_use]
    pub fn flip_x(self) -> Self {
        Self::new(1.0 - self.x, self.y)
    }

    /// Mirrors the vertical component (`y` becomes `1 - y`).
    #[must_use]
    pub fn flip_y(self) -> Self {
        Self::new(self.x, 1.0 - self.y)
    }
}

impl Default for Origin {
    fn default() -> Self {
        Self::TOP_LEFT
    }
}

impl From<(f64, f64)> for Origin {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Origin {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Origin> for Point {
    fn from(origin: Origin) -> Self {
        Self::new(origin.x, origin.y)
    }
}

/// Which axis is recomputed when a box is forced to an aspect ratio.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Grow {
    /// Keep the height and derive the width (`width = height / ratio`).
    Width,
    /// Keep the width and derive the height (`height = width * ratio`).
    #[default]
    Height,
}
