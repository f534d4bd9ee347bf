// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed constraint pipeline.

use kurbo::Size;

use crate::{CropBox, Grow, Origin, SizeLimit};

/// Ratio, size, and boundary constraints applied as one ordered pipeline.
///
/// The order is fixed:
/// 1. aspect ratio ([`CropBox::constrain_to_ratio`]),
/// 2. ratio-aware min/max size ([`CropBox::constrain_to_size`]),
/// 3. boundary ([`CropBox::constrain_to_boundary`]).
///
/// The boundary runs last and is the final authority: if the boundary is smaller
/// than the minimum size, the result fits the boundary and violates the minimum.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Constraints {
    /// Target `height / width`, if any.
    pub aspect_ratio: Option<f64>,
    /// Maximum size in pixels.
    pub max_size: SizeLimit,
    /// Minimum size in pixels.
    pub min_size: SizeLimit,
}

impl Constraints {
    /// Runs the pipeline on `crop_box`, pivoting every step on `origin`, and
    /// returns the resolved box.
    ///
    /// `grow` selects the axis recomputed by the ratio step.
    #[must_use]
    pub fn apply(&self, crop_box: CropBox, origin: Origin, grow: Grow, boundary: Size) -> CropBox {
        let mut resolved = crop_box;
        resolved
            .constrain_to_ratio(self.aspect_ratio, origin, grow)
            .constrain_to_size(self.max_size, self.min_size, origin, self.aspect_ratio)
            .constrain_to_boundary(boundary, origin);
        resolved
    }

    /// Builds the starting box: a `start_size` box run through the pipeline around
    /// its center, then centered inside `boundary`.
    #[must_use]
    pub fn initial_box(&self, start_size: Size, boundary: Size) -> CropBox {
        let seed = CropBox::new(0.0, 0.0, start_size.width, start_size.height);
        let mut resolved = self.apply(seed, Origin::CENTER, Grow::Height, boundary);
        let x = boundary.width / 2.0 - resolved.width() / 2.0;
        let y = boundary.height / 2.0 - resolved.height() / 2.0;
        resolved.move_to(Some(x), Some(y));
        resolved
    }
}
