// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Projection of the internal box into output coordinates.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Size;
use serde::{Deserialize, Serialize};
use understory_crop_box::CropBox;

use crate::ReturnMode;

/// Sizes of the image being cropped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageMetrics {
    /// Size of the image element as laid out on screen. The crop box lives in
    /// this pixel space.
    pub displayed: Size,
    /// Intrinsic size of the image.
    pub natural: Size,
}

impl ImageMetrics {
    /// Creates image metrics.
    pub const fn new(displayed: Size, natural: Size) -> Self {
        Self { displayed, natural }
    }

    /// Metrics for an image shown at its natural size.
    pub const fn unscaled(size: Size) -> Self {
        Self::new(size, size)
    }

    /// Returns `true` if the displayed size has positive, finite area.
    pub fn is_displayable(&self) -> bool {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        ok(self.displayed.width) && ok(self.displayed.height)
    }
}

/// A crop region in one of the [`ReturnMode`] coordinate systems.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CropValue {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl CropValue {
    /// Projects `crop_box` into `mode` coordinates.
    ///
    /// - [`ReturnMode::Raw`]: displayed pixels, rounded to integers.
    /// - [`ReturnMode::Ratio`]: fractions of the displayed size, rounded to three
    ///   decimals.
    /// - [`ReturnMode::Real`]: natural image pixels, rounded to integers.
    pub fn project(crop_box: &CropBox, image: &ImageMetrics, mode: ReturnMode) -> Self {
        let displayed = image.displayed;
        match mode {
            ReturnMode::Raw => Self {
                x: crop_box.x1.round(),
                y: crop_box.y1.round(),
                width: crop_box.width().round(),
                height: crop_box.height().round(),
            },
            ReturnMode::Ratio => Self {
                x: round_to(crop_box.x1 / displayed.width, 3),
                y: round_to(crop_box.y1 / displayed.height, 3),
                width: round_to(crop_box.width() / displayed.width, 3),
                height: round_to(crop_box.height() / displayed.height, 3),
            },
            ReturnMode::Real => {
                let factor_x = image.natural.width / displayed.width;
                let factor_y = image.natural.height / displayed.height;
                Self {
                    x: (crop_box.x1 * factor_x).round(),
                    y: (crop_box.y1 * factor_y).round(),
                    width: (crop_box.width() * factor_x).round(),
                    height: (crop_box.height() * factor_y).round(),
                }
            }
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}
