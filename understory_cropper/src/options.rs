// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved session options in pixel units.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use kurbo::Size;
use serde::{Deserialize, Serialize};
use understory_crop_box::{Constraints, SizeLimit};

use crate::CropError;

/// Output coordinate system for [`CropValue`](crate::CropValue).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnMode {
    /// Pixels of the natural (intrinsic) image.
    #[default]
    Real,
    /// Fractions of the displayed image size, rounded to three decimals.
    Ratio,
    /// Pixels of the displayed image element.
    Raw,
}

impl ReturnMode {
    /// The lowercase name of the mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Real => "real",
            Self::Ratio => "ratio",
            Self::Raw => "raw",
        }
    }
}

impl fmt::Display for ReturnMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReturnMode {
    type Err = CropError;

    /// Parses a mode name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "real" => Ok(Self::Real),
            "ratio" => Ok(Self::Ratio),
            "raw" => Ok(Self::Raw),
            _ => Err(CropError::InvalidReturnMode(String::from(s))),
        }
    }
}

/// Session options with every size already resolved to pixels.
///
/// Use [`CropperConfig`](crate::CropperConfig) to build these from
/// percentage-based or serialized configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Options {
    /// Target `height / width`, if any.
    pub aspect_ratio: Option<f64>,
    /// Maximum crop size.
    pub max_size: SizeLimit,
    /// Minimum crop size.
    pub min_size: SizeLimit,
    /// Size of the box created on initialization and [`reset`](crate::Cropper::reset).
    ///
    /// `None` on an axis means the full container extent.
    pub start_size: SizeLimit,
    /// Default output mode for [`Cropper::value`](crate::Cropper::value).
    pub return_mode: ReturnMode,
    /// Pick radius around each handle used by [`Cropper::hit_test`](crate::Cropper::hit_test).
    pub handle_radius: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            aspect_ratio: None,
            max_size: SizeLimit::NONE,
            min_size: SizeLimit::NONE,
            start_size: SizeLimit::NONE,
            return_mode: ReturnMode::Real,
            handle_radius: 5.0,
        }
    }
}

impl Options {
    /// Sets the aspect ratio (`height / width`).
    #[must_use]
    pub fn with_aspect_ratio(mut self, ratio: f64) -> Self {
        self.aspect_ratio = Some(ratio);
        self
    }

    /// Sets the maximum size.
    #[must_use]
    pub fn with_max_size(mut self, width: f64, height: f64) -> Self {
        self.max_size = SizeLimit::new(width, height);
        self
    }

    /// Sets the minimum size.
    #[must_use]
    pub fn with_min_size(mut self, width: f64, height: f64) -> Self {
        self.min_size = SizeLimit::new(width, height);
        self
    }

    /// Sets the starting size.
    #[must_use]
    pub fn with_start_size(mut self, width: f64, height: f64) -> Self {
        self.start_size = SizeLimit::new(width, height);
        self
    }

    /// Sets the default return mode.
    #[must_use]
    pub fn with_return_mode(mut self, mode: ReturnMode) -> Self {
        self.return_mode = mode;
        self
    }

    /// Sets the handle pick radius.
    #[must_use]
    pub fn with_handle_radius(mut self, radius: f64) -> Self {
        self.handle_radius = radius;
        self
    }

    /// Checks values that would otherwise poison the geometry.
    pub fn validate(&self) -> Result<(), CropError> {
        match self.aspect_ratio {
            Some(r) if !(r.is_finite() && r > 0.0) => Err(CropError::InvalidAspectRatio(r)),
            _ => Ok(()),
        }
    }

    /// The constraint pipeline described by these options.
    pub fn constraints(&self) -> Constraints {
        Constraints {
            aspect_ratio: self.aspect_ratio,
            max_size: self.max_size,
            min_size: self.min_size,
        }
    }

    /// The starting size inside `container`.
    pub fn start_size_in(&self, container: Size) -> Size {
        Size::new(
            self.start_size.width.unwrap_or(container.width),
            self.start_size.height.unwrap_or(container.height),
        )
    }
}
