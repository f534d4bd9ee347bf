// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! User-facing configuration with units, resolved against a container into
//! pixel [`Options`].
//!
//! The configuration deserializes from camelCase keys:
//!
//! ```
//! use kurbo::Size;
//! use understory_cropper::{CropperConfig, ReturnMode};
//!
//! let config: CropperConfig = serde_json::from_str(
//!     r#"{
//!         "aspectRatio": { "width": 16, "height": 9 },
//!         "maxSize": { "width": 50, "height": 50, "unit": "%" },
//!         "returnMode": "ratio"
//!     }"#,
//! )
//! .unwrap();
//!
//! let options = config.resolve(Size::new(800.0, 600.0)).unwrap();
//! assert_eq!(options.aspect_ratio, Some(9.0 / 16.0));
//! assert_eq!(options.max_size.width, Some(400.0));
//! assert_eq!(options.return_mode, ReturnMode::Ratio);
//! ```

use alloc::string::String;

use kurbo::Size;
use serde::{Deserialize, Serialize};
use understory_crop_box::SizeLimit;

use crate::{CropError, Options, ReturnMode};

/// Unit of a configured size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Absolute pixels.
    #[default]
    #[serde(rename = "px")]
    Px,
    /// Percent of the container extent on the same axis.
    #[serde(rename = "%")]
    Percent,
}

/// A configured width/height pair with a unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeSpec {
    /// Width, if constrained.
    pub width: Option<f64>,
    /// Height, if constrained.
    pub height: Option<f64>,
    /// Unit of both values. When absent, the field's default unit applies.
    pub unit: Option<Unit>,
}

impl SizeSpec {
    /// A size in pixels.
    pub const fn px(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            unit: Some(Unit::Px),
        }
    }

    /// A size in percent of the container.
    pub const fn percent(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            unit: Some(Unit::Percent),
        }
    }

    /// Converts to pixel limits inside `container`.
    pub fn to_pixels(&self, default_unit: Unit, container: Size) -> SizeLimit {
        let unit = self.unit.unwrap_or(default_unit);
        let convert = |value: f64, extent: f64| match unit {
            Unit::Px => value,
            Unit::Percent => value * extent / 100.0,
        };
        SizeLimit {
            width: self.width.map(|w| convert(w, container.width)),
            height: self.height.map(|h| convert(h, container.height)),
        }
    }
}

/// An aspect ratio given either directly or as example dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AspectRatio {
    /// `height / width`.
    Ratio(f64),
    /// Dimensions whose `height / width` is the ratio.
    Dimensions {
        /// Example width.
        width: f64,
        /// Example height.
        height: f64,
    },
}

impl AspectRatio {
    /// The validated `height / width` ratio.
    pub fn value(self) -> Result<f64, CropError> {
        let ratio = match self {
            Self::Ratio(r) => r,
            Self::Dimensions { width, height } => height / width,
        };
        if ratio.is_finite() && ratio > 0.0 {
            Ok(ratio)
        } else {
            Err(CropError::InvalidAspectRatio(ratio))
        }
    }
}

/// Serializable session configuration.
///
/// Every field is optional; see [`CropperConfig::resolve`] for defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CropperConfig {
    /// Aspect ratio to hold while resizing.
    pub aspect_ratio: Option<AspectRatio>,
    /// Maximum size. Unit defaults to pixels.
    pub max_size: Option<SizeSpec>,
    /// Minimum size. Unit defaults to pixels.
    pub min_size: Option<SizeSpec>,
    /// Starting size. Unit defaults to percent; absent means 100% × 100%.
    pub start_size: Option<SizeSpec>,
    /// One of `real`, `ratio`, `raw` (any case). Absent means `real`.
    pub return_mode: Option<String>,
    /// Handle pick radius in pixels.
    pub handle_radius: Option<f64>,
}

impl CropperConfig {
    /// Validates the configuration and converts every size to pixels of
    /// `container`.
    pub fn resolve(&self, container: Size) -> Result<Options, CropError> {
        let return_mode = match &self.return_mode {
            Some(mode) => mode.parse::<ReturnMode>()?,
            None => ReturnMode::default(),
        };
        let aspect_ratio = self.aspect_ratio.map(AspectRatio::value).transpose()?;
        let limit = |spec: Option<SizeSpec>, unit: Unit| {
            spec.map_or(SizeLimit::NONE, |s| s.to_pixels(unit, container))
        };

        let defaults = Options::default();
        let options = Options {
            aspect_ratio,
            max_size: limit(self.max_size, Unit::Px),
            min_size: limit(self.min_size, Unit::Px),
            start_size: limit(self.start_size, Unit::Percent),
            return_mode,
            handle_radius: self.handle_radius.unwrap_or(defaults.handle_radius),
        };
        log::debug!("resolved crop options for {container:?}: {options:?}");
        Ok(options)
    }
}
