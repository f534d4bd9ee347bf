// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional per-axis size limits.

/// Optional width and height limits in pixels.
///
/// `None` on an axis means that axis is unconstrained. Non-positive values are
/// treated as absent by the constraint operators.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SizeLimit {
    /// Width limit, if any.
    pub width: Option<f64>,
    /// Height limit, if any.
    pub height: Option<f64>,
}

impl SizeLimit {
    /// No limit on either axis.
    pub const NONE: Self = Self {
        width: None,
        height: None,
    };

    /// A limit on both axes.
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Returns `true` if neither axis is limited.
    pub const fn is_unbounded(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }

    /// Drops non-positive and non-finite entries.
    #[must_use]
    pub fn positive(self) -> Self {
        let keep = |v: f64| v.is_finite() && v > 0.0;
        Self {
            width: self.width.filter(|v| keep(*v)),
            height: self.height.filter(|v| keep(*v)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_drops_zero_and_negative() {
        let limit = SizeLimit {
            width: Some(0.0),
            height: Some(-3.0),
        };
        assert!(limit.positive().is_unbounded());

        let limit = SizeLimit {
            width: Some(10.0),
            height: Some(f64::INFINITY),
        };
        assert_eq!(
            limit.positive(),
            SizeLimit {
                width: Some(10.0),
                height: None
            }
        );
    }
}
