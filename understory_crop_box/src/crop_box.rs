// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The crop rectangle and its pivot-relative operators.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size, Vec2};

use crate::{Grow, Origin, SizeLimit};

/// An axis-aligned crop rectangle.
///
/// The box is stored as two corner pairs rather than origin + size so that a
/// drag can carry one edge past the other. Such a flipped box is a legal
/// transient value; [`width`](Self::width) and [`height`](Self::height) always
/// report absolute extents, and [`resize`](Self::resize) always produces a box
/// with `x1 <= x2` and `y1 <= y2` for non-negative sizes.
///
/// Mutating operators return `&mut Self` so they can be chained:
///
/// ```
/// use understory_crop_box::{CropBox, Origin};
///
/// let mut b = CropBox::new(0.0, 0.0, 100.0, 100.0);
/// b.scale(0.5, Origin::CENTER).move_to(Some(10.0), None);
/// assert_eq!(b, CropBox::new(10.0, 25.0, 60.0, 75.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CropBox {
    /// First horizontal edge.
    pub x1: f64,
    /// First vertical edge.
    pub y1: f64,
    /// Second horizontal edge.
    pub x2: f64,
    /// Second vertical edge.
    pub y2: f64,
}

impl CropBox {
    /// Creates a box from its two corners.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Creates a box covering `rect`.
    pub const fn from_rect(rect: Rect) -> Self {
        Self::new(rect.x0, rect.y0, rect.x1, rect.y1)
    }

    /// Returns the box as a normalized [`Rect`] (positive width and height).
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x1, self.y1, self.x2, self.y2).abs()
    }

    /// Absolute horizontal extent.
    pub fn width(&self) -> f64 {
        (self.x2 - self.x1).abs()
    }

    /// Absolute vertical extent.
    pub fn height(&self) -> f64 {
        (self.y2 - self.y1).abs()
    }

    /// Absolute extents as a [`Size`].
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Returns `true` if either edge pair has crossed.
    pub fn is_flipped(&self) -> bool {
        self.x1 > self.x2 || self.y1 > self.y2
    }

    /// Translates the box so `(x1, y1)` lands on the given coordinates, keeping
    /// its size. `None` leaves that axis where it is.
    pub fn move_to(&mut self, x: Option<f64>, y: Option<f64>) -> &mut Self {
        let width = self.width();
        let height = self.height();
        let x = x.unwrap_or(self.x1);
        let y = y.unwrap_or(self.y1);
        self.x1 = x;
        self.y1 = y;
        self.x2 = x + width;
        self.y2 = y + height;
        self
    }

    /// Resizes the box to `width` × `height`, keeping the point at `origin`
    /// fixed in absolute space.
    ///
    /// Every other size-changing operator is built on this one.
    pub fn resize(&mut self, width: f64, height: f64, origin: Origin) -> &mut Self {
        let from = self.absolute_point(origin);
        self.x1 = from.x - width * origin.x;
        self.y1 = from.y - height * origin.y;
        self.x2 = self.x1 + width;
        self.y2 = self.y1 + height;
        self
    }

    /// Multiplies both extents by `factor` around `origin`.
    pub fn scale(&mut self, factor: f64, origin: Origin) -> &mut Self {
        let width = self.width() * factor;
        let height = self.height() * factor;
        self.resize(width, height, origin)
    }

    /// Offset of `point` from `(x1, y1)`, in pixels.
    pub fn relative_point(&self, point: Origin) -> Vec2 {
        Vec2::new(self.width() * point.x, self.height() * point.y)
    }

    /// Absolute position of `point`.
    pub fn absolute_point(&self, point: Origin) -> Point {
        Point::new(self.x1, self.y1) + self.relative_point(point)
    }

    /// Inverse of [`absolute_point`](Self::absolute_point). A zero extent maps
    /// to `0` on that axis.
    pub fn normalized_point(&self, point: Point) -> Origin {
        let norm = |offset: f64, extent: f64| if extent > 0.0 { offset / extent } else { 0.0 };
        Origin::new(
            norm(point.x - self.x1, self.width()),
            norm(point.y - self.y1, self.height()),
        )
    }

    /// Forces `height / width == ratio`, recomputing the axis named by `grow`.
    ///
    /// `None` leaves the box untouched.
    pub fn constrain_to_ratio(
        &mut self,
        ratio: Option<f64>,
        origin: Origin,
        grow: Grow,
    ) -> &mut Self {
        let Some(ratio) = ratio else {
            return self;
        };
        match grow {
            Grow::Height => self.resize(self.width(), self.width() * ratio, origin),
            Grow::Width => self.resize(self.height() / ratio, self.height(), origin),
        }
    }

    /// Shrinks the box, around `origin`, until it fits inside
    /// `[0, boundary.width] × [0, boundary.height]`.
    ///
    /// The room available on each axis depends on which way the box grows from
    /// `origin`: an origin at `1` grows toward `0`, an origin at `0` grows toward
    /// the far edge, and a centered origin grows both ways and is capped at twice
    /// the smaller one-sided distance.
    ///
    /// The axes are corrected one after the other with uniform scales, so a box
    /// that overflows on both axes is scaled twice rather than by the joint
    /// minimum factor.
    pub fn constrain_to_boundary(&mut self, boundary: Size, origin: Origin) -> &mut Self {
        let anchor = self.absolute_point(origin);
        let max_width = room(origin.x, anchor.x, boundary.width);
        let max_height = room(origin.y, anchor.y, boundary.height);

        if self.width() > max_width {
            let factor = max_width / self.width();
            self.scale(factor, origin);
        }
        if self.height() > max_height {
            let factor = max_height / self.height();
            self.scale(factor, origin);
        }
        self
    }

    /// Clamps the extents into `[min, max]` per axis, resizing around `origin`.
    ///
    /// With a `ratio`, the limits are first cross-derived so that clamping one
    /// axis also moves the other:
    /// - `ratio > 1`: max width becomes `max height / ratio` and min height
    ///   becomes `min height * ratio`;
    /// - `ratio < 1`: max height becomes `max width * ratio` and min width
    ///   becomes `min height / ratio`.
    ///
    /// A derivation only happens when its source limit exists. When a ratio
    /// clamp has no paired limit, the paired extent is derived from the ratio.
    ///
    /// The four checks (max width, max height, min width, min height) run in that
    /// order and each may resize; with contradictory limits the last triggered
    /// check wins.
    pub fn constrain_to_size(
        &mut self,
        max: SizeLimit,
        min: SizeLimit,
        origin: Origin,
        ratio: Option<f64>,
    ) -> &mut Self {
        let ratio = ratio.filter(|r| r.is_finite() && *r > 0.0);
        let mut max = max.positive();
        let mut min = min.positive();

        if let Some(ratio) = ratio {
            if ratio > 1.0 {
                if let Some(h) = max.height {
                    max.width = Some(h / ratio);
                }
                if let Some(h) = min.height {
                    min.height = Some(h * ratio);
                }
            } else if ratio < 1.0 {
                if let Some(w) = max.width {
                    max.height = Some(w * ratio);
                }
                if let Some(h) = min.height {
                    min.width = Some(h / ratio);
                }
            }
        }

        if let Some(max_width) = max.width
            && self.width() > max_width
        {
            let height = match ratio {
                None => self.height(),
                Some(r) => max.height.unwrap_or(max_width * r),
            };
            self.resize(max_width, height, origin);
        }

        if let Some(max_height) = max.height
            && self.height() > max_height
        {
            let width = match ratio {
                None => self.width(),
                Some(r) => max.width.unwrap_or(max_height / r),
            };
            self.resize(width, max_height, origin);
        }

        if let Some(min_width) = min.width
            && self.width() < min_width
        {
            let height = match ratio {
                None => self.height(),
                Some(r) => min.height.unwrap_or(min_width * r),
            };
            self.resize(min_width, height, origin);
        }

        if let Some(min_height) = min.height
            && self.height() < min_height
        {
            let width = match ratio {
                None => self.width(),
                Some(r) => min.width.unwrap_or(min_height / r),
            };
            self.resize(width, min_height, origin);
        }

        self
    }
}

/// Largest extent a box may have on one axis before an edge leaves `[0, extent]`
/// when it grows from normalized `origin` anchored at absolute `anchor`.
fn room(origin: f64, anchor: f64, extent: f64) -> f64 {
    let before = anchor;
    let after = extent - anchor;
    let mut limit = f64::INFINITY;
    if origin > 0.0 {
        limit = limit.min(before / origin);
    }
    if origin < 1.0 {
        limit = limit.min(after / (1.0 - origin));
    }
    limit.max(0.0)
}

impl From<Rect> for CropBox {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}
