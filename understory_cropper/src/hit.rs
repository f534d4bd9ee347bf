// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-down classification.

use core::cmp::Ordering;

use kurbo::{Point, Rect, Size};
use understory_crop_box::CropBox;

use crate::HandleId;

/// What a pointer press landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HitTarget {
    /// A resize handle.
    Handle(HandleId),
    /// The body of the crop box.
    Region,
    /// Inside the container but outside the box.
    Overlay,
}

/// Classifies `point` against `crop_box` inside `container`.
///
/// Handles are discs of `handle_radius` around their positions and take
/// priority over the region. When several handles are in reach the nearest one
/// wins, and corners win ties against edge midpoints. Points outside the
/// container hit nothing.
pub fn hit_test(
    crop_box: &CropBox,
    container: Size,
    point: Point,
    handle_radius: f64,
) -> Option<HitTarget> {
    if !Rect::from_origin_size(Point::ZERO, container).contains(point) {
        return None;
    }

    let nearest = HandleId::ALL
        .into_iter()
        .map(|id| (id, crop_box.absolute_point(id.handle().position).distance(point)))
        .filter(|(_, distance)| *distance <= handle_radius)
        .min_by(|(a_id, a), (b_id, b)| {
            a.partial_cmp(b)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b_id.is_corner().cmp(&a_id.is_corner()))
        });
    if let Some((id, _)) = nearest {
        return Some(HitTarget::Handle(id));
    }

    if crop_box.to_rect().contains(point) {
        Some(HitTarget::Region)
    } else {
        Some(HitTarget::Overlay)
    }
}
