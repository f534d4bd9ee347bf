// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture state and the per-move box resolvers.
//!
//! Resolvers are pure: each move derives a brand-new box from the current box,
//! the gesture record captured at press time, and the constraints. Nothing from
//! a previous move (including a flip) is carried into the next one.

use core::mem;

use kurbo::{Point, Size, Vec2};
use understory_crop_box::{Constraints, CropBox, Grow, Origin};

use crate::{Edges, Handle};

/// The interaction state of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gesture {
    /// No pointer is pressed.
    #[default]
    Idle,
    /// A handle is being dragged.
    Handle(ActiveHandle),
    /// A new box is being drawn from an empty-area press. Behaves like a handle
    /// drag of the south-east handle; `previous` is restored if the press ends
    /// with the box still equal to `seed`.
    Creating {
        /// The drag driving the new box.
        active: ActiveHandle,
        /// The box in place before the press.
        previous: CropBox,
        /// The 1×1 box placed at the press point.
        seed: CropBox,
    },
    /// The whole box is being translated.
    Region(RegionDrag),
}

impl Gesture {
    /// Returns `true` unless the state is [`Gesture::Idle`].
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// A handle drag captured at press time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveHandle {
    /// The handle being dragged.
    pub handle: Handle,
    /// Normalized pivot, opposite the handle.
    pub origin: Origin,
    /// Absolute position of `origin` when the drag started. Held fixed for the
    /// whole gesture.
    pub anchor: Point,
}

impl ActiveHandle {
    /// Starts dragging `handle` on `current`.
    pub fn begin(handle: Handle, current: &CropBox) -> Self {
        let origin = handle.origin();
        Self {
            handle,
            origin,
            anchor: current.absolute_point(origin),
        }
    }

    /// Returns `true` once `x` has crossed the anchor against the natural growth
    /// direction of the handle's horizontal edge.
    pub fn is_flipped_x(&self, x: f64) -> bool {
        let edges = self.handle.edges;
        if edges.contains(Edges::LEFT) {
            x > self.anchor.x
        } else if edges.contains(Edges::RIGHT) {
            x < self.anchor.x
        } else {
            false
        }
    }

    /// Vertical counterpart of [`is_flipped_x`](Self::is_flipped_x).
    pub fn is_flipped_y(&self, y: f64) -> bool {
        let edges = self.handle.edges;
        if edges.contains(Edges::TOP) {
            y > self.anchor.y
        } else if edges.contains(Edges::BOTTOM) {
            y < self.anchor.y
        } else {
            false
        }
    }

    /// Resolves the box for a pointer at `pointer` (container-relative).
    ///
    /// The pointer is clamped into the container. Movable edges follow the
    /// pointer, the opposite edges stay on the anchor, and axes the handle does
    /// not move keep `current`'s edges. A flipped axis swaps its edges and
    /// mirrors the pivot for this move only. The raw box then goes through
    /// `constraints` around the (possibly mirrored) pivot.
    pub fn resolve(
        &self,
        current: &CropBox,
        pointer: Point,
        container: Size,
        constraints: &Constraints,
    ) -> CropBox {
        let x = pointer.x.max(0.0).min(container.width);
        let y = pointer.y.max(0.0).min(container.height);
        let edges = self.handle.edges;
        let mut origin = self.origin;

        let (mut x1, mut x2) = if edges.moves_x() {
            (self.anchor.x, self.anchor.x)
        } else {
            (current.x1, current.x2)
        };
        let (mut y1, mut y2) = if edges.moves_y() {
            (self.anchor.y, self.anchor.y)
        } else {
            (current.y1, current.y2)
        };
        if edges.contains(Edges::LEFT) {
            x1 = x;
        }
        if edges.contains(Edges::RIGHT) {
            x2 = x;
        }
        if edges.contains(Edges::TOP) {
            y1 = y;
        }
        if edges.contains(Edges::BOTTOM) {
            y2 = y;
        }

        if self.is_flipped_x(x) {
            mem::swap(&mut x1, &mut x2);
            origin = origin.flip_x();
        }
        if self.is_flipped_y(y) {
            mem::swap(&mut y1, &mut y2);
            origin = origin.flip_y();
        }

        let raw = CropBox::new(x1, y1, x2, y2);
        let grow = grow_axis(edges, constraints.aspect_ratio, &raw, y);
        constraints.apply(raw, origin, grow, container)
    }
}

/// Picks the axis recomputed by the ratio step.
///
/// Corner drags compare the pointer against the ratio line through the raw
/// box: when the pointer lies beyond it vertically the drag is treated as
/// vertical and the width follows. Top/bottom handles always let the width
/// follow; left/right handles let the height follow.
fn grow_axis(edges: Edges, ratio: Option<f64>, raw: &CropBox, y: f64) -> Grow {
    let vertical = if edges.is_multi_axis() {
        ratio.is_some_and(|r| {
            let span = r * raw.width();
            y > raw.y1 + span || y < raw.y2 - span
        })
    } else {
        edges.moves_y()
    };
    if vertical { Grow::Width } else { Grow::Height }
}

/// A region drag captured at press time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionDrag {
    /// Pointer position relative to the box's `(x1, y1)` corner at press time.
    pub offset: Vec2,
}

impl RegionDrag {
    /// Starts translating `current` from a press at `pointer`.
    pub fn begin(pointer: Point, current: &CropBox) -> Self {
        Self {
            offset: pointer - Point::new(current.x1, current.y1),
        }
    }

    /// Resolves the translated box for a pointer at `pointer`.
    ///
    /// The box keeps its size. Each edge that leaves the container is pushed
    /// back, x before y; no size constraint is applied.
    pub fn resolve(&self, current: &CropBox, pointer: Point, container: Size) -> CropBox {
        let target = pointer - self.offset;
        let mut moved = *current;
        moved.move_to(Some(target.x), Some(target.y));

        if moved.x1 < 0.0 {
            moved.move_to(Some(0.0), None);
        }
        if moved.x2 > container.width {
            moved.move_to(Some(container.width - moved.width()), None);
        }
        if moved.y1 < 0.0 {
            moved.move_to(None, Some(0.0));
        }
        if moved.y2 > container.height {
            moved.move_to(None, Some(container.height - moved.height()));
        }
        moved
    }
}
