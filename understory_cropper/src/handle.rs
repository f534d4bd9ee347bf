// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The eight resize handles.

use understory_crop_box::Origin;

bitflags::bitflags! {
    /// Box edges a handle is allowed to move.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        /// The `y1` edge.
        const TOP    = 0b0000_0001;
        /// The `x2` edge.
        const RIGHT  = 0b0000_0010;
        /// The `y2` edge.
        const BOTTOM = 0b0000_0100;
        /// The `x1` edge.
        const LEFT   = 0b0000_1000;
    }
}

impl Edges {
    /// Builds an edge set from a `[top, right, bottom, left]` table of `0`/`1`
    /// entries. Any non-zero entry counts as movable.
    pub const fn from_constraints(constraints: [u8; 4]) -> Self {
        let mut bits = 0;
        if constraints[0] != 0 {
            bits |= Self::TOP.bits();
        }
        if constraints[1] != 0 {
            bits |= Self::RIGHT.bits();
        }
        if constraints[2] != 0 {
            bits |= Self::BOTTOM.bits();
        }
        if constraints[3] != 0 {
            bits |= Self::LEFT.bits();
        }
        Self::from_bits_truncate(bits)
    }

    /// Returns `true` if a horizontal edge (left or right) is movable.
    pub const fn moves_x(self) -> bool {
        self.intersects(Self::LEFT.union(Self::RIGHT))
    }

    /// Returns `true` if a vertical edge (top or bottom) is movable.
    pub const fn moves_y(self) -> bool {
        self.intersects(Self::TOP.union(Self::BOTTOM))
    }

    /// Returns `true` if edges on both axes are movable (a corner handle).
    pub const fn is_multi_axis(self) -> bool {
        self.moves_x() && self.moves_y()
    }
}

/// A control point on the crop box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Handle {
    /// Normalized location of the handle on the box.
    pub position: Origin,
    /// Edges this handle moves.
    pub edges: Edges,
}

impl Handle {
    /// Creates a handle.
    pub const fn new(position: Origin, edges: Edges) -> Self {
        Self { position, edges }
    }

    /// The pivot for drags of this handle: the diagonally opposite point.
    pub fn origin(&self) -> Origin {
        self.position.opposite()
    }
}

/// Names for the fixed handles, in table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandleId {
    /// Top-left corner.
    NorthWest,
    /// Top edge midpoint.
    North,
    /// Top-right corner.
    NorthEast,
    /// Right edge midpoint.
    East,
    /// Bottom-right corner.
    SouthEast,
    /// Bottom edge midpoint.
    South,
    /// Bottom-left corner.
    SouthWest,
    /// Left edge midpoint.
    West,
}

impl HandleId {
    /// All handles in table order.
    pub const ALL: [Self; 8] = [
        Self::NorthWest,
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
    ];

    /// Index into [`HANDLES`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The handle definition.
    pub const fn handle(self) -> Handle {
        HANDLES[self.index()]
    }

    /// Returns `true` for the four corner handles.
    pub const fn is_corner(self) -> bool {
        self.handle().edges.is_multi_axis()
    }

    /// CSS cursor name conventionally shown over this handle.
    pub const fn cursor(self) -> &'static str {
        match self {
            Self::NorthWest => "nw-resize",
            Self::North => "n-resize",
            Self::NorthEast => "ne-resize",
            Self::East => "e-resize",
            Self::SouthEast => "se-resize",
            Self::South => "s-resize",
            Self::SouthWest => "sw-resize",
            Self::West => "w-resize",
        }
    }
}

impl From<HandleId> for Handle {
    fn from(id: HandleId) -> Self {
        id.handle()
    }
}

/// The fixed handle table: corners and edge midpoints.
pub const HANDLES: [Handle; 8] = [
    Handle::new(Origin::new(0.0, 0.0), Edges::from_constraints([1, 0, 0, 1])),
    Handle::new(Origin::new(0.5, 0.0), Edges::from_constraints([1, 0, 0, 0])),
    Handle::new(Origin::new(1.0, 0.0), Edges::from_constraints([1, 1, 0, 0])),
    Handle::new(Origin::new(1.0, 0.5), Edges::from_constraints([0, 1, 0, 0])),
    Handle::new(Origin::new(1.0, 1.0), Edges::from_constraints([0, 1, 1, 0])),
    Handle::new(Origin::new(0.5, 1.0), Edges::from_constraints([0, 0, 1, 0])),
    Handle::new(Origin::new(0.0, 1.0), Edges::from_constraints([0, 0, 1, 1])),
    Handle::new(Origin::new(0.0, 0.5), Edges::from_constraints([0, 0, 0, 1])),
];
