// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_crop_box --heading-base-level=0

//! Understory Crop Box: crop rectangle geometry and its constraint algebra.
//!
//! This crate is the pure geometry half of an interactive crop selector. It knows
//! nothing about pointers, handles, or rendering; it only answers "given this box
//! and these limits, what is the box now?".
//!
//! - [`CropBox`]: an axis-aligned rectangle stored as two corner pairs. The corners
//!   are allowed to cross (a *flipped* box); [`CropBox::width`] and
//!   [`CropBox::height`] are always absolute.
//! - [`Origin`]: a normalized point inside the box (`0..=1` on each axis) held
//!   fixed while the box is resized. Every size-changing operation is expressed in
//!   terms of [`CropBox::resize`] around an origin.
//! - [`Grow`]: which axis is recomputed when a box is forced to an aspect ratio.
//! - [`SizeLimit`]: optional per-axis pixel limits used for minimum and maximum size.
//! - [`Constraints`]: the fixed constraint pipeline (ratio, then size, then boundary)
//!   used both to seed a box and after every interactive edit.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Size;
//! use understory_crop_box::{Constraints, CropBox, Grow, Origin, SizeLimit};
//!
//! let constraints = Constraints {
//!     aspect_ratio: Some(0.5),
//!     max_size: SizeLimit::new(300.0, 300.0),
//!     ..Default::default()
//! };
//!
//! // A box that is too tall for the ratio and too wide for the limits.
//! let raw = CropBox::new(0.0, 0.0, 400.0, 400.0);
//! let resolved = constraints.apply(raw, Origin::TOP_LEFT, Grow::Height, Size::new(500.0, 500.0));
//!
//! assert_eq!(resolved.width(), 300.0);
//! assert_eq!(resolved.height(), 150.0);
//! ```
//!
//! ## Numeric model
//!
//! All coordinates are `f64` pixels in a single space (typically the displayed
//! image element). Nothing in this crate rounds; rounding is left to whoever
//! projects the box into output units, so repeated constraint passes do not
//! accumulate rounding error.
//!
//! Float inputs are assumed to be finite (no NaNs).
//!
//! This crate is `no_std`.

#![no_std]

mod constraints;
mod crop_box;
mod limits;
mod origin;

pub use constraints::Constraints;
pub use crop_box::CropBox;
pub use limits::SizeLimit;
pub use origin::{Grow, Origin};
