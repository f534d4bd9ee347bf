// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_cropper --heading-base-level=0

//! Understory Cropper: an interactive crop selection session.
//!
//! This crate drives a crop box over a displayed image from pointer input. It is
//! headless: the host feeds pointer events in container coordinates and redraws
//! whenever it is told the box changed. The box geometry and constraint pipeline
//! come from [`understory_crop_box`].
//!
//! ## Concepts
//!
//! - [`Cropper`]: the session. It owns the current [`CropBox`], the active
//!   [`Gesture`], and an observer.
//! - [`Options`]: aspect ratio, size limits, start size, [`ReturnMode`], and
//!   handle radius, all in container pixels. [`CropperConfig`] is the
//!   serializable form with percent units, resolved against a container size.
//! - [`Handle`] and [`HANDLES`]: the eight resize handles, each a normalized
//!   position plus the [`Edges`] it moves.
//! - [`hit_test`]: classifies a press as a handle, the box body, or the empty
//!   overlay around it.
//! - [`CropValue`]: the box projected into raw, ratio, or natural image pixels.
//! - [`CropObserver`]: lifecycle notifications (`initialize`, `crop_start`,
//!   `crop_move`, `crop_end`) plus `on_update` for redraws. [`Callbacks`] builds
//!   one from closures.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_cropper::{Cropper, HitTarget, ImageMetrics, Options, ReturnMode};
//!
//! let image = ImageMetrics::new(Size::new(400.0, 300.0), Size::new(1600.0, 1200.0));
//! let options = Options::default()
//!     .with_start_size(200.0, 200.0)
//!     .with_return_mode(ReturnMode::Real);
//! let mut cropper = Cropper::new(options, image).unwrap();
//!
//! // Grab the south-east corner and pull it out by 50px.
//! let corner = Point::new(300.0, 250.0);
//! assert!(matches!(cropper.on_down(corner), Some(HitTarget::Handle(_))));
//! cropper.on_move(Point::new(350.0, 280.0));
//! cropper.on_up();
//!
//! let value = cropper.value();
//! assert_eq!((value.x, value.y), (400.0, 200.0));
//! assert_eq!((value.width, value.height), (1000.0, 920.0));
//! ```
//!
//! ## Gestures
//!
//! A session handles one gesture at a time. Presses that arrive while a gesture
//! is active are ignored. Each move resolves a new box from scratch: the raw box
//! implied by the pointer goes through the ratio, size, and boundary steps of
//! [`Constraints`] around the pivot of the handle being dragged. Region drags
//! only translate and are kept inside the container.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod cropper;
mod error;
mod gesture;
mod handle;
mod hit;
mod observer;
mod options;
mod value;

pub use config::{AspectRatio, CropperConfig, SizeSpec, Unit};
pub use cropper::{Cropper, CropperBuilder};
pub use error::CropError;
pub use gesture::{ActiveHandle, Gesture, RegionDrag};
pub use handle::{Edges, HANDLES, Handle, HandleId};
pub use hit::{HitTarget, hit_test};
pub use observer::{Callbacks, CropObserver};
pub use options::{Options, ReturnMode};
pub use value::{CropValue, ImageMetrics};

pub use understory_crop_box::{Constraints, CropBox, Grow, Origin, SizeLimit};
