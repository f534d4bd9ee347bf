// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notification seam between a session and its host.

use alloc::boxed::Box;
use core::fmt;

use understory_crop_box::CropBox;

use crate::CropValue;

/// Receives session notifications.
///
/// Every method has a no-op default. Lifecycle methods receive the current
/// value in the session's configured [`ReturnMode`](crate::ReturnMode) and are
/// called synchronously, once per transition.
pub trait CropObserver {
    /// The session finished building its first box.
    fn on_initialize(&mut self, _value: CropValue) {}

    /// A handle, region, or create gesture started.
    fn on_crop_start(&mut self, _value: CropValue) {}

    /// A gesture move produced a new box.
    fn on_crop_move(&mut self, _value: CropValue) {}

    /// A gesture or convenience operation finished.
    fn on_crop_end(&mut self, _value: CropValue) {}

    /// The box was replaced and should be redrawn.
    fn on_update(&mut self, _crop_box: &CropBox) {}
}

impl CropObserver for () {}

impl<O: CropObserver + ?Sized> CropObserver for &mut O {
    fn on_initialize(&mut self, value: CropValue) {
        (**self).on_initialize(value);
    }

    fn on_crop_start(&mut self, value: CropValue) {
        (**self).on_crop_start(value);
    }

    fn on_crop_move(&mut self, value: CropValue) {
        (**self).on_crop_move(value);
    }

    fn on_crop_end(&mut self, value: CropValue) {
        (**self).on_crop_end(value);
    }

    fn on_update(&mut self, crop_box: &CropBox) {
        (**self).on_update(crop_box);
    }
}

type ValueFn = Box<dyn FnMut(CropValue)>;
type UpdateFn = Box<dyn FnMut(&CropBox)>;

/// A [`CropObserver`] assembled from closures.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use kurbo::Size;
/// use understory_cropper::{Callbacks, Cropper, ImageMetrics, Options};
///
/// let ends = Rc::new(Cell::new(0));
/// let counter = ends.clone();
/// let callbacks = Callbacks::new().on_crop_end(move |_| counter.set(counter.get() + 1));
///
/// let mut cropper = Cropper::builder()
///     .options(Options::default())
///     .image(ImageMetrics::unscaled(Size::new(500.0, 500.0)))
///     .observer(callbacks)
///     .build()
///     .unwrap();
/// cropper.reset();
/// assert_eq!(ends.get(), 1);
/// ```
#[derive(Default)]
pub struct Callbacks {
    initialize: Option<ValueFn>,
    crop_start: Option<ValueFn>,
    crop_move: Option<ValueFn>,
    crop_end: Option<ValueFn>,
    update: Option<UpdateFn>,
}

impl Callbacks {
    /// Creates an observer with no callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initialization callback.
    #[must_use]
    pub fn on_initialize(mut self, f: impl FnMut(CropValue) + 'static) -> Self {
        self.initialize = Some(Box::new(f));
        self
    }

    /// Sets the gesture start callback.
    #[must_use]
    pub fn on_crop_start(mut self, f: impl FnMut(CropValue) + 'static) -> Self {
        self.crop_start = Some(Box::new(f));
        self
    }

    /// Sets the gesture move callback.
    #[must_use]
    pub fn on_crop_move(mut self, f: impl FnMut(CropValue) + 'static) -> Self {
        self.crop_move = Some(Box::new(f));
        self
    }

    /// Sets the end callback.
    #[must_use]
    pub fn on_crop_end(mut self, f: impl FnMut(CropValue) + 'static) -> Self {
        self.crop_end = Some(Box::new(f));
        self
    }

    /// Sets the redraw callback, called with every new box.
    #[must_use]
    pub fn on_update(mut self, f: impl FnMut(&CropBox) + 'static) -> Self {
        self.update = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("initialize", &self.initialize.is_some())
            .field("crop_start", &self.crop_start.is_some())
            .field("crop_move", &self.crop_move.is_some())
            .field("crop_end", &self.crop_end.is_some())
            .field("update", &self.update.is_some())
            .finish()
    }
}

fn call(slot: &mut Option<ValueFn>, value: CropValue) {
    if let Some(f) = slot {
        f(value);
    }
}

impl CropObserver for Callbacks {
    fn on_initialize(&mut self, value: CropValue) {
        call(&mut self.initialize, value);
    }

    fn on_crop_start(&mut self, value: CropValue) {
        call(&mut self.crop_start, value);
    }

    fn on_crop_move(&mut self, value: CropValue) {
        call(&mut self.crop_move, value);
    }

    fn on_crop_end(&mut self, value: CropValue) {
        call(&mut self.crop_end, value);
    }

    fn on_update(&mut self, crop_box: &CropBox) {
        if let Some(f) = &mut self.update {
            f(crop_box);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn callbacks_forward_to_set_slots() {
        let seen: Rc<RefCell<Vec<CropBox>>> = Rc::default();
        let ends = Rc::new(RefCell::new(0));
        let mut callbacks = {
            let seen = seen.clone();
            let ends = ends.clone();
            Callbacks::new()
                .on_update(move |b| seen.borrow_mut().push(*b))
                .on_crop_end(move |_| *ends.borrow_mut() += 1)
        };

        // The builder methods share these names, so go through the trait.
        let b = CropBox::new(1.0, 2.0, 3.0, 4.0);
        CropObserver::on_update(&mut callbacks, &b);
        CropObserver::on_crop_start(&mut callbacks, CropValue::default());
        CropObserver::on_crop_end(&mut callbacks, CropValue::default());

        assert_eq!(*seen.borrow(), [b]);
        assert_eq!(*ends.borrow(), 1);
    }

    #[test]
    fn debug_lists_set_slots() {
        let callbacks = Callbacks::new().on_update(|_| {});
        let text = alloc::format!("{callbacks:?}");
        assert!(text.contains("update: true"), "{text}");
        assert!(text.contains("crop_end: false"), "{text}");
    }
}
