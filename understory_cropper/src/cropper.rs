// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The crop session: current box, gesture state, and notifications.

use kurbo::{Point, Size};
use understory_crop_box::{Constraints, CropBox, Origin};

use crate::gesture::{ActiveHandle, Gesture, RegionDrag};
use crate::hit::{HitTarget, hit_test};
use crate::{
    CropError, CropObserver, CropValue, Handle, HandleId, ImageMetrics, Options, ReturnMode,
};

/// Builder for [`Cropper`].
#[derive(Debug)]
pub struct CropperBuilder<O = ()> {
    options: Options,
    image: Option<ImageMetrics>,
    container: Option<Size>,
    observer: O,
}

impl Default for CropperBuilder<()> {
    fn default() -> Self {
        Self {
            options: Options::default(),
            image: None,
            container: None,
            observer: (),
        }
    }
}

impl<O: CropObserver> CropperBuilder<O> {
    /// Sets the pixel options.
    #[must_use]
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Sets the image being cropped. Required.
    #[must_use]
    pub fn image(mut self, image: ImageMetrics) -> Self {
        self.image = Some(image);
        self
    }

    /// Sets the container size the box is bounded by. Defaults to the
    /// displayed image size.
    #[must_use]
    pub fn container(mut self, container: Size) -> Self {
        self.container = Some(container);
        self
    }

    /// Sets the observer notified of session events.
    pub fn observer<P: CropObserver>(self, observer: P) -> CropperBuilder<P> {
        CropperBuilder {
            options: self.options,
            image: self.image,
            container: self.container,
            observer,
        }
    }

    /// Validates the inputs, builds the initial box, and calls
    /// [`CropObserver::on_initialize`].
    pub fn build(self) -> Result<Cropper<O>, CropError> {
        self.options.validate()?;
        let image = self.image.ok_or(CropError::MissingImage)?;
        if !image.is_displayable() {
            return Err(CropError::EmptyImage {
                width: image.displayed.width,
                height: image.displayed.height,
            });
        }
        let container = self.container.unwrap_or(image.displayed);
        if !ImageMetrics::unscaled(container).is_displayable() {
            return Err(CropError::EmptyImage {
                width: container.width,
                height: container.height,
            });
        }

        let constraints = self.options.constraints();
        let crop_box = constraints.initial_box(self.options.start_size_in(container), container);
        let mut cropper = Cropper {
            options: self.options,
            constraints,
            image,
            container,
            crop_box,
            gesture: Gesture::Idle,
            observer: self.observer,
        };
        log::debug!("crop session initialized with {crop_box:?} in {container:?}");
        cropper.observer.on_update(&cropper.crop_box);
        let value = cropper.value();
        cropper.observer.on_initialize(value);
        Ok(cropper)
    }
}

/// An interactive crop session over one image.
///
/// The session owns the current [`CropBox`] and a [`Gesture`] state machine:
///
/// - `Idle` → handle drag via [`on_handle_down`](Self::on_handle_down),
///   region drag via [`on_region_down`](Self::on_region_down), or a new box via
///   [`on_overlay_down`](Self::on_overlay_down). [`on_down`](Self::on_down)
///   hit-tests and picks one of these.
/// - [`on_move`](Self::on_move) replaces the box with a freshly resolved one.
/// - [`on_up`](Self::on_up) returns to `Idle`.
///
/// A press while a gesture is active is ignored; the active gesture continues.
///
/// ```
/// use kurbo::{Point, Size};
/// use understory_cropper::{Cropper, HandleId, ImageMetrics, Options};
///
/// let image = ImageMetrics::new(Size::new(500.0, 500.0), Size::new(1000.0, 1000.0));
/// let mut cropper = Cropper::new(Options::default(), image).unwrap();
///
/// cropper.on_handle_down(HandleId::SouthEast);
/// cropper.on_move(Point::new(250.0, 250.0));
/// cropper.on_up();
///
/// let value = cropper.value();
/// assert_eq!((value.width, value.height), (500.0, 500.0));
/// ```
#[derive(Debug)]
pub struct Cropper<O = ()> {
    options: Options,
    constraints: Constraints,
    image: ImageMetrics,
    container: Size,
    crop_box: CropBox,
    gesture: Gesture,
    observer: O,
}

impl Cropper<()> {
    /// Starts a builder.
    pub fn builder() -> CropperBuilder<()> {
        CropperBuilder::default()
    }

    /// Builds a session without an observer.
    pub fn new(options: Options, image: ImageMetrics) -> Result<Self, CropError> {
        Self::builder().options(options).image(image).build()
    }
}

impl<O: CropObserver> Cropper<O> {
    /// The current box.
    pub fn crop_box(&self) -> CropBox {
        self.crop_box
    }

    /// The session options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The image metrics.
    pub fn image(&self) -> &ImageMetrics {
        &self.image
    }

    /// The container the box is bounded by.
    pub fn container(&self) -> Size {
        self.container
    }

    /// The gesture state.
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// The observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutable access to the observer.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// The current box in the configured return mode.
    pub fn value(&self) -> CropValue {
        self.value_in(self.options.return_mode)
    }

    /// The current box in `mode`.
    pub fn value_in(&self, mode: ReturnMode) -> CropValue {
        CropValue::project(&self.crop_box, &self.image, mode)
    }

    /// Classifies a container-relative point.
    pub fn hit_test(&self, point: Point) -> Option<HitTarget> {
        hit_test(&self.crop_box, self.container, point, self.options.handle_radius)
    }

    /// Hit-tests `point` and starts the matching gesture.
    ///
    /// Returns the target that started a gesture, or `None` if the point hit
    /// nothing or a gesture is already active.
    pub fn on_down(&mut self, point: Point) -> Option<HitTarget> {
        let target = self.hit_test(point)?;
        let started = match target {
            HitTarget::Handle(id) => self.on_handle_down(id),
            HitTarget::Region => self.on_region_down(point),
            HitTarget::Overlay => self.on_overlay_down(point),
        };
        started.then_some(target)
    }

    /// Starts dragging `handle`. Returns `false` if a gesture is already active.
    pub fn on_handle_down(&mut self, handle: impl Into<Handle>) -> bool {
        if !self.can_start() {
            return false;
        }
        let active = ActiveHandle::begin(handle.into(), &self.crop_box);
        log::debug!("handle drag started: {active:?}");
        self.gesture = Gesture::Handle(active);
        self.notify_start();
        true
    }

    /// Starts translating the box from a press at `point`. Returns `false` if a
    /// gesture is already active.
    pub fn on_region_down(&mut self, point: Point) -> bool {
        if !self.can_start() {
            return false;
        }
        let drag = RegionDrag::begin(point, &self.crop_box);
        log::debug!("region drag started: {drag:?}");
        self.gesture = Gesture::Region(drag);
        self.notify_start();
        true
    }

    /// Starts drawing a new box from a press on the empty area at `point`.
    ///
    /// The box is seeded as 1×1 at `point` and dragged by its south-east
    /// handle. If the press ends without changing the seed, the previous box
    /// comes back and no end notification is sent. Returns `false` if a gesture
    /// is already active.
    pub fn on_overlay_down(&mut self, point: Point) -> bool {
        if !self.can_start() {
            return false;
        }
        let previous = self.crop_box;
        let seed = CropBox::new(point.x, point.y, point.x + 1.0, point.y + 1.0);
        self.replace_box(seed);
        let active = ActiveHandle::begin(HandleId::SouthEast.handle(), &seed);
        log::debug!("create gesture started at {point:?}");
        self.gesture = Gesture::Creating {
            active,
            previous,
            seed,
        };
        self.notify_start();
        true
    }

    /// Feeds a pointer move. Returns the new box if a gesture is active.
    pub fn on_move(&mut self, point: Point) -> Option<CropBox> {
        let next = match &self.gesture {
            Gesture::Idle => return None,
            Gesture::Handle(active) | Gesture::Creating { active, .. } => {
                active.resolve(&self.crop_box, point, self.container, &self.constraints)
            }
            Gesture::Region(drag) => drag.resolve(&self.crop_box, point, self.container),
        };
        log::trace!("pointer at {point:?} resolved to {next:?}");
        self.replace_box(next);
        let value = self.value();
        self.observer.on_crop_move(value);
        Some(next)
    }

    /// Ends the active gesture. Returns `false` if there was none.
    pub fn on_up(&mut self) -> bool {
        match core::mem::take(&mut self.gesture) {
            Gesture::Idle => false,
            Gesture::Creating { previous, seed, .. } if self.crop_box == seed => {
                log::debug!("create gesture ended without a drag, restoring {previous:?}");
                self.replace_box(previous);
                true
            }
            _ => {
                log::debug!("gesture ended with {:?}", self.crop_box);
                let value = self.value();
                self.observer.on_crop_end(value);
                true
            }
        }
    }

    /// Moves the box so its top-left corner is at `(x, y)`.
    ///
    /// Like the other convenience operations, this does nothing while a
    /// gesture is active and does not run the constraint pipeline.
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        if self.can_start() {
            let mut next = self.crop_box;
            next.move_to(Some(x), Some(y));
            self.finish_edit(next);
        }
        self
    }

    /// Resizes the box around `origin` (the center when `None`).
    pub fn resize_to(&mut self, width: f64, height: f64, origin: Option<Origin>) -> &mut Self {
        if self.can_start() {
            let mut next = self.crop_box;
            next.resize(width, height, origin.unwrap_or(Origin::CENTER));
            self.finish_edit(next);
        }
        self
    }

    /// Scales the box by `factor` around `origin` (the center when `None`).
    pub fn scale_by(&mut self, factor: f64, origin: Option<Origin>) -> &mut Self {
        if self.can_start() {
            let mut next = self.crop_box;
            next.scale(factor, origin.unwrap_or(Origin::CENTER));
            self.finish_edit(next);
        }
        self
    }

    /// Rebuilds the box from the configured start size and constraints.
    pub fn reset(&mut self) -> &mut Self {
        if self.can_start() {
            log::debug!("resetting crop box");
            self.finish_edit(self.initial_box());
        }
        self
    }

    /// Replaces the image and rebuilds the box for it.
    ///
    /// The container follows the new displayed size. Any active gesture is
    /// dropped without notifications.
    pub fn set_image(&mut self, image: ImageMetrics) -> Result<(), CropError> {
        if !image.is_displayable() {
            return Err(CropError::EmptyImage {
                width: image.displayed.width,
                height: image.displayed.height,
            });
        }
        log::debug!("image changed to {image:?}");
        self.image = image;
        self.container = image.displayed;
        self.gesture = Gesture::Idle;
        let next = self.initial_box();
        self.replace_box(next);
        Ok(())
    }

    /// Updates the container size used by later constraint passes. The
    /// current box is left as is.
    pub fn set_container(&mut self, container: Size) -> Result<(), CropError> {
        if !ImageMetrics::unscaled(container).is_displayable() {
            return Err(CropError::EmptyImage {
                width: container.width,
                height: container.height,
            });
        }
        self.container = container;
        Ok(())
    }

    fn initial_box(&self) -> CropBox {
        let start = self.options.start_size_in(self.container);
        self.constraints.initial_box(start, self.container)
    }

    fn can_start(&self) -> bool {
        if self.gesture.is_active() {
            log::debug!("ignoring request while {:?} is active", self.gesture);
            return false;
        }
        true
    }

    fn notify_start(&mut self) {
        let value = self.value();
        self.observer.on_crop_start(value);
    }

    fn replace_box(&mut self, next: CropBox) {
        self.crop_box = next;
        self.observer.on_update(&self.crop_box);
    }

    fn finish_edit(&mut self, next: CropBox) {
        self.replace_box(next);
        let value = self.value();
        self.observer.on_crop_end(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Callbacks, Edges, HANDLES};
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use understory_crop_box::SizeLimit;

    const CONTAINER: Size = Size::new(500.0, 500.0);

    fn image() -> ImageMetrics {
        ImageMetrics::new(CONTAINER, Size::new(1000.0, 1000.0))
    }

    #[derive(Debug, Default)]
    struct Recorder {
        events: Vec<&'static str>,
        updates: usize,
    }

    impl CropObserver for Recorder {
        fn on_initialize(&mut self, _value: CropValue) {
            self.events.push("initialize");
        }

        fn on_crop_start(&mut self, _value: CropValue) {
            self.events.push("start");
        }

        fn on_crop_move(&mut self, _value: CropValue) {
            self.events.push("move");
        }

        fn on_crop_end(&mut self, _value: CropValue) {
            self.events.push("end");
        }

        fn on_update(&mut self, _crop_box: &CropBox) {
            self.updates += 1;
        }
    }

    fn recorded(options: Options) -> Cropper<Recorder> {
        Cropper::builder()
            .options(options)
            .image(image())
            .observer(Recorder::default())
            .build()
            .unwrap()
    }

    fn drag_handle<O: CropObserver>(
        cropper: &mut Cropper<O>,
        handle: impl Into<Handle>,
        to: Point,
    ) {
        assert!(cropper.on_handle_down(handle));
        cropper.on_move(to);
        assert!(cropper.on_up());
    }

    fn drag_region<O: CropObserver>(cropper: &mut Cropper<O>, from: Point, to: Point) {
        assert!(cropper.on_region_down(from));
        cropper.on_move(to);
        assert!(cropper.on_up());
    }

    #[test]
    fn build_requires_image() {
        let err = Cropper::builder().options(Options::default()).build().unwrap_err();
        assert_eq!(err, CropError::MissingImage);

        let err = Cropper::new(Options::default(), ImageMetrics::unscaled(Size::ZERO)).unwrap_err();
        assert!(matches!(err, CropError::EmptyImage { .. }));
    }

    #[test]
    fn build_rejects_bad_ratio() {
        let err = Cropper::new(Options::default().with_aspect_ratio(-1.0), image()).unwrap_err();
        assert_eq!(err, CropError::InvalidAspectRatio(-1.0));
    }

    #[test]
    fn default_box_is_full_container() {
        let cropper = Cropper::new(Options::default(), image()).unwrap();
        assert_eq!(cropper.crop_box(), CropBox::new(0.0, 0.0, 500.0, 500.0));
    }

    #[test]
    fn initialize_fires_once() {
        let cropper = recorded(Options::default());
        assert_eq!(cropper.observer().events, ["initialize"]);
        assert_eq!(cropper.observer().updates, 1);
    }

    #[test]
    fn handle_drag_resizes() {
        let mut cropper = Cropper::new(Options::default(), image()).unwrap();
        drag_handle(&mut cropper, HandleId::SouthEast, Point::new(450.0, 450.0));
        assert_eq!(cropper.crop_box(), CropBox::new(0.0, 0.0, 450.0, 450.0));
        assert!(!cropper.gesture().is_active());
    }

    #[test]
    fn flipped_handle_drag_stays_normalized() {
        let mut cropper = Cropper::new(Options::default(), image()).unwrap();
        drag_handle(&mut cropper, HandleId::East, Point::new(250.0, 250.0));
        drag_handle(&mut cropper, HandleId::West, Point::new(500.0, 250.0));
        let b = cropper.crop_box();
        assert!(b.x2 > b.x1 && b.y2 > b.y1, "{b:?}");
        assert_eq!(b, CropBox::new(250.0, 0.0, 500.0, 500.0));
    }

    #[test]
    fn handle_drag_stays_inside_container() {
        let mut cropper = Cropper::new(Options::default(), image()).unwrap();
        drag_handle(&mut cropper, HandleId::SouthEast, Point::new(600.0, 600.0));
        let b = cropper.crop_box();
        assert!(b.x2 <= 500.0 && b.y2 <= 500.0);
    }

    #[test]
    fn options_are_respected_while_dragging() {
        let options = Options::default()
            .with_aspect_ratio(1.5)
            .with_max_size(300.0, 300.0)
            .with_min_size(50.0, 50.0);
        let mut cropper = Cropper::new(options, image()).unwrap();

        drag_handle(&mut cropper, HandleId::SouthEast, Point::new(500.0, 450.0));
        let b = cropper.crop_box();
        assert!(((b.height() / b.width()) - 1.5).abs() < 0.005, "{b:?}");

        cropper.reset();
        drag_handle(&mut cropper, HandleId::SouthEast, Point::new(500.0, 500.0));
        let b = cropper.crop_box();
        assert!(b.width() <= 300.0 && b.height() <= 300.0, "{b:?}");

        cropper.reset();
        let start = cropper.crop_box();
        drag_handle(
            &mut cropper,
            HandleId::SouthEast,
            Point::new(start.x1 + 10.0, start.y1 + 10.0),
        );
        let b = cropper.crop_box();
        assert!(b.width() >= 50.0 && b.height() >= 50.0, "{b:?}");
    }

    #[test]
    fn custom_handle_table_entries_work() {
        let mut cropper = Cropper::new(Options::default(), image()).unwrap();
        let bottom_right = Handle::new(Origin::BOTTOM_RIGHT, Edges::from_constraints([0, 1, 1, 0]));
        assert_eq!(bottom_right, HANDLES[HandleId::SouthEast.index()]);
        drag_handle(&mut cropper, bottom_right, Point::new(450.0, 450.0));
        assert_eq!(cropper.crop_box(), CropBox::new(0.0, 0.0, 450.0, 450.0));
    }

    #[test]
    fn region_drag_moves_and_clamps() {
        let mut cropper = Cropper::new(Options::default(), image()).unwrap();
        cropper.resize_to(250.0, 250.0, None).move_to(0.0, 0.0);
        drag_region(&mut cropper, Point::new(0.0, 0.0), Point::new(250.0, 250.0));
        assert_eq!(cropper.crop_box(), CropBox::new(250.0, 250.0, 500.0, 500.0));

        cropper.reset();
        cropper.resize_to(250.0, 250.0, None).move_to(0.0, 0.0);
        drag_region(&mut cropper, Point::new(0.0, 0.0), Point::new(500.0, 500.0));
        assert_eq!(cropper.crop_box(), CropBox::new(250.0, 250.0, 500.0, 500.0));
    }

    #[test]
    fn gestures_notify_start_move_end() {
        let mut cropper = recorded(Options::default());
        drag_handle(&mut cropper, HandleId::SouthEast, Point::new(250.0, 250.0));
        drag_region(&mut cropper, Point::new(0.0, 0.0), Point::new(100.0, 100.0));
        assert_eq!(
            cropper.observer().events,
            ["initialize", "start", "move", "end", "start", "move", "end"]
        );
        assert_eq!(cropper.observer().updates, 3);
    }

    #[test]
    fn callbacks_receive_every_redraw() {
        let boxes: Rc<RefCell<Vec<CropBox>>> = Rc::default();
        let callbacks = {
            let boxes = boxes.clone();
            Callbacks::new().on_update(move |b| boxes.borrow_mut().push(*b))
        };
        let mut cropper = Cropper::builder()
            .image(image())
            .observer(callbacks)
            .build()
            .unwrap();
        drag_handle(&mut cropper, HandleId::SouthEast, Point::new(250.0, 250.0));
        assert_eq!(
            *boxes.borrow(),
            [
                CropBox::new(0.0, 0.0, 500.0, 500.0),
                CropBox::new(0.0, 0.0, 250.0, 250.0),
            ]
        );
    }

    #[test]
    fn second_press_is_ignored() {
        let mut cropper = recorded(Options::default());
        assert!(cropper.on_handle_down(HandleId::SouthEast));
        assert!(!cropper.on_handle_down(HandleId::NorthWest));
        assert!(!cropper.on_region_down(Point::new(10.0, 10.0)));
        cropper.on_move(Point::new(200.0, 200.0));
        assert!(cropper.on_up());
        assert!(!cropper.on_up());
        assert_eq!(cropper.crop_box(), CropBox::new(0.0, 0.0, 200.0, 200.0));
        assert_eq!(cropper.observer().events, ["initialize", "start", "move", "end"]);
    }

    #[test]
    fn move_without_gesture_is_ignored() {
        let mut cropper = Cropper::new(Options::default(), image()).unwrap();
        assert_eq!(cropper.on_move(Point::new(10.0, 10.0)), None);
        assert_eq!(cropper.crop_box(), CropBox::new(0.0, 0.0, 500.0, 500.0));
    }

    #[test]
    fn overlay_click_without_drag_restores_box() {
        let mut cropper = recorded(Options::default().with_start_size(100.0, 100.0));
        let before = cropper.crop_box();
        assert!(cropper.on_overlay_down(Point::new(20.0, 20.0)));
        assert_eq!(cropper.crop_box(), CropBox::new(20.0, 20.0, 21.0, 21.0));
        assert!(cropper.on_up());
        assert_eq!(cropper.crop_box(), before);
        assert_eq!(cropper.observer().events, ["initialize", "start"]);
        // Seed and restore are both redrawn.
        assert_eq!(cropper.observer().updates, 3);
    }

    #[test]
    fn overlay_click_at_fractional_point_restores_box() {
        let mut cropper = recorded(Options::default().with_start_size(100.0, 100.0));
        let before = cropper.crop_box();
        for point in [
            Point::new(20.0, 1.2),
            Point::new(0.4, 3.1),
            Point::new(3.4, 77.7),
        ] {
            assert!(cropper.on_overlay_down(point));
            assert!(cropper.on_up());
            assert_eq!(cropper.crop_box(), before, "click at {point:?}");
        }
        assert_eq!(cropper.observer().events, ["initialize", "start", "start", "start"]);
    }

    #[test]
    fn overlay_drag_creates_box() {
        let mut cropper = recorded(Options::default().with_start_size(100.0, 100.0));
        assert!(cropper.on_overlay_down(Point::new(20.0, 30.0)));
        cropper.on_move(Point::new(120.0, 80.0));
        assert!(cropper.on_up());
        assert_eq!(cropper.crop_box(), CropBox::new(20.0, 30.0, 120.0, 80.0));
        assert_eq!(cropper.observer().events, ["initialize", "start", "move", "end"]);
    }

    #[test]
    fn on_down_dispatches_by_hit() {
        let options = Options::default().with_start_size(100.0, 100.0);
        let mut cropper = Cropper::new(options, image()).unwrap();
        // Box is 200..300 on both axes.
        assert_eq!(
            cropper.on_down(Point::new(300.0, 300.0)),
            Some(HitTarget::Handle(HandleId::SouthEast))
        );
        cropper.on_up();
        assert_eq!(cropper.on_down(Point::new(250.0, 250.0)), Some(HitTarget::Region));
        cropper.on_up();
        assert_eq!(cropper.on_down(Point::new(10.0, 10.0)), Some(HitTarget::Overlay));
        cropper.on_up();
        assert_eq!(cropper.crop_box(), CropBox::new(200.0, 200.0, 300.0, 300.0));
        assert_eq!(cropper.on_down(Point::new(900.0, 10.0)), None);
    }

    #[test]
    fn value_projection_modes() {
        let mut cropper = Cropper::new(Options::default(), image()).unwrap();
        cropper.resize_to(250.0, 100.0, Some(Origin::TOP_LEFT));
        assert_eq!(
            cropper.value(),
            CropValue {
                x: 0.0,
                y: 0.0,
                width: 500.0,
                height: 200.0
            }
        );
        assert_eq!(
            cropper.value_in(ReturnMode::Ratio),
            CropValue {
                x: 0.0,
                y: 0.0,
                width: 0.5,
                height: 0.2
            }
        );
        assert_eq!(
            cropper.value_in(ReturnMode::Raw),
            CropValue {
                x: 0.0,
                y: 0.0,
                width: 250.0,
                height: 100.0
            }
        );
    }

    #[test]
    fn convenience_operations_notify_end() {
        let mut cropper = recorded(Options::default());
        cropper
            .move_to(10.0, 10.0)
            .scale_by(0.5, None)
            .resize_to(100.0, 100.0, None);
        cropper.reset();
        assert_eq!(cropper.observer().events, ["initialize", "end", "end", "end", "end"]);
        assert_eq!(cropper.crop_box(), CropBox::new(0.0, 0.0, 500.0, 500.0));
    }

    #[test]
    fn convenience_operations_wait_for_gesture() {
        let mut cropper = Cropper::new(Options::default(), image()).unwrap();
        cropper.on_handle_down(HandleId::SouthEast);
        cropper.move_to(100.0, 100.0).reset();
        assert_eq!(cropper.crop_box(), CropBox::new(0.0, 0.0, 500.0, 500.0));
    }

    #[test]
    fn reset_uses_start_size_and_constraints() {
        let options = Options::default()
            .with_start_size(100.0, 100.0)
            .with_max_size(80.0, 80.0);
        let mut cropper = Cropper::new(options, image()).unwrap();
        assert_eq!(cropper.crop_box(), CropBox::new(210.0, 210.0, 290.0, 290.0));
        cropper.move_to(0.0, 0.0);
        cropper.reset();
        assert_eq!(cropper.crop_box(), CropBox::new(210.0, 210.0, 290.0, 290.0));
        assert_eq!(cropper.options().max_size, SizeLimit::new(80.0, 80.0));
    }

    #[test]
    fn set_image_reinitializes() {
        let mut cropper = Cropper::new(Options::default(), image()).unwrap();
        cropper
            .set_image(ImageMetrics::unscaled(Size::new(200.0, 100.0)))
            .unwrap();
        assert_eq!(cropper.container(), Size::new(200.0, 100.0));
        assert_eq!(cropper.crop_box(), CropBox::new(0.0, 0.0, 200.0, 100.0));
        assert!(cropper.set_image(ImageMetrics::unscaled(Size::ZERO)).is_err());
    }
}
