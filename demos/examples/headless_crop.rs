// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless crop session: configuration, pointer gestures, and observers.
//!
//! This example shows how to:
//! - resolve a JSON `CropperConfig` against a container size,
//! - drive a `Cropper` with raw pointer events (`on_down` / `on_move` / `on_up`),
//! - observe lifecycle events through `Callbacks`,
//! - read the result in each `ReturnMode`.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_examples --example headless_crop`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Size};
use understory_crop_box::Origin;
use understory_cropper::{Callbacks, CropValue, Cropper, CropperConfig, ImageMetrics, ReturnMode};

const CONFIG: &str = r#"{
    "aspectRatio": { "width": 4, "height": 3 },
    "minSize": { "width": 10, "height": 10, "unit": "%" },
    "startSize": { "width": 60, "height": 60 },
    "returnMode": "real"
}"#;

fn main() {
    env_logger::init();

    // A 4000x3000 photo shown at 800x600.
    let image = ImageMetrics::new(Size::new(800.0, 600.0), Size::new(4000.0, 3000.0));

    let config: CropperConfig = match serde_json::from_str(CONFIG) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("bad config: {err}");
            return;
        }
    };
    let options = match config.resolve(image.displayed) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("bad config: {err}");
            return;
        }
    };
    println!("Resolved options: {options:?}");

    // Collect every lifecycle event so it can be printed after each gesture.
    let log: Rc<RefCell<Vec<(&'static str, CropValue)>>> = Rc::default();
    let record = |name: &'static str| {
        let log = log.clone();
        move |value: CropValue| log.borrow_mut().push((name, value))
    };
    let callbacks = Callbacks::new()
        .on_initialize(record("initialize"))
        .on_crop_start(record("crop_start"))
        .on_crop_move(record("crop_move"))
        .on_crop_end(record("crop_end"));

    let built = Cropper::builder()
        .options(options)
        .image(image)
        .observer(callbacks)
        .build();
    let mut cropper = match built {
        Ok(cropper) => cropper,
        Err(err) => {
            eprintln!("cannot start session: {err}");
            return;
        }
    };
    flush("build", &log);

    let start = cropper.crop_box();
    println!("Initial box: {start:?}");

    // Pull the south-east corner outwards; the 4:3 ratio holds.
    let corner = Point::new(start.x2, start.y2);
    let gestures: [(&str, Point, &[Point]); 3] = [
        (
            "corner drag",
            corner,
            &[Point::new(650.0, 480.0), Point::new(760.0, 560.0)],
        ),
        (
            "region drag",
            Point::new(300.0, 300.0),
            &[Point::new(250.0, 250.0), Point::new(-100.0, 200.0)],
        ),
        ("click on overlay", Point::new(790.0, 590.0), &[]),
    ];
    for (label, down, moves) in gestures {
        println!("\n== {label} ==");
        println!("Pressed on: {:?}", cropper.on_down(down));
        for &point in moves {
            cropper.on_move(point);
        }
        cropper.on_up();
        println!("Box: {:?}", cropper.crop_box());
        flush(label, &log);
    }

    println!("\n== convenience operations ==");
    cropper
        .scale_by(0.5, None)
        .move_to(0.0, 0.0)
        .resize_to(200.0, 150.0, Some(Origin::TOP_LEFT));
    flush("scale/move/resize", &log);

    for mode in [ReturnMode::Real, ReturnMode::Ratio, ReturnMode::Raw] {
        let value = cropper.value_in(mode);
        match serde_json::to_string(&value) {
            Ok(json) => println!("{mode}: {json}"),
            Err(err) => eprintln!("{mode}: {err}"),
        }
    }
}

fn flush(label: &str, log: &Rc<RefCell<Vec<(&'static str, CropValue)>>>) {
    for (event, value) in log.borrow_mut().drain(..) {
        log::info!("{label}: {event} {value:?}");
        println!("  {event:<10} {value:?}");
    }
}
