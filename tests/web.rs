// Browser tests: wasm-pack test --headless --firefox

#![cfg(target_arch = "wasm32")]

use ember_field::{CanvasSurface, EMBER_PALETTE, ParticleBackground, Surface};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

fn add_canvas(id: &str) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn viewport() -> (u32, u32) {
    let window = web_sys::window().unwrap();
    let w = window.inner_width().unwrap().as_f64().unwrap() as u32;
    let h = window.inner_height().unwrap().as_f64().unwrap() as u32;
    (w, h)
}

fn fire_resize() {
    let event = Event::new("resize").unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn missing_canvas_is_a_silent_no_op() {
    assert!(ParticleBackground::start("no-such-canvas").is_none());
}

#[wasm_bindgen_test]
fn non_canvas_element_is_a_silent_no_op() {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    div.set_id("not-a-canvas");
    document.body().unwrap().append_child(&div).unwrap();

    assert!(ParticleBackground::start("not-a-canvas").is_none());
}

#[wasm_bindgen_test]
fn start_sizes_canvas_to_viewport() {
    let canvas = add_canvas("particleCanvas");
    let (w, h) = viewport();

    let mut bg = ParticleBackground::start("particleCanvas").expect("canvas is present");
    assert_eq!((canvas.width(), canvas.height()), (w, h));
    assert_eq!(bg.particle_count(), (w / 20) as usize);
    assert!(bg.is_running());

    bg.stop();
    assert!(!bg.is_running());
    bg.stop();
}

#[wasm_bindgen_test]
fn alpha_is_restored_after_each_circle() {
    let canvas = add_canvas("alphaCanvas");
    let mut surface = CanvasSurface::new(canvas).unwrap();
    surface.resize(50, 50);

    surface.fill_circle(10.0, 10.0, 2.0, EMBER_PALETTE[0], 0.4);
    assert_eq!(surface.context().global_alpha(), 1.0);

    surface.fill_circle(20.0, 20.0, 3.0, EMBER_PALETTE[2], 0.75);
    assert_eq!(surface.context().global_alpha(), 1.0);
}

#[wasm_bindgen_test]
fn window_resize_resizes_canvas_not_population() {
    let canvas = add_canvas("resizeCanvas");
    let bg = ParticleBackground::start("resizeCanvas").expect("canvas is present");
    let count = bg.particle_count();

    canvas.set_width(1);
    canvas.set_height(1);
    fire_resize();

    assert_eq!((canvas.width(), canvas.height()), viewport());
    assert_eq!(bg.particle_count(), count);
    assert!(bg.is_running());
}

#[wasm_bindgen_test]
fn stopped_background_ignores_resize() {
    let canvas = add_canvas("stoppedCanvas");
    let mut bg = ParticleBackground::start("stoppedCanvas").expect("canvas is present");
    bg.stop();

    canvas.set_width(1);
    canvas.set_height(1);
    fire_resize();

    assert_eq!((canvas.width(), canvas.height()), (1, 1));
}

#[wasm_bindgen_test]
fn detached_background_keeps_listening() {
    let canvas = add_canvas("detachedCanvas");
    let bg = ParticleBackground::start("detachedCanvas").expect("canvas is present");
    bg.detach();

    canvas.set_width(1);
    canvas.set_height(1);
    fire_resize();

    assert_eq!((canvas.width(), canvas.height()), viewport());
}
