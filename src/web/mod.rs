// web/ - Browser binding
//
// requestAnimationFrame drives the animator one frame per display refresh;
// the window `resize` event resizes the canvas. The browser pauses the frame
// chain on hidden tabs by itself.

mod console;
mod surface;

pub use console::init_logging;
pub use surface::CanvasSurface;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use crate::animator::{Animator, CancelToken, FrameOutcome};
use crate::error::{Error, Result};

type SharedAnimator = Rc<RefCell<Animator<CanvasSurface, SmallRng>>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Falling ember background on a page canvas.
///
/// Runs until `stop()` is called or the handle is dropped. Dropping includes
/// a JS `free()` and, in weak-ref builds, garbage collection of the JS
/// wrapper, so keep the handle alive for as long as the page should animate
/// or call `detach()` to hand the loop over to the page for good.
#[wasm_bindgen]
pub struct ParticleBackground {
    window: Window,
    animator: SharedAnimator,
    tick: FrameCallback,
    pending: Rc<Cell<Option<i32>>>,
    on_resize: Option<Closure<dyn FnMut()>>,
    token: CancelToken,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Attach to the canvas with id `canvas_id` and start animating.
    /// Returns `undefined` if the page has no usable 2D canvas.
    pub fn start(canvas_id: &str) -> Option<ParticleBackground> {
        match Self::attach(canvas_id) {
            Ok(bg) => Some(bg),
            Err(err) => {
                log::debug!("particle background disabled: {err}");
                None
            }
        }
    }

    /// Cancel the pending frame and detach from the window.
    pub fn stop(&mut self) {
        self.animator.borrow().stop();

        if let Some(id) = self.pending.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {err:?}");
            }
        }
        if let Some(cb) = self.on_resize.take() {
            let res = self
                .window
                .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
            if let Err(err) = res {
                log::warn!("removing resize listener failed: {err:?}");
            }
        }
        // Breaks the frame closure's reference to itself
        self.tick.borrow_mut().take();
    }

    /// Give up the handle and leave the background running for the rest of
    /// the page's life. It can no longer be stopped.
    pub fn detach(self) {
        log::debug!("particle background detached");
        std::mem::forget(self);
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }

    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.animator.borrow().field().len()
    }
}

impl ParticleBackground {
    fn attach(canvas_id: &str) -> Result<Self> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let document = window.document().ok_or(Error::NoDocument)?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| Error::CanvasNotFound(canvas_id.to_owned()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| Error::NotACanvas(canvas_id.to_owned()))?;
        let surface = CanvasSurface::new(canvas)?;

        let (w, h) = viewport(&window)?;
        let animator = Animator::new(surface, w, h, SmallRng::seed_from_u64(seed()));
        let token = animator.cancel_token();
        let animator: SharedAnimator = Rc::new(RefCell::new(animator));

        let tick: FrameCallback = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));
        {
            let window = window.clone();
            let animator = animator.clone();
            let next = tick.clone();
            let pending = pending.clone();
            *tick.borrow_mut() = Some(Closure::new(move || {
                pending.set(None);
                if animator.borrow_mut().frame() == FrameOutcome::Stopped {
                    return;
                }
                if let Some(cb) = next.borrow().as_ref() {
                    match request_frame(&window, cb) {
                        Ok(id) => pending.set(Some(id)),
                        Err(err) => log::warn!("animation loop ended: {err}"),
                    }
                }
            }));
        }
        let first = match tick.borrow().as_ref() {
            Some(cb) => request_frame(&window, cb),
            None => Err(Error::Js("frame callback missing".into())),
        };
        let first = match first {
            Ok(id) => id,
            Err(err) => {
                tick.borrow_mut().take();
                return Err(err);
            }
        };
        pending.set(Some(first));

        // Registered last so a failed start leaves no listener behind.
        let on_resize = {
            let window = window.clone();
            let animator = animator.clone();
            Closure::<dyn FnMut()>::new(move || match viewport(&window) {
                Ok((w, h)) => animator.borrow_mut().resize(w, h),
                Err(err) => log::warn!("resize ignored: {err}"),
            })
        };
        let added =
            window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        if let Err(err) = added {
            if let Err(cancel) = window.cancel_animation_frame(first) {
                log::warn!("cancelAnimationFrame failed: {cancel:?}");
            }
            tick.borrow_mut().take();
            return Err(err.into());
        }

        log::debug!("particle background attached to #{canvas_id}");
        Ok(Self { window, animator, tick, pending, on_resize: Some(on_resize), token })
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(window: &Window, cb: &Closure<dyn FnMut()>) -> Result<i32> {
    Ok(window.request_animation_frame(cb.as_ref().unchecked_ref())?)
}

fn viewport(window: &Window) -> Result<(u32, u32)> {
    let w = window.inner_width()?.as_f64().unwrap_or(0.0);
    let h = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((w as u32, h as u32))
}

fn seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}
