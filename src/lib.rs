// ============================================================================
// EMBER FIELD - Falling particle background for canvas pages
// ============================================================================
//
// sim/      particle population and per-frame motion
// render    Surface trait + full-frame repaint
// animator  frame loop control with a cancel token
// raster    software RGBA surface (previews, tests)
// web/      <canvas> binding driven by requestAnimationFrame (wasm32 only)

pub mod animator;
pub mod error;
pub mod raster;
pub mod render;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use animator::{Animator, CancelToken, FrameOutcome};
pub use error::{Error, Result};
pub use raster::Raster;
pub use render::{Surface, paint};
pub use sim::{EMBER_PALETTE, Field, Particle, Rgb, particle_count};

#[cfg(target_arch = "wasm32")]
pub use web::{CanvasSurface, ParticleBackground};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    web::init_logging(log::LevelFilter::Info);
}
