// animator.rs - Frame loop control
//
// The animator does not schedule itself. Whatever drives it (a browser
// animation-frame callback, a timer, a render thread) calls `frame()` once
// per refresh until the token is cancelled.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rand::Rng;

use crate::render::{Surface, paint};
use crate::sim::Field;

/// Shared stop signal for a running animator.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Result of a single `frame()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The frame was drawn; `respawned` particles wrapped to the top.
    Drawn { respawned: usize },
    /// The animator was cancelled; nothing was touched.
    Stopped,
}

/// Owns a particle field and the surface it is painted on.
#[derive(Debug)]
pub struct Animator<S, R> {
    field: Field<R>,
    surface: S,
    token: CancelToken,
}

impl<S: Surface, R: Rng> Animator<S, R> {
    /// Size `surface` to the viewport and populate a field for it.
    pub fn new(mut surface: S, w: u32, h: u32, rng: R) -> Self {
        surface.resize(w, h);
        let field = Field::new(w, h, rng);
        log::debug!("animator ready: {}x{}, {} particles", w, h, field.len());
        Self { field, surface, token: CancelToken::new() }
    }

    /// Wrap an existing field. The surface is sized to the field.
    pub fn with_field(mut surface: S, field: Field<R>) -> Self {
        surface.resize(field.width(), field.height());
        Self { field, surface, token: CancelToken::new() }
    }

    /// One display refresh: move every particle, then repaint.
    pub fn frame(&mut self) -> FrameOutcome {
        if self.token.is_cancelled() {
            return FrameOutcome::Stopped;
        }
        let respawned = self.field.step();
        paint(&self.field, &mut self.surface);
        FrameOutcome::Drawn { respawned }
    }

    /// Viewport changed. The surface is resized (and thereby cleared); the
    /// particles carry on with their old coordinates.
    pub fn resize(&mut self, w: u32, h: u32) {
        log::debug!("viewport resized to {}x{}", w, h);
        self.surface.resize(w, h);
        self.field.resize(w, h);
    }
}

impl<S, R> Animator<S, R> {
    pub fn stop(&self) {
        if !self.token.is_cancelled() {
            log::debug!("animator stopped");
        }
        self.token.cancel();
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn field(&self) -> &Field<R> { &self.field }
    pub fn surface(&self) -> &S { &self.surface }
}
