// raster.rs - Software RGBA surface
//
// Straight (non-premultiplied) RGBA8, row-major, transparent when cleared.
// Circles are hard-edged: a pixel is covered when its centre lies inside
// the radius. Anything outside the buffer is clipped.

use crate::render::Surface;
use crate::sim::Rgb;

#[derive(Debug, Clone)]
pub struct Raster {
    w: u32,
    h: u32,
    px: Vec<u8>,
}

impl Raster {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h, px: vec![0; (w as usize) * (h as usize) * 4] }
    }

    pub fn width(&self) -> u32 { self.w }
    pub fn height(&self) -> u32 { self.h }
    pub fn as_raw(&self) -> &[u8] { &self.px }
    pub fn into_raw(self) -> Vec<u8> { self.px }

    /// RGBA at (x, y), or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.w || y >= self.h { return None; }
        let i = self.index(x, y);
        Some([self.px[i], self.px[i + 1], self.px[i + 2], self.px[i + 3]])
    }

    /// Number of pixels with any coverage.
    pub fn painted(&self) -> usize {
        self.px.chunks_exact(4).filter(|p| p[3] != 0).count()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.w as usize) + x as usize) * 4
    }

    // Source-over onto straight alpha
    fn blend(&mut self, x: u32, y: u32, c: Rgb, a: f32) {
        let i = self.index(x, y);
        let da = self.px[i + 3] as f32 / 255.0;
        let out_a = a + da * (1.0 - a);
        if out_a <= 0.0 { return; }

        let mix = |s: u8, d: u8| {
            let v = (s as f32 * a + d as f32 * da * (1.0 - a)) / out_a;
            v.round().clamp(0.0, 255.0) as u8
        };
        self.px[i] = mix(c.r, self.px[i]);
        self.px[i + 1] = mix(c.g, self.px[i + 1]);
        self.px[i + 2] = mix(c.b, self.px[i + 2]);
        self.px[i + 3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}

impl Surface for Raster {
    fn resize(&mut self, w: u32, h: u32) {
        *self = Self::new(w, h);
    }

    fn clear(&mut self) {
        self.px.fill(0);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb, alpha: f64) {
        let a = alpha.clamp(0.0, 1.0) as f32;
        if radius <= 0.0 || a == 0.0 { return; }

        // Bounding box clipped to the buffer; saturating casts absorb
        // far off-screen coordinates.
        let x0 = ((x - radius).floor().max(0.0)) as u32;
        let y0 = ((y - radius).floor().max(0.0)) as u32;
        let x1 = ((x + radius).ceil().min(self.w as f64)).max(0.0) as u32;
        let y1 = ((y + radius).ceil().min(self.h as f64)).max(0.0) as u32;
        let r2 = radius * radius;

        for py in y0..y1 {
            let dy = py as f64 + 0.5 - y;
            for px in x0..x1 {
                let dx = px as f64 + 0.5 - x;
                if dx * dx + dy * dy <= r2 {
                    self.blend(px, py, color, a);
                }
            }
        }
    }
}
