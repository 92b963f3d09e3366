// sim/ - Ember particle field
//
// Fixed population of falling particles. The population is sized once from
// the viewport width and never changes; particles that fall off the bottom
// are respawned in place.

mod particle;

pub use particle::Particle;

use rand::Rng;

/// One particle per this many horizontal pixels.
pub const PIXELS_PER_PARTICLE: u32 = 20;

/// Where respawned particles reappear, just above the visible top edge.
pub const RESPAWN_Y: f64 = -10.0;

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS form, e.g. `#D42221`.
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Two warm reds/oranges and one yellow.
pub const EMBER_PALETTE: [Rgb; 3] = [
    Rgb::new(0xD4, 0x22, 0x21),
    Rgb::new(0xFD, 0x6B, 0x26),
    Rgb::new(0xFD, 0xD9, 0x2D),
];

/// Population for a viewport of the given width.
pub fn particle_count(viewport_width: u32) -> usize {
    (viewport_width / PIXELS_PER_PARTICLE) as usize
}

/// Particle field simulation
#[derive(Debug)]
pub struct Field<R> {
    w: u32,
    h: u32,
    particles: Vec<Particle>,
    rng: R,
}

impl<R: Rng> Field<R> {
    /// Populate a field for a `w` x `h` viewport.
    pub fn new(w: u32, h: u32, mut rng: R) -> Self {
        let particles = (0..particle_count(w))
            .map(|_| Particle::spawn(&mut rng, w as f64, h as f64))
            .collect();
        Self { w, h, particles, rng }
    }

    /// Advance every particle one frame. Returns how many respawned.
    pub fn step(&mut self) -> usize {
        let (w, h) = (self.w as f64, self.h as f64);
        let mut respawned = 0;
        for p in &mut self.particles {
            if p.advance(&mut self.rng, w, h) {
                respawned += 1;
            }
        }
        respawned
    }
}

impl<R> Field<R> {
    /// Field with a caller-chosen population.
    pub fn with_particles(w: u32, h: u32, particles: Vec<Particle>, rng: R) -> Self {
        Self { w, h, particles, rng }
    }

    /// Track new viewport bounds. Existing particles keep their coordinates,
    /// even ones now outside the smaller area.
    pub fn resize(&mut self, w: u32, h: u32) {
        self.w = w;
        self.h = h;
    }

    pub fn particles(&self) -> &[Particle] { &self.particles }
    pub fn len(&self) -> usize { self.particles.len() }
    pub fn is_empty(&self) -> bool { self.particles.is_empty() }
    pub fn width(&self) -> u32 { self.w }
    pub fn height(&self) -> u32 { self.h }
}
