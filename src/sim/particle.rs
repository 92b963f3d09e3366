// particle.rs - A single falling ember
//
// Particles are never destroyed. When one drops past the bottom edge it is
// respawned in place with fresh position, speed, size and color.

use rand::Rng;
use rand::distributions::Standard;

use super::{EMBER_PALETTE, RESPAWN_Y, Rgb};

// Distributions: base + unit * span
const SPEED_MIN: f64 = 0.5;
const SPEED_SPAN: f64 = 1.0;
const RADIUS_MIN: f64 = 1.0;
const RADIUS_SPAN: f64 = 2.0;
const OPACITY_MIN: f64 = 0.3;
const OPACITY_SPAN: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    x: f64,
    y: f64,
    speed: f64,  // px per frame, downward
    radius: f64,
    color: Rgb,
    opacity: f64, // fixed for the particle's whole lifetime
}

impl Particle {
    /// Build a particle with explicit state, bypassing the distributions.
    pub fn new(x: f64, y: f64, speed: f64, radius: f64, color: Rgb, opacity: f64) -> Self {
        Self { x, y, speed, radius, color, opacity }
    }

    /// Initial creation. Unlike a respawn, `y` is spread over the whole
    /// height so the first frame already looks like a steady stream.
    pub fn spawn<R: Rng>(rng: &mut R, width: f64, height: f64) -> Self {
        let mut p = Self::new(0.0, RESPAWN_Y, SPEED_MIN, RADIUS_MIN, EMBER_PALETTE[0], OPACITY_MIN);
        p.respawn(rng, width);
        p.y = unit(rng) * height;
        p.opacity = OPACITY_MIN + unit(rng) * OPACITY_SPAN;
        p
    }

    /// Reuse this particle as a new one just above the top edge.
    /// Opacity is deliberately left alone.
    pub fn respawn<R: Rng>(&mut self, rng: &mut R, width: f64) {
        self.x = unit(rng) * width;
        self.y = RESPAWN_Y;
        self.speed = SPEED_MIN + unit(rng) * SPEED_SPAN;
        self.radius = RADIUS_MIN + unit(rng) * RADIUS_SPAN;
        self.color = EMBER_PALETTE[rng.gen_range(0..EMBER_PALETTE.len())];
    }

    /// Fall one frame. Returns true if the particle left the canvas and was
    /// respawned.
    pub fn advance<R: Rng>(&mut self, rng: &mut R, width: f64, height: f64) -> bool {
        self.y += self.speed;
        if self.y > height {
            self.respawn(rng, width);
            return true;
        }
        false
    }

    pub fn x(&self) -> f64 { self.x }
    pub fn y(&self) -> f64 { self.y }
    pub fn speed(&self) -> f64 { self.speed }
    pub fn radius(&self) -> f64 { self.radius }
    pub fn color(&self) -> Rgb { self.color }
    pub fn opacity(&self) -> f64 { self.opacity }
}

// Uniform in [0, 1)
#[inline]
fn unit<R: Rng>(rng: &mut R) -> f64 {
    rng.sample(Standard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    #[test]
    fn spawn_draws_from_expected_ranges() {
        let mut rng = rng();
        for _ in 0..500 {
            let p = Particle::spawn(&mut rng, 800.0, 600.0);
            assert!((0.0..800.0).contains(&p.x()));
            assert!((0.0..600.0).contains(&p.y()));
            assert!((0.5..1.5).contains(&p.speed()));
            assert!((1.0..3.0).contains(&p.radius()));
            assert!((0.3..0.8).contains(&p.opacity()));
            assert!(EMBER_PALETTE.contains(&p.color()));
        }
    }

    #[test]
    fn respawn_keeps_opacity() {
        let mut rng = rng();
        let mut p = Particle::spawn(&mut rng, 800.0, 600.0);
        let opacity = p.opacity();
        p.respawn(&mut rng, 800.0);
        assert_eq!(p.opacity(), opacity);
        assert_eq!(p.y(), RESPAWN_Y);
    }

    #[test]
    fn advance_respawns_only_past_bottom() {
        let mut rng = rng();
        let mut p = Particle::new(10.0, 598.0, 1.0, 2.0, EMBER_PALETTE[1], 0.5);

        assert!(!p.advance(&mut rng, 800.0, 600.0));
        assert!(!p.advance(&mut rng, 800.0, 600.0));
        assert_eq!(p.y(), 600.0);

        assert!(p.advance(&mut rng, 800.0, 600.0));
        assert_eq!(p.y(), RESPAWN_Y);
        assert_eq!(p.opacity(), 0.5);
    }

    #[test]
    fn colors_never_leave_palette() {
        let mut rng = rng();
        let mut p = Particle::spawn(&mut rng, 100.0, 100.0);
        for _ in 0..5_000 {
            p.respawn(&mut rng, 100.0);
            assert!(EMBER_PALETTE.contains(&p.color()));
        }
    }

    #[test]
    fn zero_width_is_not_an_error() {
        let mut rng = rng();
        let mut p = Particle::spawn(&mut rng, 0.0, 0.0);
        assert_eq!(p.x(), 0.0);
        assert!(p.advance(&mut rng, 0.0, 0.0));
    }
}
