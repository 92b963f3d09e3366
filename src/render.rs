// render.rs - Draw the field onto a surface
//
// Every frame is a full repaint: clear, then one filled circle per particle.
// Particles blend only with the background, never with each other's alpha
// state.

use crate::sim::{Field, Rgb};

/// Anything the field can be painted on.
pub trait Surface {
    /// Resize the drawing area. Existing content is discarded.
    fn resize(&mut self, w: u32, h: u32);

    /// Clear the whole drawing area.
    fn clear(&mut self);

    /// Fill a circle. `alpha` applies to this call only.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb, alpha: f64);
}

/// CSS fill strings, built once per distinct color.
#[derive(Debug, Clone, Default)]
pub struct FillStyles {
    entries: Vec<(Rgb, String)>,
}

impl FillStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, color: Rgb) -> &str {
        let i = match self.entries.iter().position(|(c, _)| *c == color) {
            Some(i) => i,
            None => {
                self.entries.push((color, color.hex()));
                self.entries.len() - 1
            }
        };
        &self.entries[i].1
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

/// Full repaint of `field` onto `surface`.
pub fn paint<R, S: Surface + ?Sized>(field: &Field<R>, surface: &mut S) {
    surface.clear();
    for p in field.particles() {
        surface.fill_circle(p.x(), p.y(), p.radius(), p.color(), p.opacity());
    }
}
