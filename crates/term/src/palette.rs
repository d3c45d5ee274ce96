//! Disc colors.
//!
//! Hues are spread evenly around the wheel at low saturation, then mixed with
//! white, which keeps every disc readable on the dark board.

use crate::fb::Rgb;
use crate::types::MAX_DISCS;

const SATURATION: f32 = 0.28;
const VALUE: f32 = 1.0;
const WHITE_MIX: f32 = 0.18;

/// Pastel palette with one color per disc
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; MAX_DISCS as usize],
    len: usize,
}

impl Palette {
    pub fn pastel(n: u8) -> Self {
        let len = (n.max(1)).min(MAX_DISCS) as usize;
        let mut colors = [Rgb::default(); MAX_DISCS as usize];
        for (i, slot) in colors.iter_mut().take(len).enumerate() {
            let h = i as f32 / len as f32;
            let (r, g, b) = hsv_to_rgb(h, SATURATION, VALUE);
            *slot = Rgb::new(soften(r), soften(g), soften(b));
        }
        Self { colors, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Color for a disc of `size` in a tower of `len` discs.
    ///
    /// Colors follow spawn order, so the largest disc takes the first hue.
    pub fn for_size(&self, size: u8) -> Rgb {
        let idx = self.len.saturating_sub(size as usize);
        self.colors[idx.min(self.len.saturating_sub(1))]
    }
}

fn soften(c: f32) -> u8 {
    let mixed = c * (1.0 - WHITE_MIX) + WHITE_MIX;
    (mixed * 255.0).round().clamp(0.0, 255.0) as u8
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h * 6.0) % 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
