use super::Rgb;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// ColorBrewer Spectral, low to high
const SPECTRAL: [Rgb; 11] = [
    Rgb::new(0x9e, 0x01, 0x42),
    Rgb::new(0xd5, 0x3e, 0x4f),
    Rgb::new(0xf4, 0x6d, 0x43),
    Rgb::new(0xfd, 0xae, 0x61),
    Rgb::new(0xfe, 0xe0, 0x8b),
    Rgb::new(0xff, 0xff, 0xbf),
    Rgb::new(0xe6, 0xf5, 0x98),
    Rgb::new(0xab, 0xdd, 0xa4),
    Rgb::new(0x66, 0xc2, 0xa5),
    Rgb::new(0x32, 0x88, 0xbd),
    Rgb::new(0x5e, 0x4f, 0xa2),
];

/// viridis at eleven evenly spaced positions
const VIRIDIS: [Rgb; 11] = [
    Rgb::new(0x44, 0x01, 0x54),
    Rgb::new(0x48, 0x24, 0x75),
    Rgb::new(0x41, 0x44, 0x87),
    Rgb::new(0x35, 0x5f, 0x8d),
    Rgb::new(0x2a, 0x78, 0x8e),
    Rgb::new(0x21, 0x91, 0x8c),
    Rgb::new(0x22, 0xa8, 0x84),
    Rgb::new(0x44, 0xbf, 0x70),
    Rgb::new(0x7a, 0xd1, 0x51),
    Rgb::new(0xbd, 0xdf, 0x26),
    Rgb::new(0xfd, 0xe7, 0x25),
];

/// a continuous color ramp built from evenly spaced anchors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    /// red for short adjustments through yellow to purple for long ones
    #[default]
    Spectral,
    Viridis,
}

impl Palette {
    fn anchors(&self) -> &'static [Rgb] {
        match self {
            Palette::Spectral => &SPECTRAL,
            Palette::Viridis => &VIRIDIS,
        }
    }

    /// color at position `t` along the ramp, `t` clamped to [0, 1]. NaN
    /// samples the start of the ramp.
    pub fn sample(&self, t: f64) -> Rgb {
        let anchors = self.anchors();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let segments = (anchors.len() - 1) as f64;
        let position = t * segments;
        let lower = (position.floor() as usize).min(anchors.len() - 2);
        anchors[lower].lerp(&anchors[lower + 1], position - lower as f64)
    }
}

impl Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Palette::Spectral => write!(f, "spectral"),
            Palette::Viridis => write!(f, "viridis"),
        }
    }
}
