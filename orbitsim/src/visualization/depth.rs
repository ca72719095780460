//! Depth cue for flat displays
//!
//! Maps a body's z coordinate to a value in [0, 1] with a logistic curve and
//! from there to a colour: near-side bodies drift toward yellow, far-side
//! bodies toward blue. Display policy only, physics never reads it.

/// Logistic squash of `z`, `stretch` controls how quickly it saturates
pub fn depth_hint(z: f64, stretch: f64) -> f64 {
    1.0 / (1.0 + (-stretch * z).exp())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl DepthColor {
    pub fn from_depth(z: f64, stretch: f64) -> Self {
        let s = depth_hint(z, stretch);
        Self { r: s, g: s, b: 1.0 - s }
    }

    /// 8-bit channels, e.g. for a terminal or image surface
    pub fn to_rgb8(self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}
