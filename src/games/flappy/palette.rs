//! Day/night palette for Sky Run.
//!
//! The sky cycles with the score: every `SCORE_CYCLE` points walks the world
//! from day through twilight into night and back. Everything here is a pure
//! function of the score; nothing persists between frames, so the palette
//! survives restarts and rewinds for free.

use std::f64::consts::PI;

/// Points per full day-night-day cycle.
pub const SCORE_CYCLE: u32 = 100;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend toward `other`; `t` is clamped to [0, 1].
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

// Keyframes: [day, twilight, night].
const SKY: [Rgb; 3] = [
    Rgb::new(102, 179, 255),
    Rgb::new(226, 125, 96),
    Rgb::new(16, 16, 48),
];
const GROUND: [Rgb; 3] = [
    Rgb::new(130, 200, 90),
    Rgb::new(110, 140, 70),
    Rgb::new(30, 50, 30),
];
const PIPE: [Rgb; 3] = [
    Rgb::new(0, 204, 0),
    Rgb::new(0, 150, 40),
    Rgb::new(0, 90, 30),
];
const PIPE_CAP: [Rgb; 3] = [
    Rgb::new(0, 170, 0),
    Rgb::new(0, 120, 30),
    Rgb::new(0, 70, 24),
];

/// Cycle position for a score, eased into [0, 1]: 0 is full day, 1 full
/// night.
///
/// A triangular wave over the score cycle smoothed by a cosine ease, so the
/// phase is periodic with no jump at the wrap.
pub fn night_phase(score: u32) -> f64 {
    let u = (score % SCORE_CYCLE) as f64 / SCORE_CYCLE as f64;
    let tri = 1.0 - (2.0 * u - 1.0).abs();
    (1.0 - (PI * tri).cos()) / 2.0
}

/// Piecewise keyframe blend: day to twilight over the first half of the
/// phase, twilight to night over the second. Continuous at the joint.
fn keyframe(frames: [Rgb; 3], t: f64) -> Rgb {
    if t < 0.5 {
        frames[0].lerp(frames[1], t * 2.0)
    } else {
        frames[1].lerp(frames[2], t * 2.0 - 1.0)
    }
}

/// Linear ramp from 0 at `start` to 1 at `end`, clamped outside.
fn ramp(t: f64, start: f64, end: f64) -> f64 {
    ((t - start) / (end - start)).clamp(0.0, 1.0)
}

/// Colors and celestial opacities for a given score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyPalette {
    pub sky: Rgb,
    pub ground: Rgb,
    pub pipe: Rgb,
    pub pipe_cap: Rgb,
    /// 1.0 in full day, fading out through twilight.
    pub sun_alpha: f64,
    /// 0.0 in day, fading in after dusk.
    pub moon_alpha: f64,
    /// Star opacity, cached so the renderer can skip the star pass by day.
    pub star_alpha: f64,
}

impl SkyPalette {
    pub fn for_score(score: u32) -> SkyPalette {
        let t = night_phase(score);
        SkyPalette {
            sky: keyframe(SKY, t),
            ground: keyframe(GROUND, t),
            pipe: keyframe(PIPE, t),
            pipe_cap: keyframe(PIPE_CAP, t),
            sun_alpha: 1.0 - ramp(t, 0.25, 0.5),
            moon_alpha: ramp(t, 0.55, 0.85),
            star_alpha: ramp(t, 0.5, 0.75),
        }
    }

    /// True when at least one star would be visible.
    pub fn any_stars(&self) -> bool {
        self.star_alpha > 0.0
    }
}

/// Deterministic sparse star field: a fixed-multiplier hash of the cell
/// coordinate, so stars hold still frame to frame without stored state.
pub fn star_at(col: u16, row: u16) -> bool {
    let h = (col as u32)
        .wrapping_mul(7541)
        .wrapping_add((row as u32).wrapping_mul(6151));
    h % 31 == 0
}
