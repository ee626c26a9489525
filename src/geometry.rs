//! Pure wheel geometry: wedge bounds, landing angles, label placement.
//!
//! Convention: angle 0 degrees is the fixed pointer axis, angles increase
//! counter-clockwise, and all rotations are in degrees. Pool size is a
//! `NonZeroUsize`, so every function here is total over its domain; the
//! zero-attendee wheel is a distinct rendering path that never reaches
//! per-wedge geometry.

use std::num::NonZeroUsize;

/// Angular width of one wedge.
pub fn slice_degrees(pool_size: NonZeroUsize) -> f64 {
    360.0 / pool_size.get() as f64
}

/// Maps an angle into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Angular bounds `(start, end)` of wedge `index` on a wheel rotated by
/// `base_rotation`. `end - start` is exactly one slice; bounds are not
/// normalized so callers can reason about contiguity.
pub fn wedge_bounds(pool_size: NonZeroUsize, index: usize, base_rotation: f64) -> (f64, f64) {
    debug_assert!(index < pool_size.get());
    let slice = slice_degrees(pool_size);
    let start = index as f64 * slice + base_rotation;
    (start, start + slice)
}

/// Angular midpoint of wedge `index` on a wheel rotated by `base_rotation`.
pub fn wedge_midpoint(pool_size: NonZeroUsize, index: usize, base_rotation: f64) -> f64 {
    let (start, end) = wedge_bounds(pool_size, index, base_rotation);
    (start + end) / 2.0
}

/// Cumulative rotation that lands wedge `index` under the pointer.
///
/// The returned target satisfies two guarantees: its value modulo 360 places
/// the wedge midpoint exactly on the pointer axis regardless of
/// `current_rotation`, and it never lies behind `current_rotation`, so the
/// wheel always spins forward. At least `min_full_turns` complete revolutions
/// are added for visual effect.
pub fn target_rotation_for_index(
    pool_size: NonZeroUsize,
    index: usize,
    current_rotation: f64,
    min_full_turns: u32,
) -> f64 {
    debug_assert!(index < pool_size.get());
    let midpoint = wedge_midpoint(pool_size, index, 0.0);
    let alignment = normalize_degrees(360.0 - midpoint - current_rotation);
    current_rotation + f64::from(min_full_turns) * 360.0 + alignment
}

/// Inverse of the landing computation: which wedge sits under the pointer
/// when the wheel rests at `rotation`.
pub fn wedge_at_pointer(pool_size: NonZeroUsize, rotation: f64) -> usize {
    let local = normalize_degrees(-rotation);
    let index = (local / slice_degrees(pool_size)) as usize;
    index.min(pool_size.get() - 1)
}

/// Discrete label size, stepped down as the wheel gets crowded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum FontTier {
    Large,
    Medium,
    Small,
}

impl FontTier {
    pub fn for_pool_size(pool_size: NonZeroUsize) -> Self {
        match pool_size.get() {
            0..=15 => Self::Large,
            16..=30 => Self::Medium,
            _ => Self::Small,
        }
    }
}

/// Placement hint for one wedge label, consumed by the presentation adapter.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct LabelLayout {
    /// Normalized angle of the label anchor (wedge midpoint), degrees.
    pub anchor_deg: f64,
    /// Text baseline rotation, corrected so labels read left-to-right on the
    /// left half of the wheel instead of upside down.
    pub text_rotation_deg: f64,
    pub font: FontTier,
}

pub fn label_layout(pool_size: NonZeroUsize, index: usize, base_rotation: f64) -> LabelLayout {
    let anchor = normalize_degrees(wedge_midpoint(pool_size, index, base_rotation));
    let text_rotation = if anchor > 90.0 && anchor < 270.0 {
        normalize_degrees(anchor + 180.0)
    } else {
        anchor
    };
    LabelLayout {
        anchor_deg: anchor,
        text_rotation_deg: text_rotation,
        font: FontTier::for_pool_size(pool_size),
    }
}
