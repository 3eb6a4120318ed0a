//! Template comparison.
//!
//! The score is `1 / (1 + D)` where `D` is the mean Euclidean distance
//! between time-aligned samples over the shorter of the two templates. It
//! lies in `(0, 1]` when both templates hold at least one sample, is `1` for
//! identical templates and falls as the mean distance grows. Comparing
//! against an empty template scores `0`.

use l3gd20::AngularRate;
use micromath::F32Ext;

use crate::template::GestureTemplate;

/// Euclidean distance between two samples in rad/s.
pub fn distance(a: &AngularRate, b: &AngularRate) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Mean per-sample distance over the common prefix, `None` if either
/// template is empty.
pub fn mean_distance(a: &GestureTemplate, b: &GestureTemplate) -> Option<f32> {
    let m = a.len().min(b.len());
    if m == 0 {
        return None;
    }
    let total: f32 = a
        .samples()
        .iter()
        .zip(b.samples())
        .map(|(p, q)| distance(p, q))
        .sum();
    Some(total / m as f32)
}

pub fn similarity(a: &GestureTemplate, b: &GestureTemplate) -> f32 {
    match mean_distance(a, b) {
        Some(d) => 1.0 / (1.0 + d),
        None => 0.0,
    }
}

/// Acceptance is strictly above the threshold.
pub fn is_match(similarity: f32, threshold: f32) -> bool {
    similarity > threshold
}
