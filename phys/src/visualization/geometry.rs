//! Renderer-side math on simulation coordinates
//!
//! Everything here works in screen-style coordinates (origin top-left,
//! `y` down); [`to_world`] maps into Bevy's centered, `y`-up world.

use std::f64::consts::PI;

use crate::simulation::states::NVec2;

/// Arrow length multiplier applied on top of the configured base length
pub const ARROW_SCALE: f64 = 1.25;

/// Heading of `v` as `atan2(v.y, v.x)`, or `last` when `v` has no direction
pub fn facing_angle(v: NVec2, last: f64, eps: f64) -> f64 {
    if v.norm() <= eps {
        return last;
    }
    v.y.atan2(v.x)
}

/// Triangle corners at `radius` from `center`, at `angle` and `angle +- 120deg`
pub fn triangle_vertices(center: NVec2, radius: f64, angle: f64) -> [NVec2; 3] {
    let corner = |a: f64| center + radius * NVec2::new(a.cos(), a.sin());
    [
        corner(angle),
        corner(angle + 2.0 * PI / 3.0),
        corner(angle - 2.0 * PI / 3.0),
    ]
}

/// End point of the direction arrow, `None` for a particle at rest
pub fn arrow_tip(center: NVec2, v: NVec2, arrow_length: f64, eps: f64) -> Option<NVec2> {
    let speed = v.norm();
    if speed <= eps {
        return None;
    }
    Some(center + ARROW_SCALE * arrow_length * v / speed)
}

/// Screen coordinates to Bevy world coordinates for a `window`-sized view
pub fn to_world(p: NVec2, window: (u32, u32)) -> (f32, f32) {
    let half_w = window.0 as f64 / 2.0;
    let half_h = window.1 as f64 / 2.0;
    ((p.x - half_w) as f32, (half_h - p.y) as f32)
}
