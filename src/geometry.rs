// geometry.rs
// Point helpers shared by the force model, the explosion kick and the line pass.

use ultraviolet::Vec2;

/// Euclidean distance between `a` and `b`.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    let d = b - a;
    (d.x * d.x + d.y * d.y).sqrt()
}

/// Signed direction from `a` to `b` in radians. Coincident points give 0.
pub fn angle(a: Vec2, b: Vec2) -> f32 {
    (b.y - a.y).atan2(b.x - a.x)
}

/// Unit vector pointing along `angle`.
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
