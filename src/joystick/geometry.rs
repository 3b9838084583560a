use glam::Vec2;

/// Clamp `offset` to the disc of the given radius.
///
/// Offsets already inside the disc come back unchanged; longer ones are
/// rescaled to exactly `radius` along the same direction, so diagonal drags
/// never reach further than axis-aligned ones.
#[must_use]
pub fn constrain_to_circle(offset: Vec2, radius: f32) -> Vec2 {
    let distance = offset.length();
    if distance > radius {
        offset * (radius / distance)
    } else {
        offset
    }
}

/// Horizontal deflection as a fraction of the travel radius, in [-1, 1].
///
/// Expects an offset that has already been constrained.
#[must_use]
pub fn horizontal_deflection(constrained: Vec2, radius: f32) -> f32 {
    if radius <= 0.0 {
        return 0.0;
    }
    (constrained.x / radius).clamp(-1.0, 1.0)
}
