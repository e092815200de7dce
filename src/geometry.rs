//! 2D pupil geometry and bounded-speed seek motion.

/// A 2D point in display space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        libm::sqrtf(dx * dx + dy * dy)
    }
}

/// Move `current` one step toward `target` at `speed` units per frame.
///
/// Within one step of the target the position snaps exactly onto it, which
/// terminates the motion without overshoot or oscillation at low speeds.
/// Speed is per-frame, not time-scaled: frame-rate variance changes the
/// perceived speed. That matches the reference behavior and is kept as-is.
pub fn seek(current: Point, target: Point, speed: f32) -> Point {
    let dx = target.x - current.x;
    let dy = target.y - current.y;
    let distance = libm::sqrtf(dx * dx + dy * dy);

    // Snap before normalizing, so a zero delta never divides by zero.
    if distance <= 0.0 || distance < speed {
        return target;
    }

    Point {
        x: current.x + dx / distance * speed,
        y: current.y + dy / distance * speed,
    }
}
