use glam::Vec2;

/// Constant-speed pursuit of a target with a dead zone around it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadMotion {
    pub speed: f32,
    pub dead_zone: f32,
}

impl HeadMotion {
    pub fn new(speed: f32, dead_zone: f32) -> Self {
        Self { speed, dead_zone }
    }

    /// Position of the head after one tick.
    ///
    /// Moves exactly `speed` units towards `target` while it is farther than
    /// `dead_zone`; otherwise stays put. The step is not clamped, so a head
    /// within `speed` of the target may pass it and settle on the next ticks.
    pub fn step(&self, head: Vec2, target: Vec2) -> Vec2 {
        let delta = target - head;
        let distance = delta.length();

        if distance <= self.dead_zone {
            return head;
        }

        if distance.is_finite() {
            head + delta * (self.speed / distance)
        } else {
            // Length overflowed f32; rescale before normalizing.
            let direction = (delta / delta.abs().max_element()).normalize_or_zero();
            head + direction * self.speed
        }
    }
}
