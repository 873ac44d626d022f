/// Camera shake per combo step, capped so long streaks stop escalating.
pub const SHAKE_INTENSITY_PER_COMBO: f32 = 0.3;
pub const SHAKE_DURATION_PER_COMBO: f32 = 0.5;
pub const SHAKE_INTENSITY_MAX: f32 = 2.0;
pub const SHAKE_DURATION_MAX: f32 = 2.0;

/// Per-track consecutive-hit counter. Reset on any failed judgment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ComboTracker {
    count: u32,
}

impl ComboTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments and returns the new count.
    pub fn increase(&mut self) -> u32 {
        self.count = self.count.saturating_add(1);
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    #[inline(always)]
    pub fn count(&self) -> u32 {
        self.count
    }
}

/// `(intensity, duration)` for the camera shake matching a combo count.
pub fn shake_for_combo(combo: u32) -> (f32, f32) {
    let combo = combo as f32;
    (
        (combo * SHAKE_INTENSITY_PER_COMBO).min(SHAKE_INTENSITY_MAX),
        (combo * SHAKE_DURATION_PER_COMBO).min(SHAKE_DURATION_MAX),
    )
}

#[cfg(test)]
mod tests {
    use super::{ComboTracker, shake_for_combo};

    #[test]
    fn increase_and_reset() {
        let mut combo = ComboTracker::new();
        assert_eq!(combo.increase(), 1);
        assert_eq!(combo.increase(), 2);
        combo.reset();
        assert_eq!(combo.count(), 0);
        assert_eq!(combo.increase(), 1);
    }

    #[test]
    fn shake_scales_then_caps() {
        let (i1, d1) = shake_for_combo(1);
        assert!((i1 - 0.3).abs() < 1e-6);
        assert!((d1 - 0.5).abs() < 1e-6);

        let (i3, d3) = shake_for_combo(3);
        assert!((i3 - 0.9).abs() < 1e-6);
        assert!((d3 - 1.5).abs() < 1e-6);

        let (i100, d100) = shake_for_combo(100);
        assert_eq!(i100, 2.0, "intensity caps at 2.0");
        assert_eq!(d100, 2.0, "duration caps at 2.0");
    }
}
