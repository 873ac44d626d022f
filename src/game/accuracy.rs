/// Match-wide accuracy sample collector.
///
/// Every terminal judgment on every track appends one sample in judgment
/// order; the order never affects the result since the list is only
/// averaged. Samples are clamped to `[0, 1]` on the way in.
#[derive(Debug, Default, Clone)]
pub struct AccuracyAggregator {
    samples: Vec<f32>,
}

impl AccuracyAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, value: f32) {
        self.samples.push(value.clamp(0.0, 1.0));
    }

    /// Arithmetic mean of all samples, `0.0` when none were recorded.
    pub fn average(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f32>() / self.samples.len() as f32
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::AccuracyAggregator;

    #[test]
    fn empty_average_is_zero() {
        assert_eq!(AccuracyAggregator::new().average(), 0.0);
    }

    #[test]
    fn average_is_the_arithmetic_mean() {
        let mut agg = AccuracyAggregator::new();
        agg.record(1.0);
        agg.record(0.5);
        agg.record(0.0);
        assert!((agg.average() - 0.5).abs() < 1e-6);
        assert_eq!(agg.len(), 3);
    }

    #[test]
    fn samples_are_clamped_to_unit_range() {
        let mut agg = AccuracyAggregator::new();
        agg.record(-0.25);
        agg.record(1.75);
        assert_eq!(agg.samples(), &[0.0, 1.0]);
        assert!(agg.average() >= 0.0 && agg.average() <= 1.0);
    }

    #[test]
    fn clear_resets_for_a_new_match() {
        let mut agg = AccuracyAggregator::new();
        agg.record(0.9);
        agg.clear();
        assert!(agg.is_empty());
        assert_eq!(agg.average(), 0.0);
    }
}
