/// Maps values onto a pixel extent for bar and line charts.
///
/// The domain always includes zero so bars grow from a common baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub min: f64,
    pub max: f64,
}

impl LinearScale {
    pub fn fit<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let (min, max) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if min == max {
            // all zero (or empty): keep a unit domain so nothing divides by zero
            return Self { min: 0.0, max: 1.0 };
        }
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Distance of `value` from the bottom of an `extent` tall plot area.
    pub fn position(&self, value: f64, extent: f64) -> f64 {
        (value - self.min) / self.span() * extent
    }

    /// `count + 1` evenly spaced tick values from `min` to `max`.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let count = count.max(1);
        let step = self.span() / count as f64;
        (0..=count).map(|i| self.min + step * i as f64).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_includes_zero() {
        let scale = LinearScale::fit([10.0, 40.0]);
        assert_eq!(scale, LinearScale { min: 0.0, max: 40.0 });
        assert_eq!(scale.position(10.0, 200.0), 50.0);

        let scale = LinearScale::fit([-5.0, 5.0]);
        assert_eq!(scale.position(0.0, 100.0), 50.0);
    }

    #[test]
    fn empty_series_gets_unit_domain() {
        let scale = LinearScale::fit(std::iter::empty());
        assert_eq!(scale.span(), 1.0);
        assert_eq!(scale.ticks(2), vec![0.0, 0.5, 1.0]);
    }
}
