//! Linear value scale with round tick steps.

/// Maps data values onto `0.0..=1.0` of an axis length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub min: f64,
    pub max: f64,
}

/// Fraction of the data range added above and below the data.
const MARGIN: f64 = 0.05;

impl LinearScale {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Fit the values with a small margin on both sides. A flat or empty
    /// series still gets a non-zero range.
    #[must_use]
    pub fn fit(values: impl IntoIterator<Item = f64>) -> Self {
        let (lo, hi) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if lo > hi {
            return Self::new(0.0, 1.0);
        }
        let range = hi - lo;
        if range == 0.0 {
            let pad = (lo.abs() * MARGIN).max(0.5);
            return Self::new(lo - pad, hi + pad);
        }
        Self::new(range.mul_add(-MARGIN, lo), range.mul_add(MARGIN, hi))
    }

    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `value` as a fraction of the axis.
    #[must_use]
    pub fn fraction(&self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }

    /// Round step so that roughly `target` ticks cover the range.
    #[must_use]
    pub fn tick_step(&self, target: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let raw = self.span() / target.max(1) as f64;
        let magnitude = 10f64.powf(raw.log10().floor());
        let normalized = raw / magnitude;
        let nice = if normalized <= 1.0 {
            1.0
        } else if normalized <= 2.0 {
            2.0
        } else if normalized <= 5.0 {
            5.0
        } else {
            10.0
        };
        nice * magnitude
    }

    /// Tick values inside the scale, each a multiple of the step.
    #[must_use]
    pub fn ticks(&self, target: usize) -> (f64, Vec<f64>) {
        let step = self.tick_step(target);
        let mut ticks = Vec::new();
        let mut value = (self.min / step).ceil() * step;
        while value <= self.max + step * 1e-9 {
            // Snap away float noise such as 0.30000000000000004.
            let snapped = (value / step).round() * step;
            ticks.push(if snapped == 0.0 { 0.0 } else { snapped });
            value += step;
        }
        (step, ticks)
    }
}

#[cfg(test)]
#[path = "scale_tests.rs"]
mod tests;
