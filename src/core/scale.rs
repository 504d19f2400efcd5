use serde::{Deserialize, Serialize};

use crate::error::{FilmscopeError, FilmscopeResult};

const SQRT_50: f64 = 7.071_067_811_865_475_5;
const SQRT_10: f64 = 3.162_277_660_168_379_4;
const SQRT_2: f64 = 1.414_213_562_373_095_1;

/// Default tick count used when nice-rounding a domain.
pub const NICE_TICK_COUNT: usize = 8;

/// Linear data-to-pixel mapping for one axis.
///
/// Unlike a plain normalized scale, the pixel range is explicit so the Y
/// axis can run decreasing top to bottom while X runs increasing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> FilmscopeResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() || domain.0 == domain.1 {
            return Err(FilmscopeError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(FilmscopeError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    /// Builds a scale whose domain is the nice-rounded extent of `values`.
    ///
    /// A zero-width extent (single point, all-equal values) is padded before
    /// rounding so the resulting domain always has a usable span.
    pub fn fit(values: impl Iterator<Item = f64>, range: (f64, f64)) -> FilmscopeResult<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values.filter(|value| value.is_finite()) {
            min = min.min(value);
            max = max.max(value);
        }

        if min > max {
            return Err(FilmscopeError::InvalidData(
                "cannot fit a scale to an empty extent".to_owned(),
            ));
        }

        Self::new(nice_extent(min, max, NICE_TICK_COUNT), range)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn domain_to_pixel(self, value: f64) -> FilmscopeResult<f64> {
        if !value.is_finite() {
            return Err(FilmscopeError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn pixel_to_domain(self, pixel: f64) -> FilmscopeResult<f64> {
        if !pixel.is_finite() {
            return Err(FilmscopeError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

/// Expands `[min, max]` outward to the nearest bounds on a 1/2/5×10ⁿ step
/// sequence sized for roughly `tick_count` ticks.
#[must_use]
pub fn nice_extent(min: f64, max: f64, tick_count: usize) -> (f64, f64) {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };

    // Zero-width extents carry no step information of their own.
    let (min, max) = if min == max {
        if min == 0.0 {
            (-1.0, 1.0)
        } else {
            (min - min.abs() * 0.5, max + max.abs() * 0.5)
        }
    } else {
        (min, max)
    };

    let step = tick_step(max - min, tick_count.max(1));
    if step <= 0.0 || !step.is_finite() {
        return (min, max);
    }

    ((min / step).floor() * step, (max / step).ceil() * step)
}

/// Nearest 1/2/5×10ⁿ step for dividing `span` into about `tick_count` ticks.
#[must_use]
pub fn tick_step(span: f64, tick_count: usize) -> f64 {
    if !span.is_finite() || span <= 0.0 {
        return 0.0;
    }

    let raw = span / tick_count as f64;
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;

    let factor = if error >= SQRT_50 {
        10.0
    } else if error >= SQRT_10 {
        5.0
    } else if error >= SQRT_2 {
        2.0
    } else {
        1.0
    };

    factor * base
}
