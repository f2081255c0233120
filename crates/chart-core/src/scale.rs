// File: crates/chart-core/src/scale.rs
// Summary: Column (X) and value (Y) scales, data bounds, and reference line placement.

use crate::series::Series;

/// Column index as a logical x coordinate.
pub type Logical = usize;
/// Measured value on the y axis.
pub type Value = f64;

/// Min/max of the present `Measure` values, recomputed on every call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub min: Value,
    pub max: Value,
}

impl Bounds {
    pub const fn new(min: Value, max: Value) -> Self {
        Self { min, max }
    }

    /// All values equal (or no values at all): the y mapping has no span.
    #[inline]
    pub fn is_flat(&self) -> bool {
        self.max == self.min
    }

    #[inline]
    pub fn span(&self) -> Value {
        self.max - self.min
    }
}

/// Bounds of the series' present `Measure` values; `(0, 0)` when there are none.
pub fn compute_bounds(series: &Series) -> Bounds {
    bounds_of(series.measures().into_iter().flatten())
}

pub fn bounds_of<I: IntoIterator<Item = Value>>(values: I) -> Bounds {
    let mut it = values.into_iter().filter(|v| v.is_finite());
    let Some(first) = it.next() else { return Bounds::default() };
    let (min, max) = it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    Bounds { min, max }
}

/// Horizontal column scale: each index owns one `step`-wide column, points sit at its centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepScale {
    pub step: f64,
}

impl StepScale {
    pub fn new(step: f64) -> Self {
        Self { step }
    }

    #[inline]
    pub fn to_px(&self, index: Logical) -> f64 {
        self.step * index as f64 + self.step / 2.0
    }

    /// Column under a content x coordinate, if any.
    pub fn index_at(&self, px: f64, count: usize) -> Option<Logical> {
        if !(px >= 0.0) || self.step <= 0.0 {
            return None;
        }
        let i = (px / self.step).floor() as usize;
        (i < count).then_some(i)
    }

    /// Total width of `count` columns.
    #[inline]
    pub fn extent(&self, count: usize) -> f64 {
        count as f64 * self.step
    }
}

/// Vertical value scale mapping `[min, max]` onto `[height, 0]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub bounds: Bounds,
    pub height: f64,
}

impl ValueScale {
    pub fn new(bounds: Bounds, height: f64) -> Self {
        Self { bounds, height }
    }

    /// Pixel y for `value`. A flat range, or one whose span overflows `f64`,
    /// places every value on the midline.
    #[inline]
    pub fn to_px(&self, value: Value) -> f64 {
        let Bounds { min, max } = self.bounds;
        if self.bounds.is_flat() || !self.bounds.span().is_finite() {
            return self.height / 2.0;
        }
        let h = self.height;
        h - (h / (max - min)) * (max - min - (max - value))
    }

    /// Inverse of `to_px`; the flat case maps every y back to `min`.
    pub fn from_px(&self, py: f64) -> Value {
        if self.bounds.is_flat() || !self.bounds.span().is_finite() || self.height == 0.0 {
            return self.bounds.min;
        }
        self.bounds.min + (self.height - py) / self.height * self.bounds.span()
    }
}

/// Y for a horizontal reference line, clamped to the plot area.
///
/// `None` when there is no reference value. At or above `max` the line pins to the
/// top (0), at or below `min` to the bottom (`plot_area_height`).
pub fn reference_line_y(value: Option<Value>, bounds: Bounds, plot_area_height: f64) -> Option<f64> {
    let v = value.filter(|v| !v.is_nan())?;
    if v >= bounds.max {
        return Some(0.0);
    }
    if v <= bounds.min {
        return Some(plot_area_height);
    }
    Some(ValueScale::new(bounds, plot_area_height).to_px(v))
}
