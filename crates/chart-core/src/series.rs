// File: crates/chart-core/src/series.rs
// Summary: Measurement model and the ordered series the chart plots.
// Notes:
// - Only `Measure` entries are plotted; `Initial`/`Target` entries feed the
//   reference lines and never occupy a column.
// - A missing value is a gap: no point, but the column is still reserved.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureKind {
    #[default]
    Measure,
    Initial,
    Target,
}

/// Display metadata attached to a measurement. Not used by the layout math.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    pub time: String,
    pub date: String,
}

impl Timestamp {
    pub fn new(time: impl Into<String>, date: impl Into<String>) -> Self {
        Self { time: time.into(), date: date.into() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub value: Option<f64>,
    #[serde(default)]
    pub kind: MeasureKind,
    /// Assigned by the store; ignored on input.
    #[serde(default)]
    pub sequence_id: u64,
    #[serde(default)]
    pub timestamp: Timestamp,
}

impl Measurement {
    pub fn measure(value: Option<f64>) -> Self {
        Self { value, ..Self::default() }
    }

    pub fn initial(value: Option<f64>) -> Self {
        Self { value, kind: MeasureKind::Initial, ..Self::default() }
    }

    pub fn target(value: Option<f64>) -> Self {
        Self { value, kind: MeasureKind::Target, ..Self::default() }
    }

    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// The value if present and finite. NaN and infinities count as missing.
    #[inline]
    pub fn finite_value(&self) -> Option<f64> {
        self.value.filter(|v| v.is_finite())
    }

    #[inline]
    pub fn is_measure(&self) -> bool {
        self.kind == MeasureKind::Measure
    }
}

/// Ordered measurements; insertion order is display order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    items: Vec<Measurement>,
}

impl Series {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a series from plain optional values, all `Measure` kind.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let mut s = Self { items: values.into_iter().map(Measurement::measure).collect() };
        s.renumber();
        s
    }

    pub fn from_measurements(items: Vec<Measurement>) -> Self {
        let mut s = Self { items };
        s.renumber();
        s
    }

    /// Reassign `sequence_id` as 1-based position.
    pub(crate) fn renumber(&mut self) {
        for (i, m) in self.items.iter_mut().enumerate() {
            m.sequence_id = i as u64 + 1;
        }
    }

    pub(crate) fn push(&mut self, m: Measurement) {
        self.items.push(m);
    }

    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, Measurement> { self.items.iter() }
    pub fn as_slice(&self) -> &[Measurement] { &self.items }
    pub fn last(&self) -> Option<&Measurement> { self.items.last() }

    /// Values of the `Measure` entries, gaps kept at their position.
    pub fn measures(&self) -> Vec<Option<f64>> {
        self.items.iter().filter(|m| m.is_measure()).map(Measurement::finite_value).collect()
    }

    /// Number of plotted columns.
    pub fn measure_count(&self) -> usize {
        self.items.iter().filter(|m| m.is_measure()).count()
    }

    /// One-decimal label per `Measure` entry; a gap reads "0.0".
    pub fn measure_labels(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|m| m.is_measure())
            .map(|m| format_label(m.finite_value()))
            .collect()
    }

    /// First entry of the given kind.
    pub fn first_of(&self, kind: MeasureKind) -> Option<&Measurement> {
        self.items.iter().find(|m| m.kind == kind)
    }

    pub fn initial(&self) -> Option<&Measurement> { self.first_of(MeasureKind::Initial) }
    pub fn target(&self) -> Option<&Measurement> { self.first_of(MeasureKind::Target) }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Measurement;
    type IntoIter = std::slice::Iter<'a, Measurement>;
    fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}

pub fn format_label(value: Option<f64>) -> String {
    format!("{:.1}", value.unwrap_or(0.0))
}
