// File: crates/chart-core/src/store.rs
// Summary: Observable owner of the series. Append/replace mutate it and notify subscribers synchronously.

use tracing::trace;

use crate::series::{Measurement, Series};

/// Change notification delivered to subscribers after each mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesEvent {
    Appended { sequence_id: u64, len: usize },
    Replaced { len: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&SeriesEvent)>;

#[derive(Default)]
pub struct SeriesStore {
    series: Series,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded store; sequence ids are renumbered from 1.
    pub fn with_series(mut series: Series) -> Self {
        series.renumber();
        Self { series, ..Self::default() }
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn newest(&self) -> Option<&Measurement> {
        self.series.last()
    }

    /// Push to the end and return the assigned `sequence_id` (`len + 1`).
    pub fn append(&mut self, mut measurement: Measurement) -> u64 {
        let sequence_id = self.series.len() as u64 + 1;
        measurement.sequence_id = sequence_id;
        self.series.push(measurement);
        let event = SeriesEvent::Appended { sequence_id, len: self.series.len() };
        trace!(sequence_id, "measurement appended");
        self.notify(&event);
        sequence_id
    }

    /// Swap in a whole new series.
    pub fn replace(&mut self, mut series: Series) {
        series.renumber();
        self.series = series;
        let event = SeriesEvent::Replaced { len: self.series.len() };
        trace!(len = self.series.len(), "series replaced");
        self.notify(&event);
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&SeriesEvent) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self, event: &SeriesEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }
}

impl std::fmt::Debug for SeriesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeriesStore")
            .field("len", &self.series.len())
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}
