// File: crates/chart-render-skia/src/view.rs
// Chart view: subscribes to a series store, relayouts on change, and keeps the scroll position.
// Auto-scroll follows the newest entry only when a change notification arrived since the
// last relayout; a plain resize keeps the current offset.

use std::cell::RefCell;
use std::rc::Rc;

use chart_core::{ChartLayout, LayoutConfig, SeriesEvent, SeriesStore, Size, SubscriptionId, Viewport};
use tracing::debug;

#[derive(Debug, Default)]
struct Pending {
    dirty: bool,
    anchor: Option<u64>,
}

#[derive(Debug)]
pub struct ChartView {
    config: LayoutConfig,
    pending: Rc<RefCell<Pending>>,
    subscription: Option<SubscriptionId>,
    layout: Option<ChartLayout>,
    container: Size,
    viewport: Viewport,
    auto_scroll: bool,
    scroll_target: Option<u64>,
}

impl ChartView {
    /// Create a view and subscribe it to `store`'s change notifications.
    pub fn attach(store: &mut SeriesStore, config: LayoutConfig) -> Self {
        let pending = Rc::new(RefCell::new(Pending { dirty: true, anchor: None }));
        let sink = Rc::clone(&pending);
        let subscription = store.subscribe(move |event| {
            let mut p = sink.borrow_mut();
            p.dirty = true;
            p.anchor = match *event {
                SeriesEvent::Appended { sequence_id, .. } => Some(sequence_id),
                SeriesEvent::Replaced { len } => (len > 0).then_some(len as u64),
            };
        });
        Self {
            config,
            pending,
            subscription: Some(subscription),
            layout: None,
            container: Size::default(),
            viewport: Viewport::default(),
            auto_scroll: true,
            scroll_target: None,
        }
    }

    /// Stop listening to `store`. The last layout stays available.
    pub fn detach(&mut self, store: &mut SeriesStore) {
        if let Some(id) = self.subscription.take() {
            store.unsubscribe(id);
        }
    }

    pub fn set_auto_scroll(&mut self, on: bool) {
        self.auto_scroll = on;
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
        self.pending.borrow_mut().dirty = true;
    }

    /// Recompute the layout if the series or the container changed since the last call.
    pub fn relayout(&mut self, store: &SeriesStore, container: Size) -> &ChartLayout {
        let (dirty, anchor) = {
            let mut p = self.pending.borrow_mut();
            let out = (p.dirty, p.anchor.take());
            p.dirty = false;
            out
        };
        let resized = container != self.container;
        let layout = match self.layout.take() {
            Some(layout) if !dirty && !resized => layout,
            _ => ChartLayout::compute(store.series(), container, &self.config),
        };

        self.container = container;
        self.viewport.set_viewport_width(container.width);
        self.viewport.set_content_width(layout.content_size.width);
        if let (true, Some(anchor)) = (self.auto_scroll, anchor) {
            self.viewport.scroll_to_end();
            self.scroll_target = Some(anchor);
            debug!(anchor, offset = self.viewport.offset(), "auto-scrolled to newest entry");
        }
        self.layout.insert(layout)
    }

    pub fn layout(&self) -> Option<&ChartLayout> {
        self.layout.as_ref()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Manual drag; positive `dx` reveals earlier columns.
    pub fn scroll_by(&mut self, dx: f64) {
        self.viewport.scroll_by(dx);
    }

    /// Sequence id of the entry the view last auto-scrolled to.
    pub fn scroll_target(&self) -> Option<u64> {
        self.scroll_target
    }

    /// Column under a viewport x coordinate (e.g. a tap position).
    pub fn column_at(&self, viewport_x: f64) -> Option<usize> {
        self.layout.as_ref()?.column_at(viewport_x + self.viewport.offset())
    }
}
