// File: crates/chart-core/src/viewport.rs
// Horizontal scroll state: which slice of the content is visible, with pan and scroll-to-end.

use std::ops::Range;

use crate::geometry::clamp;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub content_width: f64,
    pub viewport_width: f64,
    offset: f64,
}

impl Viewport {
    pub fn new(content_width: f64, viewport_width: f64) -> Self {
        Self { content_width, viewport_width, offset: 0.0 }
    }

    /// Left edge of the visible slice, in content pixels.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn max_offset(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    pub fn scroll_to(&mut self, x: f64) {
        self.offset = clamp(x, 0.0, self.max_offset());
    }

    /// Drag by `dx` pixels; dragging right reveals earlier columns.
    pub fn scroll_by(&mut self, dx: f64) {
        self.scroll_to(self.offset - dx);
    }

    /// Bring the right edge of the content into view.
    pub fn scroll_to_end(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn is_at_end(&self) -> bool {
        (self.max_offset() - self.offset).abs() < 1e-9
    }

    /// Update sizes after a relayout or resize; the offset stays within range.
    pub fn set_content_width(&mut self, content_width: f64) {
        self.content_width = content_width;
        self.scroll_to(self.offset);
    }

    pub fn set_viewport_width(&mut self, viewport_width: f64) {
        self.viewport_width = viewport_width;
        self.scroll_to(self.offset);
    }

    /// Columns at least partly visible for a given step width.
    pub fn visible_columns(&self, step: f64, count: usize) -> Range<usize> {
        if step <= 0.0 || count == 0 {
            return 0..0;
        }
        let first = (self.offset / step).floor().max(0.0) as usize;
        let last = ((self.offset + self.viewport_width) / step).ceil().max(0.0) as usize;
        first.min(count)..last.min(count)
    }
}
