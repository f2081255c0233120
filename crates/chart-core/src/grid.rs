// File: crates/chart-core/src/grid.rs
// Summary: Vertical gridline layout and the top border.

use crate::geometry::{Point, Segment};
use crate::scale::StepScale;

/// `step_count + 1` vertical segments through the column centres, `0..=height`.
pub fn gridlines(step_count: usize, step_width: f64, height: f64) -> Vec<Segment> {
    let scale = StepScale::new(step_width);
    (0..=step_count)
        .map(|i| {
            let x = scale.to_px(i);
            Segment::new(Point::new(x, 0.0), Point::new(x, height))
        })
        .collect()
}

/// Horizontal line along the top edge of the content.
pub fn top_border(content_width: f64) -> Segment {
    Segment::new(Point::new(0.0, 0.0), Point::new(content_width, 0.0))
}
