// File: crates/chart-core/src/layout.rs
// Summary: Layout engine. Maps a series plus container geometry to drawable coordinates.
// Notes:
// - Everything here is a pure function of its inputs; bounds are recomputed per call.
// - `ChartLayout` is in content coordinates: x spans the full scrollable width,
//   the plot area sits `vertical_padding / 2` below the top edge.

use tracing::{debug, warn};

use crate::config::LayoutConfig;
use crate::geometry::{Circle, Point, Rect, Segment, Size};
use crate::grid::{gridlines, top_border};
use crate::path::{connecting_path_with, marker_geometry, Path};
use crate::scale::{compute_bounds, reference_line_y, Bounds, StepScale, ValueScale};
use crate::series::{MeasureKind, Series};
use crate::types::STEP_WIDTH;

/// Position of each `Measure` entry; `None` at gaps, index-aligned with the labels.
pub fn plot_points(series: &Series, container_height: f64, step_width: f64) -> Vec<Option<Point>> {
    let bounds = compute_bounds(series);
    let xs = StepScale::new(step_width);
    let ys = ValueScale::new(bounds, container_height);
    series
        .measures()
        .into_iter()
        .enumerate()
        .map(|(i, value)| value.map(|v| Point::new(xs.to_px(i), ys.to_px(v))))
        .collect()
}

/// A value label drawn in a column-wide frame below its point.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    /// Top-left corner of the label frame.
    pub origin: Point,
    pub width: f64,
}

impl Label {
    pub fn center_x(&self) -> f64 {
        self.origin.x + self.width / 2.0
    }
}

/// Labels for present points only. `labels` must be index-aligned with `points`.
pub fn label_layout(points: &[Option<Point>], labels: &[String], step_width: f64, label_gap: f64) -> Vec<Label> {
    points
        .iter()
        .zip(labels)
        .filter_map(|(point, text)| {
            point.map(|p| Label {
                text: text.clone(),
                origin: Point::new(p.x - step_width / 2.0, p.y + label_gap),
                width: step_width,
            })
        })
        .collect()
}

/// Horizontal initial/target marker across the content width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceLine {
    pub kind: MeasureKind,
    pub value: f64,
    pub y: f64,
    pub segment: Segment,
}

/// Every drawable produced by one relayout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub step_width: f64,
    pub content_size: Size,
    pub plot_area: Rect,
    pub bounds: Bounds,
    pub points: Vec<Option<Point>>,
    pub path: Path,
    pub markers: Vec<Circle>,
    pub labels: Vec<Label>,
    pub gridlines: Vec<Segment>,
    pub top_border: Segment,
    /// Stroke hints carried through from the config.
    pub line_width: f64,
    pub grid_dash: [f64; 2],
    pub initial_line: Option<ReferenceLine>,
    pub target_line: Option<ReferenceLine>,
    /// `sequence_id` of the newest entry; the auto-scroll sentinel.
    pub newest_anchor: Option<u64>,
}

impl ChartLayout {
    pub fn compute(series: &Series, container: Size, config: &LayoutConfig) -> Self {
        let height = if container.height.is_finite() && container.height > 0.0 {
            container.height
        } else {
            config.default_height
        };
        let mut step = config.step.resolve(container.width);
        if !(step.is_finite() && step > 0.0) {
            warn!(step, "unusable step width, falling back to {}", STEP_WIDTH);
            step = STEP_WIDTH;
        }

        let count = series.measure_count();
        let content_width = StepScale::new(step).extent(count);
        let top = config.vertical_padding / 2.0;
        let plot_h = (height - config.vertical_padding).max(0.0);
        let plot_area = Rect::from_ltwh(0.0, top, content_width, plot_h);

        let bounds = compute_bounds(series);
        let points: Vec<Option<Point>> = plot_points(series, plot_h, step)
            .into_iter()
            .map(|p| p.map(|p| p.offset(0.0, top)))
            .collect();
        let path = connecting_path_with(&points, config.gap_policy);
        let markers = marker_geometry(&points, config.marker_radius);
        let labels = label_layout(&points, &series.measure_labels(), step, config.label_gap);

        let reference = |kind: MeasureKind| {
            let value = series.first_of(kind)?.finite_value()?;
            let y = reference_line_y(Some(value), bounds, plot_h)? + top;
            Some(ReferenceLine {
                kind,
                value,
                y,
                segment: Segment::new(Point::new(0.0, y), Point::new(content_width, y)),
            })
        };

        debug!(count, step, min = bounds.min, max = bounds.max, height, "chart relayout");

        Self {
            step_width: step,
            content_size: Size::new(content_width, height),
            plot_area,
            bounds,
            path,
            markers,
            labels,
            gridlines: gridlines(count, step, height),
            top_border: top_border(content_width),
            line_width: config.line_width,
            grid_dash: config.grid_dash,
            initial_line: reference(MeasureKind::Initial),
            target_line: reference(MeasureKind::Target),
            newest_anchor: series.last().map(|m| m.sequence_id),
            points,
        }
    }

    /// Column index under a content x coordinate.
    pub fn column_at(&self, x: f64) -> Option<usize> {
        StepScale::new(self.step_width).index_at(x, self.points.len())
    }
}
