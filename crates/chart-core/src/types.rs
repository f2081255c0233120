// File: crates/chart-core/src/types.rs
// Summary: Shared layout constants (step width, paddings, marker sizes).

/// Default pixel width of one column (distance between adjacent point centres).
pub const STEP_WIDTH: f64 = 40.0;
/// Vertical space reserved around the plot area; half above, half below.
pub const VERTICAL_PADDING: f64 = 60.0;
/// Total chart height used when the container does not report one.
pub const TOTAL_HEIGHT: f64 = 140.0;
/// Gap between a plotted point and the top of its value label.
pub const LABEL_GAP: f64 = 11.0;
/// Radius of the circle drawn at each plotted point.
pub const MARKER_RADIUS: f64 = 5.0;
/// Stroke width of the connecting line and the gridlines.
pub const LINE_WIDTH: f64 = 0.5;
/// On/off intervals of the dashed gridline stroke.
pub const GRID_DASH: [f64; 2] = [2.0, 2.0];
