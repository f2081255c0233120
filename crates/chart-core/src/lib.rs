// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; data model, observable store and the pure layout engine.

pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod path;
pub mod scale;
pub mod series;
pub mod store;
pub mod types;
pub mod viewport;

pub use config::{GapPolicy, LayoutConfig, StepWidth};
pub use error::{ConfigError, Error, Result};
pub use geometry::{Circle, Point, Rect, Segment, Size};
pub use grid::gridlines;
pub use layout::{label_layout, plot_points, ChartLayout, Label, ReferenceLine};
pub use path::{connecting_path, connecting_path_with, marker_geometry, Path, PathCommand};
pub use scale::{compute_bounds, reference_line_y, Bounds, StepScale, ValueScale};
pub use series::{MeasureKind, Measurement, Series, Timestamp};
pub use store::{SeriesEvent, SeriesStore, SubscriptionId};
pub use viewport::Viewport;
