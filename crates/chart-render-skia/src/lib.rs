// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia renderer crate: draws chart layouts to raster surfaces and hosts the scrolling chart view.

pub mod renderer;
pub mod text;
pub mod theme;
pub mod view;

pub use renderer::{RenderOptions, RgbaFrame, SkiaRenderer};
pub use text::TextShaper;
pub use theme::Theme;
pub use view::ChartView;
