// File: crates/chart-render-skia/src/theme.rs
// Summary: Light/Dark colour sets for the line chart.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub border: skia::Color,
    pub grid: skia::Color,
    pub line_stroke: skia::Color,
    pub marker: skia::Color,
    pub label: skia::Color,
    pub initial_line: skia::Color,
    pub target_line: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            border: skia::Color::from_argb(255, 142, 142, 147),
            grid: skia::Color::from_argb(255, 142, 142, 147),
            line_stroke: skia::Color::from_argb(128, 255, 59, 48), // red @ 50%
            marker: skia::Color::from_argb(255, 255, 59, 48),
            label: skia::Color::from_argb(255, 20, 20, 30),
            initial_line: skia::Color::from_argb(255, 255, 59, 48),
            target_line: skia::Color::from_argb(255, 0, 122, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            border: skia::Color::from_argb(255, 99, 99, 102),
            grid: skia::Color::from_argb(255, 72, 72, 74),
            line_stroke: skia::Color::from_argb(128, 255, 69, 58),
            marker: skia::Color::from_argb(255, 255, 69, 58),
            label: skia::Color::from_argb(255, 235, 235, 245),
            initial_line: skia::Color::from_argb(255, 255, 69, 58),
            target_line: skia::Color::from_argb(255, 10, 132, 255),
        }
    }

    /// Translucent red backdrop the chart was first prototyped on.
    pub fn prototype() -> Self {
        Self {
            name: "prototype",
            background: skia::Color::from_argb(255, 255, 178, 178),
            ..Self::light()
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::prototype()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
