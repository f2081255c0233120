// File: crates/chart-render-skia/src/renderer.rs
// Summary: Draws a `ChartLayout` onto a Skia CPU raster surface; RGBA and PNG outputs.

use anyhow::{Context, Result};
use chart_core::{ChartLayout, PathCommand, Segment, Viewport};
use skia_safe as skia;
use tracing::debug;

use crate::text::TextShaper;
use crate::theme::Theme;

/// Default surface width in pixels (a phone-width viewport).
pub const WIDTH: i32 = 390;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 140;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    pub draw_labels: bool,
    pub label_size: f32,
    pub reference_line_width: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            theme: Theme::light(),
            draw_labels: true,
            label_size: 10.0,
            reference_line_width: 2.0,
        }
    }
}

/// Raw RGBA8 frame: pixels, width, height, row stride in bytes.
pub type RgbaFrame = (Vec<u8>, u32, u32, usize);

pub struct SkiaRenderer {
    text: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { text: TextShaper::new() }
    }

    /// Draw the visible slice of `layout` onto `canvas`.
    pub fn draw(&self, canvas: &skia::Canvas, layout: &ChartLayout, viewport: &Viewport, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let left = viewport.offset();
        let right = left + viewport.viewport_width;
        let visible = |x: f64, slack: f64| x + slack >= left && x - slack <= right;

        canvas.save();
        canvas.translate((-(left as f32), 0.0));

        // Border along the top edge
        let mut border = stroke_paint(theme.border, 1.0);
        border.set_anti_alias(false);
        draw_segment(canvas, &layout.top_border, &border);

        // Dashed column lines
        let mut grid = stroke_paint(theme.grid, layout.line_width as f32);
        let dash = [layout.grid_dash[0] as f32, layout.grid_dash[1] as f32];
        grid.set_path_effect(skia::PathEffect::dash(&dash, 0.0));
        for g in layout.gridlines.iter().filter(|g| visible(g.from.x, 1.0)) {
            draw_segment(canvas, g, &grid);
        }

        // Connecting line
        let line = stroke_paint(theme.line_stroke, layout.line_width as f32);
        canvas.draw_path(&to_skia_path(layout), &line);

        // Point markers
        let mut marker = skia::Paint::default();
        marker.set_anti_alias(true);
        marker.set_style(skia::paint::Style::Fill);
        marker.set_color(theme.marker);
        for m in layout.markers.iter().filter(|m| visible(m.center.x, m.radius)) {
            canvas.draw_circle((m.center.x as f32, m.center.y as f32), m.radius as f32, &marker);
        }

        if opts.draw_labels {
            for l in layout.labels.iter().filter(|l| visible(l.center_x(), l.width)) {
                self.text.draw_centered(
                    canvas,
                    &l.text,
                    l.origin.x as f32,
                    l.origin.y as f32,
                    l.width as f32,
                    opts.label_size,
                    theme.label,
                );
            }
        }

        // Reference lines over the content
        let refs = [(layout.initial_line, theme.initial_line), (layout.target_line, theme.target_line)];
        for (line, color) in refs {
            if let Some(r) = line {
                draw_segment(canvas, &r.segment, &stroke_paint(color, opts.reference_line_width));
            }
        }

        canvas.restore();
    }

    /// Render into an RGBA8 buffer (unpremultiplied, row-major).
    pub fn render_to_rgba8(&self, layout: &ChartLayout, viewport: &Viewport, opts: &RenderOptions) -> Result<RgbaFrame> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
        self.draw(surface.canvas(), layout, viewport, opts);

        let (w, h) = (opts.width as u32, opts.height as u32);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back surface pixels failed");
        }
        debug!(width = w, height = h, offset = viewport.offset(), "frame rendered");
        Ok((pixels, w, h, stride))
    }

    /// Render and encode as PNG bytes.
    pub fn render_to_png_bytes(&self, layout: &ChartLayout, viewport: &Viewport, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(layout, viewport, opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels)
            .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {w}x{h}"))?;
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).context("encode PNG failed")?;
        Ok(out.into_inner())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        layout: &ChartLayout,
        viewport: &Viewport,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(layout, viewport, opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_segment(canvas: &skia::Canvas, s: &Segment, paint: &skia::Paint) {
    canvas.draw_line((s.from.x as f32, s.from.y as f32), (s.to.x as f32, s.to.y as f32), paint);
}

fn to_skia_path(layout: &ChartLayout) -> skia::Path {
    let mut path = skia::Path::new();
    for cmd in layout.path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => {
                path.move_to((p.x as f32, p.y as f32));
            }
            PathCommand::LineTo(p) => {
                path.line_to((p.x as f32, p.y as f32));
            }
        }
    }
    path
}
