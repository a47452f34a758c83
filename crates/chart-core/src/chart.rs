// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (PNG / RGBA) using Skia CPU raster surfaces.

use skia_safe as skia;

use crate::error::{RenderError, Result};
use crate::grid::{format_tick, nice_step, nice_ticks};
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, PlotRect, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::Axis;

const X_TICK_TARGET: usize = 8;
const Y_TICK_TARGET: usize = 6;
const TITLE_SIZE: f32 = 18.0;
const LABEL_SIZE: f32 = 14.0;
const TICK_SIZE: f32 = 12.0;
const LEGEND_SIZE: f32 = 13.0;
const TICK_LEN: f32 = 5.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (title, axis labels, tick labels, legend text). Off for pixel snapshots.
    pub draw_labels: bool,
    /// Device pixels per logical pixel. `width`/`height` are device pixels; insets,
    /// fonts and strokes are laid out in logical pixels and scaled up.
    pub scale: f32,
}

impl RenderOptions {
    /// Effective scale factor; anything non-positive or non-finite counts as 1.
    pub fn scale_factor(&self) -> f32 {
        if self.scale.is_finite() && self.scale > 0.0 { self.scale } else { 1.0 }
    }

    /// Canvas size in logical pixels, the space the layout is computed in.
    pub fn logical_size(&self) -> (i32, i32) {
        let k = self.scale_factor();
        ((self.width as f32 / k).round() as i32, (self.height as f32 / k).round() as i32)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            scale: 1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub show_grid: bool,
    pub show_legend: bool,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            show_grid: true,
            show_legend: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axis ranges to the data, padded by `margin` (fraction of span).
    /// Labels are kept; empty charts get a unit frame.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Render the chart and return the encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to unpremultiplied RGBA8. Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let (logical_w, logical_h) = opts.logical_size();
        let rect = PlotRect::within(logical_w, logical_h, &opts.insets).ok_or(
            RenderError::InvalidSize { width: opts.width, height: opts.height },
        )?;

        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface)?;
        let canvas = surface.canvas();
        let theme = &opts.theme;
        let map = PlotMap { rect, x: &self.x_axis, y: &self.y_axis };

        canvas.clear(theme.background);
        canvas.scale((opts.scale_factor(), opts.scale_factor()));

        let x_ticks = nice_ticks(self.x_axis.min, self.x_axis.max, X_TICK_TARGET);
        let y_ticks = nice_ticks(self.y_axis.min, self.y_axis.max, Y_TICK_TARGET);

        if self.show_grid {
            draw_grid(canvas, &map, &x_ticks, &y_ticks, theme);
        }
        for s in &self.series {
            draw_line_series(canvas, &map, s, theme.line_stroke);
        }
        draw_axes(canvas, &map, &x_ticks, &y_ticks, theme);

        let shaper = opts.draw_labels.then(TextShaper::new);
        if let Some(shaper) = &shaper {
            draw_tick_labels(canvas, shaper, &map, &x_ticks, &y_ticks, theme);
            draw_titles(canvas, shaper, &map, &self.title, theme);
        }
        if self.show_legend {
            draw_legend(canvas, shaper.as_ref(), &rect, &self.series, theme);
        }

        Ok(surface)
    }
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

// ---- helpers ----------------------------------------------------------------

/// Data-to-pixel mapping for one plot rectangle.
struct PlotMap<'a> {
    rect: PlotRect,
    x: &'a Axis,
    y: &'a Axis,
}

impl PlotMap<'_> {
    fn sx(&self, x: f64) -> f32 {
        self.rect.left as f32 + ((x - self.x.min) / self.x.span()) as f32 * self.rect.width() as f32
    }
    fn sy(&self, y: f64) -> f32 {
        self.rect.bottom as f32 - ((y - self.y.min) / self.y.span()) as f32 * self.rect.height() as f32
    }
    fn ltrb(&self) -> (f32, f32, f32, f32) {
        (self.rect.left as f32, self.rect.top as f32, self.rect.right as f32, self.rect.bottom as f32)
    }
}

fn draw_grid(canvas: &skia::Canvas, map: &PlotMap, x_ticks: &[f64], y_ticks: &[f64], theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = map.ltrb();
    // verticals
    for &x in x_ticks {
        let px = map.sx(x);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    // horizontals
    for &y in y_ticks {
        let py = map.sy(y);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, map: &PlotMap, x_ticks: &[f64], y_ticks: &[f64], theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.0);
    axis_paint.set_style(skia::paint::Style::Stroke);

    let (l, t, r, b) = map.ltrb();
    canvas.draw_rect(skia::Rect::from_ltrb(l, t, r, b), &axis_paint);

    for &x in x_ticks {
        let px = map.sx(x);
        canvas.draw_line((px, b), (px, b + TICK_LEN), &axis_paint);
    }
    for &y in y_ticks {
        let py = map.sy(y);
        canvas.draw_line((l - TICK_LEN, py), (l, py), &axis_paint);
    }
}

fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    map: &PlotMap,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let (l, _, _, b) = map.ltrb();

    let x_step = nice_step(map.x.max - map.x.min, X_TICK_TARGET);
    for &x in x_ticks {
        let text = format_tick(x, x_step);
        shaper.draw_centered(canvas, &text, map.sx(x), b + TICK_LEN + TICK_SIZE + 4.0, TICK_SIZE, theme.tick, true);
    }

    let y_step = nice_step(map.y.max - map.y.min, Y_TICK_TARGET);
    for &y in y_ticks {
        let text = format_tick(y, y_step);
        shaper.draw_right(canvas, &text, l - TICK_LEN - 4.0, map.sy(y) + TICK_SIZE * 0.35, TICK_SIZE, theme.tick, true);
    }
}

fn draw_titles(canvas: &skia::Canvas, shaper: &TextShaper, map: &PlotMap, title: &str, theme: &Theme) {
    let (l, t, r, b) = map.ltrb();
    let cx = (l + r) * 0.5;

    if !title.is_empty() {
        shaper.draw_centered(canvas, title, cx, t - TITLE_SIZE, TITLE_SIZE, theme.title, false);
    }
    if !map.x.label.is_empty() {
        shaper.draw_centered(canvas, &map.x.label, cx, b + TICK_LEN + TICK_SIZE + LABEL_SIZE + 18.0, LABEL_SIZE, theme.axis_label, false);
    }
    if !map.y.label.is_empty() {
        // left edge of the surface, clear of the tick labels
        shaper.draw_vertical_centered(canvas, &map.y.label, LABEL_SIZE + 2.0, (t + b) * 0.5, LABEL_SIZE, theme.axis_label);
    }
}

fn draw_line_series(canvas: &skia::Canvas, map: &PlotMap, series: &Series, color: skia::Color) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    // Non-finite points break the line instead of being joined across.
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for &(x, y) in data {
        if !(x.is_finite() && y.is_finite()) {
            pen_down = false;
            continue;
        }
        let p = (map.sx(x), map.sy(y));
        if pen_down {
            path.line_to(p);
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(color);

    let (l, t, r, b) = map.ltrb();
    canvas.save();
    canvas.clip_rect(skia::Rect::from_ltrb(l, t, r, b), skia::ClipOp::Intersect, true);
    canvas.draw_path(&path, &stroke);
    canvas.restore();
}

fn draw_legend(
    canvas: &skia::Canvas,
    shaper: Option<&TextShaper>,
    rect: &PlotRect,
    series: &[Series],
    theme: &Theme,
) {
    let labels: Vec<&str> = series.iter().filter_map(|s| s.label.as_deref()).collect();
    if labels.is_empty() {
        return;
    }

    const PAD: f32 = 8.0;
    const SWATCH: f32 = 28.0;
    const ROW: f32 = LEGEND_SIZE + 8.0;

    let text_w = labels
        .iter()
        .map(|label| match shaper {
            Some(s) => s.measure_width(label, LEGEND_SIZE, false),
            None => label.chars().count() as f32 * LEGEND_SIZE * 0.55,
        })
        .fold(0.0f32, f32::max);

    let left = rect.left as f32 + 10.0;
    let top = rect.top as f32 + 10.0;
    let width = PAD + SWATCH + PAD + text_w + PAD;
    let height = PAD + ROW * labels.len() as f32 + PAD - 8.0;
    let frame = skia::Rect::from_xywh(left, top, width, height);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(theme.legend_background);
    canvas.draw_round_rect(frame, 3.0, 3.0, &fill);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.legend_border);
    canvas.draw_round_rect(frame, 3.0, 3.0, &border);

    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    swatch.set_style(skia::paint::Style::Stroke);
    swatch.set_stroke_width(2.0);
    swatch.set_color(theme.line_stroke);

    for (i, label) in labels.iter().enumerate() {
        let mid = top + PAD + ROW * i as f32 + LEGEND_SIZE * 0.5;
        canvas.draw_line((left + PAD, mid), (left + PAD + SWATCH, mid), &swatch);
        if let Some(s) = shaper {
            s.draw_left(canvas, label, left + PAD + SWATCH + PAD, mid + LEGEND_SIZE * 0.35, LEGEND_SIZE, theme.axis_label, false);
        }
    }
}
