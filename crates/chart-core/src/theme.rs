// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    pub tick: skia::Color,
    pub line_stroke: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 222, 222, 226),
            axis_line: skia::Color::from_argb(255, 40, 40, 48),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            title: skia::Color::from_argb(255, 10, 10, 20),
            tick: skia::Color::from_argb(255, 70, 70, 80),
            line_stroke: skia::Color::from_argb(255, 31, 119, 180),
            legend_background: skia::Color::from_argb(230, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            title: skia::Color::from_argb(255, 245, 245, 250),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            legend_background: skia::Color::from_argb(220, 28, 28, 32),
            legend_border: skia::Color::from_argb(255, 70, 70, 78),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
