// File: crates/bench-plot/src/display.rs
// Summary: Presents a rendered chart in a winit window via softbuffer, or writes a PNG when headless.

use std::cell::RefCell;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use chart_core::{Chart, RenderError, RenderOptions};
use thiserror::Error;
use tracing::{debug, error, info, warn};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

type WindowSurface = softbuffer::Surface<Rc<Window>, Rc<Window>>;

#[derive(Debug, Error)]
pub enum DisplayError {
    /// No display server / window could be created. Callers fall back to a file.
    #[error("no display available: {0}")]
    Unavailable(String),

    #[error("window event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("window surface error: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),

    #[error("failed to render chart")]
    Render(#[from] RenderError),
}

/// Where the chart ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Presented {
    /// Shown in a window that the user has since closed.
    Window,
    /// Written to an image file.
    File(PathBuf),
}

/// Show `chart` in a window and block until it is closed. When no window can be
/// opened, or `headless` is set, write a PNG to `fallback` instead.
pub fn present(
    chart: &Chart,
    opts: &RenderOptions,
    fallback: &Path,
    headless: bool,
) -> Result<Presented, DisplayError> {
    if !headless {
        match show_window(chart, opts) {
            Ok(()) => return Ok(Presented::Window),
            Err(DisplayError::Unavailable(reason)) => {
                warn!(%reason, "cannot open a window; writing the chart to a file instead");
            }
            Err(e) => return Err(e),
        }
    }
    write_image(chart, opts, fallback)?;
    Ok(Presented::File(fallback.to_path_buf()))
}

/// Render `chart` to a PNG at `path`.
pub fn write_image(chart: &Chart, opts: &RenderOptions, path: &Path) -> Result<(), DisplayError> {
    chart.render_to_png(opts, path)?;
    info!(path = %path.display(), "wrote chart image");
    Ok(())
}

/// Open a window sized like `opts` and redraw the chart at the window size until closed.
pub fn show_window(chart: &Chart, opts: &RenderOptions) -> Result<(), DisplayError> {
    let event_loop = EventLoop::new().map_err(|e| DisplayError::Unavailable(e.to_string()))?;
    let window = WindowBuilder::new()
        .with_title(chart.title.clone())
        .with_inner_size(LogicalSize::new(opts.width as f64, opts.height as f64))
        .build(&event_loop)
        .map(Rc::new)
        .map_err(|e| DisplayError::Unavailable(e.to_string()))?;
    let context = softbuffer::Context::new(window.clone())
        .map_err(|e| DisplayError::Unavailable(e.to_string()))?;
    let mut surface = softbuffer::Surface::new(&context, window.clone())
        .map_err(|e| DisplayError::Unavailable(e.to_string()))?;

    info!("chart window open; close it to exit");

    let chart = chart.clone();
    let opts = opts.clone();
    let failure: Rc<RefCell<Option<DisplayError>>> = Rc::new(RefCell::new(None));
    let loop_failure = Rc::clone(&failure);

    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop.run(move |event, elwt| {
        let Event::WindowEvent { window_id, event } = event else { return };
        if window_id != window.id() {
            return;
        }
        match event {
            WindowEvent::CloseRequested => {
                debug!("window close requested");
                elwt.exit();
            }
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => window.request_redraw(),
            WindowEvent::RedrawRequested => {
                if let Err(e) = redraw(&window, &mut surface, &chart, &opts) {
                    error!(error = %e, "failed to draw chart window");
                    *loop_failure.borrow_mut() = Some(e);
                    elwt.exit();
                }
            }
            _ => {}
        }
    })?;

    match failure.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Options for drawing into a window surface of `size` physical pixels. The layout
/// stays in logical pixels, so insets and fonts grow with `scale_factor`.
pub fn window_render_options(
    base: &RenderOptions,
    size: PhysicalSize<u32>,
    scale_factor: f64,
) -> RenderOptions {
    RenderOptions {
        width: i32::try_from(size.width).unwrap_or(i32::MAX),
        height: i32::try_from(size.height).unwrap_or(i32::MAX),
        scale: scale_factor as f32,
        ..base.clone()
    }
}

fn redraw(
    window: &Window,
    surface: &mut WindowSurface,
    chart: &Chart,
    base: &RenderOptions,
) -> Result<(), DisplayError> {
    let size = window.inner_size();
    // minimized
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface.resize(w, h)?;
    let opts = window_render_options(base, size, window.scale_factor());

    let mut frame = surface.buffer_mut()?;
    match chart.render_to_rgba8(&opts) {
        Ok((rgba, _, _, _)) => {
            // softbuffer pixels are 0RGB
            for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
                *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
            }
        }
        // window shrunk below the chart insets
        Err(RenderError::InvalidSize { .. }) => {
            let bg = opts.theme.background;
            frame.fill((bg.r() as u32) << 16 | (bg.g() as u32) << 8 | bg.b() as u32);
        }
        Err(e) => return Err(e.into()),
    }
    frame.present()?;
    Ok(())
}
