// File: crates/benchplot-viewer/src/lib.rs
// Summary: Shows an already-rendered chart frame in a window and blocks until it is closed.

use std::num::NonZeroU32;

use benchplot_core::Frame;
use thiserror::Error;
use tracing::debug;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::EventLoop;
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowBuilder;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("no display available (DISPLAY / WAYLAND_DISPLAY unset)")]
    NoDisplay,
    #[error("frame has no pixels")]
    EmptyFrame,
    #[error("failed to open window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("window surface error: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),
}

/// Open a window showing `frame` and block until the user closes it
/// (close button or Escape).
pub fn show(frame: &Frame, title: &str) -> Result<(), ViewerError> {
    if frame.width == 0 || frame.height == 0 || frame.pixels.is_empty() {
        return Err(ViewerError::EmptyFrame);
    }
    ensure_display()?;

    let mut event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(PhysicalSize::new(frame.width, frame.height))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }?;
    let argb = to_argb(frame);
    let mut failure: Option<ViewerError> = None;

    event_loop.run_return(|event, _, control_flow| {
        control_flow.set_wait();
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested
                | WindowEvent::KeyboardInput {
                    input: KeyboardInput {
                        state: ElementState::Pressed,
                        virtual_keycode: Some(VirtualKeyCode::Escape),
                        ..
                    },
                    ..
                } => control_flow.set_exit(),
                WindowEvent::Resized(_) => window.request_redraw(),
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let size = window.inner_size();
                if let Err(e) = present(&mut surface, &argb, frame.width, frame.height, size) {
                    failure = Some(e);
                    control_flow.set_exit();
                }
            }
            _ => {}
        }
    });
    debug!("viewer closed");

    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn ensure_display() -> Result<(), ViewerError> {
    let set = |k: &str| std::env::var_os(k).is_some_and(|v| !v.is_empty());
    if set("DISPLAY") || set("WAYLAND_DISPLAY") {
        Ok(())
    } else {
        Err(ViewerError::NoDisplay)
    }
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn ensure_display() -> Result<(), ViewerError> {
    Ok(())
}

fn present(
    surface: &mut softbuffer::Surface,
    argb: &[u32],
    src_w: u32,
    src_h: u32,
    size: PhysicalSize<u32>,
) -> Result<(), ViewerError> {
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        // minimized
        return Ok(());
    };
    surface.resize(w, h)?;
    let mut buffer = surface.buffer_mut()?;
    blit_scaled(argb, src_w, src_h, &mut buffer, w.get(), h.get());
    buffer.present()?;
    Ok(())
}

/// Pack RGBA8 bytes as softbuffer's 0RGB words.
fn to_argb(frame: &Frame) -> Vec<u32> {
    frame
        .pixels
        .chunks_exact(4)
        .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
        .collect()
}

/// Nearest-neighbour copy of a `src_w` x `src_h` image into a `dst_w` x `dst_h` buffer.
fn blit_scaled(src: &[u32], src_w: u32, src_h: u32, dst: &mut [u32], dst_w: u32, dst_h: u32) {
    for y in 0..dst_h as usize {
        let sy = (y as u64 * src_h as u64 / dst_h as u64) as usize;
        let row = &mut dst[y * dst_w as usize..(y + 1) * dst_w as usize];
        for (x, out) in row.iter_mut().enumerate() {
            let sx = (x as u64 * src_w as u64 / dst_w as u64) as usize;
            *out = src[sy * src_w as usize + sx];
        }
    }
}
