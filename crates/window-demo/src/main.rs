// File: crates/window-demo/src/main.rs
// Summary: Minimal windowed demo that renders the grid to a window via RGBA blit
// (CPU) using winit + softbuffer. Left-drag pans, wheel zooms about the cursor,
// middle-button release drops the snapped pointer marker.

use std::num::NonZeroU32;
use supergrid_core::{theme, GridConfig, Point, Rgba, Transform, ViewState};
use winit::event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() {
    let theme_name = std::env::args().nth(1).unwrap_or_else(|| "light".to_string());
    let base_cfg = GridConfig::with_theme(&theme::find(&theme_name));

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("SuperGrid — Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(1000.0, 1000.0))
        .build(&event_loop)
        .expect("build window");

    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    let mut size = window.inner_size();
    let mut view = ViewState { transform: Transform::IDENTITY, pointer: None };
    let mut cursor: Option<(f64, f64)> = None;
    let mut dragging = false;
    let mut last_drag_pos: Option<(f64, f64)> = None;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    if dragging {
                        if let Some((lx, ly)) = last_drag_pos {
                            view.transform.pan_by(position.x - lx, position.y - ly);
                            window.request_redraw();
                        }
                        last_drag_pos = Some((position.x, position.y));
                    }
                    cursor = Some((position.x, position.y));
                }
                WindowEvent::MouseInput { state, button, .. } => match button {
                    MouseButton::Left => {
                        dragging = state == ElementState::Pressed;
                        last_drag_pos = None;
                    }
                    MouseButton::Middle => {
                        // marker placement triggers on release only
                        if state == ElementState::Released {
                            if let Some((cx, cy)) = cursor {
                                view.pointer = supergrid_core::snapshot_from_release(
                                    &view.transform,
                                    Point::new(cx, cy),
                                    base_cfg.screen_space_cell_size,
                                );
                                window.request_redraw();
                            }
                        }
                    }
                    _ => {}
                },
                WindowEvent::MouseWheel { delta, .. } => {
                    let steps = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y as f64,
                        MouseScrollDelta::PixelDelta(p) => p.y / 40.0,
                    };
                    let factor = 1.1f64.powf(steps);
                    let at = cursor.map(|(x, y)| Point::new(x, y)).unwrap_or_else(|| {
                        Point::new(size.width as f64 / 2.0, size.height as f64 / 2.0)
                    });
                    view.transform.zoom_at(at, factor);
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let w = size.width.max(1);
                let h = size.height.max(1);
                surface
                    .resize(NonZeroU32::new(w).unwrap(), NonZeroU32::new(h).unwrap())
                    .ok();

                let cfg = GridConfig { width: w as f64, height: h as f64, ..base_cfg };
                let (rgba, _, _, _) = match supergrid_skia::render_to_rgba8(&cfg, &view) {
                    Ok(frame) => frame,
                    Err(e) => {
                        eprintln!("render error: {e:?}");
                        return;
                    }
                };

                let mut frame = surface.buffer_mut().expect("frame");
                let max_px = frame.len().min(rgba.len() / 4);
                for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
                    // softbuffer reads the low 24 bits as RGB and ignores the rest
                    frame[i] = Rgba::new(px[0], px[1], px[2], px[3]).to_argb();
                }
                if let Err(e) = frame.present() {
                    eprintln!("present error: {e:?}");
                }
            }
            _ => {}
        }
    });
}
