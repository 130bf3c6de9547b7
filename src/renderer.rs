use std::time::{Duration, Instant};

use log::{error, info};
use winit::{
    event::{ElementState, Event, MouseButton, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoopBuilder},
    window::CursorIcon,
};

use crate::{
    canvas::{self, Canvas},
    error::BubbleError,
    pager::Pager,
    scheduler::FrameLoop,
    selection::CursorHint,
    simulator::Simulator,
};

pub mod draw;
pub mod event;
pub mod glyphs;
pub mod shapes;

use draw::SceneBatch;
use event::{Debounce, PointerTracker};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const LOAD_MORE_COOLDOWN: Duration = Duration::from_millis(400);
const WINDOW_TITLE: &str = "Select Your Hobbies";

/// Opens a window and runs the simulation in it.
///
/// Left click toggles bubbles, `Space` shows the next portion of the catalog.
pub struct Renderer {
    simulator: Simulator,
    size: (u32, u32),
}

impl Renderer {
    pub fn new(simulator: Simulator) -> Self {
        let bounds = simulator.bounds();
        Self {
            simulator,
            size: (bounds.x as u32, bounds.y as u32),
        }
    }

    /// Blocks until the window is closed.
    pub fn create_window(mut self, mut pager: Pager<String>) -> Result<(), BubbleError> {
        let event_loop = EventLoopBuilder::new().build();

        let (window, display) = glium::backend::glutin::SimpleWindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(self.size.0, self.size.1)
            .build(&event_loop);
        let program = draw::build_program(&display)?;

        let mut pointer = PointerTracker::new(window.scale_factor());
        let mut load_more = Debounce::new(LOAD_MORE_COOLDOWN);

        let batch = SceneBatch::new(pointer.viewport(window.inner_size()));
        self.simulator.set_bounds(batch.viewport());
        self.simulator.sync_items(pager.current())?;

        let mut frame_loop = FrameLoop::attach(self.simulator, Some(batch));
        let mut last_redraw = Instant::now();
        let mut title_label: Option<String> = None;
        info!("window opened, frame loop running");

        event_loop.run(move |event, _, control_flow| {
            *control_flow = ControlFlow::Poll;

            #[allow(clippy::single_match)]
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                        frame_loop.detach();
                        *control_flow = ControlFlow::Exit;
                    }
                    WindowEvent::Resized(size) => {
                        let viewport = pointer.viewport(size);
                        // minimized windows report zero, keep the last layout
                        if canvas::is_usable(viewport) {
                            display.resize(size.into());
                            if let Some(batch) = frame_loop.canvas_mut() {
                                batch.resize(viewport);
                            }
                        }
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        pointer.set_scale_factor(scale_factor);
                        let viewport = pointer.viewport(window.inner_size());
                        if let Some(batch) = frame_loop.canvas_mut() {
                            if canvas::is_usable(viewport) {
                                batch.resize(viewport);
                            }
                        }
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        let point = pointer.moved(position);
                        let icon = match frame_loop.simulator_mut().pointer_move(point) {
                            CursorHint::Pointer => CursorIcon::Hand,
                            CursorHint::Default => CursorIcon::Default,
                        };
                        window.set_cursor_icon(icon);

                        let hovered = frame_loop.simulator().hovered_label();
                        if hovered != title_label.as_deref() {
                            window.set_title(&window_title(hovered));
                            title_label = hovered.map(str::to_string);
                        }
                    }
                    WindowEvent::CursorLeft { .. } => {
                        pointer.left();
                        frame_loop.simulator_mut().pointer_left();
                        window.set_cursor_icon(CursorIcon::Default);
                        if title_label.take().is_some() {
                            window.set_title(WINDOW_TITLE);
                        }
                    }
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        button: MouseButton::Left,
                        ..
                    } => {
                        if let Some(point) = pointer.position() {
                            frame_loop.simulator_mut().click(point);
                        }
                    }
                    WindowEvent::KeyboardInput { input, .. } => {
                        if input.state == ElementState::Pressed
                            && input.virtual_keycode == Some(VirtualKeyCode::Space)
                            && load_more.ready(Instant::now())
                        {
                            let items = pager.load_more();
                            if let Err(e) = frame_loop.simulator_mut().sync_items(items) {
                                error!("failed to load more items: {}", e);
                            }
                        }
                    }
                    _ => (),
                },
                _ => (),
            }

            if last_redraw.elapsed() >= FRAME_INTERVAL {
                last_redraw = Instant::now();

                if frame_loop.tick().is_some() {
                    if let Some(batch) = frame_loop.canvas() {
                        if let Err(e) = draw::present(batch, &display, &program) {
                            error!("{}", e);
                        }
                    }
                }
            }
        });
    }
}

/// Window title naming the bubble under the pointer.
fn window_title(hovered: Option<&str>) -> String {
    match hovered {
        Some(label) => format!("{} - {}", WINDOW_TITLE, label),
        None => WINDOW_TITLE.to_string(),
    }
}
