use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::{
    debug,
    layout::{LayoutCx, Node, Size, layout_to_size},
};

struct WindowConfig {
    title: String,
    size: winit::dpi::LogicalSize<u32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Trellis".to_string(),
            size: winit::dpi::LogicalSize::new(800, 600),
        }
    }
}

/// Hosts a layout tree in a native window and lays it out again on every
/// resize.
pub struct App {
    root: Node,
    window_config: WindowConfig,
    trace: bool,
}

impl App {
    pub fn new(root: impl Into<Node>) -> Self {
        Self {
            root: root.into(),
            window_config: WindowConfig::default(),
            trace: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window_config.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.window_config.size = winit::dpi::LogicalSize::new(width, height);
        self
    }

    /// Trace constraints for every relayout.
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// One full layout pass for a client area of `width` x `height`.
    pub fn relayout(&mut self, width: u32, height: u32) -> Size {
        let size = Size::new(
            width.min(i32::MAX as u32 - 1) as i32,
            height.min(i32::MAX as u32 - 1) as i32,
        );
        let mut cx = LayoutCx::new().with_trace(self.trace);
        let measured = layout_to_size(&mut self.root, &mut cx, size);
        log::debug!(
            "relayout {size}: {} layout calls, root measured {measured}",
            cx.layout_calls()
        );
        measured
    }

    pub fn run(mut self) -> anyhow::Result<()> {
        crate::init_logging();
        log::info!("Starting {}...", &self.window_config.title);

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let window = WindowBuilder::new()
            .with_title(&self.window_config.title)
            .with_inner_size(self.window_config.size)
            .build(&event_loop)?;

        let initial = window.inner_size();
        self.relayout(initial.width, initial.height);

        event_loop.run(move |event, elwt| {
            if let Event::WindowEvent { window_id, event } = &event {
                if *window_id != window.id() {
                    return;
                }
                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::Resized(sz) => {
                        self.relayout(sz.width, sz.height);
                        if log::log_enabled!(log::Level::Debug) {
                            log::debug!("layout:\n{}", debug::outline(&self.root));
                        }
                    }
                    _ => {}
                }
            }
        })?;

        Ok(())
    }
}
