pub mod app;
pub mod debug;
pub mod layout;
pub mod style;
pub mod widgets;

pub use app::App;
pub use layout::{
    Align, Anchor, Constraints, INF, Layout, LayoutCx, Node, NodeKind, Padding, Rect, Size,
    Spacer, Stack, TableLayout, layout_to_size,
};
pub use style::{CrossAlign, FlexDir, Insets, Justify, Visibility};
pub use widgets::{Button, Canvas, Text, Widget};

pub use glam::IVec2;

/// Installs the `env_logger` backend. Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
