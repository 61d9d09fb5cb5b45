//! Constraint-based box layout.
//!
//! Layout is two passes over a tree of [`Node`]s:
//!
//! ```text
//! root.layout(cx, constraints) -> Size   (measure, depth-first, caches sizes)
//! root.set_bounds(cx, rect)              (arrange, reads the cached sizes)
//! ```
//!
//! `layout` must run before `set_bounds` for every frame; the engine does not
//! check this, and arranging without a fresh measure reads stale sizes.

pub mod align;
pub mod constraints;
pub mod context;
pub mod node;
pub mod padding;
pub mod rect;
pub mod size;
pub mod spacer;
pub mod stack;
pub mod table;

pub use align::{Align, Anchor};
pub use constraints::{Constraints, scale};
pub use context::LayoutCx;
pub use node::{Node, NodeKind};
pub use padding::Padding;
pub use rect::Rect;
pub use size::{INF, Size, add_extent, guard_inf};
pub use spacer::Spacer;
pub use stack::Stack;
pub use table::TableLayout;

/// The contract every layout node implements.
pub trait Layout {
    /// Measures the node under `bc` and returns the size it chose.
    fn layout(&mut self, cx: &mut LayoutCx, bc: Constraints) -> Size;

    /// Places the node (and its subtree) at `bounds`, using the sizes cached by
    /// the preceding `layout`.
    fn set_bounds(&mut self, cx: &mut LayoutCx, bounds: Rect);

    /// Smallest width the node can render at, given `height` (or `INF`).
    fn min_intrinsic_width(&self, height: i32) -> i32;

    /// Smallest height the node can render at, given `width` (or `INF`).
    fn min_intrinsic_height(&self, width: i32) -> i32;
}

/// Lays `node` out to exactly `size` and places it at the origin.
pub fn layout_to_size(node: &mut Node, cx: &mut LayoutCx, size: Size) -> Size {
    let measured = node.layout(cx, Constraints::tight(size));
    node.set_bounds(cx, Rect::new(glam::IVec2::ZERO, size));
    measured
}
