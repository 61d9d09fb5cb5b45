use super::{
    Constraints, Layout, LayoutCx, Node, Rect, Size,
    size::{add_extent, guard_inf},
};
use crate::style::Insets;

/// Surrounds a single child with fixed insets.
pub struct Padding {
    insets: Insets,
    child: Box<Node>,
}

impl Padding {
    pub fn new(insets: Insets, child: impl Into<Node>) -> Self {
        Self {
            insets,
            child: Box::new(child.into()),
        }
    }

    pub fn all(v: i32, child: impl Into<Node>) -> Self {
        Self::new(Insets::all(v), child)
    }

    pub fn insets(&self) -> Insets {
        self.insets
    }

    pub fn child(&self) -> &Node {
        &self.child
    }

    pub fn child_mut(&mut self) -> &mut Node {
        &mut self.child
    }
}

impl Layout for Padding {
    fn layout(&mut self, cx: &mut LayoutCx, bc: Constraints) -> Size {
        let (h, v) = (self.insets.horizontal(), self.insets.vertical());
        let size = self.child.layout(cx, bc.inset(h, v));
        Size::new(add_extent(size.width, h), add_extent(size.height, v))
    }

    fn set_bounds(&mut self, cx: &mut LayoutCx, bounds: Rect) {
        self.child.set_bounds(cx, bounds.inset(self.insets));
    }

    fn min_intrinsic_width(&self, height: i32) -> i32 {
        let v = self.insets.vertical();
        let inner = guard_inf(height, (height - v).max(0));
        add_extent(self.child.min_intrinsic_width(inner), self.insets.horizontal())
    }

    fn min_intrinsic_height(&self, width: i32) -> i32 {
        let h = self.insets.horizontal();
        let inner = guard_inf(width, (width - h).max(0));
        add_extent(self.child.min_intrinsic_height(inner), self.insets.vertical())
    }
}
