use crate::{
    style::Visibility,
    widgets::Widget,
};

use super::{
    Align, Constraints, Layout, LayoutCx, Padding, Rect, Size, Spacer, Stack, TableLayout,
};

/// The closed set of things that can sit in a layout tree.
pub enum NodeKind {
    Padding(Padding),
    Stack(Stack),
    Align(Align),
    Spacer(Spacer),
    Table(TableLayout),
    /// An opaque leaf supplied by the host.
    Widget(Box<dyn Widget>),
}

/// A layout tree node. Each node exclusively owns its subtree.
pub struct Node {
    kind: NodeKind,
    visibility: Visibility,
    bounds: Rect, // last rect passed to `set_bounds`
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            visibility: Visibility::Visible,
            bounds: Rect::default(),
        }
    }

    pub fn widget(widget: impl Widget + 'static) -> Self {
        Self::new(NodeKind::Widget(Box::new(widget)))
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut NodeKind {
        &mut self.kind
    }

    pub fn name(&self) -> &'static str {
        match &self.kind {
            NodeKind::Padding(_) => "Padding",
            NodeKind::Stack(s) => s.name(),
            NodeKind::Align(_) => "Align",
            NodeKind::Spacer(_) => "Spacer",
            NodeKind::Table(_) => "TableLayout",
            NodeKind::Widget(w) => w.name(),
        }
    }

    /// Effective visibility. A widget leaf reports its own flag unless the
    /// node has been explicitly hidden or collapsed.
    pub fn visibility(&self) -> Visibility {
        match (&self.kind, self.visibility) {
            (NodeKind::Widget(w), Visibility::Visible) => w.visibility(),
            (_, v) => v,
        }
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn is_collapsed(&self) -> bool {
        self.visibility() == Visibility::Collapse
    }

    /// The rect most recently passed to `set_bounds`.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Direct children, in layout order. Empty table cells are skipped.
    pub fn children(&self) -> Vec<&Node> {
        match &self.kind {
            NodeKind::Padding(p) => vec![p.child()],
            NodeKind::Stack(s) => s.children().collect(),
            NodeKind::Align(a) => vec![a.child()],
            NodeKind::Table(t) => t.cells().collect(),
            NodeKind::Spacer(_) | NodeKind::Widget(_) => Vec::new(),
        }
    }

    pub fn as_stack(&self) -> Option<&Stack> {
        match &self.kind {
            NodeKind::Stack(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_stack_mut(&mut self) -> Option<&mut Stack> {
        match &mut self.kind {
            NodeKind::Stack(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&TableLayout> {
        match &self.kind {
            NodeKind::Table(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_table_mut(&mut self) -> Option<&mut TableLayout> {
        match &mut self.kind {
            NodeKind::Table(t) => Some(t),
            _ => None,
        }
    }
}

impl Layout for Node {
    fn layout(&mut self, cx: &mut LayoutCx, bc: Constraints) -> Size {
        debug_assert!(bc.is_normalized(), "non-normalized constraints {bc}");
        let name = self.name();
        cx.enter_layout(name, bc);
        let size = match &mut self.kind {
            NodeKind::Padding(p) => p.layout(cx, bc),
            NodeKind::Stack(s) => s.layout(cx, bc),
            NodeKind::Align(a) => a.layout(cx, bc),
            NodeKind::Spacer(s) => s.layout(cx, bc),
            NodeKind::Table(t) => t.layout(cx, bc),
            NodeKind::Widget(w) => w.layout(bc),
        };
        cx.exit_layout(name, size);
        size
    }

    fn set_bounds(&mut self, cx: &mut LayoutCx, bounds: Rect) {
        self.bounds = bounds;
        cx.enter_bounds(self.name(), bounds);
        match &mut self.kind {
            NodeKind::Padding(p) => p.set_bounds(cx, bounds),
            NodeKind::Stack(s) => s.set_bounds(cx, bounds),
            NodeKind::Align(a) => a.set_bounds(cx, bounds),
            NodeKind::Spacer(s) => s.set_bounds(cx, bounds),
            NodeKind::Table(t) => t.set_bounds(cx, bounds),
            NodeKind::Widget(w) => w.set_bounds(bounds),
        }
        cx.exit_bounds();
    }

    fn min_intrinsic_width(&self, height: i32) -> i32 {
        match &self.kind {
            NodeKind::Padding(p) => p.min_intrinsic_width(height),
            NodeKind::Stack(s) => s.min_intrinsic_width(height),
            NodeKind::Align(a) => a.min_intrinsic_width(height),
            NodeKind::Spacer(s) => s.min_intrinsic_width(height),
            NodeKind::Table(t) => t.min_intrinsic_width(height),
            NodeKind::Widget(w) => w.min_intrinsic_width(height),
        }
    }

    fn min_intrinsic_height(&self, width: i32) -> i32 {
        match &self.kind {
            NodeKind::Padding(p) => p.min_intrinsic_height(width),
            NodeKind::Stack(s) => s.min_intrinsic_height(width),
            NodeKind::Align(a) => a.min_intrinsic_height(width),
            NodeKind::Spacer(s) => s.min_intrinsic_height(width),
            NodeKind::Table(t) => t.min_intrinsic_height(width),
            NodeKind::Widget(w) => w.min_intrinsic_height(width),
        }
    }
}

impl From<Padding> for Node {
    fn from(p: Padding) -> Self {
        Node::new(NodeKind::Padding(p))
    }
}

impl From<Stack> for Node {
    fn from(s: Stack) -> Self {
        Node::new(NodeKind::Stack(s))
    }
}

impl From<Align> for Node {
    fn from(a: Align) -> Self {
        Node::new(NodeKind::Align(a))
    }
}

impl From<Spacer> for Node {
    fn from(s: Spacer) -> Self {
        Node::new(NodeKind::Spacer(s))
    }
}

impl From<TableLayout> for Node {
    fn from(t: TableLayout) -> Self {
        Node::new(NodeKind::Table(t))
    }
}

impl From<Box<dyn Widget>> for Node {
    fn from(w: Box<dyn Widget>) -> Self {
        Node::new(NodeKind::Widget(w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Canvas;

    #[test]
    fn test_records_bounds() {
        let mut node = Node::widget(Canvas::new(10, 10));
        let mut cx = LayoutCx::new();
        let size = node.layout(&mut cx, Constraints::loose(Size::new(100, 100)));
        assert_eq!(size, Size::new(10, 10));
        node.set_bounds(&mut cx, Rect::from_xywh(5, 5, 10, 10));
        assert_eq!(node.bounds(), Rect::from_xywh(5, 5, 10, 10));
        assert_eq!(cx.layout_calls(), 1);
    }

    #[test]
    fn test_visibility_prefers_node_override() {
        let node = Node::widget(Canvas::new(10, 10).with_visibility(Visibility::Collapse));
        assert!(node.is_collapsed());

        let node = Node::widget(Canvas::new(10, 10)).with_visibility(Visibility::Hidden);
        assert_eq!(node.visibility(), Visibility::Hidden);
        assert!(!node.is_collapsed());
    }

    #[test]
    fn test_names() {
        assert_eq!(Node::from(Stack::vbox()).name(), "VBox");
        assert_eq!(Node::from(Stack::hbox()).name(), "HBox");
        assert_eq!(Node::from(Spacer::new(1, 1)).name(), "Spacer");
        assert_eq!(Node::widget(Canvas::new(1, 1)).name(), "Canvas");
    }
}
