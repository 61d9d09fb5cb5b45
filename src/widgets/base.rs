use crate::{
    layout::{Constraints, Node, Rect, Size},
    style::Visibility,
};

/// What the layout engine needs from a host-supplied leaf.
///
/// Widgets do not see the layout context; the owning [`Node`] traces around
/// every call.
pub trait Widget {
    /// Usually the widget's ideal size, constrained by `bc`.
    fn layout(&mut self, bc: Constraints) -> Size;

    /// Moves the underlying control to `bounds`.
    fn set_bounds(&mut self, bounds: Rect);

    fn min_intrinsic_width(&self, height: i32) -> i32;

    fn min_intrinsic_height(&self, width: i32) -> i32;

    fn visibility(&self) -> Visibility {
        Visibility::Visible
    }

    /// Name used in layout traces.
    fn name(&self) -> &'static str {
        crate::debug::short_type_name::<Self>()
    }

    fn into_node(self) -> Node
    where
        Self: Sized + 'static,
    {
        Node::widget(self)
    }
}
