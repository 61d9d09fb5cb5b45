use super::{
    Constraints, Layout, LayoutCx, Node, Rect, Size,
    constraints::scale,
    size::INF,
};

/// Position along one axis, on a `0..=100` scale from the start edge
/// (`START`) to the end edge (`END`).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Anchor(u8);

impl Anchor {
    pub const START: Anchor = Anchor(0);
    pub const CENTER: Anchor = Anchor(50);
    pub const END: Anchor = Anchor(100);

    const SCALE: i64 = 100;

    pub fn new(value: u8) -> Self {
        assert!(value as i64 <= Self::SCALE, "anchor {value} out of range 0..=100");
        Anchor(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Offset of a `child`-sized span inside `extent`.
    pub fn offset(self, extent: i32, child: i32) -> i32 {
        scale(extent - child, self.0 as i64, Self::SCALE)
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Positions a single child inside whatever rect it is given.
pub struct Align {
    child: Box<Node>,
    h_align: Anchor,
    v_align: Anchor,
    width_factor: f32,
    height_factor: f32,

    child_size: Size,
}

fn apply_factor(v: i32, factor: f32) -> i32 {
    if factor > 0.0 && v != INF {
        (v as f64 * factor as f64) as i32
    } else {
        v
    }
}

impl Align {
    pub fn new(child: impl Into<Node>) -> Self {
        Self {
            child: Box::new(child.into()),
            h_align: Anchor::CENTER,
            v_align: Anchor::CENTER,
            width_factor: 0.0,
            height_factor: 0.0,
            child_size: Size::ZERO,
        }
    }

    pub fn h_align(mut self, anchor: Anchor) -> Self {
        self.h_align = anchor;
        self
    }

    pub fn v_align(mut self, anchor: Anchor) -> Self {
        self.v_align = anchor;
        self
    }

    /// Reported width becomes the child's width times `factor`. Zero disables.
    pub fn width_factor(mut self, factor: f32) -> Self {
        self.width_factor = factor;
        self
    }

    /// Reported height becomes the child's height times `factor`. Zero disables.
    pub fn height_factor(mut self, factor: f32) -> Self {
        self.height_factor = factor;
        self
    }

    pub fn child(&self) -> &Node {
        &self.child
    }

    pub fn child_mut(&mut self) -> &mut Node {
        &mut self.child
    }
}

impl Layout for Align {
    fn layout(&mut self, cx: &mut LayoutCx, bc: Constraints) -> Size {
        self.child_size = self.child.layout(cx, bc.loosen());
        bc.constrain(Size::new(
            apply_factor(self.child_size.width, self.width_factor),
            apply_factor(self.child_size.height, self.height_factor),
        ))
    }

    fn set_bounds(&mut self, cx: &mut LayoutCx, bounds: Rect) {
        let size = self.child_size;
        let x = bounds.x() + self.h_align.offset(bounds.width(), size.width);
        let y = bounds.y() + self.v_align.offset(bounds.height(), size.height);
        self.child.set_bounds(cx, Rect::from_xywh(x, y, size.width, size.height));
    }

    fn min_intrinsic_width(&self, height: i32) -> i32 {
        apply_factor(self.child.min_intrinsic_width(height), self.width_factor)
    }

    fn min_intrinsic_height(&self, width: i32) -> i32 {
        apply_factor(self.child.min_intrinsic_height(width), self.height_factor)
    }
}
