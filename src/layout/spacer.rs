use super::{Constraints, Layout, LayoutCx, Rect, Size};

/// Fixed-size empty leaf.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Spacer {
    size: Size,
}

impl Spacer {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }

    pub fn width(width: i32) -> Self {
        Self::new(width, 0)
    }

    pub fn height(height: i32) -> Self {
        Self::new(0, height)
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl Layout for Spacer {
    fn layout(&mut self, _cx: &mut LayoutCx, bc: Constraints) -> Size {
        bc.constrain(self.size)
    }

    fn set_bounds(&mut self, _cx: &mut LayoutCx, _bounds: Rect) {}

    fn min_intrinsic_width(&self, _height: i32) -> i32 {
        self.size.width
    }

    fn min_intrinsic_height(&self, _width: i32) -> i32 {
        self.size.height
    }
}
