use crate::{
    layout::{Constraints, Rect, Size},
    style::Visibility,
    widgets::Widget,
};

/// A leaf with a fixed ideal size. The host is told where it ended up through
/// the optional `on_bounds` callback.
pub struct Canvas {
    ideal: Size,
    visibility: Visibility,
    on_bounds: Option<Box<dyn FnMut(Rect)>>,
}

impl Canvas {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            ideal: Size::new(width, height),
            visibility: Visibility::Visible,
            on_bounds: None,
        }
    }

    pub fn on_bounds(mut self, f: impl FnMut(Rect) + 'static) -> Self {
        self.on_bounds = Some(Box::new(f));
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

impl Widget for Canvas {
    fn layout(&mut self, bc: Constraints) -> Size {
        bc.constrain(self.ideal)
    }

    fn set_bounds(&mut self, bounds: Rect) {
        if let Some(f) = self.on_bounds.as_mut() {
            f(bounds);
        }
    }

    fn min_intrinsic_width(&self, _height: i32) -> i32 {
        self.ideal.width
    }

    fn min_intrinsic_height(&self, _width: i32) -> i32 {
        self.ideal.height
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    #[test]
    fn test_reports_bounds() {
        let seen = Rc::new(Cell::new(Rect::default()));
        let sink = seen.clone();
        let mut canvas = Canvas::new(10, 10).on_bounds(move |r| sink.set(r));
        canvas.set_bounds(Rect::from_xywh(1, 2, 3, 4));
        assert_eq!(seen.get(), Rect::from_xywh(1, 2, 3, 4));
    }

    #[test]
    fn test_layout_constrains_ideal() {
        let mut canvas = Canvas::new(50, 20);
        assert_eq!(
            canvas.layout(Constraints::loose(Size::new(30, 100))),
            Size::new(30, 20)
        );
    }
}
