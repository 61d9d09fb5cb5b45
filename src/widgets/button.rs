use crate::{
    layout::{Constraints, Rect, Size},
    style::{Insets, Spacing, Typography, Visibility},
    widgets::Widget,
};

/// A push button: a single-line label inside fixed padding. Buttons never
/// shrink below their label.
pub struct Button {
    pub label: String,
    visibility: Visibility,
    bounds: Rect,
}

impl Button {
    const PADDING: Insets = Insets::symmetric(Spacing::MD, Spacing::SM);

    pub fn label<S: Into<String>>(txt: S) -> Self {
        Self {
            label: txt.into(),
            visibility: Visibility::Visible,
            bounds: Rect::default(),
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    fn ideal_size(&self) -> Size {
        let text_w = self.label.chars().count() as i32 * Typography::CHAR_WIDTH;
        Size::new(
            text_w + Self::PADDING.horizontal(),
            Typography::LINE_HEIGHT + Self::PADDING.vertical(),
        )
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Where the label is drawn.
    pub fn content_rect(&self) -> Rect {
        self.bounds.inset(Self::PADDING)
    }
}

impl Widget for Button {
    fn layout(&mut self, bc: Constraints) -> Size {
        bc.constrain(self.ideal_size())
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn min_intrinsic_width(&self, _height: i32) -> i32 {
        self.ideal_size().width
    }

    fn min_intrinsic_height(&self, _width: i32) -> i32 {
        self.ideal_size().height
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::INF;

    #[test]
    fn test_measure() {
        let mut btn = Button::label("OK");
        // 2 chars * 8 + 2 * 8, 16 + 2 * 4
        assert_eq!(btn.layout(Constraints::unbounded()), Size::new(32, 24));
        assert_eq!(btn.min_intrinsic_width(INF), 32);
        assert_eq!(btn.min_intrinsic_height(INF), 24);
    }

    #[test]
    fn test_content_rect() {
        let mut btn = Button::label("Cancel");
        btn.set_bounds(Rect::from_xywh(10, 10, 100, 30));
        assert_eq!(btn.content_rect(), Rect::from_xywh(18, 14, 84, 22));
    }
}
