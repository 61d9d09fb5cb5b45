use crate::{
    layout::{Constraints, Rect, Size},
    style::{Typography, Visibility},
    widgets::Widget,
};

/// Word-wrapped text measured with fixed-advance metrics.
pub struct Text {
    pub content: String,
    visibility: Visibility,
    bounds: Rect,
}

/// Greedy word wrap. Returns `(lines, widest line in chars)`. Words longer
/// than `max_chars` overflow on a line of their own.
fn wrap(text: &str, max_chars: usize) -> (usize, usize) {
    let mut lines = 0;
    let mut widest = 0;
    for para in text.split('\n') {
        lines += 1;
        let mut line = 0;
        for word in para.split_whitespace() {
            let n = word.chars().count();
            if line == 0 {
                line = n;
            } else if line + 1 + n <= max_chars {
                line += 1 + n;
            } else {
                widest = widest.max(line);
                lines += 1;
                line = n;
            }
        }
        widest = widest.max(line);
    }
    (lines, widest)
}

fn max_chars(width: i32) -> usize {
    if width == crate::layout::INF {
        usize::MAX
    } else {
        (width.max(0) / Typography::CHAR_WIDTH) as usize
    }
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            visibility: Visibility::Visible,
            bounds: Rect::default(),
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    fn measure(&self, width: i32) -> Size {
        let (lines, widest) = wrap(&self.content, max_chars(width));
        Size::new(
            widest as i32 * Typography::CHAR_WIDTH,
            lines as i32 * Typography::LINE_HEIGHT,
        )
    }
}

impl Widget for Text {
    fn layout(&mut self, bc: Constraints) -> Size {
        bc.constrain(self.measure(bc.max.width))
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// The longest word.
    fn min_intrinsic_width(&self, _height: i32) -> i32 {
        let longest = self
            .content
            .split_whitespace()
            .map(|w| w.chars().count())
            .max()
            .unwrap_or(0);
        longest as i32 * Typography::CHAR_WIDTH
    }

    fn min_intrinsic_height(&self, width: i32) -> i32 {
        self.measure(width).height
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }
}
