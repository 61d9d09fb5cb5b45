/// Direction a stack lays its children out in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlexDir {
    /// Left to right (`HBox`).
    Row,
    /// Top to bottom (`VBox`).
    Column,
}

/// Main-axis placement policy of a stack.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Justify {
    #[default]
    Start,
    Center,
    End,
    /// Leftover space goes between children only.
    SpaceBetween,
    /// Leftover space goes before the first child and between children.
    SpaceAround,
    /// Every child gets an equal slice of the main axis; flex is ignored.
    Homogeneous,
}

/// Cross-axis placement policy of a stack.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CrossAlign {
    #[default]
    Start,
    Center,
    End,
    Stretch,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Visible,
    /// Occupies space but is not shown.
    Hidden,
    /// Takes no part in sizing or placement.
    Collapse,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Insets {
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(v: i32) -> Self {
        Self::new(v, v, v, v)
    }

    pub const fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn horizontal(self) -> i32 {
        self.left + self.right
    }

    pub fn vertical(self) -> i32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insets_totals() {
        let i = Insets::new(1, 2, 3, 4);
        assert_eq!(i.horizontal(), 6);
        assert_eq!(i.vertical(), 4);
        assert_eq!(Insets::symmetric(5, 7), Insets::new(7, 5, 7, 5));
        assert_eq!(Insets::all(3).horizontal(), 6);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Justify::default(), Justify::Start);
        assert_eq!(CrossAlign::default(), CrossAlign::Start);
        assert_eq!(Visibility::default(), Visibility::Visible);
    }
}
