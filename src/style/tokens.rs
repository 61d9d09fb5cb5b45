//! Fixed metrics used by the sample widgets.

/// Fixed-advance text metrics, in pixels.
pub struct Typography;

impl Typography {
    pub const CHAR_WIDTH: i32 = 8;
    pub const LINE_HEIGHT: i32 = 16;
}

pub struct Spacing;

impl Spacing {
    pub const SM: i32 = 4;
    pub const MD: i32 = 8;
}
