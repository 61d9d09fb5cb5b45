pub mod properties;
pub mod tokens;

pub use properties::{CrossAlign, FlexDir, Insets, Justify, Visibility};
pub use tokens::{Spacing, Typography};
