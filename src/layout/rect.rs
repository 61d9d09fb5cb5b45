use std::fmt;

use glam::{IVec2, ivec2};

use super::size::{Size, fmt_extent};
use crate::style::{FlexDir, Insets};

/// Final placement of a node, produced by `set_bounds`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Rect {
    pub origin: IVec2,
    pub size: Size,
}

impl Rect {
    pub fn new(origin: IVec2, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(ivec2(x, y), Size::new(width, height))
    }

    /// Builds a rect from main/cross coordinates of a stack running in `dir`.
    pub(crate) fn from_main_cross(
        dir: FlexDir,
        main_pos: i32,
        cross_pos: i32,
        main_len: i32,
        cross_len: i32,
    ) -> Self {
        match dir {
            FlexDir::Row => Self::from_xywh(main_pos, cross_pos, main_len, cross_len),
            FlexDir::Column => Self::from_xywh(cross_pos, main_pos, cross_len, main_len),
        }
    }

    pub fn x(&self) -> i32 {
        self.origin.x
    }

    pub fn y(&self) -> i32 {
        self.origin.y
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    pub fn right(&self) -> i32 {
        self.origin.x + self.size.width
    }

    pub fn bottom(&self) -> i32 {
        self.origin.y + self.size.height
    }

    pub(crate) fn main_start(&self, dir: FlexDir) -> i32 {
        match dir {
            FlexDir::Row => self.origin.x,
            FlexDir::Column => self.origin.y,
        }
    }

    pub(crate) fn cross_start(&self, dir: FlexDir) -> i32 {
        match dir {
            FlexDir::Row => self.origin.y,
            FlexDir::Column => self.origin.x,
        }
    }

    pub fn contains(&self, p: IVec2) -> bool {
        p.x >= self.x() && p.x < self.right() && p.y >= self.y() && p.y < self.bottom()
    }

    /// Shrinks the rect by `insets`, never below zero size.
    pub fn inset(&self, insets: Insets) -> Self {
        Self::from_xywh(
            self.origin.x + insets.left,
            self.origin.y + insets.top,
            (self.size.width - insets.horizontal()).max(0),
            (self.size.height - insets.vertical()).max(0),
        )
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{} ", self.origin.x, self.origin.y)?;
        fmt_extent(self.size.width, f)?;
        f.write_str("x")?;
        fmt_extent(self.size.height, f)?;
        f.write_str(")")
    }
}
