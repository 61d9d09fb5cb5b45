use std::fmt;
use std::ops::Add;

use glam::IVec2;

use crate::style::FlexDir;

/// Sentinel for an unbounded extent.
pub const INF: i32 = i32::MAX;

/// Returns `INF` if `a` is unbounded, otherwise `b`.
///
/// Any computation of the form `a - x` or `a * fraction` must go through this
/// so an unbounded extent never turns into a large finite number.
#[inline]
pub fn guard_inf(a: i32, b: i32) -> i32 {
    if a == INF { INF } else { b }
}

/// Adds two extents, absorbing `INF`.
#[inline]
pub fn add_extent(a: i32, b: i32) -> i32 {
    if a == INF || b == INF {
        INF
    } else {
        a.saturating_add(b)
    }
}

pub(crate) fn fmt_extent(v: i32, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if v == INF { f.write_str("inf") } else { write!(f, "{v}") }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Self = Self::new(0, 0);
    pub const INF: Self = Self::new(INF, INF);

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Neither axis is `INF`.
    pub fn is_finite(self) -> bool {
        self.width != INF && self.height != INF
    }

    pub fn main(self, dir: FlexDir) -> i32 {
        match dir {
            FlexDir::Row => self.width,
            FlexDir::Column => self.height,
        }
    }

    pub fn cross(self, dir: FlexDir) -> i32 {
        match dir {
            FlexDir::Row => self.height,
            FlexDir::Column => self.width,
        }
    }

    /// Builds a size from main/cross extents of a stack running in `dir`.
    pub fn from_main_cross(dir: FlexDir, main: i32, cross: i32) -> Self {
        match dir {
            FlexDir::Row => Self::new(main, cross),
            FlexDir::Column => Self::new(cross, main),
        }
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size::new(
            add_extent(self.width, rhs.width),
            add_extent(self.height, rhs.height),
        )
    }
}

impl From<IVec2> for Size {
    fn from(v: IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Size> for IVec2 {
    fn from(s: Size) -> Self {
        IVec2::new(s.width, s.height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_extent(self.width, f)?;
        f.write_str("x")?;
        fmt_extent(self.height, f)
    }
}
