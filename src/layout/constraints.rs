//! Layout constraints for constraint-based layout.
//!
//! Constraints flow down the tree, bounding the size each node may choose.
//! A node answers with a single `Size` that satisfies them.

use std::fmt;

use super::size::{INF, Size, guard_inf};
use crate::style::FlexDir;

/// Proportional integer scaling: `value * num / den`, truncating.
///
/// Partitioning a total into `n` shares this way can leave up to `n - 1`
/// units unallocated; callers live with that drift. An unbounded `value`
/// stays unbounded and a zero denominator yields zero.
#[inline]
pub fn scale(value: i32, num: i64, den: i64) -> i32 {
    if value == INF {
        return INF;
    }
    if den == 0 {
        return 0;
    }
    (value as i64 * num / den) as i32
}

/// Minimum and maximum bounds on a node's size.
///
/// Normalized constraints satisfy `0 <= min <= max` on both axes. An axis is
/// *tight* when `min == max` and *bounded* when `max != INF`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Constraints {
    pub min: Size,
    pub max: Size,
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl Constraints {
    pub const fn new(min: Size, max: Size) -> Self {
        Self { min, max }
    }

    /// Exactly `size`.
    pub const fn tight(size: Size) -> Self {
        Self::new(size, size)
    }

    /// Anything from zero up to `max`.
    pub const fn loose(max: Size) -> Self {
        Self::new(Size::ZERO, max)
    }

    /// Zero minimum, infinite maximum.
    pub const fn unbounded() -> Self {
        Self::new(Size::ZERO, Size::INF)
    }

    /// Clamps each axis of `size` into `[min, max]`.
    #[inline]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min.width, self.max.width),
            size.height.clamp(self.min.height, self.max.height),
        )
    }

    /// Like [`constrain`](Self::constrain), but scales `size` uniformly so its
    /// width/height ratio survives where the bounds allow it.
    ///
    /// Corrections run in a fixed order (width overflow, height overflow,
    /// width underflow, height underflow), each recomputing the other axis
    /// from the ratio; the last binding correction wins.
    pub fn constrain_and_attempt_to_preserve_aspect_ratio(&self, size: Size) -> Size {
        if self.is_tight() {
            return self.min;
        }
        if size.width <= 0 || size.height <= 0 || !size.is_finite() {
            return self.constrain(size);
        }

        let ratio = size.width as f64 / size.height as f64;
        let mut width = size.width as f64;
        let mut height = size.height as f64;

        if self.max.width != INF && width > self.max.width as f64 {
            width = self.max.width as f64;
            height = width / ratio;
        }
        if self.max.height != INF && height > self.max.height as f64 {
            height = self.max.height as f64;
            width = height * ratio;
        }
        if width < self.min.width as f64 {
            width = self.min.width as f64;
            height = width / ratio;
        }
        if height < self.min.height as f64 {
            height = self.min.height as f64;
            width = height * ratio;
        }

        self.constrain(Size::new(width as i32, height as i32))
    }

    /// Subtracts `width`/`height` from both bounds of each axis, floored at
    /// zero. Unbounded axes stay unbounded.
    pub fn inset(&self, width: i32, height: i32) -> Self {
        let min_width = guard_inf(self.min.width, (self.min.width - width).max(0));
        let min_height = guard_inf(self.min.height, (self.min.height - height).max(0));
        let max_width = guard_inf(self.max.width, self.max.width - width).max(min_width);
        let max_height = guard_inf(self.max.height, self.max.height - height).max(min_height);
        Self::new(
            Size::new(min_width, min_height),
            Size::new(max_width, max_height),
        )
    }

    pub fn loosen(&self) -> Self {
        Self::new(Size::ZERO, self.max)
    }

    pub fn loosen_width(&self) -> Self {
        Self::new(Size::new(0, self.min.height), self.max)
    }

    pub fn loosen_height(&self) -> Self {
        Self::new(Size::new(self.min.width, 0), self.max)
    }

    /// Makes both axes tight at `size`, clamped into the current bounds.
    pub fn tighten(&self, size: Size) -> Self {
        let size = self.constrain(size);
        Self::new(size, size)
    }

    pub fn tighten_width(&self, width: i32) -> Self {
        let width = width.clamp(self.min.width, self.max.width);
        Self::new(
            Size::new(width, self.min.height),
            Size::new(width, self.max.height),
        )
    }

    pub fn tighten_height(&self, height: i32) -> Self {
        let height = height.clamp(self.min.height, self.max.height);
        Self::new(
            Size::new(self.min.width, height),
            Size::new(self.max.width, height),
        )
    }

    pub fn has_bounded_width(&self) -> bool {
        self.max.width != INF
    }

    pub fn has_bounded_height(&self) -> bool {
        self.max.height != INF
    }

    pub fn has_tight_width(&self) -> bool {
        self.min.width == self.max.width
    }

    pub fn has_tight_height(&self) -> bool {
        self.min.height == self.max.height
    }

    pub fn is_bounded(&self) -> bool {
        self.has_bounded_width() && self.has_bounded_height()
    }

    pub fn is_tight(&self) -> bool {
        self.has_tight_width() && self.has_tight_height()
    }

    /// Nothing but the empty size satisfies these constraints.
    pub fn is_zero(&self) -> bool {
        self.max == Size::ZERO
    }

    pub fn is_normalized(&self) -> bool {
        0 <= self.min.width
            && self.min.width <= self.max.width
            && 0 <= self.min.height
            && self.min.height <= self.max.height
    }

    /// `size` is finite and lies within the bounds.
    pub fn is_satisfied_by(&self, size: Size) -> bool {
        size.is_finite()
            && (self.min.width..=self.max.width).contains(&size.width)
            && (self.min.height..=self.max.height).contains(&size.height)
    }

    // Axis-generic helpers for stacks.

    pub(crate) fn has_bounded_cross(&self, dir: FlexDir) -> bool {
        self.max.cross(dir) != INF
    }

    pub(crate) fn tighten_main(&self, dir: FlexDir, v: i32) -> Self {
        match dir {
            FlexDir::Row => self.tighten_width(v),
            FlexDir::Column => self.tighten_height(v),
        }
    }

    pub(crate) fn tighten_cross(&self, dir: FlexDir, v: i32) -> Self {
        match dir {
            FlexDir::Row => self.tighten_height(v),
            FlexDir::Column => self.tighten_width(v),
        }
    }

    pub(crate) fn loosen_cross(&self, dir: FlexDir) -> Self {
        match dir {
            FlexDir::Row => self.loosen_height(),
            FlexDir::Column => self.loosen_width(),
        }
    }

    /// Main axis becomes `[0, INF]`.
    pub(crate) fn unbound_main(&self, dir: FlexDir) -> Self {
        let mut c = *self;
        match dir {
            FlexDir::Row => {
                c.min.width = 0;
                c.max.width = INF;
            }
            FlexDir::Column => {
                c.min.height = 0;
                c.max.height = INF;
            }
        }
        c
    }

    /// Main axis becomes `[0, max]`.
    pub(crate) fn loosen_main(&self, dir: FlexDir) -> Self {
        match dir {
            FlexDir::Row => self.loosen_width(),
            FlexDir::Column => self.loosen_height(),
        }
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.min, self.max)
    }
}
