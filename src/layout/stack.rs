//! VBox / HBox: children stacked along one axis.
//!
//! Both orientations share one implementation; every computation is written in
//! terms of the main axis (the stacking direction) and the cross axis.

use super::{
    Constraints, Layout, LayoutCx, Node, Rect, Size,
    constraints::scale,
    size::{INF, add_extent, guard_inf},
};
use crate::style::{CrossAlign, FlexDir, Justify};

/// A child of a stack together with its flex weight and the size measured for
/// it by the last `layout`.
pub struct BoxChild {
    pub node: Node,
    pub flex: u32,
    size: Size,
}

impl BoxChild {
    /// Size cached by the last `layout`; stale until `layout` runs again.
    pub fn measured_size(&self) -> Size {
        self.size
    }
}

pub struct Stack {
    dir: FlexDir,
    children: Vec<BoxChild>,
    justify: Justify,
    align: CrossAlign,

    total_flex: u32,
    total_extent: i32, // main-axis sum from the last layout
}

impl Stack {
    pub fn new(dir: FlexDir) -> Self {
        Self {
            dir,
            children: Vec::new(),
            justify: Justify::Start,
            align: CrossAlign::Start,
            total_flex: 0,
            total_extent: 0,
        }
    }

    /// Children flow top to bottom.
    pub fn vbox() -> Self {
        Self::new(FlexDir::Column)
    }

    /// Children flow left to right.
    pub fn hbox() -> Self {
        Self::new(FlexDir::Row)
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn align(mut self, align: CrossAlign) -> Self {
        self.align = align;
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.push(node, 0);
        self
    }

    pub fn flex(mut self, node: impl Into<Node>, flex: u32) -> Self {
        self.push(node, flex);
        self
    }

    /// Appends a child. A non-zero `flex` lets it absorb leftover main-axis
    /// space in proportion to its weight.
    pub fn push(&mut self, node: impl Into<Node>, flex: u32) {
        self.children.push(BoxChild {
            node: node.into(),
            flex,
            size: Size::ZERO,
        });
    }

    /// Removes and returns the child at `index`, with its subtree.
    pub fn remove(&mut self, index: usize) -> Node {
        self.children.remove(index).node
    }

    pub fn dir(&self) -> FlexDir {
        self.dir
    }

    pub fn name(&self) -> &'static str {
        match self.dir {
            FlexDir::Row => "HBox",
            FlexDir::Column => "VBox",
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().map(|c| &c.node)
    }

    pub fn child_at(&self, index: usize) -> Option<&BoxChild> {
        self.children.get(index)
    }

    pub fn child_at_mut(&mut self, index: usize) -> Option<&mut BoxChild> {
        self.children.get_mut(index)
    }

    pub fn total_flex(&self) -> u32 {
        self.total_flex
    }

    pub fn total_extent(&self) -> i32 {
        self.total_extent
    }

    fn visible_count(&self) -> usize {
        self.children.iter().filter(|c| !c.node.is_collapsed()).count()
    }

    fn visible_mut(&mut self) -> impl Iterator<Item = &mut BoxChild> {
        self.children.iter_mut().filter(|c| !c.node.is_collapsed())
    }

    fn visible(&self) -> impl Iterator<Item = &BoxChild> {
        self.children.iter().filter(|c| !c.node.is_collapsed())
    }

    /// Smallest main extent given a cross extent.
    fn min_intrinsic_main(&self, cross: i32) -> i32 {
        let main = |c: &BoxChild| match self.dir {
            FlexDir::Row => c.node.min_intrinsic_width(cross),
            FlexDir::Column => c.node.min_intrinsic_height(cross),
        };
        if self.justify == Justify::Homogeneous {
            let count = self.visible_count() as i32;
            let largest = self.visible().map(main).max().unwrap_or(0);
            if largest == INF {
                return INF;
            }
            largest.saturating_mul(count)
        } else {
            self.visible().map(main).fold(0, add_extent)
        }
    }

    /// Smallest cross extent given a main extent.
    fn min_intrinsic_cross(&self, main: i32) -> i32 {
        let child_main = if self.justify == Justify::Homogeneous {
            guard_inf(main, scale(main, 1, self.visible_count().max(1) as i64))
        } else {
            INF
        };
        self.visible()
            .map(|c| match self.dir {
                FlexDir::Row => c.node.min_intrinsic_height(child_main),
                FlexDir::Column => c.node.min_intrinsic_width(child_main),
            })
            .max()
            .unwrap_or(0)
    }

    /// Constraints handed to every child in the measuring pass.
    fn child_constraints(&self, bc: Constraints, count: usize) -> Constraints {
        let dir = self.dir;
        let max_main = bc.max.main(dir);

        let cbc = if self.justify == Justify::Homogeneous && max_main != INF {
            bc.loosen_main(dir)
                .tighten_main(dir, scale(max_main, 1, count as i64))
        } else {
            bc.unbound_main(dir)
        };

        if self.align == CrossAlign::Stretch {
            let cross = if bc.has_bounded_cross(dir) {
                cbc.max.cross(dir)
            } else {
                self.min_intrinsic_cross(INF)
            };
            cbc.tighten_cross(dir, cross)
        } else {
            cbc.loosen_cross(dir)
        }
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::vbox()
    }
}

impl Layout for Stack {
    fn layout(&mut self, cx: &mut LayoutCx, bc: Constraints) -> Size {
        let dir = self.dir;
        let count = self.visible_count();
        if count == 0 {
            self.total_flex = 0;
            self.total_extent = 0;
            return bc.constrain(Size::ZERO);
        }

        self.total_flex = if self.justify == Justify::Homogeneous {
            0
        } else {
            self.visible().map(|c| c.flex).sum()
        };

        let cbc = self.child_constraints(bc, count);

        let mut total = 0;
        let mut cross_extent = 0;
        for child in self.visible_mut() {
            child.size = child.node.layout(cx, cbc);
            total = add_extent(total, child.size.main(dir));
            cross_extent = cross_extent.max(child.size.cross(dir));
        }

        // Single flex pass: no second round even if a child's cross size moves.
        let total_flex = self.total_flex;
        if total_flex > 0 {
            let (min_main, max_main) = (bc.min.main(dir), bc.max.main(dir));
            let bound = if max_main != INF && max_main > total {
                max_main
            } else if min_main > total {
                min_main
            } else {
                0
            };
            let extra = (bound - total).max(0);
            if extra > 0 {
                for child in self.visible_mut().filter(|c| c.flex > 0) {
                    let allot = scale(extra, child.flex as i64, total_flex as i64);
                    let old = child.size.main(dir);
                    let tight = cbc.tighten_main(dir, old + allot);
                    child.size = child.node.layout(cx, tight);
                    total = add_extent(total - old, child.size.main(dir));
                    cross_extent = cross_extent.max(child.size.cross(dir));
                }
            }
        }
        self.total_extent = total;

        let cross = if self.align == CrossAlign::Stretch {
            cbc.max.cross(dir)
        } else {
            cross_extent
        };
        bc.constrain(Size::from_main_cross(dir, total, cross))
    }

    fn set_bounds(&mut self, cx: &mut LayoutCx, bounds: Rect) {
        let dir = self.dir;
        let align = self.align;
        let count = self.visible_count();
        if count == 0 {
            return;
        }

        let start = bounds.main_start(dir);
        let extent = bounds.size.main(dir);
        let cross_start = bounds.cross_start(dir);
        let cross_extent = bounds.size.cross(dir);

        let place = |child: &mut BoxChild, cx: &mut LayoutCx, pos: i32, len: i32| {
            let size = child.size.cross(dir);
            let (cross_pos, cross_len) = match align {
                CrossAlign::Start => (cross_start, size),
                CrossAlign::Center => (cross_start + (cross_extent - size) / 2, size),
                CrossAlign::End => (cross_start + cross_extent - size, size),
                CrossAlign::Stretch => (cross_start, cross_extent),
            };
            let rect = Rect::from_main_cross(dir, pos, cross_pos, len, cross_len);
            child.node.set_bounds(cx, rect);
        };

        if self.justify == Justify::Homogeneous {
            for (i, child) in self.visible_mut().enumerate() {
                let p0 = start + scale(extent, i as i64, count as i64);
                let p1 = start + scale(extent, i as i64 + 1, count as i64);
                place(child, cx, p0, p1 - p0);
            }
            return;
        }

        // Flexible children already consumed the slack.
        let extra = (extent - self.total_extent).max(0);
        let (mut pos, gap) = if self.total_flex > 0 || extra == 0 {
            (start, 0)
        } else {
            match self.justify {
                Justify::Start | Justify::Homogeneous => (start, 0),
                Justify::Center => (start + extra / 2, 0),
                Justify::End => (start + extra, 0),
                Justify::SpaceAround => {
                    let gap = scale(extra, 1, count as i64 + 1);
                    (start + gap, gap)
                }
                Justify::SpaceBetween if count > 1 => (start, scale(extra, 1, count as i64 - 1)),
                Justify::SpaceBetween => (start + extra / 2, 0),
            }
        };

        for child in self.visible_mut() {
            let len = child.size.main(dir);
            place(child, cx, pos, len);
            pos += len + gap;
        }
    }

    fn min_intrinsic_width(&self, height: i32) -> i32 {
        match self.dir {
            FlexDir::Row => self.min_intrinsic_main(height),
            FlexDir::Column => self.min_intrinsic_cross(height),
        }
    }

    fn min_intrinsic_height(&self, width: i32) -> i32 {
        match self.dir {
            FlexDir::Row => self.min_intrinsic_cross(width),
            FlexDir::Column => self.min_intrinsic_main(width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        layout::Spacer,
        style::Visibility,
        widgets::{Canvas, Text, Widget},
    };

    fn canvas(w: i32, h: i32) -> Node {
        Node::widget(Canvas::new(w, h))
    }

    fn bounds_of(stack: &Stack) -> Vec<Rect> {
        stack.children().map(|n| n.bounds()).collect()
    }

    fn run(stack: &mut Stack, bc: Constraints, rect: Rect) -> Size {
        let mut cx = LayoutCx::new();
        let size = stack.layout(&mut cx, bc);
        stack.set_bounds(&mut cx, rect);
        size
    }

    #[test]
    fn test_empty_stack() {
        let mut stack = Stack::vbox();
        let bc = Constraints::new(Size::new(10, 20), Size::new(100, 100));
        let size = run(&mut stack, bc, Rect::from_xywh(0, 0, 10, 20));
        assert_eq!(size, Size::new(10, 20));
        assert_eq!(stack.total_extent(), 0);
    }

    #[test]
    fn test_vbox_start_packs_without_gaps() {
        let mut stack = Stack::vbox()
            .child(canvas(10, 30))
            .child(canvas(10, 20))
            .child(canvas(10, 50));
        let size = run(
            &mut stack,
            Constraints::loose(Size::new(100, 200)),
            Rect::from_xywh(0, 0, 100, 200),
        );
        assert_eq!(size, Size::new(10, 100));
        let ys: Vec<i32> = bounds_of(&stack).iter().map(|r| r.y()).collect();
        assert_eq!(ys, vec![0, 30, 50]);
    }

    #[test]
    fn test_hbox_start_packs_without_gaps() {
        let mut stack = Stack::hbox()
            .child(canvas(30, 10))
            .child(canvas(20, 10))
            .child(canvas(50, 10));
        let size = run(
            &mut stack,
            Constraints::loose(Size::new(200, 100)),
            Rect::from_xywh(5, 7, 200, 100),
        );
        assert_eq!(size, Size::new(100, 10));
        let xs: Vec<i32> = bounds_of(&stack).iter().map(|r| r.x()).collect();
        assert_eq!(xs, vec![5, 35, 55]);
        assert!(bounds_of(&stack).iter().all(|r| r.y() == 7));
    }

    #[test]
    fn test_flex_distribution() {
        let mut stack = Stack::vbox().flex(canvas(10, 20), 1).flex(canvas(10, 40), 3);
        let mut cx = LayoutCx::new();
        let size = stack.layout(&mut cx, Constraints::loose(Size::new(100, 100)));

        // 100 - (20 + 40) = 40 extra, split 1:3.
        assert_eq!(stack.child_at(0).unwrap().measured_size().height, 30);
        assert_eq!(stack.child_at(1).unwrap().measured_size().height, 70);
        assert_eq!(stack.total_extent(), 100);
        assert_eq!(size.height, 100);
        // Two measures plus one re-layout per flexible child.
        assert_eq!(cx.layout_calls(), 4);
    }

    #[test]
    fn test_flex_uses_min_when_unbounded() {
        let mut stack = Stack::vbox().child(canvas(10, 20)).flex(canvas(10, 10), 1);
        let bc = Constraints::new(Size::new(0, 50), Size::new(100, INF));
        let size = run(&mut stack, bc, Rect::from_xywh(0, 0, 100, 50));
        assert_eq!(size.height, 50);
        assert_eq!(stack.child_at(1).unwrap().measured_size().height, 30);
    }

    #[test]
    fn test_flex_without_room_is_untouched() {
        let mut stack = Stack::hbox().flex(canvas(60, 10), 1).child(canvas(60, 10));
        let mut cx = LayoutCx::new();
        let size = stack.layout(&mut cx, Constraints::loose(Size::new(100, 100)));
        assert_eq!(size.width, 100);
        assert_eq!(stack.total_extent(), 120);
        assert_eq!(cx.layout_calls(), 2);
    }

    #[test]
    fn test_flex_suppresses_justify() {
        let mut stack = Stack::vbox()
            .justify(Justify::End)
            .flex(canvas(10, 10), 1)
            .child(canvas(10, 10));
        run(
            &mut stack,
            Constraints::loose(Size::new(100, 100)),
            Rect::from_xywh(0, 0, 100, 100),
        );
        let rects = bounds_of(&stack);
        assert_eq!(rects[0], Rect::from_xywh(0, 0, 10, 90));
        assert_eq!(rects[1], Rect::from_xywh(0, 90, 10, 10));
    }

    #[test]
    fn test_justify_center_and_end() {
        let bc = Constraints::loose(Size::new(100, 100));
        let rect = Rect::from_xywh(0, 0, 100, 100);

        let mut stack = Stack::vbox().justify(Justify::Center).child(canvas(10, 20)).child(canvas(10, 20));
        run(&mut stack, bc, rect);
        assert_eq!(bounds_of(&stack)[0].y(), 30);
        assert_eq!(bounds_of(&stack)[1].y(), 50);

        let mut stack = Stack::vbox().justify(Justify::End).child(canvas(10, 20)).child(canvas(10, 20));
        run(&mut stack, bc, rect);
        assert_eq!(bounds_of(&stack)[0].y(), 60);
        assert_eq!(bounds_of(&stack)[1].y(), 80);
    }

    #[test]
    fn test_space_between() {
        let mut stack = Stack::hbox()
            .justify(Justify::SpaceBetween)
            .child(canvas(10, 10))
            .child(canvas(10, 10))
            .child(canvas(10, 10));
        run(
            &mut stack,
            Constraints::loose(Size::new(100, 10)),
            Rect::from_xywh(0, 0, 100, 10),
        );
        let xs: Vec<i32> = bounds_of(&stack).iter().map(|r| r.x()).collect();
        assert_eq!(xs, vec![0, 45, 90]);
    }

    #[test]
    fn test_space_between_single_child_centers() {
        let mut stack = Stack::hbox().justify(Justify::SpaceBetween).child(canvas(10, 10));
        run(
            &mut stack,
            Constraints::loose(Size::new(100, 10)),
            Rect::from_xywh(0, 0, 100, 10),
        );
        assert_eq!(bounds_of(&stack)[0].x(), 45);
    }

    #[test]
    fn test_space_around() {
        let mut stack = Stack::hbox()
            .justify(Justify::SpaceAround)
            .child(canvas(10, 10))
            .child(canvas(10, 10))
            .child(canvas(10, 10));
        run(
            &mut stack,
            Constraints::loose(Size::new(110, 10)),
            Rect::from_xywh(0, 0, 110, 10),
        );
        // 80 leftover, gap = 80 / 4.
        let xs: Vec<i32> = bounds_of(&stack).iter().map(|r| r.x()).collect();
        assert_eq!(xs, vec![20, 50, 80]);
    }

    #[test]
    fn test_overflow_starts_at_leading_edge() {
        let mut stack = Stack::vbox().justify(Justify::End).child(canvas(10, 80)).child(canvas(10, 80));
        run(
            &mut stack,
            Constraints::loose(Size::new(100, 100)),
            Rect::from_xywh(0, 0, 100, 100),
        );
        assert_eq!(bounds_of(&stack)[0].y(), 0);
        assert_eq!(bounds_of(&stack)[1].y(), 80);
    }

    #[test]
    fn test_homogeneous_slices() {
        let mut stack = Stack::vbox()
            .justify(Justify::Homogeneous)
            .flex(canvas(10, 5), 4)
            .child(canvas(10, 50))
            .child(canvas(10, 5));
        let mut cx = LayoutCx::new();
        let size = stack.layout(&mut cx, Constraints::loose(Size::new(100, 100)));
        assert_eq!(stack.total_flex(), 0);
        for c in 0..3 {
            assert_eq!(stack.child_at(c).unwrap().measured_size().height, 33);
        }
        assert_eq!(size.height, 99);

        stack.set_bounds(&mut cx, Rect::from_xywh(0, 0, 100, 100));
        let rects = bounds_of(&stack);
        assert_eq!(rects[0].y(), 0);
        for pair in rects.windows(2) {
            assert_eq!(pair[0].bottom(), pair[1].y());
        }
        assert_eq!(rects[2].bottom(), 100);
        let total: i32 = rects.iter().map(|r| r.height()).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_homogeneous_unbounded_uses_natural_size() {
        let mut stack = Stack::vbox()
            .justify(Justify::Homogeneous)
            .child(canvas(10, 5))
            .child(canvas(10, 50));
        let mut cx = LayoutCx::new();
        let size = stack.layout(&mut cx, Constraints::loose(Size::new(100, INF)));
        assert_eq!(size.height, 55);
    }

    #[test]
    fn test_cross_alignment() {
        let bc = Constraints::loose(Size::new(100, 100));
        let rect = Rect::from_xywh(0, 0, 100, 100);
        let cases = [
            (CrossAlign::Start, 0, 40),
            (CrossAlign::Center, 30, 40),
            (CrossAlign::End, 60, 40),
            (CrossAlign::Stretch, 0, 100),
        ];
        for (align, x, w) in cases {
            let mut stack = Stack::vbox().align(align).child(canvas(40, 10));
            run(&mut stack, bc, rect);
            let r = bounds_of(&stack)[0];
            assert_eq!((r.x(), r.width()), (x, w), "{align:?}");
        }
    }

    #[test]
    fn test_stretch_unbounded_uses_intrinsic() {
        let mut stack = Stack::hbox()
            .align(CrossAlign::Stretch)
            .child(canvas(10, 15))
            .child(canvas(10, 40));
        let mut cx = LayoutCx::new();
        let size = stack.layout(&mut cx, Constraints::unbounded());
        assert_eq!(size, Size::new(20, 40));
        assert_eq!(stack.child_at(0).unwrap().measured_size(), Size::new(10, 40));
    }

    #[test]
    fn test_collapsed_children_are_skipped() {
        for dir in [FlexDir::Row, FlexDir::Column] {
            let mut stack = Stack::new(dir)
                .child(canvas(10, 10))
                .child(canvas(10, 10).with_visibility(Visibility::Collapse))
                .child(canvas(10, 10));
            let size = run(
                &mut stack,
                Constraints::loose(Size::new(100, 100)),
                Rect::from_xywh(0, 0, 100, 100),
            );
            assert_eq!(size.main(dir), 20, "{dir:?}");
            let rects = bounds_of(&stack);
            assert_eq!(rects[1], Rect::default(), "{dir:?}");
            assert_eq!(rects[2], Rect::from_main_cross(dir, 10, 0, 10, 10));
        }
    }

    #[test]
    fn test_hidden_children_keep_their_space() {
        let mut stack = Stack::vbox()
            .child(canvas(10, 10).with_visibility(Visibility::Hidden))
            .child(canvas(10, 10));
        let size = run(
            &mut stack,
            Constraints::loose(Size::new(100, 100)),
            Rect::from_xywh(0, 0, 100, 100),
        );
        assert_eq!(size.height, 20);
        assert_eq!(bounds_of(&stack)[1].y(), 10);
    }

    #[test]
    fn test_intrinsics() {
        let stack = Stack::vbox()
            .child(canvas(30, 10))
            .child(Spacer::new(5, 7))
            .child(canvas(50, 20));
        assert_eq!(stack.min_intrinsic_height(INF), 37);
        assert_eq!(stack.min_intrinsic_width(INF), 50);

        let stack = stack.justify(Justify::Homogeneous);
        assert_eq!(stack.min_intrinsic_height(INF), 60);

        let row = Stack::hbox().child(canvas(30, 10)).child(canvas(50, 20));
        assert_eq!(row.min_intrinsic_width(INF), 80);
        assert_eq!(row.min_intrinsic_height(INF), 20);
    }

    #[test]
    fn test_homogeneous_cross_intrinsic_uses_equal_share() {
        let row = Stack::hbox()
            .child(Node::widget(Text::new("aaaa bbbb")))
            .child(canvas(1, 1));
        // Unbounded slice: the text fits on one line.
        assert_eq!(row.min_intrinsic_height(90), 16);

        // 90 / 2 = 45px per slice, five characters, so the text wraps.
        let row = row.justify(Justify::Homogeneous);
        assert_eq!(row.min_intrinsic_height(90), 32);
    }

    /// Half as wide as it is tall once its height is fixed.
    struct Portrait;

    impl Widget for Portrait {
        fn layout(&mut self, bc: Constraints) -> Size {
            let h = if bc.has_tight_height() { bc.min.height } else { 10 };
            bc.constrain(Size::new(h / 2, h))
        }

        fn set_bounds(&mut self, _bounds: Rect) {}

        fn min_intrinsic_width(&self, height: i32) -> i32 {
            guard_inf(height, height / 2)
        }

        fn min_intrinsic_height(&self, _width: i32) -> i32 {
            10
        }
    }

    #[test]
    fn test_flex_relayout_updates_cross_extent() {
        let mut stack = Stack::vbox().flex(Node::widget(Portrait), 1);
        let mut cx = LayoutCx::new();
        let size = stack.layout(&mut cx, Constraints::loose(Size::new(500, 100)));

        assert_eq!(stack.child_at(0).unwrap().measured_size(), Size::new(50, 100));
        assert_eq!(size, Size::new(50, 100));
        // Measured once, then once more for the flex share.
        assert_eq!(cx.layout_calls(), 2);
    }

    #[test]
    fn test_remove_child() {
        let mut stack = Stack::vbox().child(canvas(1, 1)).child(canvas(2, 2));
        let removed = stack.remove(0);
        assert_eq!(removed.name(), "Canvas");
        assert_eq!(stack.len(), 1);
    }
}
