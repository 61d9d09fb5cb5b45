//! Grid of cells sized by their content.
//!
//! Column widths and row heights are the max-content sizes of their widest /
//! tallest cell; every cell is then laid out again to fill its slot exactly.
//! Surplus space in the table's rect is left unused. A bound narrower (or
//! shorter) than the max-content total clamps the reported size only: cells
//! keep their slots and overflow the table's rect.

use super::{
    Constraints, Layout, LayoutCx, Node, Rect, Size,
    constraints::scale,
    size::{add_extent, guard_inf},
};

#[derive(Default)]
pub struct TableLayout {
    rows: usize,
    cols: usize,
    sized: bool,
    cells: Vec<Option<Node>>, // row-major, rows * cols

    col_widths: Vec<i32>,
    row_heights: Vec<i32>,
}

impl TableLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(rows: usize, cols: usize) -> Self {
        let mut table = Self::new();
        table.set_size(rows, cols);
        table
    }

    /// Fixes the grid dimensions. A table can only be sized once.
    pub fn set_size(&mut self, rows: usize, cols: usize) {
        assert!(!self.sized, "table already sized to {}x{}", self.rows, self.cols);
        self.rows = rows;
        self.cols = cols;
        self.sized = true;
        self.cells = std::iter::repeat_with(|| None).take(rows * cols).collect();
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of range for {}x{} table",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Puts `child` at (`row`, `col`), dropping whatever was there.
    pub fn set_cell(&mut self, row: usize, col: usize, child: impl Into<Node>) {
        let i = self.index(row, col);
        self.cells[i] = Some(child.into());
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Node> {
        self.cells[self.index(row, col)].as_ref()
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Node> {
        let i = self.index(row, col);
        self.cells[i].as_mut()
    }

    /// Occupied cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Node> {
        self.cells.iter().flatten()
    }

    pub fn col_widths(&self) -> &[i32] {
        &self.col_widths
    }

    pub fn row_heights(&self) -> &[i32] {
        &self.row_heights
    }

    fn live_cell(&self, row: usize, col: usize) -> Option<&Node> {
        self.cells[row * self.cols + col]
            .as_ref()
            .filter(|n| !n.is_collapsed())
    }
}

impl Layout for TableLayout {
    fn layout(&mut self, cx: &mut LayoutCx, bc: Constraints) -> Size {
        let cols = self.cols;
        self.col_widths = vec![0; cols];
        self.row_heights = vec![0; self.rows];

        for (i, cell) in self.cells.iter_mut().enumerate() {
            let Some(node) = cell.as_mut().filter(|n| !n.is_collapsed()) else {
                continue;
            };
            let size = node.layout(cx, Constraints::unbounded());
            let (r, c) = (i / cols, i % cols);
            self.col_widths[c] = self.col_widths[c].max(size.width);
            self.row_heights[r] = self.row_heights[r].max(size.height);
        }

        for (i, cell) in self.cells.iter_mut().enumerate() {
            let Some(node) = cell.as_mut().filter(|n| !n.is_collapsed()) else {
                continue;
            };
            let slot = Size::new(self.col_widths[i % cols], self.row_heights[i / cols]);
            node.layout(cx, Constraints::tight(slot));
        }

        let width = self.col_widths.iter().copied().fold(0, add_extent);
        let height = self.row_heights.iter().copied().fold(0, add_extent);
        bc.constrain(Size::new(width, height))
    }

    fn set_bounds(&mut self, cx: &mut LayoutCx, bounds: Rect) {
        assert!(
            self.col_widths.len() == self.cols && self.row_heights.len() == self.rows,
            "TableLayout::set_bounds called before layout"
        );
        let cols = self.cols;
        let mut col_x = Vec::with_capacity(cols);
        let mut x = bounds.x();
        for w in &self.col_widths {
            col_x.push(x);
            x += w;
        }

        let mut y = bounds.y();
        for (r, row) in self.cells.chunks_mut(cols.max(1)).enumerate() {
            let h = self.row_heights[r];
            for (c, cell) in row.iter_mut().enumerate() {
                if let Some(node) = cell.as_mut().filter(|n| !n.is_collapsed()) {
                    node.set_bounds(cx, Rect::from_xywh(col_x[c], y, self.col_widths[c], h));
                }
            }
            y += h;
        }
    }

    fn min_intrinsic_width(&self, height: i32) -> i32 {
        let row_height = guard_inf(height, scale(height, 1, self.rows.max(1) as i64));
        (0..self.cols)
            .map(|c| {
                (0..self.rows)
                    .filter_map(|r| self.live_cell(r, c))
                    .map(|n| n.min_intrinsic_width(row_height))
                    .max()
                    .unwrap_or(0)
            })
            .fold(0, add_extent)
    }

    fn min_intrinsic_height(&self, width: i32) -> i32 {
        let col_width = guard_inf(width, scale(width, 1, self.cols.max(1) as i64));
        (0..self.rows)
            .map(|r| {
                (0..self.cols)
                    .filter_map(|c| self.live_cell(r, c))
                    .map(|n| n.min_intrinsic_height(col_width))
                    .max()
                    .unwrap_or(0)
            })
            .fold(0, add_extent)
    }
}
