//! Layout context carried through one layout pass.
//!
//! The caller creates a `LayoutCx` and hands it by `&mut` to the root's
//! `layout` and `set_bounds`. It is the only switch for constraint tracing;
//! there is no process-wide flag.

use super::{Constraints, Rect, Size};

/// `log` target for constraint traces.
pub const TRACE_TARGET: &str = "trellis::layout";

#[derive(Debug, Default)]
pub struct LayoutCx {
    trace: bool,
    depth: usize,
    layout_calls: usize,
}

impl LayoutCx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `trace` records for every node visited in this pass.
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }

    pub fn is_tracing(&self) -> bool {
        self.trace && log::log_enabled!(target: TRACE_TARGET, log::Level::Trace)
    }

    /// Number of node `layout` calls since this context was created.
    pub fn layout_calls(&self) -> usize {
        self.layout_calls
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn enter_layout(&mut self, name: &str, bc: Constraints) {
        self.layout_calls += 1;
        if self.is_tracing() {
            log::trace!(target: TRACE_TARGET, "{:indent$}{name} {bc}", "", indent = self.depth * 2);
        }
        self.depth += 1;
    }

    pub(crate) fn exit_layout(&mut self, name: &str, size: Size) {
        self.depth = self.depth.saturating_sub(1);
        if self.is_tracing() {
            log::trace!(target: TRACE_TARGET, "{:indent$}{name} -> {size}", "", indent = self.depth * 2);
        }
    }

    pub(crate) fn enter_bounds(&mut self, name: &str, bounds: Rect) {
        if self.is_tracing() {
            log::trace!(target: TRACE_TARGET, "{:indent$}{name} bounds {bounds}", "", indent = self.depth * 2);
        }
        self.depth += 1;
    }

    pub(crate) fn exit_bounds(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_depth() {
        let mut cx = LayoutCx::new();
        cx.enter_layout("VBox", Constraints::unbounded());
        cx.enter_layout("Canvas", Constraints::unbounded());
        assert_eq!(cx.depth(), 2);
        cx.exit_layout("Canvas", Size::ZERO);
        cx.exit_layout("VBox", Size::ZERO);
        assert_eq!(cx.depth(), 0);
        assert_eq!(cx.layout_calls(), 2);
    }

    #[test]
    fn test_trace_off_by_default() {
        assert!(!LayoutCx::new().is_tracing());
    }
}
