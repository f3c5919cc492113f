// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bars between panels and the raw input they forward.
//!
//! A bar makes no sizing decisions. Hosts translate their native events into
//! [`BarInput`] (events that land on a bar) and [`WindowInput`] (events
//! delivered through the drag's [`PointerSubscription`](crate::PointerSubscription)),
//! and hand them to [`Splitter::handle_bar_input`](crate::Splitter::handle_bar_input)
//! and [`Splitter::handle_window_input`](crate::Splitter::handle_window_input).

use kurbo::Point;

/// Which collapse affordance of a bar was activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CollapseEdge {
    /// The arrow pointing toward the start of the axis. Collapses the panel
    /// before the bar, or expands a collapsed panel after it.
    Start,
    /// The arrow pointing toward the end of the axis. Collapses the panel
    /// after the bar, or expands a collapsed panel before it.
    End,
}

/// Render-facing description of one bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitBar {
    /// Bar index; the bar sits between panels `index` and `index + 1`.
    pub index: usize,
    /// Whether the dragger accepts drags.
    pub resizable: bool,
    /// Whether the start collapse arrow is shown.
    pub start_collapsible: bool,
    /// Whether the end collapse arrow is shown.
    pub end_collapsible: bool,
    /// Whether this bar is being dragged.
    pub active: bool,
}

/// Input that lands on a bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BarInput<'a> {
    /// Primary button pressed on the dragger.
    MouseDown(Point),
    /// Touches present when a touch started on the dragger.
    TouchStart(&'a [Point]),
    /// A collapse arrow was clicked.
    Collapse(CollapseEdge),
}

/// Input delivered to an active drag from outside the bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WindowInput<'a> {
    /// The mouse moved.
    MouseMove(Point),
    /// Touches present after a touch moved.
    TouchMove(&'a [Point]),
    /// The mouse button was released.
    MouseUp,
    /// The touch ended.
    TouchEnd,
    /// A context menu was requested; ends the drag like a release.
    ContextMenu,
    /// The window lost focus; ends the drag like a release.
    Blur,
}

/// Returns the only touch point, or `None` for zero or several touches.
pub(crate) fn single_touch(touches: &[Point]) -> Option<Point> {
    match touches {
        [touch] => Some(*touch),
        _ => None,
    }
}
