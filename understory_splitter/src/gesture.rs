// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gesture state as an explicit, immutable state machine value.
//!
//! A splitter is either [`GestureState::Idle`] or dragging exactly one bar.
//! Transitions never mutate a state in place; they return the next state,
//! which keeps the single-active-gesture rule visible at every call site:
//!
//! ```
//! use kurbo::Point;
//! use understory_splitter::GestureState;
//!
//! let idle = GestureState::Idle;
//! let dragging = idle.begin(0, Point::new(100.0, 5.0), &[50.0, 50.0]).unwrap();
//! assert_eq!(dragging.active_bar(), Some(0));
//!
//! // A second gesture cannot start while one is active.
//! assert!(dragging.begin(0, Point::new(10.0, 5.0), &[50.0, 50.0]).is_none());
//!
//! let snapshot = dragging.finish().unwrap();
//! assert_eq!(snapshot.bar_index, 0);
//! ```

use kurbo::Point;
use smallvec::SmallVec;

/// Panel sizes, inline for the common case of a handful of panels.
pub type Sizes = SmallVec<[f64; 4]>;

/// What a drag remembers from its first pointer-down.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSnapshot {
    /// The bar being dragged; it sits between panels `bar_index` and `bar_index + 1`.
    pub bar_index: usize,
    /// Pointer position when the drag began.
    pub origin: Point,
    /// Panel sizes when the drag began. Every move is resolved against these.
    pub start_sizes: Sizes,
    /// Uncommitted change of the previous panel's size, in percent.
    ///
    /// Only lazy drags hold a preview; live drags apply every move at once and
    /// keep this at `0`.
    pub preview: f64,
    /// Whether a lazy move has been recorded since the drag began or was
    /// last rebased. A lazy drag that never moved commits nothing.
    pub moved: bool,
}

/// The drag state of a splitter.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum GestureState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A bar is being dragged.
    Dragging(DragSnapshot),
}

impl GestureState {
    /// Starts dragging `bar_index` from `origin`.
    ///
    /// Returns `None` if a drag is already active; the caller keeps the
    /// current state and ignores the new gesture.
    #[must_use]
    pub fn begin(&self, bar_index: usize, origin: Point, sizes: &[f64]) -> Option<Self> {
        match self {
            Self::Dragging(_) => None,
            Self::Idle => Some(Self::Dragging(DragSnapshot {
                bar_index,
                origin,
                start_sizes: Sizes::from_slice(sizes),
                preview: 0.0,
                moved: false,
            })),
        }
    }

    /// Returns this state with the lazy preview replaced by `preview`, marking
    /// the drag as moved.
    ///
    /// Idle states are returned unchanged.
    #[must_use]
    pub fn with_preview(&self, preview: f64) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Dragging(drag) => Self::Dragging(DragSnapshot {
                preview,
                moved: true,
                ..drag.clone()
            }),
        }
    }

    /// Returns this state re-based on new panel sizes, dropping any preview.
    ///
    /// Used when the sizes are re-derived underneath an active drag.
    #[must_use]
    pub fn rebased(&self, sizes: &[f64]) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Dragging(drag) => Self::Dragging(DragSnapshot {
                start_sizes: Sizes::from_slice(sizes),
                preview: 0.0,
                moved: false,
                ..drag.clone()
            }),
        }
    }

    /// Ends the gesture, yielding its snapshot if one was active.
    #[must_use]
    pub fn finish(self) -> Option<DragSnapshot> {
        match self {
            Self::Idle => None,
            Self::Dragging(drag) => Some(drag),
        }
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// The active drag, if any.
    #[must_use]
    pub const fn snapshot(&self) -> Option<&DragSnapshot> {
        match self {
            Self::Idle => None,
            Self::Dragging(drag) => Some(drag),
        }
    }

    /// The bar being dragged, if any.
    #[must_use]
    pub const fn active_bar(&self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Dragging(drag) => Some(drag.bar_index),
        }
    }

    /// The uncommitted lazy preview, or `0` when idle.
    #[must_use]
    pub const fn preview(&self) -> f64 {
        match self {
            Self::Idle => 0.0,
            Self::Dragging(drag) => drag.preview,
        }
    }
}
