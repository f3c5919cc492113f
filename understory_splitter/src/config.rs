// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitter-wide configuration.

use crate::Layout;

/// Default thickness of a bar along the main axis, in pixels.
pub const DEFAULT_BAR_SIZE: f64 = 2.0;

/// When `on_resize` fires while a lazy drag is in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LazyResizeNotify {
    /// Only once, when the drag is committed.
    #[default]
    OnCommit,
    /// On every move, with the previewed (uncommitted) sizes. The commit only
    /// fires `on_resize_end`.
    OnMove,
}

/// Configuration of a [`Splitter`](crate::Splitter).
///
/// ```
/// use understory_splitter::{Layout, SplitterConfig};
///
/// let config = SplitterConfig::default()
///     .with_layout(Layout::Vertical)
///     .with_lazy(true);
/// assert!(config.lazy);
/// assert_eq!(config.bar_size, 2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SplitterConfig {
    /// Main-axis orientation.
    pub layout: Layout,
    /// Defer size changes until the drag ends, showing only a preview meanwhile.
    pub lazy: bool,
    /// Bar thickness along the main axis, in pixels.
    pub bar_size: f64,
    /// `on_resize` policy for lazy drags.
    pub lazy_resize: LazyResizeNotify,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            layout: Layout::Horizontal,
            lazy: false,
            bar_size: DEFAULT_BAR_SIZE,
            lazy_resize: LazyResizeNotify::OnCommit,
        }
    }
}

impl SplitterConfig {
    /// Sets the orientation.
    #[must_use]
    pub const fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Enables or disables lazy resizing.
    #[must_use]
    pub const fn with_lazy(mut self, lazy: bool) -> Self {
        self.lazy = lazy;
        self
    }

    /// Sets the bar thickness. Negative values are treated as `0`.
    #[must_use]
    pub fn with_bar_size(mut self, bar_size: f64) -> Self {
        self.bar_size = bar_size.max(0.0);
        self
    }

    /// Sets the `on_resize` policy for lazy drags.
    #[must_use]
    pub const fn with_lazy_resize(mut self, notify: LazyResizeNotify) -> Self {
        self.lazy_resize = notify;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_defaults() {
        let config: SplitterConfig =
            serde_json::from_str(r#"{ "layout": "vertical", "lazy": true }"#).unwrap();
        assert_eq!(config.layout, Layout::Vertical);
        assert!(config.lazy);
        assert_eq!(config.bar_size, DEFAULT_BAR_SIZE);
        assert_eq!(config.lazy_resize, LazyResizeNotify::OnCommit);

        let config: SplitterConfig =
            serde_json::from_str(r#"{ "lazy_resize": "on_move" }"#).unwrap();
        assert_eq!(config.lazy_resize, LazyResizeNotify::OnMove);
    }
}
