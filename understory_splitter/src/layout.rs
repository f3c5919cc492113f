// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orientation, initial size derivation, and pixel geometry of panels and bars.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::PanelProps;

/// Main-axis orientation of a splitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Layout {
    /// Panels are laid out left to right; bars are vertical.
    #[default]
    Horizontal,
    /// Panels are laid out top to bottom; bars are horizontal.
    Vertical,
}

impl Layout {
    /// The coordinate of `point` along the main axis.
    #[must_use]
    pub const fn main(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// The extent of `size` along the main axis.
    #[must_use]
    pub const fn main_extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Returns `true` for [`Layout::Vertical`].
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }

    /// Builds a rect spanning `start..end` on the main axis and the whole of
    /// `container` on the cross axis.
    fn span(self, container: Rect, start: f64, end: f64) -> Rect {
        match self {
            Self::Horizontal => Rect::new(start, container.y0, end, container.y1),
            Self::Vertical => Rect::new(container.x0, start, container.x1, end),
        }
    }

    fn origin(self, container: Rect) -> f64 {
        match self {
            Self::Horizontal => container.x0,
            Self::Vertical => container.y0,
        }
    }
}

/// Per-panel share of the space taken by bars, in pixels.
///
/// `panel_count - 1` bars of `bar_size` sit between the panels; every panel
/// gives up an equal share of that space.
#[must_use]
pub fn gutter(panel_count: usize, bar_size: f64) -> f64 {
    if panel_count == 0 {
        return 0.0;
    }
    let n = panel_count as f64;
    (n - 1.0) * bar_size / n
}

/// Derives the initial percentage size of every panel.
///
/// Panels with a declared size that resolves against `container` keep it.
/// The remaining panels share what is left of `100` equally. When the
/// declared sizes already exceed `100`, the remaining panels get `0` and the
/// declared sizes are kept as they are; overflow is not renormalized.
///
/// Pixel sizes cannot be resolved against an unmeasured container
/// (`container <= 0`) and are treated as unset until it is measured.
///
/// ```
/// use understory_splitter::{PanelProps, PanelSize, initial_sizes};
///
/// let panels = [
///     PanelProps::default().with_size(PanelSize::Percent(40.0)),
///     PanelProps::default(),
///     PanelProps::default(),
/// ];
/// assert_eq!(initial_sizes(&panels, 600.0), vec![40.0, 30.0, 30.0]);
/// ```
#[must_use]
pub fn initial_sizes(panels: &[PanelProps], container: f64) -> Vec<f64> {
    let mut sum = 0.0;
    let mut count = 0_usize;
    let declared: Vec<Option<f64>> = panels
        .iter()
        .map(|panel| {
            let size = panel.declared_size()?.resolve(container)?;
            sum += size;
            count += 1;
            Some(size)
        })
        .collect();

    let unresolved = panels.len() - count;
    let average = if sum > 100.0 || unresolved == 0 {
        0.0
    } else {
        (100.0 - sum) / unresolved as f64
    };

    declared
        .into_iter()
        .map(|size| size.unwrap_or(average))
        .collect()
}

/// Pixel geometry of a splitter's panels and bars.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaneLayout {
    /// One rect per panel, in order.
    pub panels: Vec<Rect>,
    /// One rect per bar; bar `i` sits between panels `i` and `i + 1`.
    pub bars: Vec<Rect>,
}

impl PaneLayout {
    /// Lays out panels with the given percentage `sizes` inside `container`.
    ///
    /// Each panel is `size% of the container minus its gutter share`, and
    /// bars of `bar_size` are placed between consecutive panels.
    #[must_use]
    pub fn compute(layout: Layout, container: Rect, sizes: &[f64], bar_size: f64) -> Self {
        let extent = layout.main_extent(container.size());
        let gutter = gutter(sizes.len(), bar_size);
        let mut panels = Vec::with_capacity(sizes.len());
        let mut bars = Vec::with_capacity(sizes.len().saturating_sub(1));

        let mut cursor = layout.origin(container);
        for (i, size) in sizes.iter().enumerate() {
            let length = (extent * size / 100.0 - gutter).max(0.0);
            panels.push(layout.span(container, cursor, cursor + length));
            cursor += length;
            if i + 1 < sizes.len() {
                bars.push(layout.span(container, cursor, cursor + bar_size));
                cursor += bar_size;
            }
        }

        Self { panels, bars }
    }

    /// Returns the index of the bar containing `point`, if any.
    #[must_use]
    pub fn bar_at(&self, point: Point) -> Option<usize> {
        self.bars.iter().position(|bar| bar.contains(point))
    }

    /// Returns the index of the panel containing `point`, if any.
    #[must_use]
    pub fn panel_at(&self, point: Point) -> Option<usize> {
        self.panels.iter().position(|panel| panel.contains(point))
    }
}
