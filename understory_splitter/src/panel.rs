// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panel descriptors supplied by the host.

use crate::PanelSize;

/// Which edges of a panel expose a collapse affordance.
///
/// `end` is the edge shared with the bar *after* the panel and `start` the edge
/// shared with the bar *before* it. A panel that is collapsible from its end is
/// collapsed by the start arrow of its trailing bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Collapsible {
    /// May collapse into, or expand from, the previous panel.
    pub start: bool,
    /// May collapse into, or expand from, the next panel.
    pub end: bool,
}

impl Collapsible {
    /// Neither edge is collapsible.
    pub const NONE: Self = Self {
        start: false,
        end: false,
    };

    /// Both edges are collapsible.
    pub const BOTH: Self = Self {
        start: true,
        end: true,
    };

    /// Returns `true` if either edge is collapsible.
    #[must_use]
    pub const fn any(self) -> bool {
        self.start || self.end
    }
}

impl From<bool> for Collapsible {
    fn from(value: bool) -> Self {
        if value { Self::BOTH } else { Self::NONE }
    }
}

/// Declared properties of one panel.
///
/// Descriptors are plain data. Build them with struct update syntax or the
/// `with_*` helpers:
///
/// ```
/// use understory_splitter::{PanelProps, PanelSize};
///
/// let sidebar = PanelProps::default()
///     .with_default_size(PanelSize::Pixels(240.0))
///     .with_min(PanelSize::Percent(10.0))
///     .with_collapsible(true);
/// assert!(sidebar.resizable);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelProps {
    /// Controlled size. Takes precedence over `default_size`, and changing it
    /// re-derives every panel's size.
    pub size: Option<PanelSize>,
    /// Initial size, used only when `size` is unset.
    pub default_size: Option<PanelSize>,
    /// Lower bound. Unset means `0`.
    pub min: Option<PanelSize>,
    /// Upper bound. Unset means "whatever keeps the neighbor pair's total".
    pub max: Option<PanelSize>,
    /// Whether the bar after this panel may be dragged.
    pub resizable: bool,
    /// Collapse affordances.
    pub collapsible: Collapsible,
}

impl Default for PanelProps {
    fn default() -> Self {
        Self {
            size: None,
            default_size: None,
            min: None,
            max: None,
            resizable: true,
            collapsible: Collapsible::NONE,
        }
    }
}

impl PanelProps {
    /// Sets the controlled size.
    #[must_use]
    pub fn with_size(mut self, size: PanelSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the initial size.
    #[must_use]
    pub fn with_default_size(mut self, size: PanelSize) -> Self {
        self.default_size = Some(size);
        self
    }

    /// Sets the lower bound.
    #[must_use]
    pub fn with_min(mut self, min: PanelSize) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the upper bound.
    #[must_use]
    pub fn with_max(mut self, max: PanelSize) -> Self {
        self.max = Some(max);
        self
    }

    /// Sets whether the trailing bar may be dragged.
    #[must_use]
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Sets the collapse affordances.
    #[must_use]
    pub fn with_collapsible(mut self, collapsible: impl Into<Collapsible>) -> Self {
        self.collapsible = collapsible.into();
        self
    }

    /// The size used for the initial layout: `size`, falling back to `default_size`.
    #[must_use]
    pub fn declared_size(&self) -> Option<PanelSize> {
        self.size.or(self.default_size)
    }
}
