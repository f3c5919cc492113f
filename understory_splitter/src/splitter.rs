// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The splitter controller: panel registry, layout driver, and resize state machine.

use alloc::vec::Vec;
use core::mem;

use kurbo::{Point, Rect};

use crate::bar::single_touch;
use crate::{
    BarInput, Bounds, CollapseEdge, GestureState, LazyResizeNotify, Layout, PaneLayout,
    PanelProps, PointerSubscription, ResizeHost, Sizes, SplitBar, SplitterConfig,
    WindowInput, initial_sizes, resolve_pair,
};

/// A resizable row or column of panels.
///
/// `Splitter` owns the ordered panel sizes (percentages of the container's
/// main axis) and turns bar input into size changes:
///
/// - [`Splitter::set_panels`] and [`Splitter::set_container_size`] feed it the
///   declared panels and the measured container, deriving initial sizes.
/// - [`Splitter::pointer_down`], [`Splitter::pointer_move`] and
///   [`Splitter::pointer_up`] (or their touch and window-input equivalents)
///   drive a drag of one bar. Live drags update sizes on every move; lazy
///   drags hold a preview and apply it once on release.
/// - [`Splitter::collapse`] collapses or expands the panels next to a bar.
///
/// Size changes are reported through the [`ResizeHost`] `H`.
///
/// ```
/// use kurbo::Point;
/// use understory_splitter::{PanelProps, Splitter, SplitterConfig};
///
/// let mut splitter = Splitter::new(SplitterConfig::default(), vec![PanelProps::default(); 2]);
/// splitter.set_container_size(402.0);
/// assert_eq!(splitter.sizes(), &[50.0, 50.0]);
///
/// // Drag the bar 100px to the right: 400px are available to panels.
/// assert!(splitter.pointer_down(0, Point::new(201.0, 10.0)));
/// splitter.pointer_move(Point::new(301.0, 10.0));
/// splitter.pointer_up();
/// assert_eq!(splitter.sizes(), &[75.0, 25.0]);
/// ```
#[derive(Debug)]
pub struct Splitter<H: ResizeHost = ()> {
    config: SplitterConfig,
    panels: Vec<PanelProps>,
    sizes: Sizes,
    container_size: f64,
    gesture: GestureState,
    subscription: Option<PointerSubscription>,
    /// Size of the panel collapsed at each bar, remembered for expanding it.
    collapsed: Vec<Option<f64>>,
    host: H,
}

impl Splitter {
    /// Creates a splitter without callbacks.
    ///
    /// Sizes are derived right away against an unmeasured container, so pixel
    /// sizes resolve only once [`Splitter::set_container_size`] is called.
    #[must_use]
    pub fn new(config: SplitterConfig, panels: Vec<PanelProps>) -> Self {
        Self::with_host(config, panels, ())
    }
}

impl<H: ResizeHost> Splitter<H> {
    /// Creates a splitter reporting to `host`.
    #[must_use]
    pub fn with_host(config: SplitterConfig, panels: Vec<PanelProps>, host: H) -> Self {
        let mut splitter = Self {
            config,
            panels,
            sizes: Sizes::new(),
            container_size: 0.0,
            gesture: GestureState::Idle,
            subscription: None,
            collapsed: Vec::new(),
            host,
        };
        splitter.rederive();
        splitter
    }

    // -- registry -----------------------------------------------------------

    /// The configuration.
    #[must_use]
    pub const fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// The orientation.
    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.config.layout
    }

    /// Changes the orientation.
    ///
    /// The host is expected to re-measure the container along the new main
    /// axis and report it through [`Splitter::set_container_size`].
    pub fn set_layout(&mut self, layout: Layout) {
        self.config.layout = layout;
    }

    /// Switches between live and lazy resizing. Takes effect on the next drag.
    pub fn set_lazy(&mut self, lazy: bool) {
        if !self.gesture.is_dragging() {
            self.config.lazy = lazy;
        }
    }

    /// The declared panels.
    #[must_use]
    pub fn panels(&self) -> &[PanelProps] {
        &self.panels
    }

    /// Number of panels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Returns `true` if there are no panels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Replaces the declared panels.
    ///
    /// Sizes are re-derived when the number of panels or any controlled
    /// [`PanelProps::size`] changed. Changes to other properties keep the
    /// current sizes. A drag whose bar no longer exists is dropped without
    /// a commit.
    pub fn set_panels(&mut self, panels: Vec<PanelProps>) {
        let sizes_changed = panels.len() != self.panels.len()
            || panels
                .iter()
                .zip(&self.panels)
                .any(|(new, old)| new.size != old.size);
        self.panels = panels;

        if self
            .gesture
            .active_bar()
            .is_some_and(|bar| bar + 1 >= self.panels.len())
        {
            self.discard_gesture();
        }
        if sizes_changed {
            self.rederive();
        }
    }

    /// The measured main-axis extent of the container, in pixels.
    #[must_use]
    pub const fn container_size(&self) -> f64 {
        self.container_size
    }

    /// Reports the measured main-axis extent of the container.
    ///
    /// Re-derives sizes when the extent changed, which also drops any
    /// uncommitted lazy preview.
    pub fn set_container_size(&mut self, size: f64) {
        let size = if size.is_finite() { size.max(0.0) } else { 0.0 };
        if size != self.container_size {
            self.container_size = size;
            self.rederive();
        }
    }

    /// Current panel sizes, in percent. During a lazy drag these are the
    /// sizes from before the drag.
    #[must_use]
    pub fn sizes(&self) -> &[f64] {
        &self.sizes
    }

    /// Overrides every panel size at once.
    ///
    /// Returns `false` and changes nothing when `sizes` does not have one
    /// finite entry per panel. No callbacks fire.
    pub fn set_sizes(&mut self, sizes: &[f64]) -> bool {
        if sizes.len() != self.panels.len() || !sizes.iter().all(|s| s.is_finite()) {
            return false;
        }
        self.sizes = Sizes::from_slice(sizes);
        self.gesture = self.gesture.rebased(&self.sizes);
        true
    }

    /// Pixel geometry of panels and bars inside `container`.
    #[must_use]
    pub fn pane_layout(&self, container: Rect) -> PaneLayout {
        PaneLayout::compute(self.config.layout, container, &self.sizes, self.config.bar_size)
    }

    fn rederive(&mut self) {
        self.sizes = Sizes::from_vec(initial_sizes(&self.panels, self.container_size));
        self.collapsed.clear();
        self.collapsed
            .resize(self.panels.len().saturating_sub(1), None);
        self.gesture = self.gesture.rebased(&self.sizes);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            sizes = ?self.sizes.as_slice(),
            container = self.container_size,
            "derived panel sizes"
        );
    }

    // -- bars ---------------------------------------------------------------

    /// Describes every bar for rendering.
    #[must_use]
    pub fn bars(&self) -> Vec<SplitBar> {
        (0..self.panels.len().saturating_sub(1))
            .map(|index| SplitBar {
                index,
                resizable: self.bar_resizable(index),
                start_collapsible: self.can_collapse(index, CollapseEdge::Start),
                end_collapsible: self.can_collapse(index, CollapseEdge::End),
                active: self.gesture.active_bar() == Some(index),
            })
            .collect()
    }

    /// Returns `true` if `bar` exists and may be dragged.
    ///
    /// A bar is draggable when the panel before it is resizable, unless one of
    /// its panels is collapsed and declares a minimum it could not be dragged
    /// back into.
    #[must_use]
    pub fn bar_resizable(&self, bar: usize) -> bool {
        let Some((prev, next)) = self.panels_around(bar) else {
            return false;
        };
        let stuck = |props: &PanelProps, size: f64| size == 0.0 && props.min.is_some();
        prev.resizable && !stuck(prev, self.sizes[bar]) && !stuck(next, self.sizes[bar + 1])
    }

    /// Returns `true` if the collapse arrow `edge` of `bar` is available.
    #[must_use]
    pub fn can_collapse(&self, bar: usize, edge: CollapseEdge) -> bool {
        let Some((prev, next)) = self.panels_around(bar) else {
            return false;
        };
        let (prev_size, next_size) = (self.sizes[bar], self.sizes[bar + 1]);
        match edge {
            CollapseEdge::Start => {
                (prev.collapsible.end && prev_size > 0.0)
                    || (next.collapsible.start && next_size == 0.0 && prev_size > 0.0)
            }
            CollapseEdge::End => {
                (next.collapsible.start && next_size > 0.0)
                    || (prev.collapsible.end && prev_size == 0.0 && next_size > 0.0)
            }
        }
    }

    /// The panels on either side of `bar`, if it exists.
    fn panels_around(&self, bar: usize) -> Option<(&PanelProps, &PanelProps)> {
        let next = self.panels.get(bar.checked_add(1)?)?;
        Some((&self.panels[bar], next))
    }

    // -- drag ---------------------------------------------------------------

    /// The drag state.
    #[must_use]
    pub const fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// Returns `true` while a bar is being dragged.
    #[must_use]
    pub const fn is_resizing(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Starts dragging `bar` from `point`.
    ///
    /// Returns `false` and does nothing when the bar does not exist or is not
    /// resizable, when the container has not been measured, or when another
    /// drag is already active.
    pub fn pointer_down(&mut self, bar: usize, point: Point) -> bool {
        if !self.bar_resizable(bar) || self.container_size <= 0.0 {
            #[cfg(feature = "tracing")]
            tracing::debug!(bar, "ignoring drag on a bar that cannot be resized");
            return false;
        }
        let Some(next) = self.gesture.begin(bar, point, &self.sizes) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(bar, active = ?self.gesture.active_bar(), "drag already active");
            return false;
        };
        self.gesture = next;
        self.subscription = Some(self.host.capture_pointer(bar));
        #[cfg(feature = "tracing")]
        tracing::debug!(bar, x = point.x, y = point.y, lazy = self.config.lazy, "drag started");
        self.host.on_resize_start(&self.sizes);
        true
    }

    /// Starts dragging `bar` from a touch. Only single-touch gestures are honored.
    pub fn touch_start(&mut self, bar: usize, touches: &[Point]) -> bool {
        match single_touch(touches) {
            Some(point) => self.pointer_down(bar, point),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(touches = touches.len(), "ignoring multi-touch drag");
                false
            }
        }
    }

    /// Moves the active drag to `point`. Ignored while idle.
    pub fn pointer_move(&mut self, point: Point) {
        let Some(drag) = self.gesture.snapshot() else {
            return;
        };
        let extent = self.available_extent();
        if extent <= 0.0 {
            return;
        }
        let layout = self.config.layout;
        let offset = 100.0 * (layout.main(drag.origin) - layout.main(point)) / extent;
        let bar = drag.bar_index;
        let start_previous = drag.start_sizes[bar];
        let (previous, next) = self.resolve_at(bar, &drag.start_sizes, offset);
        #[cfg(feature = "tracing")]
        tracing::trace!(bar, offset, previous, next, "drag moved");

        if self.config.lazy {
            self.gesture = self.gesture.with_preview(previous - start_previous);
            if self.config.lazy_resize == LazyResizeNotify::OnMove {
                let mut preview = self.sizes.clone();
                preview[bar] = previous;
                preview[bar + 1] = next;
                self.host.on_resize(&preview);
            }
        } else {
            self.sizes[bar] = previous;
            self.sizes[bar + 1] = next;
            self.host.on_resize(&self.sizes);
        }
    }

    /// Moves the active drag to a touch position. Ignored unless exactly one
    /// touch is present.
    pub fn touch_move(&mut self, touches: &[Point]) {
        if let Some(point) = single_touch(touches) {
            self.pointer_move(point);
        }
    }

    /// Ends the active drag, committing it. Ignored while idle.
    ///
    /// A lazy drag that never moved commits nothing: sizes are kept as they
    /// were, even when they lie outside their bounds.
    pub fn pointer_up(&mut self) {
        self.commit();
    }

    /// Ends the active drag because of a context menu or lost focus.
    ///
    /// There is no rollback: the drag is committed exactly like a release.
    pub fn cancel(&mut self) {
        self.commit();
    }

    /// The uncommitted lazy preview, as the change of the dragged bar's
    /// previous panel, in percent. Positive values move the bar toward the
    /// end of the axis. Always `0` outside lazy drags.
    #[must_use]
    pub const fn preview_offset(&self) -> f64 {
        self.gesture.preview()
    }

    /// [`Splitter::preview_offset`] converted to pixels, for positioning a
    /// preview indicator relative to the bar.
    #[must_use]
    pub fn preview_offset_px(&self) -> f64 {
        self.preview_offset() * self.available_extent().max(0.0) / 100.0
    }

    /// The sizes a lazy drag would commit right now, if one is active.
    #[must_use]
    pub fn preview_sizes(&self) -> Option<Vec<f64>> {
        if !self.config.lazy {
            return None;
        }
        let drag = self.gesture.snapshot()?;
        let mut sizes = self.sizes.to_vec();
        if !drag.moved {
            return Some(sizes);
        }
        let (previous, next) = self.resolve_at(drag.bar_index, &drag.start_sizes, -drag.preview);
        sizes[drag.bar_index] = previous;
        sizes[drag.bar_index + 1] = next;
        Some(sizes)
    }

    fn commit(&mut self) {
        let Some(drag) = mem::take(&mut self.gesture).finish() else {
            return;
        };
        if let Some(subscription) = self.subscription.take() {
            subscription.dispose();
        }
        let bar = drag.bar_index;
        if self.config.lazy && drag.moved {
            let (previous, next) = self.resolve_at(bar, &drag.start_sizes, -drag.preview);
            self.sizes[bar] = previous;
            self.sizes[bar + 1] = next;
            if self.config.lazy_resize == LazyResizeNotify::OnCommit {
                self.host.on_resize(&self.sizes);
            }
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(bar, sizes = ?self.sizes.as_slice(), "drag committed");
        self.host.on_resize_end(&self.sizes);
    }

    /// Drops the active drag without committing it.
    fn discard_gesture(&mut self) {
        self.gesture = GestureState::Idle;
        self.subscription = None;
        #[cfg(feature = "tracing")]
        tracing::debug!("drag discarded");
    }

    /// Container extent left to panels once bars are subtracted.
    fn available_extent(&self) -> f64 {
        let bars = self.panels.len().saturating_sub(1) as f64;
        self.container_size - bars * self.config.bar_size
    }

    /// Resolves moving bar `bar` by `offset` percent from `base` sizes.
    fn resolve_at(&self, bar: usize, base: &[f64], offset: f64) -> (f64, f64) {
        let (previous, next) = (base[bar], base[bar + 1]);
        let total = previous + next;
        resolve_pair(
            previous,
            next,
            offset,
            Bounds::for_panel(&self.panels[bar], total, self.container_size),
            Bounds::for_panel(&self.panels[bar + 1], total, self.container_size),
        )
    }

    // -- collapse -----------------------------------------------------------

    /// Activates the collapse arrow `edge` of `bar`.
    ///
    /// When both panels next to the bar have a size, the panel the arrow
    /// points away from collapses to `0` and its neighbor absorbs the space.
    /// When one of them is collapsed, it is expanded again: to its size before
    /// collapsing if that still fits both panels' bounds, otherwise to the
    /// middle of the range both bounds allow. The pair's total never changes.
    ///
    /// Returns `false` when the arrow is unavailable (see
    /// [`Splitter::can_collapse`]) or a drag is active.
    pub fn collapse(&mut self, bar: usize, edge: CollapseEdge) -> bool {
        if self.gesture.is_dragging() || !self.can_collapse(bar, edge) {
            return false;
        }
        let (current, target) = match edge {
            CollapseEdge::Start => (bar, bar + 1),
            CollapseEdge::End => (bar + 1, bar),
        };
        let current_size = self.sizes[current];
        let target_size = self.sizes[target];
        let total = current_size + target_size;

        if current_size != 0.0 && target_size != 0.0 {
            self.sizes[current] = 0.0;
            self.sizes[target] = total;
            self.collapsed[bar] = Some(current_size);
            #[cfg(feature = "tracing")]
            tracing::debug!(bar, panel = current, "panel collapsed");
        } else {
            let current_bounds = Bounds::for_panel(&self.panels[current], total, self.container_size);
            let target_bounds = Bounds::for_panel(&self.panels[target], total, self.container_size);
            let remembered = self.collapsed[bar].take().filter(|&size| {
                size > 0.0 && target_bounds.contains(size) && current_bounds.contains(total - size)
            });
            let target_wanted = remembered.unwrap_or_else(|| {
                let lo = current_bounds.min.max(total - target_bounds.max);
                let hi = current_bounds.max.min(total - target_bounds.min);
                total - (lo + hi) / 2.0
            });
            let previous_wanted = if target == bar {
                target_wanted
            } else {
                total - target_wanted
            };
            let (previous, next) = self.resolve_at(bar, &self.sizes, self.sizes[bar] - previous_wanted);
            self.sizes[bar] = previous;
            self.sizes[bar + 1] = next;
            #[cfg(feature = "tracing")]
            tracing::debug!(bar, panel = target, restored = remembered.is_some(), "panel expanded");
        }

        self.host.on_resize(&self.sizes);
        self.host.on_resize_end(&self.sizes);
        true
    }

    // -- input routing ------------------------------------------------------

    /// Routes input that landed on `bar`. Returns `true` if it was acted upon.
    pub fn handle_bar_input(&mut self, bar: usize, input: BarInput<'_>) -> bool {
        match input {
            BarInput::MouseDown(point) => self.pointer_down(bar, point),
            BarInput::TouchStart(touches) => self.touch_start(bar, touches),
            BarInput::Collapse(edge) => self.collapse(bar, edge),
        }
    }

    /// Routes input delivered through the drag's pointer subscription.
    pub fn handle_window_input(&mut self, input: WindowInput<'_>) {
        match input {
            WindowInput::MouseMove(point) => self.pointer_move(point),
            WindowInput::TouchMove(touches) => self.touch_move(touches),
            WindowInput::MouseUp | WindowInput::TouchEnd => self.pointer_up(),
            WindowInput::ContextMenu | WindowInput::Blur => self.cancel(),
        }
    }

    // -- host ---------------------------------------------------------------

    /// The host.
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
