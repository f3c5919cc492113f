// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between a [`Splitter`](crate::Splitter) and its host framework.
//!
//! The splitter reports size changes through [`ResizeHost`] callbacks, and asks
//! the host for a [`PointerSubscription`] while a drag is active so that moves
//! and releases outside the bar still reach it. The subscription is scoped to
//! the gesture: it is acquired when a drag begins and released exactly once,
//! when the drag ends or when the splitter is dropped mid-drag.

use alloc::boxed::Box;
use core::fmt;

/// A gesture-scoped pointer subscription.
///
/// Hosts typically register window-level move/up/blur listeners in
/// [`ResizeHost::capture_pointer`] and return a subscription whose release
/// closure unregisters them. The closure runs exactly once, either from
/// [`PointerSubscription::dispose`] or on drop.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use understory_splitter::PointerSubscription;
///
/// let released = Rc::new(Cell::new(0));
/// let counter = released.clone();
/// let sub = PointerSubscription::new(move || counter.set(counter.get() + 1));
/// assert!(sub.is_active());
/// drop(sub);
/// assert_eq!(released.get(), 1);
/// ```
pub struct PointerSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl PointerSubscription {
    /// Creates a subscription that runs `release` when it ends.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    #[must_use]
    pub const fn none() -> Self {
        Self { release: None }
    }

    /// Returns `true` until the subscription has been released.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Releases the subscription now.
    pub fn dispose(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for PointerSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerSubscription")
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}

/// Callbacks a host receives from a [`Splitter`](crate::Splitter).
///
/// Every method has a no-op default. Sizes are always the full ordered list of
/// panel percentages.
pub trait ResizeHost {
    /// A drag has started. Fires once per gesture, with the sizes before the drag.
    fn on_resize_start(&mut self, _sizes: &[f64]) {}

    /// Sizes changed: on every live move, at lazy commit, and after collapsing.
    fn on_resize(&mut self, _sizes: &[f64]) {}

    /// A drag or collapse finished with these sizes.
    fn on_resize_end(&mut self, _sizes: &[f64]) {}

    /// Starts tracking the pointer outside the bar for a drag of `bar_index`.
    fn capture_pointer(&mut self, _bar_index: usize) -> PointerSubscription {
        PointerSubscription::none()
    }
}

impl ResizeHost for () {}

impl<H: ResizeHost + ?Sized> ResizeHost for &mut H {
    fn on_resize_start(&mut self, sizes: &[f64]) {
        (**self).on_resize_start(sizes);
    }

    fn on_resize(&mut self, sizes: &[f64]) {
        (**self).on_resize(sizes);
    }

    fn on_resize_end(&mut self, sizes: &[f64]) {
        (**self).on_resize_end(sizes);
    }

    fn capture_pointer(&mut self, bar_index: usize) -> PointerSubscription {
        (**self).capture_pointer(bar_index)
    }
}

type SizesCallback = Box<dyn FnMut(&[f64])>;

/// A [`ResizeHost`] assembled from optional closures.
///
/// ```
/// use understory_splitter::{Callbacks, ResizeHost};
///
/// let mut host = Callbacks::default().with_resize_end(|sizes| {
///     assert_eq!(sizes, &[30.0, 70.0]);
/// });
/// host.on_resize_end(&[30.0, 70.0]);
/// ```
#[derive(Default)]
pub struct Callbacks {
    on_resize_start: Option<SizesCallback>,
    on_resize: Option<SizesCallback>,
    on_resize_end: Option<SizesCallback>,
}

impl Callbacks {
    /// Sets the drag-start callback.
    #[must_use]
    pub fn with_resize_start(mut self, f: impl FnMut(&[f64]) + 'static) -> Self {
        self.on_resize_start = Some(Box::new(f));
        self
    }

    /// Sets the resize callback.
    #[must_use]
    pub fn with_resize(mut self, f: impl FnMut(&[f64]) + 'static) -> Self {
        self.on_resize = Some(Box::new(f));
        self
    }

    /// Sets the resize-end callback.
    #[must_use]
    pub fn with_resize_end(mut self, f: impl FnMut(&[f64]) + 'static) -> Self {
        self.on_resize_end = Some(Box::new(f));
        self
    }
}

impl ResizeHost for Callbacks {
    fn on_resize_start(&mut self, sizes: &[f64]) {
        if let Some(f) = &mut self.on_resize_start {
            f(sizes);
        }
    }

    fn on_resize(&mut self, sizes: &[f64]) {
        if let Some(f) = &mut self.on_resize {
            f(sizes);
        }
    }

    fn on_resize_end(&mut self, sizes: &[f64]) {
        if let Some(f) = &mut self.on_resize_end {
            f(sizes);
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_resize_start", &self.on_resize_start.is_some())
            .field("on_resize", &self.on_resize.is_some())
            .field("on_resize_end", &self.on_resize_end.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};

    #[test]
    fn subscription_releases_once() {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        let sub = PointerSubscription::new(move || counter.set(counter.get() + 1));
        sub.dispose();
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn empty_subscription_is_inactive() {
        let sub = PointerSubscription::none();
        assert!(!sub.is_active());
    }

    #[test]
    fn callbacks_forward_sizes() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut host = Callbacks::default().with_resize(move |s| sink.borrow_mut().push(s.to_vec()));
        host.on_resize(&[10.0, 90.0]);
        // Unset callbacks are ignored.
        host.on_resize_start(&[1.0]);
        host.on_resize_end(&[2.0]);
        assert_eq!(*seen.borrow(), [[10.0, 90.0]]);
    }

    fn notify<H: ResizeHost>(mut host: H) -> PointerSubscription {
        host.on_resize(&[25.0, 75.0]);
        host.capture_pointer(0)
    }

    #[test]
    fn mutable_reference_is_a_host() {
        let seen = Rc::new(Cell::new(false));
        let flag = seen.clone();
        let mut inner = Callbacks::default().with_resize(move |_| flag.set(true));
        let sub = notify(&mut inner);
        assert!(seen.get());
        assert!(!sub.is_active());
    }
}
