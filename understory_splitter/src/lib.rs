// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_splitter --heading-base-level=0

//! Understory Splitter: a headless, resizable multi-pane splitter.
//!
//! This crate owns the sizing logic of a row or column of panels separated by
//! draggable bars. It is renderer-agnostic: it never paints, measures, or
//! listens to events on its own. Host frameworks are responsible for:
//!
//! - Measuring the container along the main axis and reporting it with
//!   [`Splitter::set_container_size`].
//! - Translating native input into [`BarInput`] and [`WindowInput`].
//! - Registering window-level listeners while a drag is active, handed back
//!   as a [`PointerSubscription`] from [`ResizeHost::capture_pointer`].
//! - Placing panels and bars, for example from [`Splitter::pane_layout`].
//!
//! The core concepts are:
//!
//! - [`PanelSize`] and [`percent_of`]: declared sizes (`"40%"`, `"240px"`)
//!   normalized into percentages of the container.
//! - [`initial_sizes`]: derives every panel's starting size, sharing what is
//!   left of 100% equally among panels without a declared size.
//! - [`resolve_pair`] and [`Bounds`]: moves the boundary between two adjacent
//!   panels while conserving their combined size and honoring min/max bounds.
//! - [`GestureState`]: an explicit `Idle | Dragging` state machine value that
//!   admits a single active drag.
//! - [`Splitter`]: the controller tying these together, with live and lazy
//!   drags and collapsible panels.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_splitter::{
//!     Callbacks, PanelProps, PanelSize, Splitter, SplitterConfig, WindowInput,
//! };
//!
//! let panels = vec![
//!     PanelProps::default().with_default_size(PanelSize::Percent(30.0)),
//!     PanelProps::default().with_min(PanelSize::Percent(20.0)),
//! ];
//! let host = Callbacks::default().with_resize_end(|sizes| {
//!     // Persist `sizes`, re-render, ...
//!     assert_eq!(sizes.len(), 2);
//! });
//! let mut splitter = Splitter::with_host(SplitterConfig::default(), panels, host);
//! splitter.set_container_size(502.0);
//! assert_eq!(splitter.sizes(), &[30.0, 70.0]);
//!
//! // 500px are shared by the panels; dragging the bar 100px right adds 20%.
//! assert!(splitter.pointer_down(0, Point::new(150.0, 0.0)));
//! splitter.handle_window_input(WindowInput::MouseMove(Point::new(250.0, 0.0)));
//! splitter.handle_window_input(WindowInput::MouseUp);
//! assert_eq!(splitter.sizes(), &[50.0, 50.0]);
//! ```
//!
//! ## Lazy resizing
//!
//! With [`SplitterConfig::lazy`] set, moves only update a preview
//! ([`Splitter::preview_offset`], [`Splitter::preview_sizes`]) and the panel
//! sizes change once, when the drag ends. Whether `on_resize` also reports
//! previews is chosen with [`LazyResizeNotify`].
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies.
//! - `libm`: `no_std` floating-point support for `kurbo`.
//! - `tracing`: emits `tracing` events for drags, commits, and collapses.
//! - `serde`: `Serialize`/`Deserialize` for configuration and panel descriptors.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bar;
mod config;
mod constraint;
mod gesture;
mod host;
mod layout;
mod panel;
mod size;
mod splitter;

pub use bar::{BarInput, CollapseEdge, SplitBar, WindowInput};
pub use config::{DEFAULT_BAR_SIZE, LazyResizeNotify, SplitterConfig};
pub use constraint::{Bounds, resolve_pair};
pub use gesture::{DragSnapshot, GestureState, Sizes};
pub use host::{Callbacks, PointerSubscription, ResizeHost};
pub use layout::{Layout, PaneLayout, gutter, initial_sizes};
pub use panel::{Collapsible, PanelProps};
pub use size::{PanelSize, SizeParseError, percent_of};
pub use splitter::Splitter;
