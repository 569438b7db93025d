// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_refresh --heading-base-level=0

//! Understory Refresh: a `no_std` pull-to-refresh control for scrollable views.
//!
//! ## Overview
//!
//! This crate turns a stream of scroll-offset samples into a refresh state and
//! keeps the host view's content insets in step with it.
//! It does not render, animate, or recognize gestures.
//! The host feeds it samples; it tells an [`Indicator`](crate::indicator::Indicator)
//! what to show and a [`RefreshDelegate`](crate::delegate::RefreshDelegate) when to refresh.
//!
//! ## States
//!
//! [`RefreshState`](crate::types::RefreshState) is one of `Hidden`, `Normal`,
//! `Pulling { progress, eligible }`, or `Loading`.
//! A release while `eligible` enters `Loading` and notifies the delegate exactly once.
//! A release short of the threshold returns to `Hidden` silently.
//! [`begin_refreshing`](crate::controller::RefreshController::begin_refreshing) enters
//! `Loading` programmatically; [`end_refreshing`](crate::controller::RefreshController::end_refreshing)
//! always returns to `Hidden`.
//!
//! ## Insets
//!
//! On [`attach`](crate::controller::RefreshController::attach) the controller captures the
//! host's insets. While loading it grows the top inset by the indicator's natural height.
//! Ending the refresh, detaching, or dropping the controller writes the captured insets back.
//!
//! ## Ownership
//!
//! The controller holds the scroll source and the delegate through `Weak` references.
//! Sources are shared as `Rc<S>` and mutate through `&self`, so restoring insets on
//! detach never depends on what else the host is holding.
//! Either may go away first; the controller tolerates it. Everything is single-threaded
//! and synchronous, and there is no global state, so any number of controls can coexist.
//!
//! ## Workflow
//!
//! 1) Build a [`RefreshController`](crate::controller::RefreshController) from a
//!    [`RefreshConfig`](crate::config::RefreshConfig).
//! 2) Attach it to a [`ScrollSource`](crate::source::ScrollSource), such as the in-memory
//!    [`ScrollView`](crate::scroll_view::ScrollView).
//! 3) Route every `(Subscription, ScrollSample)` delivery to
//!    [`handle_scroll`](crate::controller::RefreshController::handle_scroll), in order.
//! 4) When the delegate's work completes, call `end_refreshing`.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use understory_refresh::config::RefreshConfig;
//! use understory_refresh::controller::RefreshController;
//! use understory_refresh::delegate::RefreshDelegate;
//! use understory_refresh::indicator::PullIndicator;
//! use understory_refresh::scroll_view::ScrollView;
//!
//! #[derive(Default)]
//! struct Feed {
//!     pending: Cell<bool>,
//! }
//!
//! impl RefreshDelegate<ScrollView, PullIndicator> for Feed {
//!     fn refresh_triggered(&self, _control: &RefreshController<ScrollView>) {
//!         self.pending.set(true);
//!     }
//! }
//!
//! let view = Rc::new(ScrollView::new());
//! let feed = Rc::new(Feed::default());
//! let mut control = RefreshController::new(RefreshConfig::new(80.0)).unwrap();
//! control.attach(&Rc::downgrade(&view)).unwrap();
//! control.set_delegate(&feed);
//!
//! for y in [-20.0, -50.0, -90.0] {
//!     for (sub, sample) in view.drag_to(y) {
//!         control.handle_scroll(sub, sample);
//!     }
//! }
//! for (sub, sample) in view.release() {
//!     control.handle_scroll(sub, sample);
//! }
//! assert!(feed.pending.get());
//!
//! // Later, once the refresh work is done:
//! control.end_refreshing();
//! assert!(control.state().is_hidden());
//! ```
//!
//! ## Logging
//!
//! State transitions, attach, detach, and delegate notifications are logged at
//! `debug` through [`tracing`]; each sample is logged at `trace`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod controller;
pub mod delegate;
pub mod error;
pub mod indicator;
pub mod scroll_view;
pub mod source;
pub mod types;

pub use config::RefreshConfig;
pub use controller::RefreshController;
pub use delegate::RefreshDelegate;
pub use error::{AttachIssue, ConfigIssue, RefreshError};
pub use indicator::{Indicator, PullIndicator};
pub use scroll_view::ScrollView;
pub use source::ScrollSource;
pub use types::{RefreshState, ScrollSample, Subscription};
