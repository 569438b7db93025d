// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory scroll view implementing [`ScrollSource`].
//!
//! ## Usage
//!
//! Hosts without a native scroll view (headless tests, demos, simple
//! toolkits) can keep their scroll state in a [`ScrollView`]. Gesture helpers
//! update the offset and drag flag and return the deliveries to route, one
//! per live subscription, in subscription order.
//!
//! The view is shared as `Rc<ScrollView>`; all state sits in cells, so every
//! method takes `&self`.
//!
//! ```
//! use understory_refresh::scroll_view::ScrollView;
//! use understory_refresh::source::ScrollSource;
//!
//! let view = ScrollView::new();
//! let sub = view.subscribe(1).unwrap();
//! let deliveries = view.drag_to(-30.0);
//! assert_eq!(deliveries.len(), 1);
//! assert_eq!(deliveries[0].0, sub);
//! assert!(deliveries[0].1.dragging);
//! ```

use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use kurbo::{Insets, Vec2};

use crate::source::ScrollSource;
use crate::types::{ScrollSample, Subscription};

/// Scroll state held in memory, with a list of offset subscribers.
#[derive(Clone, Debug, Default)]
pub struct ScrollView {
    insets: Cell<Insets>,
    offset: Cell<Vec2>,
    dragging: Cell<bool>,
    subscribers: RefCell<Vec<Subscription>>,
    next_id: Cell<u64>,
    refuse_subscriptions: Cell<bool>,
}

impl ScrollView {
    /// A view at offset zero with zero insets.
    pub fn new() -> Self {
        Self::default()
    }

    /// A view with the given content insets, resting against its top inset.
    pub fn with_insets(insets: Insets) -> Self {
        Self {
            insets: Cell::new(insets),
            offset: Cell::new(Vec2::new(0.0, -insets.y0)),
            ..Self::default()
        }
    }

    /// Make future [`subscribe`](ScrollSource::subscribe) calls fail.
    pub fn set_refuse_subscriptions(&self, refuse: bool) {
        self.refuse_subscriptions.set(refuse);
    }

    /// Live subscriptions in registration order.
    pub fn subscribers(&self) -> Vec<Subscription> {
        self.subscribers.borrow().clone()
    }

    /// Move to vertical offset `y` while the user drags.
    pub fn drag_to(&self, y: f64) -> Vec<(Subscription, ScrollSample)> {
        self.dragging.set(true);
        self.scroll_to(y)
    }

    /// End the drag at the current offset.
    pub fn release(&self) -> Vec<(Subscription, ScrollSample)> {
        self.dragging.set(false);
        self.deliveries()
    }

    /// Move to `y` without a drag (deceleration or programmatic scroll).
    pub fn settle(&self, y: f64) -> Vec<(Subscription, ScrollSample)> {
        self.dragging.set(false);
        self.scroll_to(y)
    }

    fn scroll_to(&self, y: f64) -> Vec<(Subscription, ScrollSample)> {
        let x = self.offset.get().x;
        self.offset.set(Vec2::new(x, y));
        self.deliveries()
    }

    fn deliveries(&self) -> Vec<(Subscription, ScrollSample)> {
        let sample = ScrollSample {
            offset: self.offset.get(),
            dragging: self.dragging.get(),
        };
        self.subscribers
            .borrow()
            .iter()
            .map(|&s| (s, sample))
            .collect()
    }
}

impl ScrollSource for ScrollView {
    fn subscribe(&self, epoch: u32) -> Option<Subscription> {
        if self.refuse_subscriptions.get() {
            return None;
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let sub = Subscription::new(id, epoch);
        self.subscribers.borrow_mut().push(sub);
        Some(sub)
    }

    fn unsubscribe(&self, subscription: Subscription) {
        self.subscribers
            .borrow_mut()
            .retain(|&s| s != subscription);
    }

    fn content_insets(&self) -> Insets {
        self.insets.get()
    }

    fn set_content_insets(&self, insets: Insets) {
        self.insets.set(insets);
    }

    fn content_offset(&self) -> Vec2 {
        self.offset.get()
    }

    fn is_dragging(&self) -> bool {
        self.dragging.get()
    }
}
