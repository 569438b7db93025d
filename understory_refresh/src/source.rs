// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll source interface consumed by the controller.
//!
//! A host scroll view implements [`ScrollSource`] and hands the controller a
//! weak reference to it. The host delivers offset changes by calling
//! [`RefreshController::handle_scroll`](crate::controller::RefreshController::handle_scroll)
//! with the [`Subscription`] the change was delivered on.
//!
//! Every method takes `&self`. Sources keep their mutable state behind
//! interior mutability, so the controller can always unsubscribe and write
//! the captured insets back, even while the host holds other references to
//! the same source.
//!
//! See [`ScrollView`](crate::scroll_view::ScrollView) for an in-memory implementation.

use kurbo::{Insets, Vec2};

use crate::types::Subscription;

/// A scrollable view the refresh control can attach to.
pub trait ScrollSource {
    /// Register for offset-change deliveries.
    ///
    /// The returned handle must carry `epoch` (see [`Subscription::new`]).
    /// Returns `None` when the source cannot deliver offsets; attaching then
    /// fails with [`AttachIssue::SubscriptionRefused`](crate::error::AttachIssue::SubscriptionRefused).
    fn subscribe(&self, epoch: u32) -> Option<Subscription>;

    /// Stop deliveries for `subscription`. Unknown handles are ignored.
    fn unsubscribe(&self, subscription: Subscription);

    /// Current content insets.
    fn content_insets(&self) -> Insets;

    /// Replace the content insets.
    fn set_content_insets(&self, insets: Insets);

    /// Current content offset.
    fn content_offset(&self) -> Vec2;

    /// Whether the user is dragging (tracking) the view.
    fn is_dragging(&self) -> bool;
}
