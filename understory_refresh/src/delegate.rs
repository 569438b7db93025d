// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delegate notified when a refresh should begin.

use crate::controller::RefreshController;
use crate::indicator::Indicator;
use crate::source::ScrollSource;

/// Receives refresh triggers from a [`RefreshController`].
///
/// The controller holds the delegate weakly; the host owns it. A trigger is
/// delivered once per edge into [`Loading`](crate::types::RefreshState::Loading),
/// either from a release past the threshold or from
/// [`begin_refreshing`](RefreshController::begin_refreshing).
///
/// The delegate gets a shared reference and cannot re-enter the controller
/// mutably. It performs the refresh on its own schedule and later calls
/// [`end_refreshing`](RefreshController::end_refreshing) through whoever owns
/// the controller.
pub trait RefreshDelegate<S: ScrollSource, I: Indicator> {
    /// A refresh should begin.
    fn refresh_triggered(&self, control: &RefreshController<S, I>);
}
