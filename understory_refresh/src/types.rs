// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the refresh control: states, scroll samples, and subscription handles.
//!
//! ## Overview
//!
//! These types describe what flows between a scroll source, the
//! [controller](crate::controller), and the [indicator](crate::indicator).

use kurbo::Vec2;

/// Refresh state of a control.
///
/// Exactly one value is current at any time. It drives what the
/// [`Indicator`](crate::indicator::Indicator) renders and whether scroll
/// samples may still cause transitions.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum RefreshState {
    /// Indicator is not shown and no gesture is in progress.
    #[default]
    Hidden,
    /// A drag is in progress but the content sits at its resting position.
    Normal,
    /// The user is pulling past the resting position.
    Pulling {
        /// Pull distance over threshold, saturating at `1.0`.
        progress: f64,
        /// Whether releasing now would start a refresh.
        eligible: bool,
    },
    /// A refresh is in progress; the indicator is revealed at its natural height.
    Loading,
}

impl RefreshState {
    /// True for [`RefreshState::Hidden`].
    pub const fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// True for [`RefreshState::Loading`].
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// True for [`RefreshState::Pulling`], armed or not.
    pub const fn is_pulling(&self) -> bool {
        matches!(self, Self::Pulling { .. })
    }

    /// True while pulling with the trigger armed.
    pub const fn is_eligible(&self) -> bool {
        matches!(self, Self::Pulling { eligible: true, .. })
    }

    /// Pull progress in `[0, 1]`; `0.0` outside [`RefreshState::Pulling`].
    pub const fn progress(&self) -> f64 {
        match self {
            Self::Pulling { progress, .. } => *progress,
            _ => 0.0,
        }
    }
}

/// Handle for one offset-change registration on a
/// [`ScrollSource`](crate::source::ScrollSource).
///
/// Sources mint these from [`ScrollSource::subscribe`](crate::source::ScrollSource::subscribe)
/// and stamp every delivered [`ScrollSample`] with the handle it was delivered on.
///
/// A handle pairs the source's own registration `id` with the `epoch` the
/// subscriber asked for. Ids only need to be unique within one source; the
/// controller starts a new epoch on every attach, so a late delivery from a
/// previously attached source never matches the current handle even when the
/// two sources hand out the same ids.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Subscription {
    epoch: u32,
    id: u64,
}

impl Subscription {
    /// A handle for source-side registration `id`, stamped with `epoch`.
    pub const fn new(id: u64, epoch: u32) -> Self {
        Self { epoch, id }
    }

    /// The source-specific registration id.
    pub const fn id(self) -> u64 {
        self.id
    }

    /// The epoch requested by the subscriber.
    pub const fn epoch(self) -> u32 {
        self.epoch
    }
}

/// One scroll-offset observation from the host.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollSample {
    /// Content offset; `y` grows as content scrolls up.
    /// Pulling down past the top yields values below the resting offset.
    pub offset: Vec2,
    /// Whether the user is actively dragging (tracking) the view.
    pub dragging: bool,
}

impl ScrollSample {
    /// A sample at vertical offset `y` with the given drag state.
    pub const fn new(y: f64, dragging: bool) -> Self {
        Self {
            offset: Vec2::new(0.0, y),
            dragging,
        }
    }
}
