// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Refresh controller: state machine, inset bookkeeping, and delegate notification.
//!
//! ## Overview
//!
//! The controller observes a [`ScrollSource`] through a weak reference and a
//! [`Subscription`]. Each [`ScrollSample`] delivered to
//! [`RefreshController::handle_scroll`] is turned into a pull distance
//! relative to the resting offset (the top of the content against the insets
//! captured at attach time), and the state moves as follows:
//!
//! - `Hidden`/`Normal` → `Pulling` once the user drags past rest.
//! - `Pulling` arms (`eligible`) while the pull is at or past the threshold, and
//!   disarms if the user drags back under it.
//! - On release, a pull that was armed on the last dragging sample enters
//!   `Loading` and notifies the delegate once; anything else returns to `Hidden`.
//! - `Loading` ignores gestures until [`RefreshController::end_refreshing`].
//!
//! Every attach starts a new subscription epoch. Samples stamped with any
//! other handle, including handles from a source the controller has left,
//! are ignored.
//!
//! ## Insets
//!
//! While loading, the host's top inset is the captured top inset plus the
//! indicator's natural height. Ending the refresh or detaching writes the
//! captured insets back unchanged.
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use kurbo::Insets;
//! use understory_refresh::config::RefreshConfig;
//! use understory_refresh::controller::RefreshController;
//! use understory_refresh::scroll_view::ScrollView;
//! use understory_refresh::source::ScrollSource;
//!
//! let view = Rc::new(ScrollView::with_insets(Insets::new(0.0, 10.0, 0.0, 0.0)));
//! let mut control: RefreshController<ScrollView> =
//!     RefreshController::new(RefreshConfig::new(80.0).with_indicator_height(44.0)).unwrap();
//! control.attach(&Rc::downgrade(&view)).unwrap();
//!
//! // Pull 90 past rest, then let go.
//! for (sub, sample) in view.drag_to(-100.0) {
//!     control.handle_scroll(sub, sample);
//! }
//! for (sub, sample) in view.release() {
//!     control.handle_scroll(sub, sample);
//! }
//! assert!(control.is_refreshing());
//! assert_eq!(view.content_insets().y0, 54.0);
//!
//! control.end_refreshing();
//! assert_eq!(view.content_insets().y0, 10.0);
//! ```

use alloc::rc::{Rc, Weak};
use core::mem::discriminant;

use kurbo::Insets;
use tracing::{debug, trace, warn};

use crate::config::{RefreshConfig, validate_height};
use crate::delegate::RefreshDelegate;
use crate::error::{AttachIssue, RefreshError};
use crate::indicator::{Indicator, PullIndicator};
use crate::source::ScrollSource;
use crate::types::{RefreshState, ScrollSample, Subscription};

/// Weak link to the attached source and the subscription registered on it.
struct Attachment<S> {
    view: Weak<S>,
    subscription: Subscription,
}

/// Pull-to-refresh controller for one scroll source.
///
/// ## Usage
///
/// - Construct with [`RefreshController::new`] (default [`PullIndicator`]) or
///   [`RefreshController::with_indicator`].
/// - [`attach`](Self::attach) to a source and route its deliveries to
///   [`handle_scroll`](Self::handle_scroll), or call
///   [`sync_with_source`](Self::sync_with_source) when the host only signals
///   that something changed.
/// - Register a [`RefreshDelegate`] with [`set_delegate`](Self::set_delegate).
/// - Call [`end_refreshing`](Self::end_refreshing) when the work completes.
///
/// Dropping an attached controller detaches it.
pub struct RefreshController<S: ScrollSource, I: Indicator = PullIndicator> {
    config: RefreshConfig,
    indicator: I,
    state: RefreshState,
    existing_insets: Insets,
    attachment: Option<Attachment<S>>,
    delegate: Option<Weak<dyn RefreshDelegate<S, I>>>,
    // Bumped on every attach; sources echo it in the handles they mint.
    epoch: u32,
    // Drag flag of the previous accepted sample, for release detection.
    was_dragging: bool,
}

impl<S: ScrollSource, I: Indicator> core::fmt::Debug for RefreshController<S, I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RefreshController")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("existing_insets", &self.existing_insets)
            .field("attached", &self.is_attached())
            .field("epoch", &self.epoch)
            .field("was_dragging", &self.was_dragging)
            .finish_non_exhaustive()
    }
}

impl<S: ScrollSource> RefreshController<S, PullIndicator> {
    /// Create a controller with a [`PullIndicator`] sized by `config.indicator_height`.
    pub fn new(config: RefreshConfig) -> Result<Self, RefreshError> {
        Self::with_indicator(config, PullIndicator::new(config.indicator_height))
    }
}

impl<S: ScrollSource, I: Indicator> RefreshController<S, I> {
    /// Create a controller driving a caller-supplied indicator.
    ///
    /// Fails with [`RefreshError::InvalidConfiguration`] if the threshold is not
    /// positive or if either the configured or the indicator's height is unusable.
    pub fn with_indicator(config: RefreshConfig, mut indicator: I) -> Result<Self, RefreshError> {
        config.validate()?;
        validate_height(indicator.natural_height())?;
        indicator.set_visual_state(RefreshState::Hidden);
        Ok(Self {
            config,
            indicator,
            state: RefreshState::Hidden,
            existing_insets: Insets::ZERO,
            attachment: None,
            delegate: None,
            epoch: 0,
            was_dragging: false,
        })
    }

    /// Current refresh state.
    pub fn state(&self) -> RefreshState {
        self.state
    }

    /// Configuration supplied at construction.
    pub fn config(&self) -> &RefreshConfig {
        &self.config
    }

    /// The indicator this controller drives.
    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    /// Mutable access to the indicator, for host-side styling.
    ///
    /// Visual state pushed here is overwritten on the next transition.
    pub fn indicator_mut(&mut self) -> &mut I {
        &mut self.indicator
    }

    /// Insets captured from the host at attach time.
    pub fn existing_insets(&self) -> Insets {
        self.existing_insets
    }

    /// Replace the baseline insets, for example after the host's chrome changed.
    ///
    /// When attached, the host insets are rewritten from the new baseline
    /// (plus the indicator height while loading).
    pub fn set_existing_insets(&mut self, insets: Insets) {
        self.existing_insets = insets;
        if self.state.is_loading() {
            self.apply_insets(self.revealed_insets());
        } else {
            self.apply_insets(insets);
        }
    }

    /// Whether a live source is attached.
    pub fn is_attached(&self) -> bool {
        self.attachment
            .as_ref()
            .is_some_and(|a| a.view.strong_count() > 0)
    }

    /// The subscription deliveries must carry to be processed, while attached.
    pub fn subscription(&self) -> Option<Subscription> {
        self.attachment.as_ref().map(|a| a.subscription)
    }

    /// Whether a refresh is in progress.
    pub fn is_refreshing(&self) -> bool {
        self.state.is_loading()
    }

    /// The registered delegate, if it is still alive.
    pub fn delegate(&self) -> Option<Rc<dyn RefreshDelegate<S, I>>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    /// Register `delegate` without taking ownership of it.
    pub fn set_delegate<D>(&mut self, delegate: &Rc<D>)
    where
        D: RefreshDelegate<S, I> + 'static,
    {
        let weak = Rc::downgrade(delegate) as Weak<dyn RefreshDelegate<S, I>>;
        self.delegate = Some(weak);
    }

    /// Forget the delegate.
    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Attach to a scroll source.
    ///
    /// Re-attaching to the current source is a no-op. Attaching to another
    /// source detaches from the current one first. On failure the controller
    /// is left unattached.
    ///
    /// A pending gesture is discarded. If a refresh is already in progress the
    /// indicator inset is applied to the new source right away.
    pub fn attach(&mut self, view: &Weak<S>) -> Result<(), RefreshError> {
        if let Some(current) = &self.attachment {
            if current.view.ptr_eq(view) && current.view.strong_count() > 0 {
                return Ok(());
            }
        }
        self.detach();

        let source = view.upgrade().ok_or(AttachIssue::SourceDropped)?;
        self.epoch = self.epoch.wrapping_add(1);
        let subscription = source
            .subscribe(self.epoch)
            .ok_or(AttachIssue::SubscriptionRefused)?;
        if subscription.epoch() != self.epoch {
            warn!(
                ?subscription,
                epoch = self.epoch,
                "scroll source did not echo the subscription epoch"
            );
        }
        let insets = source.content_insets();
        if self.state.is_loading() {
            source.set_content_insets(reveal(insets, self.indicator.natural_height()));
        } else {
            self.set_state(RefreshState::Hidden);
        }

        self.existing_insets = insets;
        self.was_dragging = source.is_dragging();
        debug!(?subscription, ?insets, "attached to scroll source");
        self.attachment = Some(Attachment {
            view: view.clone(),
            subscription,
        });
        Ok(())
    }

    /// Detach from the current source, restoring the captured insets.
    ///
    /// No-op when not attached. A source that was already dropped is skipped
    /// without error. A gesture in progress is discarded; a refresh in
    /// progress keeps running.
    pub fn detach(&mut self) {
        let Some(attachment) = self.attachment.take() else {
            return;
        };
        match attachment.view.upgrade() {
            Some(source) => {
                source.unsubscribe(attachment.subscription);
                source.set_content_insets(self.existing_insets);
                debug!(subscription = ?attachment.subscription, "detached from scroll source");
            }
            None => debug!("scroll source dropped before detach"),
        }
        self.was_dragging = false;
        if !self.state.is_loading() {
            self.set_state(RefreshState::Hidden);
        }
    }

    /// Process one offset sample delivered on `subscription`.
    ///
    /// Samples are handled strictly in the order they are passed in. Samples
    /// carrying any handle other than the current
    /// [`subscription`](Self::subscription) are ignored.
    pub fn handle_scroll(&mut self, subscription: Subscription, sample: ScrollSample) {
        if self.subscription() != Some(subscription) {
            trace!(?subscription, "ignoring sample from stale subscription");
            return;
        }

        let released = self.was_dragging && !sample.dragging;
        self.was_dragging = sample.dragging;
        let pull = self.pull_distance(sample);
        trace!(pull, dragging = sample.dragging, released, "scroll sample");

        match self.state {
            RefreshState::Loading => self.apply_insets(self.revealed_insets()),
            // The release offset may have bounced back; the last drag decides.
            _ if released => self.finish_gesture(),
            _ if sample.dragging => self.track_pull(pull),
            RefreshState::Hidden => {}
            RefreshState::Normal | RefreshState::Pulling { .. } => {
                self.set_state(RefreshState::Hidden);
            }
        }
    }

    /// Read the attached source's offset and drag state and process them.
    ///
    /// For hosts that signal a change without carrying a sample. No-op when
    /// not attached or when the source was dropped.
    pub fn sync_with_source(&mut self) {
        let Some(attachment) = &self.attachment else {
            return;
        };
        let subscription = attachment.subscription;
        let Some(source) = attachment.view.upgrade() else {
            trace!("sample skipped; scroll source dropped");
            return;
        };
        let sample = ScrollSample {
            offset: source.content_offset(),
            dragging: source.is_dragging(),
        };
        self.handle_scroll(subscription, sample);
    }

    /// Enter `Loading` programmatically and notify the delegate.
    ///
    /// No-op while already loading. Pre-empts a pull in progress; the later
    /// release does not trigger again. Without an attachment only the state
    /// and indicator change; the inset is applied on the next attach.
    pub fn begin_refreshing(&mut self) {
        if self.state.is_loading() {
            trace!("begin_refreshing while loading; ignored");
            return;
        }
        self.set_state(RefreshState::Loading);
        self.apply_insets(self.revealed_insets());
        self.notify_delegate();
    }

    /// Leave any state for `Hidden`, restoring the captured insets.
    ///
    /// Idempotent when already hidden.
    pub fn end_refreshing(&mut self) {
        if self.state.is_hidden() {
            return;
        }
        let was_loading = self.state.is_loading();
        self.set_state(RefreshState::Hidden);
        if was_loading {
            self.apply_insets(self.existing_insets);
        }
    }

    fn pull_distance(&self, sample: ScrollSample) -> f64 {
        let rest = -self.existing_insets.y0;
        (rest - sample.offset.y).max(0.0)
    }

    fn track_pull(&mut self, pull: f64) {
        let threshold = self.config.threshold;
        let next = if pull > 0.0 {
            RefreshState::Pulling {
                progress: (pull / threshold).min(1.0),
                eligible: pull >= threshold,
            }
        } else if self.state.is_hidden() {
            RefreshState::Hidden
        } else {
            RefreshState::Normal
        };
        self.set_state(next);
    }

    fn finish_gesture(&mut self) {
        if self.state.is_eligible() {
            debug!("released past threshold");
            self.begin_refreshing();
        } else {
            self.set_state(RefreshState::Hidden);
        }
    }

    fn revealed_insets(&self) -> Insets {
        reveal(self.existing_insets, self.indicator.natural_height())
    }

    fn apply_insets(&self, insets: Insets) {
        let Some(attachment) = &self.attachment else {
            return;
        };
        match attachment.view.upgrade() {
            Some(source) if source.content_insets() != insets => source.set_content_insets(insets),
            Some(_) => {}
            None => trace!("insets not updated; scroll source dropped"),
        }
    }

    fn set_state(&mut self, next: RefreshState) {
        if self.state == next {
            return;
        }
        if discriminant(&self.state) != discriminant(&next) {
            debug!(from = ?self.state, to = ?next, "refresh state changed");
        }
        self.state = next;
        self.indicator.set_visual_state(next);
    }

    fn notify_delegate(&self) {
        match self.delegate() {
            Some(delegate) => {
                debug!("notifying delegate of refresh trigger");
                delegate.refresh_triggered(self);
            }
            None => trace!("no live delegate to notify"),
        }
    }
}

/// Top inset grown by the indicator height; other edges untouched.
fn reveal(mut insets: Insets, height: f64) -> Insets {
    insets.y0 += height;
    insets
}

impl<S: ScrollSource, I: Indicator> Drop for RefreshController<S, I> {
    fn drop(&mut self) {
        self.detach();
    }
}
