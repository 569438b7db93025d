// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Indicator view: the passive renderable a controller drives.
//!
//! The controller pushes a [`RefreshState`] on every visual change and reads
//! [`Indicator::natural_height`] to size the inset it reserves while loading.
//! Indicators never call back into the controller.

use crate::types::RefreshState;

/// A renderable refresh indicator.
pub trait Indicator {
    /// Enter a visual state.
    ///
    /// Progress carried by [`RefreshState::Pulling`] is in `[0, 1]`; `1.0`
    /// means the trigger is armed. Other states carry no progress.
    fn set_visual_state(&mut self, state: RefreshState);

    /// Fixed height the controller reserves as top inset while revealed.
    fn natural_height(&self) -> f64;
}

/// Default indicator: records the last visual state for a host renderer to draw.
///
/// ```
/// use understory_refresh::indicator::{Indicator, PullIndicator};
/// use understory_refresh::types::RefreshState;
///
/// let mut ind = PullIndicator::new(44.0);
/// ind.set_visual_state(RefreshState::Pulling { progress: 1.0, eligible: true });
/// assert_eq!(ind.caption(), Some("Release to refresh"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PullIndicator {
    height: f64,
    state: RefreshState,
}

impl PullIndicator {
    /// A hidden indicator with the given natural height.
    pub fn new(height: f64) -> Self {
        Self {
            height,
            state: RefreshState::Hidden,
        }
    }

    /// Last state pushed by the controller.
    pub fn visual_state(&self) -> RefreshState {
        self.state
    }

    /// Whether a host should draw the indicator at all.
    pub fn is_visible(&self) -> bool {
        !self.state.is_hidden()
    }

    /// Caption for the current state, `None` while hidden.
    pub fn caption(&self) -> Option<&'static str> {
        match self.state {
            RefreshState::Hidden => None,
            RefreshState::Normal | RefreshState::Pulling { eligible: false, .. } => {
                Some("Pull to refresh")
            }
            RefreshState::Pulling { eligible: true, .. } => Some("Release to refresh"),
            RefreshState::Loading => Some("Loading…"),
        }
    }
}

impl Indicator for PullIndicator {
    fn set_visual_state(&mut self, state: RefreshState) {
        self.state = match state {
            RefreshState::Pulling { progress, eligible } => RefreshState::Pulling {
                progress: progress.clamp(0.0, 1.0),
                eligible,
            },
            other => other,
        };
    }

    fn natural_height(&self) -> f64 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_without_caption() {
        let ind = PullIndicator::new(44.0);
        assert!(!ind.is_visible());
        assert_eq!(ind.caption(), None);
        assert_eq!(ind.natural_height(), 44.0);
    }

    #[test]
    fn caption_follows_state() {
        let mut ind = PullIndicator::new(44.0);
        ind.set_visual_state(RefreshState::Normal);
        assert_eq!(ind.caption(), Some("Pull to refresh"));
        ind.set_visual_state(RefreshState::Pulling {
            progress: 0.5,
            eligible: false,
        });
        assert_eq!(ind.caption(), Some("Pull to refresh"));
        ind.set_visual_state(RefreshState::Loading);
        assert_eq!(ind.caption(), Some("Loading…"));
        ind.set_visual_state(RefreshState::Hidden);
        assert!(!ind.is_visible());
    }

    #[test]
    fn progress_is_clamped() {
        let mut ind = PullIndicator::new(44.0);
        ind.set_visual_state(RefreshState::Pulling {
            progress: 3.0,
            eligible: true,
        });
        assert_eq!(ind.visual_state().progress(), 1.0);
    }
}
