// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration for a refresh control.

use crate::error::ConfigIssue;

/// Immutable configuration owned by a
/// [`RefreshController`](crate::controller::RefreshController) for its lifetime.
///
/// ```
/// use understory_refresh::config::RefreshConfig;
///
/// let config = RefreshConfig::new(80.0).with_indicator_height(44.0);
/// assert!(config.validate().is_ok());
/// assert!(RefreshConfig::new(0.0).validate().is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RefreshConfig {
    /// Pull distance past the resting offset required to arm a trigger.
    pub threshold: f64,
    /// Natural height of the default [`PullIndicator`](crate::indicator::PullIndicator).
    pub indicator_height: f64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            threshold: 60.0,
            indicator_height: 44.0,
        }
    }
}

impl RefreshConfig {
    /// Configuration with the given threshold and the default indicator height.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// Replace the pull threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Replace the default indicator height.
    #[must_use]
    pub fn with_indicator_height(mut self, height: f64) -> Self {
        self.indicator_height = height;
        self
    }

    /// Check that the threshold is positive and the indicator height usable.
    pub fn validate(&self) -> Result<(), ConfigIssue> {
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err(ConfigIssue::NonPositiveThreshold(self.threshold));
        }
        validate_height(self.indicator_height)
    }
}

/// Heights must be finite and not negative; zero is allowed.
pub(crate) fn validate_height(height: f64) -> Result<(), ConfigIssue> {
    if height.is_finite() && height >= 0.0 {
        Ok(())
    } else {
        Err(ConfigIssue::InvalidIndicatorHeight(height))
    }
}
