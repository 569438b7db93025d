// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced by construction and attachment.
//!
//! Every other operation on the [controller](crate::controller) is total:
//! double detach, double end, and detach without attach are no-ops.

use thiserror::Error;

/// Error returned by [`RefreshController`](crate::controller::RefreshController)
/// constructors and [`attach`](crate::controller::RefreshController::attach).
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum RefreshError {
    /// The configuration was rejected at construction time.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigIssue),
    /// The scroll source could not be attached; the controller stays unattached.
    #[error("invalid attachment: {0}")]
    InvalidAttachment(#[from] AttachIssue),
}

/// Why a [`RefreshConfig`](crate::config::RefreshConfig) or indicator was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum ConfigIssue {
    /// Threshold must be finite and strictly positive.
    #[error("pull threshold must be positive and finite, got {0}")]
    NonPositiveThreshold(f64),
    /// Indicator height must be finite and not negative.
    #[error("indicator height must be non-negative and finite, got {0}")]
    InvalidIndicatorHeight(f64),
}

/// Why a scroll source could not be attached.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum AttachIssue {
    /// The source was already dropped.
    #[error("scroll source is gone")]
    SourceDropped,
    /// The source declined to deliver offset changes.
    #[error("scroll source refused an offset subscription")]
    SubscriptionRefused,
}
