// Copyright 2025 the Timescape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors for timeline layout.

/// Result alias used throughout the layout crate.
pub type Result<T> = core::result::Result<T, TimelineError>;

/// Errors raised when a timeline cannot be laid out from its inputs.
///
/// All of these are configuration errors: the layer above must not render a chart
/// from inputs that produce one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimelineError {
    /// The lookback day count is negative.
    #[error("lookback must be at least 0 days, got {0}")]
    NegativeLookback(i64),
    /// The lookahead day count is negative.
    #[error("lookahead must be at least 0 days, got {0}")]
    NegativeLookahead(i64),
    /// The window spans zero days, so `max == min`.
    #[error("time window is empty: lookback + lookahead must be greater than 0")]
    EmptyWindow,
    /// The window cannot be represented as calendar dates or millisecond timestamps.
    #[error("time window is out of the representable date range")]
    WindowTooLarge,
    /// Horizontal padding outside of `[0, 50)`.
    #[error("horizontal padding must be in [0, 50) percent, got {0}")]
    InvalidPadding(f64),
    /// The header was asked for zero labels.
    #[error("label count must be at least 1")]
    ZeroLabelCount,
    /// A pixel dimension is negative or not finite.
    #[error("{name} must be a finite, non-negative number, got {value}")]
    InvalidDimension {
        /// Option name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A date format string contains an unknown specifier.
    #[error("{name} is not a valid strftime format: {format:?}")]
    InvalidDateFormat {
        /// Option name.
        name: &'static str,
        /// Offending format string.
        format: alloc::string::String,
    },
}
