// Copyright 2025 the Timescape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Date label formatting.

extern crate alloc;

use alloc::string::String;
use core::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset};

/// Returns `true` if `format` only contains known strftime specifiers.
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Formats `date` with a strftime `format`.
///
/// Formats that fail to render (for example, an unknown specifier that slipped past validation)
/// fall back to RFC 3339.
pub fn format_date(date: &DateTime<FixedOffset>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        return date.to_rfc3339();
    }
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use chrono::TimeZone;

    use super::*;

    #[test]
    fn month_day_labels() {
        let d = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 5, 0, 0, 0)
            .unwrap();
        assert_eq!(format_date(&d, "%b %-d"), "Mar 5", "header label");
        assert_eq!(format_date(&d, "%b %-d, %Y"), "Mar 5, 2024", "tooltip date");
    }

    #[test]
    fn unknown_specifiers_are_detected() {
        assert!(is_valid_date_format("%b %-d"), "valid format");
        assert!(!is_valid_date_format("%Q"), "unknown specifier");
    }

    #[test]
    fn invalid_formats_fall_back_to_rfc3339() {
        let d = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 5, 6, 0, 0)
            .unwrap();
        assert_eq!(format_date(&d, "%Q"), d.to_rfc3339(), "fallback");
    }
}
