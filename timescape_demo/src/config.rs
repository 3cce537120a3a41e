// Copyright 2025 the Timescape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional TOML configuration for the demo.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use timescape_layout::TimelineOptions;
use timescape_timer::{IndicatorSpec, LabeledTimerSpec};

/// Demo configuration. Every table and field is optional.
///
/// ```toml
/// [timeline]
/// time_lookback = 14
/// show_end_caps = true
///
/// [timer]
/// duration = 1000
/// loop = true
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct DemoConfig {
    pub(crate) timeline: TimelineOptions,
    pub(crate) timer: LabeledTimerSpec,
    pub(crate) indicator: IndicatorSpec,
}

/// Loads the configuration at `path`, or the defaults when no path is given.
pub(crate) fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: DemoConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config
        .timeline
        .validate()
        .with_context(|| format!("Invalid [timeline] options in {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_gives_defaults() {
        assert_eq!(load_config(None).unwrap(), DemoConfig::default(), "defaults");
    }

    #[test]
    fn partial_tables_parse() {
        let config: DemoConfig = toml::from_str(
            r#"
            [timeline]
            time_lookback = 14
            label_text_anchor = "end"

            [timer]
            duration = 1000
            loop = true
            label = "Replay"
            "#,
        )
        .unwrap();
        assert_eq!(config.timeline.time_lookback, 14, "lookback");
        assert_eq!(config.timeline.row_height, 44.0, "defaulted");
        assert_eq!(config.timer.timer.duration_ms, 1000, "duration");
        assert!(config.timer.timer.looping, "loop");
        assert_eq!(config.timer.label, "Replay", "label");
        assert_eq!(config.indicator, IndicatorSpec::default(), "indicator untouched");
    }
}
