// Copyright 2025 the Timescape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a sample activity timeline and countdown timer to `timescape_demo.html`.
//!
//! Usage: `timescape_demo [options.toml]`. Set `RUST_LOG=debug` to trace layout and timer events.

mod config;
mod fixture;
mod html;
mod svg;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use timescape_layout::{
    DAY_MS, HoveredPlotLine, SystemClock, TimelineInput, TimelineLayout, TooltipState,
    ViewportMetrics, WallClock, header_padding_right,
};
use timescape_timer::{FrameQueue, ManualClock, MonotonicClock, ProgressTimer};
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;
use crate::html::HtmlSection;
use crate::svg::PixelWidth;

const CHART_WIDTH: PixelWidth = PixelWidth(800.0);
const VIEWPORT_HEIGHT: f64 = 240.0;
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const OUTPUT: &str = "timescape_demo.html";

fn main() -> Result<()> {
    install_tracing();
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = config::load_config(path.as_deref())?;

    let sections = vec![timeline_section(&config)?, timer_section(&config)];
    let html = html::render_report("Timescape demo", &sections);
    std::fs::write(OUTPUT, html).with_context(|| format!("Failed to write {OUTPUT}"))?;
    tracing::info!(path = OUTPUT, "wrote report");
    Ok(())
}

fn install_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}

fn timeline_section(config: &DemoConfig) -> Result<HtmlSection> {
    let now = SystemClock.now();
    let now_ms = now.timestamp_millis();
    let entries = fixture::entries(now_ms);
    let counts = fixture::counts(&entries, now_ms);
    let input = TimelineInput::new(now, &entries).with_session_marker(now_ms - 9 * DAY_MS);
    let layout =
        TimelineLayout::new(&config.timeline, &input).context("Failed to lay out timeline")?;

    let mut tooltip = TooltipState::new();
    tooltip.show(
        layout
            .body
            .rows
            .get(1)
            .and_then(|row| HoveredPlotLine::from_row(row, 1)),
    );
    let viewport = ViewportMetrics {
        scroll_offset: 0.0,
        visible_height: VIEWPORT_HEIGHT,
    };
    let scrollbar = if layout.body.height > VIEWPORT_HEIGHT { 15.0 } else { 0.0 };
    let padding_right = header_padding_right(CHART_WIDTH.0, CHART_WIDTH.0 - scrollbar).max(0.0);

    let mut body = String::new();
    body.push_str(&format!(
        r#"<div class="timeline"><div class="timeline-header" style="padding-right: {padding_right}px">"#
    ));
    body.push_str(&svg::header_svg(&layout.header, CHART_WIDTH));
    body.push_str(r#"</div><div class="timeline-body">"#);
    body.push_str(&svg::body_svg(&layout.body, CHART_WIDTH));
    body.push_str(&svg::tooltip_html(
        &tooltip,
        viewport,
        layout.window.offset(),
        &config.timeline.tooltip_date_format,
    ));
    body.push_str("</div></div>\n");
    let rows = serde_json::to_string_pretty(&layout.body.rows).context("Failed to encode rows")?;
    body.push_str(&format!(
        "<details><summary>Row layout</summary><pre>{}</pre></details>\n",
        svg::escape_xml(&rows)
    ));

    Ok(HtmlSection {
        title: "Timeline",
        description: format!(
            "{} days, {} rows. Active {} ({} tests), scheduled {}, total {}.",
            layout.window.total_days(),
            layout.body.rows.len(),
            counts.active,
            counts.active_test,
            counts.scheduled,
            counts.total
        ),
        body,
    })
}

fn timer_section(config: &DemoConfig) -> HtmlSection {
    let options = config.timer.timer.with_start(true);
    let run = options.duration().max(FRAME_INTERVAL);
    let clock = ManualClock::default();
    let mut frames = FrameQueue::new();
    let mut timer = ProgressTimer::new(options)
        .with_on_complete(|| tracing::info!("timer run complete"));
    timer.mount(clock.now(), &mut frames);

    // Snapshot the indicator at each quarter of the first run, then let a loop run on.
    let mut snapshots = Vec::new();
    let mut next_snapshot = 0.0;
    let horizon = run.saturating_mul(if options.looping { 2 } else { 1 }) + FRAME_INTERVAL;
    while clock.now() <= horizon && !frames.is_empty() {
        let now = clock.now();
        frames.dispatch(|id, q| {
            timer.on_frame(id, now, q);
        });
        if next_snapshot <= 1.0 && timer.progress() >= next_snapshot {
            snapshots.push(timer.progress());
            next_snapshot += 0.25;
        }
        clock.advance(FRAME_INTERVAL);
    }

    let mut body = String::from(r#"<div class="frames">"#);
    for progress in &snapshots {
        let geometry = config.indicator.geometry(*progress);
        body.push_str(&format!(
            "<figure>{}<figcaption>{:.0}%</figcaption></figure>",
            svg::indicator_svg(&geometry),
            progress * 100.0
        ));
    }
    let badge = config.timer.indicator().geometry(snapshots.get(2).copied().unwrap_or(0.5));
    body.push_str(&svg::labeled_timer_html(&config.timer, &badge));
    body.push_str("</div>\n");

    HtmlSection {
        title: "Timer",
        description: format!(
            "{} ms run, loop {}, {} completion(s) in {} simulated frames.",
            options.duration_ms,
            options.looping,
            timer.completions(),
            horizon.as_millis() / FRAME_INTERVAL.as_millis()
        ),
        body,
    }
}
