// Copyright 2025 the Timescape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `timescape_demo`.
//!
//! Layout output is in percent horizontally; everything here converts to pixels for a chart of a
//! fixed width.

use chrono::FixedOffset;
use kurbo::Circle;
use peniko::Color;
use timescape_layout::{
    AnchorEdge, BodyLayout, HeaderLayout, TooltipState, ViewportMetrics, dates_active_text,
};
use timescape_timer::{IndicatorGeometry, LabeledTimerSpec};

const AXIS_COLOR: &str = "#888888";
const GRID_COLOR: &str = "#e4e4e4";
const LINE_COLOR: &str = "#3cb371";
const TODAY_COLOR: &str = "#d62728";

/// Converts layout percentages into pixels.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PixelWidth(pub(crate) f64);

impl PixelWidth {
    fn x(self, percent: f64) -> f64 {
        percent / 100.0 * self.0
    }
}

pub(crate) fn header_svg(header: &HeaderLayout, width: PixelWidth) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" class="timeline-header">"#,
        width.0, header.height
    ));
    out.push('\n');
    for tick in &header.ticks {
        let x = width.x(tick.x);
        out.push_str(&format!(
            r#"<line x1="{x}" y1="{}" x2="{x}" y2="{}" stroke="{AXIS_COLOR}"/>"#,
            tick.y1, tick.y2
        ));
        out.push('\n');
    }
    for label in &header.labels {
        out.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="11" text-anchor="{}" fill="{AXIS_COLOR}">{}</text>"#,
            width.x(label.x),
            label.y,
            label.anchor.as_str(),
            escape_xml(&label.text)
        ));
        out.push('\n');
    }
    let now_x = width.0 - width.x(header.now.right);
    out.push_str(&format!(
        r#"<path d="M{now_x} 0 h-28 v14 h28 z" fill="{TODAY_COLOR}"/>"#
    ));
    out.push_str(&format!(
        r#"<text x="{}" y="11" font-size="10" text-anchor="end" fill="white">Now</text>"#,
        now_x - 4.0
    ));
    out.push_str("\n</svg>\n");
    out
}

pub(crate) fn body_svg(body: &BodyLayout, width: PixelWidth) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" class="timeline-chart">"#,
        width.0, body.height
    ));
    out.push('\n');
    out.push_str(&format!(
        r##"<rect x="{}" y="0" width="{}" height="{}" fill="#000000" fill-opacity="0.04"/>"##,
        width.x(body.future.x),
        width.x(body.future.width),
        body.height
    ));
    out.push('\n');
    for x in &body.gridlines {
        let x = width.x(*x);
        out.push_str(&format!(
            r#"<line x1="{x}" y1="0" x2="{x}" y2="{}" stroke="{GRID_COLOR}"/>"#,
            body.height
        ));
        out.push('\n');
    }
    for row in &body.rows {
        out.push_str(&format!(r#"<g class="{}">"#, escape_xml(&row.class_name)));
        out.push_str(&format!(
            r#"<line x1="0" y1="{y}" x2="{}" y2="{y}" stroke="{GRID_COLOR}"/>"#,
            width.0,
            y = row.bounds.divider_y()
        ));
        for line in row.plot_lines.iter().filter(|l| l.is_visible()) {
            out.push_str(&format!(
                r#"<line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{LINE_COLOR}" stroke-width="4"/>"#,
                width.x(line.x_start),
                width.x(line.x_end),
                y = line.y_middle
            ));
        }
        out.push_str("</g>\n");
    }
    for cap in &body.end_caps {
        out.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{LINE_COLOR}"/>"#,
            width.x(cap.cx),
            cap.cy,
            cap.r
        ));
        out.push('\n');
    }
    let today = width.x(body.today_x);
    out.push_str(&format!(
        r#"<line x1="{today}" y1="0" x2="{today}" y2="{}" stroke="{TODAY_COLOR}"/>"#,
        body.height
    ));
    out.push('\n');
    if let Some(marker) = body.session_marker_x {
        let x = width.x(marker);
        out.push_str(&format!(
            r#"<line x1="{x}" y1="0" x2="{x}" y2="{}" stroke="{AXIS_COLOR}" stroke-dasharray="4 3"/>"#,
            body.height
        ));
        out.push('\n');
    }
    out.push_str("</svg>\n");
    out
}

pub(crate) fn tooltip_html(
    state: &TooltipState,
    viewport: ViewportMetrics,
    offset: FixedOffset,
    date_format: &str,
) -> String {
    let (Some(data), Some(placement)) = (state.data(), state.placement(viewport)) else {
        return String::from(r#"<div class="timeline-tooltip hidden"></div>"#);
    };
    let edge = match placement.anchor_edge {
        AnchorEdge::Left => "left",
        AnchorEdge::Right => "right",
    };
    format!(
        r#"<div class="{}" style="top: {}px; {edge}: {}%; transform: {}"><strong>{}</strong><br>{}</div>"#,
        placement.class_name(false),
        placement.vertical_anchor_px,
        placement.horizontal_offset_percent,
        placement.transform(),
        escape_xml(&data.name),
        escape_xml(&dates_active_text(&data.geometry.dates, offset, date_format)),
    )
}

pub(crate) fn indicator_svg(geometry: &IndicatorGeometry) -> String {
    let color = color_hex(geometry.color.color());
    let view_box = geometry.view_box;
    let mut out = String::new();
    out.push_str(&format!(
        r#"<div class="{}" style="width: {w}px; height: {w}px">"#,
        geometry.container_class(),
        w = geometry.width
    ));
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}" class="{}">"#,
        geometry.width,
        geometry.width,
        view_box.x0,
        view_box.y0,
        view_box.width(),
        view_box.height(),
        geometry.layer_class()
    ));
    if let Some(background) = geometry.background {
        push_circle(&mut out, background, &color, 0.25, None);
    }
    if !geometry.wedge.elements().is_empty() {
        out.push_str(&format!(
            r#"<path d="{}" fill="{color}" class="circular-timer-fill"/>"#,
            geometry.wedge.to_svg()
        ));
    }
    if let Some(outline) = geometry.outline {
        push_circle(&mut out, outline, &color, 0.0, Some(geometry.stroke_width));
    }
    out.push_str("</svg></div>");
    out
}

pub(crate) fn labeled_timer_html(spec: &LabeledTimerSpec, indicator: &IndicatorGeometry) -> String {
    format!(
        r#"<div class="{}">{}<span class="{}">{}</span></div>"#,
        spec.class_name(),
        indicator_svg(indicator),
        spec.label_class(),
        escape_xml(&spec.label)
    )
}

fn push_circle(out: &mut String, circle: Circle, color: &str, opacity: f64, stroke: Option<f64>) {
    out.push_str(&format!(
        r#"<circle cx="{}" cy="{}" r="{}""#,
        circle.center.x, circle.center.y, circle.radius
    ));
    match stroke {
        Some(width) => {
            out.push_str(&format!(r#" fill="none" stroke="{color}" stroke-width="{width}""#));
        }
        None => {
            out.push_str(&format!(r#" fill="{color}" fill-opacity="{opacity}""#));
        }
    }
    out.push_str("/>");
}

fn color_hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
