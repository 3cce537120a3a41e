// Copyright 2025 the Timescape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Standalone HTML report wrapping the demo's SVG output.

use crate::svg::escape_xml;

/// One titled block of the report.
#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: &'static str,
    pub(crate) description: String,
    pub(crate) body: String,
}

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 24px; color: #222; }
section { margin-bottom: 40px; }
.timeline { position: relative; width: 800px; }
.timeline-body { position: relative; max-height: 240px; overflow-y: auto; border: 1px solid #ddd; }
.timeline-tooltip { position: absolute; background: #333; color: #fff; padding: 4px 8px; border-radius: 3px; font-size: 12px; white-space: nowrap; }
.timeline-tooltip.hidden { display: none; }
.labeled-timer { display: inline-flex; align-items: center; background: #3cb371; padding: 2px 8px; border-radius: 10px; }
.timer-label { color: #fff; font-weight: bold; margin-left: 4px; font-size: 12px; }
.circular-timer-container { display: inline-block; position: relative; }
.frames { display: flex; gap: 12px; align-items: center; }
.frames figure { margin: 0; text-align: center; font-size: 11px; }
"#;

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_xml(title)));
    out.push_str(&format!("<style>{STYLE}</style>\n"));
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_xml(title)));
    for section in sections {
        out.push_str("<section>\n");
        out.push_str(&format!("<h2>{}</h2>\n", escape_xml(section.title)));
        out.push_str(&format!("<p>{}</p>\n", escape_xml(&section.description)));
        out.push_str(&section.body);
        out.push_str("</section>\n");
    }
    out.push_str("</body>\n</html>\n");
    out
}
