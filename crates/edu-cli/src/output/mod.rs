use serde::Serialize;

use crate::cli::OutputFormat;

pub mod lane;

/// Render a serializable value as JSON in the requested format.
pub fn render_json<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Json | OutputFormat::Text => Ok(serde_json::to_string_pretty(value)?),
    }
}

/// Render one lane in the requested format.
pub fn render_lane(view: &edu_workspace::LaneView, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(lane::render_text(view)),
        OutputFormat::Json | OutputFormat::Raw => render_json(view, format),
    }
}

#[cfg(test)]
mod tests {
    use edu_core::{LaneKind, LaneStatus};
    use edu_workspace::{LaneBody, LaneView};

    use super::render_lane;
    use crate::cli::OutputFormat;

    fn view() -> LaneView {
        LaneView {
            kind: LaneKind::Summary,
            title: LaneKind::Summary.title(),
            status: LaneStatus::Ready,
            enabled: true,
            error: None,
            body: LaneBody::Text("## Understanding Summary".into()),
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render_lane(&view(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["kind"], "summary");
        assert_eq!(parsed["body"]["value"], "## Understanding Summary");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render_lane(&view(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["status"], "ready");
    }

    #[test]
    fn text_render_has_header_and_body() {
        let out = render_lane(&view(), OutputFormat::Text).expect("text render should work");
        assert!(out.starts_with("== Understanding Summary [ready] =="));
        assert!(out.contains("## Understanding Summary"));
    }
}
