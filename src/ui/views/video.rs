use std::path::Path;

use ratatui::text::Line;

use crate::{
    impl_prompt_view,
    model::analysis::VideoReport,
    styled_line, styled_span,
    ui::{Controller, TextCreationResult},
};

// ============================================================================
// Video Analyzer View
// ============================================================================

fn report_lines(report: &VideoReport) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    match report.success {
        true => lines.push(styled_line!("Analysis completed successfully"; Green Bold)),
        false => lines.push(styled_line!("Analysis failed"; Red Bold)),
    }
    lines.push(styled_line!());

    if let Some(message) = &report.message {
        lines.push(styled_line!("Message"; Cyan));
        lines.push(styled_line!(message.clone()));
        lines.push(styled_line!());
    }

    if let Some(data) = &report.data {
        lines.push(styled_line!("Analysis Data"; Cyan));
        for data_line in data.pretty(2).lines() {
            lines.push(styled_line!(data_line.to_string()));
        }
        lines.push(styled_line!());
    }

    if let Some(error) = &report.error {
        lines.push(styled_line!("Error Details"; Red));
        lines.push(styled_line!(error.clone(); Red));
    }

    lines
}

fn video_analysis_view(ctrl: &Controller, input: &str) -> TextCreationResult {
    let input = input.trim();
    if input.is_empty() {
        return Ok(vec![styled_line!("Please enter the path of a video file."; Red)]);
    }

    let path = Path::new(input);
    let report = ctrl.manager.analyze_video(path)?;

    let mut lines = vec![
        styled_line!(LIST [
            styled_span!("Uploaded: "),
            styled_span!(input.to_string(); White Bold),
        ]),
        styled_line!(),
    ];
    lines.extend(report_lines(&report));
    Ok(lines)
}

impl_prompt_view!(VideoAnalysisView, video_analysis_view, "Video Analyzer");
