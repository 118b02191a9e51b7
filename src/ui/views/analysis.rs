use ratatui::text::Line;

use crate::{
    impl_prompt_view,
    model::analysis::AnalysisBlock,
    service::analysis::markdown,
    styled_line, styled_span,
    ui::{Controller, TextCreationResult},
};

// ============================================================================
// AI Insight Views
// ============================================================================

fn block_line(block: &AnalysisBlock) -> Line<'static> {
    match block {
        AnalysisBlock::Heading { level: 1, text } => styled_line!(text.to_uppercase(); Cyan Bold),
        AnalysisBlock::Heading { level: 2, text } => styled_line!(text.clone(); Cyan Bold),
        AnalysisBlock::Heading { text, .. } => styled_line!(text.clone(); LightCyan),
        AnalysisBlock::KeyValue { key, value } => styled_line!(LIST [
            styled_span!("{}: ", key; White Bold),
            styled_span!(value.clone()),
        ]),
        AnalysisBlock::Bullet(text) => styled_line!("  • {}", text),
        AnalysisBlock::Paragraph(text) => styled_line!(text.clone()),
        AnalysisBlock::Blank => styled_line!(),
    }
}

fn insight_lines(content: &str) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = markdown::parse_blocks(content).iter().map(block_line).collect();
    lines.push(styled_line!());
    lines.push(styled_line!("Analysis generated by AI - response saved to analysis/"; DarkGray));
    lines
}

fn match_analysis_view(ctrl: &Controller, input: &str) -> TextCreationResult {
    let input = input.trim();
    if input.is_empty() {
        return Ok(vec![styled_line!("Please enter a match ID to analyze."; Red)]);
    }

    let m = ctrl.manager.get_match(&input.into())?;
    let content = ctrl.manager.analyze_match(&m)?;
    Ok(insight_lines(&content))
}

fn champion_analysis_view(ctrl: &Controller, input: &str) -> TextCreationResult {
    let input = input.trim();
    if input.is_empty() {
        return Ok(vec![styled_line!("Please enter a champion name to analyze."; Red)]);
    }

    let champion = ctrl.lookup.find(input)?;
    let content = ctrl.manager.analyze_champion(champion)?;
    Ok(insight_lines(&content))
}

impl_prompt_view!(MatchAnalysisView, match_analysis_view, "AI Match Analysis");

impl_prompt_view!(ChampionAnalysisView, champion_analysis_view, "AI Champion Analysis");
