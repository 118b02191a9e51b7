use ratatui::text::Line;

use crate::{
    impl_prompt_view, impl_text_view,
    model::champion::Champion,
    service::catalog::ROLE_TAGS,
    styled_line, styled_span,
    ui::{Controller, TextCreationResult},
};

// ============================================================================
// Champion Catalog Views
// ============================================================================

fn catalog_lines(shown: &[&Champion], total: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    lines.push(styled_line!("Showing {} of {} champions", shown.len(), total; Cyan));
    lines.push(styled_line!());

    if shown.is_empty() {
        lines.push(styled_line!("No champions found matching your criteria"; Red));
        lines.push(styled_line!("Try adjusting your search or filter options"; DarkGray));
        return lines;
    }

    for champion in shown {
        lines.push(styled_line!(LIST [
            styled_span!("{:<16}", champion.name; White Bold),
            styled_span!("{:<28}", champion.title),
            styled_span!("[{}]", champion.tags.join(", "); DarkGray),
        ]));
    }
    lines
}

fn browse_champions_view(ctrl: &Controller) -> TextCreationResult {
    Ok(catalog_lines(&ctrl.catalog.all(), ctrl.catalog.total()))
}

fn search_champions_view(ctrl: &Controller, query: &str) -> TextCreationResult {
    Ok(catalog_lines(&ctrl.catalog.search(query), ctrl.catalog.total()))
}

fn role_filter_view(ctrl: &Controller, role: &str) -> TextCreationResult {
    let role = role.trim();
    if role.is_empty() {
        // Empty selection means "All Roles"
        return Ok(catalog_lines(&ctrl.catalog.all(), ctrl.catalog.total()));
    }

    match ROLE_TAGS.iter().find(|t| t.eq_ignore_ascii_case(role)) {
        Some(tag) => Ok(catalog_lines(&ctrl.catalog.with_tag(tag), ctrl.catalog.total())),
        None => Ok(vec![
            styled_line!("Unknown role: {}", role; Red),
            styled_line!("Valid roles: {}", ROLE_TAGS.join(", "); DarkGray),
        ]),
    }
}

impl_text_view!(BrowseChampionsView, browse_champions_view, "All Champions");

impl_prompt_view!(SearchChampionsView, search_champions_view, "Champion Search");

impl_prompt_view!(RoleFilterView, role_filter_view, "Champions by Role");
