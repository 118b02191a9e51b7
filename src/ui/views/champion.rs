use ratatui::text::Line;

use crate::{
    impl_prompt_view,
    model::champion::Champion,
    styled_line, styled_span,
    ui::{Controller, TextCreationResult},
};

// ============================================================================
// Champion Detail View
// ============================================================================

fn rating_bar(label: &str, value: u8) -> Line<'static> {
    let filled = value.min(10) as usize;
    let bar = format!("{}{}", "●".repeat(filled), "○".repeat(10 - filled));
    styled_line!(LIST [
        styled_span!("{:<12}", label),
        styled_span!(bar; Yellow),
        styled_span!("  {}/10", value; DarkGray),
    ])
}

fn stat_line(label: &str, base: f64, per_level: f64) -> Line<'static> {
    styled_line!(LIST [
        styled_span!("{:<16}", label),
        styled_span!("{:>7}", base; White Bold),
        styled_span!("  (+{} per level)", per_level; DarkGray),
    ])
}

fn champion_lines(champion: &Champion) -> Vec<Line<'static>> {
    let stats = &champion.stats;
    vec![
        styled_line!("{}, {}", champion.name, champion.title; Cyan Bold),
        styled_line!(),
        styled_line!("{}", champion.blurb),
        styled_line!(),
        styled_line!(LIST [
            styled_span!("Roles:          "),
            styled_span!(champion.tags.join(", "); LightBlue),
        ]),
        styled_line!(LIST [
            styled_span!("Resource Type:  "),
            styled_span!(champion.resource_type.clone(); LightBlue),
        ]),
        styled_line!(),
        styled_line!("Base Stats"; Cyan),
        stat_line("Health", stats.hp, stats.hp_per_level),
        stat_line("Mana", stats.mp, stats.mp_per_level),
        styled_line!(LIST [
            styled_span!("{:<16}", "Movement Speed"),
            styled_span!("{:>7}", stats.move_speed; White Bold),
        ]),
        stat_line("Attack Damage", stats.attack_damage, stats.attack_damage_per_level),
        stat_line("Armor", stats.armor, stats.armor_per_level),
        stat_line("Magic Resist", stats.spell_block, stats.spell_block_per_level),
        styled_line!(LIST [
            styled_span!("{:<16}", "Attack Range"),
            styled_span!("{:>7}", stats.attack_range; White Bold),
        ]),
        styled_line!(LIST [
            styled_span!("{:<16}", "Attack Speed"),
            styled_span!("{:>7}", stats.attack_speed; White Bold),
        ]),
        styled_line!(),
        styled_line!("Ratings"; Cyan),
        rating_bar("Attack", champion.ratings.attack),
        rating_bar("Defense", champion.ratings.defense),
        rating_bar("Magic", champion.ratings.magic),
        rating_bar("Difficulty", champion.ratings.difficulty),
    ]
}

fn champion_detail_view(ctrl: &Controller, input: &str) -> TextCreationResult {
    let input = input.trim();
    if input.is_empty() {
        return Ok(vec![styled_line!("Please enter a champion name."; Red)]);
    }

    let champion = ctrl.lookup.find(input)?;
    Ok(champion_lines(champion))
}

impl_prompt_view!(ChampionDetailView, champion_detail_view, "Champion Details");
