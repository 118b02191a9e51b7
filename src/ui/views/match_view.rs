use ratatui::text::Line;

use crate::{
    impl_prompt_view,
    model::match_data::{Match, Participant, Team},
    service::lookup::ChampionLookup,
    styled_line, styled_span,
    ui::{Controller, TextCreationResult},
};

// ============================================================================
// Match Lookup View
// ============================================================================

fn team_label(team_id: u16) -> String {
    match team_id {
        100 => "Team 100 (Blue Side)".to_string(),
        200 => "Team 200 (Red Side)".to_string(),
        other => format!("Team {}", other),
    }
}

fn participant_lines(participant: &Participant, lookup: &ChampionLookup) -> Vec<Line<'static>> {
    // Enrich with catalog metadata where the champion is known
    let champion_label = match lookup.by_champion_name(&participant.champion_name) {
        Some(champion) => format!("{} ({})", champion.name, champion.title),
        None if participant.champion_name.is_empty() => "Unknown".to_string(),
        None => participant.champion_name.clone(),
    };

    let mut lines = vec![styled_line!(LIST [
        styled_span!("  {:<34}", champion_label; White Bold),
        styled_span!("{:<24}", participant.display_name()),
        styled_span!("{:<10}", format!("{}/{}/{}", participant.kills, participant.deaths, participant.assists); Yellow),
        styled_span!("{:>4.1} kda  ", participant.kda()),
        styled_span!("{:>5} cs  ", participant.cs()),
        styled_span!("{:>6} gold  ", participant.gold_earned),
        styled_span!("{:>6} dmg  ", participant.total_damage_to_champions),
        styled_span!("{:<8}", participant.team_position; DarkGray),
    ])];

    let mut extras = vec![
        format!("lvl {}", participant.champ_level),
        format!("{} vision", participant.vision_score),
        format!("{} wards", participant.wards_placed),
    ];
    if participant.largest_multi_kill >= 2 {
        extras.push(format!("largest multikill {}", participant.largest_multi_kill));
    }
    let item_ids: Vec<String> = participant
        .items
        .iter()
        .filter(|&&item| item != 0)
        .map(|item| item.to_string())
        .collect();
    if !item_ids.is_empty() {
        extras.push(format!("items {}", item_ids.join("/")));
    }
    lines.push(styled_line!("      {}", extras.join(", "); DarkGray));

    lines
}

fn team_lines(team: &Team, members: &[&Participant], lookup: &ChampionLookup) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let result_span = match team.win {
        true => styled_span!("VICTORY"; Green Bold),
        false => styled_span!("DEFEAT"; Red Bold),
    };
    lines.push(styled_line!(LIST [
        styled_span!("{}  ", team_label(team.team_id); Cyan Bold),
        result_span,
    ]));

    let o = &team.objectives;
    lines.push(styled_line!(
        "  Objectives: {} barons, {} dragons, {} heralds, {} towers, {} inhibitors",
        o.baron.kills, o.dragon.kills, o.rift_herald.kills, o.tower.kills, o.inhibitor.kills
    ));

    let mut firsts = Vec::new();
    if o.champion.first {
        firsts.push("blood");
    }
    if o.tower.first {
        firsts.push("tower");
    }
    if o.dragon.first {
        firsts.push("dragon");
    }
    if o.baron.first {
        firsts.push("baron");
    }
    if !firsts.is_empty() {
        lines.push(styled_line!("  First: {}", firsts.join(", "); DarkGray));
    }

    if !team.bans.is_empty() {
        let mut bans: Vec<_> = team.bans.iter().collect();
        bans.sort_by_key(|b| b.pick_turn);
        let bans = bans.iter().map(|b| b.champion_id.to_string()).collect::<Vec<_>>().join(", ");
        lines.push(styled_line!("  Bans (champion ids, pick order): {}", bans; DarkGray));
    }

    lines.push(styled_line!());
    for member in members {
        lines.extend(participant_lines(member, lookup));
    }

    lines
}

fn match_lines(m: &Match, lookup: &ChampionLookup) -> Vec<Line<'static>> {
    let mut lines = vec![
        styled_line!("Match {}", m.match_id; Cyan Bold),
        styled_line!(LIST [
            styled_span!("{}  ", m.game_mode),
            styled_span!("Queue {}  ", m.queue_id; DarkGray),
            styled_span!("{}  ", m.duration_display()),
            styled_span!("{}", m.game_creation.format("%Y-%m-%d %H:%M UTC"); DarkGray),
        ]),
    ];
    if !m.game_version.is_empty() {
        lines.push(styled_line!("Patch {}", m.game_version; DarkGray));
    }
    if !m.tournament_code.is_empty() {
        lines.push(styled_line!("Tournament: {}", m.tournament_code; DarkGray));
    }
    lines.push(styled_line!());

    for team in &m.teams {
        let members: Vec<&Participant> = m.participants.iter().filter(|p| p.team_id == team.team_id).collect();
        lines.extend(team_lines(team, &members, lookup));
        lines.push(styled_line!());
    }

    // Defensive: participants whose team id matches no team record
    let orphans: Vec<&Participant> = m
        .participants
        .iter()
        .filter(|p| !m.teams.iter().any(|t| t.team_id == p.team_id))
        .collect();
    if !orphans.is_empty() {
        lines.push(styled_line!("Unassigned participants:"; Cyan));
        for orphan in orphans {
            lines.extend(participant_lines(orphan, lookup));
        }
    }

    lines
}

fn match_lookup_view(ctrl: &Controller, input: &str) -> TextCreationResult {
    let input = input.trim();
    if input.is_empty() {
        return Ok(vec![styled_line!("Please enter a match ID (e.g. EUN1_3849902044)."; Red)]);
    }

    let m = ctrl.manager.get_match(&input.into())?;
    Ok(match_lines(&m, ctrl.lookup))
}

impl_prompt_view!(MatchLookupView, match_lookup_view, "Match Lookup");
