use json::JsonValue;

use crate::model::{champion::Champion, match_data::Match};

/// Builds the narrowed insights request body for a match: participants
/// grouped per team, objective counts taken from the first team record.
pub fn match_payload(m: &Match) -> JsonValue {
    let mut teams: Vec<JsonValue> = Vec::new();
    for participant in &m.participants {
        let team_id = participant.team_id;
        if !teams.iter().any(|t| t["teamId"] == team_id) {
            teams.push(json::object! {
                teamId: team_id,
                win: participant.win,
                participants: JsonValue::new_array(),
            });
        }

        let entry = json::object! {
            championName: participant.champion_name.as_str(),
            summonerName: participant.display_name(),
            kills: participant.kills,
            deaths: participant.deaths,
            assists: participant.assists,
            cs: participant.total_minions_killed,
            gold: participant.gold_earned,
            damage: participant.total_damage_to_champions,
            visionScore: participant.vision_score,
            level: participant.champ_level,
            position: participant.team_position.as_str(),
        };
        if let Some(team) = teams.iter_mut().find(|t| t["teamId"] == team_id) {
            let _ = team["participants"].push(entry);
        }
    }

    let first_team = m.teams.first();
    let objective = |pick: fn(&crate::model::match_data::Team) -> u16| first_team.map(pick).unwrap_or(0);

    json::object! {
        matchId: m.match_id.to_string(),
        gameDuration: m.game_duration_secs,
        gameMode: m.game_mode.as_str(),
        queueId: m.queue_id,
        teams: JsonValue::Array(teams),
        objectives: json::object! {
            baronKills: objective(|t| t.objectives.baron.kills),
            dragonKills: objective(|t| t.objectives.dragon.kills),
            riftHeraldKills: objective(|t| t.objectives.rift_herald.kills),
            towerKills: objective(|t| t.objectives.tower.kills),
        },
    }
}

/// Builds the insights request body for a single champion.
pub fn champion_payload(champion: &Champion) -> JsonValue {
    let tags: Vec<JsonValue> = champion.tags.iter().map(|t| JsonValue::from(t.as_str())).collect();

    json::object! {
        championId: champion.id.to_string(),
        name: champion.name.as_str(),
        title: champion.title.as_str(),
        tags: JsonValue::Array(tags),
        resourceType: champion.resource_type.as_str(),
        stats: json::object! {
            hp: champion.stats.hp,
            mp: champion.stats.mp,
            moveSpeed: champion.stats.move_speed,
            armor: champion.stats.armor,
            spellBlock: champion.stats.spell_block,
            attackDamage: champion.stats.attack_damage,
            attackRange: champion.stats.attack_range,
            attackSpeed: champion.stats.attack_speed,
        },
        ratings: json::object! {
            attack: champion.ratings.attack,
            defense: champion.ratings.defense,
            magic: champion.ratings.magic,
            difficulty: champion.ratings.difficulty,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ids::MatchId,
        match_data::{Objectives, Participant, Team},
    };

    fn participant(team_id: u16, champion: &str, win: bool) -> Participant {
        Participant {
            summoner_name: format!("{} player", champion),
            riot_id: String::new(),
            champion_name: champion.to_string(),
            champ_level: 15,
            team_id,
            team_position: "MIDDLE".to_string(),
            kills: 4,
            deaths: 2,
            assists: 6,
            gold_earned: 11000,
            total_minions_killed: 160,
            neutral_minions_killed: 24,
            total_damage_to_champions: 18000,
            vision_score: 18,
            wards_placed: 7,
            items: [0; 7],
            largest_multi_kill: 1,
            win,
        }
    }

    fn sample_match() -> Match {
        let mut objectives = Objectives::default();
        objectives.baron.kills = 1;
        objectives.dragon.kills = 3;
        objectives.tower.kills = 8;

        Match {
            match_id: MatchId::from("EUN1_1"),
            game_creation: Default::default(),
            game_duration_secs: 1800,
            game_mode: "CLASSIC".to_string(),
            game_version: "12.10".to_string(),
            queue_id: 420,
            tournament_code: String::new(),
            participants: vec![
                participant(100, "Zed", true),
                participant(200, "Annie", false),
                participant(100, "Garen", true),
            ],
            teams: vec![Team {
                team_id: 100,
                win: true,
                bans: Vec::new(),
                objectives,
            }],
        }
    }

    #[test]
    fn participants_are_grouped_by_team_id() {
        let payload = match_payload(&sample_match());
        let teams = &payload["teams"];
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0]["teamId"], 100);
        assert_eq!(teams[0]["participants"].len(), 2);
        assert_eq!(teams[1]["teamId"], 200);
        assert_eq!(teams[1]["participants"].len(), 1);
        assert_eq!(teams[0]["participants"][1]["championName"], "Garen");
    }

    #[test]
    fn payload_cs_counts_lane_minions_only() {
        let payload = match_payload(&sample_match());
        assert_eq!(payload["teams"][0]["participants"][0]["cs"], 160);
    }

    #[test]
    fn objectives_come_from_first_team_record() {
        let payload = match_payload(&sample_match());
        assert_eq!(payload["objectives"]["baronKills"], 1);
        assert_eq!(payload["objectives"]["dragonKills"], 3);
        assert_eq!(payload["objectives"]["towerKills"], 8);
        assert_eq!(payload["objectives"]["riftHeraldKills"], 0);
    }

    #[test]
    fn objectives_default_to_zero_without_team_records() {
        let mut m = sample_match();
        m.teams.clear();
        let payload = match_payload(&m);
        assert_eq!(payload["objectives"]["baronKills"], 0);
    }

    #[test]
    fn champion_payload_selects_identity_and_stats() {
        use crate::model::champion::{BaseStats, Ratings};
        let champion = Champion {
            id: "Zed".into(),
            name: "Zed".to_string(),
            title: "the Master of Shadows".to_string(),
            blurb: String::new(),
            tags: vec!["Assassin".to_string()],
            resource_type: "Energy".to_string(),
            stats: BaseStats {
                hp: 654.0,
                hp_per_level: 99.0,
                mp: 200.0,
                mp_per_level: 0.0,
                move_speed: 345.0,
                armor: 32.0,
                armor_per_level: 4.2,
                spell_block: 29.0,
                spell_block_per_level: 2.05,
                attack_damage: 63.0,
                attack_damage_per_level: 3.4,
                attack_range: 125.0,
                attack_speed: 0.651,
            },
            ratings: Ratings {
                attack: 9,
                defense: 2,
                magic: 1,
                difficulty: 7,
            },
        };

        let payload = champion_payload(&champion);
        assert_eq!(payload["championId"], "Zed");
        assert_eq!(payload["tags"][0], "Assassin");
        assert_eq!(payload["stats"]["hp"], 654.0);
        assert_eq!(payload["ratings"]["difficulty"], 7);
    }
}
