use chrono::{TimeZone, Utc};
use json::{object::Object, JsonValue};

use crate::model::{
    ids::MatchId,
    match_data::{Ban, Match, Objective, Objectives, Participant, Team},
};

use super::ParsingError;

/// Parses a Match-v5 document into the local view model. Only the root and
/// the metadata/info split are required; every leaf field is mapped
/// defensively, absent values default to zero/empty/false.
pub fn parse_match(json: &JsonValue, requested: &MatchId) -> Result<Match, ParsingError> {
    let root = match json {
        JsonValue::Object(root) => root,
        _ => return Err(ParsingError::InvalidType("root".into())),
    };

    let match_id = root["metadata"]["matchId"]
        .as_str()
        .map(MatchId::from)
        .unwrap_or_else(|| requested.clone());

    let info = match &root["info"] {
        JsonValue::Object(info) => info,
        _ => return Err(ParsingError::InvalidType("info".into())),
    };

    let mut participants = Vec::new();
    if let JsonValue::Array(array) = &info["participants"] {
        for entry in array {
            if let JsonValue::Object(obj) = entry {
                participants.push(parse_participant_obj(obj));
            }
        }
    }

    let mut teams = Vec::new();
    if let JsonValue::Array(array) = &info["teams"] {
        for entry in array {
            if let JsonValue::Object(obj) = entry {
                teams.push(parse_team_obj(obj));
            }
        }
    }

    let creation_ms = info["gameCreation"].as_i64().unwrap_or(0);

    Ok(Match {
        match_id,
        game_creation: Utc.timestamp_millis_opt(creation_ms).single().unwrap_or_default(),
        game_duration_secs: info["gameDuration"].as_u32().unwrap_or(0),
        game_mode: info["gameMode"].as_str().unwrap_or_default().to_string(),
        game_version: info["gameVersion"].as_str().unwrap_or_default().to_string(),
        queue_id: info["queueId"].as_u16().unwrap_or(0),
        tournament_code: info["tournamentCode"].as_str().unwrap_or_default().to_string(),
        participants,
        teams,
    })
}

fn parse_participant_obj(obj: &Object) -> Participant {
    let riot_name = obj["riotIdGameName"].as_str().unwrap_or_default();
    let riot_tag = obj["riotIdTagline"].as_str().unwrap_or_default();
    let riot_id = if riot_name.is_empty() {
        String::new()
    } else {
        format!("{}#{}", riot_name, riot_tag)
    };

    Participant {
        summoner_name: obj["summonerName"].as_str().unwrap_or_default().to_string(),
        riot_id,
        champion_name: obj["championName"].as_str().unwrap_or_default().to_string(),
        champ_level: obj["champLevel"].as_u16().unwrap_or(0),
        team_id: obj["teamId"].as_u16().unwrap_or(0),
        team_position: obj["teamPosition"].as_str().unwrap_or_default().to_string(),
        kills: obj["kills"].as_u16().unwrap_or(0),
        deaths: obj["deaths"].as_u16().unwrap_or(0),
        assists: obj["assists"].as_u16().unwrap_or(0),
        gold_earned: obj["goldEarned"].as_u32().unwrap_or(0),
        total_minions_killed: obj["totalMinionsKilled"].as_u32().unwrap_or(0),
        neutral_minions_killed: obj["neutralMinionsKilled"].as_u32().unwrap_or(0),
        total_damage_to_champions: obj["totalDamageDealtToChampions"].as_u32().unwrap_or(0),
        vision_score: obj["visionScore"].as_u32().unwrap_or(0),
        wards_placed: obj["wardsPlaced"].as_u32().unwrap_or(0),
        items: [
            obj["item0"].as_u32().unwrap_or(0),
            obj["item1"].as_u32().unwrap_or(0),
            obj["item2"].as_u32().unwrap_or(0),
            obj["item3"].as_u32().unwrap_or(0),
            obj["item4"].as_u32().unwrap_or(0),
            obj["item5"].as_u32().unwrap_or(0),
            obj["item6"].as_u32().unwrap_or(0),
        ],
        largest_multi_kill: obj["largestMultiKill"].as_u16().unwrap_or(0),
        win: obj["win"].as_bool().unwrap_or(false),
    }
}

fn parse_team_obj(obj: &Object) -> Team {
    let mut bans = Vec::new();
    if let JsonValue::Array(ban_array) = &obj["bans"] {
        for ban_entry in ban_array {
            if let JsonValue::Object(ban_obj) = ban_entry {
                bans.push(Ban {
                    champion_id: ban_obj["championId"].as_i32().unwrap_or(-1),
                    pick_turn: ban_obj["pickTurn"].as_u8().unwrap_or(0),
                });
            }
        }
    }

    let objectives = match &obj["objectives"] {
        JsonValue::Object(objectives_obj) => Objectives {
            baron: parse_objective(objectives_obj, "baron"),
            dragon: parse_objective(objectives_obj, "dragon"),
            rift_herald: parse_objective(objectives_obj, "riftHerald"),
            tower: parse_objective(objectives_obj, "tower"),
            inhibitor: parse_objective(objectives_obj, "inhibitor"),
            champion: parse_objective(objectives_obj, "champion"),
        },
        _ => Objectives::default(),
    };

    Team {
        team_id: obj["teamId"].as_u16().unwrap_or(0),
        win: obj["win"].as_bool().unwrap_or(false),
        bans,
        objectives,
    }
}

fn parse_objective(objectives: &Object, name: &str) -> Objective {
    let obj = &objectives[name];
    Objective {
        first: obj["first"].as_bool().unwrap_or(false),
        kills: obj["kills"].as_u16().unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_optional_fields_take_documented_defaults() {
        let doc = json::parse(
            r#"{
              "metadata": { "matchId": "EUN1_3849902044" },
              "info": {
                "gameDuration": 1800,
                "gameMode": "CLASSIC",
                "participants": [ { "championName": "Zed", "kills": 10 } ],
                "teams": [ { "teamId": 100 } ]
              }
            }"#,
        )
        .unwrap();

        let m = parse_match(&doc, &MatchId::from("EUN1_3849902044")).unwrap();
        assert_eq!(m.tournament_code, "");
        assert_eq!(m.queue_id, 0);
        assert_eq!(m.game_version, "");

        let p = &m.participants[0];
        assert_eq!(p.kills, 10);
        assert_eq!(p.deaths, 0);
        assert_eq!(p.gold_earned, 0);
        assert_eq!(p.summoner_name, "");
        assert!(!p.win);

        let t = &m.teams[0];
        assert_eq!(t.team_id, 100);
        assert!(!t.win);
        assert_eq!(t.objectives.baron.kills, 0);
        assert!(!t.objectives.dragon.first);
        assert!(t.bans.is_empty());
    }

    #[test]
    fn maps_participants_teams_and_objectives() {
        let doc = json::parse(
            r#"{
              "metadata": { "matchId": "EUN1_1" },
              "info": {
                "gameCreation": 1650000000000,
                "gameDuration": 1905,
                "gameMode": "CLASSIC",
                "queueId": 420,
                "participants": [
                  {
                    "championName": "Annie", "summonerName": "old name",
                    "riotIdGameName": "player", "riotIdTagline": "EUNE",
                    "teamId": 100, "teamPosition": "MIDDLE", "champLevel": 16,
                    "kills": 6, "deaths": 3, "assists": 9,
                    "goldEarned": 12100, "totalMinionsKilled": 180,
                    "neutralMinionsKilled": 12,
                    "totalDamageDealtToChampions": 24250, "visionScore": 21,
                    "wardsPlaced": 9, "item0": 3157, "item6": 3364,
                    "largestMultiKill": 2, "win": true
                  }
                ],
                "teams": [
                  {
                    "teamId": 100, "win": true,
                    "bans": [ { "championId": 238, "pickTurn": 1 } ],
                    "objectives": {
                      "baron": { "first": true, "kills": 1 },
                      "dragon": { "first": false, "kills": 3 },
                      "riftHerald": { "first": true, "kills": 2 },
                      "tower": { "first": true, "kills": 9 },
                      "inhibitor": { "first": true, "kills": 2 },
                      "champion": { "first": true, "kills": 31 }
                    }
                  }
                ]
              }
            }"#,
        )
        .unwrap();

        let m = parse_match(&doc, &MatchId::from("EUN1_1")).unwrap();
        assert_eq!(m.duration_display(), "31:45");
        assert_eq!(m.queue_id, 420);

        let p = &m.participants[0];
        assert_eq!(p.display_name(), "player#EUNE");
        assert_eq!(p.cs(), 192);
        assert_eq!(p.items[0], 3157);
        assert_eq!(p.items[6], 3364);
        assert!(p.win);

        let t = &m.teams[0];
        assert_eq!(t.bans[0].champion_id, 238);
        assert!(t.objectives.baron.first);
        assert_eq!(t.objectives.dragon.kills, 3);
        assert_eq!(t.objectives.champion.kills, 31);
    }

    #[test]
    fn match_id_falls_back_to_requested_id() {
        let doc = json::parse(r#"{ "info": { "participants": [], "teams": [] } }"#).unwrap();
        let m = parse_match(&doc, &MatchId::from("NA1_77")).unwrap();
        assert_eq!(m.match_id.to_string(), "NA1_77");
    }

    #[test]
    fn non_object_root_is_rejected() {
        let doc = json::parse("[1, 2, 3]").unwrap();
        assert!(parse_match(&doc, &MatchId::from("EUN1_1")).is_err());
    }
}
