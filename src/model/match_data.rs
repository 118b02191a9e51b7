use chrono::{DateTime, Utc};

use super::ids::MatchId;

#[derive(Debug)]
pub struct Match {
    pub match_id: MatchId,
    pub game_creation: DateTime<Utc>,
    pub game_duration_secs: u32,
    pub game_mode: String,
    pub game_version: String,
    pub queue_id: u16,
    pub tournament_code: String,
    pub participants: Vec<Participant>,
    pub teams: Vec<Team>,
}

#[derive(Debug)]
pub struct Participant {
    pub summoner_name: String,
    pub riot_id: String,
    pub champion_name: String,
    pub champ_level: u16,
    pub team_id: u16,
    pub team_position: String,
    pub kills: u16,
    pub deaths: u16,
    pub assists: u16,
    pub gold_earned: u32,
    pub total_minions_killed: u32,
    pub neutral_minions_killed: u32,
    pub total_damage_to_champions: u32,
    pub vision_score: u32,
    pub wards_placed: u32,
    pub items: [u32; 7],
    pub largest_multi_kill: u16,
    pub win: bool,
}

#[derive(Debug)]
pub struct Team {
    pub team_id: u16,
    pub win: bool,
    pub bans: Vec<Ban>,
    pub objectives: Objectives,
}

#[derive(Debug)]
pub struct Ban {
    pub champion_id: i32,
    pub pick_turn: u8,
}

#[derive(Debug, Default)]
pub struct Objectives {
    pub baron: Objective,
    pub dragon: Objective,
    pub rift_herald: Objective,
    pub tower: Objective,
    pub inhibitor: Objective,
    pub champion: Objective,
}

#[derive(Debug, Default)]
pub struct Objective {
    pub first: bool,
    pub kills: u16,
}

impl Match {
    pub fn duration_display(&self) -> String {
        let mins = self.game_duration_secs / 60;
        let secs = self.game_duration_secs % 60;
        format!("{}:{:02}", mins, secs)
    }
}

impl Participant {
    /// Display name, preferring the riot id over the legacy summoner name.
    pub fn display_name(&self) -> &str {
        if !self.riot_id.is_empty() {
            &self.riot_id
        } else if !self.summoner_name.is_empty() {
            &self.summoner_name
        } else {
            "Unknown"
        }
    }

    pub fn cs(&self) -> u32 {
        self.total_minions_killed + self.neutral_minions_killed
    }

    pub fn kda(&self) -> f64 {
        let takedowns = (self.kills + self.assists) as f64;
        if self.deaths == 0 {
            takedowns
        } else {
            takedowns / self.deaths as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ids::MatchId;

    fn participant(kills: u16, deaths: u16, assists: u16) -> Participant {
        Participant {
            summoner_name: String::new(),
            riot_id: String::new(),
            champion_name: String::new(),
            champ_level: 1,
            team_id: 100,
            team_position: String::new(),
            kills,
            deaths,
            assists,
            gold_earned: 0,
            total_minions_killed: 150,
            neutral_minions_killed: 20,
            total_damage_to_champions: 0,
            vision_score: 0,
            wards_placed: 0,
            items: [0; 7],
            largest_multi_kill: 0,
            win: false,
        }
    }

    #[test]
    fn kda_treats_zero_deaths_as_takedowns() {
        assert_eq!(participant(5, 0, 7).kda(), 12.0);
        assert_eq!(participant(6, 3, 3).kda(), 3.0);
    }

    #[test]
    fn cs_sums_lane_and_jungle_minions() {
        assert_eq!(participant(0, 0, 0).cs(), 170);
    }

    #[test]
    fn duration_formats_minutes_and_seconds() {
        let m = Match {
            match_id: MatchId::from("EUN1_1"),
            game_creation: Default::default(),
            game_duration_secs: 1905,
            game_mode: String::new(),
            game_version: String::new(),
            queue_id: 0,
            tournament_code: String::new(),
            participants: Vec::new(),
            teams: Vec::new(),
        };
        assert_eq!(m.duration_display(), "31:45");
    }
}
