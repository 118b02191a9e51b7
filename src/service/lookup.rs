use std::{collections::HashMap, fmt};

use crate::model::{champion::Champion, ids::ChampionId};

/// Hash lookups over the session's champion data, used to enrich match
/// participants with catalog metadata.
pub struct ChampionLookup<'a> {
    by_id: HashMap<String, &'a Champion>,
    by_name: HashMap<String, &'a Champion>,
}

impl<'a> ChampionLookup<'a> {
    pub fn new(champions: &'a [Champion]) -> Self {
        Self {
            by_id: champions.iter().map(|c| (c.id.to_string().to_lowercase(), c)).collect(),
            by_name: champions.iter().map(|c| (c.name.to_lowercase(), c)).collect(),
        }
    }

    /// Resolves user input against champion ids and display names.
    pub fn find(&self, query: &str) -> Result<&'a Champion, IdNotFoundError> {
        self.by_champion_name(query)
            .ok_or_else(|| IdNotFoundError::Champion(query.into()))
    }

    /// Match-v5 reports champions by name ("championName"), which for almost
    /// every champion equals the Data Dragon id.
    pub fn by_champion_name(&self, name: &str) -> Option<&'a Champion> {
        let key = name.trim().to_lowercase();
        self.by_id.get(&key).or_else(|| self.by_name.get(&key)).copied()
    }
}

#[derive(Debug)]
pub enum IdNotFoundError {
    Champion(ChampionId),
}

impl fmt::Display for IdNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IdNotFoundError::Champion(id) => write!(f, "Champion not found: {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::champion::{BaseStats, Ratings};

    fn champion(id: &str, name: &str) -> Champion {
        Champion {
            id: id.into(),
            name: name.to_string(),
            title: String::new(),
            blurb: String::new(),
            tags: Vec::new(),
            resource_type: String::new(),
            stats: BaseStats {
                hp: 0.0,
                hp_per_level: 0.0,
                mp: 0.0,
                mp_per_level: 0.0,
                move_speed: 0.0,
                armor: 0.0,
                armor_per_level: 0.0,
                spell_block: 0.0,
                spell_block_per_level: 0.0,
                attack_damage: 0.0,
                attack_damage_per_level: 0.0,
                attack_range: 0.0,
                attack_speed: 0.0,
            },
            ratings: Ratings {
                attack: 0,
                defense: 0,
                magic: 0,
                difficulty: 0,
            },
        }
    }

    #[test]
    fn find_resolves_id_or_name_case_insensitively() {
        let roster = vec![champion("MonkeyKing", "Wukong")];
        let lookup = ChampionLookup::new(&roster);
        assert!(lookup.find("monkeyking").is_ok());
        assert!(lookup.find(" Wukong ").is_ok());
        let err = lookup.find("Teemo").unwrap_err();
        assert_eq!(err.to_string(), "Champion not found: Teemo");
    }

    #[test]
    fn match_champion_names_resolve_via_id_or_display_name() {
        let roster = vec![champion("MonkeyKing", "Wukong"), champion("Zed", "Zed")];
        let lookup = ChampionLookup::new(&roster);
        assert_eq!(lookup.by_champion_name("MonkeyKing").unwrap().name, "Wukong");
        assert_eq!(lookup.by_champion_name("wukong").unwrap().name, "Wukong");
        assert_eq!(lookup.by_champion_name("Zed").unwrap().name, "Zed");
        assert!(lookup.by_champion_name("Teemo").is_none());
    }
}
