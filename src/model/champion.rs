use super::ids::ChampionId;

#[derive(Debug, Clone)]
pub struct Champion {
    pub id: ChampionId,
    pub name: String,
    pub title: String,
    pub blurb: String,
    pub tags: Vec<String>,
    pub resource_type: String,
    pub stats: BaseStats,
    pub ratings: Ratings,
}

/// Base stat block from Data Dragon, flat value plus per-level growth.
#[derive(Debug, Clone)]
pub struct BaseStats {
    pub hp: f64,
    pub hp_per_level: f64,
    pub mp: f64,
    pub mp_per_level: f64,
    pub move_speed: f64,
    pub armor: f64,
    pub armor_per_level: f64,
    pub spell_block: f64,
    pub spell_block_per_level: f64,
    pub attack_damage: f64,
    pub attack_damage_per_level: f64,
    pub attack_range: f64,
    pub attack_speed: f64,
}

/// 0-10 ratings shown as dot bars in the detail view.
#[derive(Debug, Clone)]
pub struct Ratings {
    pub attack: u8,
    pub defense: u8,
    pub magic: u8,
    pub difficulty: u8,
}
