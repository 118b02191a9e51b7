use json::{object::Object, JsonValue};

use crate::model::champion::{BaseStats, Champion, Ratings};

use super::ParsingError;

/// Parses the Data Dragon champion document: `{ data: { [championId]: {...} } }`.
pub fn parse_champion_list(json: &JsonValue) -> Result<Vec<Champion>, ParsingError> {
    if let JsonValue::Object(root) = json {
        let data = &root["data"];
        if let JsonValue::Object(data_obj) = data {
            let mut champions = Vec::new();
            for (_, champ_entry) in data_obj.iter() {
                if let JsonValue::Object(champ_obj) = champ_entry {
                    champions.push(parse_champion_obj(champ_obj)?);
                } else {
                    return Err(ParsingError::InvalidType("champion entry".into()));
                }
            }

            // Object key order is not guaranteed, keep the catalog stable
            champions.sort_by(|a, b| a.name.cmp(&b.name));
            return Ok(champions);
        }
        return Err(ParsingError::InvalidType("data".into()));
    }

    Err(ParsingError::InvalidType("root".into()))
}

fn parse_champion_obj(obj: &Object) -> Result<Champion, ParsingError> {
    let id = obj["id"].as_str().ok_or(ParsingError::InvalidType("id".into()))?;
    let name = obj["name"].as_str().ok_or(ParsingError::InvalidType("name".into()))?;
    let title = obj["title"].as_str().ok_or(ParsingError::InvalidType("title".into()))?;
    let blurb = obj["blurb"].as_str().unwrap_or_default();
    let resource_type = obj["partype"].as_str().unwrap_or_default();

    let mut tags = Vec::new();
    if let JsonValue::Array(tag_array) = &obj["tags"] {
        for tag in tag_array {
            let tag = tag.as_str().ok_or(ParsingError::InvalidType("tags entry".into()))?;
            tags.push(tag.to_string());
        }
    } else {
        return Err(ParsingError::InvalidType("tags".into()));
    }

    let stats = match &obj["stats"] {
        JsonValue::Object(stats_obj) => parse_stats_obj(stats_obj)?,
        _ => return Err(ParsingError::InvalidType("stats".into())),
    };
    let ratings = match &obj["info"] {
        JsonValue::Object(info_obj) => parse_ratings_obj(info_obj)?,
        _ => return Err(ParsingError::InvalidType("info".into())),
    };

    Ok(Champion {
        id: id.into(),
        name: name.to_string(),
        title: title.to_string(),
        blurb: blurb.to_string(),
        tags,
        resource_type: resource_type.to_string(),
        stats,
        ratings,
    })
}

fn parse_stats_obj(obj: &Object) -> Result<BaseStats, ParsingError> {
    let stat = |field: &str| {
        obj[field]
            .as_f64()
            .ok_or(ParsingError::InvalidType(format!("stats/{}", field)))
    };

    Ok(BaseStats {
        hp: stat("hp")?,
        hp_per_level: stat("hpperlevel")?,
        mp: stat("mp")?,
        mp_per_level: stat("mpperlevel")?,
        move_speed: stat("movespeed")?,
        armor: stat("armor")?,
        armor_per_level: stat("armorperlevel")?,
        spell_block: stat("spellblock")?,
        spell_block_per_level: stat("spellblockperlevel")?,
        attack_damage: stat("attackdamage")?,
        attack_damage_per_level: stat("attackdamageperlevel")?,
        attack_range: stat("attackrange")?,
        attack_speed: stat("attackspeed")?,
    })
}

fn parse_ratings_obj(obj: &Object) -> Result<Ratings, ParsingError> {
    let rating = |field: &str| {
        obj[field]
            .as_u8()
            .ok_or(ParsingError::InvalidType(format!("info/{}", field)))
    };

    Ok(Ratings {
        attack: rating("attack")?,
        defense: rating("defense")?,
        magic: rating("magic")?,
        difficulty: rating("difficulty")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn champion_doc() -> JsonValue {
        json::parse(
            r#"{
              "type": "champion",
              "version": "12.10.1",
              "data": {
                "Zed": {
                  "id": "Zed",
                  "name": "Zed",
                  "title": "the Master of Shadows",
                  "blurb": "Utterly ruthless and without mercy.",
                  "partype": "Energy",
                  "tags": ["Assassin"],
                  "info": { "attack": 9, "defense": 2, "magic": 1, "difficulty": 7 },
                  "stats": {
                    "hp": 654, "hpperlevel": 99, "mp": 200, "mpperlevel": 0,
                    "movespeed": 345, "armor": 32, "armorperlevel": 4.2,
                    "spellblock": 29, "spellblockperlevel": 2.05,
                    "attackrange": 125, "attackdamage": 63,
                    "attackdamageperlevel": 3.4, "attackspeed": 0.651
                  }
                },
                "Annie": {
                  "id": "Annie",
                  "name": "Annie",
                  "title": "the Dark Child",
                  "blurb": "Dangerous, yet disarmingly precocious.",
                  "partype": "Mana",
                  "tags": ["Mage", "Support"],
                  "info": { "attack": 2, "defense": 3, "magic": 10, "difficulty": 6 },
                  "stats": {
                    "hp": 560, "hpperlevel": 96, "mp": 418, "mpperlevel": 25,
                    "movespeed": 335, "armor": 19, "armorperlevel": 4,
                    "spellblock": 30, "spellblockperlevel": 1.3,
                    "attackrange": 625, "attackdamage": 50,
                    "attackdamageperlevel": 2.625, "attackspeed": 0.579
                  }
                }
              }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn parses_and_sorts_champions_by_name() {
        let champions = parse_champion_list(&champion_doc()).unwrap();
        assert_eq!(champions.len(), 2);
        assert_eq!(champions[0].name, "Annie");
        assert_eq!(champions[1].name, "Zed");
    }

    #[test]
    fn extracts_stats_tags_and_ratings() {
        let champions = parse_champion_list(&champion_doc()).unwrap();
        let annie = &champions[0];
        assert_eq!(annie.title, "the Dark Child");
        assert_eq!(annie.tags, vec!["Mage".to_string(), "Support".to_string()]);
        assert_eq!(annie.resource_type, "Mana");
        assert_eq!(annie.stats.hp, 560.0);
        assert_eq!(annie.stats.attack_damage_per_level, 2.625);
        assert_eq!(annie.ratings.magic, 10);
    }

    #[test]
    fn rejects_document_without_data_object() {
        let err = parse_champion_list(&json::parse(r#"{"type": "champion"}"#).unwrap());
        assert!(err.is_err());
    }

    #[test]
    fn rejects_champion_without_name() {
        let doc = json::parse(r#"{"data": {"X": {"id": "X", "tags": []}}}"#).unwrap();
        assert!(parse_champion_list(&doc).is_err());
    }
}
