use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChampionId(String);

/// Region-prefixed match identifier, e.g. "EUN1_3849902044".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchId(String);

impl Display for ChampionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ChampionId {
    fn from(value: &str) -> Self {
        ChampionId(value.to_string())
    }
}

impl From<&str> for MatchId {
    fn from(value: &str) -> Self {
        MatchId(value.trim().to_string())
    }
}

impl MatchId {
    /// Platform prefix of the id ("EUN1_384..." -> "EUN1").
    pub fn platform(&self) -> &str {
        match self.0.split_once('_') {
            Some((platform, _)) => platform,
            None => &self.0,
        }
    }

    /// Match-v5 is served from regional clusters, not platform hosts.
    pub fn routing_region(&self) -> &'static str {
        match self.platform().to_ascii_lowercase().as_str() {
            "br1" | "la1" | "la2" | "na1" | "oc1" => "americas",
            "kr" | "jp1" => "asia",
            "ph2" | "sg2" | "th2" | "tw2" | "vn2" => "sea",
            _ => "europe",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MatchId;

    #[test]
    fn platform_is_prefix_before_underscore() {
        let id = MatchId::from("EUN1_3849902044");
        assert_eq!(id.platform(), "EUN1");
    }

    #[test]
    fn routing_region_maps_known_platforms() {
        assert_eq!(MatchId::from("EUN1_1").routing_region(), "europe");
        assert_eq!(MatchId::from("NA1_1").routing_region(), "americas");
        assert_eq!(MatchId::from("KR_1").routing_region(), "asia");
        assert_eq!(MatchId::from("SG2_1").routing_region(), "sea");
    }

    #[test]
    fn routing_region_defaults_to_europe() {
        assert_eq!(MatchId::from("XX9_42").routing_region(), "europe");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let id = MatchId::from("  EUW1_123 ");
        assert_eq!(id.to_string(), "EUW1_123");
    }
}
