use crate::model::ids::MatchId;

/// Data Dragon version the champion document is pinned to.
pub const DATA_DRAGON_VERSION: &str = "12.10.1";

pub const INSIGHTS_URL: &str =
    "https://riftrewind-insights-946555989276.europe-central2.run.app/api/Insights/analyze";

pub const VIDEO_ANALYZER_URL: &str =
    "https://videoanalyzer-microservice-946555989276.europe-central2.run.app/api/VideoAnalyzer/analyze-upload";

pub fn champion_list_url() -> String {
    format!(
        "https://ddragon.leagueoflegends.com/cdn/{}/data/en_US/champion.json",
        DATA_DRAGON_VERSION
    )
}

pub fn match_url(match_id: &MatchId) -> String {
    format!(
        "https://{}.api.riotgames.com/lol/match/v5/matches/{}",
        match_id.routing_region(),
        match_id
    )
}
