use std::{fmt, path::Path};

use once_cell::sync::OnceCell;

use crate::model::{analysis::VideoReport, champion::Champion, ids::MatchId, match_data::Match};

use super::{
    analysis::{
        client::{AnalysisClient, AnalysisError},
        payload,
    },
    gameapi::{
        client::{ApiClient, ClientInitError, ClientRequestType, RequestError},
        parsing::{champion::parse_champion_list, match_data::parse_match, ParsingError},
    },
};

pub struct DataManager {
    client: ApiClient,
    analysis: AnalysisClient,
    champion_cache: OnceCell<Vec<Champion>>,
}

impl DataManager {
    pub fn new() -> Result<Self, DataManagerInitError> {
        let client = ApiClient::new()?;
        let analysis = AnalysisClient::new().map_err(DataManagerInitError::AnalysisClientFailed)?;
        Ok(Self {
            client,
            analysis,
            champion_cache: OnceCell::new(),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.client.has_api_key()
    }

    /// The champion document is fetched once and cached for the session.
    pub fn get_champions(&self) -> DataRetrievalResult<&Vec<Champion>> {
        self.champion_cache.get_or_try_init(|| {
            let champions_json = self.client.request(ClientRequestType::ChampionList, true)?;
            let champions = parse_champion_list(&champions_json)?;
            Ok(champions)
        })
    }

    /// Match lookups are not cached, every call hits the API.
    pub fn get_match(&self, id: &MatchId) -> DataRetrievalResult<Match> {
        let match_json = self.client.request(ClientRequestType::Match(id.clone()), false)?;
        let parsed = parse_match(&match_json, id)?;
        Ok(parsed)
    }

    pub fn analyze_match(&self, m: &Match) -> DataRetrievalResult<String> {
        let payload = payload::match_payload(m);
        let content = self.analysis.request_insights(&payload, &m.match_id.to_string())?;
        Ok(content)
    }

    pub fn analyze_champion(&self, champion: &Champion) -> DataRetrievalResult<String> {
        let payload = payload::champion_payload(champion);
        let content = self.analysis.request_insights(&payload, &champion.id.to_string())?;
        Ok(content)
    }

    pub fn analyze_video(&self, path: &Path) -> DataRetrievalResult<VideoReport> {
        let report = self.analysis.analyze_video(path)?;
        Ok(report)
    }

    pub fn refresh(&mut self) {
        self.client.refresh();
        self.champion_cache = OnceCell::new();
    }
}

pub type DataRetrievalResult<T> = Result<T, DataRetrievalError>;

#[derive(Debug)]
pub enum DataManagerInitError {
    ClientFailed(ClientInitError),
    AnalysisClientFailed(reqwest::Error),
}

impl fmt::Display for DataManagerInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataManagerInitError::ClientFailed(err) => write!(f, "Client failed: {}", err),
            DataManagerInitError::AnalysisClientFailed(err) => write!(f, "Analysis client failed: {}", err),
        }
    }
}

impl From<ClientInitError> for DataManagerInitError {
    fn from(error: ClientInitError) -> Self {
        Self::ClientFailed(error)
    }
}

#[derive(Debug)]
pub enum DataRetrievalError {
    ClientFailed(RequestError),
    ParsingFailed(ParsingError),
    AnalysisFailed(AnalysisError),
}

impl fmt::Display for DataRetrievalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataRetrievalError::ClientFailed(err) => write!(f, "{}", err),
            DataRetrievalError::ParsingFailed(err) => write!(f, "{}", err),
            DataRetrievalError::AnalysisFailed(err) => write!(f, "{}", err),
        }
    }
}

impl From<RequestError> for DataRetrievalError {
    fn from(error: RequestError) -> Self {
        Self::ClientFailed(error)
    }
}

impl From<ParsingError> for DataRetrievalError {
    fn from(error: ParsingError) -> Self {
        Self::ParsingFailed(error)
    }
}

impl From<AnalysisError> for DataRetrievalError {
    fn from(error: AnalysisError) -> Self {
        Self::AnalysisFailed(error)
    }
}
