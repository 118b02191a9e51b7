use std::{
    cell::RefCell,
    collections::{hash_map::Entry, HashMap},
    env, fmt,
    rc::Rc,
};

use json::JsonValue;
use reqwest::{blocking::Client, StatusCode};

use crate::model::ids::MatchId;

use super::endpoints;

const API_KEY_VAR: &str = "RIOT_API_KEY";

pub struct ApiClient {
    client: Client,
    api_key: Option<String>,
    cache: RefCell<HashMap<ClientRequestType, Rc<JsonValue>>>,
}

impl ApiClient {
    pub fn new() -> Result<Self, ClientInitError> {
        let client = Client::builder().build()?;
        let api_key = env::var(API_KEY_VAR).ok().filter(|k| !k.trim().is_empty());
        Ok(Self {
            client,
            api_key,
            cache: RefCell::from(HashMap::new()),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn request(&self, request_type: ClientRequestType, cache: bool) -> Result<Rc<JsonValue>, RequestError> {
        match self.cache.borrow_mut().entry(request_type.clone()) {
            Entry::Occupied(oe) => Ok(oe.get().clone()),
            Entry::Vacant(ve) => {
                // Build request
                let request = match &request_type {
                    ClientRequestType::ChampionList => self.client.get(endpoints::champion_list_url()),
                    ClientRequestType::Match(match_id) => {
                        // Key travels as a header, never as a query parameter
                        let key = self.api_key.as_ref().ok_or(RequestError::ApiKeyMissing)?;
                        self.client.get(endpoints::match_url(match_id)).header("X-Riot-Token", key)
                    }
                };

                // Send request
                let response = request.send()?;
                if !response.status().is_success() {
                    return Err(RequestError::from_status(response.status(), &request_type));
                }

                // Return json
                let text = response.text()?;
                let json = json::parse(text.as_str())?;

                let rc_json = Rc::new(json);
                if cache {
                    ve.insert(rc_json.clone());
                }
                Ok(rc_json)
            }
        }
    }

    pub fn refresh(&mut self) {
        self.cache.borrow_mut().clear();
        self.api_key = env::var(API_KEY_VAR).ok().filter(|k| !k.trim().is_empty());
    }
}

#[derive(Debug, PartialEq, Hash, Eq, Clone)]
pub enum ClientRequestType {
    ChampionList,
    Match(MatchId),
}

#[derive(Debug)]
pub enum ClientInitError {
    ClientError(reqwest::Error),
}

impl fmt::Display for ClientInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientInitError::ClientError(err) => write!(f, "Client error: {}", err),
        }
    }
}

impl From<reqwest::Error> for ClientInitError {
    fn from(error: reqwest::Error) -> Self {
        Self::ClientError(error)
    }
}

#[derive(Debug)]
pub enum RequestError {
    ClientFailed(reqwest::Error),
    ApiKeyMissing,
    Forbidden,
    MatchNotFound(MatchId),
    InvalidStatus(u16),
    ParsingFailed(json::Error),
}

impl RequestError {
    fn from_status(status: StatusCode, request_type: &ClientRequestType) -> Self {
        match (status, request_type) {
            (StatusCode::FORBIDDEN, ClientRequestType::Match(_)) => RequestError::Forbidden,
            (StatusCode::NOT_FOUND, ClientRequestType::Match(id)) => RequestError::MatchNotFound(id.clone()),
            _ => RequestError::InvalidStatus(status.as_u16()),
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RequestError::ClientFailed(err) => write!(f, "Client error: {}", err),
            RequestError::ApiKeyMissing => {
                write!(f, "Riot API key is needed for match lookups, set {}.", API_KEY_VAR)
            }
            RequestError::Forbidden => {
                write!(f, "Access denied (403). Check that the Riot API key is valid and not expired.")
            }
            RequestError::MatchNotFound(id) => write!(f, "Match not found: {}", id),
            RequestError::InvalidStatus(code) => write!(f, "The server returned HTTP {}.", code),
            RequestError::ParsingFailed(err) => write!(f, "Parsing error: {}", err),
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(error: reqwest::Error) -> Self {
        RequestError::ClientFailed(error)
    }
}

impl From<json::Error> for RequestError {
    fn from(error: json::Error) -> Self {
        RequestError::ParsingFailed(error)
    }
}
