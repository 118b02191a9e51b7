use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use json::JsonValue;
use reqwest::blocking::{multipart::Form, Client};

use crate::{model::analysis::VideoReport, service::gameapi::endpoints};

const VIDEO_EXTENSIONS: [&str; 8] = ["mp4", "m4v", "webm", "mkv", "avi", "mov", "wmv", "flv"];

pub struct AnalysisClient {
    client: Client,
}

impl AnalysisClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// Sends a statistics payload to the insights endpoint and returns the
    /// generated text. Responses are not cached, every call re-sends.
    pub fn request_insights(&self, payload: &JsonValue, save_as: &str) -> Result<String, AnalysisError> {
        let response = self
            .client
            .post(endpoints::INSIGHTS_URL)
            .header("Content-Type", "application/json")
            .body(payload.dump())
            .send()?;

        if !response.status().is_success() {
            return Err(AnalysisError::InvalidStatus(response.status().as_u16()));
        }

        let body = json::parse(response.text()?.as_str())?;
        if !body["success"].as_bool().unwrap_or(false) {
            let reason = body["error"].as_str().unwrap_or("Failed to get analysis").to_string();
            return Err(AnalysisError::ServiceRefused(reason));
        }
        let content = body["content"]
            .as_str()
            .ok_or(AnalysisError::ServiceRefused("Response carried no content".to_string()))?
            .to_string();

        // Keep a copy on disk, failures here don't matter
        let _ = fs::create_dir("analysis");
        let _ = fs::write(format!("analysis/{}.md", save_as), &content);

        Ok(content)
    }

    /// Uploads a local video file as multipart field `file` and returns the
    /// service's report.
    pub fn analyze_video(&self, path: &Path) -> Result<VideoReport, AnalysisError> {
        if !is_video_file(path) {
            return Err(AnalysisError::NotAVideoFile(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(AnalysisError::FileMissing(path.to_path_buf()));
        }

        let form = Form::new().file("file", path)?;
        let response = self.client.post(endpoints::VIDEO_ANALYZER_URL).multipart(form).send()?;

        if !response.status().is_success() {
            return Err(AnalysisError::InvalidStatus(response.status().as_u16()));
        }

        let body = json::parse(response.text()?.as_str())?;
        Ok(VideoReport {
            success: body["success"].as_bool().unwrap_or(false),
            message: body["message"].as_str().map(str::to_string),
            data: match &body["data"] {
                JsonValue::Null => None,
                data => Some(data.clone()),
            },
            error: body["error"].as_str().map(str::to_string),
        })
    }
}

/// Client-side check that a path looks like a video file.
pub fn is_video_file(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => VIDEO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}

#[derive(Debug)]
pub enum AnalysisError {
    ClientFailed(reqwest::Error),
    InvalidStatus(u16),
    ParsingFailed(json::Error),
    ServiceRefused(String),
    NotAVideoFile(PathBuf),
    FileMissing(PathBuf),
    FileUnreadable(io::Error),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AnalysisError::ClientFailed(err) => write!(f, "Client error: {}", err),
            AnalysisError::InvalidStatus(code) => write!(f, "The analysis service returned HTTP {}.", code),
            AnalysisError::ParsingFailed(err) => write!(f, "Parsing error: {}", err),
            AnalysisError::ServiceRefused(reason) => write!(f, "Analysis failed: {}", reason),
            AnalysisError::NotAVideoFile(path) => {
                write!(f, "Not a video file: {}. Please select a valid video file.", path.display())
            }
            AnalysisError::FileMissing(path) => write!(f, "File not found: {}", path.display()),
            AnalysisError::FileUnreadable(err) => write!(f, "File could not be read: {}", err),
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(error: reqwest::Error) -> Self {
        AnalysisError::ClientFailed(error)
    }
}

impl From<json::Error> for AnalysisError {
    fn from(error: json::Error) -> Self {
        AnalysisError::ParsingFailed(error)
    }
}

impl From<io::Error> for AnalysisError {
    fn from(error: io::Error) -> Self {
        AnalysisError::FileUnreadable(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_video_extensions_are_accepted() {
        assert!(is_video_file(Path::new("replay.mp4")));
        assert!(is_video_file(Path::new("clips/Game.MKV")));
        assert!(is_video_file(Path::new("/tmp/teamfight.webm")));
    }

    #[test]
    fn non_video_paths_are_rejected() {
        assert!(!is_video_file(Path::new("notes.txt")));
        assert!(!is_video_file(Path::new("replay")));
        assert!(!is_video_file(Path::new("archive.tar.gz")));
    }
}
