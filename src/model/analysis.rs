use json::JsonValue;

/// One display block of the insights text, parsed from its markdown-like
/// subset.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisBlock {
    Heading { level: u8, text: String },
    KeyValue { key: String, value: String },
    Bullet(String),
    Paragraph(String),
    Blank,
}

/// Response of the video-analysis microservice.
#[derive(Debug)]
pub struct VideoReport {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<JsonValue>,
    pub error: Option<String>,
}
