use serde::{Deserialize, Serialize};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    #[serde(default)]
    pub input: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub name: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub msg: String,
}
