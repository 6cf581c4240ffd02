//! HTTP service sending the query and archive to the backend.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::types::{AppError, AppResult, QuerySpec, StructuredFields};

/// Body of the `/userinput` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInputRequest {
    pub used_natural_language: bool,
    /// Present only in natural-language mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub natural_language_description: Option<String>,
    /// Present only in structured mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<StructuredFields>,
    /// Archive content, Base64 without any `data:` prefix
    pub zip_file: String,
    pub file_name: String,
    pub file_size: u64,
}

impl UserInputRequest {
    pub fn new(query: QuerySpec, zip_file: String, file_name: String, file_size: u64) -> Self {
        let (used_natural_language, natural_language_description, fields) = match query {
            QuerySpec::NaturalLanguage(text) => (true, Some(text), None),
            QuerySpec::Structured(fields) => (false, None, Some(fields)),
        };
        Self {
            used_natural_language,
            natural_language_description,
            fields,
            zip_file,
            file_name,
            file_size,
        }
    }
}

/// Successful response of the `/userinput` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInputResponse {
    /// Trimmed archive, Base64 without any `data:` prefix
    pub output_file: String,
    /// Number of files in the trimmed archive
    pub count: u64,
}

/// Send the request to the backend and parse its answer.
///
/// Any non-2xx status is a failure; only the status line is surfaced.
pub async fn submit_query(request: &UserInputRequest, url: &str) -> AppResult<UserInputResponse> {
    let response = Request::post(url)
        .json(request)
        .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(AppError::Server {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    response
        .json::<UserInputResponse>()
        .await
        .map_err(|e| AppError::Response(e.to_string()))
}
