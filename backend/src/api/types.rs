//! Wire types of the `/userinput` contract.
//!
//! The request is camelCase; the response keeps the snake_case
//! `output_file` key the frontend has always read.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::QueryError;
use crate::trim::Query;

/// Request sent by the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInputRequest {
    pub used_natural_language: bool,

    /// Present in natural-language mode
    #[serde(default)]
    pub natural_language_description: Option<String>,

    /// Present in structured mode
    #[serde(default)]
    pub fields: Option<QueryFields>,

    /// Archive content, Base64
    pub zip_file: String,

    pub file_name: String,

    /// Size of the original file in bytes, as reported by the browser
    pub file_size: u64,
}

/// The five structured query fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryFields {
    #[serde(default)]
    pub desired_outcome: String,
    #[serde(default)]
    pub important_date: String,
    #[serde(default)]
    pub important_people: String,
    #[serde(default)]
    pub important_events: String,
    #[serde(default)]
    pub important_location: String,
}

impl QueryFields {
    /// First empty field, by wire name.
    fn first_blank(&self) -> Option<&'static str> {
        [
            ("desiredOutcome", &self.desired_outcome),
            ("importantDate", &self.important_date),
            ("importantPeople", &self.important_people),
            ("importantEvents", &self.important_events),
            ("importantLocation", &self.important_location),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

impl UserInputRequest {
    /// The query for the declared mode.
    pub fn query(&self) -> Result<Query, QueryError> {
        if self.used_natural_language {
            match self.natural_language_description.as_deref().map(str::trim) {
                Some(text) if !text.is_empty() => Ok(Query::NaturalLanguage(text.to_string())),
                _ => Err(QueryError::MissingDescription),
            }
        } else {
            let fields = self.fields.as_ref().ok_or(QueryError::MissingFields)?;
            if let Some(name) = fields.first_blank() {
                return Err(QueryError::BlankField(name));
            }
            Ok(Query::Structured(fields.clone()))
        }
    }
}

/// Successful response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInputResponse {
    /// Trimmed archive, Base64 without a `data:` prefix
    pub output_file: String,

    /// Number of files in the trimmed archive
    pub count: usize,
}

/// Create an error response
pub fn error_response(error: &str) -> Value {
    json!({
        "status": "error",
        "error": error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_language_request() {
        let json = r#"{
            "usedNaturalLanguage": true,
            "naturalLanguageDescription": "  Alice meets Bob  ",
            "zipFile": "UEsFBgAAAAAAAAAAAAAAAAAAAAAAAA==",
            "fileName": "chats.zip",
            "fileSize": 22
        }"#;

        let request: UserInputRequest = serde_json::from_str(json).unwrap();
        assert!(request.fields.is_none());
        assert_eq!(request.file_size, 22);
        assert_eq!(request.query().unwrap(), Query::NaturalLanguage("Alice meets Bob".into()));
    }

    #[test]
    fn test_structured_request() {
        let json = r#"{
            "usedNaturalLanguage": false,
            "fields": {
                "desiredOutcome": "trip",
                "importantDate": "2024-05-17",
                "importantPeople": "Alice, Bob",
                "importantEvents": "flight",
                "importantLocation": "London"
            },
            "zipFile": "",
            "fileName": "chats.zip",
            "fileSize": 0
        }"#;

        let request: UserInputRequest = serde_json::from_str(json).unwrap();
        match request.query().unwrap() {
            Query::Structured(fields) => assert_eq!(fields.important_location, "London"),
            other => panic!("expected structured query, got {:?}", other),
        }
    }

    #[test]
    fn test_mode_mismatch() {
        let mut request = UserInputRequest {
            used_natural_language: true,
            natural_language_description: None,
            fields: Some(QueryFields::default()),
            zip_file: String::new(),
            file_name: "a.zip".into(),
            file_size: 0,
        };
        assert_eq!(request.query().unwrap_err(), QueryError::MissingDescription);

        request.used_natural_language = false;
        assert_eq!(request.query().unwrap_err(), QueryError::BlankField("desiredOutcome"));

        request.fields = None;
        assert_eq!(request.query().unwrap_err(), QueryError::MissingFields);
    }

    #[test]
    fn test_response_wire_names() {
        let response = UserInputResponse { output_file: "QUJD".into(), count: 3 };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["output_file"], "QUJD");
        assert_eq!(json["count"], 3);
    }
}
