use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::element::SurveyElement;

/// Errors that can occur while encoding or decoding a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to parse snapshot: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Sponsor advertisement attached to a survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sponsor {
    pub name: String,
    pub link: String,
}

/// The survey state a host captures inside its save closure: title, ordered
/// element collection, and sponsorship fields.
///
/// Round-trips losslessly through JSON, including element ids, kind tags,
/// type-specific property bags and nested option order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveySnapshot {
    pub title: String,
    pub elements: Vec<SurveyElement>,
    pub sponsor: Option<Sponsor>,
}

impl SurveySnapshot {
    /// Encode the snapshot as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(SnapshotError::Serialize)
    }

    /// Decode a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(SnapshotError::Parse)
    }
}
