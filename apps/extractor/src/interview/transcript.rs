//! Interview document model. Read-only once parsed.

use serde::Deserialize;

use crate::errors::AppError;

/// A full interview: ordered blocks of question/answer pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct Interview {
    pub interview_id: String,
    pub timestamp: String,
    pub blocks: Vec<Block>,
}

/// One named block of the interview.
#[derive(Debug, Clone, Deserialize)]
pub struct Block {
    pub block_id: u32,
    pub block_name: String,
    pub questions_and_answers: Vec<QuestionAnswer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
}

/// Parses an interview JSON document.
pub fn parse_transcript(raw: &str, source_name: &str) -> Result<Interview, AppError> {
    serde_json::from_str(raw).map_err(|e| AppError::TranscriptParse {
        source_name: source_name.to_string(),
        source: e,
    })
}
