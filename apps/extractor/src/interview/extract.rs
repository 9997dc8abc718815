#![allow(dead_code)]

//! Text extraction — turns a parsed interview into model-ready plain text.
//!
//! The contextual mode is the pipeline default: block headers plus the
//! question before each answer give the model disambiguating context. The
//! flat and per-block modes exist for downstream processing that wants raw
//! answer text.

use std::collections::BTreeMap;

use serde::Serialize;

use super::transcript::Interview;

/// Display names for the standard interview blocks. Unknown block names
/// fall through to `humanize_block_name`.
const BLOCK_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("childhood_family", "Детство и семья"),
    ("education_career", "Образование и карьера"),
    ("values_future", "Ценности и планы на будущее"),
    ("relationships", "Отношения"),
    ("achievements", "Достижения"),
    ("challenges", "Трудности и преодоление"),
    ("personality", "Личностные особенности"),
    ("hobbies_interests", "Хобби и интересы"),
];

/// Counts over one interview, embedded into the output document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewMetadata {
    pub interview_id: String,
    pub timestamp: String,
    pub total_blocks: usize,
    pub total_questions: usize,
    pub total_answers: usize,
    pub completion_rate: f64,
}

/// Resolves a block's display name: the fixed table first, then a
/// deterministic humanization of the raw identifier.
pub fn display_block_name(block_name: &str) -> String {
    for (internal, display) in BLOCK_DISPLAY_NAMES {
        if *internal == block_name {
            return (*display).to_string();
        }
    }
    humanize_block_name(block_name)
}

/// `custom_block_name` → `Custom Block Name`.
fn humanize_block_name(block_name: &str) -> String {
    block_name
        .split('_')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Contextual transcript: per block a header line, then for every pair with
/// a non-blank answer the question line, the answer line, and a blank
/// separator. Blocks with no usable answers still contribute their header.
pub fn extract_contextual(interview: &Interview) -> String {
    let mut lines = Vec::new();

    for block in &interview.blocks {
        lines.push(format!("=== {} ===", display_block_name(&block.block_name)));

        for qa in &block.questions_and_answers {
            if qa.answer.trim().is_empty() {
                continue;
            }
            lines.push(format!("На вопрос: {}", qa.question));
            lines.push(format!("Ответ: {}", qa.answer));
            lines.push(String::new());
        }
    }

    lines.join("\n")
}

/// All non-blank answers joined with single spaces, no question context.
pub fn extract_flat(interview: &Interview) -> String {
    let answers: Vec<&str> = interview
        .blocks
        .iter()
        .flat_map(|block| &block.questions_and_answers)
        .filter(|qa| !qa.answer.trim().is_empty())
        .map(|qa| qa.answer.as_str())
        .collect();

    answers.join(" ")
}

/// Block display name → that block's non-blank answers joined with spaces.
pub fn extract_by_block(interview: &Interview) -> BTreeMap<String, String> {
    interview
        .blocks
        .iter()
        .map(|block| {
            let answers: Vec<&str> = block
                .questions_and_answers
                .iter()
                .filter(|qa| !qa.answer.trim().is_empty())
                .map(|qa| qa.answer.as_str())
                .collect();
            (display_block_name(&block.block_name), answers.join(" "))
        })
        .collect()
}

/// Block/question/answer counts plus the completion rate in percent.
/// An interview with zero questions has a completion rate of 0.0.
pub fn metadata(interview: &Interview) -> InterviewMetadata {
    let total_questions: usize = interview
        .blocks
        .iter()
        .map(|block| block.questions_and_answers.len())
        .sum();
    let total_answers = interview
        .blocks
        .iter()
        .flat_map(|block| &block.questions_and_answers)
        .filter(|qa| !qa.answer.trim().is_empty())
        .count();

    let completion_rate = if total_questions == 0 {
        0.0
    } else {
        total_answers as f64 / total_questions as f64 * 100.0
    };

    InterviewMetadata {
        interview_id: interview.interview_id.clone(),
        timestamp: interview.timestamp.clone(),
        total_blocks: interview.blocks.len(),
        total_questions,
        total_answers,
        completion_rate,
    }
}
