//! Two-stage extraction pipeline.
//!
//! Flow: contextual text → extraction prompt → completion →
//!       validation/repair prompt → completion → schema conformance check →
//!       metadata injection.
//!
//! Conformance findings after the repair stage are advisory: they are logged
//! and the document is still produced. A reply that is not JSON at all is
//! fatal to the run.

use serde_json::{json, Map, Value};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::prompts::{render_extraction_prompt, render_validation_prompt};
use crate::interview::extract::{extract_contextual, metadata};
use crate::interview::transcript::Interview;
use crate::llm_client::CompletionBackend;
use crate::schema::SchemaDictionary;
use crate::validator::validate;

/// Version tag recorded in the output document's processing info.
const SCHEMA_VERSION: &str = "1.0";
/// Name of the text extraction mode the pipeline feeds to the model.
const EXTRACTION_METHOD: &str = "contextual_answers";

/// Runs both stages against the completion backend and returns the final
/// profile document with `_metadata` attached.
pub async fn extract_profile(
    llm: &dyn CompletionBackend,
    schema: &SchemaDictionary,
    interview: &Interview,
) -> Result<Value, AppError> {
    let interview_text = extract_contextual(interview);
    info!(
        "Extracted contextual text: {} chars from interview {}",
        interview_text.len(),
        interview.interview_id
    );

    // Stage 1: extraction
    let extraction_prompt = render_extraction_prompt(schema, &interview_text);
    let draft = llm.complete(&extraction_prompt).await?;
    info!("Extraction stage produced {} chars", draft.len());

    // Stage 2: validation and repair by the model itself
    let validation_prompt = render_validation_prompt(&draft);
    let repaired = llm.complete(&validation_prompt).await?;
    info!("Repair stage produced {} chars", repaired.len());

    let mut profile: Map<String, Value> =
        serde_json::from_str(&repaired).map_err(AppError::MalformedReply)?;

    // Final conformance check — advisory after the repair stage. The
    // malformed-JSON case cannot fire here: the document parsed above.
    match validate(&repaired, schema) {
        Ok(()) => info!("Profile conforms to the schema"),
        Err(finding) => warn!("Schema conformance warning: {finding}"),
    }

    profile.insert(
        "_metadata".to_string(),
        json!({
            "source_interview": metadata(interview),
            "processing_info": {
                "schema_version": SCHEMA_VERSION,
                "extraction_method": EXTRACTION_METHOD,
                "text_length": interview_text.len(),
            },
        }),
    );

    Ok(Value::Object(profile))
}
