//! Prompt templates for both pipeline stages.
//!
//! The templates are static; all variability comes from the substituted
//! schema description and text. Rendering is pure and deterministic — the
//! dictionary iterates in a stable order, so the same schema always produces
//! byte-identical prompt text.

use std::fmt::Write as _;

use crate::schema::SchemaDictionary;

/// Extraction prompt. Substitution points: `{schema_description}`,
/// `{interview_text}`.
const EXTRACTION_PROMPT_TEMPLATE: &str = r#"You are a professional data extraction engine. Analyze the interview text below and fill in a profile as JSON.

DATA SCHEMA:
{schema_description}

FILLING RULES:

1. FIXED FIELDS: produce only the fields listed in the schema above
2. DATA TYPES: match the declared types exactly (string, int, float, bool, array, object)
3. DOT NOTATION: emit a field like "location.city" as a nested object {"location": {"city": "<value>"}}
4. ARRAYS: emit array fields as arrays of objects with descriptive keys, never arrays of bare scalars
5. MISSING DATA: if the text holds nothing for a field, set it to null — NEVER invent values
6. TAGS: after the declared fields, collect information that fits none of them under a single top-level "tags" object

EXAMPLES OF CORRECT STRUCTURES:
- education: array → "education": [{"university": "MSU", "degree": "bachelor", "year": 2020}]
- skills: array → "skills": [{"name": "Go", "level": "advanced"}, {"name": "Python", "level": "intermediate"}]
- location.city: string → "location": {"city": "Vladivostok"}
- social.telegram: string → "social": {"telegram": "@username"}
- tags: object → "tags": {"hobby": "photography", "personality": "outgoing"}

IMPORTANT:
- Return ONLY valid raw JSON — no markdown fences, no triple backticks
- No commentary or explanations of any kind
- Do not duplicate information between the declared fields and tags

INTERVIEW TEXT:
{interview_text}

ANSWER (raw JSON only, without markdown fences or triple backticks):"#;

/// Validation/repair prompt. Substitution point: `{profile_json}`.
const VALIDATION_PROMPT_TEMPLATE: &str = r#"You are a data validation expert. Review the profile below and fix the problems you find.

CHECKS:
1. DUPLICATION: remove entries from "tags" that repeat data already present in a typed field
2. DATA TYPES: make sure every field matches its intended type
3. CONSISTENCY: check the fields against each other for contradictions
4. STRUCTURE: the result must be valid, properly structured JSON

REPAIR RULES:
- Typed fields take priority; tags are secondary — delete duplicated tags, never move data out of a typed field
- Coerce a mismatched type only when lossless (a numeric string becomes a number)
- When two fields contradict each other, correct the derived one and keep the primary one
- Keep only logically consistent information

EXAMPLES OF PROBLEMS AND FIXES:
- duplicate: skills: [{"name": "Go"}] plus tags: {"programming": "Go"} → drop the tag
- type: age: "25" → age: 25
- contradiction: birth year 1990 with graduation year 1995 → correct the graduation year

PROFILE TO CHECK:
{profile_json}

ANSWER (corrected raw JSON only, without commentary, markdown fences or triple backticks):"#;

/// Renders the stage-one extraction prompt.
pub fn render_extraction_prompt(schema: &SchemaDictionary, interview_text: &str) -> String {
    EXTRACTION_PROMPT_TEMPLATE
        .replace("{schema_description}", schema_description(schema).trim_end())
        .replace("{interview_text}", interview_text)
}

/// Renders the stage-two validation/repair prompt around the stage-one reply.
pub fn render_validation_prompt(profile_json: &str) -> String {
    VALIDATION_PROMPT_TEMPLATE.replace("{profile_json}", profile_json)
}

/// One `- <name>: <kind>` line per field, in dictionary order. The kind is
/// `array`/`object` for the composite types, the primitive name otherwise.
pub fn schema_description(schema: &SchemaDictionary) -> String {
    let mut description = String::new();
    for field in schema.values() {
        let kind = if field.is_array() {
            "array"
        } else if field.is_object() {
            "object"
        } else {
            field.field_type.label()
        };
        let _ = writeln!(description, "- {}: {}", field.name, kind);
    }
    description
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::parse_schema;

    fn schema() -> SchemaDictionary {
        parse_schema(
            "name: string\nage: int\nskills: array\ntags: object\nlocation.city: string\n",
            "d.yaml",
        )
        .unwrap()
    }

    #[test]
    fn test_schema_description_one_line_per_field_in_order() {
        let description = schema_description(&schema());
        let lines: Vec<&str> = description.lines().collect();
        assert_eq!(
            lines,
            vec![
                "- age: int",
                "- location.city: string",
                "- name: string",
                "- skills: array",
                "- tags: object",
            ]
        );
    }

    #[test]
    fn test_schema_description_kinds_follow_declared_types() {
        let schema = parse_schema("a: array\no: object\nf: float\nb: bool\n", "d.yaml").unwrap();
        let description = schema_description(&schema);
        assert!(description.contains("- a: array"));
        assert!(description.contains("- o: object"));
        assert!(description.contains("- f: float"));
        assert!(description.contains("- b: bool"));
    }

    #[test]
    fn test_extraction_prompt_embeds_schema_and_text() {
        let prompt = render_extraction_prompt(&schema(), "I was born in Vladivostok.");
        assert!(prompt.contains("- name: string"));
        assert!(prompt.contains("- location.city: string"));
        assert!(prompt.contains("I was born in Vladivostok."));
        assert!(!prompt.contains("{schema_description}"));
        assert!(!prompt.contains("{interview_text}"));
    }

    #[test]
    fn test_extraction_prompt_states_the_hard_rules() {
        let prompt = render_extraction_prompt(&schema(), "text");
        assert!(prompt.contains("only the fields listed in the schema"));
        assert!(prompt.contains("null"));
        assert!(prompt.contains("\"tags\""));
        assert!(prompt.contains("arrays of objects"));
        assert!(prompt.contains("raw JSON"));
    }

    #[test]
    fn test_extraction_prompt_is_deterministic() {
        let first = render_extraction_prompt(&schema(), "same text");
        let second = render_extraction_prompt(&schema(), "same text");
        assert_eq!(first, second);
    }

    #[test]
    fn test_validation_prompt_embeds_profile() {
        let prompt = render_validation_prompt(r#"{"age": "25"}"#);
        assert!(prompt.contains(r#"{"age": "25"}"#));
        assert!(!prompt.contains("{profile_json}"));
        assert!(prompt.contains("raw JSON"));
    }
}
