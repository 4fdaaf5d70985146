//! Quiz item contract produced by the generation backend.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One multiple-choice question.
///
/// `options` carry their own letter label (`"A) Paris"`) and `answer` is the
/// correct letter (`"A"`). The client never rewrites either; correctness is
/// decided at render time by comparing each option's leading character with
/// `answer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QuizItem {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_backend_item_with_explanation() {
        let json = r#"{
            "question": "What is the primary function of chlorophyll in photosynthesis?",
            "options": ["A) Store water", "B) Absorb light energy", "C) Release oxygen", "D) Produce glucose"],
            "answer": "B",
            "explanation": "Chlorophyll absorbs light energy from the sun."
        }"#;
        let item: QuizItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.options.len(), 4);
        assert_eq!(item.answer, "B");
        assert_eq!(
            item.explanation.as_deref(),
            Some("Chlorophyll absorbs light energy from the sun.")
        );
    }

    #[test]
    fn explanation_is_optional() {
        let json = r#"{"question": "2 + 2?", "options": ["A) 3", "B) 4"], "answer": "B"}"#;
        let item: QuizItem = serde_json::from_str(json).unwrap();
        assert!(item.explanation.is_none());

        let back = serde_json::to_value(&item).unwrap();
        assert!(back.get("explanation").is_none());
    }

    #[test]
    fn missing_answer_is_rejected() {
        let json = r#"{"question": "2 + 2?", "options": ["A) 3", "B) 4"]}"#;
        assert!(serde_json::from_str::<QuizItem>(json).is_err());
    }
}
