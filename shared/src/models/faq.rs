//! FAQ Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::Schema;

/// FAQ entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub created_at: i64,
}

/// List filter for `GET /api/faqs`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaqFilter {
    /// Case-insensitive substring of question or answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

/// Create FAQ payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FaqCreate {
    #[serde(default)]
    #[validate(length(min = 1, max = 500, message = "Question must be 1 to 500 characters"))]
    pub question: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 5000, message = "Answer must be 1 to 5000 characters"))]
    pub answer: String,
}

impl Schema for FaqCreate {}

/// Update FAQ payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FaqUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 500, message = "Question must be 1 to 500 characters"))]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 5000, message = "Answer must be 1 to 5000 characters"))]
    pub answer: Option<String>,
}

impl Schema for FaqUpdate {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_answer() {
        let payload: FaqCreate = serde_json::from_str(r#"{"question":"Q?"}"#).unwrap();
        let errors = payload.check().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "answer");
        assert_eq!(errors[0].message, "Answer must be 1 to 5000 characters");
    }

    #[test]
    fn test_question_length_bound() {
        let payload = FaqCreate {
            question: "q".repeat(501),
            answer: "A".into(),
        };
        assert_eq!(payload.check().unwrap_err()[0].field, "question");
    }

    #[test]
    fn test_update_subset() {
        let patch: FaqUpdate = serde_json::from_str(r#"{"answer":"Yes"}"#).unwrap();
        assert!(patch.check().is_ok());
        let empty: FaqUpdate = serde_json::from_str(r#"{"question":""}"#).unwrap();
        assert!(empty.check().is_err());
    }
}
