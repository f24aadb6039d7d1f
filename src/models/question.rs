use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY: &str = "General";

/// Number of answer slots every question is rendered with.
pub const OPTION_SLOTS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    #[serde(rename = "questionText")]
    pub text: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswerIndex")]
    pub correct_index: usize,
    pub explanation: String,
    #[serde(rename = "javaVersion")]
    pub version: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Question {
    /// Whether `answer` is the correct option. Always false for a record
    /// whose correct index points past its options.
    pub fn is_correct(&self, answer: usize) -> bool {
        answer == self.correct_index && answer < self.options.len()
    }

    /// Exactly four options and a correct index inside them.
    pub fn is_well_formed(&self) -> bool {
        self.options.len() == OPTION_SLOTS && self.correct_index < self.options.len()
    }

    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults_category() {
        let json = r#"{
            "id": 7,
            "questionText": "What is a record?",
            "options": ["a", "b", "c", "d"],
            "correctAnswerIndex": 1,
            "explanation": "Records carry data.",
            "javaVersion": "17"
        }"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.id, 7);
        assert_eq!(question.version, "17");
        assert_eq!(question.category, DEFAULT_CATEGORY);
        assert!(question.is_well_formed());
        assert_eq!(question.correct_option(), Some("b"));
    }

    #[test]
    fn test_malformed_question_never_correct() {
        let question = Question {
            id: 1,
            text: "broken".to_string(),
            options: vec!["only".to_string(), "two".to_string()],
            correct_index: 3,
            explanation: String::new(),
            version: "Core".to_string(),
            category: DEFAULT_CATEGORY.to_string(),
        };
        assert!(!question.is_well_formed());
        assert!(!question.is_correct(3));
        assert!(!question.is_correct(0));
        assert_eq!(question.correct_option(), None);
    }
}
