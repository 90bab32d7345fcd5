use crate::models::Question;

/// Case-insensitive equality between a question's discipline and the target.
///
/// Both sides are lowercased before comparison. No trimming, no diacritics
/// normalization, no substring matching: `"math "` with a trailing space is a
/// distinct discipline and never matches `"Math"`.
pub fn matches_discipline(question: &Question, target: &str) -> bool {
    question.discipline.to_lowercase() == target.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question_with_discipline(discipline: &str) -> Question {
        Question {
            title: "Question 1".to_string(),
            index: 1,
            year: 2020,
            discipline: discipline.to_string(),
            correct_alternative: "A".to_string(),
            alternatives: Vec::new(),
        }
    }

    #[test]
    fn matches_regardless_of_case() {
        let question = question_with_discipline("Mathematics");
        assert!(matches_discipline(&question, "mathematics"));
        assert!(matches_discipline(&question, "MATHEMATICS"));
        assert!(matches_discipline(&question, "Mathematics"));
    }

    #[test]
    fn trailing_whitespace_is_a_different_discipline() {
        let question = question_with_discipline("mathematics ");
        assert!(!matches_discipline(&question, "mathematics"));
        assert!(matches_discipline(&question, "Mathematics "));
    }

    #[test]
    fn substrings_do_not_match() {
        let question = question_with_discipline("mathematics");
        assert!(!matches_discipline(&question, "math"));
    }
}
