//! Quiz rendering: per-question view state with correctness marking.

use edu_core::QuizItem;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizOptionView {
    /// Leading character of the option text, if any.
    pub letter: Option<char>,
    pub text: String,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestionView {
    /// 1-based position in the quiz.
    pub number: usize,
    pub question: String,
    pub options: Vec<QuizOptionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Map quiz items to display state, keeping server order.
///
/// An option is correct when its leading character equals `answer` exactly
/// (case-sensitive). Every matching option is marked, so a malformed item can
/// show zero or several correct options.
#[must_use]
pub fn render_quiz(items: &[QuizItem]) -> Vec<QuizQuestionView> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| QuizQuestionView {
            number: index + 1,
            question: item.question.clone(),
            options: item
                .options
                .iter()
                .map(|option| {
                    let letter = option.chars().next();
                    QuizOptionView {
                        letter,
                        text: option.clone(),
                        correct: letter.is_some_and(|letter| matches_answer(letter, &item.answer)),
                    }
                })
                .collect(),
            explanation: item.explanation.clone(),
        })
        .collect()
}

fn matches_answer(letter: char, answer: &str) -> bool {
    let mut chars = answer.chars();
    chars.next() == Some(letter) && chars.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn item(options: &[&str], answer: &str) -> QuizItem {
        QuizItem {
            question: "Capital of France?".into(),
            options: options.iter().map(ToString::to_string).collect(),
            answer: answer.into(),
            explanation: None,
        }
    }

    fn correct_flags(items: &[QuizItem]) -> Vec<bool> {
        render_quiz(items)[0]
            .options
            .iter()
            .map(|option| option.correct)
            .collect()
    }

    #[rstest]
    #[case::first_option(&["A) Paris", "B) Lyon"], "A", vec![true, false])]
    #[case::no_match(&["A) Paris", "B) Lyon"], "C", vec![false, false])]
    #[case::case_sensitive(&["A) Paris", "B) Lyon"], "a", vec![false, false])]
    #[case::duplicate_letters(&["A) Paris", "A) Lyon", "B) Nice"], "A", vec![true, true, false])]
    #[case::multi_char_answer(&["A) Paris", "B) Lyon"], "A)", vec![false, false])]
    #[case::empty_option(&["", "B) Lyon"], "B", vec![false, true])]
    fn marks_options_matching_answer(
        #[case] options: &[&str],
        #[case] answer: &str,
        #[case] expected: Vec<bool>,
    ) {
        assert_eq!(correct_flags(&[item(options, answer)]), expected);
    }

    #[test]
    fn keeps_server_order_and_numbers_from_one() {
        let mut second = item(&["A) 3", "B) 4"], "B");
        second.question = "2 + 2?".into();
        second.explanation = Some("Basic arithmetic.".into());

        let views = render_quiz(&[item(&["A) Paris"], "A"), second]);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].number, 1);
        assert_eq!(views[1].number, 2);
        assert_eq!(views[1].question, "2 + 2?");
        assert_eq!(views[1].explanation.as_deref(), Some("Basic arithmetic."));
        assert_eq!(views[1].options[1].letter, Some('B'));
        assert_eq!(views[1].options[1].text, "B) 4");
    }

    #[test]
    fn empty_quiz_renders_nothing() {
        assert!(render_quiz(&[]).is_empty());
    }
}
