//! Plain-text lane cards.

use std::fmt::Write as _;

use edu_workspace::{LaneBody, LaneView, QuizQuestionView};

/// Render a lane as a header line, optional error line, and body.
#[must_use]
pub fn render_text(view: &LaneView) -> String {
    let mut out = format!("== {} [{}] ==\n", view.title, view.status);
    if let Some(error) = &view.error {
        let _ = writeln!(out, "error: {error}");
    }
    match &view.body {
        LaneBody::Placeholder(hint) => {
            let _ = writeln!(out, "({hint})");
        }
        LaneBody::Text(text) | LaneBody::Plain(text) => {
            out.push_str(text);
            if !text.ends_with('\n') {
                out.push('\n');
            }
        }
        LaneBody::Quiz(questions) if questions.is_empty() => out.push_str("(no questions)\n"),
        LaneBody::Quiz(questions) => {
            for question in questions {
                render_question(&mut out, question);
            }
        }
    }
    out
}

fn render_question(out: &mut String, question: &QuizQuestionView) {
    let _ = writeln!(out, "Q{}. {}", question.number, question.question);
    for option in &question.options {
        let marker = if option.correct { "✓" } else { " " };
        let _ = writeln!(out, "  {marker} {}", option.text);
    }
    if let Some(explanation) = &question.explanation {
        let _ = writeln!(out, "  Explanation: {explanation}");
    }
}
