//! Concept quiz shown after the model is finished

use serde::Serialize;

/// A multiple-choice question with one right answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub prompt: &'static str,
    pub choices: &'static [&'static str],
    /// Index into `choices`
    pub answer: usize,
    pub praise: &'static str,
    pub hint: &'static str,
}

/// Outcome of checking one answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum QuizVerdict {
    Correct(&'static str),
    Incorrect(&'static str),
    /// The question or choice number does not exist
    OutOfRange,
}

impl QuizVerdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, QuizVerdict::Correct(_))
    }
}

pub const QUESTIONS: [Question; 2] = [
    Question {
        prompt: "When one species disappears, which one makes it easier to find other food?",
        choices: &["food chain", "food web"],
        answer: 1,
        praise: "Correct! A food web is tangled together, so it stands up to shocks.",
        hint: "Not quite. A food chain breaks easily. The food web is the answer!",
    },
    Question {
        prompt: "How should feeding links look for an ecosystem to stay stable?",
        choices: &["simply connected", "intricately connected"],
        answer: 1,
        praise: "Right! The more tangled the web, the sturdier it is.",
        hint: "Think again. Complex links resist shocks better!",
    },
];

/// Check a 1-based question number against a 1-based choice number
pub fn check(question: usize, choice: usize) -> QuizVerdict {
    let Some(q) = question.checked_sub(1).and_then(|i| QUESTIONS.get(i)) else {
        return QuizVerdict::OutOfRange;
    };
    let Some(index) = choice.checked_sub(1).filter(|i| *i < q.choices.len()) else {
        return QuizVerdict::OutOfRange;
    };

    if index == q.answer {
        QuizVerdict::Correct(q.praise)
    } else {
        QuizVerdict::Incorrect(q.hint)
    }
}
