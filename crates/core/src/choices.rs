/// A single entry in the fixed answer table for the quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerChoice {
    /// The spoken label for this choice (e.g., "Bird").
    pub label: &'static str,
    /// Whether this choice is the correct answer.
    pub correct: bool,
}

/// The quiz asks which animal appears first in the Big Buck Bunny video.
/// Defined once, read-only; exactly one entry is correct.
const CHOICES: [(i64, AnswerChoice); 4] = [
    (
        1,
        AnswerChoice {
            label: "Flying Squirrel",
            correct: false,
        },
    ),
    (
        2,
        AnswerChoice {
            label: "Bunny",
            correct: false,
        },
    ),
    (
        3,
        AnswerChoice {
            label: "Bird",
            correct: true,
        },
    ),
    (
        4,
        AnswerChoice {
            label: "Butterfly",
            correct: false,
        },
    ),
];

/// Looks up an answer code in the choice table.
///
/// Any code without an entry (out of range, negative, etc.) returns `None`;
/// the caller tolerates the miss rather than rejecting the turn.
pub fn lookup(code: i64) -> Option<AnswerChoice> {
    CHOICES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, choice)| *choice)
}

/// Returns all `(code, choice)` entries in presentation order.
pub fn all() -> &'static [(i64, AnswerChoice)] {
    &CHOICES
}
