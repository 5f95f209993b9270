use serde::{Deserialize, Serialize};

/// Per-conversation attribute state.
///
/// The voice platform echoes session attributes back with every request, so
/// this struct is the only state that survives between turns of a single
/// conversation. Nothing persists across conversations. The serialized field
/// names match the attribute keys the platform carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizSession {
    /// The user's name, captured once, stored exactly as the platform
    /// delivered it (a missing slot is stored as an empty string).
    #[serde(rename = "FirstName", default)]
    pub first_name: Option<String>,
    /// The parsed answer code, if the slot value parsed as an integer.
    #[serde(rename = "Answer", default)]
    pub answer: Option<i64>,
    /// The label of the chosen answer; empty until the answer turn, and
    /// stays empty when the code has no table entry.
    #[serde(rename = "myAnswer", default)]
    pub my_answer: String,
    /// The closing message spoken after submission; empty until the answer
    /// turn, and stays empty when the code has no table entry.
    #[serde(rename = "message", default)]
    pub message: String,
}

impl QuizSession {
    /// Creates a fresh session for a new conversation.
    pub fn new() -> Self {
        Self::default()
    }
}
