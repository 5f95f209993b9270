//! The dialogue controller.
//!
//! Maps inbound intents to handlers and drives the conversation forward:
//! greet and ask for a name, ask the quiz question, then build and submit
//! the xAPI statement before speaking the closing message. The valid
//! traversal is launch → name → answer, but delivery order is entirely up
//! to the platform and nothing here guards against an answer arriving
//! first; the statement simply goes out with an empty actor name.

use crate::{
    SpeechAction, choices,
    lrs::LrsClient,
    session::QuizSession,
    statement::Statement,
};
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Spoken when the chosen answer is the correct one.
pub const CORRECT_MESSAGE: &str = "Congratulation, that answer is correct.";
/// Spoken for any choice in the table that is not the correct one.
pub const INCORRECT_MESSAGE: &str = "I'm sorry, but that answer is incorrect.";

/// A named user action recognized by the voice platform, with any slot
/// values the platform extracted from speech. A `None` slot means the
/// platform dispatched the intent without a usable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// First contact; re-dispatches to the name question.
    Launch,
    /// Greet the user and ask for their name.
    AskName,
    /// The user said their name.
    NameProvided { name: Option<String> },
    /// The user said an answer number.
    AnswerProvided { answer: Option<String> },
}

/// Handles one intent at a time against a per-conversation session,
/// submitting the quiz result through the record-store client on the
/// terminal intent.
pub struct DialogueController {
    lrs: Arc<dyn LrsClient>,
}

impl DialogueController {
    pub fn new(lrs: Arc<dyn LrsClient>) -> Self {
        Self { lrs }
    }

    /// Drives one turn of the conversation.
    ///
    /// Every intent resolves to a speech action: `Ask` keeps the session
    /// open, `Tell` ends it. The terminal intent awaits the statement
    /// submission before producing its `Tell`, so the closing message is
    /// never spoken ahead of the submission attempt. Failures along the
    /// way are absorbed; the user always gets a closing message.
    pub async fn handle(&self, session: &mut QuizSession, intent: Intent) -> SpeechAction {
        match intent {
            // Launch is a zero-delay internal transition to the name question.
            Intent::Launch | Intent::AskName => ask_name(),
            Intent::NameProvided { name } => ask_question(session, name),
            Intent::AnswerProvided { answer } => self.finish_quiz(session, answer).await,
        }
    }

    /// The terminal intent: record the answer, build the statement, submit
    /// it, and close the session.
    async fn finish_quiz(
        &self,
        session: &mut QuizSession,
        raw_answer: Option<String>,
    ) -> SpeechAction {
        let code = raw_answer
            .as_deref()
            .and_then(|v| v.trim().parse::<i64>().ok());
        session.answer = code;
        session.my_answer = String::new();
        session.message = String::new();

        info!(
            name = session.first_name.as_deref().unwrap_or(""),
            answer = ?code,
            "Answer intent received"
        );

        match code.and_then(choices::lookup) {
            Some(choice) => {
                session.my_answer = choice.label.to_string();
                session.message = if choice.correct {
                    CORRECT_MESSAGE.to_string()
                } else {
                    INCORRECT_MESSAGE.to_string()
                };
                info!(answer = %choice.label, correct = choice.correct, "Answer recorded");
            }
            // No range validation: a miss submits blank result fields.
            None => warn!(raw = ?raw_answer, "Answer has no table entry; submitting blank result"),
        }

        let statement = Statement::from_session(session);
        match self.lrs.send_statement(&statement).await {
            Ok(response) => info!(status = response.status, "Statement sent"),
            Err(err) => error!(error = ?err, "Statement submission failed"),
        }

        SpeechAction::Tell(session.message.clone())
    }
}

fn ask_name() -> SpeechAction {
    SpeechAction::Ask(
        "Hello! Welcome to the DevLearn example quiz! \
         This quiz will test your knowledge of the Big Buck Bunny video. \
         Before we begin, may I ask your name?"
            .to_string(),
    )
}

fn ask_question(session: &mut QuizSession, name: Option<String>) -> SpeechAction {
    // The raw slot value is stored as-is; a missing slot becomes an empty
    // string and no validation is applied.
    let name = name.unwrap_or_default();
    info!(name = %name, "Name intent received");
    session.first_name = Some(name.clone());

    let mut prompt = format!(
        "Hello, {}! I will ask you a single question. \
         Please select the corresponding number to the correct answer. \
         In the video, Big Buck Bunny, what is the first animal you see?",
        name
    );
    for (code, choice) in choices::all() {
        let _ = write!(prompt, " {}. A {}?", code, choice.label);
    }
    SpeechAction::Ask(prompt)
}
