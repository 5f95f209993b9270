pub mod choices;
pub mod dialogue;
pub mod lrs;
pub mod session;
pub mod statement;

/// Represents commands that the dialogue logic issues to the voice-platform host.
///
/// This enum is the primary API for decoupling the dialogue's decision-making
/// from the host's delivery of speech (prompting the user or closing out the
/// conversation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechAction {
    /// Speak the prompt and keep the session open, awaiting a user reply.
    Ask(String),
    /// Speak the final message and end the session.
    Tell(String),
}
