//! Webhook Models
//!
//! This module defines the envelope exchanged with the voice-platform host:
//! inbound intent events with their slot values, and outbound speech
//! responses carrying the round-tripped session attributes.

use quiz_core::session::QuizSession;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An inbound intent event from the voice platform.
///
/// Slot values arrive exactly as the platform extracted them from speech;
/// a missing slot is `None`. Slot naming on the platform side is a
/// platform-configuration concern and is normalized here.
#[derive(Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SkillEvent {
    /// A new conversation was launched.
    Launch,
    /// The platform asked for the greeting directly.
    AskName,
    /// The user said their name.
    NameProvided { name: Option<String> },
    /// The user said an answer number.
    AnswerProvided { answer: Option<String> },
}

/// One turn of the conversation, as delivered by the platform.
#[derive(Deserialize, Debug, ToSchema)]
pub struct SkillRequest {
    pub event: SkillEvent,
    /// Session attributes echoed back by the platform; absent on first
    /// contact.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub session: Option<QuizSession>,
}

/// The speech action for the platform to perform, plus the attributes it
/// must echo on the next turn.
#[derive(Serialize, Debug, ToSchema)]
pub struct SkillResponse {
    /// The text to speak to the user.
    pub speech: String,
    /// `true` closes the session; `false` keeps it open awaiting a reply.
    pub end_session: bool,
    #[schema(value_type = Object)]
    pub session: QuizSession,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_event_deserialization() {
        let launch: SkillEvent = serde_json::from_str(r#"{"type": "launch"}"#).unwrap();
        assert_eq!(launch, SkillEvent::Launch);

        let name: SkillEvent =
            serde_json::from_str(r#"{"type": "name_provided", "name": "Ann"}"#).unwrap();
        assert_eq!(
            name,
            SkillEvent::NameProvided {
                name: Some("Ann".to_string())
            }
        );

        let answer: SkillEvent =
            serde_json::from_str(r#"{"type": "answer_provided", "answer": "3"}"#).unwrap();
        assert_eq!(
            answer,
            SkillEvent::AnswerProvided {
                answer: Some("3".to_string())
            }
        );
    }

    #[test]
    fn test_skill_event_missing_slot_is_none() {
        let name: SkillEvent = serde_json::from_str(r#"{"type": "name_provided"}"#).unwrap();
        assert_eq!(name, SkillEvent::NameProvided { name: None });

        let answer: SkillEvent = serde_json::from_str(r#"{"type": "answer_provided"}"#).unwrap();
        assert_eq!(answer, SkillEvent::AnswerProvided { answer: None });
    }

    #[test]
    fn test_skill_event_unknown_type_is_rejected() {
        let result: Result<SkillEvent, _> = serde_json::from_str(r#"{"type": "mystery"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_skill_request_without_session() {
        let request: SkillRequest = serde_json::from_str(r#"{"event": {"type": "launch"}}"#).unwrap();
        assert_eq!(request.event, SkillEvent::Launch);
        assert!(request.session.is_none());
    }

    #[test]
    fn test_skill_request_round_trips_session_attributes() {
        let json = r#"{
            "event": {"type": "answer_provided", "answer": "3"},
            "session": {"FirstName": "Ann"}
        }"#;
        let request: SkillRequest = serde_json::from_str(json).unwrap();
        let session = request.session.unwrap();
        assert_eq!(session.first_name.as_deref(), Some("Ann"));
    }

    #[test]
    fn test_skill_response_serialization() {
        let response = SkillResponse {
            speech: "Goodbye.".to_string(),
            end_session: true,
            session: QuizSession::new(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"speech\":\"Goodbye.\""));
        assert!(json.contains("\"end_session\":true"));
        assert!(json.contains("\"FirstName\""));
    }

    #[test]
    fn test_error_response_serialization() {
        let error = ErrorResponse {
            message: "Malformed event".to_string(),
        };
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, r#"{"message":"Malformed event"}"#);
    }
}
