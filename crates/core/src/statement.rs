//! xAPI statement types and construction.
//!
//! The serialized shape of these structs is the wire contract with the
//! learning record store and must not drift: key casing (`objectType`),
//! locale-keyed display maps, and the fixed extension URI are all part of
//! the xAPI statement format the LRS expects.

use crate::session::QuizSession;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const MBOX_DOMAIN: &str = "devlearn16.com";
const VERB_ID: &str = "http://adlnet.gov/expapi/verbs/answered";
const VERB_DISPLAY: &str = "answered";
const ACTIVITY_ID: &str = "http://omnesLRS.com/xapi/quiz_tracker";
const ACTIVITY_NAME: &str = "xAPI Video Quiz";
const ACTIVITY_DESCRIPTION: &str = "Correlating quiz answers to video consumption";
const LOCATION_EXTENSION_URI: &str = "http://example.com/xapi/location";
const LOCATION_EXTENSION_VALUE: &str = "15.6";
const LOCALE: &str = "en-US";

/// The agent who answered the quiz question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Synthetic contact address derived from the lower-cased name.
    pub mbox: String,
    /// The name exactly as spoken, original casing preserved.
    pub name: String,
    #[serde(rename = "objectType")]
    pub object_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verb {
    pub id: String,
    pub display: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityDefinition {
    pub name: HashMap<String, String>,
    pub description: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityObject {
    pub id: String,
    pub definition: ActivityDefinition,
    #[serde(rename = "objectType")]
    pub object_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementResult {
    /// The chosen answer label; empty when the answer code had no table entry.
    pub response: String,
    pub extensions: HashMap<String, String>,
}

/// An immutable xAPI activity record, built once per conversation and never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub actor: Actor,
    pub verb: Verb,
    pub object: ActivityObject,
    pub result: StatementResult,
}

impl Statement {
    /// Builds the quiz statement from accumulated session attributes.
    ///
    /// The actor is derived from `FirstName` (lower-cased for the mbox,
    /// original casing for the display name); a missing name yields an empty
    /// actor name rather than an error. The verb, activity, and location
    /// extension are fixed.
    pub fn from_session(session: &QuizSession) -> Self {
        let name = session.first_name.clone().unwrap_or_default();
        Self {
            actor: Actor {
                mbox: format!("mailto:{}@{}", name.to_lowercase(), MBOX_DOMAIN),
                name,
                object_type: "Agent".to_string(),
            },
            verb: Verb {
                id: VERB_ID.to_string(),
                display: HashMap::from([(LOCALE.to_string(), VERB_DISPLAY.to_string())]),
            },
            object: ActivityObject {
                id: ACTIVITY_ID.to_string(),
                definition: ActivityDefinition {
                    name: HashMap::from([(LOCALE.to_string(), ACTIVITY_NAME.to_string())]),
                    description: HashMap::from([(
                        LOCALE.to_string(),
                        ACTIVITY_DESCRIPTION.to_string(),
                    )]),
                },
                object_type: "Activity".to_string(),
            },
            result: StatementResult {
                response: session.my_answer.clone(),
                extensions: HashMap::from([(
                    LOCATION_EXTENSION_URI.to_string(),
                    LOCATION_EXTENSION_VALUE.to_string(),
                )]),
            },
        }
    }
}
