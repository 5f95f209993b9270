//! Quiz Skill API Library Crate
//!
//! This library contains all the logic for the quiz-skill web service: the
//! application state, the webhook handler that dispatches voice-platform
//! events into the dialogue controller, and routing. The `api` binary is a
//! thin wrapper around this library.

pub mod config;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
