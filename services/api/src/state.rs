//! Shared Application State
//!
//! This module defines the `AppState` struct, which holds all shared
//! resources: the dialogue controller (with its record-store client) and
//! the loaded configuration.

use crate::config::Config;
use quiz_core::dialogue::DialogueController;
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all
/// handlers.
pub struct AppState {
    pub controller: DialogueController,
    pub config: Arc<Config>,
}
