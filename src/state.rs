// src/state.rs
use std::sync::Arc;

use crate::services::responder::Responder;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub responder: Responder,
}

impl AppState {
    pub fn new(responder: Responder) -> Self {
        Self { responder }
    }
}
