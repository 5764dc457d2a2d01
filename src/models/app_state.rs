use std::sync::Arc;

use crate::services::ValidationServiceTrait;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub validation_service: Arc<dyn ValidationServiceTrait>,
}

impl AppState {
    pub fn new(validation_service: Arc<dyn ValidationServiceTrait>) -> Self {
        Self { validation_service }
    }
}
