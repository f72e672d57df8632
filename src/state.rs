//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::MessageService;
use crate::domain::repositories::MessageRepository;

/// Message service over whichever store the server was started with.
pub type SharedMessageService = Arc<MessageService<dyn MessageRepository>>;

#[derive(Clone)]
pub struct AppState {
    pub message_service: SharedMessageService,
}

impl AppState {
    pub fn new(message_service: SharedMessageService) -> Self {
        Self { message_service }
    }
}
