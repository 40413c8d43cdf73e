//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::UserService;
use crate::domain::repositories::UserRepository;

/// Dependencies constructed once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
}

impl AppState {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            user_service: Arc::new(UserService::new(repository)),
        }
    }
}
