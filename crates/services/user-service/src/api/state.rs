//! Application state for dependency injection.

use std::sync::Arc;

use crate::infra::Database;
use crate::repository::{PostStore, UserStore};
use crate::service::{PostManager, PostService, UserManager, UserService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub post_service: Arc<dyn PostService>,
    pub database: Database,
}

impl AppState {
    /// Create app state from already-built services.
    pub fn new(
        user_service: Arc<dyn UserService>,
        post_service: Arc<dyn PostService>,
        database: Database,
    ) -> Self {
        Self {
            user_service,
            post_service,
            database,
        }
    }

    /// Wire the SeaORM stores and services onto one database connection.
    pub fn from_database(database: Database) -> Self {
        let users = Arc::new(UserStore::new(database.get_connection()));
        let posts = Arc::new(PostStore::new(database.get_connection()));

        Self::new(
            Arc::new(UserManager::new(users.clone())),
            Arc::new(PostManager::new(users, posts)),
            database,
        )
    }
}
