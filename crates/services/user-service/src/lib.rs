//! User Service Library
//!
//! Create, read, update and delete user records over HTTP, with posts owned
//! by users through a cascading foreign key.
//!
//! Requests flow API → service → repository → store. The service layer
//! enforces every validation and uniqueness rule; the store's unique
//! constraints back it up under concurrent writes.

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use axum::Router;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::UserServiceConfig;
use crate::infra::Database;

/// Build the HTTP application on top of an open database.
pub fn build_app(database: Database) -> Router {
    create_router(AppState::from_database(database))
}

/// Connect, migrate and serve HTTP until the process is stopped.
pub async fn run_server(config: UserServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let database = Database::connect(&config.database).await?;
    let app = build_app(database);

    let addr = config.service.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("{} listening on http://{}", config.service.service_name, addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: UserServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await? {
                let marker = if applied { "[x]" } else { "[ ]" };
                info!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
