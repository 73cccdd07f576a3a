//! JSON HTTP API for the board.
//!
//! [`router`] wires every route onto a shared [`BoardService`]; [`serve`]
//! runs it until the process receives Ctrl-C.

pub mod dto;
pub mod error;
mod handlers;

use crate::board::{ports::BoardRepository, services::BoardService};
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use mockable::Clock;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Builds the API router over a board service.
#[must_use]
pub fn router<R, C>(board: Arc<BoardService<R, C>>) -> Router
where
    R: BoardRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/api/health", get(handlers::health))
        .route(
            "/api/data",
            get(handlers::get_data::<R, C>).put(handlers::replace_data::<R, C>),
        )
        .route("/api/tasks", post(handlers::create_task::<R, C>))
        .route("/api/tasks/reorder", put(handlers::reorder_task::<R, C>))
        .route(
            "/api/tasks/{id}",
            put(handlers::update_task::<R, C>).delete(handlers::delete_task::<R, C>),
        )
        .route(
            "/api/tasks/{id}/complete",
            post(handlers::complete_task::<R, C>),
        )
        .route(
            "/api/completed-tasks/{id}",
            delete(handlers::delete_completed_task::<R, C>),
        )
        .route(
            "/api/completed-tasks/{id}/restore",
            post(handlers::restore_task::<R, C>),
        )
        .route(
            "/api/team-members",
            get(handlers::list_members::<R, C>).post(handlers::create_member::<R, C>),
        )
        .route(
            "/api/team-members/reorder",
            put(handlers::reorder_member::<R, C>),
        )
        .route(
            "/api/team-members/{id}",
            put(handlers::update_member::<R, C>).delete(handlers::delete_member::<R, C>),
        )
        .route(
            "/api/team-members/{id}/tasks",
            get(handlers::member_tasks::<R, C>),
        )
        .route(
            "/api/team-members/{id}/completed-tasks",
            get(handlers::member_completed_tasks::<R, C>)
                .delete(handlers::clear_member_completed_tasks::<R, C>),
        )
        .route("/api/workload", get(handlers::workload::<R, C>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(board)
}

/// Serves `app` on `listener` until Ctrl-C is received.
///
/// # Errors
///
/// Returns the underlying I/O error if the server fails.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}
