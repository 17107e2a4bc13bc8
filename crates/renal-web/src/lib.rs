//! # renal-web
//!
//! Server-rendered pages for the renal transplant demo.
//!
//! The web layer is a thin collaborator around [`renal_core`]: it pulls the
//! four raw fields out of the dosing form, hands them to the evaluator and
//! renders whatever comes back. Site name and footer year come from a
//! [`SiteConfig`] held in router state.
//!
//! ## Routes
//!
//! | Method | Path       | Page                                  |
//! |--------|------------|---------------------------------------|
//! | GET    | `/`        | Home with daily tips                  |
//! | GET    | `/dosing`  | Empty dosing form                     |
//! | POST   | `/dosing`  | Dosing form with warnings or advisory |
//! | GET    | `/about`   | About                                 |
//! | GET    | `/contact` | Contact                               |
//!
//! Anything else is served from the public directory, if configured, or
//! gets the not-found page.

pub mod config;
pub mod routes;
pub mod views;

pub use config::{PageContext, SiteConfig, DEFAULT_SITE_NAME};
pub use routes::{router, AppState};

use std::net::SocketAddr;

use renal_core::DosingEvaluator;
use thiserror::Error;
use tokio::net::TcpListener;

/// Errors from running the server.
#[derive(Error, Debug)]
pub enum ServeError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(
    addr: SocketAddr,
    evaluator: DosingEvaluator,
    site: SiteConfig,
) -> Result<(), ServeError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;
    let local = listener.local_addr()?;

    tracing::info!(
        site = %site.site_name,
        public_dir = ?site.public_dir,
        "Renal Transplant App running on http://localhost:{}",
        local.port()
    );

    let app = router(AppState::new(evaluator, site));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
