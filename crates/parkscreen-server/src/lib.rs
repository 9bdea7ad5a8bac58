//! HTTP surface for the Parkinson's inference service.
//!
//! One predict route plus the two small read-only routes the form UI
//! needs. The classifier is loaded once by the caller and injected into
//! the router as shared state; requests only ever read it.

mod error;
mod routes;

pub use error::ApiError;
pub use routes::router;

use std::net::SocketAddr;
use std::sync::Arc;

use parkscreen_model::Classifier;
use tracing::info;

/// Bind and serve the API until the process is stopped.
///
/// The classifier is the only piece of state; it is wrapped in an `Arc`
/// and shared read-only across all request handlers.
pub async fn serve(classifier: Classifier, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(Arc::new(classifier));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "parkscreen API listening");
    axum::serve(listener, app).await
}
