//! Minimal liveness listener.
//!
//! Answers every request with a fixed body so the process supervisor's
//! health check keeps the bot alive. Not part of the conversational core.

use axum::Router;

const BODY: &str = "Bot is running";

pub async fn serve(port: u16) -> std::io::Result<()> {
    let app = Router::new().fallback(|| async { BODY });

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "liveness listener up");

    axum::serve(listener, app).await
}
