use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use escola_mural::config::Config;
use escola_mural::services::session::SessionGate;
use escola_mural::services::supabase::Supabase;
use escola_mural::{routes, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let config = Arc::new(config);

    let supabase = Supabase::new(&config.supabase_url, &config.supabase_anon_key);
    let gate = Arc::new(SessionGate::new());

    // Session-change audit log: every sign-in and sign-out lands in the log.
    let mut events = gate.subscribe();
    tokio::spawn(async move {
        use tokio::sync::broadcast::error::RecvError;
        loop {
            match events.recv().await {
                Ok(event) => info!("auth event: {event}"),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("auth event log lagged, {skipped} events dropped");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    let state = AppState {
        supabase,
        gate,
        config: config.clone(),
    };

    let app = Router::new()
        .route("/", get(routes::pages::home))
        .route("/health", get(routes::health::health_check))
        .route("/feedback", post(routes::feedback::submit))
        // Admin
        .route("/admin", get(routes::pages::admin))
        .route("/admin/login", post(routes::auth::login))
        .route("/admin/register", post(routes::auth::register))
        .route("/admin/logout", post(routes::auth::logout))
        .route("/admin/notices", post(routes::notices::create))
        .route("/admin/notices/{id}/delete", post(routes::notices::delete))
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("escola-mural listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
