// Library exports for the server binary and tests
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod rating;
pub mod render;
pub mod routes;
pub mod services;

use std::sync::Arc;

use config::Config;
use services::session::SessionGate;
use services::supabase::Supabase;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub supabase: Supabase,
    pub gate: Arc<SessionGate>,
    pub config: Arc<Config>,
}
