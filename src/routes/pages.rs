use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::{
    middleware::session::SessionToken,
    models::{
        feedback::{Feedback, NewFeedback},
        notice::{NewNotice, Notice},
        session::Session,
    },
    render::{pages, Alert},
    services::{feedback::FeedbackService, notices::NoticeService},
    AppState,
};

/// Success flag planted by the login/logout redirects.
#[derive(Debug, Default, Deserialize)]
pub struct AdminQuery {
    alert: Option<String>,
}

fn flag_alert(flag: &str) -> Option<Alert> {
    match flag {
        "login" => Some(Alert::success("Login realizado com sucesso!")),
        "logout" => Some(Alert::success("Logout realizado!")),
        _ => None,
    }
}

/// A board that cannot be fetched renders the same as an empty one; the
/// failure only reaches the log.
async fn load_board(state: &AppState) -> Vec<Notice> {
    NoticeService::list(&state.supabase).await.unwrap_or_else(|e| {
        tracing::warn!("could not load notices: {e}");
        Vec::new()
    })
}

async fn load_entries(state: &AppState) -> Vec<Feedback> {
    FeedbackService::list(&state.supabase).await.unwrap_or_else(|e| {
        tracing::warn!("could not load feedback: {e}");
        Vec::new()
    })
}

/// The public page, fetched fresh on every request.
pub(crate) async fn render_home(
    state: &AppState,
    alert: Option<&Alert>,
    draft: &NewFeedback,
) -> String {
    let board = load_board(state).await;
    pages::home_page(alert, &board, draft)
}

/// The signed-in admin page, both lists fetched fresh.
pub(crate) async fn render_admin_panel(
    state: &AppState,
    session: &Session,
    alert: Option<&Alert>,
    draft: &NewNotice,
) -> String {
    let board = load_board(state).await;
    let entries = load_entries(state).await;
    pages::admin_panel_page(alert, session, draft, &board, &entries)
}

pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(render_home(&state, None, &NewFeedback::default()).await)
}

/// The gate decides which face the admin page shows, on every single
/// request; there is no cached signed-in flag anywhere.
pub async fn admin(
    State(state): State<AppState>,
    token: SessionToken,
    Query(query): Query<AdminQuery>,
) -> Html<String> {
    let alert = query.alert.as_deref().and_then(flag_alert);
    match state.gate.current(&state.supabase, token.as_deref()).await {
        Some(session) => Html(
            render_admin_panel(&state, &session, alert.as_ref(), &NewNotice::default()).await,
        ),
        None => Html(pages::admin_auth_page(alert.as_ref(), "")),
    }
}
