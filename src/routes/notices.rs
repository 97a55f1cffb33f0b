use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use uuid::Uuid;

use crate::{
    middleware::session::SessionToken,
    models::notice::NewNotice,
    render::Alert,
    services::notices::NoticeService,
    AppState,
};

use super::pages::render_admin_panel;

/// Publish a notice. A failed attempt re-renders the panel with the draft
/// intact; success clears the form. The board is re-fetched either way.
pub async fn create(
    State(state): State<AppState>,
    token: SessionToken,
    Form(form): Form<NewNotice>,
) -> Response {
    let Some(session) = state.gate.current(&state.supabase, token.as_deref()).await else {
        return Redirect::to("/admin").into_response();
    };

    let draft = form.clone();
    let author = Some(session.user.email.clone());
    match NoticeService::create(&state.supabase, &session.access_token, author, form).await {
        Ok(()) => {
            let alert = Alert::success("Aviso publicado!");
            Html(
                render_admin_panel(&state, &session, Some(&alert), &NewNotice::default()).await,
            )
            .into_response()
        }
        Err(e) => {
            let alert = Alert::error(&e);
            Html(render_admin_panel(&state, &session, Some(&alert), &draft).await).into_response()
        }
    }
}

/// Delete a notice. The board is re-fetched on success and failure alike,
/// so a notice someone else already removed simply disappears from the
/// re-rendered list next to the error.
pub async fn delete(
    State(state): State<AppState>,
    token: SessionToken,
    Path(id): Path<Uuid>,
) -> Response {
    let Some(session) = state.gate.current(&state.supabase, token.as_deref()).await else {
        return Redirect::to("/admin").into_response();
    };

    let alert = match NoticeService::delete(&state.supabase, &session.access_token, id).await {
        Ok(()) => Alert::success("Aviso excluído!"),
        Err(e) => Alert::error(&e),
    };
    Html(render_admin_panel(&state, &session, Some(&alert), &NewNotice::default()).await)
        .into_response()
}
