use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::{
    middleware::session::SessionToken,
    models::session::{LoginRequest, RegisterRequest},
    render::{pages, Alert},
    services::session::{clear_session_cookie, session_cookie},
    AppState,
};

/// The admin panel never appears in this response: success installs the
/// cookie and redirects, and the next render's gate check decides what
/// the browser sees.
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginRequest>) -> Response {
    match state
        .gate
        .login(&state.supabase, &form.email, &form.password)
        .await
    {
        Ok(session) => (
            [(header::SET_COOKIE, session_cookie(&session.access_token))],
            Redirect::to("/admin?alert=login"),
        )
            .into_response(),
        Err(e) => {
            let alert = Alert::error(&e);
            Html(pages::admin_auth_page(Some(&alert), form.email.trim())).into_response()
        }
    }
}

/// Registration stays on the auth view either way; a new account still has
/// to sign in (and possibly confirm its e-mail) before the panel opens.
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterRequest>,
) -> Html<String> {
    let alert = match state
        .gate
        .register(&state.supabase, &form.email, &form.password)
        .await
    {
        Ok(()) => Alert::success("Cadastro realizado! Verifique seu e-mail para confirmar a conta."),
        Err(e) => Alert::error(&e),
    };
    Html(pages::admin_auth_page(Some(&alert), ""))
}

pub async fn logout(State(state): State<AppState>, token: SessionToken) -> Response {
    state.gate.logout(&state.supabase, token.as_deref()).await;
    (
        [(header::SET_COOKIE, clear_session_cookie())],
        Redirect::to("/admin?alert=logout"),
    )
        .into_response()
}
