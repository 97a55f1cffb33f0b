use axum::{extract::State, response::Html, Form};

use crate::{
    models::feedback::NewFeedback,
    render::Alert,
    services::feedback::FeedbackService,
    AppState,
};

use super::pages::render_home;

/// Record a visitor's feedback. Success resets the form and the star
/// strip; failure re-renders it with everything the visitor typed and
/// rated still in place.
pub async fn submit(State(state): State<AppState>, Form(form): Form<NewFeedback>) -> Html<String> {
    let draft = form.clone();
    match FeedbackService::create(&state.supabase, form).await {
        Ok(()) => {
            let alert = Alert::success("Obrigado pelo seu feedback!");
            Html(render_home(&state, Some(&alert), &NewFeedback::default()).await)
        }
        Err(e) => {
            let alert = Alert::error(&e);
            Html(render_home(&state, Some(&alert), &draft).await)
        }
    }
}
