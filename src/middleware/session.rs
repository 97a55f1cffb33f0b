use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::services::session::{get_cookie, SESSION_COOKIE};

/// The raw session cookie value, if the request carries one. Turning it
/// into a live user is the gate's job; this extractor never touches the
/// network and never rejects, so public pages use it too.
#[derive(Debug, Clone)]
pub struct SessionToken(pub Option<String>);

impl SessionToken {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(SessionToken(get_cookie(&parts.headers, SESSION_COOKIE)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, Request};

    #[tokio::test]
    async fn extracts_the_session_cookie_when_present() {
        let request = Request::builder()
            .uri("/admin")
            .header(header::COOKIE, "mural_session=tok-xyz; theme=light")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let token = SessionToken::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(token.as_deref(), Some("tok-xyz"));
    }

    #[tokio::test]
    async fn extracts_none_when_the_cookie_is_absent() {
        let request = Request::builder().uri("/").body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let token = SessionToken::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(token.as_deref(), None);
    }
}
