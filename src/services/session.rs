use axum::http::{header, HeaderMap};
use tokio::sync::broadcast;

use crate::error::SiteError;
use crate::models::session::{AuthEvent, Session};
use crate::services::supabase::Supabase;

/// Cookie carrying the collaborator access token between requests.
pub const SESSION_COOKIE: &str = "mural_session";

/// GoTrue's default minimum; checked here so bad signups never leave the site.
const MIN_PASSWORD_LEN: usize = 6;

/// Extract a named cookie value from request headers.
pub fn get_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|part| {
            let part = part.trim();
            if part.starts_with(&prefix) {
                Some(part[prefix.len()..].to_string())
            } else {
                None
            }
        })
}

/// `Set-Cookie` value installing a session.
pub fn session_cookie(access_token: &str) -> String {
    format!("{SESSION_COOKIE}={access_token}; HttpOnly; SameSite=Lax; Path=/")
}

/// `Set-Cookie` value dropping the session.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0")
}

/// Decides whether a request carries a live admin session and owns the
/// session-change announcements. There is no ambient current user: every
/// admin render asks the gate, and the gate asks the auth collaborator.
pub struct SessionGate {
    events: broadcast::Sender<AuthEvent>,
}

impl SessionGate {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(16);
        Self { events }
    }

    /// Subscribe to sign-in/sign-out announcements.
    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }

    fn announce(&self, event: AuthEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    /// The session this request belongs to, if its cookie token still
    /// resolves to a user on the auth collaborator. Called fresh on every
    /// admin render; an unreachable collaborator reads as signed out.
    pub async fn current(&self, supabase: &Supabase, token: Option<&str>) -> Option<Session> {
        let token = token?;
        supabase.get_user(token).await.ok()
    }

    pub async fn login(
        &self,
        supabase: &Supabase,
        email: &str,
        password: &str,
    ) -> Result<Session, SiteError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(SiteError::Validation("Preencha e-mail e senha!".into()));
        }
        let session = supabase.sign_in_with_password(email, password).await?;
        self.announce(AuthEvent::SignedIn {
            email: session.user.email.clone(),
        });
        Ok(session)
    }

    /// Create an admin account. Does not sign the user in; GoTrue may still
    /// want the address confirmed first.
    pub async fn register(
        &self,
        supabase: &Supabase,
        email: &str,
        password: &str,
    ) -> Result<(), SiteError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(SiteError::Validation("Preencha e-mail e senha!".into()));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(SiteError::Validation(
                "A senha deve ter pelo menos 6 caracteres!".into(),
            ));
        }
        supabase.sign_up(email, password).await
    }

    /// End the session behind the given token. A collaborator failure is
    /// logged but never keeps the session alive locally; the caller clears
    /// the cookie regardless.
    pub async fn logout(&self, supabase: &Supabase, token: Option<&str>) {
        if let Some(token) = token {
            if let Err(e) = supabase.sign_out(token).await {
                tracing::warn!("sign-out on the auth collaborator failed: {e}");
            }
        }
        self.announce(AuthEvent::SignedOut);
    }
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new()
    }
}
